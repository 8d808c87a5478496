//! Client for the remote data store and the suggestion service.

use entities::{Course, InstructorSuggestion, Lesson, NewCourse, NewLesson, NewUser, User, UserRecord};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::suggestion::SuggestionResponse;
use crate::{StoreConfig, StoreError, StoreResult};

/// Client for the remote data store.
///
/// One method per resource-verb pair. Every call is a single request with no
/// retry or timeout policy beyond the transport default; failures normalize
/// into [`StoreError`].
#[derive(Debug, Clone)]
pub struct StoreClient {
    config: StoreConfig,
    http_client: reqwest::Client,
}

impl StoreClient {
    /// Creates a new store client.
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            http_client: reqwest::Client::new(),
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Sends a request and checks the response status.
    async fn execute(&self, request: reqwest::RequestBuilder) -> StoreResult<reqwest::Response> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
            });
        }

        Ok(response)
    }

    /// Sends a request and decodes the JSON body.
    async fn fetch<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> StoreResult<T> {
        self.execute(request)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Lists raw user records matching an email address.
    ///
    /// Returns the raw store shape because the login flow needs to compare
    /// the stored credential; everything else should convert to [`User`]
    /// immediately.
    pub async fn find_users_by_email(&self, email: &str) -> StoreResult<Vec<UserRecord>> {
        debug!(email = %email, "Fetching users by email");
        self.fetch(
            self.http_client
                .get(self.url("/users"))
                .query(&[("email", email)]),
        )
        .await
    }

    /// Resolves a set of user ids into full user records.
    ///
    /// An empty id set short-circuits to an empty list without a request.
    pub async fn get_users_by_ids(&self, ids: &[u64]) -> StoreResult<Vec<User>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = ids.len(), "Resolving users by id");
        let query: Vec<(&str, String)> = ids.iter().map(|id| ("id", id.to_string())).collect();
        let records: Vec<UserRecord> = self
            .fetch(self.http_client.get(self.url("/users")).query(&query))
            .await?;

        Ok(records.into_iter().map(UserRecord::into_user).collect())
    }

    /// Creates a user; the store assigns the id.
    pub async fn create_user(&self, new_user: &NewUser) -> StoreResult<User> {
        debug!(email = %new_user.email, "Creating user");
        let record: UserRecord = self
            .fetch(self.http_client.post(self.url("/users")).json(new_user))
            .await?;
        Ok(record.into_user())
    }

    // =========================================================================
    // Courses
    // =========================================================================

    /// Lists all courses.
    pub async fn list_courses(&self) -> StoreResult<Vec<Course>> {
        debug!("Listing courses");
        self.fetch(self.http_client.get(self.url("/courses"))).await
    }

    /// Fetches a single course by id.
    pub async fn get_course(&self, course_id: u64) -> StoreResult<Course> {
        debug!(course_id, "Fetching course");
        self.fetch(self.http_client.get(self.url(&format!("/courses/{course_id}"))))
            .await
    }

    /// Creates a course; the store assigns the id.
    pub async fn create_course(&self, new_course: &NewCourse) -> StoreResult<Course> {
        debug!(name = %new_course.name, "Creating course");
        self.fetch(self.http_client.post(self.url("/courses")).json(new_course))
            .await
    }

    /// Replaces a course record wholesale. Last writer wins.
    pub async fn replace_course(&self, course: &Course) -> StoreResult<Course> {
        debug!(course_id = course.id, "Replacing course");
        self.fetch(
            self.http_client
                .put(self.url(&format!("/courses/{}", course.id)))
                .json(course),
        )
        .await
    }

    // =========================================================================
    // Lessons
    // =========================================================================

    /// Lists the full lesson collection of a course.
    pub async fn list_lessons(&self, course_id: u64) -> StoreResult<Vec<Lesson>> {
        debug!(course_id, "Listing lessons");
        self.fetch(
            self.http_client
                .get(self.url("/lessons"))
                .query(&[("course_id", course_id.to_string())]),
        )
        .await
    }

    /// Creates a lesson; the store assigns the id.
    pub async fn create_lesson(&self, new_lesson: &NewLesson) -> StoreResult<Lesson> {
        debug!(course_id = new_lesson.course_id, "Creating lesson");
        self.fetch(self.http_client.post(self.url("/lessons")).json(new_lesson))
            .await
    }

    /// Replaces a lesson record wholesale.
    pub async fn replace_lesson(&self, lesson: &Lesson) -> StoreResult<Lesson> {
        debug!(lesson_id = lesson.id, "Replacing lesson");
        self.fetch(
            self.http_client
                .put(self.url(&format!("/lessons/{}", lesson.id)))
                .json(lesson),
        )
        .await
    }

    /// Deletes a lesson.
    pub async fn delete_lesson(&self, lesson_id: u64) -> StoreResult<()> {
        debug!(lesson_id, "Deleting lesson");
        self.execute(
            self.http_client
                .delete(self.url(&format!("/lessons/{lesson_id}"))),
        )
        .await?;
        Ok(())
    }

    // =========================================================================
    // Instructor suggestions
    // =========================================================================

    /// Fetches one generated identity from the external suggestion service.
    pub async fn suggest_instructor(&self) -> StoreResult<InstructorSuggestion> {
        debug!(nationality = %self.config.suggestion_nationality, "Fetching instructor suggestion");
        let response: SuggestionResponse = self
            .fetch(self.http_client.get(&self.config.suggestion_url).query(&[
                ("nat", self.config.suggestion_nationality.as_str()),
                ("inc", "name,email,picture"),
            ]))
            .await?;

        response.into_suggestion()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = StoreClient::new(StoreConfig {
            base_url: "http://localhost:3001/".to_string(),
            ..StoreConfig::default()
        });
        assert_eq!(client.url("/courses"), "http://localhost:3001/courses");
    }
}
