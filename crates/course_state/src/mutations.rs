//! Orchestrated writes against the remote store.
//!
//! Every successful mutation path ends in a wholesale refresh of the affected
//! cached collection. Multi-step writes have no compensating-transaction
//! logic: a failure partway through leaves whatever prior steps succeeded in
//! place.

use entities::{Course, InstructorSuggestion, Lesson, NewCourse, NewLesson, NewUser, User};
use store_client::StoreClient;
use tracing::info;

use crate::{
    ensure_removable, CourseForm, CourseStateError, CourseStateResult, CourseWorkspace, LessonForm,
};

impl CourseWorkspace {
    fn ensure_can_manage_instructors(&self) -> CourseStateResult<()> {
        if !self.permissions().can_manage_instructors {
            return Err(CourseStateError::AccessDenied(
                "Only the course creator can manage instructors".to_string(),
            ));
        }
        Ok(())
    }

    /// Persists a suggested instructor as a user and adds them to the roster.
    ///
    /// Two-phase write: the user is created first, then the course record is
    /// replaced with the extended roster. If the replace fails, the created
    /// user stays in the store unattached to any course.
    pub async fn add_instructor(
        &mut self,
        suggestion: InstructorSuggestion,
    ) -> CourseStateResult<User> {
        self.ensure_can_manage_instructors()?;

        let created = self
            .client
            .create_user(&NewUser::from_suggestion(suggestion))
            .await?;

        let updated = self.course.clone().with_instructor(created.id);
        self.client.replace_course(&updated).await?;
        info!(
            course_id = self.course.id,
            user_id = created.id,
            "Instructor added"
        );

        self.refresh_instructors().await?;
        Ok(created)
    }

    /// Removes an instructor from the roster.
    ///
    /// Removing the creator is rejected before any network call.
    pub async fn remove_instructor(&mut self, target_id: u64) -> CourseStateResult<()> {
        self.ensure_can_manage_instructors()?;
        ensure_removable(&self.course, target_id)?;

        let updated = self.course.clone().without_instructor(target_id);
        self.client.replace_course(&updated).await?;
        info!(
            course_id = self.course.id,
            user_id = target_id,
            "Instructor removed"
        );

        self.refresh_instructors().await?;
        Ok(())
    }

    /// Creates a lesson from the form and refreshes the lesson collection.
    pub async fn create_lesson(&mut self, form: &LessonForm) -> CourseStateResult<Lesson> {
        if !self.permissions().can_add_lesson {
            return Err(CourseStateError::AccessDenied(
                "Only instructors of this course can add lessons".to_string(),
            ));
        }
        form.validate()?;

        let publish_date = form
            .publish_date
            .ok_or_else(|| CourseStateError::Validation("A publish date is required".to_string()))?;

        let created = self
            .client
            .create_lesson(&NewLesson {
                course_id: self.course.id,
                creator_id: self.user.id,
                title: form.title.clone(),
                status: form.status,
                publish_date,
                video_url: form.video_url.clone(),
            })
            .await?;
        info!(lesson_id = created.id, "Lesson created");

        self.refresh_lessons().await?;
        Ok(created)
    }

    /// Updates a lesson by merging the form onto the cached full record.
    ///
    /// Full-record replace semantics: fields the form does not edit come from
    /// the previously fetched record, not from a partial patch.
    pub async fn update_lesson(
        &mut self,
        lesson_id: u64,
        form: &LessonForm,
    ) -> CourseStateResult<Lesson> {
        let mut lesson = self.find_lesson(lesson_id)?.clone();

        if !self.can_edit_lesson(&lesson) {
            return Err(CourseStateError::AccessDenied(
                "Only the course creator or the lesson creator can edit this lesson".to_string(),
            ));
        }
        form.validate()?;

        form.apply_to(&mut lesson);
        let replaced = self.client.replace_lesson(&lesson).await?;
        info!(lesson_id, "Lesson updated");

        self.refresh_lessons().await?;
        Ok(replaced)
    }

    /// Deletes a lesson and refreshes the lesson collection.
    pub async fn delete_lesson(&mut self, lesson_id: u64) -> CourseStateResult<()> {
        let lesson = self.find_lesson(lesson_id)?;

        if !self.can_edit_lesson(lesson) {
            return Err(CourseStateError::AccessDenied(
                "Only the course creator or the lesson creator can delete this lesson".to_string(),
            ));
        }

        self.client.delete_lesson(lesson_id).await?;
        info!(lesson_id, "Lesson deleted");

        self.refresh_lessons().await?;
        Ok(())
    }
}

/// Creates a course from the form; the creating user becomes the sole
/// initial instructor.
pub async fn create_course(
    client: &StoreClient,
    user: &User,
    form: &CourseForm,
) -> CourseStateResult<Course> {
    form.validate()?;

    let (start_date, end_date) = match (form.start_date, form.end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => {
            return Err(CourseStateError::Validation(
                "Start and end dates are required".to_string(),
            ))
        }
    };

    let created = client
        .create_course(&NewCourse::created_by(
            user.id,
            form.name.clone(),
            form.description.clone(),
            start_date,
            end_date,
        ))
        .await?;
    info!(course_id = created.id, "Course created");
    Ok(created)
}

/// Updates a course by re-fetching the record and merging the form onto it.
///
/// Creator-only; the roster and creator fields are untouched by the merge.
pub async fn update_course(
    client: &StoreClient,
    user: &User,
    course_id: u64,
    form: &CourseForm,
) -> CourseStateResult<Course> {
    form.validate()?;

    let mut course = client.get_course(course_id).await?;
    if !course.is_creator(user.id) {
        return Err(CourseStateError::AccessDenied(
            "Only the course creator can edit this course".to_string(),
        ));
    }

    form.apply_to(&mut course);
    let replaced = client.replace_course(&course).await?;
    info!(course_id, "Course updated");
    Ok(replaced)
}

/// Lists the courses the user created or teaches.
pub async fn courses_for_user(client: &StoreClient, user: &User) -> CourseStateResult<Vec<Course>> {
    let courses = client.list_courses().await?;
    Ok(courses
        .into_iter()
        .filter(|course| course.has_instructor(user.id) || course.is_creator(user.id))
        .collect())
}
