//! The entity cache for one open course.

use entities::{Course, Lesson, User};
use store_client::StoreClient;
use tracing::debug;

use crate::{
    can_edit_lesson, lesson_page, CoursePermissions, CourseStateError, CourseStateResult,
    LessonFilter, LessonView,
};

/// In-memory cache of the active course, its resolved instructors, and its
/// full lesson collection.
///
/// Loading is gated on instructor membership; nothing is cached when the gate
/// rejects. After any mutation the affected collection is re-fetched
/// wholesale rather than patched, trading efficiency for consistency
/// simplicity.
#[derive(Debug)]
pub struct CourseWorkspace {
    pub(crate) client: StoreClient,
    pub(crate) user: User,
    pub(crate) course: Course,
    pub(crate) instructors: Vec<User>,
    pub(crate) lessons: Vec<Lesson>,
}

impl CourseWorkspace {
    /// Opens a course for the given user.
    ///
    /// Fails with `AccessDenied` when the user is not on the instructor
    /// roster; the course fetch result is discarded in that case.
    pub async fn load(client: StoreClient, user: User, course_id: u64) -> CourseStateResult<Self> {
        let course = client.get_course(course_id).await?;

        if !course.has_instructor(user.id) {
            return Err(CourseStateError::AccessDenied(
                "You are not an instructor of this course".to_string(),
            ));
        }

        let instructors = client.get_users_by_ids(&course.instructors).await?;
        let lessons = client.list_lessons(course.id).await?;
        debug!(
            course_id = course.id,
            instructors = instructors.len(),
            lessons = lessons.len(),
            "Course workspace loaded"
        );

        Ok(Self {
            client,
            user,
            course,
            instructors,
            lessons,
        })
    }

    /// The cached course record.
    pub fn course(&self) -> &Course {
        &self.course
    }

    /// The resolved instructor records, in roster order.
    pub fn instructors(&self) -> &[User] {
        &self.instructors
    }

    /// The full cached lesson collection.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// The user this workspace was opened for.
    pub fn user(&self) -> &User {
        &self.user
    }

    /// The permission set the session user holds over this course.
    pub fn permissions(&self) -> CoursePermissions {
        CoursePermissions::for_user(self.user.id, &self.course)
    }

    /// Whether the session user may edit or delete the given lesson.
    pub fn can_edit_lesson(&self, lesson: &Lesson) -> bool {
        can_edit_lesson(self.user.id, &self.course, lesson)
    }

    /// Derives the visible lesson page under a filter.
    pub fn visible_lessons(&self, filter: &LessonFilter) -> LessonView<'_> {
        lesson_page(&self.lessons, filter)
    }

    /// Re-fetches the course and its resolved instructor records wholesale.
    pub async fn refresh_instructors(&mut self) -> CourseStateResult<()> {
        self.course = self.client.get_course(self.course.id).await?;
        self.instructors = self.client.get_users_by_ids(&self.course.instructors).await?;
        debug!(course_id = self.course.id, "Instructor roster refreshed");
        Ok(())
    }

    /// Re-fetches the full lesson collection wholesale.
    pub async fn refresh_lessons(&mut self) -> CourseStateResult<()> {
        self.lessons = self.client.list_lessons(self.course.id).await?;
        debug!(course_id = self.course.id, "Lesson collection refreshed");
        Ok(())
    }

    /// Looks up a lesson in the cached collection.
    pub(crate) fn find_lesson(&self, lesson_id: u64) -> CourseStateResult<&Lesson> {
        self.lessons
            .iter()
            .find(|l| l.id == lesson_id)
            .ok_or(CourseStateError::LessonNotFound(lesson_id))
    }
}
