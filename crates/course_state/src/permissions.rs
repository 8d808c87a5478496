//! The authorization gate.
//!
//! Pure functions of session identity and course record. The creator holds
//! course-level authority; any rostered instructor may add lessons; lessons
//! are editable by the course creator or the lesson's own creator.

use entities::{Course, Lesson};

use crate::{CourseStateError, CourseStateResult};

/// The permission set a user holds over a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoursePermissions {
    /// Edit the course record itself.
    pub can_edit_course: bool,
    /// Add and remove instructors.
    pub can_manage_instructors: bool,
    /// Add lessons to the course.
    pub can_add_lesson: bool,
}

impl CoursePermissions {
    /// Computes the permission set for a user over a course.
    pub fn for_user(user_id: u64, course: &Course) -> Self {
        let is_creator = course.is_creator(user_id);
        Self {
            can_edit_course: is_creator,
            can_manage_instructors: is_creator,
            can_add_lesson: course.has_instructor(user_id),
        }
    }
}

/// Whether a user may edit or delete a lesson.
///
/// True for the course creator or the lesson's own creator, even if the
/// lesson creator has since left the instructor roster.
pub fn can_edit_lesson(user_id: u64, course: &Course, lesson: &Lesson) -> bool {
    course.is_creator(user_id) || lesson.creator_id == user_id
}

/// Rejects removal of the course creator from the instructor roster.
///
/// The rejection is unconditional: it does not depend on who requests the
/// removal.
pub fn ensure_removable(course: &Course, target_id: u64) -> CourseStateResult<()> {
    if course.is_creator(target_id) {
        return Err(CourseStateError::AccessDenied(
            "The course creator cannot be removed from the instructor roster".to_string(),
        ));
    }
    Ok(())
}
