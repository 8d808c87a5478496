//! Form data and local validation.
//!
//! Validation runs before any network call and blocks submission with a
//! readable message. Edit forms merge onto the previously fetched full record
//! so fields the form does not carry are never dropped by the full-record
//! replace.

use chrono::NaiveDate;
use entities::{Course, Lesson, LessonStatus};
use serde::{Deserialize, Serialize};

use crate::{CourseStateError, CourseStateResult};

/// Minimum length for course names and lesson titles.
const MIN_NAME_LEN: usize = 3;

/// Form data for creating or editing a course.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseForm {
    /// Course name, at least 3 characters.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Required start date.
    pub start_date: Option<NaiveDate>,
    /// Required end date, strictly after the start date.
    pub end_date: Option<NaiveDate>,
}

impl CourseForm {
    /// Pre-fills the form from an existing course record.
    pub fn from_course(course: &Course) -> Self {
        Self {
            name: course.name.clone(),
            description: course.description.clone(),
            start_date: Some(course.start_date),
            end_date: Some(course.end_date),
        }
    }

    /// Runs the local field checks.
    pub fn validate(&self) -> CourseStateResult<()> {
        if self.name.chars().count() < MIN_NAME_LEN {
            return Err(CourseStateError::Validation(
                "The course name must be at least 3 characters long".to_string(),
            ));
        }

        let (start, end) = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(CourseStateError::Validation(
                    "Start and end dates are required".to_string(),
                ))
            }
        };

        if end <= start {
            return Err(CourseStateError::Validation(
                "The end date must be after the start date".to_string(),
            ));
        }

        Ok(())
    }

    /// Merges the form fields onto an existing record.
    ///
    /// Only call after [`CourseForm::validate`]; the id, creator, and roster
    /// are untouched.
    pub fn apply_to(&self, course: &mut Course) {
        course.name = self.name.clone();
        course.description = self.description.clone();
        if let Some(start) = self.start_date {
            course.start_date = start;
        }
        if let Some(end) = self.end_date {
            course.end_date = end;
        }
    }
}

/// Form data for creating or editing a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonForm {
    /// Lesson title, at least 3 characters.
    pub title: String,
    /// Publication status; defaults to draft.
    pub status: LessonStatus,
    /// Required publication date.
    pub publish_date: Option<NaiveDate>,
    /// Required video URL.
    pub video_url: String,
}

impl Default for LessonForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            status: LessonStatus::Draft,
            publish_date: None,
            video_url: String::new(),
        }
    }
}

impl LessonForm {
    /// Pre-fills the form from an existing lesson record.
    pub fn from_lesson(lesson: &Lesson) -> Self {
        Self {
            title: lesson.title.clone(),
            status: lesson.status,
            publish_date: Some(lesson.publish_date),
            video_url: lesson.video_url.clone(),
        }
    }

    /// Runs the local field checks.
    pub fn validate(&self) -> CourseStateResult<()> {
        if self.title.chars().count() < MIN_NAME_LEN {
            return Err(CourseStateError::Validation(
                "The lesson title must be at least 3 characters long".to_string(),
            ));
        }

        if self.publish_date.is_none() {
            return Err(CourseStateError::Validation(
                "A publish date is required".to_string(),
            ));
        }

        if self.video_url.is_empty() {
            return Err(CourseStateError::Validation(
                "A video URL is required".to_string(),
            ));
        }

        Ok(())
    }

    /// Merges the form fields onto an existing record.
    ///
    /// Only call after [`LessonForm::validate`]; the id, course, and creator
    /// are untouched.
    pub fn apply_to(&self, lesson: &mut Lesson) {
        lesson.title = self.title.clone();
        lesson.status = self.status;
        if let Some(date) = self.publish_date {
            lesson.publish_date = date;
        }
        lesson.video_url = self.video_url.clone();
    }
}
