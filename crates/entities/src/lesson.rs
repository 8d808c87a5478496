//! Lesson entity definitions.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Publication status of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    /// Not yet visible to students.
    #[default]
    Draft,
    /// Live.
    Published,
    /// Retired from the catalog.
    Archived,
}

impl LessonStatus {
    /// The wire representation of the status.
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonStatus::Draft => "draft",
            LessonStatus::Published => "published",
            LessonStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for LessonStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LessonStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(LessonStatus::Draft),
            "published" => Ok(LessonStatus::Published),
            "archived" => Ok(LessonStatus::Archived),
            other => Err(format!("unknown lesson status: {other:?}")),
        }
    }
}

/// A lesson belonging to a course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    /// Unique identifier assigned by the store.
    #[serde(deserialize_with = "crate::id::numeric_id")]
    pub id: u64,
    /// The course this lesson belongs to; immutable.
    #[serde(deserialize_with = "crate::id::numeric_id")]
    pub course_id: u64,
    /// The instructor who added the lesson.
    #[serde(deserialize_with = "crate::id::numeric_id")]
    pub creator_id: u64,
    /// Lesson title, at least 3 characters.
    pub title: String,
    /// Publication status.
    pub status: LessonStatus,
    /// Scheduled publication date.
    pub publish_date: NaiveDate,
    /// Where the lesson video lives.
    pub video_url: String,
}

/// Payload for creating a lesson; the store assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewLesson {
    /// The course this lesson belongs to.
    pub course_id: u64,
    /// The instructor adding the lesson.
    pub creator_id: u64,
    /// Lesson title.
    pub title: String,
    /// Publication status.
    pub status: LessonStatus,
    /// Scheduled publication date.
    pub publish_date: NaiveDate,
    /// Where the lesson video lives.
    pub video_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trips_through_wire_form() {
        for status in [
            LessonStatus::Draft,
            LessonStatus::Published,
            LessonStatus::Archived,
        ] {
            assert_eq!(status.as_str().parse::<LessonStatus>().unwrap(), status);
        }
        assert!("live".parse::<LessonStatus>().is_err());
    }

    #[test]
    fn test_lesson_deserializes_lowercase_status() {
        let lesson: Lesson = serde_json::from_str(
            r#"{"id": 1, "course_id": 1, "creator_id": 10, "title": "Intro",
                "status": "published", "publish_date": "2024-02-01",
                "video_url": "https://videos.example.com/intro"}"#,
        )
        .unwrap();
        assert_eq!(lesson.status, LessonStatus::Published);
    }
}
