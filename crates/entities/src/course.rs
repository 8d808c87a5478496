//! Course entity definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A course as stored remotely.
///
/// `instructors` always contains `creator_id`; the mutation helpers below
/// keep that invariant and never let duplicate ids accumulate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier assigned by the store.
    #[serde(deserialize_with = "crate::id::numeric_id")]
    pub id: u64,
    /// Course name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,
    /// First day of the course.
    pub start_date: NaiveDate,
    /// Last day of the course, strictly after `start_date`.
    pub end_date: NaiveDate,
    /// The user who created the course; immutable after creation.
    #[serde(deserialize_with = "crate::id::numeric_id")]
    pub creator_id: u64,
    /// Ids of all instructors, creator included.
    #[serde(deserialize_with = "crate::id::numeric_id_list")]
    pub instructors: Vec<u64>,
}

impl Course {
    /// Whether the given user created this course.
    pub fn is_creator(&self, user_id: u64) -> bool {
        self.creator_id == user_id
    }

    /// Whether the given user is on the instructor roster.
    pub fn has_instructor(&self, user_id: u64) -> bool {
        self.instructors.contains(&user_id)
    }

    /// Returns a copy with the given instructor appended, skipping duplicates.
    pub fn with_instructor(mut self, user_id: u64) -> Self {
        if !self.instructors.contains(&user_id) {
            self.instructors.push(user_id);
        }
        self
    }

    /// Returns a copy with the given instructor removed.
    ///
    /// Callers must reject removal of the creator before calling this; the
    /// method itself is a plain set operation.
    pub fn without_instructor(mut self, user_id: u64) -> Self {
        self.instructors.retain(|id| *id != user_id);
        self
    }
}

/// Payload for creating a course; the store assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewCourse {
    /// Course name.
    pub name: String,
    /// Optional free-form description.
    pub description: Option<String>,
    /// First day of the course.
    pub start_date: NaiveDate,
    /// Last day of the course.
    pub end_date: NaiveDate,
    /// The creating user, who becomes the sole initial instructor.
    pub creator_id: u64,
    /// Initial roster, always `[creator_id]`.
    pub instructors: Vec<u64>,
}

impl NewCourse {
    /// Builds a creation payload with the creator as sole instructor.
    pub fn created_by(
        creator_id: u64,
        name: impl Into<String>,
        description: Option<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            description,
            start_date,
            end_date,
            creator_id,
            instructors: vec![creator_id],
        }
    }
}
