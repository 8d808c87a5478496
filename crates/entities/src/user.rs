//! User-related entity definitions.

use serde::{Deserialize, Serialize};

/// A registered user, as the client sees one after login.
///
/// The credential field never appears here: [`UserRecord::into_user`] strips
/// it before a user leaves the gateway layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier assigned by the store.
    #[serde(deserialize_with = "crate::id::numeric_id")]
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address, unique per user.
    pub email: String,
}

/// A raw user record as the store returns it from `/users`.
///
/// Only the login flow may look at `password`; everything else converts to
/// [`User`] immediately.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    /// Unique identifier assigned by the store.
    #[serde(deserialize_with = "crate::id::numeric_id")]
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Opaque credential, plain-compared at login.
    #[serde(default)]
    pub password: Option<String>,
    /// Profile picture URL, present for suggestion-created users.
    #[serde(default)]
    pub picture: Option<String>,
}

impl UserRecord {
    /// Converts to a [`User`], discarding the credential and picture.
    pub fn into_user(self) -> User {
        User {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Payload for creating a user; the store assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Opaque credential, absent for suggestion-created users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Profile picture URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

impl NewUser {
    /// Builds a user payload from an instructor suggestion.
    pub fn from_suggestion(suggestion: InstructorSuggestion) -> Self {
        Self {
            name: suggestion.name,
            email: suggestion.email,
            password: None,
            picture: Some(suggestion.picture),
        }
    }
}

/// A candidate instructor produced by the external random-identity service.
///
/// Has no id: one is only assigned once the candidate is persisted as a
/// [`User`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructorSuggestion {
    /// Full display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Profile picture URL.
    pub picture: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_user_strips_credential() {
        let record: UserRecord = serde_json::from_str(
            r#"{"id": 10, "name": "Maria", "email": "maria@example.com", "password": "s3cret"}"#,
        )
        .unwrap();

        let user = record.into_user();
        assert_eq!(user.id, 10);
        assert_eq!(user.email, "maria@example.com");
        assert!(!serde_json::to_string(&user).unwrap().contains("s3cret"));
    }

    #[test]
    fn test_new_user_from_suggestion_omits_password() {
        let payload = NewUser::from_suggestion(InstructorSuggestion {
            name: "Ana Souza".to_string(),
            email: "ana@example.com".to_string(),
            picture: "https://example.com/ana.jpg".to_string(),
        });

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["picture"], "https://example.com/ana.jpg");
    }
}
