//! Wire mapping for the external random-identity service.

use entities::InstructorSuggestion;
use serde::Deserialize;

use crate::{StoreError, StoreResult};

/// Top-level response of the identity service.
#[derive(Debug, Deserialize)]
pub(crate) struct SuggestionResponse {
    results: Vec<SuggestionResult>,
}

#[derive(Debug, Deserialize)]
struct SuggestionResult {
    name: SuggestionName,
    email: String,
    picture: SuggestionPicture,
}

#[derive(Debug, Deserialize)]
struct SuggestionName {
    first: String,
    last: String,
}

#[derive(Debug, Deserialize)]
struct SuggestionPicture {
    large: String,
}

impl SuggestionResponse {
    /// Maps the first generated identity to an [`InstructorSuggestion`].
    pub(crate) fn into_suggestion(self) -> StoreResult<InstructorSuggestion> {
        let result = self
            .results
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::Decode("suggestion response had no results".to_string()))?;

        Ok(InstructorSuggestion {
            name: format!("{} {}", result.name.first, result.name.last),
            email: result.email,
            picture: result.picture.large,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_first_result() {
        let response: SuggestionResponse = serde_json::from_str(
            r#"{"results": [{
                "name": {"title": "Ms", "first": "Ana", "last": "Souza"},
                "email": "ana.souza@example.com",
                "picture": {"large": "https://example.com/l.jpg",
                            "medium": "https://example.com/m.jpg",
                            "thumbnail": "https://example.com/t.jpg"}
            }], "info": {"seed": "x", "results": 1}}"#,
        )
        .unwrap();

        let suggestion = response.into_suggestion().unwrap();
        assert_eq!(suggestion.name, "Ana Souza");
        assert_eq!(suggestion.picture, "https://example.com/l.jpg");
    }

    #[test]
    fn test_empty_results_is_an_error() {
        let response: SuggestionResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.into_suggestion().is_err());
    }
}
