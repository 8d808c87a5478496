//! Store gateway configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the store gateway.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the data store.
    #[serde(default = "default_store_url")]
    pub base_url: String,

    /// Endpoint of the external random-identity service.
    #[serde(default = "default_suggestion_url")]
    pub suggestion_url: String,

    /// Nationality parameter for generated identities.
    #[serde(default = "default_suggestion_nationality")]
    pub suggestion_nationality: String,
}

fn default_store_url() -> String {
    "http://localhost:3001".to_string()
}

fn default_suggestion_url() -> String {
    "https://randomuser.me/api/".to_string()
}

fn default_suggestion_nationality() -> String {
    "br".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_store_url(),
            suggestion_url: default_suggestion_url(),
            suggestion_nationality: default_suggestion_nationality(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from the environment, falling back to the local
    /// development defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("COURSE_SPHERE_STORE_URL") {
            config.base_url = url;
        }

        if let Ok(url) = std::env::var("COURSE_SPHERE_SUGGESTION_URL") {
            config.suggestion_url = url;
        }

        if let Ok(nat) = std::env::var("COURSE_SPHERE_SUGGESTION_NAT") {
            config.suggestion_nationality = nat;
        }

        config
    }
}
