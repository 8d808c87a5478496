//! CLI configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use store_client::StoreConfig;

/// Configuration for the terminal client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    /// Remote store and suggestion-service endpoints.
    #[serde(default)]
    pub store: StoreConfig,

    /// Log level for the tracing subscriber.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Session slot location; defaults to the per-user config directory.
    #[serde(default)]
    pub session_file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            store: StoreConfig::default(),
            log_level: default_log_level(),
            session_file: None,
        }
    }
}

impl CliConfig {
    /// Loads configuration from the environment.
    pub fn load() -> Self {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let mut config = Self {
            store: StoreConfig::from_env(),
            ..Self::default()
        };

        if let Ok(level) = std::env::var("COURSE_SPHERE_LOG_LEVEL") {
            config.log_level = level;
        }

        if let Ok(path) = std::env::var("COURSE_SPHERE_SESSION_FILE") {
            config.session_file = Some(PathBuf::from(path));
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.store.base_url, "http://localhost:3001");
        assert_eq!(config.log_level, "warn");
        assert!(config.session_file.is_none());
    }
}
