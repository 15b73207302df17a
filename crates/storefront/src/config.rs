//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_TOKEN_KEY` - Storage key for the session credential (default: commerce-token)
//! - `STOREFRONT_STORAGE_PATH` - Key-value storage file (default: .gadgetry/storage.json)
//! - `STOREFRONT_COLOR_TABLE` - JSON colour table replacing the built-in one
//! - `STOREFRONT_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Tracing filter directives

use std::path::PathBuf;

use thiserror::Error;

use gadgetry_core::ColorTable;

use crate::services::auth::{DEFAULT_TOKEN_KEY, TokenService};
use crate::storage::FileStore;
use crate::telemetry::LogFormat;

const TOKEN_KEY_VAR: &str = "STOREFRONT_TOKEN_KEY";
const STORAGE_PATH_VAR: &str = "STOREFRONT_STORAGE_PATH";
const COLOR_TABLE_VAR: &str = "STOREFRONT_COLOR_TABLE";
const LOG_FORMAT_VAR: &str = "STOREFRONT_LOG_FORMAT";

const DEFAULT_STORAGE_PATH: &str = ".gadgetry/storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Storage key the session credential lives under
    pub token_key: String,
    /// Path of the key-value storage file
    pub storage_path: PathBuf,
    /// Optional colour table file
    pub color_table_path: Option<PathBuf>,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            color_table_path: None,
            log_format: LogFormat::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let token_key = get_or_default(&lookup, TOKEN_KEY_VAR, DEFAULT_TOKEN_KEY);
        if token_key.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar(
                TOKEN_KEY_VAR.to_string(),
                "must not be empty".to_string(),
            ));
        }

        let storage_path = PathBuf::from(get_or_default(
            &lookup,
            STORAGE_PATH_VAR,
            DEFAULT_STORAGE_PATH,
        ));
        let color_table_path = get_optional(&lookup, COLOR_TABLE_VAR).map(PathBuf::from);
        let log_format = get_or_default(&lookup, LOG_FORMAT_VAR, "pretty")
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::InvalidEnvVar(LOG_FORMAT_VAR.to_string(), e))?;

        Ok(Self {
            token_key,
            storage_path,
            color_table_path,
            log_format,
        })
    }

    /// Token service backed by the configured storage file and key.
    #[must_use]
    pub fn token_service(&self) -> TokenService<FileStore> {
        TokenService::with_key(FileStore::new(&self.storage_path), &self.token_key)
    }

    /// Load the configured colour table, or the built-in one if none is set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if the file cannot be read or is
    /// not a valid colour table.
    pub fn load_color_table(&self) -> Result<ColorTable, ConfigError> {
        let Some(path) = &self.color_table_path else {
            return Ok(ColorTable::default());
        };

        let invalid = |reason: String| {
            ConfigError::InvalidEnvVar(
                COLOR_TABLE_VAR.to_string(),
                format!("{}: {reason}", path.display()),
            )
        };

        let json = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let table = ColorTable::from_json(&json).map_err(|e| invalid(e.to_string()))?;

        tracing::debug!(path = %path.display(), colors = table.len(), "Loaded colour table");
        Ok(table)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional variable, treating empty values as unset.
fn get_optional(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    lookup(key).filter(|value| !value.is_empty())
}

/// Get a variable with a default value.
fn get_or_default(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    get_optional(lookup, key).unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StorefrontConfig::default());
        assert_eq!(config.token_key, "commerce-token");
        assert_eq!(config.storage_path, PathBuf::from(".gadgetry/storage.json"));
    }

    #[test]
    fn test_overrides() {
        let config = StorefrontConfig::from_lookup(lookup_from(&[
            ("STOREFRONT_TOKEN_KEY", "ct-token"),
            ("STOREFRONT_STORAGE_PATH", "/tmp/store.json"),
            ("STOREFRONT_COLOR_TABLE", "/etc/colors.json"),
            ("STOREFRONT_LOG_FORMAT", "json"),
        ]))
        .unwrap();

        assert_eq!(config.token_key, "ct-token");
        assert_eq!(config.storage_path, PathBuf::from("/tmp/store.json"));
        assert_eq!(config.color_table_path, Some(PathBuf::from("/etc/colors.json")));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_log_format() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_LOG_FORMAT", "xml")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "STOREFRONT_LOG_FORMAT"));
    }

    #[test]
    fn test_blank_token_key_rejected() {
        let err = StorefrontConfig::from_lookup(lookup_from(&[("STOREFRONT_TOKEN_KEY", "   ")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(_, _)));
    }

    #[test]
    fn test_default_color_table() {
        let table = StorefrontConfig::default().load_color_table().unwrap();
        assert_eq!(table, ColorTable::default());
    }

    #[test]
    fn test_color_table_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("colors.json");
        std::fs::write(&path, r##"[{"name":"ocean","hex":"#0077BE"}]"##).unwrap();

        let config = StorefrontConfig {
            color_table_path: Some(path),
            ..StorefrontConfig::default()
        };
        let table = config.load_color_table().unwrap();
        assert_eq!(table.hex_for("ocean"), Some("#0077BE"));
    }

    #[test]
    fn test_missing_color_table_file() {
        let config = StorefrontConfig {
            color_table_path: Some(PathBuf::from("/nonexistent/colors.json")),
            ..StorefrontConfig::default()
        };
        let err = config.load_color_table().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(var, _) if var == "STOREFRONT_COLOR_TABLE"));
    }

    #[test]
    fn test_token_service_uses_configured_key() {
        let dir = tempfile::tempdir().unwrap();
        let config = StorefrontConfig {
            token_key: "custom".to_string(),
            storage_path: dir.path().join("storage.json"),
            ..StorefrontConfig::default()
        };

        let service = config.token_service();
        assert_eq!(service.key(), "custom");
    }
}
