//! Configuration loading for the Google Ads API client.
//!
//! Credentials live in a YAML file, by default `./google-ads.yaml` relative
//! to the working directory. The file location can be overridden with the
//! `GOOGLE_ADS_CONFIGURATION_FILE_PATH` environment variable.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GoogleAdsError, GoogleAdsResult};

/// Environment variable overriding the configuration file location.
pub const CONFIG_PATH_ENV: &str = "GOOGLE_ADS_CONFIGURATION_FILE_PATH";

/// Default configuration file, resolved relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "./google-ads.yaml";

/// Credentials and options for the Google Ads API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleAdsConfig {
    /// Developer token issued for the Google Ads API.
    pub developer_token: String,
    /// OAuth2 client ID.
    pub client_id: String,
    /// OAuth2 client secret.
    pub client_secret: String,
    /// OAuth2 refresh token for the authorized user.
    pub refresh_token: String,
    /// Default manager account used for authorization, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_customer_id: Option<String>,
    /// API endpoint override, for sandboxes and tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// OAuth token endpoint override, for tests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_uri: Option<String>,
}

impl GoogleAdsConfig {
    /// Load and validate configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> GoogleAdsResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading configuration from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            GoogleAdsError::Config(format!(
                "Failed to read configuration file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&content).map_err(|e| {
            GoogleAdsError::Config(format!("Invalid configuration file: {e}"))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration file location from the environment,
    /// falling back to [`DEFAULT_CONFIG_PATH`].
    #[must_use]
    pub fn resolve_path() -> PathBuf {
        std::env::var(CONFIG_PATH_ENV)
            .ok()
            .filter(|value| !value.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
    }

    fn validate(&self) -> GoogleAdsResult<()> {
        let required = [
            ("developer_token", &self.developer_token),
            ("client_id", &self.client_id),
            ("client_secret", &self.client_secret),
            ("refresh_token", &self.refresh_token),
        ];

        for (name, value) in required {
            if value.is_empty() {
                return Err(GoogleAdsError::Config(format!(
                    "Missing required field: {name}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn load_complete_config() {
        let file = write_config(
            "developer_token: dev-token\n\
             client_id: client-id\n\
             client_secret: client-secret\n\
             refresh_token: refresh-token\n\
             login_customer_id: \"1234567890\"\n",
        );

        let config = GoogleAdsConfig::load(file.path()).unwrap();
        assert_eq!(config.developer_token, "dev-token");
        assert_eq!(config.login_customer_id, Some("1234567890".to_string()));
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn load_without_optional_fields() {
        let file = write_config(
            "developer_token: dev-token\n\
             client_id: client-id\n\
             client_secret: client-secret\n\
             refresh_token: refresh-token\n",
        );

        let config = GoogleAdsConfig::load(file.path()).unwrap();
        assert!(config.login_customer_id.is_none());
        assert!(config.token_uri.is_none());
    }

    #[test]
    fn missing_field_is_config_error() {
        let file = write_config(
            "developer_token: dev-token\n\
             client_id: client-id\n",
        );

        let error = GoogleAdsConfig::load(file.path()).unwrap_err();
        assert!(matches!(error, GoogleAdsError::Config(_)));
    }

    #[test]
    fn empty_required_field_is_rejected() {
        let file = write_config(
            "developer_token: \"\"\n\
             client_id: client-id\n\
             client_secret: client-secret\n\
             refresh_token: refresh-token\n",
        );

        let error = GoogleAdsConfig::load(file.path()).unwrap_err();
        assert!(error.to_string().contains("developer_token"));
    }

    #[test]
    fn nonexistent_file_is_config_error() {
        let error = GoogleAdsConfig::load("/nonexistent/google-ads.yaml").unwrap_err();
        assert!(matches!(error, GoogleAdsError::Config(_)));
    }

    #[test]
    fn resolve_path_prefers_environment() {
        // Single test covers default and override to avoid races on the
        // process environment.
        std::env::remove_var(CONFIG_PATH_ENV);
        assert_eq!(
            GoogleAdsConfig::resolve_path(),
            PathBuf::from(DEFAULT_CONFIG_PATH)
        );

        std::env::set_var(CONFIG_PATH_ENV, "/etc/ads/google-ads.yaml");
        assert_eq!(
            GoogleAdsConfig::resolve_path(),
            PathBuf::from("/etc/ads/google-ads.yaml")
        );

        std::env::set_var(CONFIG_PATH_ENV, "");
        assert_eq!(
            GoogleAdsConfig::resolve_path(),
            PathBuf::from(DEFAULT_CONFIG_PATH)
        );

        std::env::remove_var(CONFIG_PATH_ENV);
    }
}
