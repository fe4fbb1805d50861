//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Client layer error type
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum GoogleAdsError {
    /// Configuration file missing, unreadable, or invalid
    #[error("Config error: {0}")]
    Config(String),

    /// OAuth token exchange failed or the API rejected the credentials
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// The authenticated user lacks access to the requested resource
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The developer token or account quota is exhausted
    #[error("Quota exhausted: {0}")]
    QuotaExhausted(String),

    /// The API rejected a request argument (malformed query, bad customer id)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Failed to parse an API response body
    #[error("Parse error: {0}")]
    Parse(String),

    /// Failed to serialize a response for the caller
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// An API error not mapped to a specific variant
    #[error("API error ({status}): {message}")]
    Api { status: String, message: String },
}

impl GoogleAdsError {
    /// Whether the error is expected behavior (bad credentials, bad input,
    /// exhausted quota), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`. **Please update this method simultaneously
    /// when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::Auth(_)
                | Self::PermissionDenied(_)
                | Self::QuotaExhausted(_)
                | Self::InvalidArgument(_)
        )
    }
}

/// Client layer Result type alias
pub type GoogleAdsResult<T> = std::result::Result<T, GoogleAdsError>;
