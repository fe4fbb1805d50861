//! OAuth2 refresh-token exchange against Google's token endpoint.

use serde::Deserialize;

use crate::config::GoogleAdsConfig;
use crate::error::{GoogleAdsError, GoogleAdsResult};

/// Google's OAuth2 token endpoint.
pub(crate) const DEFAULT_TOKEN_URI: &str = "https://oauth2.googleapis.com/token";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Exchange the configured refresh token for an access token.
///
/// Runs once, during client construction. There is no refresh policy: the
/// token lives as long as the client.
pub(crate) async fn exchange_refresh_token(
    http: &reqwest::Client,
    config: &GoogleAdsConfig,
) -> GoogleAdsResult<String> {
    let token_uri = config.token_uri.as_deref().unwrap_or(DEFAULT_TOKEN_URI);
    log::debug!("POST {token_uri}");

    let params = [
        ("grant_type", "refresh_token"),
        ("client_id", config.client_id.as_str()),
        ("client_secret", config.client_secret.as_str()),
        ("refresh_token", config.refresh_token.as_str()),
    ];

    let response = http
        .post(token_uri)
        .form(&params)
        .send()
        .await
        .map_err(|e| GoogleAdsError::Network(e.to_string()))?;

    let status = response.status();
    log::debug!("Response Status: {status}");

    let response_text = response
        .text()
        .await
        .map_err(|e| GoogleAdsError::Network(format!("Failed to read response: {e}")))?;

    if !status.is_success() {
        return Err(parse_token_error(&response_text));
    }

    parse_token_response(&response_text)
}

fn parse_token_response(body: &str) -> GoogleAdsResult<String> {
    let token: TokenResponse = serde_json::from_str(body).map_err(|e| {
        log::error!("Token response parse failed: {e}");
        GoogleAdsError::Parse(format!("Invalid token response: {e}"))
    })?;
    Ok(token.access_token)
}

fn parse_token_error(body: &str) -> GoogleAdsError {
    match serde_json::from_str::<TokenErrorResponse>(body) {
        Ok(error) => {
            let detail = error
                .error_description
                .map_or_else(|| error.error.clone(), |d| format!("{}: {d}", error.error));
            GoogleAdsError::Auth(detail)
        }
        Err(_) => GoogleAdsError::Auth(format!("Token endpoint rejected the request: {body}")),
    }
}
