//! Google Ads REST API client.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::auth;
use crate::config::GoogleAdsConfig;
use crate::error::{GoogleAdsError, GoogleAdsResult};
use crate::types::{ListAccessibleCustomersResponse, SearchStreamBatch};

/// Production Google Ads REST endpoint.
pub(crate) const DEFAULT_ENDPOINT: &str = "https://googleads.googleapis.com";
/// Google Ads API version this client speaks.
pub(crate) const API_VERSION: &str = "v20";

const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Create the HTTP client with timeout configuration.
fn create_http_client() -> Client {
    Client::builder()
        .connect_timeout(Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS))
        .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
        .build()
        .expect("Failed to create HTTP client")
}

/// Authenticated Google Ads API client.
///
/// Immutable after construction. The acting-on-behalf-of account
/// (`login-customer-id`) is resolved per request: an explicit per-call value
/// wins over the configured default, and shared state is never mutated.
pub struct GoogleAdsClient {
    client: Client,
    endpoint: String,
    developer_token: String,
    access_token: String,
    login_customer_id: Option<String>,
}

impl GoogleAdsClient {
    /// Exchange the configured refresh token and return an authenticated
    /// client.
    pub async fn connect(config: GoogleAdsConfig) -> GoogleAdsResult<Self> {
        let client = create_http_client();
        let access_token = auth::exchange_refresh_token(&client, &config).await?;
        Ok(Self::assemble(client, config, access_token))
    }

    /// Build a client around an access token obtained elsewhere.
    #[must_use]
    pub fn with_access_token(config: GoogleAdsConfig, access_token: impl Into<String>) -> Self {
        Self::assemble(create_http_client(), config, access_token.into())
    }

    fn assemble(client: Client, config: GoogleAdsConfig, access_token: String) -> Self {
        let endpoint = config
            .endpoint
            .as_deref()
            .map_or(DEFAULT_ENDPOINT, |e| e.trim_end_matches('/'))
            .to_string();

        Self {
            client,
            endpoint,
            developer_token: config.developer_token,
            access_token,
            login_customer_id: config.login_customer_id,
        }
    }

    /// List the customer accounts directly accessible by the authenticated
    /// user.
    pub async fn list_accessible_customers(
        &self,
    ) -> GoogleAdsResult<ListAccessibleCustomersResponse> {
        let url = format!(
            "{}/{}/customers:listAccessibleCustomers",
            self.endpoint, API_VERSION
        );
        log::debug!("GET {url}");

        let response = self
            .authorized(self.client.get(&url), None)
            .send()
            .await
            .map_err(|e| GoogleAdsError::Network(e.to_string()))?;

        Self::read_json(response).await
    }

    /// Run a GAQL query and return every batch of the streamed response.
    ///
    /// The query text is passed through uninterpreted. The response is
    /// consumed in full: a failure anywhere in it fails the whole call with
    /// no partial result.
    pub async fn search_stream(
        &self,
        customer_id: &str,
        query: &str,
        login_customer_id: Option<&str>,
    ) -> GoogleAdsResult<Vec<SearchStreamBatch>> {
        let url = format!(
            "{}/{}/customers/{customer_id}/googleAds:searchStream",
            self.endpoint, API_VERSION
        );
        log::debug!("POST {url}");

        let body = serde_json::json!({ "query": query });
        let response = self
            .authorized(self.client.post(&url).json(&body), login_customer_id)
            .send()
            .await
            .map_err(|e| GoogleAdsError::Network(e.to_string()))?;

        Self::read_json(response).await
    }

    fn authorized(
        &self,
        builder: RequestBuilder,
        login_customer_id: Option<&str>,
    ) -> RequestBuilder {
        let mut builder = builder
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("developer-token", &self.developer_token);

        if let Some(login) =
            resolve_login_customer_id(login_customer_id, self.login_customer_id.as_deref())
        {
            builder = builder.header("login-customer-id", login);
        }
        builder
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> GoogleAdsResult<T> {
        let status = response.status();
        log::debug!("Response Status: {status}");

        let response_text = response
            .text()
            .await
            .map_err(|e| GoogleAdsError::Network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            let error = map_api_error(status, &response_text);
            if error.is_expected() {
                log::warn!("API error: {error}");
            } else {
                log::error!("API error: {error}");
            }
            return Err(error);
        }

        serde_json::from_str(&response_text).map_err(|e| {
            log::error!("JSON parse failed: {e}");
            GoogleAdsError::Parse(e.to_string())
        })
    }
}

/// Pick the `login-customer-id` header value for one request.
///
/// A non-empty per-call override wins; otherwise the configured default
/// applies; empty values count as absent.
fn resolve_login_customer_id<'a>(
    override_id: Option<&'a str>,
    default_id: Option<&'a str>,
) -> Option<&'a str> {
    override_id
        .filter(|id| !id.is_empty())
        .or_else(|| default_id.filter(|id| !id.is_empty()))
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ApiErrorBody {
    message: String,
    status: String,
}

/// Map a REST error envelope (`{"error":{"code","message","status"}}`) to
/// the unified error type by its gRPC status string.
fn map_api_error(http_status: StatusCode, body: &str) -> GoogleAdsError {
    let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(body) else {
        return GoogleAdsError::Api {
            status: http_status.to_string(),
            message: body.to_string(),
        };
    };

    let ApiErrorBody { message, status } = envelope.error;
    match status.as_str() {
        "UNAUTHENTICATED" => GoogleAdsError::Auth(message),
        "PERMISSION_DENIED" => GoogleAdsError::PermissionDenied(message),
        "RESOURCE_EXHAUSTED" => GoogleAdsError::QuotaExhausted(message),
        "INVALID_ARGUMENT" => GoogleAdsError::InvalidArgument(message),
        "" => GoogleAdsError::Api {
            status: http_status.to_string(),
            message,
        },
        other => GoogleAdsError::Api {
            status: other.to_string(),
            message,
        },
    }
}
