//! MCP Server implementation for the Google Ads API.
//!
//! Exposes two tools for AI agents: account listing and streaming GAQL
//! queries.

use async_trait::async_trait;
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router,
};
use std::sync::Arc;

use google_ads_client::{
    CanonicalJson, ClientCache, GoogleAdsError, GoogleAdsResult, ListAccessibleCustomersResponse,
    SearchStreamBatch,
};

use crate::schemas::{ListAccountsParams, SearchStreamParams};

/// Gateway to the Google Ads API, the seam tests substitute.
#[async_trait]
trait AdsGateway: Send + Sync {
    async fn list_accessible_customers(&self) -> GoogleAdsResult<ListAccessibleCustomersResponse>;

    async fn search_stream(
        &self,
        customer_id: &str,
        query: &str,
        login_customer_id: Option<&str>,
    ) -> GoogleAdsResult<Vec<SearchStreamBatch>>;
}

/// Production gateway backed by the lazily-initialized shared client.
struct CachedClientGateway {
    cache: ClientCache,
}

impl CachedClientGateway {
    fn new(cache: ClientCache) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl AdsGateway for CachedClientGateway {
    async fn list_accessible_customers(&self) -> GoogleAdsResult<ListAccessibleCustomersResponse> {
        let client = self.cache.get().await?;
        client.list_accessible_customers().await
    }

    async fn search_stream(
        &self,
        customer_id: &str,
        query: &str,
        login_customer_id: Option<&str>,
    ) -> GoogleAdsResult<Vec<SearchStreamBatch>> {
        let client = self.cache.get().await?;
        client
            .search_stream(customer_id, query, login_customer_id)
            .await
    }
}

/// Sanitize error messages to prevent sensitive information leakage.
///
/// Logs the full error to stderr but returns a generic message to the client.
fn sanitize_internal_error(error: impl std::fmt::Display, context: &str) -> McpError {
    tracing::error!("{context} error: {error}");
    McpError::internal_error(
        format!("{context} failed - check server logs for details"),
        None,
    )
}

/// Map a remote-call failure to a tool-call error, message intact.
fn map_ads_error(context: &str, error: &GoogleAdsError) -> McpError {
    if error.is_expected() {
        tracing::warn!("{context} error: {error}");
    } else {
        tracing::error!("{context} error: {error}");
    }
    McpError::internal_error(error.to_string(), None)
}

/// MCP Server for the Google Ads API.
///
/// Provides AI agents with account listing and GAQL query streaming
/// through the Model Context Protocol.
#[derive(Clone)]
pub struct GoogleAdsMcp {
    /// Gateway to the remote API.
    gateway: Arc<dyn AdsGateway>,
    /// Tool router generated by macro.
    tool_router: ToolRouter<Self>,
}

impl GoogleAdsMcp {
    /// Create a new MCP server instance over a client cache.
    #[must_use]
    pub fn new(cache: ClientCache) -> Self {
        Self::with_gateway(Arc::new(CachedClientGateway::new(cache)))
    }

    fn with_gateway(gateway: Arc<dyn AdsGateway>) -> Self {
        Self {
            gateway,
            tool_router: Self::tool_router(),
        }
    }
}

#[tool_router]
impl GoogleAdsMcp {
    /// List the accounts accessible to the authenticated user.
    #[tool(
        description = "List the Google Ads accounts directly accessible to the authenticated user"
    )]
    async fn list_accounts(
        &self,
        _params: Parameters<ListAccountsParams>,
    ) -> Result<CallToolResult, McpError> {
        let response = self
            .gateway
            .list_accessible_customers()
            .await
            .map_err(|e| map_ads_error("List accounts", &e))?;

        let json = response
            .to_canonical_json()
            .map_err(|e| sanitize_internal_error(e, "Serialize accounts"))?;

        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    /// Run a GAQL query and return every result row.
    #[tool(
        description = "Run a Google Ads Query Language (GAQL) query against an account and return one JSON text per result row"
    )]
    async fn search_stream(
        &self,
        Parameters(params): Parameters<SearchStreamParams>,
    ) -> Result<CallToolResult, McpError> {
        let login_customer_id = params
            .login_customer_id
            .as_deref()
            .filter(|id| !id.is_empty());

        let batches = self
            .gateway
            .search_stream(&params.customer_id, &params.query, login_customer_id)
            .await
            .map_err(|e| map_ads_error("Search stream", &e))?;

        // Flatten rows across batches, preserving batch arrival order and
        // within-batch row order.
        let mut rows = Vec::new();
        for batch in &batches {
            for row in &batch.results {
                let json = row
                    .to_canonical_json()
                    .map_err(|e| sanitize_internal_error(e, "Serialize row"))?;
                rows.push(Content::text(json));
            }
        }

        Ok(CallToolResult::success(rows))
    }
}

#[tool_handler]
impl ServerHandler for GoogleAdsMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Google Ads MCP Server - Query the Google Ads API. \
                 Use list_accounts to see the accounts accessible to the authenticated user, \
                 and search_stream to run GAQL queries against an account. \
                 Pass login_customer_id when reaching a client account through its manager account."
                    .into(),
            ),
        }
    }
}

#[cfg(test)]
#[path = "test_mocks.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
pub(crate) mod test_mocks;

#[cfg(test)]
#[path = "server_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests;

#[cfg(test)]
#[path = "client_integration_tests.rs"]
#[allow(clippy::unwrap_used, clippy::panic)]
mod client_integration_tests;
