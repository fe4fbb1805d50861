//! # google-ads-client
//!
//! Minimal client for the Google Ads REST API, built for the MCP server in
//! this workspace.
//!
//! Credentials come from a YAML file (`./google-ads.yaml` by default, see
//! [`GoogleAdsConfig`]); authentication is a one-time OAuth2 refresh-token
//! exchange performed while the client is constructed.
//!
//! ## Operations
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`GoogleAdsClient::list_accessible_customers`] | `GET customers:listAccessibleCustomers` |
//! | [`GoogleAdsClient::search_stream`] | `POST customers/{id}/googleAds:searchStream` |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use google_ads_client::{ClientCache, GoogleAdsConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // 1. Point a cache at the configuration file
//!     let cache = ClientCache::new(GoogleAdsConfig::resolve_path());
//!
//!     // 2. First use loads credentials and authenticates; every later use
//!     //    returns the same client
//!     let client = cache.get().await?;
//!
//!     // 3. List accessible accounts
//!     let accounts = client.list_accessible_customers().await?;
//!     for name in &accounts.resource_names {
//!         println!("{name}");
//!     }
//!
//!     // 4. Run a GAQL query
//!     let batches = client
//!         .search_stream("1234567890", "SELECT campaign.id FROM campaign", None)
//!         .await?;
//!     for batch in &batches {
//!         println!("{} rows", batch.results.len());
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`GoogleAdsResult`]. Failures are never retried;
//! each error is terminal for the call that produced it:
//!
//! - [`GoogleAdsError::Config`] / [`GoogleAdsError::Auth`] — raised while the
//!   cached client initializes; the cache stays empty so a later call can
//!   retry initialization.
//! - [`GoogleAdsError::PermissionDenied`], [`GoogleAdsError::QuotaExhausted`],
//!   [`GoogleAdsError::InvalidArgument`], [`GoogleAdsError::Api`] — mapped
//!   from the API's error envelope by gRPC status string.
//! - [`GoogleAdsError::Network`] / [`GoogleAdsError::Parse`] — transport and
//!   decoding failures; a failure while consuming a streamed response fails
//!   the whole call with no partial result.

mod auth;
mod cache;
mod client;
mod config;
mod error;
mod types;

// Re-export error types
pub use error::{GoogleAdsError, GoogleAdsResult};

// Re-export client and cache
pub use cache::ClientCache;
pub use client::GoogleAdsClient;

// Re-export configuration
pub use config::{GoogleAdsConfig, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};

// Re-export types
pub use types::{
    CanonicalJson, GoogleAdsRow, ListAccessibleCustomersResponse, SearchStreamBatch,
};
