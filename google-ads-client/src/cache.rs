//! Lazy, process-wide construction of the authenticated client.

use std::future::Future;
use std::path::PathBuf;

use tokio::sync::OnceCell;

use crate::client::GoogleAdsClient;
use crate::config::GoogleAdsConfig;
use crate::error::GoogleAdsResult;

/// Holds at most one authenticated [`GoogleAdsClient`] per process.
///
/// The client is built on first use from the configuration file; every later
/// call returns the same instance. Concurrent first calls are serialized, so
/// successful construction runs at most once. A failed initialization leaves
/// the cache empty and the next call retries from scratch. There is no
/// expiry and no re-authentication.
pub struct ClientCache {
    config_path: PathBuf,
    cell: OnceCell<GoogleAdsClient>,
}

impl ClientCache {
    /// Create an empty cache reading configuration from `config_path` on
    /// first use. Does no I/O.
    #[must_use]
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            cell: OnceCell::new(),
        }
    }

    /// Return the shared client, constructing and authenticating it on the
    /// first call.
    pub async fn get(&self) -> GoogleAdsResult<&GoogleAdsClient> {
        self.get_or_connect(|| async {
            let config = GoogleAdsConfig::load(&self.config_path)?;
            GoogleAdsClient::connect(config).await
        })
        .await
    }

    async fn get_or_connect<F, Fut>(&self, connect: F) -> GoogleAdsResult<&GoogleAdsClient>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = GoogleAdsResult<GoogleAdsClient>>,
    {
        self.cell.get_or_try_init(connect).await
    }
}
