//! Google Ads API response types.

use serde::{Deserialize, Serialize};

use crate::error::{GoogleAdsError, GoogleAdsResult};

/// Serialization capability for responses handed back to callers as text.
///
/// Both tool outputs are the compact JSON form of the API's own wire
/// representation, so the adapter never needs per-type knowledge beyond
/// this trait.
pub trait CanonicalJson: Serialize {
    /// Serialize to the stable JSON wire form.
    fn to_canonical_json(&self) -> GoogleAdsResult<String> {
        serde_json::to_string(self).map_err(|e| GoogleAdsError::Serialization(e.to_string()))
    }
}

/// Response of `customers:listAccessibleCustomers`.
///
/// A user with zero accessible accounts still gets a well-formed object
/// with an empty `resourceNames` list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ListAccessibleCustomersResponse {
    /// Resource names (`customers/{id}`) directly accessible by the
    /// authenticated user.
    pub resource_names: Vec<String>,
}

impl CanonicalJson for ListAccessibleCustomersResponse {}

/// One batch of a `googleAds:searchStream` response.
///
/// Batches arrive in order; each carries zero or more rows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchStreamBatch {
    /// Rows of this batch, in result order.
    pub results: Vec<GoogleAdsRow>,
    /// Fields the query selected, as returned by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mask: Option<String>,
    /// Request ID assigned by the API, for support escalations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// One result row. The payload stays schemaless because its shape is
/// defined by the fields the query selected, not by this adapter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoogleAdsRow(pub serde_json::Value);

impl CanonicalJson for GoogleAdsRow {}
