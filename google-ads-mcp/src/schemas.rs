//! MCP tool parameter schemas
//!
//! Defines the input parameter structures for both MCP tools.
//! All structs derive `Debug`, `Deserialize`, and `JsonSchema` as required by rmcp.

use schemars::JsonSchema;
use serde::Deserialize;

/// Parameters for `list_accounts` tool.
///
/// This tool takes no parameters, but we need an empty struct for the schema.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListAccountsParams {}

/// Parameters for `search_stream` tool.
#[derive(Debug, Deserialize, JsonSchema)]
pub struct SearchStreamParams {
    /// The customer ID of the account to query.
    #[schemars(description = "The customer ID of the Google Ads account to query (digits only)")]
    pub customer_id: String,

    /// The GAQL query to run, passed through uninterpreted.
    #[schemars(description = "The Google Ads Query Language (GAQL) query to run")]
    pub query: String,

    /// Manager account to act on behalf of, for authorization.
    #[schemars(
        description = "Optional manager account customer ID used for authorization (login-customer-id header)"
    )]
    pub login_customer_id: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use schemars::schema_for;

    #[test]
    fn search_stream_deserializes_required_and_optional_fields() {
        let json = serde_json::json!({
            "customer_id": "1234567890",
            "query": "SELECT campaign.id FROM campaign",
            "login_customer_id": "8008675309"
        });

        let params: SearchStreamParams = serde_json::from_value(json).unwrap();
        assert_eq!(params.customer_id, "1234567890");
        assert_eq!(params.query, "SELECT campaign.id FROM campaign");
        assert_eq!(params.login_customer_id, Some("8008675309".to_string()));
    }

    #[test]
    fn search_stream_login_customer_id_is_optional() {
        let json = serde_json::json!({
            "customer_id": "1234567890",
            "query": "SELECT campaign.id FROM campaign"
        });

        let params: SearchStreamParams = serde_json::from_value(json).unwrap();
        assert!(params.login_customer_id.is_none());
    }

    #[test]
    fn search_stream_missing_customer_id_fails() {
        let json = serde_json::json!({ "query": "SELECT campaign.id FROM campaign" });
        let result: serde_json::Result<SearchStreamParams> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn search_stream_missing_query_fails() {
        let json = serde_json::json!({ "customer_id": "1234567890" });
        let result: serde_json::Result<SearchStreamParams> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn schema_marks_required_fields_for_search_stream() {
        let schema = schema_for!(SearchStreamParams);
        let json = serde_json::to_value(&schema).unwrap();
        let required = json
            .get("required")
            .and_then(serde_json::Value::as_array)
            .unwrap();

        assert!(required.iter().any(|v| v == "customer_id"));
        assert!(required.iter().any(|v| v == "query"));
        assert!(!required.iter().any(|v| v == "login_customer_id"));
    }

    #[test]
    fn list_accounts_accepts_empty_object() {
        let params: ListAccountsParams = serde_json::from_value(serde_json::json!({})).unwrap();
        let _ = params;
    }
}
