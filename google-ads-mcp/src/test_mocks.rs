use super::*;

use google_ads_client::GoogleAdsRow;
use tokio::sync::Mutex;

/// Recorded arguments of one `search_stream` gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCall {
    pub customer_id: String,
    pub query: String,
    pub login_customer_id: Option<String>,
}

/// Mock gateway with injectable results and recorded calls.
#[derive(Default)]
pub struct MockAdsGateway {
    accounts_result: Mutex<Option<GoogleAdsResult<ListAccessibleCustomersResponse>>>,
    search_result: Mutex<Option<GoogleAdsResult<Vec<SearchStreamBatch>>>>,
    list_calls: Mutex<usize>,
    search_calls: Mutex<Vec<SearchCall>>,
}

impl MockAdsGateway {
    pub async fn set_accounts(&self, response: ListAccessibleCustomersResponse) {
        *self.accounts_result.lock().await = Some(Ok(response));
    }

    pub async fn set_accounts_error(&self, error: GoogleAdsError) {
        *self.accounts_result.lock().await = Some(Err(error));
    }

    pub async fn set_batches(&self, batches: Vec<SearchStreamBatch>) {
        *self.search_result.lock().await = Some(Ok(batches));
    }

    pub async fn set_search_error(&self, error: GoogleAdsError) {
        *self.search_result.lock().await = Some(Err(error));
    }

    pub async fn list_calls(&self) -> usize {
        *self.list_calls.lock().await
    }

    pub async fn search_calls(&self) -> Vec<SearchCall> {
        self.search_calls.lock().await.clone()
    }
}

#[async_trait]
impl AdsGateway for MockAdsGateway {
    async fn list_accessible_customers(&self) -> GoogleAdsResult<ListAccessibleCustomersResponse> {
        *self.list_calls.lock().await += 1;
        self.accounts_result
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| Ok(ListAccessibleCustomersResponse::default()))
    }

    async fn search_stream(
        &self,
        customer_id: &str,
        query: &str,
        login_customer_id: Option<&str>,
    ) -> GoogleAdsResult<Vec<SearchStreamBatch>> {
        self.search_calls.lock().await.push(SearchCall {
            customer_id: customer_id.to_string(),
            query: query.to_string(),
            login_customer_id: login_customer_id.map(std::string::ToString::to_string),
        });

        self.search_result
            .lock()
            .await
            .clone()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

/// Build an accounts response from resource names.
pub fn accounts(resource_names: &[&str]) -> ListAccessibleCustomersResponse {
    ListAccessibleCustomersResponse {
        resource_names: resource_names.iter().map(|n| (*n).to_string()).collect(),
    }
}

/// Build a stream batch from row payloads.
pub fn batch(rows: &[serde_json::Value]) -> SearchStreamBatch {
    SearchStreamBatch {
        results: rows.iter().cloned().map(GoogleAdsRow).collect(),
        ..SearchStreamBatch::default()
    }
}

/// Collect the text contents of a tool result, in order.
pub fn extract_texts(result: &CallToolResult) -> Vec<String> {
    result
        .content
        .iter()
        .filter_map(|c| c.raw.as_text())
        .map(|t| t.text.clone())
        .collect()
}

pub(super) fn build_server(gateway: Arc<dyn AdsGateway>) -> GoogleAdsMcp {
    GoogleAdsMcp::with_gateway(gateway)
}
