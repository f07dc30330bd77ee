use std::future::Future;

use serde::de::DeserializeOwned;
use shared_types::{SearchError, SearchParams, SearchResponse, ServiceConfig};

/// The remote search service, as seen by the session.
pub trait SearchService {
    /// `GET /service/search` with the given parameters.
    fn search(
        &self,
        params: &SearchParams,
    ) -> impl Future<Output = Result<SearchResponse, SearchError>>;

    /// `GET /service/dynamicLabelFields`.
    fn dynamic_label_fields(&self) -> impl Future<Output = Result<Vec<String>, SearchError>>;
}

/// [`SearchService`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSearchService {
    client: reqwest::Client,
    search_url: String,
    dynamic_labels_url: String,
}

impl HttpSearchService {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            search_url: config.search_url(),
            dynamic_labels_url: config.dynamic_labels_url(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, SearchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| SearchError::transport(format!("Request to {url} failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::transport(format!(
                "Search service error ({status}): {body}"
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SearchError::invalid_response(format!("Undecodable body from {url}: {e}")))
    }
}

impl SearchService for HttpSearchService {
    #[tracing::instrument(skip(self))]
    async fn search(&self, params: &SearchParams) -> Result<SearchResponse, SearchError> {
        self.get_json(&self.search_url, &params.to_query_pairs())
            .await
    }

    #[tracing::instrument(skip(self))]
    async fn dynamic_label_fields(&self) -> Result<Vec<String>, SearchError> {
        self.get_json(&self.dynamic_labels_url, &[]).await
    }
}
