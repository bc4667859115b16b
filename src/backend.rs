use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::model::SearchResponse;
use crate::query::IngredientQuery;

/// The search collaborator seam.
///
/// The matching logic itself lives in an external service; everything on
/// this side only needs something that turns an ingredient query into a
/// response. Tests substitute a stub for the HTTP implementation.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(&self, query: &IngredientQuery) -> Result<SearchResponse, SearchError>;
}

/// `SearchBackend` over HTTP, talking to the `/search` endpoint.
pub struct HttpSearchBackend {
    client: Client,
    base_url: String,
}

impl HttpSearchBackend {
    /// Create a backend for the given base URL (no trailing slash).
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, SearchError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder().timeout(timeout).build()?;

        Ok(HttpSearchBackend {
            client,
            base_url: base_url.into(),
        })
    }

    pub fn from_config(config: &SearchConfig) -> Result<Self, SearchError> {
        Self::new(
            config.endpoint.clone(),
            Some(Duration::from_secs(config.timeout)),
        )
    }
}

#[async_trait]
impl SearchBackend for HttpSearchBackend {
    async fn search(&self, query: &IngredientQuery) -> Result<SearchResponse, SearchError> {
        let url = format!("{}/search", self.base_url);
        debug!("GET {} ingredients={}", url, query.query_string());

        let response = self
            .client
            .get(&url)
            .query(&[("ingredients", query.query_string())])
            // Part of the endpoint's request contract, even though a GET
            // carries no body for it to describe.
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::HttpStatus(status.as_u16()));
        }

        let body = response.text().await?;
        debug!("search response: {body}");
        let parsed = serde_json::from_str(&body)?;
        Ok(parsed)
    }
}
