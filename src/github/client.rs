//! GitHub HTTP client for API interactions

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::api;
use crate::error::{GhError, Result};

/// Outcome of a list request that reached the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetched<T> {
    /// HTTP 200 with the decoded sequence (possibly empty)
    Items(Vec<T>),
    /// Any other status code
    Rejected { status: u16 },
}

impl<T> Fetched<T> {
    /// Items of a successful fetch, `None` when rejected
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Fetched::Items(items) => Some(items.as_slice()),
            Fetched::Rejected { .. } => None,
        }
    }
}

/// GitHub API client
pub struct GithubClient {
    client: Client,
    token: Option<String>,
    base_url: String,
}

impl GithubClient {
    /// Create a new client against the given REST base URL
    ///
    /// Without a token, requests go out unauthenticated.
    pub fn new(token: Option<String>, base_url: &str) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/');
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(GhError::Config(format!(
                "API URL '{}' must start with http:// or https://",
                base_url
            )));
        }

        let client = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());

        Ok(Self {
            client,
            token,
            base_url: base_url.to_string(),
        })
    }

    /// Base URL for API requests, without a trailing slash
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry an Authorization header
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Add standard headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let builder = builder
            .header("Accept", api::ACCEPT)
            .header("X-GitHub-Api-Version", api::API_VERSION)
            .header("User-Agent", api::USER_AGENT);
        match &self.token {
            Some(token) => builder.header("Authorization", format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Create a GET request builder with standard headers
    pub(crate) fn get(&self, url: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(url))
    }

    /// GET a JSON array from `path`
    ///
    /// Only HTTP 200 counts as success; everything else is returned as
    /// `Fetched::Rejected` so the caller decides how to report it. Transport
    /// and decode failures are errors.
    pub async fn fetch_list<T>(&self, path: &str, context: &str) -> Result<Fetched<T>>
    where
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url(), path);
        debug!("Fetching {} from: {}", context, url);

        let response = self.get(&url).send().await?;
        let status = response.status();
        debug!("Response status for {}: {}", context, status);

        if status != StatusCode::OK {
            warn!("Failed to fetch {} (status {})", context, status.as_u16());
            return Ok(Fetched::Rejected {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let items: Vec<T> = serde_json::from_str(&body)?;
        debug!("Decoded {} item(s) for {}", items.len(), context);
        Ok(Fetched::Items(items))
    }
}

#[cfg(test)]
impl GithubClient {
    /// Client pointed at a mock server, authenticated with a fixed token
    pub fn test_client(base_url: &str) -> Self {
        Self::new(Some("test-token".to_string()), base_url)
            .expect("mock server URL should be valid")
    }
}
