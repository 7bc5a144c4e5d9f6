//! Generic REST client wrapper around reqwest.

use crate::error::RestError;
use reqwest::{Client, Response};
use std::time::Duration;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Generic REST client for making HTTP requests.
///
/// Response bodies are returned verbatim as text; callers decide whether
/// and how to parse them.
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    /// Create a new REST client with the given base URL.
    ///
    /// # Arguments
    /// * `base_url` - Base URL for all requests (e.g., "https://api.elections.kalshi.com")
    /// * `timeout` - Request timeout duration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RestError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RestError::RequestBuild(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a new REST client with default timeout.
    pub fn with_default_timeout(base_url: &str) -> Result<Self, RestError> {
        Self::new(base_url, DEFAULT_TIMEOUT)
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Make a GET request and return the response body verbatim.
    ///
    /// # Arguments
    /// * `path` - Request path (e.g., "/trade-api/v2/markets")
    /// * `query` - Optional query string (without leading '?')
    /// * `headers` - Optional additional headers
    pub async fn get_text(
        &self,
        path: &str,
        query: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<String, RestError> {
        let url = self.build_url(path, query);
        tracing::debug!(url = %url, "GET request");

        let mut request = self.client.get(&url);

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        let response = request.send().await?;
        self.handle_text_response(response).await
    }

    /// Make a POST request with a raw body and return the response body
    /// verbatim.
    ///
    /// # Arguments
    /// * `path` - Request path
    /// * `body` - Optional request body, sent as-is
    /// * `headers` - Optional additional headers
    pub async fn post_text(
        &self,
        path: &str,
        body: Option<&str>,
        headers: Option<&[(&str, &str)]>,
    ) -> Result<String, RestError> {
        let url = self.build_url(path, None);
        tracing::debug!(url = %url, "POST request");

        let mut request = self.client.post(&url);

        if let Some(b) = body {
            request = request
                .header("Content-Type", "application/json")
                .body(b.to_string());
        }

        if let Some(hdrs) = headers {
            for (key, value) in hdrs {
                request = request.header(*key, *value);
            }
        }

        let response = request.send().await?;
        self.handle_text_response(response).await
    }

    /// Build a full URL from path and optional query string.
    fn build_url(&self, path: &str, query: Option<&str>) -> String {
        match query {
            Some(q) if !q.is_empty() => format!("{}{}?{}", self.base_url, path, q),
            _ => format!("{}{}", self.base_url, path),
        }
    }

    /// Handle HTTP response, surfacing non-2xx statuses with their bodies.
    async fn handle_text_response(&self, response: Response) -> Result<String, RestError> {
        let status = response.status();

        if status.is_success() {
            Ok(response.text().await?)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(RestError::HttpError {
                status: status.as_u16(),
                message: body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_no_query() {
        let client = RestClient::with_default_timeout("https://api.example.com").unwrap();
        assert_eq!(
            client.build_url("/trade-api/v2/markets", None),
            "https://api.example.com/trade-api/v2/markets"
        );
    }

    #[test]
    fn test_build_url_with_query() {
        let client = RestClient::with_default_timeout("https://api.example.com").unwrap();
        assert_eq!(
            client.build_url("/trade-api/v2/markets", Some("limit=10&cursor=abc")),
            "https://api.example.com/trade-api/v2/markets?limit=10&cursor=abc"
        );
    }

    #[test]
    fn test_build_url_strips_trailing_slash() {
        let client = RestClient::with_default_timeout("https://api.example.com/").unwrap();
        assert_eq!(
            client.build_url("/trade-api/v2/markets", None),
            "https://api.example.com/trade-api/v2/markets"
        );
    }

    #[test]
    fn test_build_url_empty_query() {
        let client = RestClient::with_default_timeout("https://api.example.com").unwrap();
        assert_eq!(
            client.build_url("/trade-api/v2/markets", Some("")),
            "https://api.example.com/trade-api/v2/markets"
        );
    }
}
