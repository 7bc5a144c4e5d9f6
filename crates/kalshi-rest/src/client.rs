//! Kalshi REST API client.

use crate::error::KalshiRestError;
use crate::responses::MarketsResponse;
use auth::{KalshiCredentials, RequestSigner};
use common::KalshiEnvironment;
use rest_client::RestClient;
use std::time::Duration;

/// Request timeout for Kalshi API calls.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Path for the markets listing endpoint.
const MARKETS_PATH: &str = "/trade-api/v2/markets";

/// Kalshi REST API client with request signing.
///
/// The private key is parsed once at construction; each request then gets
/// its own timestamped signature, so a shared reference can serve
/// concurrent calls without synchronization.
pub struct KalshiRestClient {
    client: RestClient,
    signer: RequestSigner,
    environment: KalshiEnvironment,
}

impl KalshiRestClient {
    /// Create a new Kalshi REST client for production.
    ///
    /// # Arguments
    /// * `credentials` - API key identifier and private key PEM
    ///
    /// # Errors
    /// Returns an error if the private key cannot be loaded or the HTTP
    /// client cannot be built.
    pub fn new(credentials: &KalshiCredentials) -> Result<Self, KalshiRestError> {
        Self::with_environment(credentials, KalshiEnvironment::Production)
    }

    /// Create a new Kalshi REST client for a specific environment.
    ///
    /// # Arguments
    /// * `credentials` - API key identifier and private key PEM
    /// * `environment` - Production or Demo
    ///
    /// # Errors
    /// Returns an error if the private key cannot be loaded or the HTTP
    /// client cannot be built.
    pub fn with_environment(
        credentials: &KalshiCredentials,
        environment: KalshiEnvironment,
    ) -> Result<Self, KalshiRestError> {
        let client = RestClient::new(environment.rest_base_url(), REQUEST_TIMEOUT)?;
        let signer = RequestSigner::new(credentials)?;

        Ok(Self {
            client,
            signer,
            environment,
        })
    }

    /// Get the environment this client is connected to.
    pub fn environment(&self) -> KalshiEnvironment {
        self.environment
    }

    /// Get the API key identifier (for logging/debugging).
    pub fn api_key_id(&self) -> &str {
        self.signer.api_key_id()
    }

    // ========================================================================
    // Market Data
    // ========================================================================

    /// Get the markets listing.
    ///
    /// GET /trade-api/v2/markets
    ///
    /// Returns the response body exactly as the API sent it.
    pub async fn get_markets(&self) -> Result<String, KalshiRestError> {
        self.get(MARKETS_PATH).await
    }

    /// Get the markets listing as a typed structure.
    pub async fn markets(&self) -> Result<MarketsResponse, KalshiRestError> {
        let body = self.get_markets().await?;
        let parsed: MarketsResponse = serde_json::from_str(&body)?;

        tracing::debug!(
            markets = parsed.markets.len(),
            has_cursor = parsed.cursor.is_some(),
            "Parsed markets response"
        );

        Ok(parsed)
    }

    // ========================================================================
    // Signed Passthrough
    // ========================================================================

    /// Make a signed GET request and return the body verbatim.
    ///
    /// The signature covers the path exactly as given, with an empty body.
    pub async fn get(&self, path: &str) -> Result<String, KalshiRestError> {
        let headers = self.signer.sign("GET", path, "")?;

        tracing::debug!(path = %path, timestamp = %headers.timestamp, "Signed GET");

        let body = self
            .client
            .get_text(path, None, Some(&headers.as_pairs()))
            .await?;

        Ok(body)
    }

    /// Make a signed POST request and return the body verbatim.
    ///
    /// The request body participates in the signed payload, so it must be
    /// sent byte-for-byte as signed.
    pub async fn post(&self, path: &str, body: &str) -> Result<String, KalshiRestError> {
        let headers = self.signer.sign("POST", path, body)?;

        tracing::debug!(path = %path, timestamp = %headers.timestamp, "Signed POST");

        let response = self
            .client
            .post_text(path, Some(body), Some(&headers.as_pairs()))
            .await?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PKCS8_PEM: &str = include_str!("../../auth/testdata/key_pkcs8.pem");

    fn test_client(environment: KalshiEnvironment) -> KalshiRestClient {
        let credentials = KalshiCredentials::new("test-key-id".into(), PKCS8_PEM.into());
        KalshiRestClient::with_environment(&credentials, environment).unwrap()
    }

    #[test]
    fn test_construction_parses_key_once() {
        let client = test_client(KalshiEnvironment::Demo);
        assert_eq!(client.api_key_id(), "test-key-id");
        assert_eq!(client.environment(), KalshiEnvironment::Demo);
    }

    #[test]
    fn test_default_environment_is_production() {
        let credentials = KalshiCredentials::new("test-key-id".into(), PKCS8_PEM.into());
        let client = KalshiRestClient::new(&credentials).unwrap();
        assert!(client.environment().is_production());
    }

    #[test]
    fn test_construction_fails_on_bad_key() {
        let credentials = KalshiCredentials::new("test-key-id".into(), "garbage".into());
        let result = KalshiRestClient::new(&credentials);
        assert!(matches!(result, Err(KalshiRestError::Auth(_))));
    }
}
