//! Kalshi REST API error types.

use auth::AuthError;
use rest_client::RestError;
use thiserror::Error;

/// Errors that can occur when interacting with the Kalshi REST API.
#[derive(Debug, Error)]
pub enum KalshiRestError {
    /// REST client error (network, timeout, upstream status).
    #[error("REST client error: {0}")]
    Rest(#[from] RestError),

    /// Authentication error (key loading or signing).
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),

    /// Failed to parse a response body into a typed structure.
    #[error("Response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
