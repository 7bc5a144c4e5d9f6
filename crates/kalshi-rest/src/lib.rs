//! Kalshi REST API client.
//!
//! This crate provides a client for the Kalshi trading API with:
//!
//! - **Request signing**: every call is signed with RSA-SHA256 and carries
//!   the three `KALSHI-ACCESS-*` headers
//! - **Verbatim passthrough**: response bodies are returned exactly as the
//!   API sent them, with typed variants for callers that want structure
//! - **Error handling**: typed errors composing transport, auth, and parse
//!   failures
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::KalshiCredentials;
//! use kalshi_rest::KalshiRestClient;
//!
//! // Load credentials from environment
//! let credentials = KalshiCredentials::from_env()?;
//! let client = KalshiRestClient::new(&credentials)?;
//!
//! // Fetch markets (raw body, verbatim)
//! let body = client.get_markets().await?;
//!
//! // Or typed
//! let markets = client.markets().await?;
//! ```

mod client;
mod error;
mod responses;

pub use client::KalshiRestClient;
pub use error::KalshiRestError;
pub use responses::{Market, MarketsResponse};
