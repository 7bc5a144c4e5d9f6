//! Generic REST client infrastructure.
//!
//! This crate provides a thin wrapper around `reqwest` with:
//!
//! - Consistent error handling via `RestError`
//! - GET and POST with raw text response bodies, returned verbatim
//! - Header injection for authentication
//!
//! # Example
//!
//! ```rust,ignore
//! use rest_client::RestClient;
//!
//! let client = RestClient::with_default_timeout("https://api.elections.kalshi.com")?;
//! let body = client.get_text("/trade-api/v2/markets", None, None).await?;
//! ```

mod client;
mod error;

pub use client::RestClient;
pub use error::RestError;
