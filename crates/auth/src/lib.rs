//! Authentication and signing for the Kalshi trading API.
//!
//! This crate provides secure credential management, private key loading,
//! and per-request signing for authenticated Kalshi API calls.
//!
//! # Features
//!
//! - **Secure Credentials**: the private key PEM is wrapped in `SecretString`
//!   to prevent accidental logging and ensure memory is zeroed on drop.
//! - **Key Loading**: accepts RSA private keys in PKCS#8 (`BEGIN PRIVATE KEY`)
//!   or PKCS#1 (`BEGIN RSA PRIVATE KEY`) PEM form; PKCS#1 keys are wrapped
//!   into PKCS#8 internally. OpenSSH-format keys are rejected with an
//!   explicit conversion hint.
//! - **RSA-SHA256 Signing**: implements the `SHA256withRSA` (PKCS#1 v1.5)
//!   signing scheme Kalshi requires, over the canonical payload
//!   `timestamp + METHOD + path + body`.
//! - **Environment Loading**: credentials can be loaded from environment
//!   variables or a `.env` file.
//!
//! # Example
//!
//! ```rust,ignore
//! use auth::{KalshiCredentials, RequestSigner};
//!
//! // Load credentials from environment
//! let credentials = KalshiCredentials::from_env()?;
//!
//! // Create a signer (parses the key once)
//! let signer = RequestSigner::new(&credentials)?;
//!
//! // Sign a request
//! let headers = signer.sign("GET", "/trade-api/v2/markets", "")?;
//! ```

mod credentials;
mod der;
mod error;
mod key;
mod signer;

pub use credentials::KalshiCredentials;
pub use error::AuthError;
pub use key::{load_private_key, PemFormat};
pub use signer::{
    AuthHeaders, RequestSigner, ACCESS_KEY_HEADER, ACCESS_SIGNATURE_HEADER,
    ACCESS_TIMESTAMP_HEADER,
};
