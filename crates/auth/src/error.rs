use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// All of these are configuration or integrity errors: none is transient,
/// and none should be retried. Key-loading failures are fatal at startup.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// The private key file could not be read.
    #[error("Failed to read private key file '{path}': {source}")]
    KeyFile {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The PEM text does not match a supported private key encoding.
    #[error("Unsupported private key format: {0}")]
    UnsupportedKeyFormat(String),

    /// A supported marker matched but base64/DER decoding or key
    /// construction failed.
    #[error("Malformed private key: {0}")]
    MalformedKey(String),

    /// The underlying cryptographic primitive rejected the sign operation.
    /// Retrying with the same key will reproduce it.
    #[error("Signing failure: {0}")]
    Signing(String),
}
