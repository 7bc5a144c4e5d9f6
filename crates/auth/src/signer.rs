//! RSA-SHA256 request signing for the Kalshi API.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::prelude::{Engine as _, BASE64_STANDARD};
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha2::Sha256;

use crate::credentials::KalshiCredentials;
use crate::error::AuthError;
use crate::key;

/// Header carrying the API key identifier.
pub const ACCESS_KEY_HEADER: &str = "KALSHI-ACCESS-KEY";
/// Header carrying the epoch-seconds timestamp embedded in the signature.
pub const ACCESS_TIMESTAMP_HEADER: &str = "KALSHI-ACCESS-TIMESTAMP";
/// Header carrying the base64-encoded RSA signature.
pub const ACCESS_SIGNATURE_HEADER: &str = "KALSHI-ACCESS-SIGNATURE";

/// The three authentication header values for one outgoing request.
///
/// Produced fresh on every signing call and never reused: the timestamp is
/// part of the signed payload, so a stale triple stops verifying once the
/// upstream staleness window passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthHeaders {
    /// API key identifier, passed through unchanged.
    pub api_key_id: String,
    /// Integer seconds since the Unix epoch, as a decimal string.
    pub timestamp: String,
    /// Base64 (standard alphabet, padded) RSA-SHA256 signature.
    pub signature: String,
}

impl AuthHeaders {
    /// Header name/value pairs in the shape the transport layer takes.
    pub fn as_pairs(&self) -> [(&'static str, &str); 3] {
        [
            (ACCESS_KEY_HEADER, self.api_key_id.as_str()),
            (ACCESS_TIMESTAMP_HEADER, self.timestamp.as_str()),
            (ACCESS_SIGNATURE_HEADER, self.signature.as_str()),
        ]
    }
}

/// Request signer for authenticated Kalshi API calls.
///
/// Parses the private key once at construction; after that each `sign` call
/// only reads the immutable key and identity, so a shared reference can be
/// used freely from concurrent tasks.
pub struct RequestSigner {
    api_key_id: String,
    signing_key: SigningKey<Sha256>,
}

impl RequestSigner {
    /// Create a signer from credentials, loading the private key.
    ///
    /// # Errors
    /// Returns `UnsupportedKeyFormat` or `MalformedKey` if the PEM text
    /// cannot be turned into an RSA private key. Fatal at startup; nothing
    /// can be signed without a key.
    pub fn new(credentials: &KalshiCredentials) -> Result<Self, AuthError> {
        let private_key = key::load_private_key(credentials.expose_private_key_pem())?;

        Ok(Self {
            api_key_id: credentials.api_key_id().to_string(),
            signing_key: SigningKey::<Sha256>::new(private_key),
        })
    }

    /// Sign a request at the current time.
    ///
    /// Builds the canonical payload `timestamp + METHOD + path + body`
    /// (no separators, method upper-cased, body empty string if none),
    /// signs it with RSA PKCS#1 v1.5 over SHA-256, and returns the three
    /// header values.
    ///
    /// # Errors
    /// `AuthError::Signing` only if the underlying primitive rejects the
    /// operation; never under normal use.
    pub fn sign(&self, method: &str, path: &str, body: &str) -> Result<AuthHeaders, AuthError> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is before the Unix epoch")
            .as_secs();

        self.sign_at(method, path, body, timestamp)
    }

    /// Sign a request with an explicit timestamp (seconds since epoch).
    ///
    /// `sign` delegates here; tests use it to pin the payload.
    pub fn sign_at(
        &self,
        method: &str,
        path: &str,
        body: &str,
        timestamp: u64,
    ) -> Result<AuthHeaders, AuthError> {
        let payload = format!("{timestamp}{}{path}{body}", method.to_uppercase());

        let signature = self
            .signing_key
            .try_sign(payload.as_bytes())
            .map_err(|e| AuthError::Signing(e.to_string()))?;

        Ok(AuthHeaders {
            api_key_id: self.api_key_id.clone(),
            timestamp: timestamp.to_string(),
            signature: BASE64_STANDARD.encode(signature.to_bytes()),
        })
    }

    /// The API key identifier this signer was built with.
    pub fn api_key_id(&self) -> &str {
        &self.api_key_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rsa::pkcs1v15::{Signature, VerifyingKey};
    use rsa::signature::Verifier;

    const PKCS1_PEM: &str = include_str!("../testdata/key_pkcs1.pem");
    const PKCS8_PEM: &str = include_str!("../testdata/key_pkcs8.pem");

    /// RSA-SHA256 signature of the literal string
    /// `1700000000GET/trade-api/v2/markets` under the test key, computed
    /// independently with `openssl dgst -sha256 -sign`.
    const GOLDEN_SIGNATURE: &str = "XW+t/qwF7Wo5DHKDzUxYZzwO4pLx5J1XJwaVRjrwcOcgnvO9fSF5tBAUOx7Japzd2Lhd2ywBSES3sng9KHhhK0/ZjrIG2ML8S/pf25M+DYJjONJzQKVwueyBChvVQTy2+UXYupJ1rmc7cuvgMwp5eZ9cQOJ+x3sEG21LNIEEqQ+ky+l3cVE0ICeX6Kt5u1xqp7LxRImfVoIlK3sF2GtQOxlSHetkrMNqb8ctr6xznnUWpYXDEseVbBTZ6Thc0+4Q76mC6phQrsJsEZvOsvZbGrBD5trCMSYqlLaOjNkBGXAC5rWdF1m/a3rqMgftjoIQL1+c0NoRsCiDa4sNeZEC1w==";

    fn signer(pem: &str) -> RequestSigner {
        let creds = KalshiCredentials::new("test-key-id".into(), pem.into());
        RequestSigner::new(&creds).expect("test key should load")
    }

    #[test]
    fn test_golden_vector() {
        // PKCS#1 v1.5 signatures are deterministic, so this must reproduce
        // the openssl-computed value exactly.
        let headers = signer(PKCS1_PEM)
            .sign_at("GET", "/trade-api/v2/markets", "", 1_700_000_000)
            .unwrap();

        assert_eq!(headers.api_key_id, "test-key-id");
        assert_eq!(headers.timestamp, "1700000000");
        assert_eq!(headers.signature, GOLDEN_SIGNATURE);
    }

    #[test]
    fn test_pkcs1_and_pkcs8_sign_identically() {
        let a = signer(PKCS1_PEM)
            .sign_at("GET", "/trade-api/v2/markets", "", 1_700_000_000)
            .unwrap();
        let b = signer(PKCS8_PEM)
            .sign_at("GET", "/trade-api/v2/markets", "", 1_700_000_000)
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_method_is_uppercased() {
        let s = signer(PKCS8_PEM);
        let lower = s.sign_at("get", "/trade-api/v2/markets", "", 42).unwrap();
        let upper = s.sign_at("GET", "/trade-api/v2/markets", "", 42).unwrap();
        assert_eq!(lower.signature, upper.signature);
    }

    #[test]
    fn test_different_timestamps_differ() {
        let s = signer(PKCS8_PEM);
        let first = s.sign_at("GET", "/trade-api/v2/markets", "", 1_700_000_000).unwrap();
        let second = s.sign_at("GET", "/trade-api/v2/markets", "", 1_700_000_001).unwrap();
        assert_ne!(first.signature, second.signature);
    }

    #[test]
    fn test_body_is_part_of_payload() {
        let s = signer(PKCS8_PEM);
        let empty = s.sign_at("POST", "/trade-api/v2/orders", "", 42).unwrap();
        let with_body = s
            .sign_at("POST", "/trade-api/v2/orders", r#"{"count":1}"#, 42)
            .unwrap();
        assert_ne!(empty.signature, with_body.signature);
    }

    #[test]
    fn test_signature_verifies_against_public_key() {
        let private_key = crate::key::load_private_key(PKCS8_PEM).unwrap();
        let verifying_key = VerifyingKey::<Sha256>::new(private_key.to_public_key());

        let headers = signer(PKCS8_PEM)
            .sign_at("GET", "/trade-api/v2/markets", "", 1_700_000_000)
            .unwrap();

        let raw = BASE64_STANDARD.decode(&headers.signature).unwrap();
        let signature = Signature::try_from(raw.as_slice()).unwrap();
        verifying_key
            .verify(b"1700000000GET/trade-api/v2/markets", &signature)
            .expect("signature should verify over the canonical payload");
    }

    #[test]
    fn test_sign_uses_current_time() {
        let headers = signer(PKCS8_PEM).sign("GET", "/trade-api/v2/markets", "").unwrap();
        let ts: u64 = headers.timestamp.parse().expect("decimal timestamp");
        assert!(ts >= 1_700_000_000);
    }

    #[test]
    fn test_as_pairs_shape() {
        let headers = signer(PKCS8_PEM)
            .sign_at("GET", "/trade-api/v2/markets", "", 1_700_000_000)
            .unwrap();
        let pairs = headers.as_pairs();

        assert_eq!(pairs[0].0, "KALSHI-ACCESS-KEY");
        assert_eq!(pairs[0].1, "test-key-id");
        assert_eq!(pairs[1].0, "KALSHI-ACCESS-TIMESTAMP");
        assert_eq!(pairs[1].1, "1700000000");
        assert_eq!(pairs[2].0, "KALSHI-ACCESS-SIGNATURE");
        assert_eq!(pairs[2].1, GOLDEN_SIGNATURE);
    }
}
