use crate::core::errors::ExchangeError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use std::collections::HashMap;

/// Result type for signing operations: (headers, `extra_query_params`)
pub type SignatureResult = Result<(HashMap<String, String>, Vec<(String, String)>), ExchangeError>;

/// Signer trait for request authentication
///
/// Implementations know which headers identify the caller and how the
/// exchange expects a request to be signed. The transport decides, per call,
/// whether it needs only the identifying headers or a full signature.
pub trait Signer: Send + Sync {
    /// Headers that identify the caller without signing the request
    ///
    /// Used by endpoints that only require an API key.
    fn api_key_headers(&self) -> HashMap<String, String>;

    /// Sign a request and return headers and query parameters to append
    ///
    /// # Arguments
    /// * `method` - HTTP method (GET, POST, etc.)
    /// * `endpoint` - API endpoint path
    /// * `query_string` - Encoded query string (without leading '?')
    /// * `body` - Raw request body bytes
    fn sign_request(
        &self,
        method: &str,
        endpoint: &str,
        query_string: &str,
        body: &[u8],
    ) -> SignatureResult;
}

/// Hex-encoded HMAC-SHA256 of `payload` keyed by `secret`
pub fn hmac_sha256_hex(secret: &str, payload: &str) -> Result<String, ExchangeError> {
    let mut mac = Hmac::<Sha256>::new_from_slice(secret.as_bytes())
        .map_err(|e| ExchangeError::AuthError(format!("Invalid secret key: {}", e)))?;

    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}
