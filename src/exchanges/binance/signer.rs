use crate::core::kernel::{hmac_sha256_hex, SignatureResult, Signer};
use chrono::Utc;
use std::collections::HashMap;

pub const API_KEY_HEADER: &str = "X-MBX-APIKEY";

pub struct BinanceSigner {
    api_key: String,
    secret_key: String,
}

impl BinanceSigner {
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key,
            secret_key,
        }
    }
}

impl std::fmt::Debug for BinanceSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceSigner").finish_non_exhaustive()
    }
}

impl Signer for BinanceSigner {
    fn api_key_headers(&self) -> HashMap<String, String> {
        HashMap::from([(API_KEY_HEADER.to_string(), self.api_key.clone())])
    }

    fn sign_request(
        &self,
        _method: &str,
        _endpoint: &str,
        query_string: &str,
        body: &[u8],
    ) -> SignatureResult {
        // The signed payload is the query string followed by the raw body
        let payload = if body.is_empty() {
            query_string.to_string()
        } else {
            format!("{}{}", query_string, String::from_utf8_lossy(body))
        };

        let signature = hmac_sha256_hex(&self.secret_key, &payload)?;

        Ok((
            self.api_key_headers(),
            vec![("signature".to_string(), signature)],
        ))
    }
}

/// Current wall-clock time in epoch milliseconds
pub fn get_timestamp() -> u64 {
    u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default()
}
