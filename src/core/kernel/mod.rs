//! Transport kernel shared by the exchange clients
//!
//! The kernel owns HTTP mechanics only: building URLs, encoding query
//! parameters, attaching authentication and turning non-2xx responses into
//! `ExchangeError::ApiError`. It knows nothing about individual endpoints.
//!
//! ## Transport
//! - `RestClient`: async request interface, one call per HTTP exchange
//! - `ReqwestRest`: the reqwest-backed implementation
//! - `Security`: the authentication level a call requires
//!
//! ## Authentication
//! - `Signer`: pluggable request signing
//! - `hmac_sha256_hex`: HMAC-SHA256 helper for signers
//!
//! # Example
//! ```rust,no_run
//! use binance_api_client::core::kernel::*;
//! use binance_api_client::exchanges::binance::signer::BinanceSigner;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let rest_config = RestClientConfig::new(
//!     "https://api.binance.com".to_string(),
//!     "binance".to_string(),
//! );
//! let signer = Arc::new(BinanceSigner::new("api_key".to_string(), "secret".to_string()));
//! let rest = RestClientBuilder::new(rest_config)
//!     .with_signer(signer)
//!     .build()?;
//!
//! let time = rest.get("/api/v3/time", &[], Security::None).await?;
//! println!("{} -> {}", time.status, time.body);
//! # Ok(())
//! # }
//! ```

pub mod rest;
pub mod signer;

pub use rest::{
    encode_query, PreparedRequest, ReqwestRest, RestClient, RestClientBuilder, RestClientConfig,
    RestResponse, Security,
};
pub use signer::{hmac_sha256_hex, SignatureResult, Signer};
