use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClient};
use crate::exchanges::binance::builder::build_service;
use crate::exchanges::binance::rest::BinanceRestClient;
use crate::exchanges::binance::types::{Asset, ExchangeInfo};
use std::future::Future;
use tokio::runtime::{Builder, Runtime};

/// Synchronous client for the Binance spot REST API
///
/// Every method sends exactly one HTTP request and blocks until it completes.
/// The client owns a single-threaded runtime for this, so it must not be
/// used from inside another async runtime; async code should use
/// [`BinanceRestClient`] directly.
pub struct BinanceApiRestClient<R: RestClient = ReqwestRest> {
    pub(crate) rest: BinanceRestClient<R>,
    runtime: Runtime,
}

impl<R: RestClient> std::fmt::Debug for BinanceApiRestClient<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinanceApiRestClient").finish_non_exhaustive()
    }
}

impl BinanceApiRestClient {
    /// Create a client for the production API with the given credentials
    pub fn new(
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Result<Self, ExchangeError> {
        Self::from_config(ExchangeConfig::new(api_key.into(), secret_key.into()))
    }

    /// Create a client without credentials, limited to public endpoints
    pub fn read_only() -> Result<Self, ExchangeError> {
        Self::from_config(ExchangeConfig::read_only())
    }

    pub fn from_config(config: ExchangeConfig) -> Result<Self, ExchangeError> {
        Self::with_service(build_service(&config)?)
    }
}

impl<R: RestClient> BinanceApiRestClient<R> {
    /// Wrap an existing transport
    pub fn with_rest(rest: R) -> Result<Self, ExchangeError> {
        Self::with_service(BinanceRestClient::new(rest))
    }

    pub fn with_service(rest: BinanceRestClient<R>) -> Result<Self, ExchangeError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                ExchangeError::ConfigurationError(format!("Failed to start runtime: {}", e))
            })?;

        Ok(Self { rest, runtime })
    }

    /// The async service layer behind this client
    pub fn service(&self) -> &BinanceRestClient<R> {
        &self.rest
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    // General endpoints

    /// Test connectivity to the REST API
    pub fn ping(&self) -> Result<(), ExchangeError> {
        self.block_on(self.rest.ping())
    }

    /// Current server time in epoch milliseconds
    pub fn get_server_time(&self) -> Result<i64, ExchangeError> {
        self.block_on(self.rest.get_server_time())
            .map(|time| time.server_time)
    }

    /// Current exchange trading rules and symbol information
    pub fn get_exchange_info(&self) -> Result<ExchangeInfo, ExchangeError> {
        self.block_on(self.rest.get_exchange_info())
    }

    /// All supported assets and whether they can be withdrawn
    pub fn get_all_assets(&self) -> Result<Vec<Asset>, ExchangeError> {
        self.block_on(self.rest.get_all_assets())
    }
}
