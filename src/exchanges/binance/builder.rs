use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use crate::exchanges::binance::{
    client::BinanceApiRestClient, rest::BinanceRestClient, signer::BinanceSigner,
};
use std::sync::Arc;

/// Create the HTTP transport, signing requests when credentials are present
pub fn build_rest(config: &ExchangeConfig) -> Result<ReqwestRest, ExchangeError> {
    let rest_config =
        RestClientConfig::new(config.resolved_base_url(), "binance".to_string()).with_timeout(30);

    let mut rest_builder = RestClientBuilder::new(rest_config);

    if config.has_credentials() {
        let signer = Arc::new(BinanceSigner::new(
            config.api_key().to_string(),
            config.secret_key().to_string(),
        ));
        rest_builder = rest_builder.with_signer(signer);
    }

    rest_builder.build()
}

/// Create the async service client
pub fn build_service(
    config: &ExchangeConfig,
) -> Result<BinanceRestClient<ReqwestRest>, ExchangeError> {
    Ok(BinanceRestClient::new(build_rest(config)?)
        .with_asset_info_base_url(config.resolved_asset_info_base_url()))
}

/// Create the blocking client
pub fn build_client(config: ExchangeConfig) -> Result<BinanceApiRestClient, ExchangeError> {
    BinanceApiRestClient::from_config(config)
}
