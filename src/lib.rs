pub mod core;
pub mod exchanges;

pub use crate::core::{config::ExchangeConfig, errors::ExchangeError, types::*};
pub use exchanges::binance::{
    AllOrdersRequest, BinanceApiRestClient, BinanceRestClient, CancelOrderRequest, NewOrder,
    OrderRequest, OrderStatusRequest,
};
