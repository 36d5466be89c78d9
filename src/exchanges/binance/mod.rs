pub mod account;
pub mod builder;
pub mod client;
pub mod converters;
pub mod market_data;
pub mod requests;
pub mod rest;
pub mod signer;
pub mod trading;
pub mod types;

// Re-export main types for easier importing
pub use builder::{build_client, build_rest, build_service};
pub use client::BinanceApiRestClient;
pub use requests::{
    AllOrdersRequest, CancelOrderRequest, NewOrder, OrderRequest, OrderStatusRequest,
    DEFAULT_RECV_WINDOW,
};
pub use rest::BinanceRestClient;
pub use signer::BinanceSigner;
pub use types::{
    Account, AggTrade, Asset, AssetBalance, BookTicker, CancelOrderResponse, Candlestick,
    DepositAddress, DepositHistory, ExchangeInfo, NewOrderResponse, OcoOrderResponse, Order,
    OrderBook, OrderBookEntry, SymbolInfo, TickerPrice, TickerStatistics, Trade,
    TradeHistoryItem, WithdrawHistory, WithdrawResult,
};
