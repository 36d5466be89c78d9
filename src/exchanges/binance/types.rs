use crate::core::types::{
    ContingencyType, OcoOrderStatus, OcoStatus, OrderSide, OrderStatus, OrderType, TimeInForce,
};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// Field the exchange may leave out or send as `null`. `None` means the key
/// was absent, `Some(None)` that it arrived as `null`.
pub type Nullable<T> = Option<Option<T>>;

mod nullable {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Some)
    }
}

// General endpoint types

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerTime {
    pub server_time: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeInfo {
    pub timezone: String,
    pub server_time: i64,
    pub rate_limits: Vec<RateLimit>,
    #[serde(default)]
    pub exchange_filters: Vec<Value>,
    pub symbols: Vec<SymbolInfo>,
}

impl ExchangeInfo {
    pub fn symbol_info(&self, symbol: &str) -> Option<&SymbolInfo> {
        self.symbols.iter().find(|info| info.symbol == symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    pub rate_limit_type: String,
    pub interval: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_num: Option<u32>,
    pub limit: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: String,
    pub base_asset: String,
    pub base_asset_precision: u32,
    pub quote_asset: String,
    pub quote_precision: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_asset_precision: Option<u32>,
    pub order_types: Vec<OrderType>,
    pub iceberg_allowed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oco_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_order_qty_market_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_spot_trading_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_margin_trading_allowed: Option<bool>,
    pub filters: Vec<SymbolFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl SymbolInfo {
    /// Filter of the given type, e.g. `PRICE_FILTER` or `LOT_SIZE`
    pub fn filter(&self, filter_type: &str) -> Option<&SymbolFilter> {
        self.filters
            .iter()
            .find(|filter| filter.filter_type == filter_type)
    }
}

/// Trading rule attached to a symbol. Parameters differ per filter type and
/// are kept as sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolFilter {
    pub filter_type: String,
    #[serde(flatten)]
    pub params: BTreeMap<String, Value>,
}

impl SymbolFilter {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params.get(key).and_then(Value::as_str)
    }
}

/// Asset listing from the general-info endpoint. Numeric fields are not
/// consistently typed by that endpoint and are kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: Value,
    pub asset_code: String,
    pub asset_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_fee: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commission_rate: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_audit_withdraw_amt: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_user_charge_amount: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_product_withdraw: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub withdraw_integer_multiple: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_times: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_withdraw: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_legal_money: Option<bool>,
}

// Market data types

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderBook {
    pub last_update_id: u64,
    pub bids: Vec<OrderBookEntry>,
    pub asks: Vec<OrderBookEntry>,
}

impl OrderBook {
    pub fn best_bid(&self) -> Option<&OrderBookEntry> {
        self.bids.first()
    }

    pub fn best_ask(&self) -> Option<&OrderBookEntry> {
        self.asks.first()
    }
}

/// Price level, sent on the wire as `[price, qty]`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct OrderBookEntry {
    pub price: String,
    pub qty: String,
}

impl From<(String, String)> for OrderBookEntry {
    fn from((price, qty): (String, String)) -> Self {
        Self { price, qty }
    }
}

impl From<OrderBookEntry> for (String, String) {
    fn from(entry: OrderBookEntry) -> Self {
        (entry.price, entry.qty)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeHistoryItem {
    pub id: u64,
    pub price: String,
    pub qty: String,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub quote_qty: Nullable<String>,
    pub time: i64,
    pub is_buyer_maker: bool,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_best_match: Nullable<bool>,
}

/// Trades that filled at the same time, from the same order, at the same price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggTrade {
    #[serde(rename = "a")]
    pub aggregated_trade_id: u64,
    #[serde(rename = "p")]
    pub price: String,
    #[serde(rename = "q")]
    pub quantity: String,
    #[serde(rename = "f")]
    pub first_breakdown_trade_id: u64,
    #[serde(rename = "l")]
    pub last_breakdown_trade_id: u64,
    #[serde(rename = "T")]
    pub trade_time: i64,
    #[serde(rename = "m")]
    pub is_buyer_maker: bool,
    #[serde(rename = "M")]
    pub is_best_match: bool,
}

/// Kline bar, sent on the wire as a positional array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CandlestickRow", into = "CandlestickRow")]
pub struct Candlestick {
    pub open_time: i64,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: String,
    pub close_time: i64,
    pub quote_asset_volume: String,
    pub number_of_trades: i64,
    pub taker_buy_base_asset_volume: String,
    pub taker_buy_quote_asset_volume: String,
    pub ignore: String,
}

#[derive(Serialize, Deserialize)]
struct CandlestickRow(
    i64,
    String,
    String,
    String,
    String,
    String,
    i64,
    String,
    i64,
    String,
    String,
    String,
);

impl From<CandlestickRow> for Candlestick {
    fn from(row: CandlestickRow) -> Self {
        Self {
            open_time: row.0,
            open: row.1,
            high: row.2,
            low: row.3,
            close: row.4,
            volume: row.5,
            close_time: row.6,
            quote_asset_volume: row.7,
            number_of_trades: row.8,
            taker_buy_base_asset_volume: row.9,
            taker_buy_quote_asset_volume: row.10,
            ignore: row.11,
        }
    }
}

impl From<Candlestick> for CandlestickRow {
    fn from(bar: Candlestick) -> Self {
        Self(
            bar.open_time,
            bar.open,
            bar.high,
            bar.low,
            bar.close,
            bar.volume,
            bar.close_time,
            bar.quote_asset_volume,
            bar.number_of_trades,
            bar.taker_buy_base_asset_volume,
            bar.taker_buy_quote_asset_volume,
            bar.ignore,
        )
    }
}

/// 24 hour rolling window price change statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TickerStatistics {
    pub symbol: String,
    pub price_change: String,
    pub price_change_percent: String,
    pub weighted_avg_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_close_price: Option<String>,
    pub last_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_qty: Option<String>,
    pub bid_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bid_qty: Option<String>,
    pub ask_price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ask_qty: Option<String>,
    pub open_price: String,
    pub high_price: String,
    pub low_price: String,
    pub volume: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_volume: Option<String>,
    pub open_time: i64,
    pub close_time: i64,
    pub first_id: i64,
    pub last_id: i64,
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerPrice {
    pub symbol: String,
    pub price: String,
}

/// Best price and quantity on the order book
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookTicker {
    pub symbol: String,
    pub bid_price: String,
    pub bid_qty: String,
    pub ask_price: String,
    pub ask_qty: String,
}

// Trading types

/// Response to an order placement. Which fields are present depends on the
/// requested `NewOrderResponseType`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderResponse {
    pub symbol: String,
    pub order_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_list_id: Option<i64>,
    pub client_order_id: String,
    pub transact_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cummulative_quote_qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fills: Option<Vec<Fill>>,
}

/// Partial fill reported with a FULL order response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fill {
    pub price: String,
    pub qty: String,
    pub commission: String,
    pub commission_asset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trade_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcoOrderResponse {
    pub order_list_id: i64,
    pub contingency_type: ContingencyType,
    pub list_status_type: OcoStatus,
    pub list_order_status: OcoOrderStatus,
    pub list_client_order_id: String,
    pub transaction_time: i64,
    pub symbol: String,
    pub orders: Vec<OcoOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_reports: Option<Vec<OrderReport>>,
}

/// Leg of an order list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcoOrder {
    pub symbol: String,
    pub order_id: u64,
    pub client_order_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReport {
    pub symbol: String,
    pub order_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_list_id: Option<i64>,
    pub client_order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_client_order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transact_time: Option<i64>,
    pub price: String,
    pub orig_qty: String,
    pub executed_qty: String,
    pub cummulative_quote_qty: String,
    pub status: OrderStatus,
    pub time_in_force: TimeInForce,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: OrderSide,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iceberg_qty: Option<String>,
}

// Account types

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub symbol: String,
    pub order_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_list_id: Option<i64>,
    pub client_order_id: String,
    pub price: String,
    pub orig_qty: String,
    pub executed_qty: String,
    pub cummulative_quote_qty: String,
    pub status: OrderStatus,
    pub time_in_force: TimeInForce,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub side: OrderSide,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub stop_price: Nullable<String>,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub iceberg_qty: Nullable<String>,
    pub time: i64,
    pub update_time: i64,
    pub is_working: bool,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub orig_quote_order_qty: Nullable<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelOrderResponse {
    pub symbol: String,
    pub orig_client_order_id: String,
    pub order_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_list_id: Option<i64>,
    pub client_order_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orig_qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub executed_qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cummulative_quote_qty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<OrderStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_in_force: Option<TimeInForce>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<OrderType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub maker_commission: i64,
    pub taker_commission: i64,
    pub buyer_commission: i64,
    pub seller_commission: i64,
    pub can_trade: bool,
    pub can_withdraw: bool,
    pub can_deposit: bool,
    pub update_time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,
    pub balances: Vec<AssetBalance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
}

impl Account {
    /// Balance of `asset`, or an all-zero balance when the account holds none
    pub fn asset_balance(&self, asset: &str) -> AssetBalance {
        self.balances
            .iter()
            .find(|balance| balance.asset == asset)
            .cloned()
            .unwrap_or_else(|| AssetBalance {
                asset: asset.to_string(),
                free: "0".to_string(),
                locked: "0".to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetBalance {
    pub asset: String,
    pub free: String,
    pub locked: String,
}

/// Trade executed by the account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trade {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub order_id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_list_id: Option<i64>,
    pub price: String,
    pub qty: String,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub quote_qty: Nullable<String>,
    pub commission: String,
    pub commission_asset: String,
    pub time: i64,
    pub is_buyer: bool,
    pub is_maker: bool,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_best_match: Nullable<bool>,
}

// Wallet types

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithdrawResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositHistory {
    pub deposit_list: Vec<Deposit>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    pub insert_time: i64,
    pub amount: Number,
    pub asset: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_tag: Nullable<String>,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tx_id: Nullable<String>,
    /// 0 = pending, 1 = success
    pub status: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawHistory {
    pub withdraw_list: Vec<Withdraw>,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Withdraw {
    pub id: String,
    pub amount: Number,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_fee: Option<Number>,
    pub address: String,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_tag: Nullable<String>,
    pub asset: String,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub tx_id: Nullable<String>,
    pub apply_time: i64,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub success_time: Nullable<i64>,
    /// 0 = email sent, 1 = cancelled, 2 = awaiting approval, 3 = rejected,
    /// 4 = processing, 5 = failure, 6 = completed
    pub status: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositAddress {
    pub address: String,
    pub success: bool,
    #[serde(
        default,
        deserialize_with = "nullable::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub address_tag: Nullable<String>,
    pub asset: String,
}

// User data stream

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenKey {
    pub listen_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::de::DeserializeOwned;
    use serde_json::json;

    fn round_trip<T: DeserializeOwned + Serialize>(payload: &Value) -> T {
        let model: T = serde_json::from_value(payload.clone()).unwrap();
        assert_eq!(&serde_json::to_value(&model).unwrap(), payload);
        model
    }

    #[test]
    fn test_full_order_response_round_trip() {
        let payload = json!({
            "symbol": "BTCUSDT",
            "orderId": 28,
            "orderListId": -1,
            "clientOrderId": "6gCrw2kRUAF9CvJDGP16IP",
            "transactTime": 1_507_725_176_595_i64,
            "price": "0.00000000",
            "origQty": "10.00000000",
            "executedQty": "10.00000000",
            "cummulativeQuoteQty": "10.00000000",
            "status": "FILLED",
            "timeInForce": "GTC",
            "type": "MARKET",
            "side": "SELL",
            "fills": [
                {
                    "price": "4000.00000000",
                    "qty": "1.00000000",
                    "commission": "4.00000000",
                    "commissionAsset": "USDT",
                    "tradeId": 56
                }
            ]
        });

        let response: NewOrderResponse = round_trip(&payload);
        assert_eq!(response.status, Some(OrderStatus::Filled));
        assert_eq!(response.order_type, Some(OrderType::Market));
        assert_eq!(response.fills.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_ack_order_response_round_trip() {
        let payload = json!({
            "symbol": "BTCUSDT",
            "orderId": 28,
            "clientOrderId": "6gCrw2kRUAF9CvJDGP16IP",
            "transactTime": 1_507_725_176_595_i64
        });

        let response: NewOrderResponse = round_trip(&payload);
        assert_eq!(response.status, None);
        assert_eq!(response.fills, None);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let payload = json!({
            "symbol": "BTCUSDT",
            "orderId": 1,
            "clientOrderId": "abc",
            "transactTime": 1,
            "workingTime": 1,
            "selfTradePreventionMode": "NONE"
        });

        let response: NewOrderResponse = serde_json::from_value(payload).unwrap();
        assert_eq!(response.order_id, 1);
    }

    #[test]
    fn test_candlestick_round_trip() {
        let payload = json!([[
            1_499_040_000_000_i64,
            "0.01634790",
            "0.80000000",
            "0.01575800",
            "0.01577100",
            "148976.11427815",
            1_499_644_799_999_i64,
            "2434.19055334",
            308,
            "1756.87402397",
            "28.46694368",
            "0"
        ]]);

        let bars: Vec<Candlestick> = round_trip(&payload);
        assert_eq!(bars[0].open, "0.01634790");
        assert_eq!(bars[0].number_of_trades, 308);
    }

    #[test]
    fn test_order_book_round_trip() {
        let payload = json!({
            "lastUpdateId": 1_027_024,
            "bids": [["4.00000000", "431.00000000"]],
            "asks": [["4.00000200", "12.00000000"], ["4.00000300", "3.00000000"]]
        });

        let book: OrderBook = round_trip(&payload);
        assert_eq!(book.best_bid().map(|e| e.qty.as_str()), Some("431.00000000"));
        assert_eq!(book.best_ask().map(|e| e.price.as_str()), Some("4.00000200"));
    }

    #[test]
    fn test_agg_trade_round_trip() {
        let payload = json!({
            "a": 26129,
            "p": "0.01633102",
            "q": "4.70443515",
            "f": 27781,
            "l": 27781,
            "T": 1_498_793_709_153_i64,
            "m": true,
            "M": true
        });

        let trade: AggTrade = round_trip(&payload);
        assert_eq!(trade.aggregated_trade_id, 26129);
        assert!(trade.is_buyer_maker);
    }

    #[test]
    fn test_account_round_trip_and_missing_balance() {
        let payload = json!({
            "makerCommission": 15,
            "takerCommission": 15,
            "buyerCommission": 0,
            "sellerCommission": 0,
            "canTrade": true,
            "canWithdraw": true,
            "canDeposit": true,
            "updateTime": 123_456_789,
            "accountType": "SPOT",
            "balances": [
                {"asset": "BTC", "free": "4723846.89208129", "locked": "0.00000000"}
            ],
            "permissions": ["SPOT"]
        });

        let account: Account = round_trip(&payload);
        assert_eq!(account.asset_balance("BTC").free, "4723846.89208129");

        let missing = account.asset_balance("DOGE");
        assert_eq!(missing.free, "0");
        assert_eq!(missing.locked, "0");
    }

    #[test]
    fn test_oco_response_round_trip() {
        let payload = json!({
            "orderListId": 0,
            "contingencyType": "OCO",
            "listStatusType": "EXEC_STARTED",
            "listOrderStatus": "EXECUTING",
            "listClientOrderId": "JYVpp3F0f5CAG15DhtrqLp",
            "transactionTime": 1_563_417_480_525_i64,
            "symbol": "LTCBTC",
            "orders": [
                {"symbol": "LTCBTC", "orderId": 2, "clientOrderId": "Kk7sqHb9J6mJWTMDVW7Vos"},
                {"symbol": "LTCBTC", "orderId": 3, "clientOrderId": "xTXKaGYd4bluPVp78IVRvl"}
            ],
            "orderReports": [
                {
                    "symbol": "LTCBTC",
                    "orderId": 2,
                    "orderListId": 0,
                    "clientOrderId": "Kk7sqHb9J6mJWTMDVW7Vos",
                    "transactTime": 1_563_417_480_525_i64,
                    "price": "0.000000",
                    "origQty": "0.624363",
                    "executedQty": "0.000000",
                    "cummulativeQuoteQty": "0.000000",
                    "status": "NEW",
                    "timeInForce": "GTC",
                    "type": "STOP_LOSS",
                    "side": "BUY",
                    "stopPrice": "0.960664"
                }
            ]
        });

        let response: OcoOrderResponse = round_trip(&payload);
        assert_eq!(response.list_status_type, OcoStatus::ExecStarted);
        assert_eq!(response.orders.len(), 2);
    }

    #[test]
    fn test_exchange_info_filters_keep_parameters() {
        let payload = json!({
            "timezone": "UTC",
            "serverTime": 1_565_246_363_776_i64,
            "rateLimits": [
                {"rateLimitType": "REQUEST_WEIGHT", "interval": "MINUTE", "intervalNum": 1, "limit": 1200}
            ],
            "exchangeFilters": [],
            "symbols": [{
                "symbol": "ETHBTC",
                "status": "TRADING",
                "baseAsset": "ETH",
                "baseAssetPrecision": 8,
                "quoteAsset": "BTC",
                "quotePrecision": 8,
                "orderTypes": ["LIMIT", "LIMIT_MAKER", "MARKET", "STOP_LOSS_LIMIT", "TAKE_PROFIT_LIMIT"],
                "icebergAllowed": true,
                "ocoAllowed": true,
                "quoteOrderQtyMarketAllowed": true,
                "isSpotTradingAllowed": true,
                "isMarginTradingAllowed": false,
                "filters": [
                    {"filterType": "PRICE_FILTER", "minPrice": "0.00000100", "maxPrice": "100000.00000000", "tickSize": "0.00000100"},
                    {"filterType": "MAX_NUM_ORDERS", "maxNumOrders": 200}
                ]
            }]
        });

        let info: ExchangeInfo = round_trip(&payload);
        let symbol = info.symbol_info("ETHBTC").unwrap();
        assert_eq!(
            symbol.filter("PRICE_FILTER").and_then(|f| f.param("tickSize")),
            Some("0.00000100")
        );
        assert_eq!(symbol.quote_order_qty_market_allowed, Some(true));
        assert!(info.symbol_info("XRPBTC").is_none());
    }

    #[test]
    fn test_deposit_history_round_trip() {
        let payload = json!({
            "depositList": [{
                "insertTime": 1_508_198_532_000_i64,
                "amount": 0.04670582,
                "asset": "ETH",
                "address": "0x6915f16f8791d0a1cc2bf47c13a6b2a92000504b",
                "txId": "0xdf33b22bdb2b28b1f75ccd201a4a4m6e7g83jy5fc5d5a9d1340961598cfcb0a1",
                "status": 1
            }],
            "success": true
        });

        let history: DepositHistory = round_trip(&payload);
        assert_eq!(history.deposit_list[0].status, 1);
    }

    #[test]
    fn test_order_round_trip() {
        let payload = json!({
            "symbol": "LTCBTC",
            "orderId": 1,
            "orderListId": -1,
            "clientOrderId": "myOrder1",
            "price": "0.1",
            "origQty": "1.0",
            "executedQty": "0.0",
            "cummulativeQuoteQty": "0.0",
            "status": "NEW",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": "BUY",
            "stopPrice": "0.0",
            "icebergQty": "0.0",
            "time": 1_499_827_319_559_i64,
            "updateTime": 1_499_827_319_559_i64,
            "isWorking": true,
            "origQuoteOrderQty": "0.000000"
        });

        let order: Order = round_trip(&payload);
        assert_eq!(order.status, OrderStatus::New);
        assert_eq!(order.stop_price, Some(Some("0.0".to_string())));
    }

    #[test]
    fn test_order_keeps_null_stop_price() {
        let payload = json!({
            "symbol": "LTCBTC",
            "orderId": 2,
            "clientOrderId": "myOrder2",
            "price": "0.1",
            "origQty": "1.0",
            "executedQty": "0.0",
            "cummulativeQuoteQty": "0.0",
            "status": "NEW",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": "SELL",
            "stopPrice": null,
            "time": 1_499_827_319_559_i64,
            "updateTime": 1_499_827_319_559_i64,
            "isWorking": true
        });

        let order: Order = round_trip(&payload);
        assert_eq!(order.stop_price, Some(None));
        assert_eq!(order.iceberg_qty, None);
    }

    #[test]
    fn test_trade_round_trip() {
        let payload = json!({
            "id": 28457,
            "symbol": "BNBBTC",
            "orderId": 100_234,
            "orderListId": -1,
            "price": "4.00000100",
            "qty": "12.00000000",
            "quoteQty": "48.000012",
            "commission": "10.10000000",
            "commissionAsset": "BNB",
            "time": 1_499_865_549_590_i64,
            "isBuyer": true,
            "isMaker": false,
            "isBestMatch": true
        });

        let trade: Trade = round_trip(&payload);
        assert_eq!(trade.quote_qty, Some(Some("48.000012".to_string())));
        assert_eq!(trade.is_best_match, Some(Some(true)));
    }

    #[test]
    fn test_trade_keeps_explicit_nulls() {
        let payload = json!({
            "id": 28458,
            "orderId": 100_235,
            "price": "4.00000100",
            "qty": "1.00000000",
            "quoteQty": null,
            "commission": "0.00100000",
            "commissionAsset": "BNB",
            "time": 1_499_865_549_590_i64,
            "isBuyer": false,
            "isMaker": true
        });

        let trade: Trade = round_trip(&payload);
        assert_eq!(trade.quote_qty, Some(None));
        assert_eq!(trade.is_best_match, None);
        assert_eq!(trade.symbol, None);
    }

    #[test]
    fn test_trade_history_item_round_trip() {
        let payload = json!([
            {
                "id": 28457,
                "price": "4.00000100",
                "qty": "12.00000000",
                "quoteQty": "48.000012",
                "time": 1_499_865_549_590_i64,
                "isBuyerMaker": true,
                "isBestMatch": true
            },
            {
                "id": 28458,
                "price": "4.00000200",
                "qty": "1.00000000",
                "quoteQty": null,
                "time": 1_499_865_549_591_i64,
                "isBuyerMaker": false,
                "isBestMatch": null
            }
        ]);

        let trades: Vec<TradeHistoryItem> = round_trip(&payload);
        assert_eq!(trades[0].is_best_match, Some(Some(true)));
        assert_eq!(trades[1].quote_qty, Some(None));
        assert_eq!(trades[1].is_best_match, Some(None));
    }

    #[test]
    fn test_ticker_statistics_round_trip() {
        let payload = json!({
            "symbol": "BNBBTC",
            "priceChange": "-94.99999800",
            "priceChangePercent": "-95.960",
            "weightedAvgPrice": "0.29628482",
            "prevClosePrice": "0.10002000",
            "lastPrice": "4.00000200",
            "lastQty": "200.00000000",
            "bidPrice": "4.00000000",
            "bidQty": "100.00000000",
            "askPrice": "4.00000200",
            "askQty": "100.00000000",
            "openPrice": "99.00000000",
            "highPrice": "100.00000000",
            "lowPrice": "0.10000000",
            "volume": "8913.30000000",
            "quoteVolume": "15.30000000",
            "openTime": 1_499_783_499_040_i64,
            "closeTime": 1_499_869_899_040_i64,
            "firstId": 28385,
            "lastId": 28460,
            "count": 76
        });

        let stats: TickerStatistics = round_trip(&payload);
        assert_eq!(stats.last_price, "4.00000200");
        assert_eq!(stats.count, 76);
    }

    #[test]
    fn test_ticker_price_round_trip() {
        let payload = json!([
            {"symbol": "LTCBTC", "price": "4.00000200"},
            {"symbol": "ETHBTC", "price": "0.07946600"}
        ]);

        let prices: Vec<TickerPrice> = round_trip(&payload);
        assert_eq!(prices[1].symbol, "ETHBTC");
    }

    #[test]
    fn test_book_ticker_round_trip() {
        let payload = json!({
            "symbol": "LTCBTC",
            "bidPrice": "4.00000000",
            "bidQty": "431.00000000",
            "askPrice": "4.00000200",
            "askQty": "9.00000000"
        });

        let ticker: BookTicker = round_trip(&payload);
        assert_eq!(ticker.ask_qty, "9.00000000");
    }

    #[test]
    fn test_cancel_order_response_round_trip() {
        let payload = json!({
            "symbol": "LTCBTC",
            "origClientOrderId": "myOrder1",
            "orderId": 4,
            "orderListId": -1,
            "clientOrderId": "cancelMyOrder1",
            "price": "2.00000000",
            "origQty": "1.00000000",
            "executedQty": "0.00000000",
            "cummulativeQuoteQty": "0.00000000",
            "status": "CANCELED",
            "timeInForce": "GTC",
            "type": "LIMIT",
            "side": "BUY"
        });

        let response: CancelOrderResponse = round_trip(&payload);
        assert_eq!(response.status, Some(OrderStatus::Canceled));
        assert_eq!(response.client_order_id, "cancelMyOrder1");
    }

    #[test]
    fn test_withdraw_history_round_trip() {
        let payload = json!({
            "withdrawList": [
                {
                    "id": "7213fea8e94b4a5593d507237e5a555b",
                    "amount": 1,
                    "transactionFee": 0.004,
                    "address": "0x6915f16f8791d0a1cc2bf47c13a6b2a92000504b",
                    "asset": "ETH",
                    "txId": "0xdf33b22bdb2b28b1f75ccd201a4a4m6e7g83jy5fc5d5a9d1340961598cfcb0a1",
                    "applyTime": 1_508_198_532_000_i64,
                    "successTime": 1_508_198_632_000_i64,
                    "status": 6
                },
                {
                    "id": "7213fea8e94b4a5534ggsd237e5a555b",
                    "amount": 1000,
                    "address": "463tWEBn5XZJSxLU34r6g7h8jtxuNcDbjLSjkn3XAXHCbLrTTErJrBWYgHJQyrCwkNgYvyV3z8zctJLPCZy24jvb3NiTcTJ",
                    "addressTag": "342341222",
                    "asset": "XMR",
                    "txId": null,
                    "applyTime": 1_508_198_532_000_i64,
                    "successTime": null,
                    "status": 4
                }
            ],
            "success": true
        });

        let history: WithdrawHistory = round_trip(&payload);
        let completed = &history.withdraw_list[0];
        assert_eq!(completed.success_time, Some(Some(1_508_198_632_000)));
        assert_eq!(completed.address_tag, None);

        let pending = &history.withdraw_list[1];
        assert_eq!(pending.success_time, Some(None));
        assert_eq!(pending.tx_id, Some(None));
        assert_eq!(pending.address_tag, Some(Some("342341222".to_string())));
    }

    #[test]
    fn test_withdraw_result_round_trip() {
        let payload = json!({
            "msg": "success",
            "success": true,
            "id": "7213fea8e94b4a5593d507237e5a555b"
        });

        let result: WithdrawResult = round_trip(&payload);
        assert!(result.success);

        let rejected: WithdrawResult =
            round_trip(&json!({"msg": "Insufficient balance", "success": false}));
        assert_eq!(rejected.id, None);
    }

    #[test]
    fn test_deposit_address_round_trip() {
        let payload = json!({
            "address": "0x6915f16f8791d0a1cc2bf47c13a6b2a92000504b",
            "success": true,
            "addressTag": "1231212",
            "asset": "BNB"
        });

        let address: DepositAddress = round_trip(&payload);
        assert_eq!(address.address_tag, Some(Some("1231212".to_string())));
    }

    #[test]
    fn test_asset_round_trip() {
        let payload = json!([{
            "id": "8",
            "assetCode": "BTC",
            "assetName": "Bitcoin",
            "unit": "฿",
            "transactionFee": 0.0005,
            "commissionRate": 0,
            "freeAuditWithdrawAmt": 10_000_000,
            "freeUserChargeAmount": 10_000_000,
            "minProductWithdraw": "0.001",
            "withdrawIntegerMultiple": "0.00000001",
            "confirmTimes": "1",
            "enableWithdraw": true,
            "isLegalMoney": false
        }]);

        let assets: Vec<Asset> = round_trip(&payload);
        assert_eq!(assets[0].asset_code, "BTC");
        assert_eq!(assets[0].id, json!("8"));
    }

    #[test]
    fn test_listen_key_round_trip() {
        let payload = json!({
            "listenKey": "pqia91ma19a5s61cv6a81va65sdf19v8a65a1a5s61cv6a81va65sdf19v8a65a1"
        });

        let key: ListenKey = round_trip(&payload);
        assert!(key.listen_key.starts_with("pqia91ma"));
    }
}
