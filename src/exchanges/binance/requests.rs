use crate::core::types::{NewOrderResponseType, OrderSide, OrderType, TimeInForce};
use crate::exchanges::binance::signer::get_timestamp;

/// Default tolerance, in milliseconds, between the request timestamp and
/// the moment the exchange receives it.
pub const DEFAULT_RECV_WINDOW: u64 = 60_000;

/// A trade order to enter or exit a position.
///
/// Required fields are taken by the constructors; everything else is set
/// through consuming setters. Nothing is validated locally: invalid
/// combinations are rejected by the exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewOrder {
    symbol: String,
    side: OrderSide,
    order_type: OrderType,
    time_in_force: Option<TimeInForce>,
    quantity: Option<String>,
    quote_order_qty: Option<String>,
    price: Option<String>,
    new_client_order_id: Option<String>,
    stop_price: Option<String>,
    stop_limit_price: Option<String>,
    limit_client_order_id: Option<String>,
    stop_client_order_id: Option<String>,
    iceberg_qty: Option<String>,
    new_order_resp_type: NewOrderResponseType,
    recv_window: u64,
    timestamp: u64,
}

impl NewOrder {
    /// Creates a new order with all required parameters.
    pub fn new(
        symbol: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        time_in_force: Option<TimeInForce>,
        quantity: impl Into<String>,
    ) -> Self {
        Self::base(
            symbol.into(),
            side,
            order_type,
            time_in_force,
            Some(quantity.into()),
        )
    }

    fn base(
        symbol: String,
        side: OrderSide,
        order_type: OrderType,
        time_in_force: Option<TimeInForce>,
        quantity: Option<String>,
    ) -> Self {
        Self {
            symbol,
            side,
            order_type,
            time_in_force,
            quantity,
            quote_order_qty: None,
            price: None,
            new_client_order_id: None,
            stop_price: None,
            stop_limit_price: None,
            limit_client_order_id: None,
            stop_client_order_id: None,
            iceberg_qty: None,
            new_order_resp_type: NewOrderResponseType::Result,
            recv_window: DEFAULT_RECV_WINDOW,
            timestamp: get_timestamp(),
        }
    }

    /// Creates a new order with all required parameters plus a price,
    /// which market orders do without.
    pub fn with_price(
        symbol: impl Into<String>,
        side: OrderSide,
        order_type: OrderType,
        time_in_force: Option<TimeInForce>,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self::new(symbol, side, order_type, time_in_force, quantity).price(price)
    }

    /// MARKET buy for the given base `quantity`.
    pub fn market_buy(symbol: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self::new(symbol, OrderSide::Buy, OrderType::Market, None, quantity)
    }

    /// MARKET sell for the given base `quantity`.
    pub fn market_sell(symbol: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self::new(symbol, OrderSide::Sell, OrderType::Market, None, quantity)
    }

    /// MARKET buy spending `quote_order_qty` of the quote asset.
    pub fn market_buy_quote(symbol: impl Into<String>, quote_order_qty: impl Into<String>) -> Self {
        Self::base(symbol.into(), OrderSide::Buy, OrderType::Market, None, None)
            .quote_order_qty(quote_order_qty)
    }

    /// MARKET sell receiving `quote_order_qty` of the quote asset.
    pub fn market_sell_quote(
        symbol: impl Into<String>,
        quote_order_qty: impl Into<String>,
    ) -> Self {
        Self::base(symbol.into(), OrderSide::Sell, OrderType::Market, None, None)
            .quote_order_qty(quote_order_qty)
    }

    /// LIMIT buy for the given `quantity` and `price`.
    pub fn limit_buy(
        symbol: impl Into<String>,
        time_in_force: TimeInForce,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self::with_price(
            symbol,
            OrderSide::Buy,
            OrderType::Limit,
            Some(time_in_force),
            quantity,
            price,
        )
    }

    /// LIMIT sell for the given `quantity` and `price`.
    pub fn limit_sell(
        symbol: impl Into<String>,
        time_in_force: TimeInForce,
        quantity: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self::with_price(
            symbol,
            OrderSide::Sell,
            OrderType::Limit,
            Some(time_in_force),
            quantity,
            price,
        )
    }

    /// One-Cancels-Other buy.
    ///
    /// `price` is the resting limit leg and should sit below the market.
    /// Once the market reaches `stop_price`, a buy limit order at
    /// `stop_limit_price` is placed and the limit leg is cancelled by the
    /// exchange.
    pub fn oco_buy(
        symbol: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
        stop_price: impl Into<String>,
        stop_limit_price: impl Into<String>,
    ) -> Self {
        Self::limit_buy(symbol, TimeInForce::Gtc, quantity, price)
            .order_type(OrderType::Oco)
            .stop_price(stop_price)
            .stop_limit_price(stop_limit_price)
    }

    /// One-Cancels-Other sell.
    ///
    /// `price` is the resting limit leg and should sit above the market;
    /// `stop_price` is the lower trigger for the stop-limit leg.
    pub fn oco_sell(
        symbol: impl Into<String>,
        quantity: impl Into<String>,
        price: impl Into<String>,
        stop_price: impl Into<String>,
        stop_limit_price: impl Into<String>,
    ) -> Self {
        Self::limit_sell(symbol, TimeInForce::Gtc, quantity, price)
            .order_type(OrderType::Oco)
            .stop_price(stop_price)
            .stop_limit_price(stop_limit_price)
    }

    #[must_use]
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = symbol.into();
        self
    }

    #[must_use]
    pub const fn side(mut self, side: OrderSide) -> Self {
        self.side = side;
        self
    }

    #[must_use]
    pub const fn order_type(mut self, order_type: OrderType) -> Self {
        self.order_type = order_type;
        self
    }

    #[must_use]
    pub const fn time_in_force(mut self, time_in_force: TimeInForce) -> Self {
        self.time_in_force = Some(time_in_force);
        self
    }

    #[must_use]
    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.quantity = Some(quantity.into());
        self
    }

    /// Sets the quote quantity. Once set, it is sent in place of `quantity`.
    #[must_use]
    pub fn quote_order_qty(mut self, quote_order_qty: impl Into<String>) -> Self {
        self.quote_order_qty = Some(quote_order_qty.into());
        self
    }

    #[must_use]
    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    #[must_use]
    pub fn new_client_order_id(mut self, new_client_order_id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(new_client_order_id.into());
        self
    }

    #[must_use]
    pub fn stop_price(mut self, stop_price: impl Into<String>) -> Self {
        self.stop_price = Some(stop_price.into());
        self
    }

    #[must_use]
    pub fn stop_limit_price(mut self, stop_limit_price: impl Into<String>) -> Self {
        self.stop_limit_price = Some(stop_limit_price.into());
        self
    }

    /// Client id of the limit leg of an OCO order
    #[must_use]
    pub fn limit_client_order_id(mut self, limit_client_order_id: impl Into<String>) -> Self {
        self.limit_client_order_id = Some(limit_client_order_id.into());
        self
    }

    /// Client id of the stop leg of an OCO order
    #[must_use]
    pub fn stop_client_order_id(mut self, stop_client_order_id: impl Into<String>) -> Self {
        self.stop_client_order_id = Some(stop_client_order_id.into());
        self
    }

    #[must_use]
    pub fn iceberg_qty(mut self, iceberg_qty: impl Into<String>) -> Self {
        self.iceberg_qty = Some(iceberg_qty.into());
        self
    }

    #[must_use]
    pub const fn new_order_resp_type(mut self, new_order_resp_type: NewOrderResponseType) -> Self {
        self.new_order_resp_type = new_order_resp_type;
        self
    }

    #[must_use]
    pub const fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn get_symbol(&self) -> &str {
        &self.symbol
    }

    pub const fn get_side(&self) -> OrderSide {
        self.side
    }

    pub const fn get_order_type(&self) -> OrderType {
        self.order_type
    }

    pub const fn get_time_in_force(&self) -> Option<TimeInForce> {
        self.time_in_force
    }

    /// Base quantity. `None` for orders built from a quote quantity only.
    pub fn get_quantity(&self) -> Option<&str> {
        self.quantity.as_deref()
    }

    pub fn get_quote_order_qty(&self) -> Option<&str> {
        self.quote_order_qty.as_deref()
    }

    pub fn get_price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    pub fn get_new_client_order_id(&self) -> Option<&str> {
        self.new_client_order_id.as_deref()
    }

    pub fn get_stop_price(&self) -> Option<&str> {
        self.stop_price.as_deref()
    }

    pub fn get_stop_limit_price(&self) -> Option<&str> {
        self.stop_limit_price.as_deref()
    }

    pub fn get_limit_client_order_id(&self) -> Option<&str> {
        self.limit_client_order_id.as_deref()
    }

    pub fn get_stop_client_order_id(&self) -> Option<&str> {
        self.stop_client_order_id.as_deref()
    }

    pub fn get_iceberg_qty(&self) -> Option<&str> {
        self.iceberg_qty.as_deref()
    }

    pub const fn get_new_order_resp_type(&self) -> NewOrderResponseType {
        self.new_order_resp_type
    }

    pub const fn get_recv_window(&self) -> u64 {
        self.recv_window
    }

    pub const fn get_timestamp(&self) -> u64 {
        self.timestamp
    }
}

/// Symbol-scoped request for open orders. `all_symbols` queries every symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub symbol: Option<String>,
    pub recv_window: u64,
    pub timestamp: u64,
}

impl OrderRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: Some(symbol.into()),
            recv_window: DEFAULT_RECV_WINDOW,
            timestamp: get_timestamp(),
        }
    }

    pub fn all_symbols() -> Self {
        Self {
            symbol: None,
            recv_window: DEFAULT_RECV_WINDOW,
            timestamp: get_timestamp(),
        }
    }

    #[must_use]
    pub const fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Lookup of a single order, by exchange id or by client id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderStatusRequest {
    pub symbol: String,
    pub order_id: Option<u64>,
    pub orig_client_order_id: Option<String>,
    pub recv_window: u64,
    pub timestamp: u64,
}

impl OrderStatusRequest {
    pub fn by_order_id(symbol: impl Into<String>, order_id: u64) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: Some(order_id),
            orig_client_order_id: None,
            recv_window: DEFAULT_RECV_WINDOW,
            timestamp: get_timestamp(),
        }
    }

    pub fn by_client_order_id(
        symbol: impl Into<String>,
        orig_client_order_id: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            orig_client_order_id: Some(orig_client_order_id.into()),
            recv_window: DEFAULT_RECV_WINDOW,
            timestamp: get_timestamp(),
        }
    }

    #[must_use]
    pub const fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Cancellation of an order, or of an order list for OCO orders.
///
/// For order lists, `order_id` is the order list id and
/// `orig_client_order_id` the list client order id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CancelOrderRequest {
    pub symbol: String,
    pub order_id: Option<u64>,
    pub orig_client_order_id: Option<String>,
    pub new_client_order_id: Option<String>,
    pub recv_window: u64,
    pub timestamp: u64,
}

impl CancelOrderRequest {
    pub fn by_order_id(symbol: impl Into<String>, order_id: u64) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: Some(order_id),
            orig_client_order_id: None,
            new_client_order_id: None,
            recv_window: DEFAULT_RECV_WINDOW,
            timestamp: get_timestamp(),
        }
    }

    pub fn by_client_order_id(
        symbol: impl Into<String>,
        orig_client_order_id: impl Into<String>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            orig_client_order_id: Some(orig_client_order_id.into()),
            new_client_order_id: None,
            recv_window: DEFAULT_RECV_WINDOW,
            timestamp: get_timestamp(),
        }
    }

    /// Client id to assign to the cancellation itself
    #[must_use]
    pub fn new_client_order_id(mut self, new_client_order_id: impl Into<String>) -> Self {
        self.new_client_order_id = Some(new_client_order_id.into());
        self
    }

    #[must_use]
    pub const fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

/// Order history for a symbol, optionally starting at `order_id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllOrdersRequest {
    pub symbol: String,
    pub order_id: Option<u64>,
    pub limit: Option<u32>,
    pub recv_window: u64,
    pub timestamp: u64,
}

impl AllOrdersRequest {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            order_id: None,
            limit: None,
            recv_window: DEFAULT_RECV_WINDOW,
            timestamp: get_timestamp(),
        }
    }

    #[must_use]
    pub const fn order_id(mut self, order_id: u64) -> Self {
        self.order_id = Some(order_id);
        self
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub const fn recv_window(mut self, recv_window: u64) -> Self {
        self.recv_window = recv_window;
        self
    }

    #[must_use]
    pub const fn timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_extras(order: &NewOrder) {
        assert_eq!(order.get_quote_order_qty(), None);
        assert_eq!(order.get_new_client_order_id(), None);
        assert_eq!(order.get_stop_price(), None);
        assert_eq!(order.get_stop_limit_price(), None);
        assert_eq!(order.get_limit_client_order_id(), None);
        assert_eq!(order.get_stop_client_order_id(), None);
        assert_eq!(order.get_iceberg_qty(), None);
    }

    #[test]
    fn test_market_orders() {
        let buy = NewOrder::market_buy("BTCUSDT", "0.5");
        assert_eq!(buy.get_symbol(), "BTCUSDT");
        assert_eq!(buy.get_side(), OrderSide::Buy);
        assert_eq!(buy.get_order_type(), OrderType::Market);
        assert_eq!(buy.get_time_in_force(), None);
        assert_eq!(buy.get_quantity(), Some("0.5"));
        assert_eq!(buy.get_price(), None);
        assert_no_extras(&buy);

        let sell = NewOrder::market_sell("ETHBTC", "3");
        assert_eq!(sell.get_side(), OrderSide::Sell);
        assert_eq!(sell.get_order_type(), OrderType::Market);
        assert_eq!(sell.get_time_in_force(), None);
        assert_eq!(sell.get_price(), None);
        assert_no_extras(&sell);
    }

    #[test]
    fn test_limit_orders() {
        let buy = NewOrder::limit_buy("BTCUSDT", TimeInForce::Ioc, "1", "20000");
        assert_eq!(buy.get_side(), OrderSide::Buy);
        assert_eq!(buy.get_order_type(), OrderType::Limit);
        assert_eq!(buy.get_time_in_force(), Some(TimeInForce::Ioc));
        assert_eq!(buy.get_quantity(), Some("1"));
        assert_eq!(buy.get_price(), Some("20000"));
        assert_no_extras(&buy);

        let sell = NewOrder::limit_sell("BTCUSDT", TimeInForce::Fok, "2", "30000");
        assert_eq!(sell.get_side(), OrderSide::Sell);
        assert_eq!(sell.get_order_type(), OrderType::Limit);
        assert_eq!(sell.get_time_in_force(), Some(TimeInForce::Fok));
        assert_eq!(sell.get_price(), Some("30000"));
        assert_no_extras(&sell);
    }

    #[test]
    fn test_oco_buy() {
        let order = NewOrder::oco_buy("BTCUSDT", "1", "100", "90", "89");
        assert_eq!(order.get_order_type(), OrderType::Oco);
        assert_eq!(order.get_side(), OrderSide::Buy);
        assert_eq!(order.get_quantity(), Some("1"));
        assert_eq!(order.get_price(), Some("100"));
        assert_eq!(order.get_stop_price(), Some("90"));
        assert_eq!(order.get_stop_limit_price(), Some("89"));
        assert_eq!(order.get_time_in_force(), Some(TimeInForce::Gtc));
    }

    #[test]
    fn test_oco_sell() {
        let order = NewOrder::oco_sell("BTCUSDT", "1", "110", "95", "94");
        assert_eq!(order.get_order_type(), OrderType::Oco);
        assert_eq!(order.get_side(), OrderSide::Sell);
        assert_eq!(order.get_price(), Some("110"));
        assert_eq!(order.get_stop_price(), Some("95"));
        assert_eq!(order.get_stop_limit_price(), Some("94"));
    }

    #[test]
    fn test_quote_quantity_orders() {
        let order = NewOrder::market_buy_quote("BTCUSDT", "250");
        assert_eq!(order.get_quantity(), None);
        assert_eq!(order.get_quote_order_qty(), Some("250"));
        assert_eq!(order.get_side(), OrderSide::Buy);

        let order = NewOrder::market_sell_quote("BTCUSDT", "250");
        assert_eq!(order.get_side(), OrderSide::Sell);
        assert_eq!(order.get_quantity(), None);
    }

    #[test]
    fn test_defaults() {
        let before = get_timestamp();
        let order = NewOrder::market_buy("BTCUSDT", "1");
        let after = get_timestamp();

        assert_eq!(order.get_recv_window(), DEFAULT_RECV_WINDOW);
        assert!(order.get_timestamp() >= before && order.get_timestamp() <= after);
        assert_eq!(
            order.get_new_order_resp_type(),
            NewOrderResponseType::Result
        );
    }

    #[test]
    fn test_setters_override_defaults() {
        let order = NewOrder::market_buy("BTCUSDT", "1")
            .recv_window(5_000)
            .timestamp(1_499_827_319_559)
            .new_order_resp_type(NewOrderResponseType::Full)
            .new_client_order_id("my-order-1");

        assert_eq!(order.get_recv_window(), 5_000);
        assert_eq!(order.get_timestamp(), 1_499_827_319_559);
        assert_eq!(order.get_new_order_resp_type(), NewOrderResponseType::Full);
        assert_eq!(order.get_new_client_order_id(), Some("my-order-1"));
    }

    #[test]
    fn test_request_objects_defaults() {
        let status = OrderStatusRequest::by_order_id("BTCUSDT", 42);
        assert_eq!(status.order_id, Some(42));
        assert_eq!(status.orig_client_order_id, None);
        assert_eq!(status.recv_window, DEFAULT_RECV_WINDOW);

        let cancel = CancelOrderRequest::by_client_order_id("BTCUSDT", "abc")
            .new_client_order_id("cancel-abc")
            .recv_window(1_000);
        assert_eq!(cancel.order_id, None);
        assert_eq!(cancel.orig_client_order_id.as_deref(), Some("abc"));
        assert_eq!(cancel.new_client_order_id.as_deref(), Some("cancel-abc"));
        assert_eq!(cancel.recv_window, 1_000);

        let all = AllOrdersRequest::new("BTCUSDT").order_id(7).limit(50);
        assert_eq!(all.order_id, Some(7));
        assert_eq!(all.limit, Some(50));

        assert_eq!(OrderRequest::all_symbols().symbol, None);
    }
}
