use crate::core::config::DEFAULT_ASSET_INFO_BASE_URL;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{RestClient, Security};
use crate::core::types::{KlineInterval, OrderType};
use crate::exchanges::binance::converters::{
    all_orders_params, cancel_order_list_params, cancel_order_params, oco_order_params,
    open_orders_params, order_params, order_status_params, push_opt, push_window, Params,
};
use crate::exchanges::binance::requests::{
    AllOrdersRequest, CancelOrderRequest, NewOrder, OrderRequest, OrderStatusRequest,
    DEFAULT_RECV_WINDOW,
};
use crate::exchanges::binance::signer::get_timestamp;
use crate::exchanges::binance::types::{
    Account, AggTrade, Asset, BookTicker, CancelOrderResponse, Candlestick, DepositAddress,
    DepositHistory, ExchangeInfo, ListenKey, NewOrderResponse, OcoOrderResponse, Order, OrderBook,
    ServerTime, TickerPrice, TickerStatistics, Trade, TradeHistoryItem, WithdrawHistory,
    WithdrawResult,
};
use serde::de::DeserializeOwned;
use tracing::instrument;

const USER_DATA_STREAM: &str = "/api/v3/userDataStream";

/// Typed async wrapper around `RestClient` for the Binance spot API
///
/// Each method builds the parameter list of one endpoint, sends it with the
/// security level the endpoint requires and decodes the response.
#[derive(Debug, Clone)]
pub struct BinanceRestClient<R: RestClient> {
    client: R,
    asset_info_base_url: String,
}

impl<R: RestClient> BinanceRestClient<R> {
    pub fn new(client: R) -> Self {
        Self {
            client,
            asset_info_base_url: DEFAULT_ASSET_INFO_BASE_URL.to_string(),
        }
    }

    /// Override the host serving the asset listing
    #[must_use]
    pub fn with_asset_info_base_url(mut self, asset_info_base_url: String) -> Self {
        self.asset_info_base_url = asset_info_base_url;
        self
    }

    async fn get_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
        security: Security,
    ) -> Result<T, ExchangeError> {
        self.client.get(endpoint, params, security).await?.decode()
    }

    // General endpoints

    /// Test connectivity to the REST API
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn ping(&self) -> Result<(), ExchangeError> {
        self.client.get("/api/v3/ping", &[], Security::None).await?;
        Ok(())
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_server_time(&self) -> Result<ServerTime, ExchangeError> {
        self.get_as("/api/v3/time", &[], Security::None).await
    }

    /// Current exchange trading rules and symbol information
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_exchange_info(&self) -> Result<ExchangeInfo, ExchangeError> {
        self.get_as("/api/v3/exchangeInfo", &[], Security::None)
            .await
    }

    /// Every asset the exchange supports, served from the asset info host
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_all_assets(&self) -> Result<Vec<Asset>, ExchangeError> {
        let url = format!("{}assetWithdraw/getAllAsset.html", self.asset_info_base_url);
        self.get_as(&url, &[], Security::None).await
    }

    // Market data endpoints

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_order_book(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<OrderBook, ExchangeError> {
        let mut params: Params = vec![("symbol", symbol.to_string())];
        push_opt(&mut params, "limit", limit);
        self.get_as("/api/v3/depth", &params, Security::None).await
    }

    /// Recent trades, up to `limit` (exchange default 500)
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<Vec<TradeHistoryItem>, ExchangeError> {
        let mut params: Params = vec![("symbol", symbol.to_string())];
        push_opt(&mut params, "limit", limit);
        self.get_as("/api/v3/trades", &params, Security::None).await
    }

    /// Older trades, starting at `from_id` when given. Requires an API key.
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_historical_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<u64>,
    ) -> Result<Vec<TradeHistoryItem>, ExchangeError> {
        let mut params: Params = vec![("symbol", symbol.to_string())];
        push_opt(&mut params, "limit", limit);
        push_opt(&mut params, "fromId", from_id);
        self.get_as("/api/v3/historicalTrades", &params, Security::ApiKey)
            .await
    }

    /// Compressed, aggregate trades
    ///
    /// When both `start_time` and `end_time` are given, they must be less
    /// than one hour apart.
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_agg_trades(
        &self,
        symbol: &str,
        from_id: Option<u64>,
        limit: Option<u32>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<AggTrade>, ExchangeError> {
        let mut params: Params = vec![("symbol", symbol.to_string())];
        push_opt(&mut params, "fromId", from_id);
        push_opt(&mut params, "limit", limit);
        push_opt(&mut params, "startTime", start_time);
        push_opt(&mut params, "endTime", end_time);
        self.get_as("/api/v3/aggTrades", &params, Security::None)
            .await
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_candlestick_bars(
        &self,
        symbol: &str,
        interval: KlineInterval,
        limit: Option<u32>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<Candlestick>, ExchangeError> {
        let mut params: Params = vec![
            ("symbol", symbol.to_string()),
            ("interval", interval.as_str().to_string()),
        ];
        push_opt(&mut params, "limit", limit);
        push_opt(&mut params, "startTime", start_time);
        push_opt(&mut params, "endTime", end_time);
        self.get_as("/api/v3/klines", &params, Security::None).await
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_24hr_price_statistics(
        &self,
        symbol: &str,
    ) -> Result<TickerStatistics, ExchangeError> {
        self.get_as(
            "/api/v3/ticker/24hr",
            &[("symbol", symbol.to_string())],
            Security::None,
        )
        .await
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_all_24hr_price_statistics(
        &self,
    ) -> Result<Vec<TickerStatistics>, ExchangeError> {
        self.get_as("/api/v3/ticker/24hr", &[], Security::None)
            .await
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_price(&self, symbol: &str) -> Result<TickerPrice, ExchangeError> {
        self.get_as(
            "/api/v3/ticker/price",
            &[("symbol", symbol.to_string())],
            Security::None,
        )
        .await
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_all_prices(&self) -> Result<Vec<TickerPrice>, ExchangeError> {
        self.get_as("/api/v3/ticker/price", &[], Security::None)
            .await
    }

    /// Best bid and ask for every symbol
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_book_tickers(&self) -> Result<Vec<BookTicker>, ExchangeError> {
        self.get_as("/api/v3/ticker/bookTicker", &[], Security::None)
            .await
    }

    // Trading endpoints

    /// Send in a new order. OCO orders go through `new_oco_order`.
    #[instrument(skip(self, order), fields(exchange = "binance", symbol = %order.get_symbol(), side = %order.get_side(), order_type = %order.get_order_type()))]
    pub async fn new_order(&self, order: &NewOrder) -> Result<NewOrderResponse, ExchangeError> {
        reject_oco(order)?;
        let response = self
            .client
            .post("/api/v3/order", &order_params(order), Security::Signed)
            .await?;
        response.decode()
    }

    /// Send in a new OCO order list
    #[instrument(skip(self, order), fields(exchange = "binance", symbol = %order.get_symbol(), side = %order.get_side()))]
    pub async fn new_oco_order(&self, order: &NewOrder) -> Result<OcoOrderResponse, ExchangeError> {
        let response = self
            .client
            .post("/api/v3/order/oco", &oco_order_params(order), Security::Signed)
            .await?;
        response.decode()
    }

    /// Validate an order against the matching engine without placing it
    #[instrument(skip(self, order), fields(exchange = "binance", symbol = %order.get_symbol(), order_type = %order.get_order_type()))]
    pub async fn new_order_test(&self, order: &NewOrder) -> Result<(), ExchangeError> {
        reject_oco(order)?;
        self.client
            .post("/api/v3/order/test", &order_params(order), Security::Signed)
            .await?;
        Ok(())
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_order_status(
        &self,
        request: &OrderStatusRequest,
    ) -> Result<Order, ExchangeError> {
        self.get_as(
            "/api/v3/order",
            &order_status_params(request),
            Security::Signed,
        )
        .await
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<CancelOrderResponse, ExchangeError> {
        let response = self
            .client
            .delete(
                "/api/v3/order",
                &cancel_order_params(request),
                Security::Signed,
            )
            .await?;
        response.decode()
    }

    /// Cancel an entire order list
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn cancel_oco_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<OcoOrderResponse, ExchangeError> {
        let response = self
            .client
            .delete(
                "/api/v3/orderList",
                &cancel_order_list_params(request),
                Security::Signed,
            )
            .await?;
        response.decode()
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_open_orders(&self, request: &OrderRequest) -> Result<Vec<Order>, ExchangeError> {
        self.get_as(
            "/api/v3/openOrders",
            &open_orders_params(request),
            Security::Signed,
        )
        .await
    }

    /// All orders of a symbol: active, cancelled or filled
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_all_orders(
        &self,
        request: &AllOrdersRequest,
    ) -> Result<Vec<Order>, ExchangeError> {
        self.get_as(
            "/api/v3/allOrders",
            &all_orders_params(request),
            Security::Signed,
        )
        .await
    }

    // Account endpoints

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_account(
        &self,
        recv_window: u64,
        timestamp: u64,
    ) -> Result<Account, ExchangeError> {
        let mut params = Params::new();
        push_window(&mut params, recv_window, timestamp);
        self.get_as("/api/v3/account", &params, Security::Signed)
            .await
    }

    /// Trades of the account on `symbol`, starting at `from_id` when given
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_my_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<u64>,
        recv_window: u64,
        timestamp: u64,
    ) -> Result<Vec<Trade>, ExchangeError> {
        let mut params: Params = vec![("symbol", symbol.to_string())];
        push_opt(&mut params, "limit", limit);
        push_opt(&mut params, "fromId", from_id);
        push_window(&mut params, recv_window, timestamp);
        self.get_as("/api/v3/myTrades", &params, Security::Signed)
            .await
    }

    /// Submit a withdraw request
    ///
    /// `name` labels the address in the address book; `address_tag` is the
    /// secondary identifier some assets require.
    #[instrument(skip(self, address), fields(exchange = "binance"))]
    pub async fn withdraw(
        &self,
        asset: &str,
        address: &str,
        amount: &str,
        name: Option<&str>,
        address_tag: Option<&str>,
    ) -> Result<WithdrawResult, ExchangeError> {
        let mut params: Params = vec![
            ("asset", asset.to_string()),
            ("address", address.to_string()),
            ("amount", amount.to_string()),
        ];
        push_opt(&mut params, "name", name);
        push_opt(&mut params, "addressTag", address_tag);
        push_window(&mut params, DEFAULT_RECV_WINDOW, get_timestamp());

        let response = self
            .client
            .post("/wapi/v3/withdraw.html", &params, Security::Signed)
            .await?;
        response.decode()
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_deposit_history(&self, asset: &str) -> Result<DepositHistory, ExchangeError> {
        self.get_as(
            "/wapi/v3/depositHistory.html",
            &asset_params(asset),
            Security::Signed,
        )
        .await
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_withdraw_history(
        &self,
        asset: &str,
    ) -> Result<WithdrawHistory, ExchangeError> {
        self.get_as(
            "/wapi/v3/withdrawHistory.html",
            &asset_params(asset),
            Security::Signed,
        )
        .await
    }

    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn get_deposit_address(&self, asset: &str) -> Result<DepositAddress, ExchangeError> {
        self.get_as(
            "/wapi/v3/depositAddress.html",
            &asset_params(asset),
            Security::Signed,
        )
        .await
    }

    // User data stream endpoints

    /// Open a user data stream and return its listen key
    #[instrument(skip(self), fields(exchange = "binance"))]
    pub async fn start_user_data_stream(&self) -> Result<ListenKey, ExchangeError> {
        let response = self
            .client
            .post(USER_DATA_STREAM, &[], Security::ApiKey)
            .await?;
        response.decode()
    }

    /// Extend the validity of a listen key
    #[instrument(skip(self, listen_key), fields(exchange = "binance"))]
    pub async fn keep_alive_user_data_stream(&self, listen_key: &str) -> Result<(), ExchangeError> {
        self.client
            .put(
                USER_DATA_STREAM,
                &[("listenKey", listen_key.to_string())],
                Security::ApiKey,
            )
            .await?;
        Ok(())
    }

    #[instrument(skip(self, listen_key), fields(exchange = "binance"))]
    pub async fn close_user_data_stream(&self, listen_key: &str) -> Result<(), ExchangeError> {
        self.client
            .delete(
                USER_DATA_STREAM,
                &[("listenKey", listen_key.to_string())],
                Security::ApiKey,
            )
            .await?;
        Ok(())
    }
}

fn asset_params(asset: &str) -> Params {
    let mut params: Params = vec![("asset", asset.to_string())];
    push_window(&mut params, DEFAULT_RECV_WINDOW, get_timestamp());
    params
}

fn reject_oco(order: &NewOrder) -> Result<(), ExchangeError> {
    if order.get_order_type() == OrderType::Oco {
        return Err(ExchangeError::InvalidParameters(
            "OCO orders must be placed with new_oco_order".to_string(),
        ));
    }
    Ok(())
}
