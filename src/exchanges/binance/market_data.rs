use super::client::BinanceApiRestClient;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::core::types::KlineInterval;
use crate::exchanges::binance::types::{
    AggTrade, BookTicker, Candlestick, OrderBook, TickerPrice, TickerStatistics, TradeHistoryItem,
};

/// Market data endpoints
impl<R: RestClient> BinanceApiRestClient<R> {
    /// Order book of a symbol, `limit` levels per side (exchange default 100)
    pub fn get_order_book(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<OrderBook, ExchangeError> {
        self.block_on(self.rest.get_order_book(symbol, limit))
    }

    /// Recent trades, up to `limit` (exchange default 500, max 1000)
    pub fn get_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<Vec<TradeHistoryItem>, ExchangeError> {
        self.block_on(self.rest.get_trades(symbol, limit))
    }

    /// Older trades. Requires an API key.
    pub fn get_historical_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<u64>,
    ) -> Result<Vec<TradeHistoryItem>, ExchangeError> {
        self.block_on(self.rest.get_historical_trades(symbol, limit, from_id))
    }

    /// Compressed, aggregate trades
    ///
    /// If both `start_time` and `end_time` are sent, `limit` should not be
    /// and the range must be under one hour. With none of the optional
    /// parameters, the most recent aggregate trades are returned.
    pub fn get_agg_trades(
        &self,
        symbol: &str,
        from_id: Option<u64>,
        limit: Option<u32>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<AggTrade>, ExchangeError> {
        self.block_on(
            self.rest
                .get_agg_trades(symbol, from_id, limit, start_time, end_time),
        )
    }

    /// Most recent aggregate trades of a symbol
    pub fn get_recent_agg_trades(&self, symbol: &str) -> Result<Vec<AggTrade>, ExchangeError> {
        self.get_agg_trades(symbol, None, None, None, None)
    }

    /// Kline bars of a symbol, identified by their open time
    pub fn get_candlestick_bars(
        &self,
        symbol: &str,
        interval: KlineInterval,
        limit: Option<u32>,
        start_time: Option<i64>,
        end_time: Option<i64>,
    ) -> Result<Vec<Candlestick>, ExchangeError> {
        self.block_on(
            self.rest
                .get_candlestick_bars(symbol, interval, limit, start_time, end_time),
        )
    }

    pub fn get_recent_candlestick_bars(
        &self,
        symbol: &str,
        interval: KlineInterval,
    ) -> Result<Vec<Candlestick>, ExchangeError> {
        self.get_candlestick_bars(symbol, interval, None, None, None)
    }

    /// 24 hour price change statistics of a symbol
    pub fn get_24hr_price_statistics(
        &self,
        symbol: &str,
    ) -> Result<TickerStatistics, ExchangeError> {
        self.block_on(self.rest.get_24hr_price_statistics(symbol))
    }

    pub fn get_all_24hr_price_statistics(&self) -> Result<Vec<TickerStatistics>, ExchangeError> {
        self.block_on(self.rest.get_all_24hr_price_statistics())
    }

    /// Latest price of a symbol
    pub fn get_price(&self, symbol: &str) -> Result<TickerPrice, ExchangeError> {
        self.block_on(self.rest.get_price(symbol))
    }

    pub fn get_all_prices(&self) -> Result<Vec<TickerPrice>, ExchangeError> {
        self.block_on(self.rest.get_all_prices())
    }

    /// Best price and quantity on the order book of every symbol
    pub fn get_book_tickers(&self) -> Result<Vec<BookTicker>, ExchangeError> {
        self.block_on(self.rest.get_book_tickers())
    }
}
