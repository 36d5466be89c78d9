use super::client::BinanceApiRestClient;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::binance::requests::{
    AllOrdersRequest, CancelOrderRequest, NewOrder, OrderRequest, OrderStatusRequest,
};
use crate::exchanges::binance::types::{
    CancelOrderResponse, NewOrderResponse, OcoOrderResponse, Order,
};

/// Order placement and order management endpoints
impl<R: RestClient> BinanceApiRestClient<R> {
    /// Send in a new order
    ///
    /// OCO orders are rejected with `ExchangeError::InvalidParameters`
    /// before anything is sent; use [`Self::new_oco_order`] for those.
    pub fn new_order(&self, order: &NewOrder) -> Result<NewOrderResponse, ExchangeError> {
        self.block_on(self.rest.new_order(order))
    }

    /// Send in a new OCO order list
    pub fn new_oco_order(&self, order: &NewOrder) -> Result<OcoOrderResponse, ExchangeError> {
        self.block_on(self.rest.new_oco_order(order))
    }

    /// Test new order creation and signature. Creates and validates a new
    /// order but does not send it into the matching engine.
    pub fn new_order_test(&self, order: &NewOrder) -> Result<(), ExchangeError> {
        self.block_on(self.rest.new_order_test(order))
    }

    pub fn get_order_status(&self, request: &OrderStatusRequest) -> Result<Order, ExchangeError> {
        self.block_on(self.rest.get_order_status(request))
    }

    /// Cancel an active order
    pub fn cancel_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<CancelOrderResponse, ExchangeError> {
        self.block_on(self.rest.cancel_order(request))
    }

    /// Cancel an entire OCO order list
    pub fn cancel_oco_order(
        &self,
        request: &CancelOrderRequest,
    ) -> Result<OcoOrderResponse, ExchangeError> {
        self.block_on(self.rest.cancel_oco_order(request))
    }

    pub fn get_open_orders(&self, request: &OrderRequest) -> Result<Vec<Order>, ExchangeError> {
        self.block_on(self.rest.get_open_orders(request))
    }

    /// All account orders of a symbol: active, cancelled or filled
    pub fn get_all_orders(&self, request: &AllOrdersRequest) -> Result<Vec<Order>, ExchangeError> {
        self.block_on(self.rest.get_all_orders(request))
    }
}
