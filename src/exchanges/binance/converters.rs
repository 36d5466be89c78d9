use super::requests::{
    AllOrdersRequest, CancelOrderRequest, NewOrder, OrderRequest, OrderStatusRequest,
};
use crate::core::types::TimeInForce;

/// Query parameters in the order they are sent
pub type Params = Vec<(&'static str, String)>;

pub(crate) fn push_opt<T: ToString>(params: &mut Params, key: &'static str, value: Option<T>) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}

pub(crate) fn push_window(params: &mut Params, recv_window: u64, timestamp: u64) {
    params.push(("recvWindow", recv_window.to_string()));
    params.push(("timestamp", timestamp.to_string()));
}

/// Parameters of a single order placement or test placement.
///
/// When a quote quantity is set it replaces the base quantity, so at most one
/// of `quantity` and `quoteOrderQty` is ever sent.
pub fn order_params(order: &NewOrder) -> Params {
    let mut params = vec![
        ("symbol", order.get_symbol().to_string()),
        ("side", order.get_side().as_str().to_string()),
        ("type", order.get_order_type().as_str().to_string()),
    ];

    if let Some(tif) = order.get_time_in_force() {
        params.push(("timeInForce", tif.as_str().to_string()));
    }

    match order.get_quote_order_qty() {
        Some(quote_order_qty) => params.push(("quoteOrderQty", quote_order_qty.to_string())),
        None => push_opt(&mut params, "quantity", order.get_quantity()),
    }

    push_opt(&mut params, "price", order.get_price());
    push_opt(&mut params, "newClientOrderId", order.get_new_client_order_id());
    push_opt(&mut params, "stopPrice", order.get_stop_price());
    push_opt(&mut params, "icebergQty", order.get_iceberg_qty());
    params.push((
        "newOrderRespType",
        order.get_new_order_resp_type().as_str().to_string(),
    ));
    push_window(&mut params, order.get_recv_window(), order.get_timestamp());

    params
}

/// Parameters of an OCO order list placement.
///
/// The order's client id names the whole list; each leg carries its own
/// optional client id. The stop-limit leg reuses the order's time in force,
/// falling back to GTC.
pub fn oco_order_params(order: &NewOrder) -> Params {
    let mut params = vec![("symbol", order.get_symbol().to_string())];

    push_opt(&mut params, "listClientOrderId", order.get_new_client_order_id());
    params.push(("side", order.get_side().as_str().to_string()));
    push_opt(&mut params, "quantity", order.get_quantity());
    push_opt(&mut params, "limitClientOrderId", order.get_limit_client_order_id());
    push_opt(&mut params, "price", order.get_price());
    push_opt(&mut params, "limitIcebergQty", order.get_iceberg_qty());
    push_opt(&mut params, "stopClientOrderId", order.get_stop_client_order_id());
    push_opt(&mut params, "stopPrice", order.get_stop_price());
    push_opt(&mut params, "stopLimitPrice", order.get_stop_limit_price());

    let stop_limit_tif = order.get_time_in_force().unwrap_or(TimeInForce::Gtc);
    params.push(("stopLimitTimeInForce", stop_limit_tif.as_str().to_string()));
    params.push((
        "newOrderRespType",
        order.get_new_order_resp_type().as_str().to_string(),
    ));
    push_window(&mut params, order.get_recv_window(), order.get_timestamp());

    params
}

pub fn order_status_params(request: &OrderStatusRequest) -> Params {
    let mut params = vec![("symbol", request.symbol.clone())];
    push_opt(&mut params, "orderId", request.order_id);
    push_opt(
        &mut params,
        "origClientOrderId",
        request.orig_client_order_id.as_deref(),
    );
    push_window(&mut params, request.recv_window, request.timestamp);
    params
}

pub fn cancel_order_params(request: &CancelOrderRequest) -> Params {
    let mut params = vec![("symbol", request.symbol.clone())];
    push_opt(&mut params, "orderId", request.order_id);
    push_opt(
        &mut params,
        "origClientOrderId",
        request.orig_client_order_id.as_deref(),
    );
    push_opt(
        &mut params,
        "newClientOrderId",
        request.new_client_order_id.as_deref(),
    );
    push_window(&mut params, request.recv_window, request.timestamp);
    params
}

/// Parameters for cancelling a whole order list. The request's order id and
/// client id address the list rather than a single order.
pub fn cancel_order_list_params(request: &CancelOrderRequest) -> Params {
    let mut params = vec![("symbol", request.symbol.clone())];
    push_opt(&mut params, "orderListId", request.order_id);
    push_opt(
        &mut params,
        "listClientOrderId",
        request.orig_client_order_id.as_deref(),
    );
    push_opt(
        &mut params,
        "newClientOrderId",
        request.new_client_order_id.as_deref(),
    );
    push_window(&mut params, request.recv_window, request.timestamp);
    params
}

pub fn open_orders_params(request: &OrderRequest) -> Params {
    let mut params = Params::new();
    push_opt(&mut params, "symbol", request.symbol.as_deref());
    push_window(&mut params, request.recv_window, request.timestamp);
    params
}

pub fn all_orders_params(request: &AllOrdersRequest) -> Params {
    let mut params = vec![("symbol", request.symbol.clone())];
    push_opt(&mut params, "orderId", request.order_id);
    push_opt(&mut params, "limit", request.limit);
    push_window(&mut params, request.recv_window, request.timestamp);
    params
}
