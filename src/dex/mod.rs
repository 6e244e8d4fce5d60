//! Order-relay client.
//!
//! This module implements the full trading surface:
//! - build + sign limit and stop-limit orders (no network)
//! - submit, replace (atomic cancel-and-create), and cancel orders
//! - filtered reads over orders, fills, trades, balances, orderbooks,
//!   and market metadata
//!
//! Every operation is a single request/response cycle: nothing is
//! retried, cached, or interpreted beyond JSON decoding.

mod client;
mod config;
mod requests;
mod responses;
mod types;

pub use client::DexClient;
pub use config::DexConfig;
pub use requests::{
    FillsFilter, FillsFilterV2, OrderbookFilter, OrdersFilter, OrdersFilterV2,
    SubmitOrderRequest, SubmitReplaceOrderRequest, TradesFilter, TradesFilterV2, WireOrder,
};
pub use responses::{
    AccountResponse, ApiAccount, ApiBalance, ApiCurrency, ApiFill, ApiMarket, ApiOrder,
    ApiTrade, FillsResponse, MarketsResponse, OrderResponse, OrderbookOrder, OrderbookResponse,
    OrdersResponse, TradesResponse,
};
pub use types::{
    CreateOrderParams, CreateStopLimitOrderParams, DEFAULT_EXPIRATION_SECS, LimitOrder,
    OrderSide, OrderStatus, OrderType, PlaceOrderParams, ReplaceOrderParams, SignedLimitOrder,
    SignedStopLimitOrder, StopLimitOrder, TAKER_ACCOUNT_NUMBER, TAKER_ACCOUNT_OWNER,
};
