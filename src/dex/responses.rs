use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use uuid::Uuid;

use crate::dex::types::{OrderSide, OrderStatus, OrderType};
use crate::types::{Address, B256, OrderId, U256};

/// Response bodies are decoded as-is; fields the relay may omit stay
/// optional and no value is interpreted or rewritten by the client.

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OrderResponse {
    pub order: ApiOrder,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<ApiOrder>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct FillsResponse {
    pub fills: Vec<ApiFill>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TradesResponse {
    pub trades: Vec<ApiTrade>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct AccountResponse {
    pub account: ApiAccount,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct MarketsResponse {
    pub markets: Vec<ApiMarket>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OrderbookResponse {
    pub bids: Vec<OrderbookOrder>,
    pub asks: Vec<OrderbookOrder>,
}

/// Order as reported by the relay.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiOrder {
    pub uuid: Uuid,
    pub id: OrderId,
    #[serde(default)]
    pub client_id: Option<String>,
    pub status: OrderStatus,
    pub maker_account_owner: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub maker_account_number: U256,
    #[serde(default)]
    pub pair: Option<String>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub maker_amount: Option<U256>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub taker_amount: Option<U256>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub maker_amount_remaining: Option<U256>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub taker_amount_remaining: Option<U256>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub trigger_price: Option<Decimal>,
    #[serde(default)]
    pub order_type: Option<OrderType>,
    #[serde(default)]
    pub side: Option<OrderSide>,
    #[serde(default)]
    pub fill_or_kill: Option<bool>,
    #[serde(default)]
    pub post_only: Option<bool>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Single maker/taker execution of an order.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiFill {
    pub uuid: Uuid,
    #[serde(default)]
    pub order_id: Option<OrderId>,
    #[serde(default)]
    pub transaction_hash: Option<B256>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub side: Option<OrderSide>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub amount: Option<U256>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Matched maker/taker pair.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTrade {
    pub uuid: Uuid,
    #[serde(default)]
    pub transaction_hash: Option<B256>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub maker_order_id: Option<OrderId>,
    #[serde(default)]
    pub taker_order_id: Option<OrderId>,
    #[serde(default)]
    pub market: Option<String>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub amount: Option<U256>,
    #[serde(default)]
    pub price: Option<Decimal>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Margin account with per-market balances keyed by market id.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiAccount {
    pub owner: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub number: U256,
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde(default)]
    pub balances: HashMap<String, ApiBalance>,
}

/// Raw balance entry. Wei values stay untouched strings: they are signed
/// arbitrary-precision decimals and pass through losslessly.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiBalance {
    #[serde(default)]
    pub wei: Option<String>,
    #[serde(default)]
    pub pending_wei: Option<String>,
    #[serde(default)]
    pub par: Option<String>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
}

/// Market metadata entry.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiMarket {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub oracle_price: Option<Decimal>,
    #[serde(default)]
    pub spread_premium: Option<Decimal>,
    #[serde(default)]
    pub margin_premium: Option<Decimal>,
    #[serde(default)]
    pub currency: Option<ApiCurrency>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCurrency {
    #[serde(default)]
    pub uuid: Option<Uuid>,
    pub symbol: String,
    pub decimals: u32,
    #[serde(default)]
    pub contract_address: Option<Address>,
}

/// One resting level of the v2 orderbook snapshot.
#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookOrder {
    #[serde(default)]
    pub id: Option<OrderId>,
    #[serde(default)]
    pub uuid: Option<Uuid>,
    #[serde_as(as = "DisplayFromStr")]
    pub amount: U256,
    pub price: Decimal,
}
