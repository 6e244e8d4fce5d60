use bon::Builder;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};

use crate::dex::types::{
    OrderSide, OrderStatus, OrderType, SignedLimitOrder, SignedStopLimitOrder,
};
use crate::serialize;
use crate::types::{Address, B256, OrderId, TypedSignature, U256};

/// Order as it travels on the wire: camelCase keys, every integer field a
/// base-10 decimal string.
#[serde_as]
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireOrder {
    pub typed_signature: TypedSignature,
    pub maker_account_owner: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub maker_account_number: U256,
    pub taker_account_owner: Address,
    #[serde_as(as = "DisplayFromStr")]
    pub taker_account_number: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub maker_market: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub taker_market: u64,
    #[serde_as(as = "DisplayFromStr")]
    pub maker_amount: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub taker_amount: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub salt: U256,
    #[serde_as(as = "DisplayFromStr")]
    pub expiration: u64,
}

impl From<&SignedLimitOrder> for WireOrder {
    fn from(signed: &SignedLimitOrder) -> Self {
        Self {
            typed_signature: signed.typed_signature.clone(),
            maker_account_owner: signed.order.maker_account_owner,
            maker_account_number: signed.order.maker_account_number,
            taker_account_owner: signed.order.taker_account_owner,
            taker_account_number: signed.order.taker_account_number,
            maker_market: signed.order.maker_market,
            taker_market: signed.order.taker_market,
            maker_amount: signed.order.maker_amount,
            taker_amount: signed.order.taker_amount,
            salt: signed.order.salt,
            expiration: signed.order.expiration,
        }
    }
}

impl From<&SignedStopLimitOrder> for WireOrder {
    fn from(signed: &SignedStopLimitOrder) -> Self {
        Self {
            typed_signature: signed.typed_signature.clone(),
            maker_account_owner: signed.order.order.maker_account_owner,
            maker_account_number: signed.order.order.maker_account_number,
            taker_account_owner: signed.order.order.taker_account_owner,
            taker_account_number: signed.order.order.taker_account_number,
            maker_market: signed.order.order.maker_market,
            taker_market: signed.order.order.taker_market,
            maker_amount: signed.order.order.maker_amount,
            taker_amount: signed.order.order.taker_amount,
            salt: signed.order.order.salt,
            expiration: signed.order.order.expiration,
        }
    }
}

/// `POST /v1/dex/orders` body. Optional fields are omitted entirely when
/// unset, never sent as null.
#[serde_as]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitOrderRequest {
    pub order: WireOrder,
    pub fill_or_kill: bool,
    pub post_only: bool,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl SubmitOrderRequest {
    #[must_use]
    pub fn new<O: Into<WireOrder>>(order: O, fill_or_kill: bool, post_only: bool) -> Self {
        Self {
            order: order.into(),
            fill_or_kill,
            post_only,
            trigger_price: None,
            client_id: None,
        }
    }

    #[must_use]
    pub const fn with_trigger_price(mut self, trigger_price: U256) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    #[must_use]
    pub fn with_client_id<S: Into<String>>(mut self, client_id: S) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

/// `POST /v1/dex/orders/replace` body: a submit body that additionally
/// carries the order to cancel and its cancellation signature.
#[serde_as]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReplaceOrderRequest {
    pub order: WireOrder,
    pub fill_or_kill: bool,
    pub post_only: bool,
    pub cancel_id: OrderId,
    pub cancel_signature: TypedSignature,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger_price: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}

impl SubmitReplaceOrderRequest {
    #[must_use]
    pub fn new<O: Into<WireOrder>>(
        order: O,
        fill_or_kill: bool,
        post_only: bool,
        cancel_id: OrderId,
        cancel_signature: TypedSignature,
    ) -> Self {
        Self {
            order: order.into(),
            fill_or_kill,
            post_only,
            cancel_id,
            cancel_signature,
            trigger_price: None,
            client_id: None,
        }
    }

    #[must_use]
    pub fn with_client_id<S: Into<String>>(mut self, client_id: S) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

/// Filters for `GET /v1/dex/orders`. Unset fields never reach the query
/// string.
#[serde_as]
#[derive(Builder, Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker_account_owner: Option<Address>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker_account_number: Option<U256>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize::joined::serialize"
    )]
    pub pairs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_before: Option<DateTime<Utc>>,
}

/// Filters for `GET /v2/orders`.
#[serde_as]
#[derive(Builder, Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrdersFilterV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_owner: Option<Address>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<U256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize::comma::serialize"
    )]
    pub status: Option<Vec<OrderStatus>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize::comma::serialize"
    )]
    pub order_type: Option<Vec<OrderType>>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize::comma::serialize"
    )]
    pub market: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// Filters for `GET /v1/dex/fills`.
#[serde_as]
#[derive(Builder, Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillsFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker_account_owner: Option<Address>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker_account_number: Option<U256>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize::joined::serialize"
    )]
    pub pairs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_before: Option<DateTime<Utc>>,
}

/// Filters for `GET /v2/fills`.
///
/// The v2 surface does not accept a `status` filter for fills; see
/// DESIGN.md for the upstream background.
#[serde_as]
#[derive(Builder, Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillsFilterV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<OrderId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<OrderSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_owner: Option<Address>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<U256>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize::comma::serialize"
    )]
    pub market: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_before: Option<DateTime<Utc>>,
}

/// Filters for `GET /v1/dex/trades`.
#[serde_as]
#[derive(Builder, Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker_account_owner: Option<Address>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maker_account_number: Option<U256>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize::joined::serialize"
    )]
    pub pairs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_before: Option<DateTime<Utc>>,
}

/// Filters for `GET /v2/trades`. Same `status` caveat as
/// [`FillsFilterV2`].
#[serde_as]
#[derive(Builder, Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TradesFilterV2 {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_owner: Option<Address>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<U256>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize::comma::serialize"
    )]
    pub market: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_before: Option<DateTime<Utc>>,
}

/// Filters for the v1 orderbook snapshot (open orders on
/// `GET /v1/dex/orders`).
#[derive(Builder, Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderbookFilter {
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize::joined::serialize"
    )]
    pub pairs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
