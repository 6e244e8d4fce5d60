use alloy::primitives::address;
use chrono::Utc;
use rand::Rng as _;
use serde::{Deserialize, Serialize};

use crate::types::{Address, TypedSignature, U256};

/// Relay-controlled taker account: every newly created order is made out
/// to this account, real counterparty matching happens server-side.
pub const TAKER_ACCOUNT_OWNER: Address = address!("0xf809e07870dca762B9536d61A4fBEF1a17178092");

/// Account number of the relay taker account.
pub const TAKER_ACCOUNT_NUMBER: U256 = U256::ZERO;

/// Default expiration window: 28 days.
pub const DEFAULT_EXPIRATION_SECS: u64 = 28 * 24 * 60 * 60;

/// Standard limit order, as signed and submitted to the relay.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LimitOrder {
    pub maker_account_owner: Address,
    pub maker_account_number: U256,
    pub maker_market: u64,
    pub taker_market: u64,
    pub maker_amount: U256,
    pub taker_amount: U256,
    pub taker_account_owner: Address,
    pub taker_account_number: U256,
    /// Absolute unix expiration in seconds, `0` meaning never.
    pub expiration: u64,
    pub salt: U256,
}

/// Limit order plus its typed signature. Orders are never mutated after
/// signing; any change means a new order with a new salt and signature.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedLimitOrder {
    pub order: LimitOrder,
    pub typed_signature: TypedSignature,
}

/// Stop-limit order: a limit order that only becomes active for matching
/// once the trigger price is reached.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StopLimitOrder {
    pub order: LimitOrder,
    pub trigger_price: U256,
    pub decrease_only: bool,
}

/// Stop-limit order plus its typed signature.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedStopLimitOrder {
    pub order: StopLimitOrder,
    pub typed_signature: TypedSignature,
}

/// Side of a v2 order or fill.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Relay-side order lifecycle status.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Open,
    PartiallyFilled,
    Filled,
    Canceled,
    Expired,
    Untriggered,
    #[serde(other)]
    Unknown,
}

/// Order family, as reported by the relay.
#[non_exhaustive]
#[derive(
    Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, strum_macros::Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Limit,
    StopLimit,
    #[serde(other)]
    Unknown,
}

/// Input values for building a standard limit order.
///
/// Unset fields fall back to the relay conventions: account number `0`,
/// a 28-day expiration window, and the fixed relay taker account.
#[derive(Clone, Debug)]
pub struct CreateOrderParams {
    pub maker_account_owner: Address,
    pub maker_market: u64,
    pub taker_market: u64,
    pub maker_amount: U256,
    pub taker_amount: U256,
    pub maker_account_number: Option<U256>,
    /// Expiration window in seconds from now, `0` meaning never.
    pub expiration: Option<u64>,
}

impl CreateOrderParams {
    #[must_use]
    pub fn new(
        maker_account_owner: Address,
        maker_market: u64,
        taker_market: u64,
        maker_amount: U256,
        taker_amount: U256,
    ) -> Self {
        Self {
            maker_account_owner,
            maker_market,
            taker_market,
            maker_amount,
            taker_amount,
            maker_account_number: None,
            expiration: None,
        }
    }

    #[must_use]
    pub const fn with_maker_account_number(mut self, maker_account_number: U256) -> Self {
        self.maker_account_number = Some(maker_account_number);
        self
    }

    /// Sets the expiration window in seconds from now (`0` = never).
    #[must_use]
    pub const fn with_expiration(mut self, expiration_secs: u64) -> Self {
        self.expiration = Some(expiration_secs);
        self
    }

    /// Materializes the order: applies account defaults and the fixed
    /// relay taker, stamping the given salt and absolute expiration.
    #[must_use]
    pub fn into_order(self, salt: U256, expires_at: u64) -> LimitOrder {
        LimitOrder {
            maker_account_owner: self.maker_account_owner,
            maker_account_number: self.maker_account_number.unwrap_or(U256::ZERO),
            maker_market: self.maker_market,
            taker_market: self.taker_market,
            maker_amount: self.maker_amount,
            taker_amount: self.taker_amount,
            taker_account_owner: TAKER_ACCOUNT_OWNER,
            taker_account_number: TAKER_ACCOUNT_NUMBER,
            expiration: expires_at,
            salt,
        }
    }
}

/// Input values for building a stop-limit order.
#[derive(Clone, Debug)]
pub struct CreateStopLimitOrderParams {
    pub order: CreateOrderParams,
    pub trigger_price: U256,
    pub decrease_only: bool,
}

impl CreateStopLimitOrderParams {
    #[must_use]
    pub fn new(order: CreateOrderParams, trigger_price: U256) -> Self {
        Self {
            order,
            trigger_price,
            decrease_only: false,
        }
    }

    #[must_use]
    pub const fn with_decrease_only(mut self, decrease_only: bool) -> Self {
        self.decrease_only = decrease_only;
        self
    }
}

/// Input values for the one-shot place-order flow.
///
/// Setting a trigger price routes the order through the stop-limit
/// signer; otherwise the standard limit signer is used.
#[derive(Clone, Debug)]
pub struct PlaceOrderParams {
    pub order: CreateOrderParams,
    pub fill_or_kill: bool,
    pub post_only: bool,
    pub trigger_price: Option<U256>,
    pub decrease_only: bool,
    pub client_id: Option<String>,
}

impl PlaceOrderParams {
    #[must_use]
    pub fn new(order: CreateOrderParams) -> Self {
        Self {
            order,
            fill_or_kill: false,
            post_only: false,
            trigger_price: None,
            decrease_only: false,
            client_id: None,
        }
    }

    #[must_use]
    pub const fn with_fill_or_kill(mut self, fill_or_kill: bool) -> Self {
        self.fill_or_kill = fill_or_kill;
        self
    }

    #[must_use]
    pub const fn with_post_only(mut self, post_only: bool) -> Self {
        self.post_only = post_only;
        self
    }

    #[must_use]
    pub const fn with_trigger_price(mut self, trigger_price: U256) -> Self {
        self.trigger_price = Some(trigger_price);
        self
    }

    #[must_use]
    pub const fn with_decrease_only(mut self, decrease_only: bool) -> Self {
        self.decrease_only = decrease_only;
        self
    }

    #[must_use]
    pub fn with_client_id<S: Into<String>>(mut self, client_id: S) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

/// Input values for the atomic cancel-and-create flow.
#[derive(Clone, Debug)]
pub struct ReplaceOrderParams {
    pub order: CreateOrderParams,
    pub cancel_id: crate::types::OrderId,
    pub fill_or_kill: bool,
    pub post_only: bool,
    pub client_id: Option<String>,
}

impl ReplaceOrderParams {
    #[must_use]
    pub fn new(order: CreateOrderParams, cancel_id: crate::types::OrderId) -> Self {
        Self {
            order,
            cancel_id,
            fill_or_kill: false,
            post_only: false,
            client_id: None,
        }
    }

    #[must_use]
    pub const fn with_fill_or_kill(mut self, fill_or_kill: bool) -> Self {
        self.fill_or_kill = fill_or_kill;
        self
    }

    #[must_use]
    pub const fn with_post_only(mut self, post_only: bool) -> Self {
        self.post_only = post_only;
        self
    }

    #[must_use]
    pub fn with_client_id<S: Into<String>>(mut self, client_id: S) -> Self {
        self.client_id = Some(client_id.into());
        self
    }
}

/// Uniform draw over the full 256-bit range. Salts only need uniqueness,
/// not unpredictability; this is not a cryptographically secure source.
pub(crate) fn generate_salt() -> U256 {
    U256::from_be_bytes(rand::rng().random::<[u8; 32]>())
}

/// Resolves a requested expiration window to an absolute unix timestamp:
/// `0` stays `0` (never expires), anything else is `now + window`.
pub(crate) fn real_expiration(requested_secs: u64) -> u64 {
    if requested_secs == 0 {
        return 0;
    }
    let now = u64::try_from(Utc::now().timestamp()).unwrap_or_default();
    now + requested_secs
}
