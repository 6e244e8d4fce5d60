//! Order-signing seam.
//!
//! The client never touches key material: it is constructed with one
//! signer per order family and only ever asks for an order signature or
//! a cancellation signature. [`LocalLimitOrderSigner`] and
//! [`LocalStopLimitOrderSigner`] are the bundled private-key-backed
//! implementations; anything satisfying the traits can be injected
//! instead (hardware wallets, remote signing services, test doubles).

use async_trait::async_trait;

use crate::Result;
use crate::dex::{LimitOrder, StopLimitOrder};
use crate::types::{Address, OrderId, TypedSignature};

mod local;

pub use local::{LocalLimitOrderSigner, LocalStopLimitOrderSigner};

/// Produces typed signatures for standard limit orders.
#[async_trait]
pub trait LimitOrderSigner: Send + Sync {
    /// Signs a canonical encoding of the order.
    async fn sign_order(&self, order: &LimitOrder) -> Result<TypedSignature>;

    /// Signs a cancellation of the order identified by `order_id`,
    /// on behalf of `maker`.
    async fn sign_cancel(&self, order_id: OrderId, maker: Address) -> Result<TypedSignature>;
}

/// Produces typed signatures for stop-limit orders.
#[async_trait]
pub trait StopLimitOrderSigner: Send + Sync {
    /// Signs a canonical encoding of the order.
    async fn sign_order(&self, order: &StopLimitOrder) -> Result<TypedSignature>;

    /// Signs a cancellation of the order identified by `order_id`,
    /// on behalf of `maker`.
    async fn sign_cancel(&self, order_id: OrderId, maker: Address) -> Result<TypedSignature>;
}
