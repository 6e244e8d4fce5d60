//! Shared semantic types.

use std::fmt;

use serde::{Deserialize, Serialize};

pub use alloy::primitives::{Address, B256, U256};
pub use rust_decimal::Decimal;

/// EVM chain id.
pub type ChainId = u64;

/// 32-byte relay order hash, rendered as `0x`-prefixed hex.
pub type OrderId = B256;

/// Signature over a typed (structured) encoding of an order or a
/// cancellation, as produced by an order signer.
///
/// The client treats this as an opaque hex string; verification happens
/// server-side or on-chain.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypedSignature(String);

impl TypedSignature {
    #[must_use]
    pub fn new<S: Into<String>>(signature: S) -> Self {
        Self(signature.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for TypedSignature {
    fn from(signature: String) -> Self {
        Self(signature)
    }
}
