use alloy::providers::Provider;

use crate::Result;
use crate::error::{Error, Kind};
use crate::types::{Address, B256};

alloy::sol! {
    /// ABI of the deployed permission registry. `trustAddress` reverts
    /// on self-delegation, no events, no return value.
    #[sol(rpc)]
    interface IPermissionRegistry {
        function trustAddress(address delegate, bool trusted) external;
    }
}

/// Caller for a deployed permission registry.
#[derive(Clone, Debug)]
pub struct PermissionRegistry<P> {
    address: Address,
    provider: P,
}

impl<P: Provider> PermissionRegistry<P> {
    #[must_use]
    pub const fn new(address: Address, provider: P) -> Self {
        Self { address, provider }
    }

    #[must_use]
    pub const fn address(&self) -> Address {
        self.address
    }

    /// Submits `trustAddress(delegate, trusted)` from the provider's
    /// default signer and returns the transaction hash without waiting
    /// for inclusion. A self-delegation reverts on-chain.
    pub async fn trust_address(&self, delegate: Address, trusted: bool) -> Result<B256> {
        let registry = IPermissionRegistry::new(self.address, &self.provider);
        let pending = registry
            .trustAddress(delegate, trusted)
            .send()
            .await
            .map_err(|e| Error::new(Kind::Transport, format!("trustAddress failed: {e}")))?;
        Ok(*pending.tx_hash())
    }
}
