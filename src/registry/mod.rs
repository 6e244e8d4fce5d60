//! On-chain permission registry.
//!
//! One mapping, `(owner, delegate) -> trusted`, writable only through
//! `trustAddress(delegate, trusted)` by the owner themselves, with
//! self-delegation rejected. [`DelegateLedger`] carries the contract's
//! storage semantics in-process (the registry is small enough that the
//! ledger doubles as its reference behavior); the `registry` feature
//! adds a provider-backed caller for a deployed instance.

use std::collections::HashMap;

use crate::Result;
use crate::error::Error;
use crate::types::Address;

#[cfg(feature = "registry")]
mod onchain;

#[cfg(feature = "registry")]
pub use onchain::{IPermissionRegistry, PermissionRegistry};

/// Delegation state: `(owner, delegate) -> trusted`, defaulting to
/// `false` for unset pairs.
#[derive(Clone, Debug, Default)]
pub struct DelegateLedger {
    trusted: HashMap<(Address, Address), bool>,
}

impl DelegateLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `caller`'s trust flag for `delegate`.
    ///
    /// Rejects `caller == delegate` (a self-delegation is meaningless);
    /// otherwise the assignment is unconditional, so re-setting an
    /// existing value is a no-op rather than an error. The assignment
    /// either fully applies or — on the guard — leaves no trace.
    pub fn trust_address(
        &mut self,
        caller: Address,
        delegate: Address,
        trusted: bool,
    ) -> Result<()> {
        if caller == delegate {
            return Err(Error::validation("cannot set trust for own address"));
        }
        self.trusted.insert((caller, delegate), trusted);
        Ok(())
    }

    /// Whether `owner` currently trusts `delegate`. Unset pairs are
    /// untrusted.
    #[must_use]
    pub fn is_trusted(&self, owner: Address, delegate: Address) -> bool {
        self.trusted.get(&(owner, delegate)).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::address;

    use super::*;
    use crate::ErrorKind;

    const OWNER: Address = address!("0x1000000000000000000000000000000000000001");
    const DELEGATE: Address = address!("0x2000000000000000000000000000000000000002");

    #[test]
    fn self_trust_is_rejected_without_state_change() {
        let mut ledger = DelegateLedger::new();
        let err = ledger.trust_address(OWNER, OWNER, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!ledger.is_trusted(OWNER, OWNER));
    }

    #[test]
    fn unset_pairs_default_to_untrusted() {
        let ledger = DelegateLedger::new();
        assert!(!ledger.is_trusted(OWNER, DELEGATE));
    }

    #[test]
    fn grant_then_revoke_lands_on_false() {
        let mut ledger = DelegateLedger::new();
        ledger.trust_address(OWNER, DELEGATE, true).expect("grant");
        assert!(ledger.is_trusted(OWNER, DELEGATE));
        ledger.trust_address(OWNER, DELEGATE, false).expect("revoke");
        assert!(!ledger.is_trusted(OWNER, DELEGATE));
    }

    #[test]
    fn re_setting_the_same_value_is_a_no_op() {
        let mut ledger = DelegateLedger::new();
        ledger.trust_address(OWNER, DELEGATE, true).expect("grant");
        ledger.trust_address(OWNER, DELEGATE, true).expect("idempotent");
        assert!(ledger.is_trusted(OWNER, DELEGATE));
    }

    #[test]
    fn delegations_are_scoped_per_owner() {
        let mut ledger = DelegateLedger::new();
        ledger.trust_address(OWNER, DELEGATE, true).expect("grant");
        assert!(!ledger.is_trusted(DELEGATE, OWNER), "not symmetric");
    }
}
