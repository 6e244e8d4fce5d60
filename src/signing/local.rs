use std::borrow::Cow;
use std::str::FromStr as _;

use alloy::dyn_abi::Eip712Domain;
use alloy::primitives::{B256, U256};
use alloy::signers::Signer as _;
use alloy::signers::local::PrivateKeySigner;
use alloy::sol_types::SolStruct as _;
use async_trait::async_trait;
use secrecy::{ExposeSecret as _, SecretString};

use crate::Result;
use crate::dex::{LimitOrder, StopLimitOrder};
use crate::error::Error;
use crate::signing::{LimitOrderSigner, StopLimitOrderSigner};
use crate::types::{Address, ChainId, OrderId, TypedSignature};

const LIMIT_ORDERS_NAME: Option<Cow<'static, str>> = Some(Cow::Borrowed("LimitOrders"));
const LIMIT_ORDERS_VERSION: Option<Cow<'static, str>> = Some(Cow::Borrowed("1.1"));

const STOP_LIMIT_ORDERS_NAME: Option<Cow<'static, str>> = Some(Cow::Borrowed("StopLimitOrders"));
const STOP_LIMIT_ORDERS_VERSION: Option<Cow<'static, str>> = Some(Cow::Borrowed("1.0"));

const CANCEL_ACTION: &str = "cancel";

mod typed_data {
    alloy::sol! {
        struct LimitOrder {
            uint256 makerMarket;
            uint256 takerMarket;
            uint256 makerAmount;
            uint256 takerAmount;
            address makerAccountOwner;
            uint256 makerAccountNumber;
            address takerAccountOwner;
            uint256 takerAccountNumber;
            uint256 expiration;
            uint256 salt;
        }

        struct StopLimitOrder {
            uint256 makerMarket;
            uint256 takerMarket;
            uint256 makerAmount;
            uint256 takerAmount;
            address makerAccountOwner;
            uint256 makerAccountNumber;
            address takerAccountOwner;
            uint256 takerAccountNumber;
            uint256 expiration;
            uint256 salt;
            uint256 triggerPrice;
            bool decreaseOnly;
        }

        struct CancelLimitOrder {
            string action;
            bytes32 orderId;
        }
    }
}

/// Signs standard limit orders with a local private key over EIP-712
/// typed data.
#[derive(Clone, Debug)]
pub struct LocalLimitOrderSigner {
    signer: PrivateKeySigner,
    domain: Eip712Domain,
}

impl LocalLimitOrderSigner {
    /// Creates a signer scoped to the limit-order verifying contract on
    /// the given chain.
    pub fn new(
        private_key: &SecretString,
        chain_id: ChainId,
        verifying_contract: Address,
    ) -> Result<Self> {
        let signer = parse_key(private_key, chain_id)?;
        let domain = domain(
            LIMIT_ORDERS_NAME,
            LIMIT_ORDERS_VERSION,
            chain_id,
            verifying_contract,
        );
        Ok(Self { signer, domain })
    }

    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

#[async_trait]
impl LimitOrderSigner for LocalLimitOrderSigner {
    async fn sign_order(&self, order: &LimitOrder) -> Result<TypedSignature> {
        let message = typed_data::LimitOrder {
            makerMarket: U256::from(order.maker_market),
            takerMarket: U256::from(order.taker_market),
            makerAmount: order.maker_amount,
            takerAmount: order.taker_amount,
            makerAccountOwner: order.maker_account_owner,
            makerAccountNumber: order.maker_account_number,
            takerAccountOwner: order.taker_account_owner,
            takerAccountNumber: order.taker_account_number,
            expiration: U256::from(order.expiration),
            salt: order.salt,
        };
        sign_hash(&self.signer, message.eip712_signing_hash(&self.domain)).await
    }

    async fn sign_cancel(&self, order_id: OrderId, maker: Address) -> Result<TypedSignature> {
        sign_cancel_for(&self.signer, &self.domain, order_id, maker).await
    }
}

/// Signs stop-limit orders with a local private key over EIP-712 typed
/// data.
#[derive(Clone, Debug)]
pub struct LocalStopLimitOrderSigner {
    signer: PrivateKeySigner,
    domain: Eip712Domain,
}

impl LocalStopLimitOrderSigner {
    /// Creates a signer scoped to the stop-limit-order verifying contract
    /// on the given chain.
    pub fn new(
        private_key: &SecretString,
        chain_id: ChainId,
        verifying_contract: Address,
    ) -> Result<Self> {
        let signer = parse_key(private_key, chain_id)?;
        let domain = domain(
            STOP_LIMIT_ORDERS_NAME,
            STOP_LIMIT_ORDERS_VERSION,
            chain_id,
            verifying_contract,
        );
        Ok(Self { signer, domain })
    }

    #[must_use]
    pub fn address(&self) -> Address {
        self.signer.address()
    }
}

#[async_trait]
impl StopLimitOrderSigner for LocalStopLimitOrderSigner {
    async fn sign_order(&self, order: &StopLimitOrder) -> Result<TypedSignature> {
        let message = typed_data::StopLimitOrder {
            makerMarket: U256::from(order.order.maker_market),
            takerMarket: U256::from(order.order.taker_market),
            makerAmount: order.order.maker_amount,
            takerAmount: order.order.taker_amount,
            makerAccountOwner: order.order.maker_account_owner,
            makerAccountNumber: order.order.maker_account_number,
            takerAccountOwner: order.order.taker_account_owner,
            takerAccountNumber: order.order.taker_account_number,
            expiration: U256::from(order.order.expiration),
            salt: order.order.salt,
            triggerPrice: order.trigger_price,
            decreaseOnly: order.decrease_only,
        };
        sign_hash(&self.signer, message.eip712_signing_hash(&self.domain)).await
    }

    async fn sign_cancel(&self, order_id: OrderId, maker: Address) -> Result<TypedSignature> {
        sign_cancel_for(&self.signer, &self.domain, order_id, maker).await
    }
}

fn parse_key(private_key: &SecretString, chain_id: ChainId) -> Result<PrivateKeySigner> {
    PrivateKeySigner::from_str(private_key.expose_secret())
        .map_err(|e| Error::signing(format!("invalid private key: {e}")))
        .map(|signer| signer.with_chain_id(Some(chain_id)))
}

fn domain(
    name: Option<Cow<'static, str>>,
    version: Option<Cow<'static, str>>,
    chain_id: ChainId,
    verifying_contract: Address,
) -> Eip712Domain {
    Eip712Domain {
        name,
        version,
        chain_id: Some(U256::from(chain_id)),
        verifying_contract: Some(verifying_contract),
        ..Eip712Domain::default()
    }
}

async fn sign_hash(signer: &PrivateKeySigner, hash: B256) -> Result<TypedSignature> {
    let signature = signer.sign_hash(&hash).await?;
    Ok(TypedSignature::new(format!(
        "0x{}",
        alloy::hex::encode(signature.as_bytes())
    )))
}

async fn sign_cancel_for(
    signer: &PrivateKeySigner,
    domain: &Eip712Domain,
    order_id: OrderId,
    maker: Address,
) -> Result<TypedSignature> {
    if maker != signer.address() {
        return Err(Error::signing(format!(
            "cancellation requested for maker {maker}, signer holds {}",
            signer.address()
        )));
    }
    let message = typed_data::CancelLimitOrder {
        action: String::from(CANCEL_ACTION),
        orderId: order_id,
    };
    sign_hash(signer, message.eip712_signing_hash(domain)).await
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{address, b256};
    use secrecy::SecretString;

    use super::*;
    use crate::dex::CreateOrderParams;

    const TEST_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe51296170827936ea5cce4b76994b0f";
    const CONTRACT: Address = address!("0xDEf1C0ded9bec7F1a1670819833240f027b25EfF");

    fn test_order() -> LimitOrder {
        CreateOrderParams::new(
            address!("0x8eb8a3b98659Cce290402893d0123abb75E3ab28"),
            0,
            1,
            U256::from(10_000_000_000_000_000_000_u128),
            U256::from(20_000_000_u64),
        )
        .into_order(U256::from(42_u64), 0)
    }

    #[tokio::test]
    async fn order_signature_is_65_byte_hex() {
        let signer =
            LocalLimitOrderSigner::new(&SecretString::from(String::from(TEST_KEY)), 1, CONTRACT).unwrap();
        let signature = signer.sign_order(&test_order()).await.unwrap();
        assert!(signature.as_str().starts_with("0x"), "hex prefixed");
        assert_eq!(signature.as_str().len(), 2 + 65 * 2, "r || s || v");
    }

    #[tokio::test]
    async fn cancel_signature_differs_from_order_signature() {
        let signer =
            LocalLimitOrderSigner::new(&SecretString::from(String::from(TEST_KEY)), 1, CONTRACT).unwrap();
        let order_sig = signer.sign_order(&test_order()).await.unwrap();
        let cancel_sig = signer
            .sign_cancel(
                b256!("0x1111111111111111111111111111111111111111111111111111111111111111"),
                signer.address(),
            )
            .await
            .unwrap();
        assert_ne!(order_sig, cancel_sig, "distinct typed payloads");
    }

    #[tokio::test]
    async fn cancel_for_foreign_maker_is_rejected() {
        let signer =
            LocalLimitOrderSigner::new(&SecretString::from(String::from(TEST_KEY)), 1, CONTRACT).unwrap();
        let err = signer
            .sign_cancel(
                b256!("0x1111111111111111111111111111111111111111111111111111111111111111"),
                address!("0x0000000000000000000000000000000000000001"),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Signing);
    }
}
