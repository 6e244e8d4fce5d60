//! HTTP-surface tests against a local mock relay.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use alloy::primitives::{address, b256};
use async_trait::async_trait;
use httpmock::prelude::*;
use serde_json::json;

use dydx_client_sdk::dex::{
    CreateOrderParams, FillsFilterV2, LimitOrder, OrderStatus, OrdersFilter, PlaceOrderParams,
    ReplaceOrderParams, StopLimitOrder, SubmitOrderRequest,
};
use dydx_client_sdk::signing::{LimitOrderSigner, StopLimitOrderSigner};
use dydx_client_sdk::types::{Address, OrderId, TypedSignature, U256};
use dydx_client_sdk::{DexClient, DexConfig, ErrorKind};

const MAKER: Address = address!("0x8eb8a3b98659Cce290402893d0123abb75E3ab28");
const CANCEL_ID: OrderId =
    b256!("0x2222222222222222222222222222222222222222222222222222222222222222");

/// Trait double that counts signing calls and returns fixed signatures.
#[derive(Debug, Default)]
struct RecordingSigner {
    orders_signed: AtomicUsize,
    stop_orders_signed: AtomicUsize,
    cancels_signed: AtomicUsize,
}

#[async_trait]
impl LimitOrderSigner for RecordingSigner {
    async fn sign_order(&self, _order: &LimitOrder) -> dydx_client_sdk::Result<TypedSignature> {
        self.orders_signed.fetch_add(1, Ordering::SeqCst);
        Ok(TypedSignature::new("0xaaaa"))
    }

    async fn sign_cancel(
        &self,
        _order_id: OrderId,
        _maker: Address,
    ) -> dydx_client_sdk::Result<TypedSignature> {
        self.cancels_signed.fetch_add(1, Ordering::SeqCst);
        Ok(TypedSignature::new("0xcccc"))
    }
}

#[async_trait]
impl StopLimitOrderSigner for RecordingSigner {
    async fn sign_order(
        &self,
        _order: &StopLimitOrder,
    ) -> dydx_client_sdk::Result<TypedSignature> {
        self.stop_orders_signed.fetch_add(1, Ordering::SeqCst);
        Ok(TypedSignature::new("0xbbbb"))
    }

    async fn sign_cancel(
        &self,
        _order_id: OrderId,
        _maker: Address,
    ) -> dydx_client_sdk::Result<TypedSignature> {
        self.cancels_signed.fetch_add(1, Ordering::SeqCst);
        Ok(TypedSignature::new("0xcccc"))
    }
}

fn client(server: &MockServer, signer: &Arc<RecordingSigner>) -> DexClient {
    let config = DexConfig::from_host(&server.base_url()).expect("mock server url");
    DexClient::with_config(
        Arc::clone(signer) as Arc<dyn LimitOrderSigner>,
        Arc::clone(signer) as Arc<dyn StopLimitOrderSigner>,
        config,
    )
    .expect("client")
}

fn order_params() -> CreateOrderParams {
    CreateOrderParams::new(
        MAKER,
        0,
        1,
        U256::from(10_000_000_000_000_000_000_u128),
        U256::from(20_000_000_u64),
    )
    .with_expiration(0)
}

fn order_body() -> serde_json::Value {
    json!({
        "order": {
            "uuid": "00000000-0000-4000-8000-000000000001",
            "id": "0x1111111111111111111111111111111111111111111111111111111111111111",
            "status": "OPEN",
            "makerAccountOwner": "0x8eb8a3b98659cce290402893d0123abb75e3ab28",
            "makerAccountNumber": "0",
        }
    })
}

#[tokio::test]
async fn submit_order_posts_decimal_string_fields() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/dex/orders")
                .header("content-type", "application/json")
                .json_body_includes(
                    r#"{
                        "order": {
                            "makerAmount": "10000000000000000000",
                            "takerAmount": "20000000",
                            "expiration": "0",
                            "typedSignature": "0xaaaa"
                        },
                        "fillOrKill": true,
                        "postOnly": false
                    }"#,
                );
            then.status(200).json_body(order_body());
        })
        .await;

    let signed = client.create_order(order_params()).await?;
    let response = client
        .submit_order(&SubmitOrderRequest::new(&signed, true, false))
        .await?;

    mock.assert_async().await;
    assert_eq!(response.order.status, OrderStatus::Open);
    Ok(())
}

#[tokio::test]
async fn place_order_with_trigger_uses_stop_limit_path() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/dex/orders")
                .json_body_includes(r#"{"triggerPrice": "1500000000"}"#);
            then.status(200).json_body(order_body());
        })
        .await;

    let params = PlaceOrderParams::new(order_params())
        .with_trigger_price(U256::from(1_500_000_000_u64))
        .with_post_only(true);
    client.place_order(params).await?;

    mock.assert_async().await;
    assert_eq!(signer.stop_orders_signed.load(Ordering::SeqCst), 1);
    assert_eq!(signer.orders_signed.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn place_order_without_trigger_uses_standard_path() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/dex/orders")
                .json_body_includes(r#"{"order": {"typedSignature": "0xaaaa"}}"#);
            then.status(200).json_body(order_body());
        })
        .await;

    client.place_order(PlaceOrderParams::new(order_params())).await?;

    mock.assert_async().await;
    assert_eq!(signer.orders_signed.load(Ordering::SeqCst), 1);
    assert_eq!(signer.stop_orders_signed.load(Ordering::SeqCst), 0);
    Ok(())
}

#[tokio::test]
async fn replace_order_signs_once_each_and_posts_once() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/v1/dex/orders/replace")
                .json_body_includes(
                    r#"{
                        "cancelId": "0x2222222222222222222222222222222222222222222222222222222222222222",
                        "cancelSignature": "0xcccc"
                    }"#,
                );
            then.status(200).json_body(order_body());
        })
        .await;

    client
        .replace_order(ReplaceOrderParams::new(order_params(), CANCEL_ID))
        .await?;

    assert_eq!(mock.hits_async().await, 1, "exactly one replace POST");
    assert_eq!(signer.orders_signed.load(Ordering::SeqCst), 1);
    assert_eq!(signer.cancels_signed.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn cancel_order_sends_bearer_signature() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path(format!("/v1/dex/orders/{CANCEL_ID}"))
                .header("authorization", "Bearer 0xcccc");
            then.status(200).json_body(order_body());
        })
        .await;

    client.cancel_order(CANCEL_ID, MAKER).await?;

    mock.assert_async().await;
    assert_eq!(signer.cancels_signed.load(Ordering::SeqCst), 1);
    Ok(())
}

#[tokio::test]
async fn get_orders_sends_only_present_filters() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v1/dex/orders")
                .query_param("limit", "5");
            then.status(200).json_body(json!({"orders": []}));
        })
        .await;

    let response = client
        .get_orders(&OrdersFilter::builder().limit(5).build())
        .await?;

    mock.assert_async().await;
    assert!(response.orders.is_empty());
    Ok(())
}

#[tokio::test]
async fn get_account_balances_queries_the_account_number() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/v1/accounts/{MAKER}"))
                .query_param("number", "0");
            then.status(200).json_body(json!({
                "account": {
                    "owner": "0x8eb8a3b98659cce290402893d0123abb75e3ab28",
                    "number": "0",
                    "balances": {
                        "0": { "wei": "-12345678901234567890", "pendingWei": "0" }
                    }
                }
            }));
        })
        .await;

    let response = client.get_account_balances(MAKER, U256::ZERO).await?;

    mock.assert_async().await;
    let balance = response.account.balances.get("0").expect("market 0 entry");
    assert_eq!(balance.wei.as_deref(), Some("-12345678901234567890"));
    Ok(())
}

#[tokio::test]
async fn get_markets_decodes_metadata() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/markets");
            then.status(200).json_body(json!({
                "markets": [
                    {
                        "id": 0,
                        "name": "Wrapped Ether",
                        "symbol": "WETH",
                        "oraclePrice": "188.17"
                    }
                ]
            }));
        })
        .await;

    let response = client.get_markets().await?;

    mock.assert_async().await;
    assert_eq!(response.markets.len(), 1);
    assert_eq!(response.markets[0].symbol.as_deref(), Some("WETH"));
    Ok(())
}

#[tokio::test]
async fn non_2xx_surfaces_status_and_body_untouched() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/v1/markets");
            then.status(422)
                .body(r#"{"errors":[{"msg":"order already exists"}]}"#);
        })
        .await;

    let err = client.get_markets().await.unwrap_err();

    mock.assert_async().await;
    assert_eq!(err.kind(), ErrorKind::Status);
    assert_eq!(err.http_status(), Some(422));
    assert!(
        err.body().is_some_and(|b| b.contains("order already exists")),
        "body passes through verbatim"
    );
    Ok(())
}

#[tokio::test]
async fn signing_failure_aborts_before_any_network_call() {
    /// Signer that always refuses.
    #[derive(Debug)]
    struct RefusingSigner;

    #[async_trait]
    impl LimitOrderSigner for RefusingSigner {
        async fn sign_order(
            &self,
            _order: &LimitOrder,
        ) -> dydx_client_sdk::Result<TypedSignature> {
            Err(test_signing_error())
        }

        async fn sign_cancel(
            &self,
            _order_id: OrderId,
            _maker: Address,
        ) -> dydx_client_sdk::Result<TypedSignature> {
            Err(test_signing_error())
        }
    }

    #[async_trait]
    impl StopLimitOrderSigner for RefusingSigner {
        async fn sign_order(
            &self,
            _order: &StopLimitOrder,
        ) -> dydx_client_sdk::Result<TypedSignature> {
            Err(test_signing_error())
        }

        async fn sign_cancel(
            &self,
            _order_id: OrderId,
            _maker: Address,
        ) -> dydx_client_sdk::Result<TypedSignature> {
            Err(test_signing_error())
        }
    }

    fn test_signing_error() -> dydx_client_sdk::Error {
        dydx_client_sdk::Error::signing("key unavailable")
    }

    let server = MockServer::start_async().await;
    let refusing = Arc::new(RefusingSigner);
    let config = DexConfig::from_host(&server.base_url()).expect("mock server url");
    let client = DexClient::with_config(
        Arc::clone(&refusing) as Arc<dyn LimitOrderSigner>,
        refusing as Arc<dyn StopLimitOrderSigner>,
        config,
    )
    .expect("client");

    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path_includes("/v1/dex/orders");
            then.status(200).json_body(order_body());
        })
        .await;

    let err = client
        .place_order(PlaceOrderParams::new(order_params()))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Signing);

    let err = client
        .replace_order(ReplaceOrderParams::new(order_params(), CANCEL_ID))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Signing);

    assert_eq!(mock.hits_async().await, 0, "nothing reached the wire");
}

#[tokio::test]
async fn get_order_fetches_by_id() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(format!("/v1/dex/orders/{CANCEL_ID}"));
            then.status(200).json_body(order_body());
        })
        .await;

    let response = client.get_order(CANCEL_ID).await?;

    mock.assert_async().await;
    assert_eq!(response.order.maker_account_owner, MAKER);
    Ok(())
}

#[tokio::test]
async fn get_fills_v2_renders_market_list_as_comma_array() -> anyhow::Result<()> {
    let server = MockServer::start_async().await;
    let signer = Arc::new(RecordingSigner::default());
    let client = client(&server, &signer);

    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/fills")
                .query_param("market", "WETH-DAI,DAI-USDC")
                .query_param("limit", "10");
            then.status(200).json_body(json!({"fills": []}));
        })
        .await;

    let filter = FillsFilterV2::builder()
        .market(vec![String::from("WETH-DAI"), String::from("DAI-USDC")])
        .limit(10)
        .build();
    let response = client.get_fills_v2(&filter).await?;

    mock.assert_async().await;
    assert!(response.fills.is_empty());
    Ok(())
}
