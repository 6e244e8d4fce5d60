use std::sync::Arc;

use reqwest::Client as ReqwestClient;
use reqwest::Method;
use reqwest::header;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::Result;
use crate::dex::config::DexConfig;
use crate::dex::requests::{
    FillsFilter, FillsFilterV2, OrderbookFilter, OrdersFilter, OrdersFilterV2,
    SubmitOrderRequest, SubmitReplaceOrderRequest, TradesFilter, TradesFilterV2,
};
use crate::dex::responses::{
    AccountResponse, FillsResponse, MarketsResponse, OrderResponse, OrderbookResponse,
    OrdersResponse, TradesResponse,
};
use crate::dex::types::{
    CreateOrderParams, CreateStopLimitOrderParams, DEFAULT_EXPIRATION_SECS, PlaceOrderParams,
    ReplaceOrderParams, SignedLimitOrder, SignedStopLimitOrder, generate_salt, real_expiration,
};
use crate::error::Error;
use crate::signing::{LimitOrderSigner, StopLimitOrderSigner};
use crate::types::{Address, OrderId, U256};

/// Client for the relay's order and market-data API.
///
/// Each public operation is one request/response cycle: build → sign →
/// serialize → send → return. The client holds only immutable
/// configuration; calls share nothing beyond the underlying connection
/// pool.
#[derive(Clone)]
pub struct DexClient {
    host: Url,
    limit_signer: Arc<dyn LimitOrderSigner>,
    stop_limit_signer: Arc<dyn StopLimitOrderSigner>,
    client: ReqwestClient,
}

impl std::fmt::Debug for DexClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DexClient")
            .field("host", &self.host)
            .finish_non_exhaustive()
    }
}

impl DexClient {
    /// Creates a client against the default public relay endpoint.
    pub fn new(
        limit_signer: Arc<dyn LimitOrderSigner>,
        stop_limit_signer: Arc<dyn StopLimitOrderSigner>,
    ) -> Result<Self> {
        Self::with_config(limit_signer, stop_limit_signer, DexConfig::default())
    }

    /// Creates a client with an explicit endpoint and timeout.
    pub fn with_config(
        limit_signer: Arc<dyn LimitOrderSigner>,
        stop_limit_signer: Arc<dyn StopLimitOrderSigner>,
        config: DexConfig,
    ) -> Result<Self> {
        let client = ReqwestClient::builder().timeout(config.timeout).build()?;
        Ok(Self::with_http_client(
            limit_signer,
            stop_limit_signer,
            config,
            client,
        ))
    }

    /// Creates a client on top of a caller-supplied HTTP client.
    ///
    /// The configured timeout only applies to clients built by this SDK;
    /// a custom client keeps whatever policy it was built with.
    #[must_use]
    pub fn with_http_client(
        limit_signer: Arc<dyn LimitOrderSigner>,
        stop_limit_signer: Arc<dyn StopLimitOrderSigner>,
        config: DexConfig,
        client: ReqwestClient,
    ) -> Self {
        Self {
            host: config.host,
            limit_signer,
            stop_limit_signer,
            client,
        }
    }

    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Builds and signs a standard limit order. Does not contact the
    /// network.
    pub async fn create_order(&self, params: CreateOrderParams) -> Result<SignedLimitOrder> {
        let requested = params.expiration.unwrap_or(DEFAULT_EXPIRATION_SECS);
        let order = params.into_order(generate_salt(), real_expiration(requested));
        let typed_signature = self.limit_signer.sign_order(&order).await?;
        Ok(SignedLimitOrder {
            order,
            typed_signature,
        })
    }

    /// Builds and signs a stop-limit order. Does not contact the network.
    pub async fn create_stop_limit_order(
        &self,
        params: CreateStopLimitOrderParams,
    ) -> Result<SignedStopLimitOrder> {
        let requested = params.order.expiration.unwrap_or(DEFAULT_EXPIRATION_SECS);
        let order = crate::dex::types::StopLimitOrder {
            order: params
                .order
                .into_order(generate_salt(), real_expiration(requested)),
            trigger_price: params.trigger_price,
            decrease_only: params.decrease_only,
        };
        let typed_signature = self.stop_limit_signer.sign_order(&order).await?;
        Ok(SignedStopLimitOrder {
            order,
            typed_signature,
        })
    }

    /// Submits an already-signed order to `POST /v1/dex/orders`.
    pub async fn submit_order(&self, request: &SubmitOrderRequest) -> Result<OrderResponse> {
        self.post("v1/dex/orders", request).await
    }

    /// Atomically cancels one order and creates another via
    /// `POST /v1/dex/orders/replace`.
    pub async fn submit_replace_order(
        &self,
        request: &SubmitReplaceOrderRequest,
    ) -> Result<OrderResponse> {
        self.post("v1/dex/orders/replace", request).await
    }

    /// Builds, signs, and submits an order in one call.
    ///
    /// A set trigger price routes through the stop-limit signer and the
    /// signed trigger price is attached to the submission; otherwise the
    /// standard limit path is used and no trigger price is sent. A
    /// signing failure aborts before any network call.
    pub async fn place_order(&self, params: PlaceOrderParams) -> Result<OrderResponse> {
        let PlaceOrderParams {
            order,
            fill_or_kill,
            post_only,
            trigger_price,
            decrease_only,
            client_id,
        } = params;

        let mut request = match trigger_price {
            Some(trigger_price) => {
                let signed = self
                    .create_stop_limit_order(
                        CreateStopLimitOrderParams::new(order, trigger_price)
                            .with_decrease_only(decrease_only),
                    )
                    .await?;
                SubmitOrderRequest::new(&signed, fill_or_kill, post_only)
                    .with_trigger_price(signed.order.trigger_price)
            }
            None => {
                let signed = self.create_order(order).await?;
                SubmitOrderRequest::new(&signed, fill_or_kill, post_only)
            }
        };
        if let Some(client_id) = client_id {
            request = request.with_client_id(client_id);
        }
        self.submit_order(&request).await
    }

    /// Builds and signs a replacement order while concurrently obtaining
    /// the cancellation signature, then submits both together.
    ///
    /// Both signatures must exist before the HTTP call; a failure in
    /// either aborts the whole operation with nothing sent.
    pub async fn replace_order(&self, params: ReplaceOrderParams) -> Result<OrderResponse> {
        let ReplaceOrderParams {
            order,
            cancel_id,
            fill_or_kill,
            post_only,
            client_id,
        } = params;

        let maker = order.maker_account_owner;
        let (signed, cancel_signature) = futures::try_join!(
            self.create_order(order),
            self.limit_signer.sign_cancel(cancel_id, maker),
        )?;

        let mut request = SubmitReplaceOrderRequest::new(
            &signed,
            fill_or_kill,
            post_only,
            cancel_id,
            cancel_signature,
        );
        if let Some(client_id) = client_id {
            request = request.with_client_id(client_id);
        }
        self.submit_replace_order(&request).await
    }

    /// Cancels a resting order. The cancellation signature travels as a
    /// bearer credential.
    pub async fn cancel_order(
        &self,
        order_id: OrderId,
        maker_account_owner: Address,
    ) -> Result<OrderResponse> {
        let signature = self
            .limit_signer
            .sign_cancel(order_id, maker_account_owner)
            .await?;
        tracing::debug!(%order_id, "cancelling order");
        let request = self
            .client
            .request(
                Method::DELETE,
                self.endpoint(&format!("v1/dex/orders/{order_id}"))?,
            )
            .header(header::AUTHORIZATION, format!("Bearer {signature}"))
            .build()?;
        crate::request(&self.client, request).await
    }

    pub async fn get_orders(&self, filter: &OrdersFilter) -> Result<OrdersResponse> {
        self.get("v1/dex/orders", filter).await
    }

    pub async fn get_orders_v2(&self, filter: &OrdersFilterV2) -> Result<OrdersResponse> {
        self.get("v2/orders", filter).await
    }

    pub async fn get_order(&self, order_id: OrderId) -> Result<OrderResponse> {
        self.get_plain(&format!("v1/dex/orders/{order_id}")).await
    }

    pub async fn get_order_v2(&self, order_id: OrderId) -> Result<OrderResponse> {
        self.get_plain(&format!("v2/orders/{order_id}")).await
    }

    pub async fn get_fills(&self, filter: &FillsFilter) -> Result<FillsResponse> {
        self.get("v1/dex/fills", filter).await
    }

    pub async fn get_fills_v2(&self, filter: &FillsFilterV2) -> Result<FillsResponse> {
        self.get("v2/fills", filter).await
    }

    pub async fn get_trades(&self, filter: &TradesFilter) -> Result<TradesResponse> {
        self.get("v1/dex/trades", filter).await
    }

    pub async fn get_trades_v2(&self, filter: &TradesFilterV2) -> Result<TradesResponse> {
        self.get("v2/trades", filter).await
    }

    pub async fn get_account_balances(
        &self,
        owner: Address,
        number: U256,
    ) -> Result<AccountResponse> {
        let mut url = self.endpoint(&format!("v1/accounts/{owner}"))?;
        url.query_pairs_mut()
            .append_pair("number", &number.to_string());
        self.get_url(url).await
    }

    /// Orderbook snapshot assembled from open orders on the v1 surface.
    pub async fn get_orderbook(&self, filter: &OrderbookFilter) -> Result<OrdersResponse> {
        self.get("v1/dex/orders", filter).await
    }

    /// Aggregated bid/ask snapshot for a single market.
    pub async fn get_orderbook_v2(&self, market: &str) -> Result<OrderbookResponse> {
        self.get_plain(&format!("v1/orderbook/{market}")).await
    }

    pub async fn get_markets(&self) -> Result<MarketsResponse> {
        self.get_plain("v1/markets").await
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.host.join(path)?)
    }

    fn filtered_endpoint<F: Serialize>(&self, path: &str, filter: &F) -> Result<Url> {
        let mut url = self.endpoint(path)?;
        let query = serde_html_form::to_string(filter)
            .map_err(|e| Error::validation(format!("unencodable query filter: {e}")))?;
        if !query.is_empty() {
            url.set_query(Some(&query));
        }
        Ok(url)
    }

    async fn get<F: Serialize, T: DeserializeOwned>(&self, path: &str, filter: &F) -> Result<T> {
        let url = self.filtered_endpoint(path, filter)?;
        self.get_url(url).await
    }

    async fn get_plain<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.endpoint(path)?;
        self.get_url(url).await
    }

    async fn get_url<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let request = self.client.request(Method::GET, url).build()?;
        crate::request(&self.client, request).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let request = self
            .client
            .request(Method::POST, self.endpoint(path)?)
            .json(body)
            .build()?;
        crate::request(&self.client, request).await
    }
}
