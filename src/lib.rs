//! dYdX DEX API client SDK.
//!
//! Builds, signs, and submits orders against the dYdX off-chain order
//! relay, and exposes the read-only market data endpoints:
//! - build + sign limit and stop-limit orders via injected signers
//! - submit, replace, and cancel orders over HTTP
//! - query orders, fills, trades, balances, orderbooks, and markets
//!
//! The `registry` feature additionally enables calls to the on-chain
//! permission registry used for signing-authority delegation.

use serde::de::DeserializeOwned;

pub mod dex;
pub mod error;
pub mod registry;
pub mod signing;
pub mod types;

pub(crate) mod serialize;

pub use dex::{DexClient, DexConfig};
pub use error::{Error, Kind as ErrorKind};

/// Crate-wide result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Unix timestamp in seconds.
pub type Timestamp = i64;

/// Default relay endpoint.
pub const DEFAULT_API_HOST: &str = "https://api.dydx.exchange";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Executes a prepared request and decodes the JSON response body.
///
/// Non-2xx responses become [`ErrorKind::Status`] errors carrying the
/// status code and raw body; no retry is performed at any layer.
pub(crate) async fn request<T: DeserializeOwned>(
    client: &reqwest::Client,
    request: reqwest::Request,
) -> Result<T> {
    let method = request.method().clone();
    let url = request.url().clone();
    tracing::debug!(%method, %url, "sending request");

    let response = client.execute(request).await?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(%method, %url, status = status.as_u16(), "request rejected");
        return Err(Error::status(status.as_u16(), body));
    }

    tracing::trace!(%method, %url, status = status.as_u16(), "request ok");
    Ok(response.json::<T>().await?)
}
