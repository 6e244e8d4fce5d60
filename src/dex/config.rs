use std::time::Duration;

use url::Url;

use crate::{DEFAULT_API_HOST, DEFAULT_TIMEOUT_MS, Result};

/// Client configuration: one endpoint and one timeout for every request.
/// There is no per-call override.
#[derive(Clone, Debug)]
pub struct DexConfig {
    pub host: Url,
    pub timeout: Duration,
}

impl DexConfig {
    #[must_use]
    pub fn new(host: Url, timeout: Duration) -> Self {
        Self { host, timeout }
    }

    /// Parses an endpoint string, keeping the default timeout.
    pub fn from_host(host: &str) -> Result<Self> {
        Ok(Self {
            host: Url::parse(host)?,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }
}

impl Default for DexConfig {
    fn default() -> Self {
        Self {
            host: Url::parse(DEFAULT_API_HOST).expect("default host is a valid URL"),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_the_public_relay() {
        let config = DexConfig::default();
        assert_eq!(config.host.as_str(), "https://api.dydx.exchange/");
        assert_eq!(config.timeout, Duration::from_millis(10_000));
    }

    #[test]
    fn from_host_rejects_garbage() {
        assert!(DexConfig::from_host("not a url").is_err());
    }
}
