//! Client configuration: backend address and endpoint paths.
//!
//! [`ClientConfig`] is built once per deployment and handed to the client
//! at construction; nothing in the workspace reads globals at call time.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StockError};

/// Backend address used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:6789";

/// Environment variable read by [`ClientConfig::from_env`].
pub const BASE_URL_ENV: &str = "STOCK_API_BASE_URL";

/// Paths of the backend endpoints, relative to the base address.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Stock screening (POST).
    pub filter_code: String,
    /// Stock data sync task (POST).
    pub sync_stock_code: String,
    /// Financial report read (GET) and write (POST).
    pub stock_report: String,
    /// Bank report time series (GET).
    pub bank_track: String,
    /// Industry report time series (GET).
    pub industry_track: String,
    /// Stock basic information (GET).
    pub stock_info: String,
    /// Industry membership (GET).
    pub industry_basic: String,
    /// Industry price trend (GET).
    pub industry_trend: String,
    /// Industry correlation (GET).
    pub industry_relation: String,
    /// Subscription strategies: create (POST), list (GET), delete (DELETE).
    pub subscribe_strategy: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            filter_code: "/filter/stock/code".to_string(),
            sync_stock_code: "/task/stock/code".to_string(),
            stock_report: "/report/stock".to_string(),
            bank_track: "/report/bank/track".to_string(),
            industry_track: "/report/industry/track".to_string(),
            stock_info: "/stock/info".to_string(),
            industry_basic: "/industry/basic".to_string(),
            industry_trend: "/industry/trend".to_string(),
            industry_relation: "/industry/relation".to_string(),
            subscribe_strategy: "/subscribe/strategy".to_string(),
        }
    }
}

/// Immutable client configuration.
///
/// Deserializable, so it can be embedded in an application's own config
/// file; missing fields fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Scheme, host and port of the backend, e.g. `http://localhost:6789`.
    pub base_url: String,
    /// Endpoint paths.
    pub endpoints: Endpoints,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            endpoints: Endpoints::default(),
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with the default endpoints.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            endpoints: Endpoints::default(),
        }
    }

    /// Reads the base address from `STOCK_API_BASE_URL`.
    ///
    /// Falls back to [`DEFAULT_BASE_URL`] when the variable is unset.
    pub fn from_env() -> Result<Self> {
        let config = match std::env::var(BASE_URL_ENV) {
            Ok(url) => Self::new(url),
            Err(std::env::VarError::NotPresent) => Self::default(),
            Err(e) => return Err(StockError::Config(format!("{BASE_URL_ENV}: {e}"))),
        };
        config.validate()?;
        Ok(config)
    }

    /// Replaces the endpoint table.
    #[must_use]
    pub fn with_endpoints(mut self, endpoints: Endpoints) -> Self {
        self.endpoints = endpoints;
        self
    }

    /// Checks that the base address is an absolute http(s) URL.
    pub fn validate(&self) -> Result<()> {
        let url = self.base_url.trim();
        if url.starts_with("http://") || url.starts_with("https://") {
            Ok(())
        } else {
            Err(StockError::Config(format!(
                "base_url must start with http:// or https://, got {:?}",
                self.base_url
            )))
        }
    }

    /// Joins the base address and an endpoint path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        let base = self.base_url.trim().trim_end_matches('/');
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let config = ClientConfig::default();
        assert_eq!(
            config.url(&config.endpoints.filter_code),
            "http://localhost:6789/filter/stock/code"
        );

        let config = ClientConfig::new("https://stock.example.com/api/");
        assert_eq!(
            config.url("industry/trend"),
            "https://stock.example.com/api/industry/trend"
        );
    }

    #[test]
    fn test_validate_rejects_relative_base() {
        assert!(ClientConfig::default().validate().is_ok());
        let err = ClientConfig::new("localhost:6789").validate().unwrap_err();
        assert!(matches!(err, StockError::Config(_)));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"base_url": "http://10.0.0.2:6789", "endpoints": {"stock_info": "/stock/basic"}}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "http://10.0.0.2:6789");
        assert_eq!(config.endpoints.stock_info, "/stock/basic");
        assert_eq!(config.endpoints.filter_code, "/filter/stock/code");
    }
}
