#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zhikongming/stock-client/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! HTTP transport for the stock backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use stock_core::{ClientConfig, Transport};
//! use stock_http::HttpTransport;
//!
//! #[tokio::main]
//! async fn main() -> stock_core::Result<()> {
//!     let transport = HttpTransport::new(ClientConfig::from_env()?)?;
//!     let info = transport
//!         .get("/stock/info", &[("code", "SH600036".to_string())])
//!         .await?;
//!     println!("{info}");
//!     Ok(())
//! }
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use stock_core::{ClientConfig, Method, Result, StockError, Transport};
use tracing::{debug, warn};

/// Transport that talks to the backend over HTTP with `reqwest`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.config.base_url)
            .finish()
    }
}

impl HttpTransport {
    /// Creates a transport with a default `reqwest` client.
    ///
    /// # Errors
    ///
    /// Returns [`StockError::Config`] when the base address is not an
    /// absolute http(s) URL.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_client(Client::new(), config)
    }

    /// Creates a transport with a caller-provided `reqwest` client.
    ///
    /// Proxies, default headers and timeouts belong on that client.
    pub fn with_client(client: Client, config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { client, config })
    }

    /// Returns the configuration this transport was built with.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.url(path)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<Value> {
        debug!(method = "GET", path, params = query.len(), "Backend request");

        let response = self
            .client
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(StockError::transport)?;

        read_json(path, response).await
    }

    async fn send(&self, method: Method, path: &str, body: &Value) -> Result<Value> {
        debug!(method = method.as_str(), path, "Backend request");

        let response = self
            .client
            .request(to_reqwest(method), self.url(path))
            .json(body)
            .send()
            .await
            .map_err(StockError::transport)?;

        read_json(path, response).await
    }
}

const fn to_reqwest(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Reads the body and decodes it as JSON. An empty body decodes as `null`.
async fn read_json(path: &str, response: reqwest::Response) -> Result<Value> {
    let status = response.status();
    let text = response.text().await.map_err(StockError::transport)?;

    if !status.is_success() {
        let message = error_message(&text);
        warn!(path, status = status.as_u16(), message = %message, "Backend returned an error");
        return Err(StockError::Status {
            status: status.as_u16(),
            message,
        });
    }

    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_json::from_str(&text).map_err(|e| StockError::Parse(format!("{e}: {text}")))
}

/// Error replies carry `{"message": "..."}`; fall back to the raw body.
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        message: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| body.to_string())
}
