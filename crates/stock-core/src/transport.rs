//! The seam between the client and the HTTP stack.
//!
//! A [`Transport`] sends exactly one request per call and hands back the
//! decoded JSON body. It does not retry and does not time out on its own.

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::{self, Debug};

use crate::error::Result;

/// Query string as ordered key/value pairs.
pub type QueryParams = Vec<(&'static str, String)>;

/// HTTP method used for a JSON-body request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    /// GET.
    Get,
    /// POST.
    Post,
    /// DELETE.
    Delete,
}

impl Method {
    /// Returns the method name in upper case.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sends requests to the backend.
///
/// `path` is the endpoint path from [`Endpoints`](crate::config::Endpoints);
/// the implementation owns the base address.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Issues a GET with the given query string and decodes the JSON body.
    async fn get(&self, path: &str, query: &[(&'static str, String)]) -> Result<Value>;

    /// Issues a request carrying `body` as JSON and decodes the JSON reply.
    async fn send(&self, method: Method, path: &str, body: &Value) -> Result<Value>;
}
