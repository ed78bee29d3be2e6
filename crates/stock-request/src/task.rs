//! Background task requests.

use serde::Serialize;

/// Business type tag for a per-stock data sync.
pub const STOCK_CODE_BUSINESS_TYPE: i64 = 2;

/// Body of the stock sync request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SyncRequest {
    /// Stock code to sync.
    pub code: String,
    /// Kind of sync task; always [`STOCK_CODE_BUSINESS_TYPE`].
    pub business_type: i64,
}

/// Builds the stock sync request.
pub fn build_sync_request(code: impl Into<String>) -> SyncRequest {
    SyncRequest {
        code: code.into(),
        business_type: STOCK_CODE_BUSINESS_TYPE,
    }
}

/// Body of the subscription delete request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteSubscribeRequest {
    /// Id of the strategy to delete.
    pub id: i64,
}

/// Builds the subscription delete request.
#[must_use]
pub const fn build_delete_subscribe_request(id: i64) -> DeleteSubscribeRequest {
    DeleteSubscribeRequest { id }
}
