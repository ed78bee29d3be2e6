#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zhikongming/stock-client/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Request payload builders for the stock backend.
//!
//! All builders are pure and never fail. Numeric form fields are coerced
//! with [`LooseNumber`](stock_core::LooseNumber); a field that does not
//! parse counts as zero.
//!
//! - [`build_filter_request`] - Stock screening body
//! - [`build_report_update_request`] - Financial report write body
//! - [`build_sync_request`] - Stock data sync body
//! - [`query`] - Query strings for the read endpoints

/// Screening request.
pub mod filter;
/// Query strings for read endpoints.
pub mod query;
/// Financial report write request.
pub mod report;
/// Background task and subscription bodies.
pub mod task;

pub use filter::{
    BollingFilter, FilterCriteria, FilterRequest, MaFilter, MacdFilter, MacdThresholds,
    build_filter_request,
};
pub use query::{
    bank_trace_query, industry_basic_query, industry_relation_query, industry_trace_query,
    industry_trend_query, report_query, stock_info_query, subscribe_list_query,
};
pub use report::{ReportUpdateRequest, build_report_update_request};
pub use task::{
    DeleteSubscribeRequest, STOCK_CODE_BUSINESS_TYPE, SyncRequest,
    build_delete_subscribe_request, build_sync_request,
};
