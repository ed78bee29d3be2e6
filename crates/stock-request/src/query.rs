//! Query strings for the read endpoints.
//!
//! Each builder returns ordered key/value pairs ready for the transport.
//! Keys are the backend's snake_case names.

use stock_core::{LooseNumber, QueryParams};

/// Query for reading one financial report.
pub fn report_query(
    code: &str,
    year: impl LooseNumber,
    report_type: impl LooseNumber,
    disable_msg: bool,
) -> QueryParams {
    vec![
        ("code", code.to_string()),
        ("year", year.to_i64_lenient().to_string()),
        ("report_type", report_type.to_i64_lenient().to_string()),
        ("disable_msg", disable_msg.to_string()),
    ]
}

/// Query for a bank's report time series.
pub fn bank_trace_query(code: &str) -> QueryParams {
    vec![("code", code.to_string())]
}

/// Query for the report time series of an industry.
pub fn industry_trace_query(industry_type: impl LooseNumber) -> QueryParams {
    vec![("industry_type", industry_type.to_i64_lenient().to_string())]
}

/// Query for a stock's basic information.
pub fn stock_info_query(code: &str) -> QueryParams {
    vec![("code", code.to_string())]
}

/// Query for the members of an industry.
pub fn industry_basic_query(industry_code: &str) -> QueryParams {
    vec![("industry_code", industry_code.to_string())]
}

/// Query for industry price trends.
///
/// An empty `industry_code` means every industry and an empty `end_date`
/// means the latest trading day; both keys are then left out.
/// `sync_price` is only sent when set.
pub fn industry_trend_query(
    days: impl LooseNumber,
    industry_code: &str,
    end_date: &str,
    sync_price: bool,
) -> QueryParams {
    let mut query = vec![("days", days.to_i64_lenient().to_string())];
    if !industry_code.is_empty() {
        query.push(("industry_code", industry_code.to_string()));
    }
    if !end_date.is_empty() {
        query.push(("end_date", end_date.to_string()));
    }
    if sync_price {
        query.push(("sync_price", "true".to_string()));
    }
    query
}

/// Query for industry correlations.
///
/// Only the empty `relation_type` selects the split-industry view
/// (`is_split_industry=true`); any other value leaves the flag out.
pub fn industry_relation_query(
    days: impl LooseNumber,
    industry_code: &str,
    relation_type: &str,
) -> QueryParams {
    let mut query = vec![
        ("days", days.to_i64_lenient().to_string()),
        ("industry_code", industry_code.to_string()),
    ];
    if relation_type.is_empty() {
        query.push(("is_split_industry", "true".to_string()));
    }
    query
}

/// Query for listing subscription strategies, optionally a single one.
pub fn subscribe_list_query(id: Option<i64>) -> QueryParams {
    id.map(|id| vec![("id", id.to_string())]).unwrap_or_default()
}
