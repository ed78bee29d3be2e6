//! Financial report write request.

use serde::Serialize;
use serde_json::Value;
use stock_core::LooseNumber;

/// Body of the report write request.
///
/// Every key is always present except `comment`, which is left out
/// entirely when the caller has none to send.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReportUpdateRequest {
    /// Stock code.
    pub code: String,
    /// Report year.
    pub year: i64,
    /// Report type code (1..=4).
    pub report_type: i64,
    /// Industry type code.
    pub industry_type: i64,
    /// Unit tag of the figures.
    pub measurement: String,
    /// Report body; its layout depends on the industry template.
    pub report: Value,
    /// Free-text comment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// Builds the report write request from raw form values.
///
/// Year, report type and industry type are coerced to integers; everything
/// else passes through unchanged.
pub fn build_report_update_request(
    code: impl Into<String>,
    year: impl LooseNumber,
    report_type: impl LooseNumber,
    industry_type: impl LooseNumber,
    measurement: impl Into<String>,
    report: Value,
    comment: Option<String>,
) -> ReportUpdateRequest {
    ReportUpdateRequest {
        code: code.into(),
        year: year.to_i64_lenient(),
        report_type: report_type.to_i64_lenient(),
        industry_type: industry_type.to_i64_lenient(),
        measurement: measurement.into(),
        report,
        comment,
    }
}
