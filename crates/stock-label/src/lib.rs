#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zhikongming/stock-client/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Display labels and amount formatting for stock backend data.
//!
//! - [`label`] - Labels for backend codes
//! - [`amount`] - Abbreviated amount formatting
//! - [`chart`] - Static chart title table

/// Abbreviated amount formatting.
pub mod amount;
/// Chart title table.
pub mod chart;
/// Labels for backend codes.
pub mod label;

pub use amount::{AmountMagnitude, INVALID_AMOUNT, format_amount_smart, format_amount_value};
pub use chart::{CHART_PROPERTIES, ChartProperty, chart_property, metric_value};
pub use label::{
    NO_LABEL, bolling_position_label, deposit_rate_title, loan_rate_title, measurement_label,
    period_label, previous_quarter_report_type, price_change_type_label, report_type_label,
    report_type_short_label, report_year_label, strategy_type_label, suggest_operation_label,
};
