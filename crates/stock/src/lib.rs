#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zhikongming/stock-client/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Client for the stock analysis backend.
//!
//! This crate bundles the whole workspace behind one import and provides
//! [`StockClient`], one async method per backend endpoint.
//!
//! # Example
//!
//! ```rust,ignore
//! use stock::{ReportType, StockClient, format_amount_value, report_type_label};
//!
//! #[tokio::main]
//! async fn main() -> stock::Result<()> {
//!     let client = StockClient::from_env()?;
//!     let report = client
//!         .stock_report("SH600036", 2024, ReportType::HalfYear, false)
//!         .await?;
//!     println!(
//!         "{} {}",
//!         report_type_label(ReportType::HalfYear.code()),
//!         format_amount_value(&report.report["revenue"]),
//!     );
//!     Ok(())
//! }
//! ```

// Core types and traits
pub use stock_core::*;

// Payload builders and display helpers
pub use stock_label::*;
pub use stock_request::*;

// Transport
pub use stock_http::HttpTransport;

mod client;
pub use client::StockClient;
