#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/zhikongming/stock-client/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and traits for the stock backend client.
//!
//! This crate provides the pieces every other crate in the workspace shares:
//!
//! - [`StockError`](error::StockError) - The single error type
//! - [`LooseNumber`](coerce::LooseNumber) - Lenient numeric coercion for form input
//! - [`ClientConfig`](config::ClientConfig) - Base address and endpoint table
//! - [`Transport`](transport::Transport) - The seam to the HTTP stack
//! - Backend code sets ([`ReportType`](types::ReportType), [`MaWindow`](types::MaWindow), ...)
//! - Decoded response models

/// Lenient numeric coercion.
pub mod coerce;
/// Client configuration.
pub mod config;
/// Error types for client operations.
pub mod error;
/// Decoded backend responses.
pub mod response;
/// Transport trait for issuing requests.
pub mod transport;
/// Backend code sets and value types.
pub mod types;

// Re-export commonly used items at crate root
pub use coerce::{LooseNumber, parse_float_lenient, parse_int_lenient};
pub use config::{ClientConfig, Endpoints};
pub use error::{Result, StockError};
pub use response::{
    BankTrackData, BankTrackResponse, CodeBasic, FilterStockItem, IndustryBasicData,
    IndustryCodeTrend, IndustryPriceTrend, IndustryRelation, IndustryRelationResponse,
    IndustryTrackResponse, IndustryTrendResponse, MessageResponse, PriceTrend, ReportTime,
    StockReportResponse, SubscribeListResponse, SubscribeStrategyRecord,
};
pub use transport::{Method, QueryParams, Transport};
pub use types::{
    BollingPosition, BollingSelection, IndustryType, MaWindow, Measurement, PriceChangeType,
    ReportType, StrategyType, SubscribeStrategy,
};
