//! Core value types shared by the builders, labels and client.
//!
//! This module defines the backend's closed code sets:
//!
//! - [`ReportType`] - Quarter-of-year code of a financial report
//! - [`IndustryType`] - Industry family a report template belongs to
//! - [`Measurement`] - Unit the report figures were entered in
//! - [`MaWindow`] - Moving-average window used by the MA filter
//! - [`BollingPosition`] / [`BollingSelection`] - Bollinger band tags
//! - [`StrategyType`] / [`PriceChangeType`] - Subscription strategy codes

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::StockError;

/// Quarter-of-year code of a financial report.
///
/// Serialized as its integer code (1..=4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum ReportType {
    /// First-quarter report.
    FirstQuarter = 1,
    /// Interim (half-year) report.
    HalfYear = 2,
    /// Third-quarter report.
    ThirdQuarter = 3,
    /// Annual report.
    Annual = 4,
}

impl ReportType {
    /// All report types in calendar order.
    pub const ALL: [Self; 4] = [
        Self::FirstQuarter,
        Self::HalfYear,
        Self::ThirdQuarter,
        Self::Annual,
    ];

    /// Returns the backend integer code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Looks up a report type by its backend code.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::FirstQuarter),
            2 => Some(Self::HalfYear),
            3 => Some(Self::ThirdQuarter),
            4 => Some(Self::Annual),
            _ => None,
        }
    }

    /// Returns the report type of the preceding quarter.
    ///
    /// The first quarter wraps to the annual report.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::FirstQuarter => Self::Annual,
            Self::HalfYear => Self::FirstQuarter,
            Self::ThirdQuarter => Self::HalfYear,
            Self::Annual => Self::ThirdQuarter,
        }
    }

    /// Returns the `(year, report type)` of the preceding quarter.
    ///
    /// A first-quarter report of `year` is preceded by the annual report of
    /// `year - 1`, saturating at `i32::MIN`.
    #[must_use]
    pub const fn previous_period(self, year: i32) -> (i32, Self) {
        match self {
            Self::FirstQuarter => (year.saturating_sub(1), Self::Annual),
            other => (year, other.previous()),
        }
    }
}

impl TryFrom<i64> for ReportType {
    type Error = StockError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
            .ok_or_else(|| StockError::InvalidParameter(format!("report type {code}")))
    }
}

impl From<ReportType> for i64 {
    fn from(value: ReportType) -> Self {
        value.code()
    }
}

/// Industry family used to pick a report template.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum IndustryType {
    /// Banks.
    Bank = 1,
    /// Every other listed company.
    Common = 2,
}

impl IndustryType {
    /// Returns the backend integer code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Looks up an industry type by its backend code.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Bank),
            2 => Some(Self::Common),
            _ => None,
        }
    }
}

impl TryFrom<i64> for IndustryType {
    type Error = StockError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
            .ok_or_else(|| StockError::InvalidParameter(format!("industry type {code}")))
    }
}

impl From<IndustryType> for i64 {
    fn from(value: IndustryType) -> Self {
        value.code()
    }
}

/// Unit in which report figures were entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measurement {
    /// Millions.
    Million,
    /// Hundreds of millions.
    HundredMillion,
}

impl Measurement {
    /// Returns the backend tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Million => "million",
            Self::HundredMillion => "hundred_million",
        }
    }

    /// Looks up a measurement by its backend tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "million" => Some(Self::Million),
            "hundred_million" => Some(Self::HundredMillion),
            _ => None,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Moving-average window selectable in the MA filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaWindow {
    /// 5-day moving average.
    Ma5,
    /// 10-day moving average.
    Ma10,
    /// 20-day moving average.
    Ma20,
    /// 30-day moving average.
    Ma30,
    /// 60-day moving average.
    Ma60,
}

impl MaWindow {
    /// All windows, shortest first.
    pub const ALL: [Self; 5] = [Self::Ma5, Self::Ma10, Self::Ma20, Self::Ma30, Self::Ma60];

    /// Returns the option name used by the UI ("ma5", "ma10", ...).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ma5 => "ma5",
            Self::Ma10 => "ma10",
            Self::Ma20 => "ma20",
            Self::Ma30 => "ma30",
            Self::Ma60 => "ma60",
        }
    }

    /// Looks up a window by its option name. Unknown names yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|w| w.as_str() == name)
    }
}

impl fmt::Display for MaWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Price position relative to the Bollinger band.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BollingPosition {
    /// At or above the upper band.
    Up,
    /// At or below the lower band.
    Down,
    /// Around the middle band.
    Mid,
}

impl BollingPosition {
    /// Returns the backend tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Mid => "mid",
        }
    }

    /// Looks up a position by tag; the long forms "upper", "lower" and
    /// "middle" are accepted too.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "up" | "upper" => Some(Self::Up),
            "down" | "lower" => Some(Self::Down),
            "mid" | "middle" => Some(Self::Mid),
            _ => None,
        }
    }
}

impl fmt::Display for BollingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bollinger selection forwarded verbatim to the backend.
///
/// The UI may hand over a single tag or a list of tags; whichever it is gets
/// serialized unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BollingSelection {
    /// A single tag, e.g. `"up"`.
    Single(String),
    /// Several tags.
    Many(Vec<String>),
}

impl BollingSelection {
    /// Returns true when nothing was selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(tag) => tag.is_empty(),
            Self::Many(tags) => tags.is_empty(),
        }
    }
}

impl Default for BollingSelection {
    fn default() -> Self {
        Self::Many(Vec::new())
    }
}

impl From<&str> for BollingSelection {
    fn from(tag: &str) -> Self {
        Self::Single(tag.to_string())
    }
}

impl From<String> for BollingSelection {
    fn from(tag: String) -> Self {
        Self::Single(tag)
    }
}

impl From<Vec<String>> for BollingSelection {
    fn from(tags: Vec<String>) -> Self {
        Self::Many(tags)
    }
}

impl From<&[&str]> for BollingSelection {
    fn from(tags: &[&str]) -> Self {
        Self::Many(tags.iter().map(|t| (*t).to_string()).collect())
    }
}

impl From<BollingPosition> for BollingSelection {
    fn from(position: BollingPosition) -> Self {
        Self::Single(position.as_str().to_string())
    }
}

impl From<Vec<BollingPosition>> for BollingSelection {
    fn from(positions: Vec<BollingPosition>) -> Self {
        Self::Many(positions.iter().map(|p| p.as_str().to_string()).collect())
    }
}

/// Kind of condition a subscription strategy watches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum StrategyType {
    /// Volatility of an industry index.
    IndustryRateChange = 1,
    /// Volatility of a single stock.
    StockRateChange = 2,
    /// Price move of a single stock.
    StockPriceChange = 3,
}

impl StrategyType {
    /// Returns the backend integer code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Looks up a strategy type by its backend code.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::IndustryRateChange),
            2 => Some(Self::StockRateChange),
            3 => Some(Self::StockPriceChange),
            _ => None,
        }
    }
}

impl TryFrom<i64> for StrategyType {
    type Error = StockError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
            .ok_or_else(|| StockError::InvalidParameter(format!("strategy type {code}")))
    }
}

impl From<StrategyType> for i64 {
    fn from(value: StrategyType) -> Self {
        value.code()
    }
}

/// Direction of a price-change condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum PriceChangeType {
    /// Triggers when the change is greater than the threshold.
    Greater = 1,
    /// Triggers when the change is less than the threshold.
    Less = 2,
}

impl PriceChangeType {
    /// Returns the backend integer code.
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Looks up a direction by its backend code.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Self::Greater),
            2 => Some(Self::Less),
            _ => None,
        }
    }
}

impl TryFrom<i64> for PriceChangeType {
    type Error = StockError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
            .ok_or_else(|| StockError::InvalidParameter(format!("price change type {code}")))
    }
}

impl From<PriceChangeType> for i64 {
    fn from(value: PriceChangeType) -> Self {
        value.code()
    }
}

/// Subscription strategy as the backend stores it.
///
/// The client forwards any serializable value to the subscription endpoint
/// without checking it; this struct is a convenience for callers that want
/// the known field names.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscribeStrategy {
    /// Condition kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strategy_type: Option<StrategyType>,
    /// Industry code watched by industry strategies.
    #[serde(default)]
    pub industry_code: String,
    /// Look-back window in trading days.
    #[serde(default)]
    pub days: i64,
    /// Price-change threshold.
    #[serde(default)]
    pub price_change: f64,
    /// Direction of the price-change condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_change_type: Option<PriceChangeType>,
    /// Volatility threshold.
    #[serde(default)]
    pub rate_change: f64,
    /// Stock code watched by stock strategies.
    #[serde(default)]
    pub stock_code: String,
}
