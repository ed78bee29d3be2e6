//! Decoded backend responses.
//!
//! Every field defaults when absent so an older or newer backend that adds
//! or drops a field still decodes. List and map fields also accept `null`,
//! which the backend sends for collections it left unfilled. Deeply nested
//! report bodies stay as [`serde_json::Value`]; their layout depends on the
//! industry template.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Decodes `null` as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Plain acknowledgement, `{"message": "success"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    /// Backend message.
    pub message: String,
}

/// One stock that passed the screening filters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterStockItem {
    /// Stock code.
    pub code: String,
    /// Company name.
    pub company_name: String,
    /// Per-strategy analysis, keyed by strategy name ("ma", "macd", ...).
    #[serde(deserialize_with = "null_as_default")]
    pub result: HashMap<String, Value>,
    /// Trading day the analysis is based on.
    pub last_date: String,
}

/// Financial report read back from the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockReportResponse {
    /// The requested report.
    pub report: Value,
    /// Same period of the previous year.
    pub pre_yoy_report: Value,
    /// Preceding quarter.
    pub pre_mom_report: Value,
    /// Generated commentary, absent when `disable_msg` was set.
    pub message: Value,
    /// Unit tag of the figures.
    pub measurement: String,
    /// Free-text comment stored with the report.
    pub comment: String,
}

/// A (year, report type) pair on a report time axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportTime {
    /// Report year.
    pub year: i32,
    /// Report type code (1..=4).
    pub report_type: i64,
}

/// Key bank indicators of one report period.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankTrackData {
    /// Number of shareholders.
    pub shareholder_number: i64,
    /// Net interest margin, cumulative.
    pub interest_rate: f64,
    /// Net interest margin, single quarter.
    pub interest_rate_period: f64,
    /// Credit impairment loss.
    pub impairment_loss: f64,
    /// Non-performing loan balance.
    pub total_balance: f64,
    /// Non-performing loan ratio.
    pub total_rate: f64,
    /// Newly formed non-performing balance.
    pub new_balance: f64,
    /// Newly formed non-performing ratio.
    pub new_rate: f64,
    /// Provision coverage ratio.
    pub coverage_rate: f64,
    /// Core tier-1 capital adequacy ratio.
    pub adequacy_rate: f64,
    /// Loan yield, cumulative.
    pub loan_rate: f64,
    /// Loan yield, single quarter.
    pub loan_rate_period: f64,
    /// Deposit cost, cumulative.
    pub deposit_rate: f64,
    /// Deposit cost, single quarter.
    pub deposit_rate_period: f64,
    /// Return on equity.
    pub roe: f64,
    /// Return on assets.
    pub roa: f64,
    /// Return on risk-weighted assets.
    pub rorwa: f64,
}

/// Report time series of one bank.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankTrackResponse {
    /// Time axis.
    #[serde(deserialize_with = "null_as_default")]
    pub date_list: Vec<ReportTime>,
    /// Indicators, aligned with `date_list`.
    #[serde(deserialize_with = "null_as_default")]
    pub report_list: Vec<BankTrackData>,
    /// Unit tag of the figures.
    pub measurement: String,
}

/// Report time series of every company in an industry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryTrackResponse {
    /// Time axis shared by all companies.
    #[serde(deserialize_with = "null_as_default")]
    pub date_list: Vec<ReportTime>,
    /// Indicators keyed by company name.
    #[serde(deserialize_with = "null_as_default")]
    pub report_map: HashMap<String, Vec<BankTrackData>>,
    /// Unit tag of the figures.
    pub measurement: String,
}

/// Code and name of a listed company.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeBasic {
    /// Stock code.
    pub code: String,
    /// Company name.
    pub name: String,
}

/// Membership of one industry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryBasicData {
    /// Industry code.
    pub industry_code: String,
    /// Industry name.
    pub industry_name: String,
    /// Companies in the industry.
    #[serde(deserialize_with = "null_as_default")]
    pub company_code_list: Vec<CodeBasic>,
}

/// One point of a price trend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceTrend {
    /// Trading day, `YYYY-MM-DD`.
    pub date: String,
    /// Change against the start of the window.
    pub diff: f64,
    /// Close price (or index level).
    pub price: f64,
}

/// Price trend of an industry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryPriceTrend {
    /// Industry code.
    pub industry_code: String,
    /// Industry name.
    pub industry_name: String,
    /// Trend points, oldest first.
    #[serde(deserialize_with = "null_as_default")]
    pub price_trend_list: Vec<PriceTrend>,
}

/// Price trend of a stock inside an industry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryCodeTrend {
    /// Stock code.
    pub stock_code: String,
    /// Stock name.
    pub stock_name: String,
    /// Trend points, oldest first.
    #[serde(deserialize_with = "null_as_default")]
    pub price_trend_list: Vec<PriceTrend>,
}

/// Industry trend data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryTrendResponse {
    /// Trends per industry.
    #[serde(deserialize_with = "null_as_default")]
    pub industry_price_trend: Vec<IndustryPriceTrend>,
    /// Trends per stock, filled when a single industry was requested.
    #[serde(deserialize_with = "null_as_default")]
    pub industry_code_trend: Vec<IndustryCodeTrend>,
}

/// Correlation of an industry against a reference series.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryRelation {
    /// Industry code.
    pub industry_code: String,
    /// Industry name.
    pub industry_name: String,
    /// Pearson coefficient.
    pub correlation: f64,
    /// Human-readable strength of the correlation.
    pub correlation_string: String,
}

/// Industry correlation data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndustryRelationResponse {
    /// First trading day of the window.
    pub start_date: String,
    /// Last trading day of the window.
    pub end_date: String,
    /// Correlations against the market index.
    #[serde(deserialize_with = "null_as_default")]
    pub industry_relation_list: Vec<IndustryRelation>,
    /// Groups of mutually correlated industries.
    #[serde(deserialize_with = "null_as_default")]
    pub split_industry_relation_list: Vec<Vec<IndustryRelation>>,
}

/// A stored subscription strategy and its latest evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribeStrategyRecord {
    /// Record id, used for deletion.
    pub id: i64,
    /// Creation time.
    pub date_time: String,
    /// Strategy kind, already rendered by the backend.
    pub strategy_type: String,
    /// Watched code.
    pub code: String,
    /// Strategy summary.
    pub strategy: String,
    /// Whether the condition held on `last_date`.
    pub result: bool,
    /// Evaluation detail.
    pub strategy_detail: String,
    /// Trading day of the latest evaluation.
    pub last_date: String,
}

/// Subscription strategy listing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscribeListResponse {
    /// Backend message.
    pub message: String,
    /// Stored strategies.
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<SubscribeStrategyRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bank_track_decodes_with_missing_fields() {
        let resp: BankTrackResponse = serde_json::from_value(serde_json::json!({
            "date_list": [{"year": 2024, "report_type": 2}],
            "report_list": [{"roe": 11.2, "shareholder_number": 312000}],
            "measurement": "hundred_million"
        }))
        .unwrap();
        assert_eq!(resp.date_list[0], ReportTime { year: 2024, report_type: 2 });
        assert_eq!(resp.report_list[0].roe, 11.2);
        assert_eq!(resp.report_list[0].coverage_rate, 0.0);
    }

    #[test]
    fn test_subscribe_list_decodes() {
        let resp: SubscribeListResponse = serde_json::from_str(
            r#"{"message":"success","data":[{"id":7,"code":"BK0475","result":true}]}"#,
        )
        .unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].id, 7);
        assert!(resp.data[0].result);
    }

    #[test]
    fn test_industry_trend_all_industries_null_code_trend() {
        let resp: IndustryTrendResponse = serde_json::from_str(
            r#"{"industry_price_trend":[{"industry_code":"BK0475","industry_name":"银行","price_trend_list":[{"date":"2024-06-28","diff":1.5,"price":3120.4}]}],"industry_code_trend":null}"#,
        )
        .unwrap();
        assert_eq!(resp.industry_price_trend.len(), 1);
        assert_eq!(resp.industry_price_trend[0].price_trend_list[0].diff, 1.5);
        assert!(resp.industry_code_trend.is_empty());
    }

    #[test]
    fn test_industry_trend_single_industry_null_price_trend() {
        let resp: IndustryTrendResponse = serde_json::from_str(
            r#"{"industry_price_trend":null,"industry_code_trend":[{"stock_code":"SH600036","stock_name":"招商银行","price_trend_list":null}]}"#,
        )
        .unwrap();
        assert!(resp.industry_price_trend.is_empty());
        assert_eq!(resp.industry_code_trend[0].stock_code, "SH600036");
        assert!(resp.industry_code_trend[0].price_trend_list.is_empty());
    }

    #[test]
    fn test_null_collections_decode_empty() {
        let relation: IndustryRelationResponse = serde_json::from_str(
            r#"{"start_date":"2024-01-02","industry_relation_list":null,"split_industry_relation_list":null}"#,
        )
        .unwrap();
        assert!(relation.industry_relation_list.is_empty());
        assert!(relation.split_industry_relation_list.is_empty());

        let track: IndustryTrackResponse =
            serde_json::from_str(r#"{"date_list":null,"report_map":null}"#).unwrap();
        assert!(track.date_list.is_empty());
        assert!(track.report_map.is_empty());

        let list: SubscribeListResponse =
            serde_json::from_str(r#"{"message":"success","data":null}"#).unwrap();
        assert!(list.data.is_empty());

        let basic: IndustryBasicData =
            serde_json::from_str(r#"{"industry_code":"BK0475","company_code_list":null}"#)
                .unwrap();
        assert!(basic.company_code_list.is_empty());
    }
}
