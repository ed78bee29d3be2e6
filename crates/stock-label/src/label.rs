//! Labels for backend codes.
//!
//! Most resolvers are total and fall back to a placeholder. The report
//! type resolvers fall back to an empty string instead, and
//! [`period_label`] reports unknown codes as an error.

use stock_core::{Measurement, PriceChangeType, ReportType, Result, StockError, StrategyType};

/// Placeholder shown when a code has no label.
pub const NO_LABEL: &str = "暂无";

/// Suffix of the loan yield chart title.
pub const LOAN_RATE_SUFFIX: &str = "贷款收益率";

/// Suffix of the deposit cost chart title.
pub const DEPOSIT_RATE_SUFFIX: &str = "存款成本率";

/// Label of a trading suggestion ("buy" / "sell").
#[must_use]
pub fn suggest_operation_label(code: &str) -> &'static str {
    match code {
        "buy" => "买入",
        "sell" => "卖出",
        _ => NO_LABEL,
    }
}

/// Label of a Bollinger band position ("up" / "down" / "mid").
#[must_use]
pub fn bolling_position_label(code: &str) -> &'static str {
    match code {
        "up" => "上轨",
        "down" => "下轨",
        "mid" => "中轨",
        _ => NO_LABEL,
    }
}

/// Full name of a report type, or `""` for an unknown code.
#[must_use]
pub const fn report_type_label(code: i64) -> &'static str {
    match ReportType::from_code(code) {
        Some(ReportType::FirstQuarter) => "一季报",
        Some(ReportType::HalfYear) => "中报",
        Some(ReportType::ThirdQuarter) => "三季报",
        Some(ReportType::Annual) => "年报",
        None => "",
    }
}

/// Short name of a report type ("Q1".."Q4"), or `""` for an unknown code.
#[must_use]
pub const fn report_type_short_label(code: i64) -> &'static str {
    match ReportType::from_code(code) {
        Some(ReportType::FirstQuarter) => "Q1",
        Some(ReportType::HalfYear) => "Q2",
        Some(ReportType::ThirdQuarter) => "Q3",
        Some(ReportType::Annual) => "Q4",
        None => "",
    }
}

/// Quarter phrase of a report type.
///
/// # Errors
///
/// Returns [`StockError::UnknownPeriod`] for codes outside 1..=4.
pub fn period_label(code: i64) -> Result<&'static str> {
    match ReportType::from_code(code) {
        Some(ReportType::FirstQuarter) => Ok("第一季度"),
        Some(ReportType::HalfYear) => Ok("第二季度"),
        Some(ReportType::ThirdQuarter) => Ok("第三季度"),
        Some(ReportType::Annual) => Ok("第四季度"),
        None => Err(StockError::UnknownPeriod(code)),
    }
}

/// Report type code of the preceding quarter; 1 wraps to 4.
#[must_use]
pub const fn previous_quarter_report_type(code: i64) -> i64 {
    if code == 1 { 4 } else { code - 1 }
}

/// Report heading such as "2024年中报".
#[must_use]
pub fn report_year_label(year: i32, report_type: i64) -> String {
    format!("{year}年{}", report_type_label(report_type))
}

/// Chart title of a loan yield series.
#[must_use]
pub fn loan_rate_title(name: &str) -> String {
    format!("{name}{LOAN_RATE_SUFFIX}")
}

/// Chart title of a deposit cost series.
#[must_use]
pub fn deposit_rate_title(name: &str) -> String {
    format!("{name}{DEPOSIT_RATE_SUFFIX}")
}

/// Unit label of a measurement tag, or `""` when unknown.
#[must_use]
pub fn measurement_label(tag: &str) -> &'static str {
    match Measurement::from_tag(tag) {
        Some(Measurement::Million) => "百万",
        Some(Measurement::HundredMillion) => "亿元",
        None => "",
    }
}

/// Label of a subscription strategy kind, or `""` when unknown.
#[must_use]
pub const fn strategy_type_label(code: i64) -> &'static str {
    match StrategyType::from_code(code) {
        Some(StrategyType::IndustryRateChange) => "板块波动率",
        Some(StrategyType::StockRateChange) => "个股波动率",
        Some(StrategyType::StockPriceChange) => "个股价格变动",
        None => "",
    }
}

/// Label of a price-change direction, or `""` when unknown.
#[must_use]
pub const fn price_change_type_label(code: i64) -> &'static str {
    match PriceChangeType::from_code(code) {
        Some(PriceChangeType::Greater) => "大于",
        Some(PriceChangeType::Less) => "小于",
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_operation() {
        assert_eq!(suggest_operation_label("buy"), "买入");
        assert_eq!(suggest_operation_label("sell"), "卖出");
        assert_eq!(suggest_operation_label("hold"), NO_LABEL);
        assert_eq!(suggest_operation_label(""), NO_LABEL);
    }

    #[test]
    fn test_bolling_position() {
        assert_eq!(bolling_position_label("up"), "上轨");
        assert_eq!(bolling_position_label("down"), "下轨");
        assert_eq!(bolling_position_label("mid"), "中轨");
        assert_eq!(bolling_position_label("upper"), NO_LABEL);
    }

    #[test]
    fn test_report_type_labels_fall_back_to_empty() {
        assert_eq!(report_type_label(1), "一季报");
        assert_eq!(report_type_label(4), "年报");
        assert_eq!(report_type_label(5), "");
        assert_eq!(report_type_label(0), "");
        assert_eq!(report_type_short_label(3), "Q3");
        assert_eq!(report_type_short_label(-1), "");
    }

    #[test]
    fn test_period_label_rejects_unknown() {
        assert_eq!(period_label(2).unwrap(), "第二季度");
        assert!(matches!(period_label(0), Err(StockError::UnknownPeriod(0))));
        assert!(matches!(period_label(9), Err(StockError::UnknownPeriod(9))));
    }

    #[test]
    fn test_previous_quarter() {
        assert_eq!(previous_quarter_report_type(1), 4);
        assert_eq!(previous_quarter_report_type(2), 1);
        assert_eq!(previous_quarter_report_type(3), 2);
        assert_eq!(previous_quarter_report_type(4), 3);
    }

    #[test]
    fn test_titles() {
        assert_eq!(loan_rate_title("对公"), "对公贷款收益率");
        assert_eq!(deposit_rate_title("零售"), "零售存款成本率");
        assert_eq!(report_year_label(2024, 2), "2024年中报");
    }

    #[test]
    fn test_supplementary_labels() {
        assert_eq!(measurement_label("hundred_million"), "亿元");
        assert_eq!(measurement_label("billion"), "");
        assert_eq!(strategy_type_label(1), "板块波动率");
        assert_eq!(price_change_type_label(2), "小于");
        assert_eq!(price_change_type_label(3), "");
    }
}
