//! Chart titles for the bank indicator charts.
//!
//! The table is closed: a key that is not listed has no chart and lookups
//! return `None`.

use stock_core::BankTrackData;

/// Presentation strings of one indicator chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartProperty {
    /// Metric key, as used by the UI.
    pub key: &'static str,
    /// Chart title.
    pub title: &'static str,
    /// Legend label.
    pub legend: &'static str,
    /// Series name.
    pub series_name: &'static str,
}

const fn prop(
    key: &'static str,
    title: &'static str,
    legend: &'static str,
    series_name: &'static str,
) -> ChartProperty {
    ChartProperty {
        key,
        title,
        legend,
        series_name,
    }
}

/// Every chart, in display order.
pub static CHART_PROPERTIES: [ChartProperty; 14] = [
    prop("shareholderNumber", "股东人数", "股东人数(户)", "股东人数"),
    prop("interestRate", "净息差", "净息差(%)", "净息差"),
    prop("interestRatePeriod", "单季度净息差", "单季度净息差(%)", "单季度净息差"),
    prop("impairmentLoss", "信用减值损失", "信用减值损失", "信用减值损失"),
    prop("totalBalance", "不良贷款余额", "不良余额", "不良余额"),
    prop("totalRate", "不良贷款率", "不良率(%)", "不良率"),
    prop("newBalance", "新生成不良贷款余额", "新生成不良余额", "新生成不良余额"),
    prop("newRate", "新生成不良贷款率", "新生成不良率(%)", "新生成不良率"),
    prop("coverageRate", "拨备覆盖率", "拨备覆盖率(%)", "拨备覆盖率"),
    prop("adequacyRate", "核心一级资本充足率", "资本充足率(%)", "核心一级资本充足率"),
    prop("loanRate", "贷款收益率", "贷款收益率(%)", "贷款收益率"),
    prop("depositRate", "存款成本率", "存款成本率(%)", "存款成本率"),
    prop("roe", "净资产收益率", "ROE(%)", "ROE"),
    prop("roa", "总资产回报率", "ROA(%)", "ROA"),
];

/// Looks up the chart of a metric key.
#[must_use]
pub fn chart_property(key: &str) -> Option<&'static ChartProperty> {
    CHART_PROPERTIES.iter().find(|p| p.key == key)
}

/// Reads the value a chart plots from one report period.
#[must_use]
pub fn metric_value(data: &BankTrackData, key: &str) -> Option<f64> {
    let value = match key {
        "shareholderNumber" => data.shareholder_number as f64,
        "interestRate" => data.interest_rate,
        "interestRatePeriod" => data.interest_rate_period,
        "impairmentLoss" => data.impairment_loss,
        "totalBalance" => data.total_balance,
        "totalRate" => data.total_rate,
        "newBalance" => data.new_balance,
        "newRate" => data.new_rate,
        "coverageRate" => data.coverage_rate,
        "adequacyRate" => data.adequacy_rate,
        "loanRate" => data.loan_rate,
        "depositRate" => data.deposit_rate,
        "roe" => data.roe,
        "roa" => data.roa,
        _ => return None,
    };
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_keys() {
        let roe = chart_property("roe").unwrap();
        assert_eq!(roe.title, "净资产收益率");
        assert_eq!(roe.series_name, "ROE");
        assert_eq!(chart_property("shareholderNumber").unwrap().title, "股东人数");
    }

    #[test]
    fn test_lookup_unknown_key() {
        assert!(chart_property("rorwa").is_none());
        assert!(chart_property("").is_none());
    }

    #[test]
    fn test_keys_are_unique_and_plottable() {
        let data = BankTrackData::default();
        for (idx, p) in CHART_PROPERTIES.iter().enumerate() {
            assert!(
                CHART_PROPERTIES[idx + 1..].iter().all(|o| o.key != p.key),
                "duplicate key {}",
                p.key
            );
            assert!(metric_value(&data, p.key).is_some(), "no value for {}", p.key);
        }
    }

    #[test]
    fn test_metric_value() {
        let data = BankTrackData {
            shareholder_number: 410_000,
            coverage_rate: 251.3,
            ..Default::default()
        };
        assert_eq!(metric_value(&data, "shareholderNumber"), Some(410_000.0));
        assert_eq!(metric_value(&data, "coverageRate"), Some(251.3));
        assert_eq!(metric_value(&data, "unknown"), None);
    }
}
