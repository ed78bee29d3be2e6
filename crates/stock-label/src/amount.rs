//! Abbreviated amount formatting.
//!
//! Amounts are scaled to the largest Chinese unit tier they reach and
//! printed with precision that shrinks as the scaled value grows:
//!
//! | scaled value | decimals |
//! |--------------|----------|
//! | >= 100       | 0        |
//! | >= 10        | 1        |
//! | otherwise    | 2        |
//!
//! Trailing zeros are stripped after rounding.

use serde_json::Value;
use std::fmt;

/// Text returned for input that is not a finite number.
pub const INVALID_AMOUNT: &str = "Invalid";

/// Unit tiers as `(lower bound, divisor, suffix)`, largest first.
///
/// The 万 tier starts at one thousand so that amounts such as 5000 read as
/// "0.5万" rather than as a bare figure.
const UNIT_TIERS: [(f64, f64, &str); 3] = [
    (1e12, 1e12, "万亿"),
    (1e8, 1e8, "亿"),
    (1e3, 1e4, "万"),
];

/// An amount split into sign, numeral and unit suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AmountMagnitude {
    /// Whether the original amount was negative.
    pub negative: bool,
    /// Scaled absolute value, rounded, without trailing zeros.
    pub numeral: String,
    /// Unit suffix, empty below the smallest tier.
    pub unit: &'static str,
}

impl AmountMagnitude {
    /// Scales `amount`; `None` when it is NaN or infinite.
    ///
    /// A value that rounds up to the next tier is shown in that tier
    /// (`99_999_999.0` reads "1亿"), and an amount that rounds to zero
    /// carries no sign.
    #[must_use]
    pub fn from_amount(amount: f64) -> Option<Self> {
        if !amount.is_finite() {
            return None;
        }

        let abs = amount.abs();
        let (mut numeral, divisor, mut unit) = render(abs);
        let rounded = numeral.parse::<f64>().map_or(abs, |n| n * divisor);
        if tier(rounded).2 != unit {
            (numeral, _, unit) = render(rounded);
        }

        Some(Self {
            negative: amount < 0.0 && numeral != "0",
            numeral,
            unit,
        })
    }
}

/// Returns `(scaled, divisor, unit)` for an absolute amount.
fn tier(abs: f64) -> (f64, f64, &'static str) {
    UNIT_TIERS
        .iter()
        .find(|(bound, _, _)| abs >= *bound)
        .map_or((abs, 1.0, ""), |(_, divisor, unit)| {
            (abs / divisor, *divisor, *unit)
        })
}

fn render(abs: f64) -> (String, f64, &'static str) {
    let (scaled, divisor, unit) = tier(abs);
    let decimals = if scaled >= 100.0 {
        0
    } else if scaled >= 10.0 {
        1
    } else {
        2
    };
    (
        strip_trailing_zeros(format!("{scaled:.decimals$}")),
        divisor,
        unit,
    )
}

impl fmt::Display for AmountMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}{}", self.numeral, self.unit)
    }
}

fn strip_trailing_zeros(mut numeral: String) -> String {
    if numeral.contains('.') {
        let kept = numeral.trim_end_matches('0').trim_end_matches('.').len();
        numeral.truncate(kept);
    }
    numeral
}

/// Formats an amount with a unit suffix, e.g. `123456789.0` → `"1.23亿"`.
///
/// NaN and infinities yield [`INVALID_AMOUNT`].
///
/// # Example
///
/// ```
/// use stock_label::format_amount_smart;
///
/// assert_eq!(format_amount_smart(123_456_789.0), "1.23亿");
/// assert_eq!(format_amount_smart(-5000.0), "-0.5万");
/// assert_eq!(format_amount_smart(f64::NAN), "Invalid");
/// ```
#[must_use]
pub fn format_amount_smart(amount: f64) -> String {
    AmountMagnitude::from_amount(amount)
        .map_or_else(|| INVALID_AMOUNT.to_string(), |m| m.to_string())
}

/// Formats a raw JSON field; anything but a number yields [`INVALID_AMOUNT`].
#[must_use]
pub fn format_amount_value(value: &Value) -> String {
    value
        .as_f64()
        .map_or_else(|| INVALID_AMOUNT.to_string(), format_amount_smart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_hundred_million_tier() {
        assert_eq!(format_amount_smart(123_456_789.0), "1.23亿");
        assert_eq!(format_amount_smart(1_200_000_000.0), "12亿");
        assert_eq!(format_amount_smart(35_670_000_000.0), "357亿");
    }

    #[test]
    fn test_trillion_tier() {
        assert_eq!(format_amount_smart(2.5e12), "2.5万亿");
        assert_eq!(format_amount_smart(-1.0e13), "-10万亿");
    }

    #[test]
    fn test_ten_thousand_tier() {
        assert_eq!(format_amount_smart(-5000.0), "-0.5万");
        assert_eq!(format_amount_smart(56_789.0), "5.68万");
        assert_eq!(format_amount_smart(123_400.0), "12.3万");
        assert_eq!(format_amount_smart(9_876_543.0), "988万");
    }

    #[test]
    fn test_raw_tier() {
        assert_eq!(format_amount_smart(0.0), "0");
        assert_eq!(format_amount_smart(12.5), "12.5");
        assert_eq!(format_amount_smart(999.0), "999");
        assert_eq!(format_amount_smart(3.14159), "3.14");
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(format_amount_smart(f64::NAN), INVALID_AMOUNT);
        assert_eq!(format_amount_smart(f64::INFINITY), INVALID_AMOUNT);
        assert_eq!(format_amount_value(&json!("123")), INVALID_AMOUNT);
        assert_eq!(format_amount_value(&Value::Null), INVALID_AMOUNT);
        assert_eq!(format_amount_value(&json!(20000)), "2万");
    }

    #[test]
    fn test_rounding_carries_into_next_tier() {
        assert_eq!(format_amount_smart(99_999_999.0), "1亿");
        assert_eq!(format_amount_smart(-999_999_999_999.9), "-1万亿");
        assert_eq!(format_amount_smart(999.999), "0.1万");
    }

    #[test]
    fn test_tiny_negative_has_no_sign() {
        assert_eq!(format_amount_smart(-0.001), "0");
        assert_eq!(format_amount_smart(-0.0), "0");
        assert!(!AmountMagnitude::from_amount(-0.001).unwrap().negative);
    }

    #[test]
    fn test_magnitude_parts() {
        let m = AmountMagnitude::from_amount(-250_000_000.0).unwrap();
        assert!(m.negative);
        assert_eq!(m.numeral, "2.5");
        assert_eq!(m.unit, "亿");
    }
}
