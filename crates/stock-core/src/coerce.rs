//! Lenient numeric coercion for form input.
//!
//! Form fields arrive as text and may carry trailing junk ("12px"), stray
//! whitespace, or nothing at all. The helpers here read the longest numeric
//! prefix and fall back to zero when none exists, so a malformed field turns
//! into "no constraint" instead of an error.

/// Parses the longest floating-point prefix of `input`, or `0.0`.
///
/// Leading whitespace is skipped. An optional sign, integer digits, a
/// fractional part and an exponent are accepted in that order.
///
/// # Example
///
/// ```
/// use stock_core::coerce::parse_float_lenient;
///
/// assert_eq!(parse_float_lenient(" 1.5abc"), 1.5);
/// assert_eq!(parse_float_lenient("abc"), 0.0);
/// ```
#[must_use]
pub fn parse_float_lenient(input: &str) -> f64 {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_start = end;
    while end < len && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < len && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < len && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return 0.0;
    }

    // Exponent only counts when at least one digit follows it.
    if end < len && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if exp_end < len && matches!(bytes[exp_end], b'+' | b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < len && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(0.0)
}

/// Parses the longest integer prefix of `input`, or `0`.
///
/// A fractional part is truncated ("3.7" reads as 3). Values beyond the
/// `i64` range saturate.
///
/// # Example
///
/// ```
/// use stock_core::coerce::parse_int_lenient;
///
/// assert_eq!(parse_int_lenient("20 days"), 20);
/// assert_eq!(parse_int_lenient(""), 0);
/// ```
#[must_use]
pub fn parse_int_lenient(input: &str) -> i64 {
    let s = input.trim_start();
    let mut chars = s.bytes().peekable();

    let negative = match chars.peek() {
        Some(b'-') => {
            chars.next();
            true
        }
        Some(b'+') => {
            chars.next();
            false
        }
        _ => false,
    };

    let mut value: i64 = 0;
    for b in chars {
        if !b.is_ascii_digit() {
            break;
        }
        let digit = i64::from(b - b'0');
        value = value
            .saturating_mul(10)
            .saturating_add(if negative { -digit } else { digit });
    }
    value
}

/// A value that can be coerced leniently into a number.
///
/// Implemented for text (parsed with [`parse_float_lenient`] /
/// [`parse_int_lenient`]) and for the primitive numeric types, so builders
/// accept either raw form strings or already-typed numbers.
pub trait LooseNumber {
    /// Coerces to a float, `0.0` when nothing numeric is present.
    fn to_f64_lenient(&self) -> f64;

    /// Coerces to an integer, truncating any fraction.
    fn to_i64_lenient(&self) -> i64;
}

impl LooseNumber for str {
    fn to_f64_lenient(&self) -> f64 {
        parse_float_lenient(self)
    }

    fn to_i64_lenient(&self) -> i64 {
        parse_int_lenient(self)
    }
}

impl LooseNumber for String {
    fn to_f64_lenient(&self) -> f64 {
        parse_float_lenient(self)
    }

    fn to_i64_lenient(&self) -> i64 {
        parse_int_lenient(self)
    }
}

impl<T: LooseNumber + ?Sized> LooseNumber for &T {
    fn to_f64_lenient(&self) -> f64 {
        (**self).to_f64_lenient()
    }

    fn to_i64_lenient(&self) -> i64 {
        (**self).to_i64_lenient()
    }
}

impl LooseNumber for f64 {
    fn to_f64_lenient(&self) -> f64 {
        *self
    }

    // `as` saturates and maps NaN to 0.
    fn to_i64_lenient(&self) -> i64 {
        self.trunc() as i64
    }
}

macro_rules! impl_loose_int {
    ($($ty:ty),*) => {
        $(
            impl LooseNumber for $ty {
                fn to_f64_lenient(&self) -> f64 {
                    *self as f64
                }

                fn to_i64_lenient(&self) -> i64 {
                    i64::try_from(*self).unwrap_or(i64::MAX)
                }
            }
        )*
    };
}

impl_loose_int!(i32, i64, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_lenient("0.5"), 0.5);
        assert_eq!(parse_float_lenient("  -1.25 "), -1.25);
        assert_eq!(parse_float_lenient("3.5%"), 3.5);
        assert_eq!(parse_float_lenient(".5"), 0.5);
        assert_eq!(parse_float_lenient("5."), 5.0);
        assert_eq!(parse_float_lenient("1e3x"), 1000.0);
        assert_eq!(parse_float_lenient("2e"), 2.0);
        assert_eq!(parse_float_lenient("+7"), 7.0);
    }

    #[test]
    fn test_parse_float_defaults_to_zero() {
        assert_eq!(parse_float_lenient(""), 0.0);
        assert_eq!(parse_float_lenient("abc"), 0.0);
        assert_eq!(parse_float_lenient("."), 0.0);
        assert_eq!(parse_float_lenient("-"), 0.0);
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_lenient("12"), 12);
        assert_eq!(parse_int_lenient("3.7"), 3);
        assert_eq!(parse_int_lenient(" -42abc"), -42);
        assert_eq!(parse_int_lenient("x1"), 0);
        assert_eq!(parse_int_lenient("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn test_loose_number_impls() {
        assert_eq!("2.5".to_f64_lenient(), 2.5);
        assert_eq!(String::from("8").to_i64_lenient(), 8);
        assert_eq!(3.9_f64.to_i64_lenient(), 3);
        assert_eq!(f64::NAN.to_i64_lenient(), 0);
        assert_eq!(5_i32.to_f64_lenient(), 5.0);
        assert_eq!(2024_u32.to_i64_lenient(), 2024);
    }
}
