//! Polars AnyValue utility functions.
//!
//! This module provides helper functions for working with Polars `AnyValue` types,
//! including string conversions and numeric parsing of free-text survey amounts.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null`, properly formats numeric types without
/// unnecessary trailing zeros.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use survey_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int32(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("hello")), "hello");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int8(v) => v.to_string(),
        AnyValue::Int16(v) => v.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt8(v) => v.to_string(),
        AnyValue::UInt16(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// # Examples
///
/// ```
/// use survey_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(50000.0), "50000");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() || trimmed == "-" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Converts an `AnyValue` to `f64`, returning `None` for non-numeric or null values.
///
/// String values go through [`parse_amount`], so `"1,250"` converts to `1250.0`.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int8(v) => Some(f64::from(v)),
        AnyValue::Int16(v) => Some(f64::from(v)),
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt8(v) => Some(f64::from(v)),
        AnyValue::UInt16(v) => Some(f64::from(v)),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)).filter(|v| v.is_finite()),
        AnyValue::Float64(v) => Some(v).filter(|v| v.is_finite()),
        AnyValue::String(s) => parse_amount(s),
        AnyValue::StringOwned(s) => parse_amount(&s),
        _ => None,
    }
}

/// Parses a string as `f64`, returning `None` for invalid, empty or non-finite strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parses a free-text monetary amount.
///
/// Thousands separators (`,`) are removed before parsing. `NaN` and
/// infinities are rejected like any other non-numeric text.
///
/// # Examples
///
/// ```
/// use survey_common::parse_amount;
///
/// assert_eq!(parse_amount("3,000,000"), Some(3_000_000.0));
/// assert_eq!(parse_amount(" 52000 "), Some(52_000.0));
/// assert_eq!(parse_amount("about 50k"), None);
/// assert_eq!(parse_amount("nan"), None);
/// ```
pub fn parse_amount(value: &str) -> Option<f64> {
    if !value.contains(',') {
        return parse_f64(value);
    }
    let stripped: String = value.chars().filter(|ch| *ch != ',').collect();
    parse_f64(&stripped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_to_string_null() {
        assert_eq!(any_to_string(AnyValue::Null), "");
    }

    #[test]
    fn test_any_to_string_floats() {
        assert_eq!(any_to_string(AnyValue::Float64(1.5)), "1.5");
        assert_eq!(any_to_string(AnyValue::Float64(1.0)), "1");
        assert_eq!(any_to_string(AnyValue::Float64(120000.0)), "120000");
        assert_eq!(any_to_string(AnyValue::Float64(-5.0)), "-5");
    }

    #[test]
    fn test_any_to_f64() {
        assert_eq!(any_to_f64(AnyValue::Null), None);
        assert_eq!(any_to_f64(AnyValue::Int64(42)), Some(42.0));
        assert_eq!(any_to_f64(AnyValue::String("2,500.5")), Some(2500.5));
        assert_eq!(any_to_f64(AnyValue::String("n/a")), None);
        assert_eq!(any_to_f64(AnyValue::Float64(f64::NAN)), None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("  "), None);
        assert_eq!(parse_amount("1,000"), Some(1000.0));
        assert_eq!(parse_amount("-5"), Some(-5.0));
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("$50,000"), None);
    }
}
