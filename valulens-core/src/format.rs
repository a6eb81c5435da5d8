//! The cell formatting contract.
//!
//! Every scalar headed for a table cell passes through here exactly once.
//! Classification is decided from the value's runtime type and, for
//! numbers, from the key name it renders under: a single central list of
//! key substrings selects percentage display. The two observed upstream
//! renderers disagreed on when to format; this module is the one
//! authoritative pass.

use serde_json::Value;

/// Sentinel for anything missing, invalid, or not computable.
pub const NOT_MEANINGFUL: &str = "N/M";

/// Key substrings (matched case-insensitively) that force percentage
/// display for numeric values in the generic key/value contract.
const PERCENT_KEY_HINTS: [&str; 5] = ["margin", "yield", "rate", "weight", "upside"];

/// How a (key, value) pair should display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayKind {
    Percent,
    Number,
    Text,
    NotMeaningful,
}

/// Classify under the full key-substring contract.
pub fn classify(key: &str, value: &Value) -> DisplayKind {
    classify_with(key, value, &PERCENT_KEY_HINTS)
}

/// Classify for the historical table, where only "margin" keys force
/// percentage display and every other numeric renders plain.
pub fn classify_historical(key: &str, value: &Value) -> DisplayKind {
    classify_with(key, value, &["margin"])
}

fn classify_with(key: &str, value: &Value, percent_hints: &[&str]) -> DisplayKind {
    match value {
        Value::String(_) => DisplayKind::Text,
        Value::Number(n) => match n.as_f64() {
            Some(v) if v.is_finite() => {
                let key = key.to_ascii_lowercase();
                if percent_hints.iter().any(|hint| key.contains(hint)) {
                    DisplayKind::Percent
                } else {
                    DisplayKind::Number
                }
            }
            _ => DisplayKind::NotMeaningful,
        },
        _ => DisplayKind::NotMeaningful,
    }
}

/// Format one cell under the generic contract.
pub fn format_cell(key: &str, value: &Value) -> String {
    render(classify(key, value), value)
}

/// Format one historical-table cell (margin-only percent trigger).
pub fn format_historical_cell(key: &str, value: &Value) -> String {
    render(classify_historical(key, value), value)
}

fn render(kind: DisplayKind, value: &Value) -> String {
    match kind {
        DisplayKind::Percent => format_percent(value.as_f64().unwrap_or(f64::NAN)),
        DisplayKind::Number => format_number(value.as_f64().unwrap_or(f64::NAN)),
        DisplayKind::Text => value.as_str().unwrap_or_default().to_string(),
        DisplayKind::NotMeaningful => NOT_MEANINGFUL.to_string(),
    }
}

/// An optional f64 under the generic contract, keyed by display label.
pub fn format_opt(key: &str, value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format_cell(key, &json_number(v)),
        _ => NOT_MEANINGFUL.to_string(),
    }
}

fn json_number(v: f64) -> Value {
    serde_json::Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null)
}

/// Fixed two-decimal percentage: 0.0832 → "8.32%".
pub fn format_percent(v: f64) -> String {
    if !v.is_finite() {
        return NOT_MEANINGFUL.to_string();
    }
    format!("{:.2}%", v * 100.0)
}

/// Grouped number with at most two fractional digits.
///
/// Mirrors locale formatting with a two-digit cap: the fraction is
/// rounded then trailing zeros dropped, and the integer part is
/// comma-grouped. 1234567.8912 → "1,234,567.89", 5.0 → "5".
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return NOT_MEANINGFUL.to_string();
    }
    let rounded = format!("{v:.2}");
    let (mantissa, frac) = match rounded.split_once('.') {
        Some((m, f)) => (m.to_string(), f.trim_end_matches('0').to_string()),
        None => (rounded, String::new()),
    };
    let (sign, digits) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if frac.is_empty() {
        // rounding can leave a bare negative zero
        if grouped == "0" {
            return grouped;
        }
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn percent_hints_trigger_case_insensitively() {
        for key in ["Gross margin (FY)", "FCF YIELD (TTM)", "Tax rate", "Equity weight", "Upside/downside"] {
            assert_eq!(classify(key, &json!(0.5)), DisplayKind::Percent, "key: {key}");
        }
    }

    #[test]
    fn plain_numeric_keys_stay_numbers() {
        assert_eq!(classify("Revenue", &json!(1_000_000)), DisplayKind::Number);
        assert_eq!(classify("P/E (TTM)", &json!(24.3)), DisplayKind::Number);
        assert_eq!(classify("Beta (5Y monthly)", &json!(1.12)), DisplayKind::Number);
    }

    #[test]
    fn strings_pass_through_verbatim() {
        assert_eq!(format_cell("PEG", &json!("N/M")), "N/M");
        assert_eq!(format_cell("Note", &json!("<a href=x>x</a>")), "<a href=x>x</a>");
    }

    #[test]
    fn null_and_non_scalars_render_sentinel() {
        assert_eq!(format_cell("Revenue", &Value::Null), NOT_MEANINGFUL);
        assert_eq!(format_cell("Revenue", &json!([1, 2])), NOT_MEANINGFUL);
        assert_eq!(format_cell("Revenue", &json!({"a": 1})), NOT_MEANINGFUL);
        assert_eq!(format_cell("Revenue", &json!(true)), NOT_MEANINGFUL);
    }

    #[test]
    fn percent_is_fixed_two_decimals() {
        assert_eq!(format_percent(0.08), "8.00%");
        assert_eq!(format_percent(0.10), "10.00%");
        assert_eq!(format_percent(-0.0312), "-3.12%");
        assert_eq!(format_percent(f64::NAN), NOT_MEANINGFUL);
    }

    #[test]
    fn numbers_group_thousands_and_trim_fraction() {
        assert_eq!(format_number(1_234_567.8912), "1,234,567.89");
        assert_eq!(format_number(5.0), "5");
        assert_eq!(format_number(5.5), "5.5");
        assert_eq!(format_number(-12_345.678), "-12,345.68");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(0.25), "0.25");
    }

    #[test]
    fn negative_zero_rounds_to_plain_zero() {
        assert_eq!(format_number(-0.004), "0");
        assert_eq!(format_number(-0.0), "0");
        assert_eq!(format_number(-0.04), "-0.04");
    }

    #[test]
    fn historical_contract_only_checks_margin() {
        assert_eq!(classify_historical("Gross margin", &json!(0.45)), DisplayKind::Percent);
        // rate/yield/weight/upside do not trigger in the historical table
        assert_eq!(classify_historical("Current ratio", &json!(1.8)), DisplayKind::Number);
        assert_eq!(classify_historical("FCF yield", &json!(0.05)), DisplayKind::Number);
        assert_eq!(classify_historical("Tax rate", &json!(0.21)), DisplayKind::Number);
    }

    #[test]
    fn format_opt_falls_back_on_nan() {
        assert_eq!(format_opt("Revenue", Some(f64::NAN)), NOT_MEANINGFUL);
        assert_eq!(format_opt("Revenue", None), NOT_MEANINGFUL);
        assert_eq!(format_opt("Tax rate", Some(0.21)), "21.00%");
    }
}
