//! Fixed display formatting: euro amounts with two decimals and thousands
//! grouping, percentages with two decimals. French conventions (space group
//! separator, comma decimal separator), matching the web front-end.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde_json::Value;

/// Fields rendered as euro amounts.
const MONETARY_FIELDS: &[&str] = &[
    "tax_cooperative",
    "tax_standard",
    "taxable_income_cooperative",
    "taxable_income_standard",
    "employee_amount",
    "reserve_amount",
    "tax_savings",
    "annual_payment",
    "total_interest",
    "total_paid",
    "principal_portion",
    "interest_portion",
    "total_payment",
    "remaining_balance",
    "total_financing",
];

/// Fields already expressed in percent (50 = 50%).
const PERCENT_FIELDS: &[&str] = &["vendor_loan_pct", "employee_contribution_pct"];

/// Fields expressed as ratios (0.07 = 7%).
const RATIO_FIELDS: &[&str] = &["effective_rate"];

/// Format a euro amount: two decimals, thousands grouped by spaces.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative();
    let abs = rounded.abs();

    let text = format!("{:.2}", abs);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::new();
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{frac_part} €")
}

/// Format an already-percent value with two decimals.
pub fn format_percent(pct: Decimal) -> String {
    format!("{:.2} %", pct.round_dp(2)).replace('.', ",")
}

/// Render a named field for display, applying currency/percent formatting to
/// the known fields and passing everything else through.
pub fn format_field(key: &str, value: &Value) -> String {
    if let Some(decimal) = as_decimal(value) {
        if MONETARY_FIELDS.contains(&key) {
            return format_currency(decimal);
        }
        if PERCENT_FIELDS.contains(&key) {
            return format_percent(decimal);
        }
        if RATIO_FIELDS.contains(&key) {
            return format_percent(decimal * dec!(100));
        }
    }
    plain(value)
}

/// Decimals serialize as JSON strings (serde-with-str); numbers also appear
/// for plain integer fields.
fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.to_string().parse().ok(),
        _ => None,
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_grouping_and_decimals() {
        assert_eq!(format_currency(dec!(40625)), "40 625,00 €");
        assert_eq!(format_currency(dec!(1234567.891)), "1 234 567,89 €");
        assert_eq!(format_currency(dec!(0)), "0,00 €");
        assert_eq!(format_currency(dec!(999)), "999,00 €");
        assert_eq!(format_currency(dec!(-12500.5)), "-12 500,50 €");
    }

    #[test]
    fn test_percent_two_decimals() {
        assert_eq!(format_percent(dec!(76.92307)), "76,92 %");
        assert_eq!(format_percent(dec!(7.05)), "7,05 %");
        assert_eq!(format_percent(dec!(0)), "0,00 %");
    }

    #[test]
    fn test_field_dispatch() {
        let val = Value::String("17625.00".into());
        assert_eq!(format_field("tax_cooperative", &val), "17 625,00 €");

        let rate = Value::String("0.0705".into());
        assert_eq!(format_field("effective_rate", &rate), "7,05 %");

        let year = serde_json::json!(3);
        assert_eq!(format_field("year", &year), "3");
    }
}
