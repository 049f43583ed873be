use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;

/// Format a decimal with thousand separators and 2 decimal places, no currency sign.
/// e.g. `1234567.891` → `"1,234,567.89"`
pub(crate) fn format_number(val: Decimal) -> String {
    let abs = val.abs().round_dp(2);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val.round_dp(2) < Decimal::ZERO {
        format!("-{with_commas}.{dec_part}")
    } else {
        format!("{with_commas}.{dec_part}")
    }
}

/// Same as [`format_number`] with a leading dollar sign: `"$1,234.56"`, `"-$42.50"`.
pub(crate) fn format_amount(val: Decimal) -> String {
    let number = format_number(val);
    match number.strip_prefix('-') {
        Some(rest) => format!("-${rest}"),
        None => format!("${number}"),
    }
}

/// Parse a user- or file-supplied number, tolerating `$` and thousands separators.
pub(crate) fn parse_decimal(s: &str) -> Result<Decimal, ValidationError> {
    let cleaned = s.replace(['$', ','], "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Err(ValidationError::NotANumber(s.trim().to_string()));
    }
    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .map_err(|_| ValidationError::NotANumber(s.trim().to_string()))
}

#[cfg(test)]
#[path = "util_tests.rs"]
mod tests;
