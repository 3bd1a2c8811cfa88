//! Currency extraction and formatting for the sheet.
//!
//! Cells hold free text ("2 renewals (398)", "$1,200 check", "call 3
//! clients"), so totals are computed by pulling a best-effort dollar
//! amount out of each cell rather than validating input up front. All
//! helpers here are pure; stored text is never rewritten based on what
//! was parsed out of it.

use once_cell::sync::Lazy;
use regex::Regex;

/// A parenthesized figure like "(447)" or "(1,250.50)". Used as an
/// accounting-style override: when present it wins over everything
/// else in the cell.
static PAREN_AMOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\((\d+(?:,?\d+)*(?:\.\d+)?)\)").unwrap());

/// Any bare run of digits with an optional decimal part.
static BARE_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d+)?").unwrap());

/// Extract a dollar amount from arbitrary cell text.
///
/// Priority order, which resolves inputs like "$500 (475)" in favor of
/// the parenthesized figure:
/// 1. Empty or whitespace-only text is 0.
/// 2. A parenthesized number, commas stripped.
/// 3. The whole text parsed as one number after stripping "$", commas,
///    and whitespace.
/// 4. The last bare number found anywhere in the text.
/// 5. Otherwise 0.
pub fn extract_amount(text: &str) -> f64 {
    if text.trim().is_empty() {
        return 0.0;
    }

    if let Some(caps) = PAREN_AMOUNT.captures(text) {
        if let Ok(amount) = caps[1].replace(',', "").parse::<f64>() {
            if amount.is_finite() {
                return amount;
            }
        }
    }

    let cleaned: String = text
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();
    if let Ok(amount) = cleaned.parse::<f64>() {
        if amount.is_finite() {
            return amount;
        }
    }

    if let Some(last) = BARE_NUMBER.find_iter(text).last() {
        if let Ok(amount) = last.as_str().parse::<f64>() {
            return amount;
        }
    }

    0.0
}

/// Format an amount the way the sheet prints money: dollar sign,
/// thousands separators, rounded to whole dollars.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    let grouped = group_thousands(rounded.abs() as i64);
    if rounded < 0.0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parenthesized_amount_wins() {
        assert_eq!(extract_amount("$500 (475)"), 475.0);
        assert_eq!(extract_amount("(447)"), 447.0);
        assert_eq!(extract_amount("2 renewals (398)"), 398.0);
        assert_eq!(extract_amount("(1,250.50)"), 1250.5);
    }

    #[test]
    fn test_plain_number_parsing() {
        assert_eq!(extract_amount("1,250"), 1250.0);
        assert_eq!(extract_amount("$300"), 300.0);
        assert_eq!(extract_amount(" 42 "), 42.0);
        assert_eq!(extract_amount("19.99"), 19.99);
        assert_eq!(extract_amount("$ 1,000,000"), 1_000_000.0);
    }

    #[test]
    fn test_last_number_fallback() {
        assert_eq!(extract_amount("call 3 clients"), 3.0);
        assert_eq!(extract_amount("2 upgrades at 150"), 150.0);
        assert_eq!(extract_amount("gloves 49.99 each"), 49.99);
    }

    #[test]
    fn test_no_amount_is_zero() {
        assert_eq!(extract_amount(""), 0.0);
        assert_eq!(extract_amount("   "), 0.0);
        assert_eq!(extract_amount("abc"), 0.0);
        assert_eq!(extract_amount("follow up"), 0.0);
    }

    #[test]
    fn test_special_float_words_do_not_parse() {
        // "inf" and "nan" are valid f64 literals to the standard
        // library but never valid dollar amounts.
        assert_eq!(extract_amount("inf"), 0.0);
        assert_eq!(extract_amount("nan"), 0.0);
        assert_eq!(extract_amount("NaN"), 0.0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0");
        assert_eq!(format_currency(42.0), "$42");
        assert_eq!(format_currency(1250.0), "$1,250");
        assert_eq!(format_currency(1_000_000.0), "$1,000,000");
        assert_eq!(format_currency(-50.0), "-$50");
    }

    #[test]
    fn test_format_currency_rounds_to_whole_dollars() {
        assert_eq!(format_currency(19.99), "$20");
        assert_eq!(format_currency(19.49), "$19");
        assert_eq!(format_currency(999.5), "$1,000");
    }
}
