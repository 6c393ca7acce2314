//! Locale-tolerant amount and date normalization.
//!
//! Both functions return `None` instead of failing: an unreadable token only
//! blanks that field of its row, it never aborts a statement.

use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;

fn amount_noise_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)₹|\bINR|\bRS\.?|\b(?:DR|CR)\b|,|\s").expect("static regex")
    })
}

fn amount_shape_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)$").expect("static regex"))
}

fn numeric_date_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?P<a>\d{1,4})[-/.](?P<b>\d{1,2})[-/.](?P<c>\d{1,4})$").expect("static regex")
    })
}

/// Textual month layouts seen on statements ("12 Sep 2025", "12-Sep-25").
/// Two-digit-year layouts come first: `%Y` would also accept "25" as year 25.
const NAMED_MONTH_FORMATS: &[&str] = &[
    "%d %b %y", "%d-%b-%y", "%d %b %Y", "%d-%b-%Y", "%d/%b/%Y", "%d %B %Y", "%b %d %Y", "%b %d, %Y",
];

/// Parse a statement amount such as `"1,234.56"`, `"₹500 DR"` or `"INR 42"`.
///
/// Thousands separators, currency symbols/codes and DR/CR tokens are removed
/// before parsing. The sign is whatever the raw text carried; debit/credit
/// direction is the caller's concern.
pub fn normalize_amount(raw: &str) -> Option<f64> {
    let cleaned = amount_noise_re().replace_all(raw.trim(), "");
    if !amount_shape_re().is_match(&cleaned) {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a statement date, resolving numeric ambiguity day-first:
/// `"12/09/2025"` is 12 September 2025.
///
/// Accepts `-`, `/` or `.` separators, two- or four-digit years, ISO
/// `YYYY-MM-DD`, and English month names. When the day-first reading is not
/// a valid calendar date the month-first reading is tried instead.
pub fn normalize_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Some(caps) = numeric_date_re().captures(s) {
        let (a, b, c) = (&caps["a"], &caps["b"], &caps["c"]);
        let num = |x: &str| x.parse::<u32>().ok();

        if a.len() == 4 {
            let year = a.parse().ok()?;
            return NaiveDate::from_ymd_opt(year, num(b)?, num(c)?);
        }
        if a.len() > 2 {
            return None;
        }

        let year = expand_year(c)?;
        let (first, second) = (num(a)?, num(b)?);
        return NaiveDate::from_ymd_opt(year, second, first)
            .or_else(|| NaiveDate::from_ymd_opt(year, first, second));
    }

    NAMED_MONTH_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Two-digit years pivot at 69: `00..=68` → 20xx, `69..=99` → 19xx.
fn expand_year(raw: &str) -> Option<i32> {
    let y: i32 = raw.parse().ok()?;
    match raw.len() {
        2 if y < 69 => Some(2000 + y),
        2 => Some(1900 + y),
        4 => Some(y),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_amount_thousands_separator() {
        assert_eq!(normalize_amount("1,234.56"), Some(1234.56));
        assert_eq!(normalize_amount("12,34,567.00"), Some(1234567.0));
    }

    #[test]
    fn test_amount_strips_currency_and_markers() {
        assert_eq!(normalize_amount("₹500 DR"), Some(500.0));
        assert_eq!(normalize_amount("INR 42.10"), Some(42.10));
        assert_eq!(normalize_amount("Rs. 99"), Some(99.0));
        assert_eq!(normalize_amount("345.00 cr"), Some(345.0));
    }

    #[test]
    fn test_amount_keeps_raw_sign() {
        assert_eq!(normalize_amount("-15.00"), Some(-15.0));
        assert_eq!(normalize_amount("- 15.00"), Some(-15.0));
    }

    #[test]
    fn test_amount_rejects_garbage() {
        assert_eq!(normalize_amount("abc"), None);
        assert_eq!(normalize_amount(""), None);
        assert_eq!(normalize_amount("DR"), None);
        assert_eq!(normalize_amount("inf"), None);
        assert_eq!(normalize_amount("NaN"), None);
        assert_eq!(normalize_amount("12.3.4"), None);
    }

    #[test]
    fn test_date_is_day_first() {
        let d = normalize_date("12/09/2025").unwrap();
        assert_eq!((d.year(), d.month(), d.day()), (2025, 9, 12));

        let d = normalize_date("05-01-2024").unwrap();
        assert_eq!((d.month(), d.day()), (1, 5));
    }

    #[test]
    fn test_date_two_digit_year() {
        assert_eq!(normalize_date("12/09/25"), NaiveDate::from_ymd_opt(2025, 9, 12));
        assert_eq!(normalize_date("01-02-99"), NaiveDate::from_ymd_opt(1999, 2, 1));
    }

    #[test]
    fn test_date_month_first_when_day_first_impossible() {
        assert_eq!(normalize_date("09/25/2025"), NaiveDate::from_ymd_opt(2025, 9, 25));
    }

    #[test]
    fn test_date_other_layouts() {
        assert_eq!(normalize_date("2025-09-12"), NaiveDate::from_ymd_opt(2025, 9, 12));
        assert_eq!(normalize_date("12 Sep 2025"), NaiveDate::from_ymd_opt(2025, 9, 12));
        assert_eq!(normalize_date("12-SEP-25"), NaiveDate::from_ymd_opt(2025, 9, 12));
    }

    #[test]
    fn test_date_failures() {
        assert_eq!(normalize_date(""), None);
        assert_eq!(normalize_date("31/31/2025"), None);
        assert_eq!(normalize_date("not a date"), None);
        assert_eq!(normalize_date("123/09/2025"), None);
    }
}
