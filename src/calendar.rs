use chrono::{DateTime, Datelike, NaiveDate};

use crate::errors::{LedgerError, Result};

/// whole calendar months elapsed from `from` to `to`
///
/// A partial final month is not counted: if the day of month of `to` is
/// earlier than that of `from`, one month is subtracted. Negative spans
/// (when `to` precedes `from`) yield zero.
pub fn whole_months_between(from: NaiveDate, to: NaiveDate) -> u32 {
    let years = to.year() - from.year();
    let months = to.month() as i32 - from.month() as i32;
    let adjustment = if to.day() >= from.day() { 0 } else { -1 };

    let total = years * 12 + months + adjustment;
    total.max(0) as u32
}

/// parse a calendar date as emitted by the persistence API
///
/// Accepts plain `YYYY-MM-DD` dates and RFC 3339 timestamps, whose date
/// part is taken as-is.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return Err(LedgerError::InvalidDate {
            message: "empty date".to_string(),
        });
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .map_err(|e| LedgerError::InvalidDate {
            message: format!("{value:?}: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_whole_months_same_day() {
        assert_eq!(whole_months_between(date(2024, 1, 1), date(2024, 4, 1)), 3);
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 1, 15)), 0);
    }

    #[test]
    fn test_partial_month_not_counted() {
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 2, 14)), 0);
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 2, 15)), 1);
        assert_eq!(whole_months_between(date(2024, 1, 15), date(2024, 4, 10)), 2);
    }

    #[test]
    fn test_across_year_boundary() {
        assert_eq!(whole_months_between(date(2023, 11, 20), date(2024, 2, 20)), 3);
        assert_eq!(whole_months_between(date(2023, 12, 31), date(2024, 1, 30)), 0);
        assert_eq!(whole_months_between(date(2022, 6, 1), date(2024, 6, 1)), 24);
    }

    #[test]
    fn test_month_end_start_dates() {
        // 31st never matches a shorter month's last day
        assert_eq!(whole_months_between(date(2024, 1, 31), date(2024, 2, 29)), 0);
        assert_eq!(whole_months_between(date(2024, 1, 31), date(2024, 3, 31)), 2);
    }

    #[test]
    fn test_negative_span_floors_to_zero() {
        assert_eq!(whole_months_between(date(2024, 5, 1), date(2024, 1, 1)), 0);
        assert_eq!(whole_months_between(date(2025, 1, 1), date(2024, 12, 31)), 0);
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_date("2024-04-01").unwrap(), date(2024, 4, 1));
        assert_eq!(parse_date(" 2024-04-01 ").unwrap(), date(2024, 4, 1));
    }

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(parse_date("2024-04-01T10:30:00Z").unwrap(), date(2024, 4, 1));
        assert_eq!(parse_date("2024-04-01T23:30:00+05:30").unwrap(), date(2024, 4, 1));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_date(""), Err(LedgerError::InvalidDate { .. })));
        assert!(matches!(parse_date("2024-02-30"), Err(LedgerError::InvalidDate { .. })));
        assert!(matches!(parse_date("01/04/2024"), Err(LedgerError::InvalidDate { .. })));
    }
}
