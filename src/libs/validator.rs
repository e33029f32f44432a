//! Input checks run before the store is touched.

use super::error::TaskError;
use super::task::{Priority, DUE_DATE_FORMAT};
use chrono::NaiveDate;

/// True when the title has a character above U+0020.
///
/// Only space and control characters count as blank; other Unicode
/// whitespace such as a non-breaking space is kept as title text.
pub fn is_valid_title(title: &str) -> bool {
    !title.trim_matches(|c: char| c <= ' ').is_empty()
}

/// Parses a due date in strict `YYYY-MM-DD` form.
///
/// Each field must be zero-padded to its full width, so `2025-7-20` is
/// rejected even though it names a real day.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, TaskError> {
    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(TaskError::InvalidDateFormat(value.to_string()));
    }

    NaiveDate::parse_from_str(value, DUE_DATE_FORMAT).map_err(|_| TaskError::InvalidDateFormat(value.to_string()))
}

/// True when `value` is exactly one of `Low`, `Medium`, `High`.
pub fn is_valid_priority(value: &str) -> bool {
    Priority::parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles() {
        assert!(is_valid_title("Buy milk"));
        assert!(is_valid_title("  x  "));
        assert!(!is_valid_title(""));
        assert!(!is_valid_title("   "));
        assert!(!is_valid_title("\t\n"));
        assert!(!is_valid_title("\u{0}\u{1f} "));
        assert!(is_valid_title("\u{a0}"));
        assert!(is_valid_title("\u{2003}"));
    }

    #[test]
    fn due_dates() {
        assert_eq!(parse_due_date("2025-07-20").unwrap(), NaiveDate::from_ymd_opt(2025, 7, 20).unwrap());
        assert_eq!(parse_due_date("2024-02-29").unwrap(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        for bad in ["20-07-2025", "2025-7-20", "2025/07/20", "2025-07-20 ", "2025-02-30", "2025-13-01", "", "tomorrow", "+2025-07-2"] {
            assert_eq!(parse_due_date(bad), Err(TaskError::InvalidDateFormat(bad.to_string())), "{bad}");
        }
    }

    #[test]
    fn priorities() {
        assert!(is_valid_priority("Low"));
        assert!(is_valid_priority("Medium"));
        assert!(is_valid_priority("High"));
        assert!(!is_valid_priority("Urgent"));
        assert!(!is_valid_priority("HIGH"));
        assert!(!is_valid_priority(""));
    }
}
