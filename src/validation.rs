use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{BookError, BookResult};

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Failed to compile phone regex"));

static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}\.[0-9]{2}\.[0-9]{4}$").expect("Failed to compile date regex"));

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> BookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(BookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Exactly ten ASCII digits, no separators or country code.
pub fn phone_digits(value: &str) -> BookResult<()> {
    if PHONE_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(BookError::InvalidFormat {
            field: "phone number".into(),
            value: value.to_string(),
            expected: "phone number must be 10 digits".into(),
        })
    }
}

/// Checks the `DD.MM.YYYY` shape only; calendar validity is up to the caller.
pub fn date_shape(value: &str) -> BookResult<()> {
    if DATE_PATTERN.is_match(value) {
        Ok(())
    } else {
        Err(invalid_date(value))
    }
}

pub(crate) fn invalid_date(value: &str) -> BookError {
    BookError::InvalidFormat {
        field: "date".into(),
        value: value.to_string(),
        expected: "use DD.MM.YYYY".into(),
    }
}

/// Parses a window length in days. Zero is allowed (today only).
pub fn window_days(value: &str, field: &str) -> BookResult<u32> {
    value.trim().parse::<u32>().map_err(|_| BookError::InvalidArgument {
        field: field.to_string(),
        reason: format!("'{}' is not a non-negative number of days", value.trim()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_accepts_valid_string() {
        assert_eq!(non_blank("Alice", "name").unwrap(), "Alice");
    }

    #[test]
    fn non_blank_trims_whitespace() {
        assert_eq!(non_blank("  Alice  ", "name").unwrap(), "Alice");
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert!(matches!(
            non_blank("   ", "name"),
            Err(BookError::BlankField { .. })
        ));
    }

    #[test]
    fn phone_digits_accepts_ten_digits() {
        assert!(phone_digits("0501234567").is_ok());
    }

    #[test]
    fn phone_digits_rejects_wrong_lengths() {
        assert!(phone_digits("050123456").is_err());
        assert!(phone_digits("05012345678").is_err());
        assert!(phone_digits("").is_err());
    }

    #[test]
    fn phone_digits_rejects_separators_and_prefixes() {
        assert!(phone_digits("050-123-4567").is_err());
        assert!(phone_digits("+380501234").is_err());
        assert!(phone_digits(" 0501234567").is_err());
        assert!(phone_digits("0501234567\n").is_err());
    }

    #[test]
    fn phone_digits_rejects_non_ascii_digits() {
        // Arabic-Indic digits are Unicode \d but not decimal ASCII.
        assert!(phone_digits("٠١٢٣٤٥٦٧٨٩").is_err());
    }

    #[test]
    fn date_shape_requires_padding() {
        assert!(date_shape("05.03.1990").is_ok());
        assert!(date_shape("5.3.1990").is_err());
        assert!(date_shape("1990-03-05").is_err());
    }

    #[test]
    fn window_days_parses_numbers() {
        assert_eq!(window_days("7", "days").unwrap(), 7);
        assert_eq!(window_days(" 0 ", "days").unwrap(), 0);
    }

    #[test]
    fn window_days_rejects_negative_and_text() {
        assert!(window_days("-1", "days").is_err());
        assert!(window_days("week", "days").is_err());
    }
}
