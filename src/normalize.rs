//! Phone number and date normalization for the Unda portal backend.
//!
//! The backend accepts Kenyan phone numbers in the canonical `+254XXXXXXXXX`
//! form and calendar dates as `YYYY-MM-DD`. These functions convert the
//! loosely formatted values users type into those forms. They are pure and
//! idempotent, and they never fail: unrecognized input degrades to a
//! best-effort passthrough so validation can stay a separate concern
//! ([`is_valid_phone_for_champion`], [`is_valid_date_yyyy_mm_dd`]).

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

static CHAMPION_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?\d{9,15}$").expect("Failed to compile phone regex"));

/// Naive date-time layouts accepted in addition to RFC 3339 and bare dates.
const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Normalize a Kenyan phone number to the form the backend accepts.
///
/// Every character that is not an ASCII digit is stripped, keeping a `+`
/// only in the leading position. Then:
///
/// - values starting with `+` are returned as-is
/// - a leading `0` is replaced with `+254` (local format)
/// - values starting with `254` are prefixed with `+`
/// - anything else is returned cleaned but unchanged, so the caller can
///   validate separately
///
/// Returns `None` for empty input or input containing no digits.
///
/// # Example
///
/// ```
/// use unda_portal_client::normalize::normalize_phone;
///
/// assert_eq!(normalize_phone("0712345678").as_deref(), Some("+254712345678"));
/// assert_eq!(normalize_phone("+254 712 345 678").as_deref(), Some("+254712345678"));
/// assert_eq!(normalize_phone("254712345678").as_deref(), Some("+254712345678"));
/// ```
pub fn normalize_phone(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut cleaned = String::with_capacity(trimmed.len());
    for (index, ch) in trimmed.char_indices() {
        if ch.is_ascii_digit() || (ch == '+' && index == 0) {
            cleaned.push(ch);
        }
    }

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    if cleaned.starts_with('+') {
        return Some(cleaned);
    }

    if let Some(rest) = cleaned.strip_prefix('0') {
        // Local 0-prefixed number -> +254
        return Some(format!("+254{}", rest));
    }

    if cleaned.starts_with("254") {
        return Some(format!("+{}", cleaned));
    }

    // Fallback: return as-is (caller can validate)
    Some(cleaned)
}

/// Format a date value into `YYYY-MM-DD` for the backend.
///
/// Accepts RFC 3339 date-times (the offset is converted to UTC before the
/// time component is dropped), bare `YYYY-MM-DD` dates, and naive
/// `YYYY-MM-DD HH:MM:SS` / `YYYY-MM-DDTHH:MM:SS` date-times.
///
/// Returns `None` for empty or unparseable input.
pub fn format_date_yyyy_mm_dd(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(iso_date(datetime.with_timezone(&Utc).date_naive()));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(iso_date(date));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(iso_date(datetime.date()));
        }
    }

    None
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Validate a phone number for champion self-registration.
///
/// True iff [`normalize_phone`] yields a value with an optional leading `+`
/// followed by 9-15 digits.
pub fn is_valid_phone_for_champion(input: &str) -> bool {
    normalize_phone(input).map_or(false, |phone| CHAMPION_PHONE_REGEX.is_match(&phone))
}

/// True iff [`format_date_yyyy_mm_dd`] accepts the value.
pub fn is_valid_date_yyyy_mm_dd(input: &str) -> bool {
    format_date_yyyy_mm_dd(input).is_some()
}
