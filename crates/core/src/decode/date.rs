use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::{DecodeError, DecodeErrorKind};
use crate::models::Instant;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OFFSET_MINUTES_FORMAT: &str = "%Y-%m-%dT%H:%M%:z";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse an ISO-style date string into a UTC instant.
///
/// Accepts RFC 3339, minute-precision date-times (with `Z`, an offset or
/// nothing, the latter read as UTC), `YYYY-MM-DD`, and the reduced forms
/// `YYYY-MM` and `YYYY`. Date-only forms are midnight UTC. Anything else,
/// including the empty string and out-of-range calendar values, is
/// `InvalidDate`.
pub fn parse_date(raw: &str, path: &str) -> Result<Instant, DecodeError> {
    parse_instant(raw)
        .ok_or_else(|| DecodeError::new(path, DecodeErrorKind::InvalidDate(raw.to_string())))
}

fn parse_instant(raw: &str) -> Option<Instant> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    if let Ok(dt) = DateTime::parse_from_str(raw, OFFSET_MINUTES_FORMAT) {
        return Some(dt.with_timezone(&Utc));
    }

    // A trailing `Z` only makes sense after a time component.
    let (naive, zulu) = match raw.strip_suffix('Z') {
        Some(rest) => (rest, true),
        None => (raw, false),
    };

    if let Some(dt) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
    {
        return Some(dt.and_utc());
    }

    if zulu {
        return None;
    }

    parse_calendar_date(raw)?.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc())
}

fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let bytes = raw.as_bytes();
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);

    match bytes.len() {
        10 => NaiveDate::parse_from_str(raw, DATE_FORMAT).ok(),
        7 if digits(0..4) && bytes[4] == b'-' && digits(5..7) => {
            NaiveDate::from_ymd_opt(raw[..4].parse().ok()?, raw[5..].parse().ok()?, 1)
        }
        4 if digits(0..4) => NaiveDate::from_ymd_opt(raw.parse().ok()?, 1, 1),
        _ => None,
    }
}
