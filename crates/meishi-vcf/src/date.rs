//! Date codec: wire form ↔ display form.
//!
//! Wire form is the compact numeric value stored in `BDAY`/`ANNIVERSARY`:
//! `YYYYMMDD`, `YYYYMMDDTHHMMSS`, or `YYYYMMDDTHHMMSSZ`. Display form is the
//! human-editable spelling: `YYYY-MM-DD`, `YYYY-MM-DD HH:MM:SS`, or
//! `YYYY-MM-DD HH:MM:SS (UTC)`.
//!
//! The codec is a strict inverse pair: `decode_date(encode_date(d)) == d`
//! for every display form `d` that [`encode_date`] accepts. Out-of-range
//! calendar values are rejected, never coerced. Empty input maps to empty
//! output in both directions: absence is representable, not an error.
//!
//! A value whose first character is not an ASCII digit is a text date
//! (e.g. `circa 1800`): [`decode_date`] passes it through unchanged and
//! [`encode_date`] rejects it, since text has no wire spelling.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use meishi_core::error::ErrorCode;

/// A date codec failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("cannot encode display date `{0}`: {1}")]
    Encode(String, String),

    #[error("cannot decode wire date `{0}`: {1}")]
    Decode(String, String),
}

impl DateError {
    /// The stable code for this error.
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Encode(..) => ErrorCode::Encode,
            Self::Decode(..) => ErrorCode::Decode,
        }
    }
}

/// Suffix marking a UTC display form.
const UTC_SUFFIX: &str = " (UTC)";

/// Decodes a wire-form date into display form.
///
/// ## Errors
/// Returns a `Decode` error if the value starts with a digit but does not
/// match the wire grammar, or carries out-of-range calendar components.
pub fn decode_date(wire: &str) -> Result<String, DateError> {
    if wire.is_empty() {
        return Ok(String::new());
    }

    // Text date: its display form is itself.
    if !wire.starts_with(|c: char| c.is_ascii_digit()) {
        return Ok(wire.to_string());
    }

    let err = |msg: &str| DateError::Decode(wire.to_string(), msg.to_string());

    if !wire.is_ascii() {
        return Err(err("expected YYYYMMDD, YYYYMMDDTHHMMSS, or YYYYMMDDTHHMMSSZ"));
    }

    match wire.len() {
        8 => {
            let (year, month, day) = parse_compact_date(wire).ok_or_else(|| {
                err("expected YYYYMMDD with a valid calendar date")
            })?;
            Ok(format!("{year:04}-{month:02}-{day:02}"))
        }
        15 | 16 => {
            let (date_part, rest) = wire.split_at(8);
            let time_part = rest
                .strip_prefix('T')
                .ok_or_else(|| err("expected T between date and time"))?;

            let (time_part, utc) = match time_part.strip_suffix('Z') {
                Some(stripped) => (stripped, true),
                None => (time_part, false),
            };
            if wire.len() == 16 && !utc {
                return Err(err("expected Z suffix"));
            }

            let (year, month, day) = parse_compact_date(date_part).ok_or_else(|| {
                err("expected YYYYMMDD with a valid calendar date")
            })?;
            let (hour, minute, second) = parse_compact_time(time_part).ok_or_else(|| {
                err("expected HHMMSS with a valid time of day")
            })?;

            let mut display =
                format!("{year:04}-{month:02}-{day:02} {hour:02}:{minute:02}:{second:02}");
            if utc {
                display.push_str(UTC_SUFFIX);
            }
            Ok(display)
        }
        _ => Err(err("expected YYYYMMDD, YYYYMMDDTHHMMSS, or YYYYMMDDTHHMMSSZ")),
    }
}

/// Encodes a display-form date into wire form.
///
/// ## Errors
/// Returns an `Encode` error for text dates and for anything outside the
/// display grammar, including out-of-range calendar components.
pub fn encode_date(display: &str) -> Result<String, DateError> {
    if display.is_empty() {
        return Ok(String::new());
    }

    let err = |msg: &str| DateError::Encode(display.to_string(), msg.to_string());

    if !display.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(err("text dates have no wire form"));
    }

    if !display.is_ascii() {
        return Err(err(
            "expected YYYY-MM-DD, YYYY-MM-DD HH:MM:SS, or YYYY-MM-DD HH:MM:SS (UTC)",
        ));
    }

    let (datetime_part, utc) = match display.strip_suffix(UTC_SUFFIX) {
        Some(stripped) => (stripped, true),
        None => (display, false),
    };

    match datetime_part.len() {
        10 => {
            if utc {
                return Err(err("a date without a time cannot be UTC"));
            }
            let (year, month, day) = parse_display_date(datetime_part)
                .ok_or_else(|| err("expected YYYY-MM-DD with a valid calendar date"))?;
            Ok(format!("{year:04}{month:02}{day:02}"))
        }
        19 => {
            let (date_part, rest) = datetime_part.split_at(10);
            let time_part = rest
                .strip_prefix(' ')
                .ok_or_else(|| err("expected a space between date and time"))?;

            let (year, month, day) = parse_display_date(date_part)
                .ok_or_else(|| err("expected YYYY-MM-DD with a valid calendar date"))?;
            let (hour, minute, second) = parse_display_time(time_part)
                .ok_or_else(|| err("expected HH:MM:SS with a valid time of day"))?;

            let mut wire =
                format!("{year:04}{month:02}{day:02}T{hour:02}{minute:02}{second:02}");
            if utc {
                wire.push('Z');
            }
            Ok(wire)
        }
        _ => Err(err(
            "expected YYYY-MM-DD, YYYY-MM-DD HH:MM:SS, or YYYY-MM-DD HH:MM:SS (UTC)",
        )),
    }
}

/// Parses `YYYYMMDD`, rejecting out-of-range dates.
fn parse_compact_date(s: &str) -> Option<(u32, u32, u32)> {
    if s.len() != 8 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let year: u32 = s[..4].parse().ok()?;
    let month: u32 = s[4..6].parse().ok()?;
    let day: u32 = s[6..8].parse().ok()?;
    check_calendar(year, month, day)
}

/// Parses `HHMMSS`, rejecting out-of-range times.
fn parse_compact_time(s: &str) -> Option<(u32, u32, u32)> {
    if s.len() != 6 || !s.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hour: u32 = s[..2].parse().ok()?;
    let minute: u32 = s[2..4].parse().ok()?;
    let second: u32 = s[4..6].parse().ok()?;
    check_clock(hour, minute, second)
}

/// Parses `YYYY-MM-DD`, rejecting out-of-range dates.
fn parse_display_date(s: &str) -> Option<(u32, u32, u32)> {
    let bytes = s.as_bytes();
    if s.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }
    let digits = |r: &str| r.chars().all(|c| c.is_ascii_digit());
    if !digits(&s[..4]) || !digits(&s[5..7]) || !digits(&s[8..10]) {
        return None;
    }
    let year: u32 = s[..4].parse().ok()?;
    let month: u32 = s[5..7].parse().ok()?;
    let day: u32 = s[8..10].parse().ok()?;
    check_calendar(year, month, day)
}

/// Parses `HH:MM:SS`, rejecting out-of-range times.
fn parse_display_time(s: &str) -> Option<(u32, u32, u32)> {
    let bytes = s.as_bytes();
    if s.len() != 8 || bytes[2] != b':' || bytes[5] != b':' {
        return None;
    }
    let digits = |r: &str| r.chars().all(|c| c.is_ascii_digit());
    if !digits(&s[..2]) || !digits(&s[3..5]) || !digits(&s[6..8]) {
        return None;
    }
    let hour: u32 = s[..2].parse().ok()?;
    let minute: u32 = s[3..5].parse().ok()?;
    let second: u32 = s[6..8].parse().ok()?;
    check_clock(hour, minute, second)
}

/// Rejects dates that do not exist on the calendar (month 13, Feb 30, ...).
fn check_calendar(year: u32, month: u32, day: u32) -> Option<(u32, u32, u32)> {
    let signed_year = i32::try_from(year).ok()?;
    NaiveDate::from_ymd_opt(signed_year, month, day)?;
    Some((year, month, day))
}

/// Rejects times of day that do not exist (hour 24, minute 60, ...).
fn check_clock(hour: u32, minute: u32, second: u32) -> Option<(u32, u32, u32)> {
    NaiveTime::from_hms_opt(hour, minute, second)?;
    Some((hour, minute, second))
}
