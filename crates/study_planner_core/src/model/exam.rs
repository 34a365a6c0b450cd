//! Exam date parsing and transient exam events.
//!
//! # Responsibility
//! - Turn stored exam date strings into calendar days.
//! - Define the `(date, subject)` pair consumed by calendar projections.
//!
//! # Invariants
//! - Only the calendar day survives parsing; time of day is dropped.
//! - `ExamEvent` is derived on demand and never stored.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

const EXTENDED_DATE_FORMAT: &str = "%Y-%m-%d";
const CLOCK_FORMATS: &[&str] = &[
    "%H:%M",
    "%H:%M:%S",
    "%H:%M:%S%.f",
    "%H%M",
    "%H%M%S",
];

/// Malformed exam date string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamDateParseError {
    input: String,
}

impl ExamDateParseError {
    /// Raw input that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl Display for ExamDateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid exam date: `{}`", self.input)
    }
}

impl Error for ExamDateParseError {}

/// Parses one ISO 8601 exam date.
///
/// The date part may be `YYYY-MM-DD`, basic `YYYYMMDD`, or reduced `YYYY-MM`
/// (first of the month). An optional time follows after `T` or a space:
/// `HH`, `HH:MM`, `HH:MM:SS[.fff]` or the basic `HHMM[SS]`, optionally
/// suffixed by `Z` or a `±HH[:MM]` offset. The time must be well formed but
/// is otherwise dropped; offsets are not applied, so the written calendar day
/// is returned.
pub fn parse_exam_date(value: &str) -> Result<NaiveDate, ExamDateParseError> {
    let trimmed = value.trim();
    let (date_part, time_part) = match trimmed.find(|c: char| c == 'T' || c == ' ') {
        Some(index) => (&trimmed[..index], Some(&trimmed[index + 1..])),
        None => (trimmed, None),
    };

    let date = parse_calendar_day(date_part);
    let time_ok = time_part.map_or(true, is_time_of_day);
    match date {
        Some(date) if time_ok => Ok(date),
        _ => Err(ExamDateParseError {
            input: value.to_string(),
        }),
    }
}

fn parse_calendar_day(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, EXTENDED_DATE_FORMAT) {
        return Some(date);
    }
    if value.len() == 8 && value.bytes().all(|b| b.is_ascii_digit()) {
        let year = value[..4].parse().ok()?;
        let month = value[4..6].parse().ok()?;
        let day = value[6..].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day);
    }
    if value.matches('-').count() == 1 {
        return NaiveDate::parse_from_str(&format!("{value}-01"), EXTENDED_DATE_FORMAT).ok();
    }
    None
}

fn is_time_of_day(value: &str) -> bool {
    let Some(clock) = strip_utc_offset(value) else {
        return false;
    };
    if clock.len() == 2 && clock.bytes().all(|b| b.is_ascii_digit()) {
        return clock.parse::<u32>().is_ok_and(|hour| hour < 24);
    }
    CLOCK_FORMATS
        .iter()
        .any(|format| NaiveTime::parse_from_str(clock, format).is_ok())
}

/// Removes a trailing `Z` or `±HH[:MM]` offset; `None` if the offset is malformed.
fn strip_utc_offset(value: &str) -> Option<&str> {
    if let Some(clock) = value.strip_suffix('Z') {
        return Some(clock);
    }
    match value.rfind(|c: char| c == '+' || c == '-') {
        Some(index) => {
            let offset = &value[index + 1..];
            let digits: String = offset.chars().filter(|c| *c != ':').collect();
            let well_formed = matches!(digits.len(), 2 | 4)
                && digits.bytes().all(|b| b.is_ascii_digit())
                && (offset.len() == digits.len()
                    || (offset.len() == 5 && offset.as_bytes()[2] == b':'));
            well_formed.then(|| &value[..index])
        }
        None => Some(value),
    }
}

/// One exam of one subject on one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamEvent {
    pub date: NaiveDate,
    pub subject_name: String,
}

impl ExamEvent {
    /// Compact label such as `Aug 15`.
    pub fn short_label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}
