//! Exam calendar projection.
//!
//! # Responsibility
//! - Flatten subject exam dates into dated exam events.
//! - Lay out a month grid and the month's exam list around a reference day.
//!
//! # Invariants
//! - One malformed date only drops that entry; the projection still completes.
//! - `month_events` is sorted by date; equal dates keep subject order.
//! - The grid starts with one empty slot per column before the 1st, then one
//!   slot per day of the month in ascending order.

use crate::config::WeekStart;
use crate::model::exam::{parse_exam_date, ExamEvent};
use crate::model::subject::Subject;
use chrono::{Datelike, Days, NaiveDate};
use log::warn;
use serde::Serialize;
use std::collections::HashSet;

/// One day cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// At least one exam falls on this exact day.
    pub has_exam: bool,
    /// Cell is the projection reference day ("today" in the planner).
    pub is_reference_day: bool,
}

/// Grid cell: padding before the 1st, or a day of the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarSlot {
    Empty,
    Day(CalendarDay),
}

impl CalendarSlot {
    pub fn day(&self) -> Option<&CalendarDay> {
        match self {
            Self::Empty => None,
            Self::Day(day) => Some(day),
        }
    }
}

/// Calendar view for the month containing the reference day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthProjection {
    pub year: i32,
    pub month: u32,
    /// Heading such as `August 2025`.
    pub title: String,
    pub weekday_labels: Vec<String>,
    pub calendar_days: Vec<CalendarSlot>,
    pub month_events: Vec<ExamEvent>,
    /// Exam date strings (any month) that failed to parse.
    pub skipped_dates: usize,
}

impl MonthProjection {
    /// Grid rows of seven slots; the last row may be shorter.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarSlot]> {
        self.calendar_days.chunks(7)
    }

    pub fn has_exam_on(&self, date: NaiveDate) -> bool {
        self.month_events.iter().any(|event| event.date == date)
    }
}

/// Result of flattening every subject's exam dates.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExamEventScan {
    /// Parsed events in subject order, then stored date order.
    pub events: Vec<ExamEvent>,
    pub skipped_dates: usize,
}

/// Flattens all exam dates into events, skipping malformed entries.
pub fn collect_exam_events(subjects: &[Subject]) -> ExamEventScan {
    let mut scan = ExamEventScan::default();
    for subject in subjects {
        for raw in &subject.exam_dates {
            match parse_exam_date(raw) {
                Ok(date) => scan.events.push(ExamEvent {
                    date,
                    subject_name: subject.name.clone(),
                }),
                Err(err) => {
                    // Metadata only: the raw string is user text.
                    warn!(
                        "event=exam_date_skipped module=calendar status=skipped subject_id={} input_len={}",
                        subject.id,
                        err.input().chars().count()
                    );
                    scan.skipped_dates += 1;
                }
            }
        }
    }
    scan
}

/// Projects exams onto the month containing `reference`.
pub fn project_month(
    subjects: &[Subject],
    reference: NaiveDate,
    week_start: WeekStart,
) -> MonthProjection {
    let scan = collect_exam_events(subjects);

    let mut month_events: Vec<ExamEvent> = scan
        .events
        .into_iter()
        .filter(|event| is_same_month(event.date, reference))
        .collect();
    // Stable: same-day exams keep flattening order.
    month_events.sort_by_key(|event| event.date);
    let exam_days: HashSet<NaiveDate> = month_events.iter().map(|event| event.date).collect();

    let first = first_of_month(reference);
    let leading = week_start.column_of(first.weekday());
    let mut calendar_days: Vec<CalendarSlot> = (0..leading).map(|_| CalendarSlot::Empty).collect();
    calendar_days.extend(
        first
            .iter_days()
            .take_while(|date| date.month() == first.month())
            .map(|date| {
                CalendarSlot::Day(CalendarDay {
                    date,
                    has_exam: exam_days.contains(&date),
                    is_reference_day: date == reference,
                })
            }),
    );

    MonthProjection {
        year: reference.year(),
        month: reference.month(),
        title: first.format("%B %Y").to_string(),
        weekday_labels: week_start
            .weekday_labels()
            .iter()
            .map(|label| label.to_string())
            .collect(),
        calendar_days,
        month_events,
        skipped_dates: scan.skipped_dates,
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn is_same_month(date: NaiveDate, reference: NaiveDate) -> bool {
    date.year() == reference.year() && date.month() == reference.month()
}
