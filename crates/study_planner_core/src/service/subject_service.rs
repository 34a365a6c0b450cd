//! Subject registry use-case service.
//!
//! # Responsibility
//! - Validate and normalize "add subject" input.
//! - Append accepted subjects to the repository in submission order.
//!
//! # Invariants
//! - A rejected request leaves the repository untouched.
//! - Exam dates are split on commas, trimmed, emptied segments dropped, and
//!   sorted lexically before storage.
//! - Daily study time is a non-negative minute count; bad input becomes 0.

use crate::model::ids::SubjectId;
use crate::model::subject::{Subject, SubjectValidationError};
use crate::repo::subject_repo::SubjectRepository;
use log::{info, warn};

/// Input of the "add subject" action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubjectRequest {
    pub name: String,
    pub goal: String,
    /// Minutes per day. Negative values clamp to 0.
    pub daily_study_time: i64,
    /// Comma-separated ISO dates, e.g. `2025-08-15, 2025-12-01`.
    pub exam_dates: String,
}

impl NewSubjectRequest {
    pub fn new(
        name: impl Into<String>,
        goal: impl Into<String>,
        daily_study_time: i64,
        exam_dates: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            goal: goal.into(),
            daily_study_time,
            exam_dates: exam_dates.into(),
        }
    }

    /// Builds a request from raw form field text.
    ///
    /// `daily_study_time` is read like an integer form field: see
    /// [`coerce_study_minutes`].
    pub fn from_form(
        name: impl Into<String>,
        goal: impl Into<String>,
        daily_study_time: &str,
        exam_dates: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            goal,
            i64::from(coerce_study_minutes(daily_study_time)),
            exam_dates,
        )
    }
}

/// Reads a minute count from form text.
///
/// Leading whitespace and an optional sign are skipped, then the leading run
/// of digits is read and anything after it ignored (`"45min"` is 45).
/// No digits, or a negative value, yields 0. Overflow saturates.
pub fn coerce_study_minutes(raw: &str) -> u32 {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 || negative {
        return 0;
    }
    rest[..digit_count].parse::<u32>().unwrap_or(u32::MAX)
}

/// Clamps a numeric minute count into the stored range.
pub fn clamp_study_minutes(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Splits comma-separated exam dates into the stored, sorted form.
pub fn split_exam_dates(raw: &str) -> Vec<String> {
    let mut dates: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect();
    dates.sort();
    dates
}

/// Ordered, append-only subject registry.
pub struct SubjectRegistry<R: SubjectRepository> {
    repo: R,
}

impl<R: SubjectRepository> SubjectRegistry<R> {
    /// Creates a registry over the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validates the request and appends a new subject.
    ///
    /// # Errors
    /// - `EmptyName` / `EmptyGoal` when the trimmed field is blank. Nothing is
    ///   stored in that case and the request may be resubmitted.
    pub fn add_subject(
        &mut self,
        request: &NewSubjectRequest,
    ) -> Result<Subject, SubjectValidationError> {
        let subject = Subject::try_new(
            request.name.clone(),
            request.goal.clone(),
            clamp_study_minutes(request.daily_study_time),
            split_exam_dates(&request.exam_dates),
        )
        .inspect_err(|err| {
            warn!("event=subject_add module=registry status=rejected reason={err}");
        })?;
        self.repo.append_subject(subject.clone());

        info!(
            "event=subject_add module=registry status=ok subject_id={} daily_minutes={} exam_dates={} subject_count={}",
            subject.id,
            subject.daily_study_time,
            subject.exam_dates.len(),
            self.repo.subject_count()
        );
        Ok(subject)
    }

    /// Subjects in insertion order.
    pub fn subjects(&self) -> &[Subject] {
        self.repo.list_subjects()
    }

    pub fn get_subject(&self, id: SubjectId) -> Option<&Subject> {
        self.repo.get_subject(id)
    }

    pub fn subject_count(&self) -> usize {
        self.repo.subject_count()
    }
}
