//! Subject domain model.
//!
//! # Responsibility
//! - Define the course-of-study record registered by the user.
//! - Enforce creation-time validation for required text fields.
//!
//! # Invariants
//! - `name` and `goal` are non-empty after trimming.
//! - `exam_dates` is always sorted in ascending lexical order.
//! - A subject is never mutated after creation.

use crate::model::ids::SubjectId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Alert text shown when a subject form is submitted with blank fields.
pub const SUBJECT_FORM_ALERT: &str = "Please fill in subject name and goal.";

/// Validation failure for subject creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectValidationError {
    /// `name` is empty after trimming.
    EmptyName,
    /// `goal` is empty after trimming.
    EmptyGoal,
}

impl SubjectValidationError {
    /// User-facing text for the blocking alert.
    pub fn user_message(self) -> &'static str {
        SUBJECT_FORM_ALERT
    }
}

impl Display for SubjectValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "subject name must not be blank"),
            Self::EmptyGoal => write!(f, "subject goal must not be blank"),
        }
    }
}

impl Error for SubjectValidationError {}

/// A user's course of study.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SubjectWire")]
pub struct Subject {
    pub id: SubjectId,
    pub name: String,
    pub goal: String,
    /// Minutes per day.
    pub daily_study_time: u32,
    /// ISO 8601 date strings, ascending lexical order.
    pub exam_dates: Vec<String>,
}

impl Subject {
    /// Creates a validated subject with a freshly allocated ID.
    ///
    /// `exam_dates` is sorted before storage; duplicates are kept.
    pub fn try_new(
        name: impl Into<String>,
        goal: impl Into<String>,
        daily_study_time: u32,
        exam_dates: Vec<String>,
    ) -> Result<Self, SubjectValidationError> {
        Self::with_id(SubjectId::new(), name, goal, daily_study_time, exam_dates)
    }

    /// Creates a validated subject with a caller-provided ID.
    pub fn with_id(
        id: SubjectId,
        name: impl Into<String>,
        goal: impl Into<String>,
        daily_study_time: u32,
        mut exam_dates: Vec<String>,
    ) -> Result<Self, SubjectValidationError> {
        let name = name.into();
        let goal = goal.into();
        validate_required_fields(&name, &goal)?;
        exam_dates.sort();

        Ok(Self {
            id,
            name,
            goal,
            daily_study_time,
            exam_dates,
        })
    }
}

/// Checks the required text fields of a subject.
///
/// Name is checked before goal, so a form with both blank reports `EmptyName`.
pub fn validate_required_fields(name: &str, goal: &str) -> Result<(), SubjectValidationError> {
    if name.trim().is_empty() {
        return Err(SubjectValidationError::EmptyName);
    }
    if goal.trim().is_empty() {
        return Err(SubjectValidationError::EmptyGoal);
    }
    Ok(())
}

#[derive(Deserialize)]
struct SubjectWire {
    id: SubjectId,
    name: String,
    goal: String,
    daily_study_time: u32,
    #[serde(default)]
    exam_dates: Vec<String>,
}

impl TryFrom<SubjectWire> for Subject {
    type Error = SubjectValidationError;

    fn try_from(value: SubjectWire) -> Result<Self, Self::Error> {
        Subject::with_id(
            value.id,
            value.name,
            value.goal,
            value.daily_study_time,
            value.exam_dates,
        )
    }
}
