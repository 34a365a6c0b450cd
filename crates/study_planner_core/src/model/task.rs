//! Daily task model.
//!
//! # Responsibility
//! - Represent one subject's study session for the current day.
//!
//! # Invariants
//! - `subject_name` and `duration` are snapshots taken at derivation time and
//!   are never synced back from the subject.
//! - `completed` is the only field mutated after creation.

use crate::model::ids::{SubjectId, TaskId};
use crate::model::subject::Subject;
use serde::{Deserialize, Serialize};

/// One subject's required study session for today.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTask {
    pub id: TaskId,
    /// Back-reference for lookup only.
    pub subject_id: SubjectId,
    pub subject_name: String,
    /// Minutes.
    pub duration: u32,
    pub completed: bool,
}

impl DailyTask {
    /// Snapshots a subject into a fresh, uncompleted task with a new ID.
    pub fn for_subject(subject: &Subject) -> Self {
        Self {
            id: TaskId::new(),
            subject_id: subject.id,
            subject_name: subject.name.clone(),
            duration: subject.daily_study_time,
            completed: false,
        }
    }

    /// Flips the completion flag and returns the new value.
    pub fn toggle(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
