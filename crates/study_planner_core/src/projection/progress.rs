//! Daily progress aggregation.
//!
//! # Invariants
//! - `percent_complete` is `completed / total * 100` without rounding, and
//!   0 for an empty task list.

use crate::model::task::DailyTask;
use serde::Serialize;

/// Completion counts for today's tasks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaskProgress {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub percent_complete: f64,
}

impl TaskProgress {
    /// Whole-number percentage for display, rounding halves away from zero.
    pub fn rounded_percent(&self) -> u32 {
        self.percent_complete.round() as u32
    }
}

/// Progress panel data: subject count next to today's task completion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProgressOverview {
    pub total_subjects: usize,
    pub tasks: TaskProgress,
}

/// Counts completed tasks and derives the completion percentage.
pub fn aggregate(tasks: &[DailyTask]) -> TaskProgress {
    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|task| task.completed).count();
    let percent_complete = if total_tasks > 0 {
        completed_tasks as f64 / total_tasks as f64 * 100.0
    } else {
        0.0
    };

    TaskProgress {
        total_tasks,
        completed_tasks,
        percent_complete,
    }
}
