//! Daily task derivation and completion tracking.
//!
//! # Responsibility
//! - Derive today's task list from the subject collection.
//! - Flip the completion flag of a single task by ID.
//!
//! # Invariants
//! - Derivation yields exactly one uncompleted task per subject, in subject
//!   order, each with a newly allocated `TaskId`.
//! - A derived list replaces the previous one wholesale; completion state is
//!   not carried over.
//! - Toggling touches at most one task.

use crate::model::ids::TaskId;
use crate::model::subject::Subject;
use crate::model::task::DailyTask;
use log::debug;

/// Maps subjects 1:1 to fresh daily tasks.
pub fn derive_daily_tasks(subjects: &[Subject]) -> Vec<DailyTask> {
    subjects.iter().map(DailyTask::for_subject).collect()
}

/// Flips `completed` on the task with `task_id`.
///
/// Returns the new flag, or `None` when no task matches (for example an ID
/// from before the last regeneration). A miss changes nothing.
pub fn toggle_completion(tasks: &mut [DailyTask], task_id: TaskId) -> Option<bool> {
    match tasks.iter_mut().find(|task| task.id == task_id) {
        Some(task) => Some(task.toggle()),
        None => {
            debug!("event=task_toggle module=schedule status=skipped reason=unknown_task task_id={task_id}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{derive_daily_tasks, toggle_completion};
    use crate::model::ids::TaskId;
    use crate::model::subject::Subject;

    #[test]
    fn derive_of_no_subjects_is_empty() {
        assert!(derive_daily_tasks(&[]).is_empty());
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let subjects = vec![
            Subject::try_new("A", "a", 10, Vec::new()).unwrap(),
            Subject::try_new("B", "b", 20, Vec::new()).unwrap(),
        ];
        let mut tasks = derive_daily_tasks(&subjects);
        let target = tasks[1].id;

        assert_eq!(toggle_completion(&mut tasks, target), Some(true));
        assert!(!tasks[0].completed);
        assert!(tasks[1].completed);

        let before = tasks.clone();
        assert_eq!(toggle_completion(&mut tasks, TaskId::new()), None);
        assert_eq!(tasks, before);
    }
}
