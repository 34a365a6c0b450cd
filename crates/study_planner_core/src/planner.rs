//! Study planner application state.
//!
//! # Responsibility
//! - Own the subject registry and the current daily task list.
//! - Expose the two mutating entry points (add subject, toggle task) and the
//!   read views consumed by a presentation layer.
//!
//! # Invariants
//! - Every successful subject add is followed, before returning, by a full
//!   task regeneration; task count then equals subject count.
//! - Regeneration discards all completion state of the previous epoch.
//! - A rejected add changes neither collection.

use crate::config::PlannerConfig;
use crate::model::ids::TaskId;
use crate::model::subject::{Subject, SubjectValidationError};
use crate::model::task::DailyTask;
use crate::projection::calendar::{project_month, MonthProjection};
use crate::projection::progress::{aggregate, ProgressOverview};
use crate::repo::subject_repo::{InMemorySubjectRepository, SubjectRepository};
use crate::service::subject_service::{NewSubjectRequest, SubjectRegistry};
use crate::service::task_service::{derive_daily_tasks, toggle_completion};
use chrono::NaiveDate;
use log::{debug, info};
use serde::Serialize;

/// All read views for one render pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannerSnapshot {
    pub subjects: Vec<Subject>,
    pub daily_tasks: Vec<DailyTask>,
    pub calendar: MonthProjection,
    pub progress: ProgressOverview,
}

/// Process-lifetime planner state container.
pub struct StudyPlanner<R: SubjectRepository = InMemorySubjectRepository> {
    registry: SubjectRegistry<R>,
    daily_tasks: Vec<DailyTask>,
    config: PlannerConfig,
}

impl StudyPlanner<InMemorySubjectRepository> {
    /// Creates an empty planner backed by in-memory storage.
    pub fn new(config: PlannerConfig) -> Self {
        Self::with_repository(InMemorySubjectRepository::new(), config)
    }
}

impl Default for StudyPlanner<InMemorySubjectRepository> {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl<R: SubjectRepository> StudyPlanner<R> {
    /// Creates a planner over an existing repository.
    ///
    /// Tasks are derived immediately for any subjects the repository holds.
    pub fn with_repository(repo: R, config: PlannerConfig) -> Self {
        let registry = SubjectRegistry::new(repo);
        let daily_tasks = derive_daily_tasks(registry.subjects());
        Self {
            registry,
            daily_tasks,
            config,
        }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Blank "add subject" input pre-filled with configured defaults.
    pub fn blank_request(&self) -> NewSubjectRequest {
        NewSubjectRequest::new(
            "",
            "",
            i64::from(self.config.default_daily_study_minutes),
            "",
        )
    }

    /// Registers a subject and regenerates today's tasks.
    ///
    /// # Errors
    /// - Returns `SubjectValidationError` for a blank name or goal; state is
    ///   left unchanged.
    pub fn add_subject(
        &mut self,
        request: &NewSubjectRequest,
    ) -> Result<Subject, SubjectValidationError> {
        let subject = self.registry.add_subject(request)?;
        self.regenerate_tasks();
        Ok(subject)
    }

    /// Flips completion of one task.
    ///
    /// Returns the new flag, or `None` if `task_id` is not in the current
    /// epoch (a no-op).
    pub fn toggle_task(&mut self, task_id: TaskId) -> Option<bool> {
        let toggled = toggle_completion(&mut self.daily_tasks, task_id);
        if let Some(completed) = toggled {
            debug!(
                "event=task_toggle module=schedule status=ok task_id={task_id} completed={completed}"
            );
        }
        toggled
    }

    /// Subjects in insertion order.
    pub fn subjects(&self) -> &[Subject] {
        self.registry.subjects()
    }

    /// Today's tasks in subject order.
    pub fn daily_tasks(&self) -> &[DailyTask] {
        &self.daily_tasks
    }

    /// Exam calendar for the month containing `reference`.
    pub fn calendar(&self, reference: NaiveDate) -> MonthProjection {
        project_month(self.registry.subjects(), reference, self.config.week_start)
    }

    pub fn progress(&self) -> ProgressOverview {
        ProgressOverview {
            total_subjects: self.registry.subject_count(),
            tasks: aggregate(&self.daily_tasks),
        }
    }

    /// Every read view, with the calendar anchored at `reference`.
    pub fn snapshot(&self, reference: NaiveDate) -> PlannerSnapshot {
        PlannerSnapshot {
            subjects: self.subjects().to_vec(),
            daily_tasks: self.daily_tasks.clone(),
            calendar: self.calendar(reference),
            progress: self.progress(),
        }
    }

    fn regenerate_tasks(&mut self) {
        let discarded_completed = self.daily_tasks.iter().filter(|task| task.completed).count();
        self.daily_tasks = derive_daily_tasks(self.registry.subjects());
        info!(
            "event=tasks_regenerated module=schedule status=ok task_count={} discarded_completed={}",
            self.daily_tasks.len(),
            discarded_completed
        );
    }
}
