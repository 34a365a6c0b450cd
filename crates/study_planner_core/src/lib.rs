//! Core domain logic for the study planner.
//! This crate is the single source of truth for subject, task, and progress
//! invariants; presentation layers only read its views.

pub mod config;
pub mod logging;
pub mod model;
pub mod planner;
pub mod projection;
pub mod repo;
pub mod service;

pub use config::{default_log_level, ConfigError, PlannerConfig, WeekStart};
pub use logging::{init_logging, logging_status, LoggingError};
pub use model::exam::{parse_exam_date, ExamDateParseError, ExamEvent};
pub use model::ids::{SubjectId, TaskId};
pub use model::subject::{Subject, SubjectValidationError};
pub use model::task::DailyTask;
pub use planner::{PlannerSnapshot, StudyPlanner};
pub use projection::calendar::{project_month, CalendarDay, CalendarSlot, MonthProjection};
pub use projection::progress::{aggregate, ProgressOverview, TaskProgress};
pub use repo::subject_repo::{InMemorySubjectRepository, SubjectRepository};
pub use service::subject_service::{NewSubjectRequest, SubjectRegistry};
pub use service::task_service::{derive_daily_tasks, toggle_completion};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
