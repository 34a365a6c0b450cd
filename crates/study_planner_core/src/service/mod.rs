//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw planner input into validated subjects.
//! - Derive and mutate the daily task list.
//! - Keep callers decoupled from storage details.

pub mod subject_service;
pub mod task_service;
