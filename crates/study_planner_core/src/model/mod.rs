//! Domain model for the study planner.
//!
//! # Responsibility
//! - Define subjects, their derived daily tasks, and transient exam events.
//!
//! # Invariants
//! - Subject and task identifiers live in disjoint types.
//! - Subjects are immutable after creation; tasks only change `completed`.

pub mod exam;
pub mod ids;
pub mod subject;
pub mod task;
