//! Read-only views recomputed from planner state on every render.
//!
//! # Responsibility
//! - Project subjects onto a month calendar of exams.
//! - Aggregate daily task completion.
//!
//! # Invariants
//! - Projections never mutate planner state.

pub mod calendar;
pub mod progress;
