//! Repository layer abstractions for subject storage.
//!
//! # Responsibility
//! - Define the data access contract the subject registry depends on.
//! - Keep storage details out of registry and planner orchestration.
//!
//! # Invariants
//! - Storage is append-only; subjects are never updated or removed.
//! - Listing preserves insertion order.

pub mod subject_repo;
