//! Opaque identifiers for subjects and daily tasks.
//!
//! # Responsibility
//! - Allocate process-unique identifiers for every domain entity.
//! - Keep subject and task identifiers in disjoint types so one can never be
//!   passed where the other is expected.
//!
//! # Invariants
//! - Identifiers are random v4 UUIDs and are never reused.
//! - Serialized form is the hyphenated UUID string.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Allocates a fresh random identifier.
pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

/// Stable identifier of a [`Subject`](crate::model::subject::Subject).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubjectId(Uuid);

impl SubjectId {
    /// Allocates a new subject identifier.
    pub fn new() -> Self {
        Self(new_id())
    }

    /// Wraps an identifier that already exists externally.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses the hyphenated string form produced by `Display`.
    pub fn parse_str(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value.trim()).map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SubjectId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for SubjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a [`DailyTask`](crate::model::task::DailyTask).
///
/// Only stable within one regeneration epoch: every derivation allocates new
/// task identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Allocates a new task identifier.
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Parses the hyphenated string form produced by `Display`.
    pub fn parse_str(value: &str) -> Result<Self, uuid::Error> {
        Uuid::parse_str(value.trim()).map(Self)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
