//! Identifier types for the task store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique, monotonically assigned identifier for a stored task.
///
/// Identifiers are assigned by the store at append time and never reused;
/// clients never supply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(u64);

impl TaskId {
    /// Identifier assigned to the first record appended to an empty store.
    pub const FIRST: Self = Self(1);

    /// Creates a task identifier from a raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the identifier immediately after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Computes the identifier for the next appended record.
    ///
    /// One past the highest existing identifier, or [`TaskId::FIRST`] when
    /// no records exist. The rule is max-based rather than count-based: a
    /// store holding identifiers {1, 3, 5} assigns 6.
    #[must_use]
    pub fn next_after<I>(existing: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        existing.into_iter().max().map_or(Self::FIRST, Self::next)
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
