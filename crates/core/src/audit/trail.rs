//! Audit entries and the append-only trail that holds them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single audit event: who moved an entity from one state to another.
///
/// Entries are write-once. Once recorded they are never edited, reordered,
/// or pruned; insertion order is chronological order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the event was recorded.
    pub timestamp: DateTime<Utc>,
    /// Display name of the operator who performed the action.
    pub actor: String,
    /// State label before the action.
    pub from_state: String,
    /// State label after the action.
    pub to_state: String,
    /// Optional free-text note.
    pub note: Option<String>,
}

/// Ordered, append-only collection of audit entries.
///
/// The entry list is private: the only mutation this type offers is
/// [`AuditTrail::record`], so a trail can grow but never shrink or rewrite
/// history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrail {
    entries: Vec<AuditEntry>,
}

impl AuditTrail {
    /// Creates an empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current time.
    pub fn record(
        &mut self,
        actor: impl Into<String>,
        from_state: impl Into<String>,
        to_state: impl Into<String>,
        note: Option<String>,
    ) {
        self.entries.push(AuditEntry {
            timestamp: Utc::now(),
            actor: actor.into(),
            from_state: from_state.into(),
            to_state: to_state.into(),
            note,
        });
    }

    /// Returns the recorded entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Returns the most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&AuditEntry> {
        self.entries.last()
    }

    /// Returns the number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
