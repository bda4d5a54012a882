//! Switch history tracking.
//!
//! Every successful switch and every stop is recorded as an immutable
//! [`TransitionRecord`]. [`TransitionHistory::record`] returns a new history
//! and leaves the old one untouched; the machine appends in place through
//! [`TransitionHistory::push`] and keeps the history bounded.

use super::state::StateId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single switch.
///
/// `from` is `None` when the machine had no active state; `to` is `None`
/// when the machine was stopped.
///
/// # Example
///
/// ```rust
/// use modestack::core::{StateId, TransitionRecord};
/// use chrono::Utc;
///
/// let record = TransitionRecord {
///     from: None,
///     to: Some(StateId(1)),
///     timestamp: Utc::now(),
/// };
/// assert!(!record.is_stop());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// State that was current before the switch
    pub from: Option<StateId>,
    /// State that became current
    pub to: Option<StateId>,
    /// When the switch happened
    pub timestamp: DateTime<Utc>,
}

impl TransitionRecord {
    /// Record a switch happening now.
    pub fn now(from: Option<StateId>, to: Option<StateId>) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
        }
    }

    /// Whether this record marks the machine being stopped.
    pub fn is_stop(&self) -> bool {
        self.to.is_none()
    }
}

/// Ordered history of switches.
///
/// # Example
///
/// ```rust
/// use modestack::core::{StateId, TransitionHistory, TransitionRecord};
///
/// let history = TransitionHistory::new()
///     .record(TransitionRecord::now(None, Some(StateId(1))))
///     .record(TransitionRecord::now(Some(StateId(1)), Some(StateId(2))));
///
/// assert_eq!(history.path(), vec![None, Some(StateId(1)), Some(StateId(2))]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionHistory {
    records: VecDeque<TransitionRecord>,
}

impl TransitionHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
        }
    }

    /// Append `record` in place, dropping the oldest records beyond `limit`.
    pub fn push(&mut self, record: TransitionRecord, limit: Option<usize>) {
        self.records.push_back(record);
        if let Some(limit) = limit {
            self.truncate_front(limit);
        }
    }

    /// Drop the oldest records until at most `limit` remain.
    pub fn truncate_front(&mut self, limit: usize) {
        let excess = self.records.len().saturating_sub(limit);
        self.records.drain(..excess);
    }

    /// Record a switch, returning a new history.
    ///
    /// The existing history is not modified.
    pub fn record(&self, record: TransitionRecord) -> Self {
        let mut records = self.records.clone();
        records.push_back(record);
        Self { records }
    }

    /// Keep only the `limit` most recent records, returning a new history.
    pub fn retain_last(&self, limit: usize) -> Self {
        let skip = self.records.len().saturating_sub(limit);
        Self {
            records: self.records.iter().skip(skip).cloned().collect(),
        }
    }

    /// Sequence of current states traversed: the `from` of the first
    /// record, then the `to` of every record.
    pub fn path(&self) -> Vec<Option<StateId>> {
        let mut path = Vec::new();
        if let Some(first) = self.records.front() {
            path.push(first.from);
        }
        path.extend(self.records.iter().map(|record| record.to));
        path
    }

    /// Time between the first and last recorded switch.
    ///
    /// Returns `None` when the history is empty.
    pub fn duration(&self) -> Option<Duration> {
        match (self.records.front(), self.records.back()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }

    /// Records, oldest first.
    pub fn records(&self) -> &VecDeque<TransitionRecord> {
        &self.records
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.records.back()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
