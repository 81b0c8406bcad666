//! # Action Log
//!
//! Append-only log of dispatched verdicts with a hash-chained state after
//! every entry.
//!
//! The log has its own lock so appends never wait on a reduction or on the
//! registry. Reads are by cursor: a cursor is honoured only if it is the
//! exact chain state recorded at its sequence.

use super::entities::LogEntry;
use super::value_objects::ActionState;
use parking_lot::RwLock;

/// Entries fetched past a cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LogSlice {
    /// Entries in append order.
    pub entries: Vec<LogEntry>,
    /// Chain state after the last fetched entry.
    pub end: ActionState,
    /// Entries left after `end`.
    pub remaining: u64,
}

#[derive(Debug, Default)]
struct LogInner {
    entries: Vec<LogEntry>,
    // states[i] is the chain state after i entries
    states: Vec<ActionState>,
}

/// Append-only action log.
#[derive(Debug)]
pub struct ActionLog {
    inner: RwLock<LogInner>,
}

impl ActionLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(LogInner {
                entries: Vec::new(),
                states: vec![ActionState::GENESIS],
            }),
        }
    }

    /// Append `entry` and return the new head.
    pub fn append(&self, entry: LogEntry) -> ActionState {
        let mut inner = self.inner.write();
        let head = inner.states.last().copied().unwrap_or(ActionState::GENESIS);
        let next = head.next(&entry);
        inner.entries.push(entry);
        inner.states.push(next);
        next
    }

    /// Chain state after the last entry.
    pub fn head(&self) -> ActionState {
        self.inner
            .read()
            .states
            .last()
            .copied()
            .unwrap_or(ActionState::GENESIS)
    }

    /// Number of entries ever appended.
    pub fn len(&self) -> u64 {
        self.inner.read().entries.len() as u64
    }

    /// Returns `true` if nothing was appended.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    /// Entries after `cursor`, at most `limit` of them.
    ///
    /// Returns `None` if `cursor` is not a state of this log.
    pub fn since(&self, cursor: &ActionState, limit: usize) -> Option<LogSlice> {
        let inner = self.inner.read();
        let start = usize::try_from(cursor.sequence).ok()?;
        if inner.states.get(start) != Some(cursor) {
            return None;
        }

        let end = start + limit.min(inner.entries.len() - start);
        Some(LogSlice {
            entries: inner.entries[start..end].to_vec(),
            end: inner.states[end],
            remaining: (inner.entries.len() - end) as u64,
        })
    }

    /// Number of entries after `cursor`, or `None` for a foreign cursor.
    pub fn pending_since(&self, cursor: &ActionState) -> Option<u64> {
        let inner = self.inner.read();
        let start = usize::try_from(cursor.sequence).ok()?;
        if inner.states.get(start) != Some(cursor) {
            return None;
        }
        Some((inner.entries.len() - start) as u64)
    }
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}
