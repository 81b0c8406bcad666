//! # Domain Entities
//!
//! Messages, log entries, the persisted aggregate, and reducer events.

use super::value_objects::ActionState;
use serde::{Deserialize, Serialize};
use shared_types::AccessGate;

/// A submitted agent message.
///
/// Coordinates are signed so that out-of-range negatives are representable
/// and rejected by the range check rather than by parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretMessage {
    /// Sequence number assigned by the sender.
    pub message_number: u64,
    /// Agent identifier. `0` is the unconditional escape hatch.
    pub agent_id: i64,
    /// X coordinate.
    pub agent_x_location: i64,
    /// Y coordinate.
    pub agent_y_location: i64,
    /// Claimed `agent_id + x + y`.
    pub check_sum: i64,
}

impl SecretMessage {
    /// Build a message whose checksum is correct for its fields.
    pub fn with_valid_checksum(message_number: u64, agent_id: i64, x: i64, y: i64) -> Self {
        Self {
            message_number,
            agent_id,
            agent_x_location: x,
            agent_y_location: y,
            check_sum: agent_id.wrapping_add(x).wrapping_add(y),
        }
    }
}

/// One appended log record. Only the verdict and number are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Validator verdict at dispatch time.
    pub is_valid: bool,
    /// Number of the dispatched message.
    pub message_number: u64,
}

/// Persisted aggregate of the batch reducer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducerState {
    /// Highest valid message number folded so far.
    pub message_number: u64,
    /// Log position already folded.
    pub cursor: ActionState,
    /// One-time admin identity.
    pub gate: AccessGate,
}

/// Result of one reduce invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReduceOutcome {
    /// Aggregate after the fold.
    pub message_number: u64,
    /// Cursor after the fold.
    pub cursor: ActionState,
    /// Entries folded by this call.
    pub folded: u64,
    /// Entries still pending after this call.
    pub pending: u64,
}

/// Events published by the batch reducer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReducerEvent {
    /// A slice of the log was folded.
    BatchReduced {
        /// Aggregate after the fold.
        message_number: u64,
        /// Entries folded.
        folded: u64,
        /// Entries still pending.
        pending: u64,
    },
    /// A message passed direct validation and set the aggregate.
    MessageValidated {
        /// New aggregate.
        message_number: u64,
    },
}
