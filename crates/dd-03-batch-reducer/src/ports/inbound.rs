//! # Inbound Ports
//!
//! API trait defining what the batch reducer can do.

use crate::domain::{ActionState, ReduceOutcome, ReducerError, ReducerState, SecretMessage};
use shared_types::CallerId;

/// Batch Messages API - inbound port.
///
/// Every call except `set_admin` is gated on the bootstrapped admin.
pub trait BatchMessagesApi: Send + Sync {
    /// Bootstrap the admin identity. Succeeds exactly once.
    fn set_admin(&self, credential: &CallerId) -> Result<(), ReducerError>;

    /// Record the verdict for `message` in the action log.
    ///
    /// An invalid message is still appended, with `is_valid = false`.
    /// Returns the log head after the append.
    fn dispatch(
        &self,
        caller: &CallerId,
        message: &SecretMessage,
        prev_message_number: u64,
    ) -> Result<ActionState, ReducerError>;

    /// Fold pending log entries into the aggregate.
    ///
    /// With `continue_from_previous = false` the fold starts from zero and
    /// replaces the stored aggregate.
    fn run_reduce(
        &self,
        caller: &CallerId,
        continue_from_previous: bool,
    ) -> Result<ReduceOutcome, ReducerError>;

    /// `run_reduce` that first checks `observed` against the stored cursor.
    fn run_reduce_at(
        &self,
        caller: &CallerId,
        observed: &ActionState,
        continue_from_previous: bool,
    ) -> Result<ReduceOutcome, ReducerError>;

    /// Directly set the aggregate from one message.
    ///
    /// Accepts agent zero or a structurally sound message; anything else
    /// fails with `InvalidMessage`. Returns the new aggregate.
    fn validate_message(
        &self,
        caller: &CallerId,
        message: &SecretMessage,
    ) -> Result<u64, ReducerError>;

    /// Snapshot of the persisted state.
    fn state(&self) -> ReducerState;

    /// Entries dispatched but not yet folded.
    ///
    /// `0` if the stored cursor is not part of the log; `run_reduce` then
    /// fails with `UnknownCursor`.
    fn pending_actions(&self) -> u64;

    /// Entries ever dispatched.
    fn action_count(&self) -> u64;
}
