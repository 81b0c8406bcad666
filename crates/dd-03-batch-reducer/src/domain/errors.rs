//! # Domain Errors

use super::value_objects::ActionState;
use shared_types::AccessError;
use thiserror::Error;

/// Batch reducer error types.
///
/// Message validity is not an error on the log path; only `validate_message`
/// raises `InvalidMessage`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReducerError {
    /// Admin gate rejected the caller.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// The caller's cursor no longer matches the stored cursor.
    #[error("Stale cursor: stored {expected}, observed {actual}")]
    StaleCursor {
        /// Stored cursor
        expected: ActionState,
        /// Cursor presented by the caller
        actual: ActionState,
    },

    /// The stored cursor is not a state of the action log.
    #[error("Cursor {cursor} is not part of the action log")]
    UnknownCursor {
        /// Offending cursor
        cursor: ActionState,
    },

    /// Message failed direct validation.
    #[error("Invalid message {message_number}")]
    InvalidMessage {
        /// Number of the rejected message
        message_number: u64,
    },
}
