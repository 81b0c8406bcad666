//! # Value Objects
//!
//! The action-state cursor.
//!
//! ## Hash Chain
//!
//! ```text
//! state_0     = (0, [0; 32])
//! state_{n+1} = (n + 1, BLAKE3(digest_n || is_valid || message_number_be))
//! ```
//!
//! Two logs of equal length share a cursor only if they hold the same
//! entries in the same order.

use super::entities::LogEntry;
use serde::{Deserialize, Serialize};
use shared_crypto::blake3_hash_many;
use shared_types::Hash;
use std::fmt;

/// Marker delimiting the log entries already folded into the aggregate.
///
/// Opaque to callers; compared by equality only.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActionState {
    /// Number of entries covered.
    pub sequence: u64,
    /// Chain digest over those entries.
    pub digest: Hash,
}

impl ActionState {
    /// State of an empty log.
    pub const GENESIS: Self = Self {
        sequence: 0,
        digest: [0u8; 32],
    };

    /// State after appending `entry`.
    pub fn next(&self, entry: &LogEntry) -> Self {
        let digest = blake3_hash_many(&[
            &self.digest[..],
            &[u8::from(entry.is_valid)][..],
            &entry.message_number.to_be_bytes()[..],
        ]);
        Self {
            sequence: self.sequence + 1,
            digest,
        }
    }
}

impl fmt::Debug for ActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActionState(#{}, {:02x}{:02x}..)", self.sequence, self.digest[0], self.digest[1])
    }
}

impl fmt::Display for ActionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
