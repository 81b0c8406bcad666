//! # Message Validation
//!
//! Structural checks plus the two escape hatches.
//!
//! ## Precedence
//!
//! ```text
//! is_valid = duplicate ∨ agent_zero ∨ (range ∧ checksum)
//! ```
//!
//! Either escape hatch passes the message whatever its fields hold.

use super::entities::SecretMessage;
use std::ops::RangeInclusive;

/// Accepted agent identifiers.
pub const AGENT_ID_RANGE: RangeInclusive<i64> = 0..=3000;

/// Accepted X coordinates.
pub const X_RANGE: RangeInclusive<i64> = 0..=15000;

/// Accepted Y coordinates. Y must also exceed X.
pub const Y_RANGE: RangeInclusive<i64> = 5000..=20000;

/// Field ranges and `y > x`.
pub fn range_check(agent_id: i64, x: i64, y: i64) -> bool {
    AGENT_ID_RANGE.contains(&agent_id) && X_RANGE.contains(&x) && Y_RANGE.contains(&y) && y > x
}

/// `check_sum == agent_id + x + y`, evaluated without overflow.
pub fn checksum_check(agent_id: i64, x: i64, y: i64, check_sum: i64) -> bool {
    i128::from(check_sum) == i128::from(agent_id) + i128::from(x) + i128::from(y)
}

/// Range and checksum both hold.
pub fn structurally_ok(message: &SecretMessage) -> bool {
    range_check(message.agent_id, message.agent_x_location, message.agent_y_location)
        && checksum_check(
            message.agent_id,
            message.agent_x_location,
            message.agent_y_location,
            message.check_sum,
        )
}

/// Log-path verdict for `message` given the caller's previous number.
pub fn is_valid(message: &SecretMessage, prev_message_number: u64) -> bool {
    let duplicate = message.message_number <= prev_message_number;
    let agent_zero = message.agent_id == 0;
    duplicate || agent_zero || structurally_ok(message)
}

/// Direct-write verdict: agent zero or structurally sound.
pub fn is_acceptable(message: &SecretMessage) -> bool {
    message.agent_id == 0 || structurally_ok(message)
}
