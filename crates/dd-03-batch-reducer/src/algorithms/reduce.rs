//! # Reduce
//!
//! Fold of log entries into the running maximum of valid message numbers.
//!
//! `max` is commutative and associative, so splitting a slice at any point
//! and folding the halves in turn yields the same result as one fold.

use crate::domain::LogEntry;

/// Initial accumulator for a reduction.
///
/// A fresh reduction starts from zero and replaces the stored aggregate.
pub fn initial_accumulator(stored: u64, continue_from_previous: bool) -> u64 {
    if continue_from_previous {
        stored
    } else {
        0
    }
}

/// Fold `entries` in append order; invalid entries leave the accumulator.
pub fn fold_entries(initial: u64, entries: &[LogEntry]) -> u64 {
    entries
        .iter()
        .filter(|entry| entry.is_valid)
        .fold(initial, |acc, entry| acc.max(entry.message_number))
}
