//! # Reducer Configuration

use serde::{Deserialize, Serialize};

/// Default number of log entries folded per reduce call.
pub const DEFAULT_MAX_ACTIONS_PER_REDUCE: usize = 1024;

/// Batch reducer configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReducerConfig {
    /// Upper bound on entries folded by one reduce call. `0` is treated as `1`.
    pub max_actions_per_reduce: usize,
}

impl Default for ReducerConfig {
    fn default() -> Self {
        Self {
            max_actions_per_reduce: DEFAULT_MAX_ACTIONS_PER_REDUCE,
        }
    }
}

impl ReducerConfig {
    /// Create a config for testing (tiny budget, forces split batches).
    pub fn for_testing() -> Self {
        Self {
            max_actions_per_reduce: 2,
        }
    }

    /// Budget actually applied.
    pub fn effective_budget(&self) -> usize {
        self.max_actions_per_reduce.max(1)
    }
}
