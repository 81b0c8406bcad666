//! # Batch Messages Service
//!
//! Application service for the log path and the direct validation path.
//!
//! ## Locking
//!
//! The aggregate and the action log sit behind separate locks. `dispatch`
//! takes a read lock on the aggregate only to check the gate, so it waits
//! while a reduction holds the write lock. The append itself only takes the
//! log lock. Reductions hold the aggregate write lock for their whole
//! duration, which serializes them against each other.

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use crate::algorithms::{fold_entries, initial_accumulator};
use crate::config::ReducerConfig;
use crate::domain::{
    is_acceptable, is_valid, ActionLog, ActionState, LogEntry, ReduceOutcome, ReducerError,
    ReducerEvent, ReducerState, SecretMessage,
};
use crate::ports::{BatchMessagesApi, ReducerEventPublisher};
use shared_types::CallerId;

/// Batch Messages Service - append-only log plus resumable fold.
pub struct BatchMessagesService<P: ReducerEventPublisher> {
    /// Configuration.
    config: ReducerConfig,
    /// Persisted aggregate.
    state: RwLock<ReducerState>,
    /// Dispatched verdicts.
    log: ActionLog,
    /// Event sink.
    publisher: P,
}

impl<P: ReducerEventPublisher> BatchMessagesService<P> {
    /// Create a service with an empty log and no admin.
    pub fn new(config: ReducerConfig, publisher: P) -> Self {
        Self::with_state(config, ReducerState::default(), ActionLog::new(), publisher)
    }

    /// Resume from a persisted aggregate and its log.
    pub fn with_state(config: ReducerConfig, state: ReducerState, log: ActionLog, publisher: P) -> Self {
        Self {
            config,
            state: RwLock::new(state),
            log,
            publisher,
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &ReducerConfig {
        &self.config
    }

    /// Current cursor.
    pub fn cursor(&self) -> ActionState {
        self.state.read().cursor
    }

    /// Fold the next slice into `state`. Caller holds the write lock and
    /// has already authorized.
    fn reduce_locked(
        &self,
        state: &mut ReducerState,
        continue_from_previous: bool,
    ) -> Result<ReduceOutcome, ReducerError> {
        let slice = self
            .log
            .since(&state.cursor, self.config.effective_budget())
            .ok_or(ReducerError::UnknownCursor {
                cursor: state.cursor,
            })?;

        let initial = initial_accumulator(state.message_number, continue_from_previous);
        let message_number = fold_entries(initial, &slice.entries);
        let folded = slice.entries.len() as u64;

        state.message_number = message_number;
        state.cursor = slice.end;

        info!(
            message_number,
            folded,
            pending = slice.remaining,
            continue_from_previous,
            cursor = %slice.end,
            "Batch reduced"
        );
        self.publisher.publish(ReducerEvent::BatchReduced {
            message_number,
            folded,
            pending: slice.remaining,
        });

        Ok(ReduceOutcome {
            message_number,
            cursor: slice.end,
            folded,
            pending: slice.remaining,
        })
    }
}

impl<P: ReducerEventPublisher> BatchMessagesApi for BatchMessagesService<P> {
    fn set_admin(&self, credential: &CallerId) -> Result<(), ReducerError> {
        let mut state = self.state.write();
        state.gate.set_admin(credential)?;
        info!(caller = ?credential, "Reducer admin set");
        Ok(())
    }

    fn dispatch(
        &self,
        caller: &CallerId,
        message: &SecretMessage,
        prev_message_number: u64,
    ) -> Result<ActionState, ReducerError> {
        self.state.read().gate.authorize(caller)?;

        let entry = LogEntry {
            is_valid: is_valid(message, prev_message_number),
            message_number: message.message_number,
        };
        let head = self.log.append(entry);

        debug!(
            message_number = entry.message_number,
            is_valid = entry.is_valid,
            head = %head,
            "Action dispatched"
        );
        Ok(head)
    }

    fn run_reduce(
        &self,
        caller: &CallerId,
        continue_from_previous: bool,
    ) -> Result<ReduceOutcome, ReducerError> {
        let mut state = self.state.write();
        state.gate.authorize(caller)?;
        self.reduce_locked(&mut state, continue_from_previous)
    }

    fn run_reduce_at(
        &self,
        caller: &CallerId,
        observed: &ActionState,
        continue_from_previous: bool,
    ) -> Result<ReduceOutcome, ReducerError> {
        let mut state = self.state.write();
        state.gate.authorize(caller)?;

        if *observed != state.cursor {
            warn!(stored = %state.cursor, observed = %observed, "Reduce rejected: stale cursor");
            return Err(ReducerError::StaleCursor {
                expected: state.cursor,
                actual: *observed,
            });
        }
        self.reduce_locked(&mut state, continue_from_previous)
    }

    fn validate_message(
        &self,
        caller: &CallerId,
        message: &SecretMessage,
    ) -> Result<u64, ReducerError> {
        let mut state = self.state.write();
        state.gate.authorize(caller)?;

        if !is_acceptable(message) {
            warn!(message_number = message.message_number, "Message rejected");
            return Err(ReducerError::InvalidMessage {
                message_number: message.message_number,
            });
        }

        state.message_number = message.message_number;
        info!(message_number = message.message_number, "Message validated");
        self.publisher.publish(ReducerEvent::MessageValidated {
            message_number: message.message_number,
        });
        Ok(message.message_number)
    }

    fn state(&self) -> ReducerState {
        self.state.read().clone()
    }

    fn pending_actions(&self) -> u64 {
        let cursor = self.state.read().cursor;
        match self.log.pending_since(&cursor) {
            Some(pending) => pending,
            None => {
                warn!(cursor = %cursor, "Stored cursor is not part of the action log");
                0
            }
        }
    }

    fn action_count(&self) -> u64 {
        self.log.len()
    }
}
