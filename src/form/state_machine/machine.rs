//! Owns the form state and records every transition.

use std::collections::VecDeque;

use super::event::{FormEffect, FormEvent};
use super::reducer::FormState;
use super::transition::{TransitionError, TransitionLog};

const DEFAULT_MAX_LOG_SIZE: usize = 100;

/// Holds the current [`FormState`] and a bounded log of transitions.
pub struct FormMachine {
    state: FormState,
    event_log: VecDeque<TransitionLog>,
    max_log_size: usize,
}

impl FormMachine {
    pub fn new(initial_state: FormState) -> Self {
        Self {
            state: initial_state,
            event_log: VecDeque::with_capacity(DEFAULT_MAX_LOG_SIZE),
            max_log_size: DEFAULT_MAX_LOG_SIZE,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn event_log(&self) -> &VecDeque<TransitionLog> {
        &self.event_log
    }

    /// Handles an event and returns the effects the caller must run.
    ///
    /// On error the state is left unchanged and nothing is logged.
    pub fn handle_event(&mut self, event: FormEvent) -> Result<Vec<FormEffect>, TransitionError> {
        let event_type = event.event_type_name();
        let from = self.state.submission.clone();

        let update = self.state.clone().apply(event)?;
        self.state = update.state;

        self.event_log.push_back(TransitionLog::new(
            from,
            event_type,
            self.state.submission.clone(),
        ));
        while self.event_log.len() > self.max_log_size {
            self.event_log.pop_front();
        }

        Ok(update.effects)
    }

    /// Returns the number of transitions logged.
    pub fn log_size(&self) -> usize {
        self.event_log.len()
    }

    pub fn clear_log(&mut self) {
        self.event_log.clear();
    }
}

impl Default for FormMachine {
    fn default() -> Self {
        Self::new(FormState::new())
    }
}
