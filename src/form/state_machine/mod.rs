//! State machine for the registration form.
//!
//! # Architecture
//!
//! - **State** ([FormState]): draft, errors, [SubmissionState] and pending navigation
//! - **Events** ([FormEvent]): UpdateField, Submit, SubmissionSucceeded, SubmissionFailed
//! - **Effects** ([FormEffect]): SendCreateAccount, Navigate
//! - **Machine** ([FormMachine]): holds the state and a bounded transition log
//!
//! [FormState::apply] is a pure function `(state, event) -> (state, effects)`; all I/O
//! happens in [`crate::form::controller`].
//!
//! # Submission lifecycle
//!
//! ```text
//!            Submit (valid)              SubmissionSucceeded
//!  ┌──────┐ ─────────────> ┌────────────┐ ─────────────────> ┌───────────┐
//!  │ Idle │                │ Submitting │                    │ Succeeded │
//!  └──────┘                └────────────┘ ─────────────────> └───────────┘
//!     ▲                                   SubmissionFailed   ┌───────────┐
//!     │ Submit (invalid)                                     │  Failed   │
//!     └───────────────── from Idle / Succeeded / Failed      └───────────┘
//! ```
//!
//! Succeeded and Failed accept a new Submit. The draft is emptied on both.
//!
//! # Example
//!
//! ```rust
//! use registration_form::form::state_machine::{FormEvent, FormState, SubmissionState};
//!
//! let update = FormState::new().apply(FormEvent::Submit)?;
//!
//! // An empty draft never reaches the network.
//! assert!(update.effects.is_empty());
//! assert_eq!(update.state.submission, SubmissionState::Idle);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod event;
mod machine;
mod reducer;
mod state;
mod transition;

pub use event::{FormEffect, FormEvent, Route};
pub use machine::FormMachine;
pub use reducer::{FormState, Update};
pub use state::SubmissionState;
pub use transition::{TransitionError, TransitionLog};
