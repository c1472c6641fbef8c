pub mod controller;
pub mod state_machine;
pub mod view;

pub use controller::{RegistrationController, SubmitOutcome};
pub use view::{FormView, SubmitButton};
