pub mod draft;
pub mod form;

pub use draft::{DraftAccount, Field};
pub use form::{FormErrors, ValidationErrors};
