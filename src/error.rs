use http::StatusCode;
use thiserror::Error;

use crate::form::state_machine::TransitionError;

/// The custom error type for the registration client.
///
/// Field-level validation problems are never raised through this type; they are
/// collected in [`crate::models::form::ValidationErrors`] instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A transport-level failure from reqwest (endpoint unreachable, connection reset, ...).
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The account endpoint answered with a non-success status.
    #[error("Error creating account")]
    Status(StatusCode),

    /// The draft could not be serialized into a request body.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The configured base URL or account path does not form a valid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The form rejected an event in its current submission state.
    #[error("{0}")]
    Transition(#[from] TransitionError),

    /// A field name that is not part of the registration form.
    #[error("Unknown field: {0}")]
    UnknownField(String),
}

/// A type alias for `Result<T, Error>` to simplify function signatures.
pub type Result<T> = std::result::Result<T, Error>;
