pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod services;
pub mod validation;

pub use config::Config;
pub use error::{Error, Result};
pub use form::{RegistrationController, SubmitOutcome};
pub use models::{DraftAccount, Field};
pub use services::{HttpAccountClient, HistoryNavigator};

/// Load configuration from environment variables
pub fn load_config() -> Result<Config> {
    Ok(Config::load()?)
}

/// Builds a controller wired to the configured HTTP endpoint.
pub fn http_controller(
    config: &Config,
) -> Result<RegistrationController<HttpAccountClient, HistoryNavigator>> {
    let api = HttpAccountClient::new(&config.api)?;
    Ok(RegistrationController::new(
        api,
        HistoryNavigator::new(),
        config.navigation.clone(),
    ))
}
