use serde::{Deserialize, Serialize};
use url::Url;

use std::fmt;

use crate::error::Result;
use crate::form::state_machine::Route;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    pub api: ApiConfig,
    pub navigation: NavigationConfig,
}

/// Where the account-creation request is sent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub account_path: String,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NavigationConfig {
    /// Route the operator is sent to once the account exists.
    pub authentication_route: String,
}

impl Config {
    /// Load configuration from environment variables, with defaults.
    pub fn load() -> std::result::Result<Self, config::ConfigError> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&Self::default())?)
            // Override with environment variables using `REGISTRATION__` prefix and `__` separator
            // e.g., REGISTRATION__API__BASE_URL="http://accounts.internal:8080"
            .add_source(
                config::Environment::with_prefix("REGISTRATION")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl ApiConfig {
    /// Full URL of the account-creation endpoint.
    pub fn account_url(&self) -> Result<Url> {
        let base = Url::parse(&self.base_url)?;
        Ok(base.join(&self.account_path)?)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            account_path: "/api/client".to_string(),
            user_agent: "registration-form/0.1".to_string(),
        }
    }
}

impl NavigationConfig {
    /// Path the navigator is given for a route.
    pub fn path_for(&self, route: Route) -> &str {
        match route {
            Route::Authentication => &self.authentication_route,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            authentication_route: "/Authentification".to_string(),
        }
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string_pretty(&self) {
            Ok(json) => write!(f, "{}", json),
            Err(_) => write!(f, "Error serializing config"),
        }
    }
}
