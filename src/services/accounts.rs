use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::config::ApiConfig;
use crate::error::{Error, Result};
use crate::models::DraftAccount;

/// Creates accounts on the remote service.
#[async_trait]
pub trait AccountApi: Send + Sync {
    /// Sends one account-creation request for the draft.
    ///
    /// Returns `Ok(())` only for a success status. No retry is attempted.
    async fn create_account(&self, draft: &DraftAccount) -> Result<()>;
}

/// reqwest-backed [`AccountApi`] posting JSON to the configured endpoint.
#[derive(Debug, Clone)]
pub struct HttpAccountClient {
    client: Client,
    endpoint: Url,
}

impl HttpAccountClient {
    /// Builds a client for the endpoint described by `config`.
    ///
    /// No request timeout is configured: a request runs until the server answers
    /// or the connection fails.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let endpoint = config.account_url()?;
        let client = Client::builder()
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AccountApi for HttpAccountClient {
    async fn create_account(&self, draft: &DraftAccount) -> Result<()> {
        // Serialize up front so a bad payload is reported as such rather than as a transport error.
        let body = serde_json::to_vec(draft)?;

        tracing::debug!(endpoint = %self.endpoint, bytes = body.len(), "Posting account draft");

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint = %self.endpoint, %status, "Account endpoint rejected the draft");
            return Err(Error::Status(status));
        }

        tracing::debug!(endpoint = %self.endpoint, %status, "Account endpoint accepted the draft");
        Ok(())
    }
}
