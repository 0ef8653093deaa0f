use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::WorkspaceError;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub access_token: String,
    pub expires_in: i32,
    pub refresh_token: Option<String>,
    pub scope: String,
    pub token_type: String,
}

/// Exchanges a refresh token for a short-lived access token. The scopes the
/// caller passes narrow what the resulting session may do; each snippet and
/// the test fixture declare the scopes they need next to their own code.
#[derive(Clone)]
pub struct GoogleAuthService {
    pub client: Client,
    pub google_client_id: String,
    pub google_client_secret: String,
}

impl GoogleAuthService {
    pub fn new(client_id: String, client_secret: String) -> Result<Self, WorkspaceError> {
        Ok(Self {
            client: Client::new(),
            google_client_id: client_id,
            google_client_secret: client_secret,
        })
    }

    pub async fn refresh_token(
        &self,
        refresh_token: &str,
        scopes: &[&str],
    ) -> Result<TokenResponse, WorkspaceError> {
        let payload = json!({
            "client_id": self.google_client_id,
            "client_secret": self.google_client_secret,
            "refresh_token": refresh_token,
            "grant_type": "refresh_token",
            "scope": scopes.join(" ")
        });

        self.exchange_token(&payload).await
    }

    async fn exchange_token(
        &self,
        payload: &serde_json::Value,
    ) -> Result<TokenResponse, WorkspaceError> {
        debug!("Token exchange payload: {:?}", payload);

        let response = self
            .client
            .post("https://oauth2.googleapis.com/token")
            .json(payload)
            .send()
            .await
            .map_err(|e| WorkspaceError::GoogleApi(e.to_string()))?;

        if !response.status().is_success() {
            let error = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(WorkspaceError::GoogleApi(error));
        }

        response
            .json::<TokenResponse>()
            .await
            .map_err(|e| WorkspaceError::TokenParse(e.to_string()))
    }
}
