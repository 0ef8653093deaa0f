pub mod auth;
pub mod chat;
pub mod client;
pub mod fixture;
pub mod logging;

#[cfg(test)]
mod tests;

pub use auth::GoogleAuthService;
pub use chat::create_membership_for_group;
pub use fixture::PresentationFixture;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkspaceError {
    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Environment variable missing: {0}")]
    EnvVarMissing(String),

    #[error("Google API error: {0}")]
    GoogleApi(String),

    #[error("Token parse error: {0}")]
    TokenParse(String),
}
