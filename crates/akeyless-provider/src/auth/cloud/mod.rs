//! Cloud identity fetchers
//!
//! AWS IAM and Azure AD logins prove the caller's cloud identity with a
//! signed blob ("cloud id") obtained from the cloud provider. Each fetcher
//! makes exactly one outbound call.

pub mod aws;
pub mod azure;

pub use aws::AwsIdentity;
pub use azure::AzureIdentity;

use async_trait::async_trait;
use thiserror::Error;

/// Failure to obtain a cloud identity
#[derive(Debug, Error)]
pub enum CloudIdError {
    #[error("failed to load cloud credentials: {0}")]
    Credentials(String),

    #[error("failed to sign identity request: {0}")]
    Signing(String),

    #[error("identity request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("identity endpoint rejected the request: {status} {body}")]
    Rejected { status: u16, body: String },

    #[error("failed to encode identity document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("identity endpoint returned no access token")]
    MissingToken,
}

/// Source of a base64-encoded cloud identity
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CloudIdentity: Send + Sync {
    /// Fetch a fresh cloud id
    async fn cloud_id(&self) -> Result<String, CloudIdError>;

    /// Identity provider name for logs
    fn name(&self) -> &'static str;
}

/// The cloud identity fetchers available to the login flow
pub struct CloudIdentities {
    pub aws: Box<dyn CloudIdentity>,
    pub azure: Box<dyn CloudIdentity>,
}

impl CloudIdentities {
    pub fn new(aws: Box<dyn CloudIdentity>, azure: Box<dyn CloudIdentity>) -> Self {
        Self { aws, azure }
    }
}

impl Default for CloudIdentities {
    fn default() -> Self {
        Self {
            aws: Box::new(AwsIdentity::new()),
            azure: Box::new(AzureIdentity::new()),
        }
    }
}
