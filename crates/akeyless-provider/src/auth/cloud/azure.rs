//! Azure AD cloud identity
//!
//! Fetches a managed-identity access token from the Azure instance metadata
//! service; the cloud id is the base64-encoded token.

use super::{CloudIdError, CloudIdentity};
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Managed identity token endpoint of the Azure instance metadata service
pub const AZURE_IMDS_TOKEN_ENDPOINT: &str =
    "http://169.254.169.254/metadata/identity/oauth2/token";

const IMDS_API_VERSION: &str = "2018-02-01";
const MANAGEMENT_RESOURCE: &str = "https://management.azure.com/";

#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: Option<String>,
}

/// Cloud identity backed by the Azure instance metadata service
#[derive(Debug, Clone)]
pub struct AzureIdentity {
    endpoint: String,
    object_id: Option<String>,
}

impl AzureIdentity {
    pub fn new() -> Self {
        Self::with_endpoint(AZURE_IMDS_TOKEN_ENDPOINT)
    }

    /// Use a different token endpoint
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            object_id: None,
        }
    }

    /// Select a user-assigned managed identity by object ID
    pub fn with_object_id(mut self, object_id: impl Into<String>) -> Self {
        self.object_id = Some(object_id.into());
        self
    }

    fn token_url(&self) -> Result<Url, CloudIdError> {
        let mut params = vec![
            ("api-version", IMDS_API_VERSION),
            ("resource", MANAGEMENT_RESOURCE),
        ];
        if let Some(object_id) = &self.object_id {
            params.push(("object_id", object_id.as_str()));
        }
        Url::parse_with_params(&self.endpoint, &params)
            .map_err(|e| CloudIdError::Credentials(format!("invalid IMDS endpoint: {}", e)))
    }
}

impl Default for AzureIdentity {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CloudIdentity for AzureIdentity {
    async fn cloud_id(&self) -> Result<String, CloudIdError> {
        let url = self.token_url()?;
        debug!("Requesting managed identity token from {}", self.endpoint);

        let client = reqwest::Client::new();
        let response = client.get(url).header("Metadata", "true").send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CloudIdError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        let access_token = token
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or(CloudIdError::MissingToken)?;

        Ok(STANDARD.encode(access_token))
    }

    fn name(&self) -> &'static str {
        "azure_ad"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_url_params() {
        let url = AzureIdentity::new().token_url().unwrap();
        assert_eq!(url.host_str(), Some("169.254.169.254"));
        let query = url.query().unwrap();
        assert!(query.contains("api-version=2018-02-01"));
        assert!(query.contains("resource=https%3A%2F%2Fmanagement.azure.com%2F"));
        assert!(!query.contains("object_id"));
    }

    #[test]
    fn test_token_url_with_object_id() {
        let url = AzureIdentity::new()
            .with_object_id("obj-1")
            .token_url()
            .unwrap();
        assert!(url.query().unwrap().contains("object_id=obj-1"));
    }
}
