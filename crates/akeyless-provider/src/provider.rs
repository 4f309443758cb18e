//! Provider configuration
//!
//! Configuring the provider selects a login method, resolves any cloud
//! identity, exchanges the credential for a session token and returns the
//! [`ProviderMeta`] every resource operation borrows.

use crate::auth::{exchange_token, resolve_credential, select_login_method, CloudIdentities};
use akeyless_client::ApiClient;
use akeyless_core::types::{AccessType, EnvCredentials, ProviderConfig, Session};
use akeyless_core::{Error, Result};
use tracing::{debug, info};

/// Configured API client plus the session token shared by all operations
#[derive(Debug, Clone)]
pub struct ProviderMeta {
    client: ApiClient,
    session: Session,
}

impl ProviderMeta {
    pub fn new(client: ApiClient, session: Session) -> Self {
        Self { client, session }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Session token sent with every request
    pub fn token(&self) -> String {
        self.session.token().to_string()
    }

    pub fn access_type(&self) -> AccessType {
        self.session.access_type()
    }
}

/// The Akeyless provider
pub struct AkeylessProvider {
    identities: CloudIdentities,
}

impl AkeylessProvider {
    /// Provider using the real AWS and Azure identity fetchers
    pub fn new() -> Self {
        Self::with_cloud_identities(CloudIdentities::default())
    }

    pub fn with_cloud_identities(identities: CloudIdentities) -> Self {
        Self { identities }
    }

    /// Authenticate against the configured gateway
    pub async fn configure(
        &self,
        config: &ProviderConfig,
        env: &EnvCredentials,
    ) -> Result<ProviderMeta> {
        let method = select_login_method(config, env)?;
        debug!("Selected login method {}", method.access_type());

        let credential = resolve_credential(method, &self.identities).await?;

        let client = ApiClient::new(&config.api_gateway_address)
            .map_err(|e| Error::transport("failed to create API client", e.to_string()))?;
        let session = exchange_token(&client, &credential).await?;

        info!("Provider configured for {}", config.api_gateway_address);
        Ok(ProviderMeta::new(client, session))
    }
}

impl Default for AkeylessProvider {
    fn default() -> Self {
        Self::new()
    }
}
