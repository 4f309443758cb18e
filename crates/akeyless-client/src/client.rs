//! Akeyless API client
//!
//! Every operation is a single `POST {base}/{operation}` with a JSON body.
//! There is no retry and no timeout override: a call either returns the
//! decoded response, a structured [`ApiError::Api`] with the raw body, or a
//! transport/decode failure.

use crate::error::{ApiError, Result};
use crate::models::*;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

const USER_AGENT: &str = concat!("akeyless-provider/", env!("CARGO_PKG_VERSION"));

/// Client bound to one API gateway
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the given gateway address
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::Client)?;
        Ok(Self::with_http_client(base_url, http))
    }

    /// Create a client reusing an existing HTTP client
    pub fn with_http_client(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn call<B, T>(&self, operation: &'static str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/{}", self.base_url, operation);
        debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| ApiError::Transport { operation, source })?;

        if !status.is_success() {
            debug!("{} returned {}", operation, status);
            return Err(ApiError::Api {
                operation,
                status: status.as_u16(),
                body: text,
            });
        }

        let text = if text.trim().is_empty() { "{}" } else { text.as_str() };
        serde_json::from_str(text).map_err(|source| ApiError::Decode { operation, source })
    }

    pub async fn auth(&self, body: &Auth) -> Result<AuthOutput> {
        self.call("auth", body).await
    }

    pub async fn create_auth_method_saml(
        &self,
        body: &CreateAuthMethodSaml,
    ) -> Result<CreateAuthMethodOutput> {
        self.call("create-auth-method-saml", body).await
    }

    pub async fn get_auth_method(&self, body: &AuthMethodRef) -> Result<AuthMethod> {
        self.call("get-auth-method", body).await
    }

    pub async fn update_auth_method_saml(
        &self,
        body: &UpdateAuthMethodSaml,
    ) -> Result<serde_json::Value> {
        self.call("update-auth-method-saml", body).await
    }

    pub async fn delete_auth_method(&self, body: &AuthMethodRef) -> Result<serde_json::Value> {
        self.call("delete-auth-method", body).await
    }

    pub async fn create_secret(&self, body: &CreateSecret) -> Result<serde_json::Value> {
        self.call("create-secret", body).await
    }

    pub async fn get_secret_value(&self, body: &GetSecretValue) -> Result<SecretValues> {
        self.call("get-secret-value", body).await
    }

    pub async fn update_secret_val(&self, body: &UpdateSecretVal) -> Result<serde_json::Value> {
        self.call("update-secret-val", body).await
    }

    pub async fn describe_item(&self, body: &ItemRef) -> Result<Item> {
        self.call("describe-item", body).await
    }

    pub async fn get_dynamic_secret_value(
        &self,
        body: &GetDynamicSecretValue,
    ) -> Result<DynamicSecretValue> {
        self.call("get-dynamic-secret-value", body).await
    }

    pub async fn delete_item(&self, body: &ItemRef) -> Result<serde_json::Value> {
        self.call("delete-item", body).await
    }

    pub async fn create_role(&self, body: &CreateRole) -> Result<serde_json::Value> {
        self.call("create-role", body).await
    }

    pub async fn get_role(&self, body: &RoleRef) -> Result<Role> {
        self.call("get-role", body).await
    }

    pub async fn update_role(&self, body: &UpdateRole) -> Result<serde_json::Value> {
        self.call("update-role", body).await
    }

    pub async fn delete_role(&self, body: &RoleRef) -> Result<serde_json::Value> {
        self.call("delete-role", body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("https://api.akeyless.io/").unwrap();
        assert_eq!(client.base_url(), "https://api.akeyless.io");
    }
}
