//! Provider configuration types
//!
//! [`RawProviderConfig`] mirrors the configuration file, where every login
//! block is a list (host block semantics). [`RawProviderConfig::validate`]
//! turns it into a [`ProviderConfig`] holding at most one block per login
//! method, which is then handed explicitly to the configure step.

use crate::error::{Error, Result};
use crate::security::SecureString;
use crate::types::credential::{EnvCredentials, ACCESS_ID_ENV, ACCESS_KEY_ENV};
use serde::Deserialize;
use url::Url;

/// Public API gateway used when no address is configured
pub const DEFAULT_API_GATEWAY: &str = "https://api.akeyless.io";

/// Provider configuration as written in the configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawProviderConfig {
    /// Origin URL of the API gateway (scheme, host and port)
    #[serde(default)]
    pub api_gateway_address: Option<String>,

    #[serde(default)]
    pub api_key_login: Vec<ApiKeyLoginBlock>,

    #[serde(default)]
    pub email_login: Vec<EmailLoginBlock>,

    #[serde(default)]
    pub aws_iam_login: Vec<AccessIdLoginBlock>,

    #[serde(default)]
    pub azure_ad_login: Vec<AccessIdLoginBlock>,
}

/// `api_key_login` block; both fields fall back to the environment
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiKeyLoginBlock {
    #[serde(default)]
    pub access_id: Option<String>,
    #[serde(default)]
    pub access_key: Option<SecureString>,
}

/// `email_login` block
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailLoginBlock {
    pub admin_email: String,
    pub admin_password: SecureString,
}

/// `aws_iam_login` and `azure_ad_login` blocks
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccessIdLoginBlock {
    pub access_id: String,
}

/// Validated API key login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyLogin {
    pub access_id: String,
    pub access_key: SecureString,
}

/// Validated email/password login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailLogin {
    pub admin_email: String,
    pub admin_password: SecureString,
}

/// Validated provider configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    pub api_gateway_address: String,
    pub api_key_login: Option<ApiKeyLogin>,
    pub email_login: Option<EmailLogin>,
    pub aws_iam_login: Option<AccessIdLoginBlock>,
    pub azure_ad_login: Option<AccessIdLoginBlock>,
}

impl ProviderConfig {
    /// Configuration with only a gateway address and no login blocks
    pub fn new(api_gateway_address: impl Into<String>) -> Self {
        Self {
            api_gateway_address: api_gateway_address.into(),
            api_key_login: None,
            email_login: None,
            aws_iam_login: None,
            azure_ad_login: None,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_GATEWAY)
    }
}

impl RawProviderConfig {
    /// Validate block cardinality and resolve environment defaults
    ///
    /// Blocks are checked in declaration order and the first block type that
    /// appears more than once is reported. No network call happens here.
    pub fn validate(self, env: &EnvCredentials) -> Result<ProviderConfig> {
        let api_key_login = single_block("api_key_login", self.api_key_login)?;
        let email_login = single_block("email_login", self.email_login)?;
        let aws_iam_login = single_block("aws_iam_login", self.aws_iam_login)?;
        let azure_ad_login = single_block("azure_ad_login", self.azure_ad_login)?;

        let api_gateway_address = normalize_gateway(
            self.api_gateway_address
                .as_deref()
                .unwrap_or(DEFAULT_API_GATEWAY),
        )?;

        let api_key_login = api_key_login
            .map(|block| resolve_api_key(block, env))
            .transpose()?;

        let email_login = email_login.map(|block| EmailLogin {
            admin_email: block.admin_email,
            admin_password: block.admin_password,
        });

        Ok(ProviderConfig {
            api_gateway_address,
            api_key_login,
            email_login,
            aws_iam_login,
            azure_ad_login,
        })
    }
}

fn single_block<T>(block: &str, mut blocks: Vec<T>) -> Result<Option<T>> {
    if blocks.len() > 1 {
        return Err(Error::duplicate_login_block(block));
    }
    Ok(blocks.pop())
}

fn resolve_api_key(block: ApiKeyLoginBlock, env: &EnvCredentials) -> Result<ApiKeyLogin> {
    let access_id = block
        .access_id
        .filter(|v| !v.is_empty())
        .or_else(|| env.access_id.clone())
        .ok_or_else(|| {
            Error::invalid_config(format!(
                "api_key_login.access_id is required (or set {})",
                ACCESS_ID_ENV
            ))
        })?;
    let access_key = block
        .access_key
        .filter(|v| !v.is_empty())
        .or_else(|| env.access_key.clone())
        .ok_or_else(|| {
            Error::invalid_config(format!(
                "api_key_login.access_key is required (or set {})",
                ACCESS_KEY_ENV
            ))
        })?;

    Ok(ApiKeyLogin {
        access_id,
        access_key,
    })
}

fn normalize_gateway(address: &str) -> Result<String> {
    let url = Url::parse(address).map_err(|e| {
        Error::invalid_config(format!("invalid api_gateway_address '{}': {}", address, e))
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::invalid_config(format!(
            "api_gateway_address must use http or https, got '{}'",
            url.scheme()
        )));
    }
    Ok(address.trim_end_matches('/').to_string())
}
