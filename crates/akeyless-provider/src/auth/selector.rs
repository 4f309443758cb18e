//! Login method selection
//!
//! Exactly one login method is chosen, by fixed priority:
//!
//! 1. an explicit `api_key_login` block
//! 2. `AKEYLESS_ACCESS_ID` + `AKEYLESS_ACCESS_KEY` from the environment
//! 3. `email_login`
//! 4. `aws_iam_login`
//! 5. `azure_ad_login`
//!
//! Anything else is a configuration error naming all supported methods.

use super::cloud::{CloudIdentities, CloudIdentity};
use akeyless_core::types::{Credential, EnvCredentials, LoginMethod, ProviderConfig};
use akeyless_core::{Error, Result, SecureString};
use tracing::debug;

/// Choose the login method for a validated configuration
pub fn select_login_method(config: &ProviderConfig, env: &EnvCredentials) -> Result<LoginMethod> {
    if let Some(login) = &config.api_key_login {
        return Ok(LoginMethod::ApiKey {
            access_id: login.access_id.clone(),
            access_key: login.access_key.clone(),
        });
    }

    if let Some((access_id, access_key)) = env.api_key() {
        debug!("Using API key credentials from the environment");
        return Ok(LoginMethod::ApiKey {
            access_id,
            access_key,
        });
    }

    if let Some(login) = &config.email_login {
        return Ok(LoginMethod::Password {
            email: login.admin_email.clone(),
            password: login.admin_password.clone(),
        });
    }

    if let Some(login) = &config.aws_iam_login {
        return Ok(LoginMethod::AwsIam {
            access_id: login.access_id.clone(),
        });
    }

    if let Some(login) = &config.azure_ad_login {
        return Ok(LoginMethod::AzureAd {
            access_id: login.access_id.clone(),
        });
    }

    Err(Error::NoLoginMethod)
}

/// Turn a login method into a credential, fetching a cloud id when needed
pub async fn resolve_credential(
    method: LoginMethod,
    identities: &CloudIdentities,
) -> Result<Credential> {
    let credential = match method {
        LoginMethod::ApiKey {
            access_id,
            access_key,
        } => Credential::ApiKey {
            access_id,
            access_key,
        },
        LoginMethod::Password { email, password } => Credential::Password { email, password },
        LoginMethod::AwsIam { access_id } => Credential::AwsIam {
            access_id,
            cloud_id: fetch_cloud_id(identities.aws.as_ref()).await?,
        },
        LoginMethod::AzureAd { access_id } => Credential::AzureAd {
            access_id,
            cloud_id: fetch_cloud_id(identities.azure.as_ref()).await?,
        },
    };
    Ok(credential)
}

async fn fetch_cloud_id(identity: &dyn CloudIdentity) -> Result<SecureString> {
    debug!("Fetching {} cloud identity", identity.name());
    identity
        .cloud_id()
        .await
        .map(SecureString::from)
        .map_err(|e| Error::authentication(format!("require Cloud ID: {}", e)))
}
