//! Login methods, credentials and sessions

use crate::security::SecureString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Environment variable holding the fallback access ID
pub const ACCESS_ID_ENV: &str = "AKEYLESS_ACCESS_ID";

/// Environment variable holding the fallback access key
pub const ACCESS_KEY_ENV: &str = "AKEYLESS_ACCESS_KEY";

/// Access type sent to the authentication endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessType {
    ApiKey,
    Password,
    AwsIam,
    AzureAd,
}

impl fmt::Display for AccessType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessType::ApiKey => write!(f, "api_key"),
            AccessType::Password => write!(f, "password"),
            AccessType::AwsIam => write!(f, "aws_iam"),
            AccessType::AzureAd => write!(f, "azure_ad"),
        }
    }
}

/// A login method chosen from configuration, before any cloud identity is fetched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginMethod {
    ApiKey {
        access_id: String,
        access_key: SecureString,
    },
    Password {
        email: String,
        password: SecureString,
    },
    AwsIam {
        access_id: String,
    },
    AzureAd {
        access_id: String,
    },
}

impl LoginMethod {
    pub fn access_type(&self) -> AccessType {
        match self {
            LoginMethod::ApiKey { .. } => AccessType::ApiKey,
            LoginMethod::Password { .. } => AccessType::Password,
            LoginMethod::AwsIam { .. } => AccessType::AwsIam,
            LoginMethod::AzureAd { .. } => AccessType::AzureAd,
        }
    }
}

/// A fully resolved credential, ready to be exchanged for a token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    ApiKey {
        access_id: String,
        access_key: SecureString,
    },
    Password {
        email: String,
        password: SecureString,
    },
    AwsIam {
        access_id: String,
        cloud_id: SecureString,
    },
    AzureAd {
        access_id: String,
        cloud_id: SecureString,
    },
}

impl Credential {
    pub fn access_type(&self) -> AccessType {
        match self {
            Credential::ApiKey { .. } => AccessType::ApiKey,
            Credential::Password { .. } => AccessType::Password,
            Credential::AwsIam { .. } => AccessType::AwsIam,
            Credential::AzureAd { .. } => AccessType::AzureAd,
        }
    }
}

/// Credentials captured from the process environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvCredentials {
    pub access_id: Option<String>,
    pub access_key: Option<SecureString>,
}

impl EnvCredentials {
    /// Capture `AKEYLESS_ACCESS_ID` and `AKEYLESS_ACCESS_KEY`, ignoring empty values
    pub fn from_env() -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());
        Self {
            access_id: read(ACCESS_ID_ENV),
            access_key: read(ACCESS_KEY_ENV).map(SecureString::from),
        }
    }

    /// Both halves of an API key, when the environment provides them
    pub fn api_key(&self) -> Option<(String, SecureString)> {
        match (&self.access_id, &self.access_key) {
            (Some(id), Some(key)) => Some((id.clone(), key.clone())),
            _ => None,
        }
    }
}

/// Bearer token obtained from the authentication endpoint
#[derive(Debug, Clone)]
pub struct Session {
    token: SecureString,
    access_type: AccessType,
}

impl Session {
    pub fn new(token: impl Into<SecureString>, access_type: AccessType) -> Self {
        Self {
            token: token.into(),
            access_type,
        }
    }

    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Login method the token was obtained with
    pub fn access_type(&self) -> AccessType {
        self.access_type
    }
}
