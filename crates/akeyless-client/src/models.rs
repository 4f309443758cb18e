//! Request and response bodies
//!
//! Request fields are kebab-case on the wire and omitted when unset.
//! Response fields are snake_case and every field is optional.

use akeyless_core::types::{AccessType, Credential};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── Authentication ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Auth {
    pub access_type: AccessType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_id: Option<String>,
}

impl Auth {
    fn empty(access_type: AccessType) -> Self {
        Self {
            access_type,
            access_id: None,
            access_key: None,
            admin_email: None,
            admin_password: None,
            cloud_id: None,
        }
    }
}

impl From<&Credential> for Auth {
    fn from(credential: &Credential) -> Self {
        let mut body = Auth::empty(credential.access_type());
        match credential {
            Credential::ApiKey {
                access_id,
                access_key,
            } => {
                body.access_id = Some(access_id.clone());
                body.access_key = Some(access_key.as_str().to_string());
            }
            Credential::Password { email, password } => {
                body.admin_email = Some(email.clone());
                body.admin_password = Some(password.as_str().to_string());
            }
            Credential::AwsIam {
                access_id,
                cloud_id,
            }
            | Credential::AzureAd {
                access_id,
                cloud_id,
            } => {
                body.access_id = Some(access_id.clone());
                body.cloud_id = Some(cloud_id.as_str().to_string());
            }
        }
        body
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthOutput {
    #[serde(default)]
    pub token: Option<String>,
}

// ─── Auth methods ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreateAuthMethodSaml {
    pub name: String,
    pub unique_identifier: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_expires: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_ips: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_sub_claims: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_metadata_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_redirect_uri: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAuthMethodOutput {
    #[serde(default)]
    pub access_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateAuthMethodSaml {
    pub name: String,
    pub unique_identifier: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_expires: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bound_ips: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_sub_claims: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idp_metadata_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_redirect_uri: Option<Vec<String>>,
}

/// Body shared by `get-auth-method` and `delete-auth-method`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct AuthMethodRef {
    pub name: String,
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthMethod {
    #[serde(default)]
    pub auth_method_name: Option<String>,
    #[serde(default)]
    pub auth_method_access_id: Option<String>,
    #[serde(default)]
    pub access_info: Option<AuthMethodAccessInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthMethodAccessInfo {
    #[serde(default)]
    pub access_expires: Option<i64>,
    #[serde(default)]
    pub force_sub_claims: Option<bool>,
    /// Comma-joined CIDR list
    #[serde(default)]
    pub cidr_whitelist: Option<String>,
    #[serde(default)]
    pub saml_access_rules: Option<SamlAccessRules>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SamlAccessRules {
    #[serde(default)]
    pub unique_identifier: Option<String>,
    #[serde(default)]
    pub idp_metadata_url: Option<String>,
    #[serde(default, rename = "allowed_redirect_URIs")]
    pub allowed_redirect_uris: Option<Vec<String>>,
}

// ─── Secrets and items ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreateSecret {
    pub name: String,
    pub value: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GetSecretValue {
    pub names: Vec<String>,
    pub token: String,
}

/// Secret values keyed by item name
pub type SecretValues = HashMap<String, serde_json::Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateSecretVal {
    pub name: String,
    pub value: String,
    pub token: String,
}

/// Body shared by `describe-item` and `delete-item`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ItemRef {
    pub name: String,
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub item_type: Option<String>,
    #[serde(default)]
    pub item_metadata: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GetDynamicSecretValue {
    pub name: String,
    pub token: String,
}

/// Freshly issued dynamic secret; the shape depends on the producer
pub type DynamicSecretValue = serde_json::Map<String, serde_json::Value>;

// ─── Roles ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreateRole {
    pub name: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct UpdateRole {
    pub name: String,
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_comment: Option<String>,
}

/// Body shared by `get-role` and `delete-role`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct RoleRef {
    pub name: String,
    pub token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub role_name: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

/// Wraps a value only when it differs from its type's zero value
///
/// Zero values (empty strings, `0`, `false`, empty lists) are left out of
/// request bodies so the server applies its own defaults.
pub fn non_zero<T: Default + PartialEq>(value: T) -> Option<T> {
    if value == T::default() {
        None
    } else {
        Some(value)
    }
}
