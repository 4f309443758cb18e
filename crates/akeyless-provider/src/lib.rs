//! Akeyless provider
//!
//! This crate maps declarative resource blocks onto the Akeyless API:
//!
//! - Login method selection (API key, email, AWS IAM, Azure AD)
//! - Cloud identity fetchers for AWS IAM and Azure AD logins
//! - Token exchange against the `auth` endpoint
//! - Resource handlers: SAML auth methods, static secrets, roles
//! - Data sources: auth methods, static, generic and dynamic secrets, roles

pub mod auth;
pub mod data_sources;
pub mod provider;
pub mod resources;

pub use data_sources::DataSource;
pub use provider::{AkeylessProvider, ProviderMeta};
pub use resources::Resource;

use akeyless_core::{Error, Result};

/// Registered resource type names
pub const RESOURCE_TYPES: &[&str] = &[
    resources::auth_method_saml::TYPE_NAME,
    resources::static_secret::TYPE_NAME,
    resources::role::TYPE_NAME,
];

/// Registered data source type names
pub const DATA_SOURCE_TYPES: &[&str] = &[
    data_sources::static_secret::TYPE_NAME,
    data_sources::secret::TYPE_NAME,
    data_sources::auth_method::TYPE_NAME,
    data_sources::dynamic_secret::TYPE_NAME,
    data_sources::role::TYPE_NAME,
];

/// Create the handlers for a resource type
pub fn create_resource(type_name: &str) -> Result<Box<dyn Resource>> {
    match type_name {
        resources::auth_method_saml::TYPE_NAME => Ok(Box::new(resources::AuthMethodSamlResource)),
        resources::static_secret::TYPE_NAME => Ok(Box::new(resources::StaticSecretResource)),
        resources::role::TYPE_NAME => Ok(Box::new(resources::RoleResource)),
        other => Err(Error::unknown_resource_type(other)),
    }
}

/// Create the handler for a data source type
pub fn create_data_source(type_name: &str) -> Result<Box<dyn DataSource>> {
    match type_name {
        data_sources::auth_method::TYPE_NAME => Ok(Box::new(data_sources::AuthMethodDataSource)),
        data_sources::static_secret::TYPE_NAME => {
            Ok(Box::new(data_sources::StaticSecretDataSource))
        }
        data_sources::secret::TYPE_NAME => Ok(Box::new(data_sources::SecretDataSource)),
        data_sources::dynamic_secret::TYPE_NAME => {
            Ok(Box::new(data_sources::DynamicSecretDataSource))
        }
        data_sources::role::TYPE_NAME => Ok(Box::new(data_sources::RoleDataSource)),
        other => Err(Error::unknown_resource_type(other)),
    }
}
