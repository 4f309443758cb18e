//! Managed resources
//!
//! Each resource maps the create/read/update/delete/import lifecycle onto
//! remote API calls. The identity of every resource equals its configured
//! name (or path).

pub mod auth_method_saml;
pub mod role;
pub mod static_secret;

pub use auth_method_saml::AuthMethodSamlResource;
pub use role::RoleResource;
pub use static_secret::StaticSecretResource;

use crate::provider::ProviderMeta;
use akeyless_core::{Error, ResourceData, ResourceSchema, Result};
use async_trait::async_trait;

/// Lifecycle handlers for one resource type
#[async_trait]
pub trait Resource: Send + Sync {
    /// Attribute declarations for this resource
    fn schema(&self) -> &'static ResourceSchema;

    /// Registered type name
    fn type_name(&self) -> &'static str {
        self.schema().name
    }

    /// Create the remote object and set the identity
    async fn create(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()>;

    /// Refresh attributes from the remote object
    ///
    /// A remote "not found" clears the identity and succeeds.
    async fn read(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()>;

    /// Push configured attributes to the remote object
    async fn update(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()>;

    /// Delete the remote object; errors are surfaced unmodified
    async fn delete(&self, meta: &ProviderMeta, data: &ResourceData) -> Result<()>;

    /// Adopt an existing remote object by identity
    ///
    /// Only verifies existence and seeds the identity attribute; call
    /// [`Resource::read`] afterwards to hydrate the rest.
    async fn import(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()>;
}

/// Identity of a resource that must already exist
pub(crate) fn require_id(data: &ResourceData) -> Result<String> {
    data.id()
        .map(str::to_string)
        .ok_or_else(|| Error::invalid_config(format!("{} has no identity", data.resource_type())))
}
