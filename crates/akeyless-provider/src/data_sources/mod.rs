//! Read-only data sources

pub mod auth_method;
pub mod dynamic_secret;
pub mod role;
pub mod secret;
pub mod static_secret;

pub use auth_method::AuthMethodDataSource;
pub use dynamic_secret::DynamicSecretDataSource;
pub use role::RoleDataSource;
pub use secret::SecretDataSource;
pub use static_secret::StaticSecretDataSource;

use crate::provider::ProviderMeta;
use akeyless_core::{ResourceData, ResourceSchema, Result};
use async_trait::async_trait;

/// Read handler for one data source type
#[async_trait]
pub trait DataSource: Send + Sync {
    fn schema(&self) -> &'static ResourceSchema;

    fn type_name(&self) -> &'static str {
        self.schema().name
    }

    /// Look up the remote object and fill in computed attributes
    async fn read(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()>;
}
