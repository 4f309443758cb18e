//! `akeyless_dynamic_secret` data source

use super::DataSource;
use crate::provider::ProviderMeta;
use akeyless_client::models::GetDynamicSecretValue;
use akeyless_core::{Attribute, ResourceData, ResourceSchema, Result};
use async_trait::async_trait;
use std::sync::OnceLock;
use tracing::debug;

pub const TYPE_NAME: &str = "akeyless_dynamic_secret";

static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();

pub fn schema() -> &'static ResourceSchema {
    SCHEMA.get_or_init(|| {
        ResourceSchema::new(
            TYPE_NAME,
            "Dynamic secret data source",
            vec![
                Attribute::string("path", "The path where the dynamic secret is stored")
                    .required(),
                Attribute::string("value", "Issued credentials as a JSON object")
                    .computed_only()
                    .sensitive(),
            ],
        )
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DynamicSecretDataSource;

#[async_trait]
impl DataSource for DynamicSecretDataSource {
    fn schema(&self) -> &'static ResourceSchema {
        schema()
    }

    /// Every read issues a new set of credentials
    async fn read(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let path = data.get_string("path");
        let issued = meta
            .client()
            .get_dynamic_secret_value(&GetDynamicSecretValue {
                name: path.clone(),
                token: meta.token(),
            })
            .await
            .map_err(|e| e.into_core("can't get Dynamic Secret value"))?;

        debug!("Dynamic secret {} issued {} fields", path, issued.len());
        data.set("value", serde_json::to_string(&issued)?)?;
        data.set_id(path);
        Ok(())
    }
}
