//! `akeyless_static_secret` data source

use super::DataSource;
use crate::provider::ProviderMeta;
use crate::resources::static_secret::{fetch_value, require_value};
use akeyless_core::{Attribute, ResourceData, ResourceSchema, Result};
use async_trait::async_trait;
use std::sync::OnceLock;

pub const TYPE_NAME: &str = "akeyless_static_secret";

static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();

pub fn schema() -> &'static ResourceSchema {
    SCHEMA.get_or_init(|| {
        ResourceSchema::new(
            TYPE_NAME,
            "Static secret data source",
            vec![
                Attribute::string("path", "The path where the secret is stored").required(),
                Attribute::string("value", "The secret contents")
                    .computed_only()
                    .sensitive(),
            ],
        )
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSecretDataSource;

#[async_trait]
impl DataSource for StaticSecretDataSource {
    fn schema(&self) -> &'static ResourceSchema {
        schema()
    }

    async fn read(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let path = data.get_string("path");
        let value = fetch_value(meta, &path)
            .await
            .map_err(|e| e.into_core("can't get Secret value"))?;

        data.set("value", require_value(&path, value)?)?;
        data.set_id(path);
        Ok(())
    }
}
