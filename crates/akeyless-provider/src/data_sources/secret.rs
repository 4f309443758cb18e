//! `akeyless_secret` data source
//!
//! Reads the value of any item `get-secret-value` can resolve, not only
//! static secrets.

use super::DataSource;
use crate::provider::ProviderMeta;
use crate::resources::static_secret::{fetch_value, require_value};
use akeyless_core::{Attribute, ResourceData, ResourceSchema, Result};
use async_trait::async_trait;
use std::sync::OnceLock;

pub const TYPE_NAME: &str = "akeyless_secret";

static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();

pub fn schema() -> &'static ResourceSchema {
    SCHEMA.get_or_init(|| {
        ResourceSchema::new(
            TYPE_NAME,
            "Secret data source",
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
pub struct SecretDataSource;

#[async_trait]
impl DataSource for SecretDataSource {
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
