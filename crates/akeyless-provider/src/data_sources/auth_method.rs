//! `akeyless_auth_method` data source

use super::DataSource;
use crate::provider::ProviderMeta;
use akeyless_client::models::AuthMethodRef;
use akeyless_core::{Attribute, ResourceData, ResourceSchema, Result};
use async_trait::async_trait;
use std::sync::OnceLock;

pub const TYPE_NAME: &str = "akeyless_auth_method";

static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();

pub fn schema() -> &'static ResourceSchema {
    SCHEMA.get_or_init(|| {
        ResourceSchema::new(
            TYPE_NAME,
            "Auth Method data source",
            vec![
                Attribute::string("path", "The path where the auth method is stored").required(),
                Attribute::string("access_id", "Auth Method access ID").computed_only(),
            ],
        )
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AuthMethodDataSource;

#[async_trait]
impl DataSource for AuthMethodDataSource {
    fn schema(&self) -> &'static ResourceSchema {
        schema()
    }

    async fn read(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let path = data.get_string("path");
        let method = meta
            .client()
            .get_auth_method(&AuthMethodRef {
                name: path.clone(),
                token: meta.token(),
            })
            .await
            .map_err(|e| e.into_core("can't get Auth Method"))?;

        if let Some(access_id) = method.auth_method_access_id {
            data.set("access_id", access_id)?;
        }
        data.set_id(path);
        Ok(())
    }
}
