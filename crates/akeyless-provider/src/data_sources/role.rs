//! `akeyless_role` data source

use super::DataSource;
use crate::provider::ProviderMeta;
use akeyless_client::models::RoleRef;
use akeyless_core::{Attribute, ResourceData, ResourceSchema, Result};
use async_trait::async_trait;
use std::sync::OnceLock;

pub const TYPE_NAME: &str = "akeyless_role";

static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();

pub fn schema() -> &'static ResourceSchema {
    SCHEMA.get_or_init(|| {
        ResourceSchema::new(
            TYPE_NAME,
            "Role data source",
            vec![
                Attribute::string("name", "Role name").required(),
                Attribute::string("comment", "Comment about the role").computed_only(),
            ],
        )
    })
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RoleDataSource;

#[async_trait]
impl DataSource for RoleDataSource {
    fn schema(&self) -> &'static ResourceSchema {
        schema()
    }

    async fn read(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let name = data.get_string("name");
        let role = meta
            .client()
            .get_role(&RoleRef {
                name: name.clone(),
                token: meta.token(),
            })
            .await
            .map_err(|e| e.into_core("can't get Role value"))?;

        if let Some(comment) = role.comment {
            data.set("comment", comment)?;
        }
        data.set_id(name);
        Ok(())
    }
}
