//! `akeyless_role`

use super::{require_id, Resource};
use crate::provider::ProviderMeta;
use akeyless_client::models::{non_zero, CreateRole, RoleRef, UpdateRole};
use akeyless_core::{Attribute, Error, ResourceData, ResourceSchema, Result};
use async_trait::async_trait;
use std::sync::OnceLock;
use tracing::{info, warn};

pub const TYPE_NAME: &str = "akeyless_role";

static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();

pub fn schema() -> &'static ResourceSchema {
    SCHEMA.get_or_init(|| {
        ResourceSchema::new(
            TYPE_NAME,
            "Role Resource",
            vec![
                Attribute::string("name", "Role name").required().force_new(),
                Attribute::string("comment", "Comment about the role"),
            ],
        )
    })
}

/// Handlers for roles
#[derive(Debug, Default, Clone, Copy)]
pub struct RoleResource;

#[async_trait]
impl Resource for RoleResource {
    fn schema(&self) -> &'static ResourceSchema {
        schema()
    }

    async fn create(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let name = data.get_string("name");
        let body = CreateRole {
            name: name.clone(),
            token: meta.token(),
            comment: non_zero(data.get_string("comment")),
        };

        meta.client()
            .create_role(&body)
            .await
            .map_err(|e| e.into_core("can't create Role"))?;

        data.set_id(name.as_str());
        info!("Created role {}", name);
        Ok(())
    }

    async fn read(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let name = require_id(data)?;
        let body = RoleRef {
            name: name.clone(),
            token: meta.token(),
        };

        let role = match meta.client().get_role(&body).await {
            Ok(role) => role,
            Err(e) if e.is_not_found() => {
                warn!("Role {} no longer exists", name);
                data.clear_id();
                return Ok(());
            }
            Err(e) => return Err(e.into_core("can't get Role value")),
        };

        if let Some(comment) = role.comment {
            data.set("comment", comment)?;
        }
        data.set("name", name.as_str())?;
        data.set_id(name);
        Ok(())
    }

    async fn update(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let name = data.get_string("name");
        let body = UpdateRole {
            name: name.clone(),
            token: meta.token(),
            new_name: Some(name.clone()),
            new_comment: non_zero(data.get_string("comment")),
        };

        meta.client()
            .update_role(&body)
            .await
            .map_err(|e| e.into_core("can't update Role"))?;

        data.set_id(name);
        Ok(())
    }

    async fn delete(&self, meta: &ProviderMeta, data: &ResourceData) -> Result<()> {
        let name = require_id(data)?;
        meta.client()
            .delete_role(&RoleRef {
                name: name.clone(),
                token: meta.token(),
            })
            .await
            .map_err(Error::from)?;
        info!("Deleted role {}", name);
        Ok(())
    }

    async fn import(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let name = require_id(data)?;
        meta.client()
            .get_role(&RoleRef {
                name: name.clone(),
                token: meta.token(),
            })
            .await
            .map_err(|e| e.into_core(format!("can't import Role {}", name)))?;
        data.set("name", name)?;
        Ok(())
    }
}
