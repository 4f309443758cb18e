//! `akeyless_static_secret`
//!
//! The value lives behind `get-secret-value`; metadata behind
//! `describe-item`. A read therefore makes two calls.

use super::{require_id, Resource};
use crate::provider::ProviderMeta;
use akeyless_client::models::{non_zero, CreateSecret, GetSecretValue, ItemRef, UpdateSecretVal};
use akeyless_client::ApiError;
use akeyless_core::{Attribute, Error, ResourceData, ResourceSchema, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::OnceLock;
use tracing::{info, warn};

pub const TYPE_NAME: &str = "akeyless_static_secret";

static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();

pub fn schema() -> &'static ResourceSchema {
    SCHEMA.get_or_init(|| {
        ResourceSchema::new(
            TYPE_NAME,
            "Static secret Resource",
            vec![
                Attribute::string("path", "The path where the secret will be stored.")
                    .required()
                    .force_new(),
                Attribute::string("value", "The secret content.")
                    .required()
                    .sensitive(),
                Attribute::string("metadata", "Metadata about the secret").force_new(),
            ],
        )
    })
}

/// Handlers for static secrets
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticSecretResource;

#[async_trait]
impl Resource for StaticSecretResource {
    fn schema(&self) -> &'static ResourceSchema {
        schema()
    }

    async fn create(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let path = data.get_string("path");
        let body = CreateSecret {
            name: path.clone(),
            value: data.get_string("value"),
            token: meta.token(),
            metadata: non_zero(data.get_string("metadata")),
        };

        meta.client()
            .create_secret(&body)
            .await
            .map_err(|e| e.into_core("can't create Secret"))?;

        data.set_id(path.as_str());
        info!("Created static secret {}", path);
        Ok(())
    }

    async fn read(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let path = require_id(data)?;

        let value = match fetch_value(meta, &path).await {
            Ok(value) => value,
            Err(e) if e.is_not_found() => {
                warn!("Static secret {} no longer exists", path);
                data.clear_id();
                return Ok(());
            }
            Err(e) => return Err(e.into_core("can't get Secret value")),
        };

        let item = meta
            .client()
            .describe_item(&ItemRef {
                name: path.clone(),
                token: meta.token(),
            })
            .await
            .map_err(|e| e.into_core("can't get Secret value"))?;

        if let Some(value) = value {
            data.set("value", value)?;
        }
        if let Some(metadata) = item.item_metadata.filter(|m| !m.is_empty()) {
            data.set("metadata", metadata)?;
        }

        data.set("path", path.as_str())?;
        data.set_id(path);
        Ok(())
    }

    async fn update(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let path = data.get_string("path");
        let body = UpdateSecretVal {
            name: path.clone(),
            value: data.get_string("value"),
            token: meta.token(),
        };

        meta.client()
            .update_secret_val(&body)
            .await
            .map_err(|e| e.into_core("can't update Secret value"))?;

        data.set_id(path);
        Ok(())
    }

    async fn delete(&self, meta: &ProviderMeta, data: &ResourceData) -> Result<()> {
        let path = require_id(data)?;
        meta.client()
            .delete_item(&ItemRef {
                name: path.clone(),
                token: meta.token(),
            })
            .await
            .map_err(Error::from)?;
        info!("Deleted static secret {}", path);
        Ok(())
    }

    async fn import(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let path = require_id(data)?;
        fetch_value(meta, &path)
            .await
            .map_err(|e| e.into_core(format!("can't import Secret {}", path)))?;
        data.set("path", path)?;
        Ok(())
    }
}

/// Value of one secret, `None` when the response does not mention it
pub(crate) async fn fetch_value(
    meta: &ProviderMeta,
    path: &str,
) -> std::result::Result<Option<String>, ApiError> {
    let values = meta
        .client()
        .get_secret_value(&GetSecretValue {
            names: vec![path.to_string()],
            token: meta.token(),
        })
        .await?;

    Ok(values.get(path).map(value_to_string))
}

fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Secret value or a not-found error naming the path
pub(crate) fn require_value(path: &str, value: Option<String>) -> Result<String> {
    value.ok_or_else(|| Error::api("can't get Secret value", 404, format!("secret {} not found", path)))
}
