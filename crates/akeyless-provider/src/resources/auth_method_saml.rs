//! `akeyless_auth_method_saml`

use super::{require_id, Resource};
use crate::provider::ProviderMeta;
use akeyless_client::models::{
    non_zero, AuthMethodRef, CreateAuthMethodSaml, UpdateAuthMethodSaml,
};
use akeyless_core::{Attribute, Error, ResourceData, ResourceSchema, Result};
use async_trait::async_trait;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

pub const TYPE_NAME: &str = "akeyless_auth_method_saml";

static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();

pub fn schema() -> &'static ResourceSchema {
    SCHEMA.get_or_init(|| {
        ResourceSchema::new(
            TYPE_NAME,
            "SAML Auth Method Resource",
            vec![
                Attribute::string("name", "Auth Method name")
                    .required()
                    .force_new(),
                Attribute::int(
                    "access_expires",
                    "Access expiration date in Unix timestamp (select 0 for access without expiry date)",
                )
                .default_value(0),
                Attribute::string_set(
                    "bound_ips",
                    "A CIDR whitelist with the IPs that the access is restricted to",
                ),
                Attribute::bool(
                    "force_sub_claims",
                    "enforce role-association must include sub claims",
                ),
                Attribute::string(
                    "unique_identifier",
                    "A unique identifier (ID) value, usually the email, username or upn, used to distinguish between users of the same organization",
                )
                .required(),
                Attribute::string("idp_metadata_url", "IDP metadata url"),
                Attribute::string_set(
                    "allowed_redirect_uri",
                    "Allowed redirect URIs after the authentication",
                ),
                Attribute::string("access_id", "Auth Method access ID").computed(),
            ],
        )
    })
}

/// Fields shared by the create and update bodies
struct SamlFields {
    name: String,
    unique_identifier: String,
    access_expires: Option<i64>,
    bound_ips: Option<Vec<String>>,
    force_sub_claims: Option<bool>,
    idp_metadata_url: Option<String>,
    allowed_redirect_uri: Option<Vec<String>>,
}

impl SamlFields {
    fn gather(data: &ResourceData) -> Self {
        Self {
            name: data.get_string("name"),
            unique_identifier: data.get_string("unique_identifier"),
            access_expires: non_zero(data.get_int("access_expires")),
            bound_ips: non_zero(data.get_set("bound_ips").into_iter().collect()),
            force_sub_claims: non_zero(data.get_bool("force_sub_claims")),
            idp_metadata_url: non_zero(data.get_string("idp_metadata_url")),
            allowed_redirect_uri: non_zero(data.get_set("allowed_redirect_uri").into_iter().collect()),
        }
    }
}

/// Handlers for SAML auth methods
#[derive(Debug, Default, Clone, Copy)]
pub struct AuthMethodSamlResource;

#[async_trait]
impl Resource for AuthMethodSamlResource {
    fn schema(&self) -> &'static ResourceSchema {
        schema()
    }

    async fn create(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let fields = SamlFields::gather(data);
        let body = CreateAuthMethodSaml {
            name: fields.name.clone(),
            unique_identifier: fields.unique_identifier,
            token: meta.token(),
            access_expires: fields.access_expires,
            bound_ips: fields.bound_ips,
            force_sub_claims: fields.force_sub_claims,
            idp_metadata_url: fields.idp_metadata_url,
            allowed_redirect_uri: fields.allowed_redirect_uri,
        };

        let output = meta
            .client()
            .create_auth_method_saml(&body)
            .await
            .map_err(|e| e.into_core("can't create Secret"))?;

        if let Some(access_id) = output.access_id {
            data.set("access_id", access_id)?;
        }
        data.set_id(fields.name.as_str());
        info!("Created SAML auth method {}", fields.name);
        Ok(())
    }

    async fn read(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let name = require_id(data)?;
        let body = AuthMethodRef {
            name: name.clone(),
            token: meta.token(),
        };

        let method = match meta.client().get_auth_method(&body).await {
            Ok(method) => method,
            Err(e) if e.is_not_found() => {
                warn!("SAML auth method {} no longer exists", name);
                data.clear_id();
                return Ok(());
            }
            Err(e) => return Err(e.into_core("can't get value")),
        };

        if let Some(access_id) = method.auth_method_access_id {
            data.set("access_id", access_id)?;
        }
        let info = method.access_info.unwrap_or_default();
        if let Some(access_expires) = info.access_expires {
            data.set("access_expires", access_expires)?;
        }
        if let Some(force_sub_claims) = info.force_sub_claims {
            data.set("force_sub_claims", force_sub_claims)?;
        }
        if let Some(cidrs) = info.cidr_whitelist.filter(|c| !c.is_empty()) {
            data.set_string_set("bound_ips", cidrs.split(','))?;
        }

        let rules = info.saml_access_rules.unwrap_or_default();
        if let Some(unique_identifier) = rules.unique_identifier {
            data.set("unique_identifier", unique_identifier)?;
        }
        if let Some(idp_metadata_url) = rules.idp_metadata_url {
            data.set("idp_metadata_url", idp_metadata_url)?;
        }
        if let Some(uris) = rules.allowed_redirect_uris {
            data.set_string_set("allowed_redirect_uri", uris)?;
        }

        data.set_id(name);
        Ok(())
    }

    async fn update(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let fields = SamlFields::gather(data);
        let body = UpdateAuthMethodSaml {
            name: fields.name.clone(),
            unique_identifier: fields.unique_identifier,
            token: meta.token(),
            new_name: Some(fields.name.clone()),
            access_expires: fields.access_expires,
            bound_ips: fields.bound_ips,
            force_sub_claims: fields.force_sub_claims,
            idp_metadata_url: fields.idp_metadata_url,
            allowed_redirect_uri: fields.allowed_redirect_uri,
        };

        meta.client()
            .update_auth_method_saml(&body)
            .await
            .map_err(|e| e.into_core("can't update"))?;

        data.set_id(fields.name.as_str());
        debug!("Updated SAML auth method {}", fields.name);
        Ok(())
    }

    async fn delete(&self, meta: &ProviderMeta, data: &ResourceData) -> Result<()> {
        let name = require_id(data)?;
        let body = AuthMethodRef {
            name: name.clone(),
            token: meta.token(),
        };
        meta.client()
            .delete_auth_method(&body)
            .await
            .map_err(Error::from)?;
        info!("Deleted SAML auth method {}", name);
        Ok(())
    }

    async fn import(&self, meta: &ProviderMeta, data: &mut ResourceData) -> Result<()> {
        let name = require_id(data)?;
        let body = AuthMethodRef {
            name: name.clone(),
            token: meta.token(),
        };
        meta.client()
            .get_auth_method(&body)
            .await
            .map_err(|e| e.into_core(format!("can't import auth method {}", name)))?;
        data.set("name", name)?;
        Ok(())
    }
}
