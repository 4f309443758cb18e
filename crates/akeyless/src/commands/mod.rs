//! Command implementations

pub mod auth;
pub mod data;
pub mod resource;
pub mod schema;

use akeyless_core::types::{EnvCredentials, ProviderConfig};
use akeyless_core::{ProviderConfigFile, ResourceState};
use akeyless_provider::{AkeylessProvider, ProviderMeta};
use anyhow::{Context, Result};
use camino::Utf8Path;
use serde_json::Value;
use std::fs;

/// Load and validate the provider configuration
pub fn load_provider_config(config: Option<&Utf8Path>) -> Result<ProviderConfig> {
    let file = ProviderConfigFile::load(config).context("Failed to load provider configuration")?;
    let path = file.config_path.clone();
    file.into_config(&EnvCredentials::from_env())
        .with_context(|| format!("Invalid provider configuration in {}", path))
}

/// Configure the provider and authenticate
pub async fn configure_provider(config: Option<&Utf8Path>) -> Result<ProviderMeta> {
    let provider_config = load_provider_config(config)?;
    AkeylessProvider::new()
        .configure(&provider_config, &EnvCredentials::from_env())
        .await
        .context("Failed to configure provider")
}

/// Read a resource or data source configuration file (YAML or JSON)
pub fn load_block(path: &Utf8Path) -> Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    let value: Value = serde_yaml_ng::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path))?;
    Ok(if value.is_null() {
        Value::Object(Default::default())
    } else {
        value
    })
}

pub fn load_state(path: &Utf8Path) -> Result<ResourceState> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read state {}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid state file {}", path))
}

pub fn save_state(path: &Utf8Path, state: &ResourceState) -> Result<()> {
    let content = serde_json::to_string_pretty(state)?;
    fs::write(path, content + "\n").with_context(|| format!("Failed to write state {}", path))
}

pub fn remove_state(path: &Utf8Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove state {}", path))?;
    }
    Ok(())
}
