//! Resource lifecycle commands
//!
//! Resource state lives in a JSON file between invocations. `update`
//! replaces the remote object (delete, then create) when a force-new
//! attribute changed.

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Args, Subcommand};
use tracing::warn;

use super::{configure_provider, load_block, load_state, remove_state, save_state};
use crate::output;
use akeyless_core::ResourceData;
use akeyless_provider::{create_resource, Resource};

#[derive(Subcommand, Debug)]
pub enum ResourceCommands {
    /// Create a resource from a configuration file
    Create(ConfigArgs),

    /// Refresh resource state from the remote object
    Read(StateArgs),

    /// Apply a changed configuration to an existing resource
    Update(ConfigArgs),

    /// Delete a resource and its state
    Delete(StateArgs),

    /// Adopt an existing remote object
    Import(ImportArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Resource type, e.g. akeyless_auth_method_saml
    pub r#type: String,

    /// Resource configuration (YAML or JSON)
    #[arg(short, long)]
    pub file: Utf8PathBuf,

    /// State file (defaults to <type>.state.json)
    #[arg(short, long)]
    pub state: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct StateArgs {
    /// Resource type, e.g. akeyless_auth_method_saml
    pub r#type: String,

    /// State file (defaults to <type>.state.json)
    #[arg(short, long)]
    pub state: Option<Utf8PathBuf>,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// Resource type, e.g. akeyless_auth_method_saml
    pub r#type: String,

    /// Identity of the remote object (its name or path)
    #[arg(long)]
    pub id: String,

    /// State file (defaults to <type>.state.json)
    #[arg(short, long)]
    pub state: Option<Utf8PathBuf>,
}

pub async fn run(cmd: ResourceCommands, config: Option<&Utf8Path>) -> Result<()> {
    match cmd {
        ResourceCommands::Create(args) => create(args, config).await,
        ResourceCommands::Read(args) => read(args, config).await,
        ResourceCommands::Update(args) => update(args, config).await,
        ResourceCommands::Delete(args) => delete(args, config).await,
        ResourceCommands::Import(args) => import(args, config).await,
    }
}

fn state_path(resource_type: &str, state: Option<Utf8PathBuf>) -> Utf8PathBuf {
    state.unwrap_or_else(|| Utf8PathBuf::from(format!("{}.state.json", resource_type)))
}

fn print_attributes(data: &ResourceData) {
    output::kv("id", data.id().unwrap_or("-"));
    for (key, value) in data.redacted_attributes() {
        let shown = match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        output::kv(&key, &shown);
    }
}

async fn create(args: ConfigArgs, config: Option<&Utf8Path>) -> Result<()> {
    let resource = create_resource(&args.r#type)?;
    let block = load_block(&args.file)?;
    let mut data = ResourceData::from_config(resource.schema(), &block)
        .with_context(|| format!("Invalid {} configuration in {}", args.r#type, args.file))?;

    let meta = configure_provider(config).await?;
    resource.create(&meta, &mut data).await?;

    let path = state_path(&args.r#type, args.state);
    save_state(&path, &data.to_state())?;

    output::success(&format!(
        "Created {} {}",
        args.r#type,
        data.id().unwrap_or_default()
    ));
    print_attributes(&data);
    Ok(())
}

async fn read(args: StateArgs, config: Option<&Utf8Path>) -> Result<()> {
    let resource = create_resource(&args.r#type)?;
    let path = state_path(&args.r#type, args.state);
    let mut data = ResourceData::from_state(resource.schema(), load_state(&path)?)?;

    let meta = configure_provider(config).await?;
    resource.read(&meta, &mut data).await?;

    if data.id().is_none() {
        output::warning(&format!(
            "{} no longer exists remotely; removing {}",
            args.r#type, path
        ));
        return remove_state(&path);
    }

    save_state(&path, &data.to_state())?;
    output::header(&args.r#type);
    print_attributes(&data);
    Ok(())
}

async fn update(args: ConfigArgs, config: Option<&Utf8Path>) -> Result<()> {
    let resource = create_resource(&args.r#type)?;
    let path = state_path(&args.r#type, args.state);
    let block = load_block(&args.file)?;

    let prior = ResourceData::from_state(resource.schema(), load_state(&path)?)?;
    let planned = ResourceData::from_config(resource.schema(), &block)
        .with_context(|| format!("Invalid {} configuration in {}", args.r#type, args.file))?;

    let meta = configure_provider(config).await?;

    let replaced = resource
        .schema()
        .replacement_fields(prior.attributes(), planned.attributes());
    let data = if replaced.is_empty() {
        let mut data = prior;
        data.apply_config(&block)?;
        resource.update(&meta, &mut data).await?;
        data
    } else {
        warn!("{} must be replaced: {} changed", args.r#type, replaced.join(", "));
        replace(resource.as_ref(), &meta, &prior, planned).await?
    };

    save_state(&path, &data.to_state())?;
    output::success(&format!(
        "Updated {} {}",
        args.r#type,
        data.id().unwrap_or_default()
    ));
    print_attributes(&data);
    Ok(())
}

async fn replace(
    resource: &dyn Resource,
    meta: &akeyless_provider::ProviderMeta,
    prior: &ResourceData,
    mut planned: ResourceData,
) -> Result<ResourceData> {
    if prior.id().is_some() {
        resource.delete(meta, prior).await?;
    }
    resource.create(meta, &mut planned).await?;
    Ok(planned)
}

async fn delete(args: StateArgs, config: Option<&Utf8Path>) -> Result<()> {
    let resource = create_resource(&args.r#type)?;
    let path = state_path(&args.r#type, args.state);
    let data = ResourceData::from_state(resource.schema(), load_state(&path)?)?;

    let meta = configure_provider(config).await?;
    resource.delete(&meta, &data).await?;
    remove_state(&path)?;

    output::success(&format!(
        "Deleted {} {}",
        args.r#type,
        data.id().unwrap_or_default()
    ));
    Ok(())
}

async fn import(args: ImportArgs, config: Option<&Utf8Path>) -> Result<()> {
    let resource = create_resource(&args.r#type)?;
    let mut data = ResourceData::with_id(resource.schema(), args.id.as_str());

    let meta = configure_provider(config).await?;
    resource.import(&meta, &mut data).await?;
    resource.read(&meta, &mut data).await?;

    let path = state_path(&args.r#type, args.state);
    save_state(&path, &data.to_state())?;
    output::success(&format!("Imported {} {}", args.r#type, args.id));
    print_attributes(&data);
    Ok(())
}
