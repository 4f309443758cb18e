//! Data source command

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;

use super::{configure_provider, load_block};
use crate::output;
use akeyless_core::ResourceData;
use akeyless_provider::create_data_source;

#[derive(Args, Debug)]
pub struct DataArgs {
    /// Data source type, e.g. akeyless_static_secret
    pub r#type: String,

    /// Data source configuration (YAML or JSON)
    #[arg(short, long)]
    pub file: Utf8PathBuf,

    /// Print sensitive values instead of masking them
    #[arg(long)]
    pub show_sensitive: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: DataArgs, config: Option<&Utf8Path>) -> Result<()> {
    let source = create_data_source(&args.r#type)?;
    let block = load_block(&args.file)?;
    let mut data = ResourceData::from_config(source.schema(), &block)
        .with_context(|| format!("Invalid {} configuration in {}", args.r#type, args.file))?;

    let meta = configure_provider(config).await?;
    source.read(&meta, &mut data).await?;

    let attributes = if args.show_sensitive {
        data.attributes().clone()
    } else {
        data.redacted_attributes()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&attributes)?);
        return Ok(());
    }

    output::header(&args.r#type);
    for (key, value) in attributes {
        let shown = match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        output::kv(&key, &shown);
    }
    Ok(())
}
