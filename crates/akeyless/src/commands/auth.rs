//! Auth command

use anyhow::Result;
use camino::Utf8Path;
use clap::Args;

use super::{configure_provider, load_provider_config};
use crate::output;
use akeyless_core::types::EnvCredentials;
use akeyless_provider::auth::select_login_method;

#[derive(Args, Debug)]
pub struct AuthArgs {
    /// Only report the login method that would be used
    #[arg(long)]
    pub dry_run: bool,
}

pub async fn run(args: AuthArgs, config: Option<&Utf8Path>) -> Result<()> {
    if args.dry_run {
        let provider_config = load_provider_config(config)?;
        let method = select_login_method(&provider_config, &EnvCredentials::from_env())?;
        output::info(&format!(
            "Would authenticate with {} against {}",
            method.access_type(),
            provider_config.api_gateway_address
        ));
        return Ok(());
    }

    let meta = configure_provider(config).await?;
    output::success(&format!(
        "Authenticated with {} against {}",
        meta.access_type(),
        meta.client().base_url()
    ));
    Ok(())
}
