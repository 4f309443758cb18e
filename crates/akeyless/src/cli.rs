//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

pub use crate::commands::auth::AuthArgs;
pub use crate::commands::data::DataArgs;
pub use crate::commands::resource::ResourceCommands;
pub use crate::commands::schema::SchemaArgs;

/// Akeyless - manage Akeyless auth methods, secrets and roles declaratively
#[derive(Parser, Debug)]
#[command(name = "akeyless")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to akeyless.yaml provider config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate with the configured login method
    Auth(AuthArgs),

    /// Show resource and data source schemas
    Schema(SchemaArgs),

    /// Create, read, update, delete or import a resource
    #[command(subcommand)]
    Resource(ResourceCommands),

    /// Read a data source
    Data(DataArgs),
}
