//! Configuration loading and management

mod loader;

pub use loader::{
    parse_provider_config, provider_config_schema, validate_provider_config, ProviderConfigFile,
};
