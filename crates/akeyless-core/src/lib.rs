//! # akeyless-core
//!
//! Core library for the Akeyless provider:
//! - Provider configuration loading and login block validation
//! - Resource schema declarations and JSON Schema validation
//! - Per-resource attribute data and state snapshots
//! - Credential, session and error types

pub mod config;
pub mod error;
pub mod schema;
pub mod security;
pub mod state;
pub mod types;

pub use config::ProviderConfigFile;
pub use error::{Error, Result};
pub use schema::{Attribute, AttributeType, ResourceSchema};
pub use security::SecureString;
pub use state::{ResourceData, ResourceState};
