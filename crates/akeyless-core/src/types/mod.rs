//! Type definitions for the Akeyless provider

pub mod credential;
pub mod provider_config;

pub use credential::*;
pub use provider_config::*;
