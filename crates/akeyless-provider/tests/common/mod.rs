//! Common test infrastructure for akeyless-provider tests
//!
//! # Usage
//!
//! In your test file, add:
//! ```ignore
//! mod common;
//! use common::*;
//! ```
//!
//! # Modules
//!
//! - `constants`: Tokens, access IDs and resource names
//! - `identities`: Fixed cloud identity stubs
//! - `mock_server`: Wiremock setup helpers for the API gateway

#![allow(dead_code)]
#![allow(unused_imports)]

pub mod constants;
pub mod identities;
pub mod mock_server;

pub use constants::*;
pub use identities::*;
pub use mock_server::*;

use akeyless_client::ApiClient;
use akeyless_core::types::{AccessType, Session};
use akeyless_provider::ProviderMeta;
use wiremock::MockServer;

/// Provider metadata pointing at a mock gateway with a fixed token
pub fn test_meta(server: &MockServer) -> ProviderMeta {
    let client = ApiClient::new(server.uri()).expect("client");
    ProviderMeta::new(client, Session::new(TEST_TOKEN, AccessType::ApiKey))
}
