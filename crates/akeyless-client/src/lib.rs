//! HTTP/JSON client for the Akeyless API
//!
//! Thin request/response layer used by the provider: typed bodies in
//! [`models`], one async method per remote operation on [`ApiClient`], and an
//! [`ApiError`] that separates structured API failures from transport ones.

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::{ApiError, Result};
