//! Token exchange
//!
//! A resolved credential is traded for a session token with one call to the
//! `auth` endpoint. Failures are authentication errors: structured API
//! failures carry the raw response body, transport failures the error text.

use akeyless_client::models::Auth;
use akeyless_client::{ApiClient, ApiError};
use akeyless_core::types::{Credential, Session};
use akeyless_core::{Error, Result};
use tracing::{debug, info};

/// Exchange a credential for a session token
pub async fn exchange_token(client: &ApiClient, credential: &Credential) -> Result<Session> {
    let access_type = credential.access_type();
    debug!("Authenticating with access type {}", access_type);

    let output = client
        .auth(&Auth::from(credential))
        .await
        .map_err(|e| match e {
            ApiError::Api { body, .. } => Error::authentication(body),
            other => Error::authentication(other.to_string()),
        })?;

    let token = output
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| Error::authentication("auth response did not include a token"))?;

    info!("Authenticated with access type {}", access_type);
    Ok(Session::new(token, access_type))
}
