//! Authentication: login method selection, cloud identities and token exchange

pub mod cloud;
pub mod selector;
pub mod token;

pub use cloud::{AwsIdentity, AzureIdentity, CloudIdError, CloudIdentities, CloudIdentity};
pub use selector::{resolve_credential, select_login_method};
pub use token::exchange_token;
