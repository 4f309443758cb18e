//! Shared test values

pub const TEST_TOKEN: &str = "t-test-token";
pub const TEST_ACCESS_ID: &str = "p-test123";
pub const TEST_ACCESS_KEY: &str = "k-test-key";
pub const SAML_NAME: &str = "/auth/saml-corp";
pub const SAML_ACCESS_ID: &str = "p-saml42";
pub const SECRET_PATH: &str = "/prod/db/password";
pub const ROLE_NAME: &str = "/roles/readers";
