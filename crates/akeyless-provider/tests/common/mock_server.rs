//! Wiremock setup helpers for the API gateway

use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Respond to `POST /{operation}` with a JSON body
pub async fn mock_operation(server: &MockServer, operation: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/{}", operation)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Respond to `POST /{operation}` with a status and raw body
pub async fn mock_failure(server: &MockServer, operation: &str, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/{}", operation)))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

/// Successful `auth` call returning `token`
pub async fn mock_auth(server: &MockServer, token: &str) {
    mock_operation(server, "auth", json!({ "token": token })).await;
}

/// `get-auth-method` response for a SAML auth method
pub fn saml_auth_method(name: &str, access_id: &str) -> Value {
    json!({
        "auth_method_name": name,
        "auth_method_access_id": access_id,
        "access_info": {
            "access_expires": 1_900_000_000,
            "force_sub_claims": true,
            "cidr_whitelist": "192.168.0.0/16,10.0.0.0/8",
            "saml_access_rules": {
                "unique_identifier": "email",
                "idp_metadata_url": "https://idp.example.com/metadata",
                "allowed_redirect_URIs": ["https://console.akeyless.io/login-saml"]
            }
        }
    })
}
