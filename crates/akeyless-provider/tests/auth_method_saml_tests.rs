//! SAML auth method lifecycle against a mock gateway

mod common;

use akeyless_core::{Error, ResourceData};
use akeyless_provider::resources::auth_method_saml::schema;
use akeyless_provider::resources::{AuthMethodSamlResource, Resource};
use common::*;
use serde_json::json;
use std::collections::BTreeSet;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn configured() -> ResourceData {
    ResourceData::from_config(
        schema(),
        &json!({
            "name": SAML_NAME,
            "unique_identifier": "email",
            "access_expires": 1_900_000_000,
            "bound_ips": ["192.168.0.0/16", "10.0.0.0/8"],
            "force_sub_claims": true,
            "idp_metadata_url": "https://idp.example.com/metadata",
            "allowed_redirect_uri": ["https://console.akeyless.io/login-saml"]
        }),
    )
    .unwrap()
}

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn create_sends_configured_fields_and_stores_access_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create-auth-method-saml"))
        .and(body_json(json!({
            "name": SAML_NAME,
            "unique-identifier": "email",
            "token": TEST_TOKEN,
            "access-expires": 1_900_000_000,
            "bound-ips": ["10.0.0.0/8", "192.168.0.0/16"],
            "force-sub-claims": true,
            "idp-metadata-url": "https://idp.example.com/metadata",
            "allowed-redirect-uri": ["https://console.akeyless.io/login-saml"]
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "access_id": SAML_ACCESS_ID })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let meta = test_meta(&server);
    let mut data = configured();
    AuthMethodSamlResource.create(&meta, &mut data).await.unwrap();

    assert_eq!(data.id(), Some(SAML_NAME));
    assert_eq!(data.get_string("access_id"), SAML_ACCESS_ID);
}

#[tokio::test]
async fn create_omits_zero_values() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create-auth-method-saml"))
        .and(body_json(json!({
            "name": SAML_NAME,
            "unique-identifier": "email",
            "token": TEST_TOKEN
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let meta = test_meta(&server);
    let mut data = ResourceData::from_config(
        schema(),
        &json!({ "name": SAML_NAME, "unique_identifier": "email" }),
    )
    .unwrap();
    AuthMethodSamlResource.create(&meta, &mut data).await.unwrap();

    assert_eq!(data.id(), Some(SAML_NAME));
    assert!(data.get("access_id").is_none());
}

#[tokio::test]
async fn create_failure_carries_raw_body() {
    let server = MockServer::start().await;
    mock_failure(
        &server,
        "create-auth-method-saml",
        409,
        r#"{"error":"auth method already exists"}"#,
    )
    .await;

    let meta = test_meta(&server);
    let mut data = configured();
    let err = AuthMethodSamlResource
        .create(&meta, &mut data)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        r#"can't create Secret: {"error":"auth method already exists"}"#
    );
    assert!(data.id().is_none());
}

#[tokio::test]
async fn read_after_create_round_trips_fields() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "create-auth-method-saml",
        json!({ "access_id": SAML_ACCESS_ID }),
    )
    .await;
    mock_operation(
        &server,
        "get-auth-method",
        saml_auth_method(SAML_NAME, SAML_ACCESS_ID),
    )
    .await;

    let meta = test_meta(&server);
    let mut data = configured();
    AuthMethodSamlResource.create(&meta, &mut data).await.unwrap();
    let created = data.attributes().clone();

    AuthMethodSamlResource.read(&meta, &mut data).await.unwrap();

    assert_eq!(data.id(), Some(SAML_NAME));
    assert_eq!(data.attributes(), &created);
    assert_eq!(
        data.get_set("bound_ips"),
        set(&["10.0.0.0/8", "192.168.0.0/16"])
    );
    assert_eq!(
        data.get_set("allowed_redirect_uri"),
        set(&["https://console.akeyless.io/login-saml"])
    );
}

#[tokio::test]
async fn read_only_overwrites_fields_present_in_response() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "get-auth-method",
        json!({ "auth_method_access_id": SAML_ACCESS_ID }),
    )
    .await;

    let meta = test_meta(&server);
    let mut data = configured();
    data.set_id(SAML_NAME);
    AuthMethodSamlResource.read(&meta, &mut data).await.unwrap();

    assert_eq!(data.get_string("access_id"), SAML_ACCESS_ID);
    assert_eq!(data.get_string("unique_identifier"), "email");
    assert_eq!(data.get_int("access_expires"), 1_900_000_000);
}

#[tokio::test]
async fn read_of_missing_auth_method_clears_identity() {
    let server = MockServer::start().await;
    mock_failure(
        &server,
        "get-auth-method",
        404,
        r#"{"error":"Auth method not found"}"#,
    )
    .await;

    let meta = test_meta(&server);
    let mut data = configured();
    data.set_id(SAML_NAME);

    AuthMethodSamlResource.read(&meta, &mut data).await.unwrap();
    assert!(data.id().is_none());
}

#[tokio::test]
async fn read_server_error_is_surfaced() {
    let server = MockServer::start().await;
    mock_failure(&server, "get-auth-method", 500, "internal error").await;

    let meta = test_meta(&server);
    let mut data = configured();
    data.set_id(SAML_NAME);

    let err = AuthMethodSamlResource
        .read(&meta, &mut data)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 500, .. }));
    assert_eq!(data.id(), Some(SAML_NAME));
}

#[tokio::test]
async fn update_sends_new_name_equal_to_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/update-auth-method-saml"))
        .and(body_partial_json(json!({
            "name": SAML_NAME,
            "new-name": SAML_NAME,
            "unique-identifier": "upn",
            "token": TEST_TOKEN
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let meta = test_meta(&server);
    let mut data = configured();
    data.set_id(SAML_NAME);
    data.set("unique_identifier", "upn").unwrap();

    AuthMethodSamlResource.update(&meta, &mut data).await.unwrap();
    assert_eq!(data.id(), Some(SAML_NAME));
}

#[tokio::test]
async fn delete_surfaces_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/delete-auth-method"))
        .and(body_json(json!({ "name": SAML_NAME, "token": TEST_TOKEN })))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error":"Auth method not found"}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    let meta = test_meta(&server);
    let mut data = configured();
    data.set_id(SAML_NAME);

    let err = AuthMethodSamlResource.delete(&meta, &data).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        r#"delete-auth-method returned 404: {"error":"Auth method not found"}"#
    );
    match err {
        Error::Api { status, body, .. } => {
            assert_eq!(status, 404);
            assert_eq!(body, r#"{"error":"Auth method not found"}"#);
        }
        other => panic!("expected API error, got {:?}", other),
    }
}

#[tokio::test]
async fn delete_succeeds() {
    let server = MockServer::start().await;
    mock_operation(&server, "delete-auth-method", json!({})).await;

    let meta = test_meta(&server);
    let mut data = configured();
    data.set_id(SAML_NAME);
    AuthMethodSamlResource.delete(&meta, &data).await.unwrap();
}

#[tokio::test]
async fn import_seeds_name_then_read_hydrates() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "get-auth-method",
        saml_auth_method(SAML_NAME, SAML_ACCESS_ID),
    )
    .await;

    let meta = test_meta(&server);
    let mut data = ResourceData::with_id(schema(), SAML_NAME);

    AuthMethodSamlResource.import(&meta, &mut data).await.unwrap();
    assert_eq!(data.get_string("name"), SAML_NAME);
    assert!(data.get("unique_identifier").is_none());

    AuthMethodSamlResource.read(&meta, &mut data).await.unwrap();
    assert_eq!(data.get_string("unique_identifier"), "email");
    assert_eq!(data.get_string("access_id"), SAML_ACCESS_ID);
    assert!(data.get_bool("force_sub_claims"));
}

#[tokio::test]
async fn import_of_missing_auth_method_fails() {
    let server = MockServer::start().await;
    mock_failure(&server, "get-auth-method", 404, "not found").await;

    let meta = test_meta(&server);
    let mut data = ResourceData::with_id(schema(), SAML_NAME);
    let err = AuthMethodSamlResource
        .import(&meta, &mut data)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Api { status: 404, .. }));
}
