//! Static secret resource and data sources against a mock gateway

mod common;

use akeyless_core::{Error, ResourceData};
use akeyless_provider::data_sources::{AuthMethodDataSource, DataSource, StaticSecretDataSource};
use akeyless_provider::resources::{Resource, StaticSecretResource};
use akeyless_provider::{create_data_source, resources};
use common::*;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn configured() -> ResourceData {
    ResourceData::from_config(
        resources::static_secret::schema(),
        &json!({ "path": SECRET_PATH, "value": "s3cr3t", "metadata": "db password" }),
    )
    .unwrap()
}

#[tokio::test]
async fn create_posts_value_and_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create-secret"))
        .and(body_json(json!({
            "name": SECRET_PATH,
            "value": "s3cr3t",
            "token": TEST_TOKEN,
            "metadata": "db password"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": SECRET_PATH })))
        .expect(1)
        .mount(&server)
        .await;

    let meta = test_meta(&server);
    let mut data = configured();
    StaticSecretResource.create(&meta, &mut data).await.unwrap();
    assert_eq!(data.id(), Some(SECRET_PATH));
}

#[tokio::test]
async fn read_combines_value_and_metadata() {
    let server = MockServer::start().await;
    mock_operation(&server, "get-secret-value", json!({ SECRET_PATH: "rotated" })).await;
    mock_operation(
        &server,
        "describe-item",
        json!({ "item_name": SECRET_PATH, "item_type": "STATIC_SECRET", "item_metadata": "db password" }),
    )
    .await;

    let meta = test_meta(&server);
    let mut data = configured();
    data.set_id(SECRET_PATH);
    StaticSecretResource.read(&meta, &mut data).await.unwrap();

    assert_eq!(data.get_string("value"), "rotated");
    assert_eq!(data.get_string("metadata"), "db password");
    assert_eq!(data.id(), Some(SECRET_PATH));
}

#[tokio::test]
async fn value_only_update_after_read_keeps_secret_in_place() {
    let server = MockServer::start().await;
    mock_operation(&server, "get-secret-value", json!({ SECRET_PATH: "v1" })).await;
    mock_operation(&server, "describe-item", json!({ "item_metadata": "" })).await;

    let meta = test_meta(&server);
    let mut prior = ResourceData::from_config(
        resources::static_secret::schema(),
        &json!({ "path": SECRET_PATH, "value": "v1" }),
    )
    .unwrap();
    prior.set_id(SECRET_PATH);
    StaticSecretResource.read(&meta, &mut prior).await.unwrap();
    assert!(prior.get("metadata").is_none());

    let planned = ResourceData::from_config(
        resources::static_secret::schema(),
        &json!({ "path": SECRET_PATH, "value": "v2" }),
    )
    .unwrap();
    let fields = StaticSecretResource
        .schema()
        .replacement_fields(prior.attributes(), planned.attributes());
    assert!(fields.is_empty(), "unexpected replacement: {:?}", fields);
}

#[tokio::test]
async fn read_of_missing_secret_clears_identity() {
    let server = MockServer::start().await;
    mock_failure(&server, "get-secret-value", 404, r#"{"error":"item not found"}"#).await;
    Mock::given(method("POST"))
        .and(path("/describe-item"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let meta = test_meta(&server);
    let mut data = configured();
    data.set_id(SECRET_PATH);
    StaticSecretResource.read(&meta, &mut data).await.unwrap();
    assert!(data.id().is_none());
}

#[tokio::test]
async fn update_sends_new_value() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/update-secret-val"))
        .and(body_json(json!({
            "name": SECRET_PATH,
            "value": "next",
            "token": TEST_TOKEN
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let meta = test_meta(&server);
    let mut data = configured();
    data.set_id(SECRET_PATH);
    data.set("value", "next").unwrap();
    StaticSecretResource.update(&meta, &mut data).await.unwrap();
}

#[tokio::test]
async fn delete_failure_is_surfaced() {
    let server = MockServer::start().await;
    mock_failure(&server, "delete-item", 403, r#"{"error":"forbidden"}"#).await;

    let meta = test_meta(&server);
    let mut data = configured();
    data.set_id(SECRET_PATH);
    let err = StaticSecretResource.delete(&meta, &data).await.unwrap_err();
    assert!(matches!(err, Error::Api { status: 403, .. }));
    assert_eq!(err.to_string(), r#"delete-item returned 403: {"error":"forbidden"}"#);
}

#[tokio::test]
async fn static_secret_data_source_reads_value() {
    let server = MockServer::start().await;
    mock_operation(&server, "get-secret-value", json!({ SECRET_PATH: "s3cr3t" })).await;

    let meta = test_meta(&server);
    let source = create_data_source("akeyless_static_secret").unwrap();
    let mut data =
        ResourceData::from_config(source.schema(), &json!({ "path": SECRET_PATH })).unwrap();
    source.read(&meta, &mut data).await.unwrap();

    assert_eq!(data.get_string("value"), "s3cr3t");
    assert_eq!(data.redacted_attributes()["value"], "(sensitive)");
}

#[tokio::test]
async fn static_secret_data_source_requires_value_in_response() {
    let server = MockServer::start().await;
    mock_operation(&server, "get-secret-value", json!({})).await;

    let meta = test_meta(&server);
    let mut data = ResourceData::from_config(
        StaticSecretDataSource.schema(),
        &json!({ "path": SECRET_PATH }),
    )
    .unwrap();
    let err = StaticSecretDataSource.read(&meta, &mut data).await.unwrap_err();
    assert!(err.to_string().contains(SECRET_PATH));
}

#[tokio::test]
async fn auth_method_data_source_reads_access_id() {
    let server = MockServer::start().await;
    mock_operation(
        &server,
        "get-auth-method",
        saml_auth_method(SAML_NAME, SAML_ACCESS_ID),
    )
    .await;

    let meta = test_meta(&server);
    let mut data = ResourceData::from_config(
        AuthMethodDataSource.schema(),
        &json!({ "path": SAML_NAME }),
    )
    .unwrap();
    AuthMethodDataSource.read(&meta, &mut data).await.unwrap();
    assert_eq!(data.get_string("access_id"), SAML_ACCESS_ID);
    assert_eq!(data.id(), Some(SAML_NAME));
}

#[test]
fn data_source_rejects_computed_attributes_in_config() {
    let err = ResourceData::from_config(
        AuthMethodDataSource.schema(),
        &json!({ "path": SAML_NAME, "access_id": "p-x" }),
    )
    .unwrap_err();
    assert!(matches!(err, Error::SchemaValidation { .. }));
}
