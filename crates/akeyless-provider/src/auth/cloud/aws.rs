//! AWS IAM cloud identity
//!
//! The cloud id is a SigV4-signed `sts:GetCallerIdentity` request that the
//! Akeyless backend replays against STS. It is encoded as base64 of a JSON
//! document whose url, body and headers are themselves base64-encoded.

use super::{CloudIdError, CloudIdentity};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::Credentials;
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningParams, SigningSettings};
use aws_sigv4::sign::v4;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::collections::BTreeMap;
use std::time::SystemTime;
use tracing::debug;

const STS_URL: &str = "https://sts.amazonaws.com/";
const STS_REGION: &str = "us-east-1";
const STS_SERVICE: &str = "sts";
const STS_BODY: &str = "Action=GetCallerIdentity&Version=2011-06-15";
const STS_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// Cloud identity backed by the default AWS credential chain
#[derive(Debug, Default, Clone)]
pub struct AwsIdentity;

impl AwsIdentity {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CloudIdentity for AwsIdentity {
    async fn cloud_id(&self) -> Result<String, CloudIdError> {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let provider = config
            .credentials_provider()
            .ok_or_else(|| CloudIdError::Credentials("no AWS credentials provider".into()))?;
        let credentials = provider
            .provide_credentials()
            .await
            .map_err(|e| CloudIdError::Credentials(e.to_string()))?;

        debug!("Signing sts:GetCallerIdentity request");
        sts_cloud_id(credentials, SystemTime::now())
    }

    fn name(&self) -> &'static str {
        "aws_iam"
    }
}

/// Build the cloud id for the given credentials and signing time
pub fn sts_cloud_id(credentials: Credentials, time: SystemTime) -> Result<String, CloudIdError> {
    let identity = credentials.into();
    let params: SigningParams<'_> = v4::SigningParams::builder()
        .identity(&identity)
        .region(STS_REGION)
        .name(STS_SERVICE)
        .time(time)
        .settings(SigningSettings::default())
        .build()
        .map_err(|e| CloudIdError::Signing(e.to_string()))?
        .into();

    let request_headers = [("content-type", STS_CONTENT_TYPE)];
    let signable = SignableRequest::new(
        "POST",
        STS_URL,
        request_headers.iter().copied(),
        SignableBody::Bytes(STS_BODY.as_bytes()),
    )
    .map_err(|e| CloudIdError::Signing(e.to_string()))?;

    let (instructions, _signature) = sign(signable, &params)
        .map_err(|e| CloudIdError::Signing(e.to_string()))?
        .into_parts();
    let (signed_headers, _query) = instructions.into_parts();

    let mut headers: BTreeMap<String, Vec<String>> = BTreeMap::new();
    headers.insert(
        canonical_header_name("content-type"),
        vec![STS_CONTENT_TYPE.to_string()],
    );
    for header in signed_headers {
        headers.insert(
            canonical_header_name(header.name()),
            vec![header.value().to_string()],
        );
    }

    let mut document = BTreeMap::new();
    document.insert("sts_request_method", "POST".to_string());
    document.insert("sts_request_url", STANDARD.encode(STS_URL));
    document.insert("sts_request_body", STANDARD.encode(STS_BODY));
    document.insert(
        "sts_request_headers",
        STANDARD.encode(serde_json::to_vec(&headers)?),
    );

    Ok(STANDARD.encode(serde_json::to_vec(&document)?))
}

/// `x-amz-date` becomes `X-Amz-Date`
fn canonical_header_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => {
                    first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::time::{Duration, UNIX_EPOCH};

    fn decode_json(encoded: &str) -> Value {
        serde_json::from_slice(&STANDARD.decode(encoded).unwrap()).unwrap()
    }

    fn decode_str(encoded: &Value) -> String {
        String::from_utf8(STANDARD.decode(encoded.as_str().unwrap()).unwrap()).unwrap()
    }

    #[test]
    fn test_canonical_header_name() {
        assert_eq!(canonical_header_name("x-amz-date"), "X-Amz-Date");
        assert_eq!(canonical_header_name("authorization"), "Authorization");
        assert_eq!(
            canonical_header_name("X-AMZ-SECURITY-TOKEN"),
            "X-Amz-Security-Token"
        );
    }

    #[test]
    fn test_sts_cloud_id_document() {
        let credentials = Credentials::new("AKIDEXAMPLE", "secret", None, None, "test");
        let time = UNIX_EPOCH + Duration::from_secs(1_700_000_000);

        let doc = decode_json(&sts_cloud_id(credentials, time).unwrap());
        assert_eq!(doc["sts_request_method"], "POST");
        assert_eq!(decode_str(&doc["sts_request_url"]), STS_URL);
        assert_eq!(decode_str(&doc["sts_request_body"]), STS_BODY);

        let headers: Value =
            serde_json::from_str(&decode_str(&doc["sts_request_headers"])).unwrap();
        assert_eq!(headers["Content-Type"][0], STS_CONTENT_TYPE);
        assert_eq!(headers["X-Amz-Date"][0], "20231114T221320Z");
        let authorization = headers["Authorization"][0].as_str().unwrap();
        assert!(
            authorization.starts_with("AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20231114/us-east-1/sts/aws4_request"),
            "unexpected authorization header: {}",
            authorization
        );
    }

    #[test]
    fn test_session_token_is_forwarded() {
        let credentials = Credentials::new(
            "AKIDEXAMPLE",
            "secret",
            Some("session-token".to_string()),
            None,
            "test",
        );
        let doc = decode_json(&sts_cloud_id(credentials, SystemTime::now()).unwrap());
        let headers: Value =
            serde_json::from_str(&decode_str(&doc["sts_request_headers"])).unwrap();
        assert_eq!(headers["X-Amz-Security-Token"][0], "session-token");
    }
}
