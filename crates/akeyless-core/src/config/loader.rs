//! Provider configuration file loading and parsing

use crate::error::{Error, Result};
use crate::types::{EnvCredentials, ProviderConfig, RawProviderConfig};
use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{json, Value};
use std::fs;
use tracing::debug;

/// Configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["akeyless.yaml", "akeyless.yml"];

/// Loaded provider configuration file
#[derive(Debug, Clone)]
pub struct ProviderConfigFile {
    /// The parsed configuration, before login block validation
    pub raw: RawProviderConfig,

    /// Path to the configuration file
    pub config_path: Utf8PathBuf,
}

impl ProviderConfigFile {
    /// Load configuration from the specified path or search for it
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let (config_path, content) = match path {
            Some(p) => {
                let content = fs::read_to_string(p).map_err(|e| {
                    if e.kind() == std::io::ErrorKind::NotFound {
                        Error::config_not_found(p.as_str())
                    } else {
                        Error::Io(e)
                    }
                })?;
                (p.to_owned(), content)
            }
            None => Self::find_config()?,
        };

        debug!("Loading provider configuration from {}", config_path);
        let raw = parse_provider_config(&content)?;

        Ok(Self { raw, config_path })
    }

    /// Validate login blocks, resolving API key fields from `env`
    pub fn into_config(self, env: &EnvCredentials) -> Result<ProviderConfig> {
        self.raw.validate(env)
    }

    /// Find configuration file in current directory or parent directories
    fn find_config() -> Result<(Utf8PathBuf, String)> {
        let cwd = std::env::current_dir().map_err(Error::Io)?;
        let cwd = Utf8PathBuf::try_from(cwd)
            .map_err(|_| Error::invalid_config("Current directory path is not valid UTF-8"))?;

        let mut current = cwd.as_path();

        loop {
            for name in CONFIG_FILE_NAMES {
                let path = current.join(name);
                if path.exists() {
                    let content = fs::read_to_string(&path)?;
                    return Ok((path, content));
                }
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::config_not_found(
            "akeyless.yaml (searched current and parent directories)",
        ))
    }
}

/// Parse and schema-check provider configuration YAML
///
/// An empty document is a valid configuration (all defaults).
pub fn parse_provider_config(yaml: &str) -> Result<RawProviderConfig> {
    let value: Value = if yaml.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml_ng::from_str(yaml)?
    };
    let value = if value.is_null() { json!({}) } else { value };

    validate_provider_config(&value)?;
    Ok(serde_json::from_value(value)?)
}

/// Check provider configuration shape against its JSON Schema
pub fn validate_provider_config(value: &Value) -> Result<()> {
    let schema = provider_config_schema();
    let validator = jsonschema::validator_for(&schema).map_err(|e| {
        Error::invalid_config(format!("Failed to compile provider schema: {}", e))
    })?;

    let errors: Vec<String> = validator
        .iter_errors(value)
        .map(|e| {
            let path = e.instance_path().to_string();
            if path.is_empty() {
                format!("  - {}", e)
            } else {
                format!("  - {}: {}", path, e)
            }
        })
        .collect();

    if !errors.is_empty() {
        return Err(Error::schema_validation(errors));
    }
    Ok(())
}

/// JSON Schema of the provider configuration file
pub fn provider_config_schema() -> Value {
    let access_id_block = json!({
        "type": "array",
        "items": {
            "type": "object",
            "additionalProperties": false,
            "required": ["access_id"],
            "properties": { "access_id": { "type": "string" } }
        }
    });

    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "api_gateway_address": { "type": "string" },
            "api_key_login": {
                "type": "array",
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "access_id": { "type": "string" },
                        "access_key": { "type": "string" }
                    }
                }
            },
            "email_login": {
                "type": "array",
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "required": ["admin_email", "admin_password"],
                    "properties": {
                        "admin_email": { "type": "string" },
                        "admin_password": { "type": "string" }
                    }
                }
            },
            "aws_iam_login": access_id_block.clone(),
            "azure_ad_login": access_id_block
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
api_gateway_address: https://gw.example.com:8081
api_key_login:
  - access_id: p-abc
    access_key: k-abc
aws_iam_login:
  - access_id: p-aws
"#;
        let raw = parse_provider_config(yaml).unwrap();
        assert_eq!(
            raw.api_gateway_address.as_deref(),
            Some("https://gw.example.com:8081")
        );
        assert_eq!(raw.api_key_login.len(), 1);
        assert_eq!(raw.aws_iam_login[0].access_id, "p-aws");
    }

    #[test]
    fn test_parse_empty_document() {
        let raw = parse_provider_config("").unwrap();
        assert!(raw.api_gateway_address.is_none());
        assert!(raw.email_login.is_empty());
    }

    #[test]
    fn test_schema_rejects_incomplete_email_block() {
        let yaml = "email_login:\n  - admin_email: a@b.c\n";
        let err = parse_provider_config(yaml).unwrap_err();
        assert!(matches!(err, Error::SchemaValidation { .. }), "got: {:?}", err);
    }

    #[test]
    fn test_schema_rejects_unknown_block() {
        let err = parse_provider_config("token_login: []\n").unwrap_err();
        assert!(matches!(err, Error::SchemaValidation { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let result = ProviderConfigFile::load(Some(Utf8Path::new("/nonexistent/akeyless.yaml")));
        assert!(matches!(result, Err(Error::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "email_login:\n  - admin_email: a@b.c\n    admin_password: pw").unwrap();
        let path = Utf8PathBuf::try_from(file.path().to_path_buf()).unwrap();

        let loaded = ProviderConfigFile::load(Some(&path)).unwrap();
        let config = loaded.into_config(&EnvCredentials::default()).unwrap();
        let email = config.email_login.unwrap();
        assert_eq!(email.admin_email, "a@b.c");
        assert_eq!(email.admin_password.as_str(), "pw");
    }
}
