//! Error types for akeyless-core

use thiserror::Error;

/// Result type alias using akeyless-core's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Login methods the provider understands, in the order they are offered
pub const SUPPORTED_LOGIN_METHODS: &str = "api_key_login/email_login/aws_iam_login/azure_ad_login";

/// Core error types for the Akeyless provider
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: String },

    /// Invalid configuration format
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A login block was declared more than once
    #[error("{block} block may appear only once")]
    DuplicateLoginBlock { block: String },

    /// No login method could be resolved
    #[error("please support login method: {}", SUPPORTED_LOGIN_METHODS)]
    NoLoginMethod,

    /// Token exchange or cloud identity fetch failed
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// Structured failure response from the remote API
    #[error("{context}: {body}")]
    Api {
        context: String,
        status: u16,
        body: String,
    },

    /// Network or serialization failure talking to the remote API
    #[error("{context}: {message}")]
    Transport { context: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Schema validation error
    #[error("Schema validation failed:\n{errors}")]
    SchemaValidation { errors: String },

    /// Attribute not declared by the resource schema
    #[error("Unknown attribute '{attribute}' for {resource}")]
    UnknownAttribute { resource: String, attribute: String },

    /// Resource or data source type not registered
    #[error("Unknown resource type: {name}")]
    UnknownResourceType { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a config not found error
    pub fn config_not_found(path: impl Into<String>) -> Self {
        Self::ConfigNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a duplicate login block error
    pub fn duplicate_login_block(block: impl Into<String>) -> Self {
        Self::DuplicateLoginBlock {
            block: block.into(),
        }
    }

    /// Create an authentication error
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Create an API error carrying the raw response body
    pub fn api(context: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            context: context.into(),
            status,
            body: body.into(),
        }
    }

    /// Create a transport error
    pub fn transport(context: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            context: context.into(),
            message: message.into(),
        }
    }

    /// Create a schema validation error from a list of errors
    pub fn schema_validation(errors: Vec<String>) -> Self {
        Self::SchemaValidation {
            errors: errors.join("\n"),
        }
    }

    /// Create an unknown attribute error
    pub fn unknown_attribute(resource: impl Into<String>, attribute: impl Into<String>) -> Self {
        Self::UnknownAttribute {
            resource: resource.into(),
            attribute: attribute.into(),
        }
    }

    /// Create an unknown resource type error
    pub fn unknown_resource_type(name: impl Into<String>) -> Self {
        Self::UnknownResourceType { name: name.into() }
    }

    /// Whether this error belongs to the configuration family
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::ConfigNotFound { .. }
                | Self::InvalidConfig { .. }
                | Self::DuplicateLoginBlock { .. }
                | Self::NoLoginMethod
        )
    }
}
