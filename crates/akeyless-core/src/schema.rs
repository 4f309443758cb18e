//! Resource schema declarations and JSON Schema validation
//!
//! Every resource and data source declares its attributes once. The same
//! declaration drives configuration validation (compiled to a draft-07 JSON
//! Schema and checked with `jsonschema`), default values, set normalization
//! and replacement detection for force-new attributes.

use crate::error::{Error, Result};
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::debug;

/// Attribute value types understood by the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
    Int,
    Bool,
    /// Unordered set of strings
    StringSet,
}

impl AttributeType {
    fn json_schema(self) -> Value {
        match self {
            AttributeType::String => json!({ "type": "string" }),
            AttributeType::Int => json!({ "type": "integer" }),
            AttributeType::Bool => json!({ "type": "boolean" }),
            AttributeType::StringSet => json!({ "type": "array", "items": { "type": "string" } }),
        }
    }

    /// Whether `value` has the shape of this type (null is always accepted)
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (AttributeType::String, Value::String(_)) => true,
            (AttributeType::Int, Value::Number(n)) => n.is_i64(),
            (AttributeType::Bool, Value::Bool(_)) => true,
            (AttributeType::StringSet, Value::Array(items)) => items.iter().all(Value::is_string),
            _ => false,
        }
    }

    /// Whether `value` is unset or the zero value of this type
    pub fn is_zero(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) => true,
            (AttributeType::String, Value::String(s)) => s.is_empty(),
            (AttributeType::Int, Value::Number(n)) => n.as_i64() == Some(0),
            (AttributeType::Bool, Value::Bool(b)) => !b,
            (AttributeType::StringSet, Value::Array(items)) => items.is_empty(),
            _ => false,
        }
    }
}

/// A single attribute declaration
#[derive(Debug, Clone, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub description: &'static str,
    pub required: bool,
    pub optional: bool,
    pub computed: bool,
    pub sensitive: bool,
    pub force_new: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl Attribute {
    fn new(name: &'static str, kind: AttributeType, description: &'static str) -> Self {
        Self {
            name,
            kind,
            description,
            required: false,
            optional: true,
            computed: false,
            sensitive: false,
            force_new: false,
            default: None,
        }
    }

    pub fn string(name: &'static str, description: &'static str) -> Self {
        Self::new(name, AttributeType::String, description)
    }

    pub fn int(name: &'static str, description: &'static str) -> Self {
        Self::new(name, AttributeType::Int, description)
    }

    pub fn bool(name: &'static str, description: &'static str) -> Self {
        Self::new(name, AttributeType::Bool, description)
    }

    pub fn string_set(name: &'static str, description: &'static str) -> Self {
        Self::new(name, AttributeType::StringSet, description)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    /// Set by the server. Combine with `optional` semantics by leaving the
    /// attribute optional; call [`Attribute::computed_only`] to forbid it in
    /// configuration.
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self
    }

    pub fn computed_only(mut self) -> Self {
        self.computed = true;
        self.optional = false;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn force_new(mut self) -> Self {
        self.force_new = true;
        self
    }

    pub fn default_value(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Whether the attribute may appear in configuration
    pub fn configurable(&self) -> bool {
        self.required || self.optional
    }
}

/// Schema of one resource or data source type
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSchema {
    pub name: &'static str,
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl ResourceSchema {
    pub fn new(name: &'static str, description: &'static str, attributes: Vec<Attribute>) -> Self {
        Self {
            name,
            description,
            attributes,
        }
    }

    /// Look up an attribute declaration by name
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Draft-07 JSON Schema for the configurable attributes
    pub fn json_schema(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for attr in self.attributes.iter().filter(|a| a.configurable()) {
            let mut property = attr.kind.json_schema();
            if let Some(obj) = property.as_object_mut() {
                obj.insert("description".into(), Value::from(attr.description));
            }
            properties.insert(attr.name.to_string(), property);
            if attr.required {
                required.push(Value::from(attr.name));
            }
        }

        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": self.name,
            "type": "object",
            "additionalProperties": false,
            "required": required,
            "properties": properties,
        })
    }

    /// Validate a configuration object, reporting every violation at once
    pub fn validate(&self, config: &Value) -> Result<()> {
        let schema = self.json_schema();
        let validator = jsonschema::validator_for(&schema).map_err(|e| {
            Error::invalid_config(format!("Failed to compile schema {}: {}", self.name, e))
        })?;

        let errors: Vec<String> = validator
            .iter_errors(config)
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
            debug!("{} configuration rejected with {} errors", self.name, errors.len());
            return Err(Error::schema_validation(errors));
        }

        Ok(())
    }

    /// Force-new attributes whose values differ between two attribute maps
    ///
    /// An unset attribute and one holding its type's zero value compare equal.
    pub fn replacement_fields(
        &self,
        prior: &Map<String, Value>,
        planned: &Map<String, Value>,
    ) -> Vec<&'static str> {
        self.attributes
            .iter()
            .filter(|a| a.force_new)
            .filter(|a| {
                let before = prior.get(a.name).unwrap_or(&Value::Null);
                let after = planned.get(a.name).unwrap_or(&Value::Null);
                match (a.kind.is_zero(before), a.kind.is_zero(after)) {
                    (true, true) => false,
                    (false, false) => before != after,
                    _ => true,
                }
            })
            .map(|a| a.name)
            .collect()
    }
}
