//! Per-resource attribute data
//!
//! [`ResourceData`] is the provider's view of one resource instance: an
//! optional identity plus the attribute values declared by its schema. An
//! empty identity after a read means the resource no longer exists.
//! [`ResourceState`] is the serializable snapshot persisted between runs.

use crate::error::{Error, Result};
use crate::schema::{AttributeType, ResourceSchema};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Serializable snapshot of a resource instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    #[serde(rename = "type")]
    pub resource_type: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
}

/// Attribute data for one resource instance, bound to its schema
#[derive(Debug, Clone)]
pub struct ResourceData {
    schema: &'static ResourceSchema,
    id: Option<String>,
    attributes: Map<String, Value>,
}

impl ResourceData {
    /// Empty data with schema defaults applied
    pub fn new(schema: &'static ResourceSchema) -> Self {
        let mut attributes = Map::new();
        for attr in &schema.attributes {
            if let Some(default) = &attr.default {
                attributes.insert(attr.name.to_string(), default.clone());
            }
        }
        Self {
            schema,
            id: None,
            attributes,
        }
    }

    /// Validate configuration against the schema and load it
    pub fn from_config(schema: &'static ResourceSchema, config: &Value) -> Result<Self> {
        schema.validate(config)?;
        let mut data = Self::new(schema);
        data.apply_config(config)?;
        Ok(data)
    }

    /// Data for an import: only the identity is known
    pub fn with_id(schema: &'static ResourceSchema, id: impl Into<String>) -> Self {
        let mut data = Self::new(schema);
        data.set_id(id);
        data
    }

    /// Rebuild data from a persisted snapshot
    pub fn from_state(schema: &'static ResourceSchema, state: ResourceState) -> Result<Self> {
        if state.resource_type != schema.name {
            return Err(Error::invalid_config(format!(
                "state holds a {} but {} was requested",
                state.resource_type, schema.name
            )));
        }
        let mut data = Self {
            schema,
            id: state.id,
            attributes: Map::new(),
        };
        for (key, value) in state.attributes {
            data.set(&key, value)?;
        }
        Ok(data)
    }

    /// Overlay configured values on top of the current attributes
    ///
    /// Computed attributes keep their current values; configurable
    /// attributes missing from `config` fall back to their defaults.
    pub fn apply_config(&mut self, config: &Value) -> Result<()> {
        self.schema.validate(config)?;
        let object = config.as_object().cloned().unwrap_or_default();

        for attr in self.schema.attributes.iter().filter(|a| a.configurable()) {
            match object.get(attr.name) {
                Some(value) => self.set(attr.name, value.clone())?,
                None if attr.computed => {}
                None => match &attr.default {
                    Some(default) => {
                        self.attributes
                            .insert(attr.name.to_string(), default.clone());
                    }
                    None => {
                        self.attributes.remove(attr.name);
                    }
                },
            }
        }
        Ok(())
    }

    pub fn schema(&self) -> &'static ResourceSchema {
        self.schema
    }

    pub fn resource_type(&self) -> &'static str {
        self.schema.name
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        let id = id.into();
        self.id = if id.is_empty() { None } else { Some(id) };
    }

    /// Mark the resource as gone
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key).filter(|v| !v.is_null())
    }

    /// String value, empty when unset
    pub fn get_string(&self, key: &str) -> String {
        self.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    }

    /// Integer value, zero when unset
    pub fn get_int(&self, key: &str) -> i64 {
        self.get(key).and_then(Value::as_i64).unwrap_or_default()
    }

    /// Boolean value, false when unset
    pub fn get_bool(&self, key: &str) -> bool {
        self.get(key).and_then(Value::as_bool).unwrap_or_default()
    }

    /// Set value, empty when unset
    pub fn get_set(&self, key: &str) -> BTreeSet<String> {
        self.get(key)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Set an attribute declared by the schema
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        let attr = self
            .schema
            .attribute(key)
            .ok_or_else(|| Error::unknown_attribute(self.schema.name, key))?;
        let value = value.into();

        if !attr.kind.accepts(&value) {
            return Err(Error::invalid_config(format!(
                "{}.{} expects {:?}, got {}",
                self.schema.name, key, attr.kind, value
            )));
        }

        let value = match (attr.kind, value) {
            (AttributeType::StringSet, Value::Array(items)) => normalize_set(items),
            (_, value) => value,
        };
        self.attributes.insert(key.to_string(), value);
        Ok(())
    }

    /// Set a string set attribute from any iterator of strings
    pub fn set_string_set<I, S>(&mut self, key: &str, items: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<Value> = items.into_iter().map(|s| Value::String(s.into())).collect();
        self.set(key, Value::Array(items))
    }

    pub fn attributes(&self) -> &Map<String, Value> {
        &self.attributes
    }

    /// Attributes with sensitive values masked, for display
    pub fn redacted_attributes(&self) -> Map<String, Value> {
        self.attributes
            .iter()
            .map(|(key, value)| {
                let sensitive = self
                    .schema
                    .attribute(key)
                    .map(|a| a.sensitive)
                    .unwrap_or(false);
                if sensitive && !value.is_null() {
                    (key.clone(), Value::from("(sensitive)"))
                } else {
                    (key.clone(), value.clone())
                }
            })
            .collect()
    }

    pub fn to_state(&self) -> ResourceState {
        ResourceState {
            resource_type: self.schema.name.to_string(),
            id: self.id.clone(),
            attributes: self.attributes.clone(),
        }
    }
}

/// Sets are order-insensitive: de-duplicate and sort
fn normalize_set(items: Vec<Value>) -> Value {
    let set: BTreeSet<String> = items
        .into_iter()
        .filter_map(|v| match v {
            Value::String(s) => Some(s),
            _ => None,
        })
        .collect();
    Value::Array(set.into_iter().map(Value::String).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Attribute;
    use serde_json::json;
    use std::sync::OnceLock;

    fn schema() -> &'static ResourceSchema {
        static SCHEMA: OnceLock<ResourceSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            ResourceSchema::new(
                "test_thing",
                "Test resource",
                vec![
                    Attribute::string("name", "Name").required().force_new(),
                    Attribute::int("access_expires", "Expiry").default_value(0),
                    Attribute::string_set("bound_ips", "IPs"),
                    Attribute::string("secret", "Secret").sensitive(),
                    Attribute::string("access_id", "Access ID").computed(),
                ],
            )
        })
    }

    #[test]
    fn test_from_config_applies_defaults_and_normalizes_sets() {
        let data = ResourceData::from_config(
            schema(),
            &json!({ "name": "a", "bound_ips": ["10.0.0.0/8", "1.1.1.1/32", "10.0.0.0/8"] }),
        )
        .unwrap();
        assert_eq!(data.get_int("access_expires"), 0);
        assert_eq!(
            data.get("bound_ips"),
            Some(&json!(["1.1.1.1/32", "10.0.0.0/8"]))
        );
        assert!(data.id().is_none());
    }

    #[test]
    fn test_zero_values_for_unset_attributes() {
        let data = ResourceData::new(schema());
        assert_eq!(data.get_string("name"), "");
        assert!(!data.get_bool("missing"));
        assert!(data.get_set("bound_ips").is_empty());
    }

    #[test]
    fn test_set_rejects_unknown_attribute_and_wrong_type() {
        let mut data = ResourceData::new(schema());
        assert!(matches!(
            data.set("nope", "x"),
            Err(Error::UnknownAttribute { .. })
        ));
        assert!(data.set("access_expires", "soon").is_err());
    }

    #[test]
    fn test_apply_config_keeps_computed_values() {
        let mut data = ResourceData::from_config(schema(), &json!({ "name": "a" })).unwrap();
        data.set("access_id", "p-123").unwrap();
        data.apply_config(&json!({ "name": "a", "access_expires": 99 }))
            .unwrap();
        assert_eq!(data.get_string("access_id"), "p-123");
        assert_eq!(data.get_int("access_expires"), 99);
    }

    #[test]
    fn test_apply_config_drops_removed_optional_values() {
        let mut data =
            ResourceData::from_config(schema(), &json!({ "name": "a", "secret": "s" })).unwrap();
        data.apply_config(&json!({ "name": "a" })).unwrap();
        assert!(data.get("secret").is_none());
    }

    #[test]
    fn test_state_snapshot_roundtrip_and_type_check() {
        let mut data = ResourceData::from_config(schema(), &json!({ "name": "a" })).unwrap();
        data.set_id("a");
        let state = data.to_state();
        let restored = ResourceData::from_state(schema(), state.clone()).unwrap();
        assert_eq!(restored.id(), Some("a"));

        let mut wrong = state;
        wrong.resource_type = "other".to_string();
        assert!(ResourceData::from_state(schema(), wrong).is_err());
    }

    #[test]
    fn test_redacted_attributes_mask_sensitive_values() {
        let data =
            ResourceData::from_config(schema(), &json!({ "name": "a", "secret": "s3cr3t" }))
                .unwrap();
        let shown = data.redacted_attributes();
        assert_eq!(shown["secret"], json!("(sensitive)"));
        assert_eq!(shown["name"], json!("a"));
    }

    #[test]
    fn test_empty_id_clears_identity() {
        let mut data = ResourceData::new(schema());
        data.set_id("x");
        data.set_id("");
        assert!(data.id().is_none());
    }
}
