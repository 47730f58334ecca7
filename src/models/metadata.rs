use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single metadata value attached to a graph entity.
///
/// Serialized untagged, so metadata travels as a plain JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<String>),
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for MetadataValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<Vec<String>> for MetadataValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// Field name to value mapping sent alongside an entity, sorted by key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityMetadata(BTreeMap<String, MetadataValue>);

impl EntityMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: impl Into<MetadataValue>) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Insert only when a value is present. Absent fields are left out entirely.
    pub fn insert_opt<V: Into<MetadataValue>>(&mut self, key: &str, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// The node label an entity is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    SoftwareProject,
    Feature,
    Component,
}

impl EntityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SoftwareProject => "software_project",
            Self::Feature => "feature",
            Self::Component => "component",
        }
    }
}

/// A record that can be registered as a node in the knowledge graph.
pub trait GraphEntity {
    fn entity_name(&self) -> &str;

    fn entity_type(&self) -> EntityType;

    fn summary(&self) -> Option<&str>;

    fn metadata(&self) -> EntityMetadata;
}
