use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::require_name;
use super::{EntityMetadata, EntityType, GraphEntity, ValidationError};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ComponentType {
    Service,
    Module,
    Library,
    Package,
    Plugin,
}

impl ComponentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Module => "module",
            Self::Library => "library",
            Self::Package => "package",
            Self::Plugin => "plugin",
        }
    }
}

impl FromStr for ComponentType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" => Ok(Self::Service),
            "module" => Ok(Self::Module),
            "library" => Ok(Self::Library),
            "package" => Ok(Self::Package),
            "plugin" => Ok(Self::Plugin),
            _ => Err(ValidationError::UnknownVariant {
                field: "component type",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ComponentType {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An architectural component, service, or module of a project.
///
/// `dependencies` holds raw names in declaration order. Some refer to other
/// components of the same project (internal), the rest are third-party
/// libraries (external). Only internal names become `depends_on` edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ComponentInput")]
pub struct Component {
    name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<ComponentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    dependencies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Input for constructing a [`Component`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentInput {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<ComponentType>,
    /// Location in the repository, e.g. `src/engine/`.
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Component {
    pub fn new(input: ComponentInput) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_name("component", input.name)?,
            kind: input.kind,
            path: input.path,
            language: input.language,
            dependencies: input.dependencies,
            description: input.description,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> Option<ComponentType> {
        self.kind
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl TryFrom<ComponentInput> for Component {
    type Error = ValidationError;

    fn try_from(input: ComponentInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

impl GraphEntity for Component {
    fn entity_name(&self) -> &str {
        &self.name
    }

    fn entity_type(&self) -> EntityType {
        EntityType::Component
    }

    fn summary(&self) -> Option<&str> {
        self.description()
    }

    fn metadata(&self) -> EntityMetadata {
        let mut metadata = EntityMetadata::new();
        metadata.insert("name", self.name.as_str());
        metadata.insert_opt("type", self.kind.map(|k| k.as_str()));
        metadata.insert_opt("path", self.path());
        metadata.insert_opt("language", self.language());
        metadata.insert("dependencies", self.dependencies.clone());
        metadata.insert_opt("description", self.description());
        metadata
    }
}
