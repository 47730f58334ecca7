use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::require_name;
use super::{EntityMetadata, EntityType, GraphEntity, ValidationError};

/// Maintenance status of a software project.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ProjectStatus {
    #[default]
    Active,
    Maintenance,
    Deprecated,
    Archived,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Maintenance => "maintenance",
            Self::Deprecated => "deprecated",
            Self::Archived => "archived",
        }
    }
}

impl FromStr for ProjectStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "maintenance" => Ok(Self::Maintenance),
            "deprecated" => Ok(Self::Deprecated),
            "archived" => Ok(Self::Archived),
            _ => Err(ValidationError::UnknownVariant {
                field: "project status",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for ProjectStatus {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The root record: a software project whose features and components hang off it.
///
/// `name` is the join key every `has_feature` and `has_component` edge uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ProjectInput")]
pub struct Project {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    framework: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    license: Option<String>,
}

/// Input for constructing a [`Project`]. Only `name` is required.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectInput {
    pub name: String,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    /// Defaults to `Active` if not specified.
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
}

impl Project {
    pub fn new(input: ProjectInput) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_name("project", input.name)?,
            repo_url: input.repo_url,
            language: input.language,
            framework: input.framework,
            version: input.version,
            status: input.status.unwrap_or_default(),
            description: input.description,
            license: input.license,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn repo_url(&self) -> Option<&str> {
        self.repo_url.as_deref()
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn framework(&self) -> Option<&str> {
        self.framework.as_deref()
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn license(&self) -> Option<&str> {
        self.license.as_deref()
    }
}

impl TryFrom<ProjectInput> for Project {
    type Error = ValidationError;

    fn try_from(input: ProjectInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

impl GraphEntity for Project {
    fn entity_name(&self) -> &str {
        &self.name
    }

    fn entity_type(&self) -> EntityType {
        EntityType::SoftwareProject
    }

    fn summary(&self) -> Option<&str> {
        self.description()
    }

    fn metadata(&self) -> EntityMetadata {
        let mut metadata = EntityMetadata::new();
        metadata.insert("name", self.name.as_str());
        metadata.insert_opt("repo_url", self.repo_url());
        metadata.insert_opt("language", self.language());
        metadata.insert_opt("framework", self.framework());
        metadata.insert_opt("version", self.version());
        metadata.insert("status", self.status.as_str());
        metadata.insert_opt("description", self.description());
        metadata.insert_opt("license", self.license());
        metadata
    }
}
