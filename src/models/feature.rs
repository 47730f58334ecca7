use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::validation::require_name;
use super::{EntityMetadata, EntityType, GraphEntity, ValidationError};

/// Delivery status of a feature.
///
/// - `Planned`: Not started
/// - `InProgress`: Being built
/// - `Completed`: Shipped
/// - `Deprecated`: Kept for reference, no longer offered
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum FeatureStatus {
    #[default]
    Planned,
    InProgress,
    Completed,
    Deprecated,
}

impl FeatureStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Deprecated => "deprecated",
        }
    }
}

impl FromStr for FeatureStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "deprecated" => Ok(Self::Deprecated),
            _ => Err(ValidationError::UnknownVariant {
                field: "feature status",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for FeatureStatus {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for FeatureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl FromStr for Priority {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ValidationError::UnknownVariant {
                field: "priority",
                value: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A major capability or functional area of a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FeatureInput")]
pub struct Feature {
    name: String,
    status: FeatureStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    priority: Option<Priority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    release_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Input for constructing a [`Feature`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureInput {
    pub name: String,
    /// Defaults to `Planned` if not specified.
    #[serde(default)]
    pub status: Option<FeatureStatus>,
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Version the feature shipped (or will ship) in.
    #[serde(default)]
    pub release_version: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Feature {
    pub fn new(input: FeatureInput) -> Result<Self, ValidationError> {
        Ok(Self {
            name: require_name("feature", input.name)?,
            status: input.status.unwrap_or_default(),
            priority: input.priority,
            release_version: input.release_version,
            description: input.description,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> FeatureStatus {
        self.status
    }

    pub fn priority(&self) -> Option<Priority> {
        self.priority
    }

    pub fn release_version(&self) -> Option<&str> {
        self.release_version.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

impl TryFrom<FeatureInput> for Feature {
    type Error = ValidationError;

    fn try_from(input: FeatureInput) -> Result<Self, Self::Error> {
        Self::new(input)
    }
}

impl GraphEntity for Feature {
    fn entity_name(&self) -> &str {
        &self.name
    }

    fn entity_type(&self) -> EntityType {
        EntityType::Feature
    }

    fn summary(&self) -> Option<&str> {
        self.description()
    }

    fn metadata(&self) -> EntityMetadata {
        let mut metadata = EntityMetadata::new();
        metadata.insert("name", self.name.as_str());
        metadata.insert("status", self.status.as_str());
        metadata.insert_opt("priority", self.priority.map(|p| p.as_str()));
        metadata.insert_opt("release_version", self.release_version());
        metadata.insert_opt("description", self.description());
        metadata
    }
}
