use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a directed edge between two named entities.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipType {
    /// Project → Feature
    HasFeature,
    /// Project → Component
    HasComponent,
    /// Component → Component, both in the same component set
    DependsOn,
}

impl RelationshipType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::HasFeature => "has_feature",
            Self::HasComponent => "has_component",
            Self::DependsOn => "depends_on",
        }
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A directed, typed edge between two entities identified by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub kind: RelationshipType,
}

impl Edge {
    pub fn new(source: impl Into<String>, target: impl Into<String>, kind: RelationshipType) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            kind,
        }
    }

    pub fn has_feature(project: &str, feature: &str) -> Self {
        Self::new(project, feature, RelationshipType::HasFeature)
    }

    pub fn has_component(project: &str, component: &str) -> Self {
        Self::new(project, component, RelationshipType::HasComponent)
    }

    pub fn depends_on(component: &str, dependency: &str) -> Self {
        Self::new(component, dependency, RelationshipType::DependsOn)
    }

    /// Human-readable justification sent along with the edge.
    pub fn fact(&self) -> String {
        match self.kind {
            RelationshipType::HasFeature => {
                format!("{} includes the {} feature", self.source, self.target)
            }
            RelationshipType::HasComponent => {
                format!("{} contains the {} component", self.source, self.target)
            }
            RelationshipType::DependsOn => format!("{} depends on {}", self.source, self.target),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} → {}", self.source, self.kind, self.target)
    }
}
