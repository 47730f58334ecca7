//! A project together with its features and components, ready to populate.
//!
//! Catalogs come either from the bundled AgentForge example or from a JSON
//! file shaped like:
//!
//! ```json
//! {
//!   "project": { "name": "AgentForge", "status": "active" },
//!   "features": [{ "name": "Feed System", "status": "completed" }],
//!   "components": [{ "name": "API Routes", "type": "service", "dependencies": ["Prisma"] }]
//! }
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::*;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid catalog: {0}")]
    Validation(#[from] ValidationError),
}

/// A validated catalog. Feature and component names are unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CatalogInput")]
pub struct Catalog {
    project: Project,
    features: Vec<Feature>,
    components: Vec<Component>,
}

/// Input for constructing a [`Catalog`].
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogInput {
    pub project: Project,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate feature or component names.
    pub fn new(
        project: Project,
        features: Vec<Feature>,
        components: Vec<Component>,
    ) -> Result<Self, ValidationError> {
        let catalog = Self {
            project,
            features,
            components,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let input: CatalogInput = serde_json::from_str(json)?;
        Ok(Self::try_from(input)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Names must be unique within features and within components.
    fn validate(&self) -> Result<(), ValidationError> {
        ensure_unique("feature", self.features.iter().map(|f| f.name()))?;
        ensure_unique("component", self.components.iter().map(|c| c.name()))?;
        Ok(())
    }

    /// The AgentForge example project.
    pub fn agentforge() -> Result<Self, ValidationError> {
        let project = Project::new(ProjectInput {
            name: "AgentForge".to_string(),
            repo_url: Some("https://github.com/example/agent-forge".to_string()),
            language: Some("TypeScript".to_string()),
            framework: Some("Next.js".to_string()),
            version: Some("0.5.0".to_string()),
            status: Some(ProjectStatus::Active),
            description: Some(
                "AI agent workflow automation platform with visual builder".to_string(),
            ),
            license: Some("MIT".to_string()),
        })?;

        let features = vec![
            Feature::new(FeatureInput {
                name: "Workflow Builder".to_string(),
                status: Some(FeatureStatus::Completed),
                priority: Some(Priority::High),
                release_version: Some("0.3.0".to_string()),
                description: Some("Visual drag-and-drop workflow creation interface".to_string()),
            })?,
            Feature::new(FeatureInput {
                name: "Feed System".to_string(),
                status: Some(FeatureStatus::Completed),
                priority: Some(Priority::Medium),
                release_version: Some("0.4.0".to_string()),
                description: Some("Real-time activity feed for agent events".to_string()),
            })?,
            Feature::new(FeatureInput {
                name: "Knowledge Graph Integration".to_string(),
                status: Some(FeatureStatus::InProgress),
                priority: Some(Priority::High),
                release_version: None,
                description: Some("Integration with AMG for persistent agent memory".to_string()),
            })?,
            Feature::new(FeatureInput {
                name: "Multi-Agent Orchestration".to_string(),
                status: Some(FeatureStatus::Planned),
                priority: Some(Priority::Critical),
                release_version: None,
                description: Some("Coordinate multiple AI agents in complex workflows".to_string()),
            })?,
        ];

        let components = vec![
            component(
                "Frontend App",
                ComponentType::Module,
                "src/app/",
                &["React", "Next.js", "TailwindCSS"],
                "Next.js frontend application",
            )?,
            component(
                "API Routes",
                ComponentType::Service,
                "src/app/api/",
                &["Next.js", "Prisma"],
                "Backend API endpoints",
            )?,
            component(
                "Workflow Engine",
                ComponentType::Module,
                "src/engine/",
                &["LangChain", "OpenAI"],
                "Core execution engine for agent workflows",
            )?,
            component(
                "MCP Integration",
                ComponentType::Library,
                "src/lib/mcp/",
                &["@modelcontextprotocol/sdk"],
                "Model Context Protocol integration layer",
            )?,
        ];

        Self::new(project, features, components)
    }
}

impl TryFrom<CatalogInput> for Catalog {
    type Error = ValidationError;

    fn try_from(input: CatalogInput) -> Result<Self, Self::Error> {
        Self::new(input.project, input.features, input.components)
    }
}

fn component(
    name: &str,
    kind: ComponentType,
    path: &str,
    dependencies: &[&str],
    description: &str,
) -> Result<Component, ValidationError> {
    Component::new(ComponentInput {
        name: name.to_string(),
        kind: Some(kind),
        path: Some(path.to_string()),
        language: Some("TypeScript".to_string()),
        dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
        description: Some(description.to_string()),
    })
}

fn ensure_unique<'a>(
    record: &'static str,
    names: impl Iterator<Item = &'a str>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ValidationError::DuplicateName {
                record,
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
