use async_trait::async_trait;
use thiserror::Error;

use crate::models::EntityMetadata;

/// Graph store client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: API key required or invalid")]
    Unauthorized,

    #[error("Server error: {0}")]
    Server(String),
}

/// Write access to an external knowledge graph store.
///
/// Both calls identify entities by name. `add_entity` registers or upserts a
/// node; `add_relationship` adds a directed, typed edge between two names
/// that were registered earlier.
#[async_trait]
pub trait GraphClient: Send + Sync {
    async fn add_entity(
        &self,
        name: &str,
        entity_type: &str,
        summary: Option<&str>,
        metadata: &EntityMetadata,
    ) -> Result<(), ClientError>;

    async fn add_relationship(
        &self,
        source_entity: &str,
        target_entity: &str,
        relationship_type: &str,
        fact: &str,
    ) -> Result<(), ClientError>;
}
