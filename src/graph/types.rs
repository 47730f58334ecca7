//! Request bodies for the graph store HTTP API.

use serde::{Deserialize, Serialize};

use crate::models::EntityMetadata;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddEntityRequest {
    pub name: String,
    pub entity_type: String,
    pub summary: Option<String>,
    pub metadata: EntityMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddRelationshipRequest {
    pub source_entity: String,
    pub target_entity: String,
    pub relationship_type: String,
    pub fact: String,
}
