//! Projection of project records onto a knowledge graph.
//!
//! - [`projector`]: pure derivation of `depends_on` edges.
//! - [`populate`]: the sequential write pass against a [`GraphClient`].
//! - [`HttpGraphClient`] talks to a remote store; [`RecordingGraphClient`]
//!   keeps calls in memory for dry runs.

mod client;
mod edge;
mod http;
pub mod populate;
pub mod projector;
mod recording;
pub mod types;

pub use client::{ClientError, GraphClient};
pub use edge::{Edge, RelationshipType};
pub use http::HttpGraphClient;
pub use populate::{
    add_component_dependencies, populate_catalog, populate_components, populate_features,
    populate_project, PopulationReport,
};
pub use projector::{external_dependencies, project_dependencies};
pub use recording::{RecordedCall, RecordingGraphClient};
