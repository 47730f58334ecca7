//! Software project structure as typed records, projected onto a knowledge graph.
//!
//! A [`catalog::Catalog`] holds one project with its features and components.
//! [`graph::populate_catalog`] writes it to any [`graph::GraphClient`]:
//! entities first, then `has_feature`, `has_component` and the internal
//! `depends_on` edges derived by [`graph::project_dependencies`].

pub mod catalog;
pub mod config;
pub mod graph;
pub mod models;
pub mod render;
