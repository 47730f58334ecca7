//! The population sequence: entities first, then the edges that reference them.
//!
//! Every call is awaited before the next one is issued. The first client
//! error aborts the sequence and is returned as-is; whatever was written
//! before it stays written.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use super::{project_dependencies, ClientError, Edge, GraphClient};
use crate::catalog::Catalog;
use crate::models::{Component, Feature, GraphEntity, Project};

/// Counts of what one population pass wrote.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub entities: usize,
    pub has_feature: usize,
    pub has_component: usize,
    pub depends_on: usize,
}

impl PopulationReport {
    pub fn relationships(&self) -> usize {
        self.has_feature + self.has_component + self.depends_on
    }
}

async fn register<C, E>(client: &C, entity: &E) -> Result<(), ClientError>
where
    C: GraphClient + ?Sized,
    E: GraphEntity,
{
    client
        .add_entity(
            entity.entity_name(),
            entity.entity_type().as_str(),
            entity.summary(),
            &entity.metadata(),
        )
        .await?;
    debug!(
        entity_name = entity.entity_name(),
        entity_type = entity.entity_type().as_str(),
        "Entity added"
    );
    Ok(())
}

async fn link<C>(client: &C, edge: &Edge) -> Result<(), ClientError>
where
    C: GraphClient + ?Sized,
{
    client
        .add_relationship(&edge.source, &edge.target, edge.kind.as_str(), &edge.fact())
        .await?;
    debug!(
        source = %edge.source,
        target = %edge.target,
        relationship = edge.kind.as_str(),
        "Relationship added"
    );
    Ok(())
}

/// Register the project node.
pub async fn populate_project<C>(client: &C, project: &Project) -> Result<(), ClientError>
where
    C: GraphClient + ?Sized,
{
    register(client, project).await?;
    info!("Added project: {}", project.name());
    Ok(())
}

/// Register each feature and link it to the project. Returns the number of features.
pub async fn populate_features<C>(
    client: &C,
    project_name: &str,
    features: &[Feature],
) -> Result<usize, ClientError>
where
    C: GraphClient + ?Sized,
{
    for feature in features {
        register(client, feature).await?;
        link(client, &Edge::has_feature(project_name, feature.name())).await?;
        info!("Added feature: {}", feature.name());
    }
    Ok(features.len())
}

/// Register each component and link it to the project. Returns the number of components.
pub async fn populate_components<C>(
    client: &C,
    project_name: &str,
    components: &[Component],
) -> Result<usize, ClientError>
where
    C: GraphClient + ?Sized,
{
    for component in components {
        register(client, component).await?;
        link(client, &Edge::has_component(project_name, component.name())).await?;
        info!("Added component: {}", component.name());
    }
    Ok(components.len())
}

/// Send the internal `depends_on` edges between `components`.
///
/// The components must already be registered. Returns the number of edges sent.
pub async fn add_component_dependencies<C>(
    client: &C,
    components: &[Component],
) -> Result<usize, ClientError>
where
    C: GraphClient + ?Sized,
{
    let edges = project_dependencies(components);
    for edge in &edges {
        link(client, edge).await?;
        info!("{}", edge);
    }
    Ok(edges.len())
}

/// Run the whole sequence for a catalog: project, features, components, dependencies.
pub async fn populate_catalog<C>(client: &C, catalog: &Catalog) -> Result<PopulationReport, ClientError>
where
    C: GraphClient + ?Sized,
{
    let run_id = Uuid::new_v4();
    let started_at = Utc::now();
    let project_name = catalog.project().name();
    info!(%run_id, project = project_name, "Populating knowledge graph");

    populate_project(client, catalog.project()).await?;
    let features = populate_features(client, project_name, catalog.features()).await?;
    let components = populate_components(client, project_name, catalog.components()).await?;
    let depends_on = add_component_dependencies(client, catalog.components()).await?;

    let report = PopulationReport {
        run_id,
        started_at,
        finished_at: Utc::now(),
        entities: 1 + features + components,
        has_feature: features,
        has_component: components,
        depends_on,
    };
    info!(
        %run_id,
        entities = report.entities,
        relationships = report.relationships(),
        "Population complete"
    );
    Ok(report)
}
