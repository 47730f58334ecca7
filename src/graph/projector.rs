//! Derivation of internal `depends_on` edges from component dependency lists.

use std::collections::HashSet;

use super::Edge;
use crate::models::Component;

/// Project a component set onto its internal dependency edges.
///
/// A dependency name yields an edge only when it exactly matches (case
/// sensitive) the name of a component in `components`. Any other name is an
/// external library and is skipped without error.
///
/// Edges come out in discovery order: components in input order, and within
/// a component its dependencies in list order. Nothing is deduplicated, so a
/// dependency listed twice yields two edges, and a component naming itself
/// yields a self-loop.
pub fn project_dependencies(components: &[Component]) -> Vec<Edge> {
    let names: HashSet<&str> = components.iter().map(|c| c.name()).collect();

    let mut edges = Vec::new();
    for component in components {
        for dep in component.dependencies() {
            if names.contains(dep.as_str()) {
                edges.push(Edge::depends_on(component.name(), dep));
            }
        }
    }
    edges
}

/// Dependency names of `component` that do not resolve within `components`.
pub fn external_dependencies<'a>(component: &'a Component, components: &[Component]) -> Vec<&'a str> {
    let names: HashSet<&str> = components.iter().map(|c| c.name()).collect();
    component
        .dependencies()
        .iter()
        .map(String::as_str)
        .filter(|dep| !names.contains(dep))
        .collect()
}
