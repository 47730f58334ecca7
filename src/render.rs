//! Console rendering of catalogs, edges and recorded graph calls.

use crate::catalog::Catalog;
use crate::graph::{Edge, RecordedCall};
use crate::models::FeatureStatus;

const RULE_WIDTH: usize = 60;

const COMPLETED: &str = "✅";
const IN_PROGRESS: &str = "🚧";
const PLANNED: &str = "📋";
const DEPRECATED: &str = "⚠️";

/// Get the status symbol for a feature status.
fn status_symbol(status: FeatureStatus) -> &'static str {
    match status {
        FeatureStatus::Completed => COMPLETED,
        FeatureStatus::InProgress => IN_PROGRESS,
        FeatureStatus::Planned => PLANNED,
        FeatureStatus::Deprecated => DEPRECATED,
    }
}

fn or_none(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

/// Render the project overview printed by `pgraph show`.
///
/// Example output:
/// ```text
/// 📦 Project Definition:
///    Name: AgentForge
///    Language: TypeScript
///
/// 🎯 Features:
///    ✅ Workflow Builder (completed)
///
/// 🧩 Components:
///    📁 API Routes (service)
///       Path: src/app/api/
///       Dependencies: Next.js, Prisma
/// ```
pub fn render_summary(catalog: &Catalog) -> String {
    let project = catalog.project();
    let mut output = String::new();

    output.push_str("📦 Project Definition:\n");
    output.push_str(&format!("   Name: {}\n", project.name()));
    output.push_str(&format!("   Language: {}\n", or_none(project.language())));
    output.push_str(&format!("   Framework: {}\n", or_none(project.framework())));
    output.push_str(&format!("   Version: {}\n", or_none(project.version())));
    output.push('\n');

    output.push_str("🎯 Features:\n");
    for feature in catalog.features() {
        output.push_str(&format!(
            "   {} {} ({})\n",
            status_symbol(feature.status()),
            feature.name(),
            feature.status()
        ));
    }
    output.push('\n');

    output.push_str("🧩 Components:\n");
    for component in catalog.components() {
        let kind = component.kind().map(|k| k.as_str()).unwrap_or("unknown");
        output.push_str(&format!("   📁 {} ({})\n", component.name(), kind));
        output.push_str(&format!("      Path: {}\n", or_none(component.path())));
        output.push_str(&format!(
            "      Dependencies: {}\n",
            component.dependencies().join(", ")
        ));
    }

    output
}

/// The summary framed by a title banner and a closing footer on how to populate.
pub fn render_report(catalog: &Catalog) -> String {
    let rule = rule();
    let mut output = String::new();
    output.push_str(&format!("{}\n", rule));
    output.push_str(&format!(
        "Software Project Schema - {}\n",
        catalog.project().name()
    ));
    output.push_str(&format!("{}\n\n", rule));
    output.push_str(&render_summary(catalog));
    output.push('\n');
    output.push_str(&format!("{}\n", rule));
    output.push_str("To populate the knowledge graph, run `pgraph populate`\n");
    output.push_str("(add --dry-run to record the calls without sending them).\n");
    output.push_str(&format!("{}\n", rule));
    output
}

/// Full-width separator line.
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// One line per edge, or a placeholder when there are none.
pub fn render_edges(edges: &[Edge]) -> String {
    if edges.is_empty() {
        return "(no internal dependencies)\n".to_string();
    }
    let mut output = String::new();
    for edge in edges {
        output.push_str(&format!("🔗 {}\n", edge));
    }
    output
}

/// One line per recorded call, numbered from 1.
pub fn render_calls(calls: &[RecordedCall]) -> String {
    let mut output = String::new();
    for (i, call) in calls.iter().enumerate() {
        match call {
            RecordedCall::Entity {
                name, entity_type, ..
            } => {
                output.push_str(&format!("{:>3}. add_entity {} [{}]\n", i + 1, name, entity_type));
            }
            RecordedCall::Relationship {
                source_entity,
                target_entity,
                relationship_type,
                ..
            } => {
                output.push_str(&format!(
                    "{:>3}. add_relationship {} → {} → {}\n",
                    i + 1,
                    source_entity,
                    relationship_type,
                    target_entity
                ));
            }
        }
    }
    output
}
