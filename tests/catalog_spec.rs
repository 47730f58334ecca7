use std::fs;

use project_graph::catalog::{Catalog, CatalogError};
use project_graph::graph::{external_dependencies, project_dependencies};
use project_graph::models::*;
use speculate2::speculate;

const CATALOG_JSON: &str = r#"{
    "project": {
        "name": "Harbor",
        "language": "Rust",
        "status": "maintenance"
    },
    "features": [
        { "name": "Ingest", "status": "completed", "priority": "high", "release_version": "1.0.0" },
        { "name": "Replay" }
    ],
    "components": [
        { "name": "harbor-core", "type": "library", "dependencies": ["serde", "tokio"] },
        { "name": "harbor-cli", "type": "package", "path": "crates/cli", "dependencies": ["harbor-core", "clap"] }
    ]
}"#;

speculate! {
    describe "bundled example" {
        it "builds the AgentForge catalog" {
            let catalog = Catalog::agentforge().expect("Bundled catalog invalid");

            assert_eq!(catalog.project().name(), "AgentForge");
            assert_eq!(catalog.project().framework(), Some("Next.js"));
            assert_eq!(catalog.features().len(), 4);
            assert_eq!(catalog.components().len(), 4);
            assert_eq!(catalog.features()[2].status(), FeatureStatus::InProgress);
            assert_eq!(catalog.features()[3].priority(), Some(Priority::Critical));
        }

        it "has only external component dependencies" {
            let catalog = Catalog::agentforge().expect("Bundled catalog invalid");

            assert!(project_dependencies(catalog.components()).is_empty());
            assert_eq!(
                external_dependencies(&catalog.components()[0], catalog.components()),
                vec!["React", "Next.js", "TailwindCSS"]
            );
        }
    }

    describe "from_json_str" {
        it "parses records and applies defaults" {
            let catalog = Catalog::from_json_str(CATALOG_JSON).expect("Failed to parse");

            assert_eq!(catalog.project().status(), ProjectStatus::Maintenance);
            assert_eq!(catalog.features()[1].status(), FeatureStatus::Planned);
            assert_eq!(catalog.components()[1].kind(), Some(ComponentType::Package));
            assert_eq!(catalog.components()[1].path(), Some("crates/cli"));
        }

        it "derives edges from a parsed catalog" {
            let catalog = Catalog::from_json_str(CATALOG_JSON).expect("Failed to parse");

            let edges = project_dependencies(catalog.components());
            assert_eq!(edges.len(), 1);
            assert_eq!(edges[0].source, "harbor-cli");
            assert_eq!(edges[0].target, "harbor-core");
        }

        it "treats missing feature and component lists as empty" {
            let catalog = Catalog::from_json_str(r#"{"project": {"name": "Bare"}}"#)
                .expect("Failed to parse");

            assert!(catalog.features().is_empty());
            assert!(catalog.components().is_empty());
        }

        it "rejects an unknown feature status" {
            let result = Catalog::from_json_str(
                r#"{"project": {"name": "P"}, "features": [{"name": "F", "status": "shipped"}]}"#,
            );

            match result {
                Err(CatalogError::Parse(e)) => {
                    assert!(e.to_string().contains("unknown feature status `shipped`"));
                }
                other => panic!("Expected parse error, got {:?}", other),
            }
        }

        it "rejects an empty project name" {
            let result = Catalog::from_json_str(r#"{"project": {"name": ""}}"#);
            assert!(matches!(result, Err(CatalogError::Parse(_))));
        }

        it "rejects duplicate component names" {
            let result = Catalog::from_json_str(
                r#"{"project": {"name": "P"}, "components": [{"name": "core"}, {"name": "core"}]}"#,
            );

            match result {
                Err(CatalogError::Validation(err)) => assert_eq!(
                    err,
                    ValidationError::DuplicateName {
                        record: "component",
                        name: "core".to_string(),
                    }
                ),
                other => panic!("Expected validation error, got {:?}", other),
            }
        }

        it "rejects duplicate names when deserialized directly" {
            let result = serde_json::from_str::<Catalog>(
                r#"{"project": {"name": "P"}, "components": [{"name": "core"}, {"name": "core"}]}"#,
            );

            let err = result.unwrap_err();
            assert!(err.to_string().contains("duplicate component name `core`"));
        }

        it "rejects duplicate feature names" {
            let result = Catalog::from_json_str(
                r#"{"project": {"name": "P"}, "features": [{"name": "F"}, {"name": "F"}]}"#,
            );
            assert!(matches!(result, Err(CatalogError::Validation(_))));
        }
    }

    describe "load" {
        it "reads a catalog file" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("catalog.json");
            fs::write(&path, CATALOG_JSON).expect("Failed to write catalog");

            let catalog = Catalog::load(&path).expect("Failed to load");
            assert_eq!(catalog.project().name(), "Harbor");
        }

        it "reports the path of a missing file" {
            let dir = tempfile::tempdir().expect("Failed to create temp dir");
            let path = dir.path().join("missing.json");

            let err = Catalog::load(&path).unwrap_err();
            assert!(matches!(err, CatalogError::Io { .. }));
            assert!(err.to_string().contains("missing.json"));
        }

        it "round-trips a serialized catalog" {
            let catalog = Catalog::agentforge().expect("Bundled catalog invalid");
            let json = serde_json::to_string(&catalog).expect("Failed to serialize");

            assert_eq!(Catalog::from_json_str(&json).expect("Failed to parse"), catalog);
        }
    }
}
