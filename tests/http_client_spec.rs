//! HTTP client tests against a stub graph store served by axum on a local port.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header::AUTHORIZATION, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};

use project_graph::catalog::Catalog;
use project_graph::config::GraphConfig;
use project_graph::graph::types::{AddEntityRequest, AddRelationshipRequest};
use project_graph::graph::*;
use project_graph::models::*;

#[derive(Clone, Default)]
struct Stub {
    entities: Arc<Mutex<Vec<AddEntityRequest>>>,
    relationships: Arc<Mutex<Vec<AddRelationshipRequest>>>,
    auth_headers: Arc<Mutex<Vec<Option<String>>>>,
}

impl Stub {
    fn record_auth(&self, headers: &HeaderMap) {
        let value = headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.auth_headers.lock().unwrap().push(value);
    }
}

async fn add_entity(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<AddEntityRequest>,
) -> StatusCode {
    stub.record_auth(&headers);
    stub.entities.lock().unwrap().push(body);
    StatusCode::CREATED
}

async fn add_relationship(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Json(body): Json<AddRelationshipRequest>,
) -> StatusCode {
    stub.record_auth(&headers);
    stub.relationships.lock().unwrap().push(body);
    StatusCode::NO_CONTENT
}

async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("Stub server failed");
    });
    format!("http://{}/api/v1", addr)
}

async fn spawn_stub() -> (Stub, String) {
    let stub = Stub::default();
    let api = Router::new()
        .route("/entities", post(add_entity))
        .route("/relationships", post(add_relationship))
        .with_state(stub.clone());
    let url = serve(Router::new().nest("/api/v1", api)).await;
    (stub, url)
}

/// A store whose every endpoint answers with `status` and `body`.
async fn spawn_failing(status: StatusCode, body: &'static str) -> String {
    let api = Router::new()
        .route("/entities", post(move || async move { (status, body) }))
        .route("/relationships", post(move || async move { (status, body) }));
    serve(Router::new().nest("/api/v1", api)).await
}

fn empty_metadata() -> EntityMetadata {
    EntityMetadata::new()
}

mod add_entity {
    use super::*;

    #[tokio::test]
    async fn posts_the_entity_as_json() {
        let (stub, url) = spawn_stub().await;
        let client = HttpGraphClient::new(url, None);

        let mut metadata = EntityMetadata::new();
        metadata.insert("name", "Workflow Engine");
        metadata.insert("dependencies", vec!["LangChain".to_string(), "OpenAI".to_string()]);

        client
            .add_entity("Workflow Engine", "component", Some("Core engine"), &metadata)
            .await
            .expect("Request failed");

        let entities = stub.entities.lock().unwrap();
        assert_eq!(
            *entities,
            vec![AddEntityRequest {
                name: "Workflow Engine".to_string(),
                entity_type: "component".to_string(),
                summary: Some("Core engine".to_string()),
                metadata,
            }]
        );
    }

    #[tokio::test]
    async fn sends_bearer_token_when_configured() {
        let (stub, url) = spawn_stub().await;
        let config = GraphConfig {
            base_url: url,
            api_key: Some("secret".to_string()),
        };
        let client = HttpGraphClient::from_config(&config);

        client
            .add_entity("AgentForge", "software_project", None, &empty_metadata())
            .await
            .expect("Request failed");

        assert_eq!(
            *stub.auth_headers.lock().unwrap(),
            vec![Some("Bearer secret".to_string())]
        );
    }

    #[tokio::test]
    async fn omits_auth_header_without_key() {
        let (stub, url) = spawn_stub().await;
        let client = HttpGraphClient::new(url, None);

        client
            .add_entity("AgentForge", "software_project", None, &empty_metadata())
            .await
            .expect("Request failed");

        assert_eq!(*stub.auth_headers.lock().unwrap(), vec![None]);
    }
}

mod add_relationship {
    use super::*;

    #[tokio::test]
    async fn posts_the_relationship_as_json() {
        let (stub, url) = spawn_stub().await;
        let client = HttpGraphClient::new(format!("{}/", url), None);

        client
            .add_relationship("A", "B", "depends_on", "A depends on B")
            .await
            .expect("Request failed");

        let relationships = stub.relationships.lock().unwrap();
        assert_eq!(relationships.len(), 1);
        assert_eq!(relationships[0].source_entity, "A");
        assert_eq!(relationships[0].target_entity, "B");
        assert_eq!(relationships[0].relationship_type, "depends_on");
        assert_eq!(relationships[0].fact, "A depends on B");
    }
}

mod error_mapping {
    use super::*;

    #[tokio::test]
    async fn maps_bad_request_with_body() {
        let url = spawn_failing(StatusCode::BAD_REQUEST, "unknown entity Ghost").await;
        let client = HttpGraphClient::new(url, None);

        let err = client
            .add_relationship("Ghost", "B", "depends_on", "Ghost depends on B")
            .await
            .unwrap_err();

        match err {
            ClientError::BadRequest(body) => assert_eq!(body, "unknown entity Ghost"),
            other => panic!("Expected BadRequest, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn maps_unauthorized() {
        let url = spawn_failing(StatusCode::UNAUTHORIZED, "").await;
        let client = HttpGraphClient::new(url, None);

        let err = client
            .add_entity("A", "component", None, &empty_metadata())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Unauthorized));
    }

    #[tokio::test]
    async fn maps_missing_route_to_not_found() {
        let url = spawn_failing(StatusCode::OK, "").await;
        let client = HttpGraphClient::new(format!("{}/missing", url), None);

        let err = client
            .add_entity("A", "component", None, &empty_metadata())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::NotFound(_)));
    }

    #[tokio::test]
    async fn maps_other_statuses_to_server_error() {
        let url = spawn_failing(StatusCode::INTERNAL_SERVER_ERROR, "store offline").await;
        let client = HttpGraphClient::new(url, None);

        let err = client
            .add_entity("A", "component", None, &empty_metadata())
            .await
            .unwrap_err();

        match err {
            ClientError::Server(msg) => assert!(msg.contains("store offline")),
            other => panic!("Expected Server, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn maps_connection_failure_to_http_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = HttpGraphClient::new(format!("http://{}", addr), None);

        let err = client
            .add_entity("A", "component", None, &empty_metadata())
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::Http(_)));
    }
}

mod end_to_end {
    use super::*;

    #[tokio::test]
    async fn populates_the_bundled_example_over_http() {
        let (stub, url) = spawn_stub().await;
        let client = HttpGraphClient::new(url, None);
        let catalog = Catalog::agentforge().expect("Bundled catalog invalid");

        let report = populate_catalog(&client, &catalog)
            .await
            .expect("Population failed");

        let entities = stub.entities.lock().unwrap();
        let relationships = stub.relationships.lock().unwrap();
        assert_eq!(entities.len(), report.entities);
        assert_eq!(relationships.len(), report.relationships());
        assert_eq!(entities[0].entity_type, "software_project");
        assert_eq!(
            entities[0].summary.as_deref(),
            Some("AI agent workflow automation platform with visual builder")
        );
        assert!(relationships
            .iter()
            .all(|r| r.relationship_type == "has_feature" || r.relationship_type == "has_component"));
    }
}
