//! HTTP client for a remote knowledge graph store.
//!
//! Entities are posted to `{base_url}/entities` and relationships to
//! `{base_url}/relationships`, both as JSON. See [`crate::config`] for how
//! the base URL and API key are resolved.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};

use super::types::{AddEntityRequest, AddRelationshipRequest};
use super::{ClientError, GraphClient};
use crate::config::GraphConfig;
use crate::models::EntityMetadata;

#[derive(Debug, Clone)]
pub struct HttpGraphClient {
    base_url: String,
    api_key: Option<String>,
    client: Client,
}

impl HttpGraphClient {
    /// Create with explicit configuration.
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            client: Client::new(),
        }
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.base_url.clone(), config.api_key.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a request with optional auth header.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, &url);
        if let Some(ref key) = self.api_key {
            req = req.bearer_auth(key);
        }
        req
    }

    /// Map non-success statuses to ClientError. The response body is ignored on success.
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), ClientError> {
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            match status {
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(body)),
                StatusCode::BAD_REQUEST => Err(ClientError::BadRequest(body)),
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                _ => Err(ClientError::Server(format!("{}: {}", status, body))),
            }
        }
    }
}

#[async_trait]
impl GraphClient for HttpGraphClient {
    async fn add_entity(
        &self,
        name: &str,
        entity_type: &str,
        summary: Option<&str>,
        metadata: &EntityMetadata,
    ) -> Result<(), ClientError> {
        let body = AddEntityRequest {
            name: name.to_string(),
            entity_type: entity_type.to_string(),
            summary: summary.map(str::to_string),
            metadata: metadata.clone(),
        };
        let response = self
            .request(reqwest::Method::POST, "/entities")
            .json(&body)
            .send()
            .await?;
        self.handle_empty_response(response).await
    }

    async fn add_relationship(
        &self,
        source_entity: &str,
        target_entity: &str,
        relationship_type: &str,
        fact: &str,
    ) -> Result<(), ClientError> {
        let body = AddRelationshipRequest {
            source_entity: source_entity.to_string(),
            target_entity: target_entity.to_string(),
            relationship_type: relationship_type.to_string(),
            fact: fact.to_string(),
        };
        let response = self
            .request(reqwest::Method::POST, "/relationships")
            .json(&body)
            .send()
            .await?;
        self.handle_empty_response(response).await
    }
}
