use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;

use super::{ClientError, GraphClient};
use crate::models::EntityMetadata;

/// One call received by a [`RecordingGraphClient`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum RecordedCall {
    Entity {
        name: String,
        entity_type: String,
        summary: Option<String>,
        metadata: EntityMetadata,
    },
    Relationship {
        source_entity: String,
        target_entity: String,
        relationship_type: String,
        fact: String,
    },
}

/// In-memory graph client that records every call in arrival order.
///
/// Used for dry runs. It can be told to fail on exactly one attempt (zero
/// based) to exercise abort behavior. Calls before it stay recorded; calls
/// after it succeed again.
#[derive(Debug, Default)]
pub struct RecordingGraphClient {
    calls: Mutex<Vec<RecordedCall>>,
    attempts: AtomicUsize,
    fail_at: Option<usize>,
}

impl RecordingGraphClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// A client whose attempt number `index` fails with a server error.
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    /// Calls received so far, failed ones included.
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("recording lock poisoned").clone()
    }

    fn record(&self, call: RecordedCall) -> Result<(), ClientError> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(attempt) {
            return Err(ClientError::Server(format!(
                "recording client refused call {}",
                attempt
            )));
        }
        self.calls.lock().expect("recording lock poisoned").push(call);
        Ok(())
    }
}

#[async_trait]
impl GraphClient for RecordingGraphClient {
    async fn add_entity(
        &self,
        name: &str,
        entity_type: &str,
        summary: Option<&str>,
        metadata: &EntityMetadata,
    ) -> Result<(), ClientError> {
        self.record(RecordedCall::Entity {
            name: name.to_string(),
            entity_type: entity_type.to_string(),
            summary: summary.map(str::to_string),
            metadata: metadata.clone(),
        })
    }

    async fn add_relationship(
        &self,
        source_entity: &str,
        target_entity: &str,
        relationship_type: &str,
        fact: &str,
    ) -> Result<(), ClientError> {
        self.record(RecordedCall::Relationship {
            source_entity: source_entity.to_string(),
            target_entity: target_entity.to_string(),
            relationship_type: relationship_type.to_string(),
            fact: fact.to_string(),
        })
    }
}
