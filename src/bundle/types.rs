use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use uuid::Uuid;

use super::validator::SchemaValidator;

/// Spec version stamped on envelopes the server builds itself.
const SPEC_VERSION: &str = "2.0";

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("unable to convert json to bundle: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid bundle: {}", .messages.join("; "))]
    Invalid { messages: Vec<String> },
    #[error("empty bundle: no objects to ingest")]
    Empty,
}

/// A batch of intelligence objects, parsed once from a request body and
/// discarded after its objects are handed to the persistence task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bundle {
    #[serde(rename = "type", default)]
    pub object_type: String,
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub spec_version: String,
    #[serde(default)]
    pub objects: Vec<Value>,
}

impl Bundle {
    /// Deserializes submitted bytes. Structurally malformed JSON is a decode
    /// error; shape problems are left to [`Bundle::validate`].
    pub fn decode(bytes: &[u8]) -> Result<Bundle, BundleError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Wraps server-side objects in a fresh envelope for listing responses.
    pub fn wrap(objects: Vec<Value>) -> Bundle {
        Bundle {
            object_type: "bundle".to_string(),
            id: format!("bundle--{}", Uuid::new_v4()),
            spec_version: SPEC_VERSION.to_string(),
            objects,
        }
    }

    /// Validates every object through the schema validator collaborator.
    ///
    /// A bundle with zero objects is invalid: ingestion of nothing is rejected,
    /// not silently accepted. All violations are aggregated into one error so
    /// the client sees every problem at once.
    pub fn validate(&self, validator: &dyn SchemaValidator) -> Result<(), BundleError> {
        if self.objects.is_empty() {
            return Err(BundleError::Empty);
        }

        let mut messages = Vec::new();
        for object in &self.objects {
            messages.extend(validator.validate(object));
        }

        if messages.is_empty() {
            Ok(())
        } else {
            Err(BundleError::Invalid { messages })
        }
    }
}
