//! The context threaded through a pipeline invocation.

use super::{Message, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// The conversation state a pipeline invocation threads through its stages.
///
/// Stages never mutate the instance they receive: each takes a
/// [`stage_copy`](Self::stage_copy), works on that, and returns it. Message
/// values are shared between a context and its copies until a slot is
/// individually replaced, so unchanged messages keep a stable identity across
/// stages.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PipelineContext {
    /// Ordered conversation history.
    #[serde(default)]
    pub messages: Vec<Arc<Message>>,
    /// Per-stage diagnostic and result data; keys are namespaced per stage
    /// (`"<stage>.<field>"`) to avoid collision.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl PipelineContext {
    /// Creates an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message.
    #[must_use]
    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(Arc::new(message));
        self
    }

    /// Adds a metadata entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Appends a message in place.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(Arc::new(message));
    }

    /// Produces a structurally independent copy for safe stage-local
    /// mutation: the message container and the metadata map are fresh, the
    /// message values inside stay shared until individually replaced.
    #[must_use]
    pub fn stage_copy(&self) -> Self {
        Self {
            messages: self.messages.clone(),
            metadata: self.metadata.clone(),
        }
    }

    /// Replaces the message at `index` with a new value. Out-of-range
    /// indices are ignored.
    pub fn replace_message(&mut self, index: usize, message: Message) {
        if let Some(slot) = self.messages.get_mut(index) {
            *slot = Arc::new(message);
        }
    }

    /// Index of the most recent message authored by `role`.
    #[must_use]
    pub fn last_index_of_role(&self, role: Role) -> Option<usize> {
        self.messages.iter().rposition(|m| m.role == role)
    }

    /// Sets a metadata entry.
    pub fn set_metadata(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.metadata.insert(key.into(), value);
    }

    /// Reads a metadata entry.
    #[must_use]
    pub fn metadata_value(&self, key: &str) -> Option<&serde_json::Value> {
        self.metadata.get(key)
    }
}
