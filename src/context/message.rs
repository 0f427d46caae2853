//! Immutable message values.

use crate::utils::new_message_id;
use serde::{Deserialize, Serialize};

/// The author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instructions.
    System,
    /// The end user.
    User,
    /// The assistant.
    Assistant,
    /// A tool result.
    Tool,
}

impl Role {
    /// Returns the wire name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Tool => "tool",
        }
    }
}

/// Message content: plain text or structured multimodal parts.
///
/// Only the [`Text`](Self::Text) variant is ever transformed by stages;
/// structured content passes through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text.
    Text(String),
    /// Structured content blocks (images, tool results, and so on).
    Parts(Vec<serde_json::Value>),
}

impl MessageContent {
    /// Returns the text if this is the plain-text variant.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Parts(_) => None,
        }
    }

    /// Returns true for the plain-text variant.
    #[must_use]
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

impl From<&str> for MessageContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for MessageContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// A single message in a conversation.
///
/// Messages are immutable values: "updating" one means constructing a new
/// `Message` and replacing its slot in the containing context, never editing
/// fields in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    /// Opaque identifier, unique within the conversation.
    pub id: String,
    /// The author role.
    pub role: Role,
    /// The message content.
    pub content: MessageContent,
}

impl Message {
    /// Creates a message with a generated identifier.
    #[must_use]
    pub fn new(role: Role, content: impl Into<MessageContent>) -> Self {
        Self {
            id: new_message_id(),
            role,
            content: content.into(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::User, content)
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<MessageContent>) -> Self {
        Self::new(Role::System, content)
    }

    /// Returns a copy with different content, keeping `id` and `role`.
    #[must_use]
    pub fn with_content(&self, content: impl Into<MessageContent>) -> Self {
        Self {
            id: self.id.clone(),
            role: self.role,
            content: content.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("Hello");
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, MessageContent::Text("Hello".to_string()));
        assert!(!msg.id.is_empty());
    }

    #[test]
    fn test_with_content_preserves_identity() {
        let original = Message::user("before");
        let updated = original.with_content("after");
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.role, original.role);
        assert_eq!(updated.content.as_text(), Some("after"));
        assert_eq!(original.content.as_text(), Some("before"));
    }

    #[test]
    fn test_structured_content_has_no_text() {
        let content = MessageContent::Parts(vec![serde_json::json!({"type": "image"})]);
        assert!(!content.is_text());
        assert_eq!(content.as_text(), None);
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, "\"user\"");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }

    #[test]
    fn test_content_deserializes_untagged() {
        let text: MessageContent = serde_json::from_str("\"plain\"").unwrap();
        assert!(text.is_text());

        let parts: MessageContent = serde_json::from_str("[{\"type\": \"image\"}]").unwrap();
        assert!(!parts.is_text());
    }
}
