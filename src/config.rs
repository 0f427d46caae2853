//! Stage configuration supplied by the surrounding pipeline.

use serde::{Deserialize, Serialize};

/// Configuration for the input-template stage.
///
/// Supplied by the pipeline's configuration system, typically as JSON with
/// the external key `inputTemplate`. A missing template disables the stage,
/// which is then a guaranteed no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputTemplateConfig {
    /// Template with zero or more `{{ text }}` placeholders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_template: Option<String>,
}

impl InputTemplateConfig {
    /// Creates a disabled configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the template string.
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.input_template = Some(template.into());
        self
    }

    /// Returns true when a template is configured.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.input_template.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_is_disabled() {
        assert!(!InputTemplateConfig::new().is_enabled());
    }

    #[test]
    fn test_deserializes_external_key() {
        let config: InputTemplateConfig =
            serde_json::from_str(r#"{"inputTemplate": "Context: {{ text }}"}"#).unwrap();
        assert!(config.is_enabled());
        assert_eq!(
            config.input_template.as_deref(),
            Some("Context: {{ text }}")
        );
    }

    #[test]
    fn test_deserializes_empty_object() {
        let config: InputTemplateConfig = serde_json::from_str("{}").unwrap();
        assert!(!config.is_enabled());
    }
}
