//! Single-placeholder templating engine.
//!
//! The engine is deliberately narrow: [`TemplateEngine::compile`] parses a
//! source string once, [`CompiledTemplate::render`] substitutes bindings any
//! number of times. The only recognized grammar is `{{ <name> }}` with
//! optional whitespace around the identifier, matched case-sensitively. A
//! balanced `{{ ... }}` chunk with any other identifier is inert literal
//! text; an unbalanced `{{` is a compile error.

use crate::errors::TemplateError;
use regex::Regex;
use std::collections::HashMap;

/// Values bound to placeholders at render time.
pub type Bindings = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Placeholder(String),
}

/// Compiles template sources against a fixed placeholder pattern.
#[derive(Debug, Clone)]
pub struct TemplateEngine {
    name: String,
    pattern: Regex,
}

impl TemplateEngine {
    /// Builds an engine that recognizes exactly one placeholder identifier.
    #[must_use]
    pub fn single_placeholder(name: &str) -> Self {
        #[allow(clippy::expect_used)]
        let pattern = Regex::new(&format!(r"\{{\{{\s*{}\s*\}}\}}", regex::escape(name)))
            .expect("escaped identifier always forms a valid pattern");
        Self {
            name: name.to_string(),
            pattern,
        }
    }

    /// The recognized placeholder identifier.
    #[must_use]
    pub fn placeholder_name(&self) -> &str {
        &self.name
    }

    /// Compiles `source` into a render-ready template.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::UnterminatedPlaceholder`] when a `{{` has no
    /// matching `}}` later in the source.
    pub fn compile(&self, source: &str) -> Result<CompiledTemplate, TemplateError> {
        check_delimiters(source)?;

        let mut segments = Vec::new();
        let mut cursor = 0;
        for found in self.pattern.find_iter(source) {
            if found.start() > cursor {
                segments.push(Segment::Literal(source[cursor..found.start()].to_string()));
            }
            segments.push(Segment::Placeholder(self.name.clone()));
            cursor = found.end();
        }
        if cursor < source.len() {
            segments.push(Segment::Literal(source[cursor..].to_string()));
        }

        Ok(CompiledTemplate { segments })
    }
}

/// Every `{{` must be followed by a `}}` somewhere later in the source.
fn check_delimiters(source: &str) -> Result<(), TemplateError> {
    let mut rest = source;
    let mut offset = 0;
    while let Some(open) = rest.find("{{") {
        let tail = &rest[open + 2..];
        let Some(close) = tail.find("}}") else {
            return Err(TemplateError::UnterminatedPlaceholder {
                position: offset + open,
            });
        };
        offset += open + 2 + close + 2;
        rest = &tail[close + 2..];
    }
    Ok(())
}

/// A parsed template ready for repeated rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledTemplate {
    segments: Vec<Segment>,
}

impl CompiledTemplate {
    /// Returns true when the template contains at least one placeholder.
    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Placeholder(_)))
    }

    /// Renders the template with the supplied bindings.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::MissingBinding`] when a placeholder has no
    /// bound value.
    pub fn render(&self, bindings: &Bindings) -> Result<String, TemplateError> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Placeholder(name) => {
                    let value =
                        bindings
                            .get(name)
                            .ok_or_else(|| TemplateError::MissingBinding {
                                name: name.clone(),
                            })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text_bindings(value: &str) -> Bindings {
        let mut bindings = Bindings::new();
        bindings.insert("text".to_string(), value.to_string());
        bindings
    }

    #[test]
    fn test_substitutes_placeholder() {
        let engine = TemplateEngine::single_placeholder("text");
        let compiled = engine.compile("Context: {{ text }}").unwrap();
        assert_eq!(
            compiled.render(&text_bindings("hi")).unwrap(),
            "Context: hi"
        );
    }

    #[test]
    fn test_whitespace_tolerant_match() {
        let engine = TemplateEngine::single_placeholder("text");
        for source in ["{{text}}", "{{ text }}", "{{  text  }}", "{{text }}"] {
            let compiled = engine.compile(source).unwrap();
            assert_eq!(compiled.render(&text_bindings("x")).unwrap(), "x");
        }
    }

    #[test]
    fn test_repeated_placeholder() {
        let engine = TemplateEngine::single_placeholder("text");
        let compiled = engine.compile("{{text}} and {{ text }}").unwrap();
        assert_eq!(compiled.render(&text_bindings("a")).unwrap(), "a and a");
    }

    #[test]
    fn test_unknown_identifier_is_inert() {
        let engine = TemplateEngine::single_placeholder("text");
        let compiled = engine.compile("{{ other }} {{text}}").unwrap();
        assert!(compiled.has_placeholders());
        assert_eq!(
            compiled.render(&text_bindings("hi")).unwrap(),
            "{{ other }} hi"
        );
    }

    #[test]
    fn test_case_sensitive_match() {
        let engine = TemplateEngine::single_placeholder("text");
        let compiled = engine.compile("{{ TEXT }}").unwrap();
        assert!(!compiled.has_placeholders());
        assert_eq!(
            compiled.render(&Bindings::new()).unwrap(),
            "{{ TEXT }}"
        );
    }

    #[test]
    fn test_no_placeholder_is_pure_literal() {
        let engine = TemplateEngine::single_placeholder("text");
        let compiled = engine.compile("no placeholders here").unwrap();
        assert!(!compiled.has_placeholders());
        assert_eq!(
            compiled.render(&Bindings::new()).unwrap(),
            "no placeholders here"
        );
    }

    #[test]
    fn test_unterminated_placeholder_fails_compile() {
        let engine = TemplateEngine::single_placeholder("text");
        let err = engine.compile("Context: {{ text").unwrap_err();
        assert_eq!(
            err,
            TemplateError::UnterminatedPlaceholder { position: 9 }
        );
    }

    #[test]
    fn test_balanced_then_unterminated_fails_compile() {
        let engine = TemplateEngine::single_placeholder("text");
        let err = engine.compile("{{ text }} trailing {{").unwrap_err();
        assert!(matches!(
            err,
            TemplateError::UnterminatedPlaceholder { .. }
        ));
    }

    #[test]
    fn test_missing_binding_fails_render() {
        let engine = TemplateEngine::single_placeholder("text");
        let compiled = engine.compile("{{ text }}").unwrap();
        let err = compiled.render(&Bindings::new()).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingBinding {
                name: "text".to_string()
            }
        );
    }

    #[test]
    fn test_empty_source() {
        let engine = TemplateEngine::single_placeholder("text");
        let compiled = engine.compile("").unwrap();
        assert!(!compiled.has_placeholders());
        assert_eq!(compiled.render(&Bindings::new()).unwrap(), "");
    }
}
