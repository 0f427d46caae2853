//! Error types for stages and templates.
//!
//! Everything here is recoverable by design: the stage lifecycle contains
//! these errors and degrades to "stage ran, no change applied" rather than
//! letting them reach the pipeline.

use thiserror::Error;

/// Errors from compiling or rendering a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// A `{{` delimiter opened a placeholder that never closes.
    #[error("unterminated placeholder starting at byte {position}")]
    UnterminatedPlaceholder {
        /// Byte offset of the opening delimiter in the template source.
        position: usize,
    },

    /// A compiled placeholder had no value bound at render time.
    #[error("no binding supplied for placeholder `{name}`")]
    MissingBinding {
        /// The placeholder identifier.
        name: String,
    },
}

/// Errors a stage's `apply` may surface to the `process` wrapper.
#[derive(Debug, Error)]
pub enum StageError {
    /// Template compilation or rendering failed.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Any other stage-internal failure.
    #[error("stage execution error: {0}")]
    Execution(String),
}
