//! Stage trait and implementations.
//!
//! Stages are the units of transformation in a contextflow pipeline: each
//! receives a context and returns a (possibly unchanged) context.

mod input_template;

pub use input_template::{InputTemplateStage, PROCESSED_COUNT_KEY};

use crate::context::PipelineContext;
use crate::errors::StageError;
use crate::utils::iso_timestamp;
use async_trait::async_trait;
use std::fmt::Debug;
use tracing::warn;

/// Trait for pipeline stages.
///
/// [`process`](Self::process) is the uniform lifecycle every stage shares:
/// take a private copy of the caller's context, run the stage-specific
/// [`apply`](Self::apply), contain any failure, and stamp the execution
/// marker. Implementors supply `name` and `apply`; the lifecycle methods are
/// provided.
#[async_trait]
pub trait Stage: Send + Sync + Debug {
    /// Stage identity, used to namespace metadata keys and log lines.
    fn name(&self) -> &str;

    /// The stage-specific transformation.
    ///
    /// Receives a working copy it may freely mutate. Recoverable conditions
    /// should be handled (and logged) internally; a returned error degrades
    /// to "stage ran, no change applied".
    ///
    /// # Errors
    ///
    /// Any [`StageError`] the stage cannot handle internally.
    async fn apply(&self, ctx: PipelineContext) -> Result<PipelineContext, StageError>;

    /// Public entry point invoked by the pipeline.
    ///
    /// Never propagates stage-internal errors, and never mutates the
    /// caller's context. The returned context always carries the execution
    /// marker, on no-op, failure, and success paths alike.
    async fn process(&self, ctx: &PipelineContext) -> PipelineContext {
        let outcome = match self.apply(ctx.stage_copy()).await {
            Ok(applied) => applied,
            Err(error) => {
                warn!(
                    stage = self.name(),
                    %error,
                    "stage failed, passing context through unchanged"
                );
                ctx.stage_copy()
            }
        };
        self.mark_as_executed(outcome)
    }

    /// Stamps the execution marker into the context's metadata.
    ///
    /// Always the final step before returning from `process`.
    #[must_use]
    fn mark_as_executed(&self, mut ctx: PipelineContext) -> PipelineContext {
        ctx.set_metadata(
            format!("{}.executed", self.name()),
            serde_json::Value::Bool(true),
        );
        ctx.set_metadata(
            format!("{}.executed_at", self.name()),
            serde_json::Value::String(iso_timestamp()),
        );
        ctx
    }
}

/// A stage that changes nothing. Useful for wiring and tests.
#[derive(Debug, Clone)]
pub struct NoOpStage {
    name: String,
}

impl NoOpStage {
    /// Creates a new no-op stage.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[async_trait]
impl Stage for NoOpStage {
    fn name(&self) -> &str {
        &self.name
    }

    async fn apply(&self, ctx: PipelineContext) -> Result<PipelineContext, StageError> {
        Ok(ctx)
    }
}
