//! Sequential pipeline executor.

use crate::context::PipelineContext;
use crate::stages::Stage;
use std::sync::Arc;
use tracing::debug;

/// Runs stages in insertion order, threading each stage's output context into
/// the next.
///
/// Stage failures are contained inside [`Stage::process`], so a run always
/// completes and returns a context. The executor owns no retry, cancellation,
/// or ordering policy beyond the order stages were added.
#[derive(Debug, Clone)]
pub struct Pipeline {
    name: String,
    stages: Vec<Arc<dyn Stage>>,
}

impl Pipeline {
    /// Creates an empty pipeline.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stages: Vec::new(),
        }
    }

    /// Appends a stage.
    #[must_use]
    pub fn with_stage(mut self, stage: impl Stage + 'static) -> Self {
        self.stages.push(Arc::new(stage));
        self
    }

    /// Appends an already shared stage.
    pub fn push_stage(&mut self, stage: Arc<dyn Stage>) {
        self.stages.push(stage);
    }

    /// The pipeline name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of stages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns true when the pipeline has no stages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Runs every stage once, in order, and returns the final context.
    pub async fn run(&self, ctx: PipelineContext) -> PipelineContext {
        let mut current = ctx;
        for stage in &self.stages {
            debug!(pipeline = %self.name, stage = stage.name(), "running stage");
            current = stage.process(&current).await;
        }
        current
    }
}
