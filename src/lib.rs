//! # Contextflow
//!
//! Conversational-context processing stages for chat pipelines.
//!
//! A [`PipelineContext`](context::PipelineContext) carries an ordered
//! conversation plus per-stage metadata through a sequence of stages. Each
//! stage receives the context, works on a private copy, and hands a new
//! context to the next stage; the caller's original is never mutated and no
//! stage-internal failure ever aborts the pipeline.
//!
//! The shipped stage, [`InputTemplateStage`](stages::InputTemplateStage),
//! rewrites the most recent user message by substituting its text into a
//! configured `{{ text }}` template.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use contextflow::prelude::*;
//!
//! let config = InputTemplateConfig::new().with_template("Context: {{ text }}");
//! let pipeline = Pipeline::new("preprocess")
//!     .with_stage(InputTemplateStage::new(config));
//!
//! let ctx = PipelineContext::new().with_message(Message::user("hi"));
//! let out = pipeline.run(ctx).await;
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod context;
pub mod errors;
pub mod observability;
pub mod pipeline;
pub mod stages;
pub mod template;
pub mod utils;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::InputTemplateConfig;
    pub use crate::context::{Message, MessageContent, PipelineContext, Role};
    pub use crate::errors::{StageError, TemplateError};
    pub use crate::pipeline::Pipeline;
    pub use crate::stages::{InputTemplateStage, NoOpStage, Stage, PROCESSED_COUNT_KEY};
    pub use crate::template::{Bindings, CompiledTemplate, TemplateEngine};
}
