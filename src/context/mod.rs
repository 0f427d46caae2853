//! The conversation state flowing through the pipeline.
//!
//! This module provides:
//! - Immutable [`Message`] values with text or structured content
//! - The [`PipelineContext`] stages receive, copy, and return

mod message;
mod pipeline;

pub use message::{Message, MessageContent, Role};
pub use pipeline::PipelineContext;
