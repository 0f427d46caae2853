//! Rewrites the most recent user message through a configured template.

use super::Stage;
use crate::config::InputTemplateConfig;
use crate::context::{PipelineContext, Role};
use crate::errors::StageError;
use crate::template::{Bindings, TemplateEngine};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Metadata key recording how many messages the stage rewrote (0 or 1).
pub const PROCESSED_COUNT_KEY: &str = "input_template.processed_count";

/// The placeholder identifier bound to the target message's text.
const PLACEHOLDER: &str = "text";

/// Applies the configured template to the last user message in the context.
///
/// Only the most recent user message is eligible: template changes must
/// affect the forward-looking prompt, never earlier turns. When the rendered
/// output equals the current content the message slot is left untouched, so
/// downstream equality checks can rely on stable message identity. Every
/// failure mode is recoverable and degrades to "no change"; the stage never
/// aborts the pipeline.
#[derive(Debug, Clone)]
pub struct InputTemplateStage {
    template: Option<String>,
    engine: TemplateEngine,
}

impl InputTemplateStage {
    /// Creates the stage from its configuration.
    #[must_use]
    pub fn new(config: InputTemplateConfig) -> Self {
        if let Some(template) = &config.input_template {
            debug!(template = %template, "input template configured");
        }
        Self {
            template: config.input_template,
            engine: TemplateEngine::single_placeholder(PLACEHOLDER),
        }
    }

    /// Creates a disabled stage (guaranteed no-op).
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(InputTemplateConfig::default())
    }
}

#[async_trait]
impl Stage for InputTemplateStage {
    fn name(&self) -> &str {
        "input_template"
    }

    async fn apply(&self, mut ctx: PipelineContext) -> Result<PipelineContext, StageError> {
        let mut processed = 0_u64;

        if let Some(source) = &self.template {
            // Compiled once per invocation; a malformed template skips the
            // whole application step but never reaches the pipeline.
            match self.engine.compile(source) {
                Err(error) => {
                    warn!(stage = self.name(), %error, "template failed to compile, skipping");
                }
                Ok(compiled) => {
                    if let Some(index) = ctx.last_index_of_role(Role::User) {
                        if let Some(target) = ctx.messages.get(index).map(Arc::clone) {
                            match target.content.as_text() {
                                None => {
                                    debug!(
                                        stage = self.name(),
                                        message_id = %target.id,
                                        "last user message is not plain text, skipping"
                                    );
                                }
                                Some(text) => {
                                    let mut bindings = Bindings::new();
                                    bindings.insert(PLACEHOLDER.to_string(), text.to_string());
                                    match compiled.render(&bindings) {
                                        Ok(rendered) if rendered == text => {
                                            debug!(
                                                stage = self.name(),
                                                message_id = %target.id,
                                                "template output identical, message left in place"
                                            );
                                        }
                                        Ok(rendered) => {
                                            info!(
                                                stage = self.name(),
                                                message_id = %target.id,
                                                "template applied to last user message"
                                            );
                                            ctx.replace_message(index, target.with_content(rendered));
                                            processed = 1;
                                        }
                                        Err(error) => {
                                            warn!(
                                                stage = self.name(),
                                                message_id = %target.id,
                                                %error,
                                                "template render failed, keeping original message"
                                            );
                                        }
                                    }
                                }
                            }
                        }
                    } else {
                        debug!(stage = self.name(), "no user message in context");
                    }
                }
            }
        } else {
            debug!(stage = self.name(), "no input template configured, stage disabled");
        }

        debug!(stage = self.name(), processed, "recording processed count");
        ctx.set_metadata(PROCESSED_COUNT_KEY, serde_json::json!(processed));
        Ok(ctx)
    }
}
