//! Synthesize Steps use case
//!
//! Produces a structured `{reason, steps[]}` result for a customer request
//! using category-matched exemplars as few-shot context. The model response
//! is untrusted text: it is fence-stripped, parsed, and validated against
//! the fixed schema, and anything short of a full match demotes to the
//! deterministic fallback (`reason` = the verbatim request, `steps` = the
//! fixed generic checklist).
//!
//! Total: never returns an error, and the result always has non-empty
//! `steps`. The caller stamps `category` from the independent classifier.

use crate::config::ModelSettings;
use crate::ports::llm_gateway::{ChatMessage, CompletionRequest, LlmGateway};
use simtriage_domain::{parse_synthesis_response, Exemplar, PromptTemplate, SynthesisResult};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for synthesizing a step list from few-shot context
pub struct SynthesizeStepsUseCase {
    gateway: Option<Arc<dyn LlmGateway>>,
    settings: ModelSettings,
}

impl SynthesizeStepsUseCase {
    /// `gateway: None` means no credential is configured; every call
    /// returns the fallback result whole-cloth.
    pub fn new(gateway: Option<Arc<dyn LlmGateway>>, settings: ModelSettings) -> Self {
        Self { gateway, settings }
    }

    /// Synthesize steps for a request given selected exemplars.
    ///
    /// An empty exemplar slice (empty corpus) means zero-shot operation;
    /// the prompt simply carries no examples.
    pub async fn execute(&self, request: &str, exemplars: &[&Exemplar]) -> SynthesisResult {
        let Some(gateway) = &self.gateway else {
            debug!("No gateway configured, returning fallback result");
            return SynthesisResult::fallback(request);
        };

        let completion_request = CompletionRequest::new(
            &self.settings.model,
            vec![
                ChatMessage::system(PromptTemplate::synthesis_system()),
                ChatMessage::user(PromptTemplate::synthesis(request, exemplars)),
            ],
            self.settings.temperature,
        );

        match gateway.complete(completion_request).await {
            Ok(response) => match parse_synthesis_response(&response) {
                Some(parsed) => {
                    let reason = parsed.reason.unwrap_or_else(|| request.to_string());
                    SynthesisResult::generated(reason, parsed.steps)
                }
                None => {
                    warn!("Model response failed schema validation, using fallback");
                    SynthesisResult::fallback(request)
                }
            },
            Err(e) => {
                warn!("Synthesis call failed: {}, using fallback", e);
                SynthesisResult::fallback(request)
            }
        }
    }
}
