//! Classify Request use case
//!
//! Maps a free-text customer request to one label from the closed category
//! set. Two paths, no state carried across calls:
//!
//! - **Model path**: single-turn prompt enumerating the category set, low
//!   sampling temperature, literal label taken from the response. A label
//!   outside the closed set (after case/whitespace normalization) is
//!   substituted with `Other` — an invented label never passes through.
//! - **Fallback path**: deterministic keyword rules, entered when no
//!   gateway is configured or the model call fails or times out.
//!
//! The use case is total: it never returns an error to its caller.

use crate::config::ModelSettings;
use crate::ports::llm_gateway::{ChatMessage, CompletionRequest, LlmGateway};
use serde::Serialize;
use simtriage_domain::{classify_by_keywords, Category, PromptTemplate};
use std::sync::Arc;
use tracing::{debug, warn};

/// Which path produced a classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassificationSource {
    /// The generative model returned a label from the closed set
    /// (or an invented label that was substituted with `Other`)
    Model,
    /// The deterministic keyword rules
    Keyword,
}

/// Result of classifying one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: Category,
    pub source: ClassificationSource,
}

/// Use case for classifying a customer request
pub struct ClassifyRequestUseCase {
    gateway: Option<Arc<dyn LlmGateway>>,
    settings: ModelSettings,
}

impl ClassifyRequestUseCase {
    /// `gateway: None` means no credential is configured — an expected
    /// condition that routes every call to the keyword fallback.
    pub fn new(gateway: Option<Arc<dyn LlmGateway>>, settings: ModelSettings) -> Self {
        Self { gateway, settings }
    }

    /// Classify a request. Total; always returns a member of the closed set.
    pub async fn execute(&self, request: &str) -> Classification {
        if let Some(gateway) = &self.gateway {
            let completion_request = CompletionRequest::new(
                &self.settings.model,
                vec![ChatMessage::user(PromptTemplate::classification(request))],
                self.settings.temperature,
            );

            match gateway.complete(completion_request).await {
                Ok(response) => {
                    let label = response.trim();
                    let category = match Category::parse_label(label) {
                        Some(category) => category,
                        None => {
                            warn!(label, "Model returned a label outside the closed set");
                            Category::Other
                        }
                    };
                    debug!(%category, "Classified via model");
                    return Classification {
                        category,
                        source: ClassificationSource::Model,
                    };
                }
                Err(e) => {
                    warn!("Classification call failed: {}, using keyword rules", e);
                }
            }
        } else {
            debug!("No gateway configured, using keyword rules");
        }

        Classification {
            category: classify_by_keywords(request),
            source: ClassificationSource::Keyword,
        }
    }
}
