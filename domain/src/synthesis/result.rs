//! Synthesis result value objects

use crate::core::category::Category;
use serde::{Deserialize, Serialize};

/// How a result was produced.
///
/// Degraded quality (generic fallback steps, `Other` category) is the only
/// user-visible symptom of an underlying failure, so the flag is carried on
/// every result instead of being hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    /// Produced by the generative model and validated against the schema
    Generated,
    /// Produced by the deterministic fallback path
    Fallback,
}

/// Result of synthesizing steps for one customer request
///
/// Invariant: `steps` is non-empty after any successful or fallback
/// completion. The `category` is always stamped by the caller from the
/// independent classifier — never taken from the synthesis model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisResult {
    pub category: Category,
    pub reason: String,
    pub steps: Vec<String>,
    pub status: ResultStatus,
}

impl SynthesisResult {
    /// A model-generated result. Category starts at `Other` until the
    /// caller stamps the classifier's verdict.
    pub fn generated(reason: impl Into<String>, steps: Vec<String>) -> Self {
        debug_assert!(!steps.is_empty());
        Self {
            category: Category::Other,
            reason: reason.into(),
            steps,
            status: ResultStatus::Generated,
        }
    }

    /// The deterministic fallback: echo the request as the reason and use
    /// the fixed generic checklist.
    pub fn fallback(request: impl Into<String>) -> Self {
        Self {
            category: Category::Other,
            reason: request.into(),
            steps: fallback_checklist(),
            status: ResultStatus::Fallback,
        }
    }

    /// Stamp the authoritative category from the classifier.
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    pub fn is_fallback(&self) -> bool {
        self.status == ResultStatus::Fallback
    }
}

/// The fixed generic checklist used whenever the model path is unavailable
/// or its output fails validation.
pub fn fallback_checklist() -> Vec<String> {
    vec![
        "Listen to customer request".to_string(),
        "Gather necessary information".to_string(),
        "Process the request".to_string(),
    ]
}
