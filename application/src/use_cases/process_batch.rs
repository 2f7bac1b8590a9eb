//! Process Batch use case
//!
//! Applies classify → select → synthesize across many requests,
//! sequentially, preserving input order. The inner stages are individually
//! total, so no catch is needed here; the output is guaranteed to have
//! exactly one result per request even when every model call degrades to
//! its fallback.

use crate::use_cases::classify_request::ClassifyRequestUseCase;
use crate::use_cases::synthesize_steps::SynthesizeStepsUseCase;
use simtriage_domain::{CorpusStore, SynthesisResult, DEFAULT_EXEMPLAR_LIMIT};
use tracing::info;

/// Use case for batch-processing customer requests
pub struct ProcessBatchUseCase {
    classifier: ClassifyRequestUseCase,
    synthesizer: SynthesizeStepsUseCase,
    exemplar_limit: usize,
}

impl ProcessBatchUseCase {
    pub fn new(classifier: ClassifyRequestUseCase, synthesizer: SynthesizeStepsUseCase) -> Self {
        Self {
            classifier,
            synthesizer,
            exemplar_limit: DEFAULT_EXEMPLAR_LIMIT,
        }
    }

    pub fn with_exemplar_limit(mut self, limit: usize) -> Self {
        self.exemplar_limit = limit;
        self
    }

    /// Process one request end to end: classify, select category-matched
    /// exemplars, synthesize, and stamp the classifier's category onto the
    /// result. The classifier is authoritative; whatever notion of category
    /// the synthesis model had is discarded.
    pub async fn process_one(&self, request: &str, corpus: &CorpusStore) -> SynthesisResult {
        let classification = self.classifier.execute(request).await;
        let exemplars = corpus.select(classification.category, self.exemplar_limit);
        self.synthesizer
            .execute(request, &exemplars)
            .await
            .with_category(classification.category)
    }

    /// Process all requests in input order.
    ///
    /// Output length always equals input length; one request degrading to
    /// fallback output does not affect any other.
    pub async fn execute(&self, requests: &[String], corpus: &CorpusStore) -> Vec<SynthesisResult> {
        info!(count = requests.len(), "Processing batch");
        let mut results = Vec::with_capacity(requests.len());
        for request in requests {
            results.push(self.process_one(request, corpus).await);
        }
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelSettings;
    use crate::use_cases::test_support::FailingGateway;
    use simtriage_domain::{fallback_checklist, Category, Exemplar, ResultStatus};
    use std::sync::Arc;

    fn corpus() -> CorpusStore {
        CorpusStore::new(vec![Exemplar::new(
            "sim-001",
            "payment issue",
            vec!["verify identity".into(), "update card".into()],
            Category::AccountBilling,
        )])
    }

    fn offline_pipeline() -> ProcessBatchUseCase {
        ProcessBatchUseCase::new(
            ClassifyRequestUseCase::new(None, ModelSettings::default()),
            SynthesizeStepsUseCase::new(None, ModelSettings::default()),
        )
    }

    #[tokio::test]
    async fn test_length_and_order_invariance_under_total_failure() {
        let pipeline = ProcessBatchUseCase::new(
            ClassifyRequestUseCase::new(Some(Arc::new(FailingGateway)), ModelSettings::default()),
            SynthesizeStepsUseCase::new(Some(Arc::new(FailingGateway)), ModelSettings::default()),
        );
        let requests: Vec<String> = vec![
            "update my payment card".into(),
            "file an insurance claim".into(),
            "asdkjasd".into(),
        ];

        let results = pipeline.execute(&requests, &corpus()).await;

        assert_eq!(results.len(), requests.len());
        // reason echoes the request, so order is observable
        for (request, result) in requests.iter().zip(&results) {
            assert_eq!(&result.reason, request);
            assert_eq!(result.status, ResultStatus::Fallback);
        }
    }

    #[tokio::test]
    async fn test_classifier_category_stamps_result() {
        let pipeline = offline_pipeline();
        let results = pipeline
            .execute(&["I need to update my payment method".to_string()], &corpus())
            .await;

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].category, Category::AccountBilling);
    }

    #[tokio::test]
    async fn test_end_to_end_offline_scenario() {
        // No credential, one billing exemplar, billing keyword in the request
        let pipeline = offline_pipeline();
        let request = "I need to update my payment method".to_string();

        let result = pipeline.process_one(&request, &corpus()).await;

        assert_eq!(result.category, Category::AccountBilling);
        assert_eq!(result.reason, request);
        assert_eq!(result.steps, fallback_checklist());
        assert_eq!(result.status, ResultStatus::Fallback);
    }

    #[tokio::test]
    async fn test_empty_corpus_is_tolerated() {
        let pipeline = offline_pipeline();
        let results = pipeline
            .execute(&["anything".to_string()], &CorpusStore::default())
            .await;
        assert_eq!(results.len(), 1);
        assert!(!results[0].steps.is_empty());
    }

    #[tokio::test]
    async fn test_empty_batch() {
        let pipeline = offline_pipeline();
        let results = pipeline.execute(&[], &corpus()).await;
        assert!(results.is_empty());
    }
}
