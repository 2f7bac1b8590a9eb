//! Application layer for simtriage
//!
//! This crate contains use cases, port definitions, and application
//! configuration. It depends only on the domain layer.
//!
//! All use cases are total with respect to the model dependency: a missing
//! credential, a failed call, a timeout, or malformed output demotes to the
//! deterministic fallback path instead of surfacing an error.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ModelSettings;
pub use ports::llm_gateway::{ChatMessage, CompletionRequest, GatewayError, LlmGateway, Role};
pub use use_cases::classify_request::{
    Classification, ClassificationSource, ClassifyRequestUseCase,
};
pub use use_cases::process_batch::ProcessBatchUseCase;
pub use use_cases::synthesize_steps::SynthesizeStepsUseCase;
