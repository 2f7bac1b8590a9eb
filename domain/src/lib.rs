//! Domain layer for simtriage
//!
//! This crate contains the core business logic, entities, and value objects
//! for few-shot category prediction and step synthesis over a labeled corpus
//! of customer-service simulations. It has no dependencies on infrastructure
//! or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Exemplar
//!
//! A previously solved `{reason, steps, category}` triple from the corpus,
//! used as in-context guidance for the generative model.
//!
//! ## Fallback path
//!
//! Every model-backed operation has a deterministic, non-model-dependent
//! counterpart (keyword classification, a fixed step checklist) that is
//! guaranteed to produce a valid result when the model is unavailable or
//! returns malformed output.

pub mod core;
pub mod corpus;
pub mod prompt;
pub mod synthesis;

// Re-export commonly used types
pub use self::core::{
    category::Category,
    error::DomainError,
    keywords::classify_by_keywords,
};
pub use corpus::{
    entities::Exemplar,
    store::{CorpusStore, DEFAULT_EXEMPLAR_LIMIT},
};
pub use prompt::PromptTemplate;
pub use synthesis::{
    parsing::{parse_synthesis_response, strip_code_fences, ParsedSynthesis},
    result::{fallback_checklist, ResultStatus, SynthesisResult},
};
