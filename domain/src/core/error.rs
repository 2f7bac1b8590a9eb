//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The classify and synthesize operations are total and never surface these;
/// they exist for contract violations caught at the corpus boundary.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown category label: {0}")]
    UnknownCategory(String),

    #[error("Exemplar '{name}' has no steps")]
    EmptyExemplar { name: String },
}
