//! Exemplar entity

use crate::core::category::Category;
use serde::{Deserialize, Serialize};

/// A previously solved simulation: why the customer called, the steps the
/// agent performed, and the category it was filed under.
///
/// Immutable once loaded; the selector and synthesizer hold only read
/// references into the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exemplar {
    /// Simulation name from the source file (informational only)
    #[serde(default)]
    pub name: String,
    /// Why the customer called
    pub reason: String,
    /// Ordered steps the agent performed
    pub steps: Vec<String>,
    /// Category label assigned during corpus preparation
    pub category: Category,
}

impl Exemplar {
    pub fn new(
        name: impl Into<String>,
        reason: impl Into<String>,
        steps: Vec<String>,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            reason: reason.into(),
            steps,
            category,
        }
    }
}
