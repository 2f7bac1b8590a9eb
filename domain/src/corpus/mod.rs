//! Corpus of labeled exemplars and deterministic selection over it

pub mod entities;
pub mod store;
