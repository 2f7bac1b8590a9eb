//! Corpus file loader
//!
//! Reads the pre-labeled corpus from a JSON file into a validated
//! [`CorpusStore`]. Contract violations — missing fields, ill-typed steps,
//! unknown category labels — surface here as named errors so the core can
//! assume validated exemplar records.
//!
//! Two file shapes are accepted:
//! - a JSON array of `{name?, reason, steps, category}` records,
//! - a JSON object mapping simulation name to the same record.

use simtriage_domain::{Category, CorpusStore, DomainError, Exemplar};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors raised at the corpus boundary
#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to read corpus file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corpus file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Corpus root must be a JSON array or object")]
    InvalidShape,

    #[error("Exemplar '{name}' is missing required field '{field}'")]
    MissingField { name: String, field: &'static str },

    #[error("Exemplar '{name}': field '{field}' must be an array of strings")]
    InvalidField { name: String, field: &'static str },

    #[error(transparent)]
    Contract(#[from] DomainError),
}

/// Load and validate a corpus file
pub fn load_corpus(path: &Path) -> Result<CorpusStore, CorpusError> {
    let raw = std::fs::read_to_string(path)?;
    let store = parse_corpus(&raw)?;
    info!(
        exemplars = store.len(),
        path = %path.display(),
        "Corpus loaded"
    );
    Ok(store)
}

/// Parse corpus JSON into a validated store
pub fn parse_corpus(raw: &str) -> Result<CorpusStore, CorpusError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let mut exemplars = Vec::new();
    match value {
        serde_json::Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                exemplars.push(parse_record(item, &format!("#{}", index))?);
            }
        }
        serde_json::Value::Object(map) => {
            for (name, item) in &map {
                exemplars.push(parse_record(item, name)?);
            }
        }
        _ => return Err(CorpusError::InvalidShape),
    }

    Ok(CorpusStore::new(exemplars))
}

fn parse_record(value: &serde_json::Value, fallback_name: &str) -> Result<Exemplar, CorpusError> {
    let name = value
        .get("name")
        .and_then(|v| v.as_str())
        .unwrap_or(fallback_name)
        .to_string();

    let reason = value
        .get("reason")
        .and_then(|v| v.as_str())
        .ok_or_else(|| CorpusError::MissingField {
            name: name.clone(),
            field: "reason",
        })?
        .to_string();

    let raw_steps = value
        .get("steps")
        .ok_or_else(|| CorpusError::MissingField {
            name: name.clone(),
            field: "steps",
        })?
        .as_array()
        .ok_or_else(|| CorpusError::InvalidField {
            name: name.clone(),
            field: "steps",
        })?;

    let mut steps = Vec::with_capacity(raw_steps.len());
    for step in raw_steps {
        let step = step.as_str().ok_or_else(|| CorpusError::InvalidField {
            name: name.clone(),
            field: "steps",
        })?;
        steps.push(step.to_string());
    }
    if steps.is_empty() {
        return Err(DomainError::EmptyExemplar { name }.into());
    }

    let category_label = value
        .get("category")
        .and_then(|v| v.as_str())
        .ok_or_else(|| CorpusError::MissingField {
            name: name.clone(),
            field: "category",
        })?;
    let category: Category = category_label.parse().map_err(CorpusError::Contract)?;

    Ok(Exemplar::new(name, reason, steps, category))
}
