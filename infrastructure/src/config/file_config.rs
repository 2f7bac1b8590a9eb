//! File-backed configuration schema

use serde::{Deserialize, Serialize};
use simtriage_application::ModelSettings;
use std::path::PathBuf;
use std::time::Duration;

/// Top-level configuration, merged from defaults, `simtriage.toml`, and
/// `SIMTRIAGE_*` environment variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub model: ModelConfig,
    pub corpus: CorpusConfig,
}

/// `[model]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Model identifier sent to the provider
    pub id: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Bound on each model call, in seconds
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            id: "gpt-3.5-turbo".to_string(),
            temperature: 0.3,
            timeout_secs: 30,
        }
    }
}

/// `[corpus]` section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// Path to the labeled corpus JSON file
    pub path: PathBuf,
    /// Number of exemplars embedded in a few-shot prompt
    pub exemplar_limit: usize,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/corpus.json"),
            exemplar_limit: 3,
        }
    }
}

impl FileConfig {
    /// Sampling settings for the application layer
    pub fn model_settings(&self) -> ModelSettings {
        ModelSettings {
            model: self.model.id.clone(),
            temperature: self.model.temperature,
        }
    }

    /// Per-call timeout for the gateway adapter
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.model.timeout_secs)
    }
}
