//! Application-level model settings

/// Sampling settings for model-backed calls
///
/// Low temperature biases toward deterministic output; both classification
/// and synthesis use the same settings.
#[derive(Debug, Clone)]
pub struct ModelSettings {
    /// Model identifier passed to the gateway
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.3,
        }
    }
}
