//! Infrastructure layer for simtriage
//!
//! Adapters for the outside world: the chat-completions provider behind
//! the `LlmGateway` port, the on-disk corpus loader, and configuration
//! loading.

pub mod config;
pub mod corpus;
pub mod providers;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig};
pub use corpus::loader::{load_corpus, parse_corpus, CorpusError};
pub use providers::openai::OpenAiGateway;
