//! Prompt templates for classification and few-shot synthesis

pub mod template;

pub use template::PromptTemplate;
