//! Synthesis results and model-response parsing

pub mod parsing;
pub mod result;
