//! Provider adapters implementing the `LlmGateway` port

pub mod openai;
