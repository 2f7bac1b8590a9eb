//! LLM Gateway port
//!
//! Defines the interface for communicating with the generative-model
//! provider. The completion it returns is untrusted text: callers must
//! validate it against their expected schema before use.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during LLM gateway operations
///
/// Every variant is transient from the pipeline's point of view: the
/// use cases catch these at their boundary and demote to the deterministic
/// fallback for that single call.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed provider response: {0}")]
    BadResponse(String),

    #[error("Timeout")]
    Timeout,
}

/// Message role in a chat-style completion request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
        }
    }
}

/// A role-tagged message in a completion request
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// A single-turn chat completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>, temperature: f32) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature,
        }
    }
}

/// Gateway for LLM communication
///
/// This port defines how the application layer invokes the generative
/// model. Implementations (adapters) live in the infrastructure layer and
/// must bound every call with a timeout so a hanging provider cannot stall
/// a batch; a timeout surfaces as [`GatewayError::Timeout`] and is treated
/// identically to any other failure.
#[async_trait]
pub trait LlmGateway: Send + Sync {
    /// Send one chat-style request and return the text completion
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError>;
}
