//! Mock gateways shared by use-case tests

use crate::ports::llm_gateway::{CompletionRequest, GatewayError, LlmGateway};
use async_trait::async_trait;

/// Gateway that returns the same completion for every request
pub struct FixedGateway {
    response: String,
}

impl FixedGateway {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

#[async_trait]
impl LlmGateway for FixedGateway {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, GatewayError> {
        Ok(self.response.clone())
    }
}

/// Gateway whose every call times out
pub struct FailingGateway;

#[async_trait]
impl LlmGateway for FailingGateway {
    async fn complete(&self, _request: CompletionRequest) -> Result<String, GatewayError> {
        Err(GatewayError::Timeout)
    }
}
