//! OpenAI-compatible chat-completions adapter
//!
//! Implements the `LlmGateway` port over the `/v1/chat/completions` wire
//! format. Every call is bounded by a timeout; a timed-out call surfaces as
//! [`GatewayError::Timeout`] and the caller treats it like any other model
//! failure. The completion is returned as opaque text — schema validation
//! is the caller's job.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use simtriage_application::{CompletionRequest, GatewayError, LlmGateway};
use std::time::Duration;
use tracing::{debug, info};

/// Environment variable holding the API credential
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Gateway adapter for an OpenAI-compatible chat-completions endpoint
pub struct OpenAiGateway {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl OpenAiGateway {
    pub fn new(api_key: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout,
        }
    }

    /// Point the adapter at a different OpenAI-compatible endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build a gateway from the environment credential.
    ///
    /// Returns `None` when the credential is unset or empty. That is an
    /// expected condition, not an error: the pipeline runs every
    /// model-backed operation on its deterministic fallback path instead.
    pub fn from_env(timeout: Duration) -> Option<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => {
                debug!("Chat-completions provider configured");
                Some(Self::new(key, timeout))
            }
            _ => {
                info!(
                    "{} not set; classification and synthesis will use their fallback paths",
                    API_KEY_ENV
                );
                None
            }
        }
    }

    async fn send(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        let payload = WireRequest {
            model: &request.model,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: request.temperature,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    GatewayError::ConnectionError(e.to_string())
                } else {
                    GatewayError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body.chars().take(200).collect::<String>()
            )));
        }

        let body: WireResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::BadResponse(e.to_string()))?;

        let choice = body
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| GatewayError::BadResponse("response has no choices".to_string()))?;

        Ok(choice.message.content)
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GatewayError> {
        tokio::time::timeout(self.timeout, self.send(&request))
            .await
            .map_err(|_| GatewayError::Timeout)?
    }
}

#[derive(Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireResponseMessage,
}

#[derive(Deserialize)]
struct WireResponseMessage {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use simtriage_application::ChatMessage;

    #[test]
    fn test_wire_request_shape() {
        let request = CompletionRequest::new(
            "gpt-3.5-turbo",
            vec![
                ChatMessage::system("be helpful"),
                ChatMessage::user("hello"),
            ],
            0.3,
        );
        let payload = WireRequest {
            model: &request.model,
            messages: request
                .messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: request.temperature,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hello");
        // f32 -> f64 widening makes exact comparison unreliable
        assert!((json["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_wire_response_parsing() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": "Other"}}]}"#;
        let parsed: WireResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content, "Other");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_an_error_not_a_hang() {
        // Port 9 (discard) on localhost: connection refused almost surely
        let gateway = OpenAiGateway::new("test-key", Duration::from_secs(2))
            .with_base_url("http://127.0.0.1:9/v1");
        let request = CompletionRequest::new("gpt-3.5-turbo", vec![ChatMessage::user("hi")], 0.3);
        let result = gateway.complete(request).await;
        assert!(result.is_err());
    }
}
