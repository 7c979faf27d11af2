//! Generative-text client

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use crate::config::LlmConfig;

use super::error::{LlmError, LlmResult};
use super::types::{GenerateRequest, GenerateResponse};

/// Single-turn text generation: send an instruction and a subject text,
/// receive one trimmed completion.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn generate(&self, text: &str, instruction: &str) -> LlmResult<String>;
}

/// Client for the Gemini `generateContent` API
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(config: &LlmConfig) -> LlmResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            api_key: config.api_key.clone(),
        })
    }
}

#[async_trait]
impl LlmClient for GeminiClient {
    async fn generate(&self, text: &str, instruction: &str) -> LlmResult<String> {
        let request = GenerateRequest::single_turn(instruction, text);

        tracing::debug!(
            endpoint = %self.endpoint,
            prompt_chars = instruction.len() + text.len(),
            "Sending generateContent request"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "LLM request rejected");
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Decode(e.to_string()))?;

        body.first_text().ok_or(LlmError::NoValidResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::State,
        http::{HeaderMap, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct Captured {
        requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    /// Serve `reply` on the generateContent path and return a config pointing at it
    async fn mock_server(status: StatusCode, reply: Value) -> (LlmConfig, Captured) {
        let captured = Captured::default();
        let app = Router::new()
            .route(
                "/v1beta/models/test-model:generateContent",
                post(
                    move |State(captured): State<Captured>,
                          headers: HeaderMap,
                          Json(body): Json<Value>| {
                        let reply = reply.clone();
                        async move {
                            let key = headers
                                .get("x-goog-api-key")
                                .and_then(|v| v.to_str().ok())
                                .map(str::to_string);
                            captured.requests.lock().await.push((key, body));
                            (status, Json(reply))
                        }
                    },
                ),
            )
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = LlmConfig {
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
            base_url: format!("http://{}/v1beta", addr),
            timeout_secs: 5,
        };
        (config, captured)
    }

    #[tokio::test]
    async fn test_generate_sends_prompt_and_trims_reply() {
        let (config, captured) = mock_server(
            StatusCode::OK,
            json!({"candidates": [{"content": {"parts": [{"text": "  Bản tóm tắt  \n"}]}}]}),
        )
        .await;

        let client = GeminiClient::new(&config).unwrap();
        let reply = client.generate("nội dung", "Tóm tắt:").await.unwrap();
        assert_eq!(reply, "Bản tóm tắt");

        let requests = captured.requests.lock().await;
        assert_eq!(requests.len(), 1);
        let (key, body) = &requests[0];
        assert_eq!(key.as_deref(), Some("test-key"));
        assert_eq!(
            body,
            &json!({"contents": [{"role": "user", "parts": [{"text": "Tóm tắt:\n\nnội dung"}]}]})
        );
    }

    #[tokio::test]
    async fn test_generate_without_candidates_is_no_valid_response() {
        let (config, _) = mock_server(StatusCode::OK, json!({"candidates": []})).await;

        let client = GeminiClient::new(&config).unwrap();
        let result = client.generate("x", "y").await;
        assert!(matches!(result, Err(LlmError::NoValidResponse)));
    }

    #[tokio::test]
    async fn test_generate_error_status() {
        let (config, _) = mock_server(
            StatusCode::TOO_MANY_REQUESTS,
            json!({"error": {"message": "quota"}}),
        )
        .await;

        let client = GeminiClient::new(&config).unwrap();
        match client.generate("x", "y").await {
            Err(LlmError::Status { status, body }) => {
                assert_eq!(status, 429);
                assert!(body.contains("quota"));
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_generate_unreachable_service_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = LlmConfig {
            api_key: "k".to_string(),
            model: "m".to_string(),
            base_url: format!("http://{}", addr),
            timeout_secs: 5,
        };
        let client = GeminiClient::new(&config).unwrap();
        assert!(matches!(
            client.generate("x", "y").await,
            Err(LlmError::Transport(_))
        ));
    }
}
