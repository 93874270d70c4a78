/// LLM Client — the single point of entry for all AI gateway calls.
///
/// ARCHITECTURAL RULE: No other module may call the chat-completion endpoint directly.
/// Both the profile analyzer and the mentor chat go through `LlmClient::complete`.
///
/// One attempt per request: no retry, no backoff. A 429 or 402 from the gateway is
/// surfaced as its own error kind so handlers can pass it through to the caller.
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::chat::ChatMessage;

pub mod prompts;

/// The model used for every gateway call. Hardcoded to prevent drift between endpoints.
pub const MODEL: &str = "gpt-4o-mini";
const TEMPERATURE: f32 = 0.7;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("AI gateway API key is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited by AI gateway")]
    RateLimited,

    #[error("AI gateway credits exhausted")]
    CreditsExhausted,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Chat-completion client shared by all handlers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl LlmClient {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Sends `messages` to the gateway and returns the first choice's text verbatim.
    pub async fn complete(
        &self,
        messages: &[ChatMessage],
        max_tokens: u32,
    ) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = CompletionRequest {
            model: MODEL,
            messages,
            temperature: TEMPERATURE,
            max_tokens,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                warn!("AI gateway rate limit hit");
                return Err(LlmError::RateLimited);
            }
            StatusCode::PAYMENT_REQUIRED => {
                warn!("AI gateway reported exhausted credits");
                return Err(LlmError::CreditsExhausted);
            }
            s if !s.is_success() => {
                let message = response.text().await.unwrap_or_default();
                warn!("AI gateway returned {}: {}", status, message);
                return Err(LlmError::Api {
                    status: status.as_u16(),
                    message,
                });
            }
            _ => {}
        }

        let completion: CompletionResponse = response.json().await?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(LlmError::EmptyContent)?;

        debug!("AI gateway call succeeded: {} chars", text.len());
        Ok(text)
    }
}


#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::test_support::completion_body;
    use super::*;

    fn client_for(server: &MockServer) -> LlmClient {
        LlmClient::new(
            format!("{}/v1/chat/completions", server.uri()),
            Some("test-key".to_string()),
        )
    }

    async fn mock_status(server: &MockServer, status: u16) {
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(status).set_body_string("upstream says no"))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_complete_returns_first_choice_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("  Hello\n")))
            .expect(1)
            .mount(&server)
            .await;

        let text = client_for(&server)
            .complete(&[ChatMessage::user("hi")], 100)
            .await
            .unwrap();
        assert_eq!(text, "  Hello\n");
    }

    #[tokio::test]
    async fn test_request_carries_model_temperature_and_max_tokens() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
            .mount(&server)
            .await;

        client_for(&server)
            .complete(&[ChatMessage::system("sys"), ChatMessage::user("hi")], 321)
            .await
            .unwrap();

        let requests = server.received_requests().await.unwrap();
        let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(body["model"], MODEL);
        assert_eq!(body["max_tokens"], 321);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
        assert_eq!(
            body["messages"],
            json!([
                { "role": "system", "content": "sys" },
                { "role": "user", "content": "hi" }
            ])
        );
    }

    #[tokio::test]
    async fn test_429_is_rate_limited_without_retry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(429))
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(&[ChatMessage::user("hi")], 10)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::RateLimited));
    }

    #[tokio::test]
    async fn test_402_is_credits_exhausted() {
        let server = MockServer::start().await;
        mock_status(&server, 402).await;

        let err = client_for(&server)
            .complete(&[ChatMessage::user("hi")], 10)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::CreditsExhausted));
    }

    #[tokio::test]
    async fn test_other_status_keeps_code_and_body() {
        let server = MockServer::start().await;
        mock_status(&server, 503).await;

        let err = client_for(&server)
            .complete(&[ChatMessage::user("hi")], 10)
            .await
            .unwrap_err();
        match err {
            LlmError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream says no");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_no_choices_is_empty_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete(&[ChatMessage::user("hi")], 10)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::EmptyContent));
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let server = MockServer::start().await;
        let client = LlmClient::new(server.uri(), None);

        let err = client
            .complete(&[ChatMessage::user("hi")], 10)
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
        assert!(server.received_requests().await.unwrap().is_empty());
    }
}
