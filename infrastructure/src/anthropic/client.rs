//! HTTP client for the Anthropic Messages API

use super::error::AnthropicError;
use super::types::{MessagesRequest, MessagesResponse, RequestMessage};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use tutor_application::{CompletionClient, CompletionConfig, CompletionError};
use tutor_domain::Credential;
use tutor_domain::util::preview;

pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";
pub const DEFAULT_API_VERSION: &str = "2023-06-01";
const MESSAGES_PATH: &str = "/v1/messages";

/// Completion client backed by the Anthropic Messages API.
///
/// One request per call, no retry, no streaming, and no timeout beyond the
/// transport defaults. The inner `reqwest::Client` is reused so connections
/// are pooled across questions; the adapter keeps no other state.
pub struct AnthropicCompletionClient {
    client: reqwest::Client,
    /// Full endpoint URL (base + MESSAGES_PATH).
    url: String,
    api_version: String,
}

impl AnthropicCompletionClient {
    pub fn new(base_url: impl Into<String>, api_version: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            client: reqwest::Client::new(),
            url: format!("{}{}", base.trim_end_matches('/'), MESSAGES_PATH),
            api_version: api_version.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send(
        &self,
        prompt: &str,
        credential: &Credential,
        config: &CompletionConfig,
    ) -> Result<String, AnthropicError> {
        let request = MessagesRequest {
            model: config.model.as_str(),
            max_tokens: config.max_tokens,
            system: &config.system_prompt,
            messages: vec![RequestMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(
            "POST {} (model: {}, max_tokens: {}, prompt: {} bytes)",
            self.url,
            config.model,
            config.max_tokens,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header("x-api-key", credential.expose())
            .header("anthropic-version", &self.api_version)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Messages API returned {}: {}", status, preview(&body, 200));
            return Err(AnthropicError::Status(status.as_u16()));
        }

        let body: MessagesResponse = response.json().await?;
        let first = body
            .content
            .into_iter()
            .next()
            .ok_or(AnthropicError::EmptyContent)?;
        first.text.ok_or(AnthropicError::MissingText)
    }
}

impl Default for AnthropicCompletionClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, DEFAULT_API_VERSION)
    }
}

#[async_trait]
impl CompletionClient for AnthropicCompletionClient {
    async fn complete(
        &self,
        prompt: &str,
        credential: &Credential,
        config: &CompletionConfig,
    ) -> Result<String, CompletionError> {
        Ok(self.send(prompt, credential, config).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn key() -> Credential {
        Credential::new("sk-ant-test").unwrap()
    }

    fn client_for(server: &MockServer) -> AnthropicCompletionClient {
        AnthropicCompletionClient::new(server.uri(), DEFAULT_API_VERSION)
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = AnthropicCompletionClient::new("http://localhost:1234/", "2023-06-01");
        assert_eq!(client.url(), "http://localhost:1234/v1/messages");
        assert_eq!(
            AnthropicCompletionClient::default().url(),
            "https://api.anthropic.com/v1/messages"
        );
    }

    #[tokio::test]
    async fn test_sends_documented_request_and_returns_first_text() {
        let server = MockServer::start().await;
        let config = CompletionConfig::default();

        Mock::given(method("POST"))
            .and(path("/v1/messages"))
            .and(header("content-type", "application/json"))
            .and(header("x-api-key", "sk-ant-test"))
            .and(header("anthropic-version", "2023-06-01"))
            .and(body_json(json!({
                "model": "claude-3-5-sonnet-20241022",
                "max_tokens": 1024,
                "system": config.system_prompt.clone(),
                "messages": [{"role": "user", "content": "What is thermal conductivity?"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "msg_01",
                "type": "message",
                "role": "assistant",
                "content": [
                    {"type": "text", "text": "It measures heat flow."},
                    {"type": "text", "text": "ignored"}
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let reply = client
            .complete("What is thermal conductivity?", &key(), &config)
            .await
            .unwrap();
        assert_eq!(reply, "It measures heat flow.");
    }

    #[tokio::test]
    async fn test_non_success_status_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "type": "error",
                "error": {"type": "authentication_error", "message": "invalid x-api-key"}
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete("hi", &key(), &CompletionConfig::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CompletionError::RequestFailed("API returned status 401".to_string())
        );
    }

    #[tokio::test]
    async fn test_malformed_body_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .complete("hi", &key(), &CompletionConfig::default())
            .await;
        assert!(matches!(result, Err(CompletionError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn test_empty_content_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": []})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete("hi", &key(), &CompletionConfig::default())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            CompletionError::RequestFailed("Response contained no content blocks".to_string())
        );
    }

    #[tokio::test]
    async fn test_block_without_text_is_request_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": [{"type": "tool_use", "id": "t1", "name": "calc", "input": {}}]
            })))
            .mount(&server)
            .await;

        let result = client_for(&server)
            .complete("hi", &key(), &CompletionConfig::default())
            .await;
        assert!(matches!(result, Err(CompletionError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_request_failed() {
        // Nothing listens on port 1.
        let client = AnthropicCompletionClient::new("http://127.0.0.1:1", DEFAULT_API_VERSION);
        let result = client
            .complete("hi", &key(), &CompletionConfig::default())
            .await;
        assert!(matches!(result, Err(CompletionError::RequestFailed(_))));
    }

    #[tokio::test]
    async fn test_failure_detail_does_not_leak_credential() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("echo sk-ant-test"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .complete("hi", &key(), &CompletionConfig::default())
            .await
            .unwrap_err();
        assert!(!err.to_string().contains("sk-ant-test"));
    }
}
