//! OpenRouter provider (OpenAI-compatible chat completions).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use cantabile_core::model::EnhanceOptions;

use super::{http_client, non_empty, Enhancer};
use crate::error::{EnhanceError, EnhanceResult};
use crate::instruction;

pub const OPENROUTER_API_BASE: &str = "https://openrouter.ai";

pub const PROVIDER: &str = "OpenRouter";
const APP_TITLE: &str = "Suno AI Prompt Generator";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
}

fn extract_text(body: ChatResponse) -> EnhanceResult<String> {
    let text = body
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| EnhanceError::parse(PROVIDER, "response has no choices"))?
        .message
        .content
        .ok_or_else(|| EnhanceError::parse(PROVIDER, "choice has no content"))?;
    non_empty(PROVIDER, &text)
}

#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenRouterClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> EnhanceResult<Self> {
        Ok(Self {
            http: http_client(timeout)?,
            api_key,
            model,
            base_url: OPENROUTER_API_BASE.to_string(),
        })
    }

    /// Point the client at another host (for tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/api/v1/chat/completions", self.base_url)
    }
}

#[async_trait]
impl Enhancer for OpenRouterClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn enhance(&self, prompt: &str, options: &EnhanceOptions) -> EnhanceResult<String> {
        let content = instruction::brief(prompt, options);
        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: &content,
            }],
            max_tokens: 250,
            temperature: 0.7,
        };

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .header("X-Title", APP_TITLE)
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| EnhanceError::Http {
                provider: PROVIDER.to_string(),
                message: e.to_string(),
            })?;

        let body: ChatResponse = response
            .json()
            .await
            .map_err(|e| EnhanceError::parse(PROVIDER, e))?;

        extract_text(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantabile_core::model::{Category, Language};

    fn parse(json: &str) -> EnhanceResult<String> {
        extract_text(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_extract_text() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":" Better \n"}}]}"#;
        assert_eq!(parse(json).unwrap(), "Better");
    }

    #[test]
    fn test_extract_failures() {
        assert!(matches!(parse(r#"{"choices":[]}"#), Err(EnhanceError::Parse { .. })));
        assert!(matches!(
            parse(r#"{"choices":[{"message":{"content":null}}]}"#),
            Err(EnhanceError::Parse { .. })
        ));
        assert!(matches!(
            parse(r#"{"choices":[{"message":{"content":""}}]}"#),
            Err(EnhanceError::EmptyResponse { .. })
        ));
    }

    #[test]
    fn test_request_shape() {
        let request = ChatRequest {
            model: "m",
            messages: [ChatMessage {
                role: "user",
                content: "hi",
            }],
            max_tokens: 250,
            temperature: 0.7,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "m");
        assert_eq!(value["messages"][0]["role"], "user");
        assert_eq!(value["max_tokens"], 250);
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_error() {
        let client = OpenRouterClient::new("k".into(), "m".into(), Duration::from_secs(2))
            .unwrap()
            .with_base_url("http://127.0.0.1:1");
        let options = EnhanceOptions::new(Language::Indonesian, Category::General);
        let err = client.enhance("prompt", &options).await.unwrap_err();
        assert!(err.is_transport());
    }
}
