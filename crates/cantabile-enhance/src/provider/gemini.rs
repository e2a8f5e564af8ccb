//! Google Gemini provider.
//!
//! Calls `models/{model}:generateContent` with the detailed instruction and
//! returns the first candidate's first text part.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use cantabile_core::model::EnhanceOptions;

use super::{http_client, non_empty, Enhancer};
use crate::error::{EnhanceError, EnhanceResult};
use crate::instruction;

pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

pub const PROVIDER: &str = "Gemini";

// ---------------------------------------------------------------------------
// Wire types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    top_k: u32,
    top_p: f32,
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 250,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

/// Pull the generated text out of a `generateContent` response body.
fn extract_text(body: GenerateResponse) -> EnhanceResult<String> {
    let text = body
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| EnhanceError::parse(PROVIDER, "response has no candidates"))?
        .content
        .parts
        .into_iter()
        .next()
        .and_then(|part| part.text)
        .ok_or_else(|| EnhanceError::parse(PROVIDER, "candidate has no text part"))?;
    non_empty(PROVIDER, &text)
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: String, model: String, timeout: Duration) -> EnhanceResult<Self> {
        Ok(Self {
            http: http_client(timeout)?,
            api_key,
            model,
            base_url: GEMINI_API_BASE.to_string(),
        })
    }

    /// Point the client at another host (for tests).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl Enhancer for GeminiClient {
    fn name(&self) -> &str {
        PROVIDER
    }

    async fn enhance(&self, prompt: &str, options: &EnhanceOptions) -> EnhanceResult<String> {
        let text = instruction::detailed(prompt, options);
        let request = GenerateRequest {
            contents: [Content {
                parts: [Part { text: &text }],
            }],
            generation_config: GenerationConfig::default(),
        };

        let response = self
            .http
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| EnhanceError::Http {
                provider: PROVIDER.to_string(),
                message: e.to_string(),
            })?;

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| EnhanceError::parse(PROVIDER, e))?;

        extract_text(body)
    }
}
