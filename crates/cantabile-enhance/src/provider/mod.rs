//! Remote enhancement providers.

pub mod gemini;
pub mod openrouter;

pub use gemini::GeminiClient;
pub use openrouter::OpenRouterClient;

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use cantabile_core::model::EnhanceOptions;

use crate::error::{EnhanceError, EnhanceResult};

const USER_AGENT: &str = "cantabile/0.1.0 (https://github.com/oxur/cantabile)";

/// A service that rewrites a prompt into a better one.
#[async_trait]
pub trait Enhancer: Send + Sync + std::fmt::Debug {
    /// Human-readable provider name, used in logs and errors.
    fn name(&self) -> &str;

    /// Enhance `prompt`. Any error means "try the next provider".
    async fn enhance(&self, prompt: &str, options: &EnhanceOptions) -> EnhanceResult<String>;
}

/// HTTP client shared by the providers.
pub(crate) fn http_client(timeout: Duration) -> EnhanceResult<Client> {
    Ok(Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?)
}

/// Trim provider output, rejecting blank text.
pub(crate) fn non_empty(provider: &str, text: &str) -> EnhanceResult<String> {
    let text = text.trim();
    if text.is_empty() {
        return Err(EnhanceError::EmptyResponse {
            provider: provider.to_string(),
        });
    }
    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("Gemini", "  text \n").unwrap(), "text");
        assert!(matches!(
            non_empty("Gemini", " \n "),
            Err(EnhanceError::EmptyResponse { .. })
        ));
    }

    #[test]
    fn test_http_client_builds() {
        assert!(http_client(Duration::from_secs(5)).is_ok());
    }
}
