//! Error types for remote prompt enhancement.

use thiserror::Error;

/// Errors a single enhancement provider can report.
///
/// None of these are fatal to the caller: the gateway treats every variant
/// as a provider failure and moves down its fallback chain.
#[derive(Debug, Error)]
pub enum EnhanceError {
    /// The provider answered with a non-success status.
    #[error("HTTP error from {provider}: {message}")]
    Http { provider: String, message: String },

    /// The response body was not the expected shape.
    #[error("parse error from {provider}: {message}")]
    Parse { provider: String, message: String },

    /// The provider answered, but with no usable text.
    #[error("empty response from {provider}")]
    EmptyResponse { provider: String },

    /// The provider has no API key.
    #[error("{provider} is not configured")]
    NotConfigured { provider: String },

    /// An error propagated from `reqwest` (connect, timeout, body).
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl EnhanceError {
    /// Returns `true` when the request never produced a usable HTTP answer.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http { .. } | Self::Request(_))
    }

    pub(crate) fn parse(provider: &str, message: impl ToString) -> Self {
        Self::Parse {
            provider: provider.to_string(),
            message: message.to_string(),
        }
    }
}

/// Convenience alias for enhancement results.
pub type EnhanceResult<T> = std::result::Result<T, EnhanceError>;
