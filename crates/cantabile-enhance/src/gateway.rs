//! The enhancement fallback chain.
//!
//! Providers are tried in order, once each. When every provider fails, or
//! none is configured, the prompt goes through the local optimizer instead.
//! The gateway therefore always returns text.

use std::fmt;
use std::sync::Arc;

use cantabile_core::model::{EnhanceOptions, Language};
use cantabile_core::optimize_locally;

use crate::config::Config;
use crate::error::{EnhanceError, EnhanceResult};
use crate::provider::{gemini, openrouter, Enhancer, GeminiClient, OpenRouterClient};

/// Where an enhanced prompt came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhancementSource {
    /// A remote provider, by name.
    Provider(String),
    /// The local optimizer.
    LocalFallback,
}

impl fmt::Display for EnhancementSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Provider(name) => f.write_str(name),
            Self::LocalFallback => f.write_str("local optimization"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enhancement {
    pub text: String,
    pub source: EnhancementSource,
}

impl Enhancement {
    /// `true` when no remote provider produced this text.
    pub fn is_fallback(&self) -> bool {
        self.source == EnhancementSource::LocalFallback
    }
}

/// An English prompt and its Indonesian counterpart, enhanced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualEnhancement {
    pub english: Enhancement,
    pub indonesian: Enhancement,
}

#[derive(Debug, Clone, Default)]
pub struct Gateway {
    providers: Vec<Arc<dyn Enhancer>>,
}

impl Gateway {
    /// A gateway with no providers: every call optimizes locally.
    #[must_use]
    pub fn local_only() -> Self {
        Self::default()
    }

    /// Gemini first, then OpenRouter, skipping providers without a key.
    pub fn from_config(config: &Config) -> EnhanceResult<Self> {
        let timeout = config.request_timeout();
        let mut gateway = Self::default();
        match require_key(gemini::PROVIDER, config.gemini_key()) {
            Ok(key) => {
                gateway = gateway.with_provider(GeminiClient::new(
                    key.to_string(),
                    config.gemini_model.clone(),
                    timeout,
                )?);
            }
            Err(e) => log::debug!("{e}, skipping"),
        }
        match require_key(openrouter::PROVIDER, config.openrouter_key()) {
            Ok(key) => {
                gateway = gateway.with_provider(OpenRouterClient::new(
                    key.to_string(),
                    config.openrouter_model.clone(),
                    timeout,
                )?);
            }
            Err(e) => log::debug!("{e}, skipping"),
        }
        log::debug!(
            "Enhancement gateway configured with {} provider(s)",
            gateway.providers.len()
        );
        Ok(gateway)
    }

    /// Append a provider to the end of the chain.
    #[must_use]
    pub fn with_provider(mut self, provider: impl Enhancer + 'static) -> Self {
        self.providers.push(Arc::new(provider));
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    pub fn has_providers(&self) -> bool {
        !self.providers.is_empty()
    }

    /// Enhance `prompt`, falling back to [`optimize_locally`].
    pub async fn enhance(&self, prompt: &str, options: &EnhanceOptions) -> Enhancement {
        if self.providers.is_empty() {
            log::info!("No enhancement providers configured, using local optimization");
            return local(prompt, options);
        }

        for provider in &self.providers {
            log::debug!("Trying {} enhancement", provider.name());
            match provider.enhance(prompt, options).await {
                Ok(text) => {
                    return Enhancement {
                        text,
                        source: EnhancementSource::Provider(provider.name().to_string()),
                    };
                }
                Err(e) if e.is_transport() => {
                    log::warn!(
                        "{} enhancement failed, trying next provider: {e}",
                        provider.name()
                    );
                }
                Err(e) => {
                    log::warn!(
                        "{} returned an unusable response, trying next provider: {e}",
                        provider.name()
                    );
                }
            }
        }

        log::info!("All enhancement providers failed, using local optimization");
        local(prompt, options)
    }

    /// Enhance an English and an Indonesian prompt concurrently.
    ///
    /// `options.language` is ignored; each prompt uses its own language.
    pub async fn enhance_bilingual(
        &self,
        english: &str,
        indonesian: &str,
        options: &EnhanceOptions,
    ) -> BilingualEnhancement {
        let english_options = EnhanceOptions {
            language: Language::English,
            ..options.clone()
        };
        let indonesian_options = EnhanceOptions {
            language: Language::Indonesian,
            ..options.clone()
        };
        let (english, indonesian) = tokio::join!(
            self.enhance(english, &english_options),
            self.enhance(indonesian, &indonesian_options),
        );
        BilingualEnhancement {
            english,
            indonesian,
        }
    }
}

/// The key for `provider`, or [`EnhanceError::NotConfigured`] when it is
/// missing or blank.
fn require_key<'a>(provider: &str, key: Option<&'a str>) -> EnhanceResult<&'a str> {
    key.filter(|k| !k.trim().is_empty())
        .ok_or_else(|| EnhanceError::NotConfigured {
            provider: provider.to_string(),
        })
}

fn local(prompt: &str, options: &EnhanceOptions) -> Enhancement {
    Enhancement {
        text: optimize_locally(prompt, options),
        source: EnhancementSource::LocalFallback,
    }
}
