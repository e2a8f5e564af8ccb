//! Remote prompt enhancement for cantabile.
//!
//! A [`Gateway`] sends prompts to configured providers (Gemini, then
//! OpenRouter) and falls back to the local optimizer from
//! `cantabile-core` when none succeeds. Configuration for the whole
//! application also lives here.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod gateway;
pub mod instruction;
pub mod provider;

pub use config::Config;
pub use error::{EnhanceError, EnhanceResult};
pub use gateway::{BilingualEnhancement, Enhancement, EnhancementSource, Gateway};
pub use provider::{Enhancer, GeminiClient, OpenRouterClient};
