//! Deterministic text transformations applied to prompts.

pub mod normalize;
pub mod optimize;

pub use normalize::{collapse_whitespace, normalize};
pub use optimize::{optimize_locally, MAX_PROMPT_CHARS};
