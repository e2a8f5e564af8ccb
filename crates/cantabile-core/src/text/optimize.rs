//! Local prompt optimizer.
//!
//! The deterministic fallback used when no remote enhancement is available,
//! and the engine behind the explicit "optimize" action. Clauses are chosen
//! by [`EnhanceOptions`]; wording follows the output [`Language`].
//!
//! Repeated optimization is not idempotent: only the production, tempo,
//! stereo and mastering clauses check for earlier mentions, so running the
//! optimizer twice appends the category and service clauses again.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Category, EnhanceOptions, Language, OptimizationLevel};
use crate::text::normalize::{collapse_whitespace, normalize};

/// Upper bound on the length of an optimized prompt, in characters.
pub const MAX_PROMPT_CHARS: usize = 500;

const ELLIPSIS: &str = "...";

/// Name of the generation service the prompts are tuned for.
pub const TARGET_SERVICE: &str = "Suno AI";

fn genre_tag() -> &'static Regex {
    static CELL: OnceLock<Regex> = OnceLock::new();
    CELL.get_or_init(|| Regex::new(r"\[[^\]]+\]").expect("invalid genre tag pattern"))
}

/// The clauses the optimizer may append, in both output languages.
#[derive(Debug, Clone, Copy)]
struct Clause {
    english: &'static str,
    indonesian: &'static str,
}

impl Clause {
    const fn text(&self, language: Language) -> &'static str {
        match language {
            Language::English => self.english,
            Language::Indonesian => self.indonesian,
        }
    }
}

const PRODUCTION: Clause = Clause {
    english: " High-quality production with smooth and natural mixing.",
    indonesian: " Produksi berkualitas tinggi dengan mixing yang halus dan natural.",
};

const TRANQUILITY: Clause = Clause {
    english: " Focus on tranquility and deep relaxation.",
    indonesian: " Fokus pada ketenangan dan relaksasi mendalam.",
};

const CULTURAL: Clause = Clause {
    english: " With rich Indonesian cultural nuances.",
    indonesian: " Dengan nuansa budaya Indonesia yang kental.",
};

const COMMERCIAL: Clause = Clause {
    english: " Professional and memorable for commercial use.",
    indonesian: " Profesional dan mudah diingat untuk keperluan komersial.",
};

const TEMPO: Clause = Clause {
    english: " Appropriate and natural tempo.",
    indonesian: " Tempo yang sesuai dan natural.",
};

const SPATIAL: Clause = Clause {
    english: " With wide stereo and spatial effects.",
    indonesian: " Dengan efek stereo yang luas dan spasial.",
};

const MASTERING: Clause = Clause {
    english: " Professional mastering for optimal audio quality.",
    indonesian: " Mastering profesional untuk kualitas audio optimal.",
};

const SERVICE: Clause = Clause {
    english: " Specifically optimized for Suno AI with best parameters.",
    indonesian: " Dioptimalkan khusus untuk Suno AI dengan parameter terbaik.",
};

fn mentions_any(text: &str, terms: &[&str]) -> bool {
    let lower = text.to_lowercase();
    terms.iter().any(|term| lower.contains(term))
}

/// Clause for a category, given the prompt so far.
fn category_clause(category: &Category, prompt: &str) -> Option<Clause> {
    match category {
        Category::Relaxation if mentions_any(prompt, &["ambient", "nature"]) => Some(TRANQUILITY),
        Category::Indonesian => Some(CULTURAL),
        Category::Commercial => Some(COMMERCIAL),
        _ => None,
    }
}

/// Move the first `[...]` group to the front of the prompt.
fn front_genre_tag(prompt: &str) -> String {
    let Some(tag) = genre_tag().find(prompt) else {
        return prompt.to_string();
    };
    let mut rest = String::with_capacity(prompt.len());
    rest.push_str(&prompt[..tag.start()]);
    rest.push(' ');
    rest.push_str(&prompt[tag.end()..]);
    let rest = collapse_whitespace(&rest);

    if rest.is_empty() {
        tag.as_str().to_string()
    } else {
        format!("{} {}", tag.as_str(), rest)
    }
}

fn truncate(prompt: String) -> String {
    if prompt.chars().count() <= MAX_PROMPT_CHARS {
        return prompt;
    }
    let keep = MAX_PROMPT_CHARS - ELLIPSIS.len();
    let mut truncated: String = prompt.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Enhance a prompt with deterministic heuristics.
///
/// Steps, in order: normalize; add a production clause unless production
/// is already mentioned; add the category clause; move the first genre tag
/// to the front; add a tempo clause unless BPM or tempo is mentioned; for
/// [`OptimizationLevel::Advanced`] add stereo, mastering and service
/// clauses; cap the result at [`MAX_PROMPT_CHARS`] characters.
#[must_use]
pub fn optimize_locally(prompt: &str, options: &EnhanceOptions) -> String {
    let language = options.language;
    let mut optimized = normalize(prompt);

    if !mentions_any(&optimized, &["production", "produksi"]) {
        optimized.push_str(PRODUCTION.text(language));
    }

    if let Some(clause) = category_clause(&options.category, &optimized) {
        optimized.push_str(clause.text(language));
    }

    optimized = front_genre_tag(&optimized);

    if !mentions_any(&optimized, &["bpm", "tempo"]) {
        optimized.push_str(TEMPO.text(language));
    }

    if options.level == OptimizationLevel::Advanced {
        if !mentions_any(&optimized, &["stereo", "spatial"]) {
            optimized.push_str(SPATIAL.text(language));
        }
        if !mentions_any(&optimized, &["master", "quality"]) {
            optimized.push_str(MASTERING.text(language));
        }
        optimized.push_str(SERVICE.text(language));
    }

    truncate(optimized.trim_start().to_string())
}
