use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::HistoryId;
use crate::model::options::{Category, Language};
use crate::model::selection::{PromptSelection, VocalStyle};
use crate::model::vocab::Duration;

/// A saved prompt, as kept by the [`HistoryStore`](crate::store::HistoryStore).
///
/// Field names serialize in camelCase so that a history file lines up with
/// the browser storage layout of earlier versions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptHistoryRecord {
    pub id: HistoryId,
    pub prompt: String,

    /// The same prompt in the other language, when one was produced.
    #[serde(rename = "promptId", default, skip_serializing_if = "Option::is_none")]
    pub secondary_prompt: Option<String>,

    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub moods: Vec<String>,
    pub tempo: u32,
    #[serde(default)]
    pub instruments: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocal_style: Option<VocalStyle>,
    pub duration: Duration,
    pub key_signature: String,
    #[serde(default)]
    pub song_structure: Vec<String>,

    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub favorite: bool,
    #[serde(default)]
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl PromptHistoryRecord {
    #[must_use]
    pub fn new(prompt: impl Into<String>, language: Language) -> Self {
        Self {
            id: HistoryId::new(),
            prompt: prompt.into(),
            secondary_prompt: None,
            genres: Vec::new(),
            moods: Vec::new(),
            tempo: 120,
            instruments: Vec::new(),
            vocal_style: None,
            duration: Duration::TwoMinutes,
            key_signature: String::from("C Major"),
            song_structure: Vec::new(),
            created_at: Utc::now(),
            favorite: false,
            language,
            category: None,
        }
    }

    /// Copy the musical parameters of the selection the prompt came from.
    #[must_use]
    pub fn with_selection(mut self, selection: &PromptSelection) -> Self {
        self.genres = selection.genres.clone();
        self.moods = selection.moods.clone();
        self.tempo = selection.tempo;
        self.instruments = selection.instruments.clone();
        self.vocal_style = Some(selection.vocal_style);
        self.duration = selection.duration;
        self.key_signature = selection.key_signature.clone();
        self.song_structure = selection.song_structure.clone();
        self
    }

    #[must_use]
    pub fn with_genres(mut self, genres: Vec<String>) -> Self {
        self.genres = genres;
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub fn with_secondary(mut self, prompt: impl Into<String>) -> Self {
        self.secondary_prompt = Some(prompt.into());
        self
    }

    /// Case-insensitive match against the prompt text or any genre.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.prompt.to_lowercase().contains(&term)
            || self.genres.iter().any(|g| g.to_lowercase().contains(&term))
    }
}
