//! Persistent prompt history.
//!
//! The whole history lives in one JSON document, most recent first, capped
//! at [`MAX_HISTORY`] records. Mutations touch memory only until
//! [`HistoryStore::save`] is called.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::vocab::closed_vocab;
use crate::model::{HistoryId, Language, PromptHistoryRecord};

/// Records beyond this many are dropped, oldest first.
pub const MAX_HISTORY: usize = 50;

closed_vocab!(HistoryFilter, "history filter", "Which records a history search returns.", {
    All => "all",
    Favorites => "favorites",
    English => "english",
    Indonesian => "indonesian",
});

impl Default for HistoryFilter {
    fn default() -> Self {
        Self::All
    }
}

impl HistoryFilter {
    fn accepts(self, record: &PromptHistoryRecord) -> bool {
        match self {
            Self::All => true,
            Self::Favorites => record.favorite,
            Self::English => record.language == Language::English,
            Self::Indonesian => record.language == Language::Indonesian,
        }
    }
}

/// On-disk layout.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Storage {
    #[serde(default)]
    prompt_history: Vec<PromptHistoryRecord>,
    #[serde(default)]
    language: Language,
}

#[derive(Debug)]
pub struct HistoryStore {
    path: Option<PathBuf>,
    storage: Storage,
}

impl HistoryStore {
    /// Open the history at `path`. A missing file is an empty history.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let storage = if path.exists() {
            let raw = std::fs::read_to_string(&path)?;
            let mut storage: Storage = serde_json::from_str(&raw)?;
            storage.prompt_history.truncate(MAX_HISTORY);
            log::debug!(
                "Loaded {} history records from {}",
                storage.prompt_history.len(),
                path.display()
            );
            storage
        } else {
            log::debug!("No history at {}, starting empty", path.display());
            Storage::default()
        };
        Ok(Self {
            path: Some(path),
            storage,
        })
    }

    /// A store that never touches disk (for tests).
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            path: None,
            storage: Storage::default(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// All records, most recent first.
    pub fn records(&self) -> &[PromptHistoryRecord] {
        &self.storage.prompt_history
    }

    pub fn len(&self) -> usize {
        self.storage.prompt_history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.prompt_history.is_empty()
    }

    pub fn get(&self, id: &HistoryId) -> Result<&PromptHistoryRecord> {
        self.storage
            .prompt_history
            .iter()
            .find(|r| &r.id == id)
            .ok_or_else(|| not_found(id))
    }

    /// Prepend `record`, evicting the oldest beyond [`MAX_HISTORY`].
    pub fn add(&mut self, record: PromptHistoryRecord) {
        self.storage.prompt_history.insert(0, record);
        if self.storage.prompt_history.len() > MAX_HISTORY {
            let evicted = self.storage.prompt_history.len() - MAX_HISTORY;
            self.storage.prompt_history.truncate(MAX_HISTORY);
            log::debug!("Evicted {evicted} oldest history record(s)");
        }
    }

    /// Flip the favorite flag and return its new value.
    pub fn toggle_favorite(&mut self, id: &HistoryId) -> Result<bool> {
        let record = self
            .storage
            .prompt_history
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| not_found(id))?;
        record.favorite = !record.favorite;
        Ok(record.favorite)
    }

    pub fn delete(&mut self, id: &HistoryId) -> Result<PromptHistoryRecord> {
        let index = self
            .storage
            .prompt_history
            .iter()
            .position(|r| &r.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(self.storage.prompt_history.remove(index))
    }

    /// Records matching `term` (prompt text or genre, case-insensitive)
    /// that pass `filter`. An empty term matches everything.
    pub fn search<'a>(
        &'a self,
        term: &'a str,
        filter: HistoryFilter,
    ) -> impl Iterator<Item = &'a PromptHistoryRecord> + 'a {
        self.storage
            .prompt_history
            .iter()
            .filter(move |r| filter.accepts(r))
            .filter(move |r| term.trim().is_empty() || r.matches(term.trim()))
    }

    /// The interface language preference.
    pub fn language(&self) -> Language {
        self.storage.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.storage.language = language;
    }

    /// Write the history back to its file, creating parent directories.
    /// In-memory stores have nothing to write.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.storage)?;
        std::fs::write(path, json)?;
        log::info!(
            "Saved {} history records to {}",
            self.storage.prompt_history.len(),
            path.display()
        );
        Ok(())
    }
}

fn not_found(id: &HistoryId) -> Error {
    Error::NotFound {
        entity: "history record",
        id: id.to_string(),
    }
}
