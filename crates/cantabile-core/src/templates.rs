//! Prompt templates.
//!
//! The built-in library is embedded in the binary. A user library with the
//! same TOML layout can replace it at runtime.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Category, Duration, Language, Mode, PromptSelection, VocalStyle};

const BUILTIN: &str = include_str!("../data/templates.toml");

/// A template with a complete preset selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Hand-written prompt shown alongside the preset.
    pub prompt: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub moods: Vec<String>,
    pub tempo: u32,
    #[serde(default)]
    pub instruments: Vec<String>,
    #[serde(default)]
    pub vocal_style: VocalStyle,
    #[serde(default)]
    pub duration: Duration,
    pub key_signature: String,
    #[serde(default)]
    pub song_structure: Vec<String>,
}

impl QuickTemplate {
    /// The preset as a selection for `mode`.
    pub fn selection(&self, mode: Mode) -> PromptSelection {
        PromptSelection::new(mode)
            .with_genres(self.genres.iter().cloned())
            .with_moods(self.moods.iter().cloned())
            .with_instruments(self.instruments.iter().cloned())
            .with_tempo(self.tempo)
            .with_duration(self.duration)
            .with_key(self.key_signature.clone())
            .with_vocals(self.vocal_style.gender, self.vocal_style.character)
            .with_structure(self.song_structure.iter().cloned())
    }
}

/// A bilingual ready-made prompt for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTemplate {
    pub id: String,
    pub category: Category,
    pub name: String,
    pub name_id: String,
    pub description: String,
    pub description_id: String,
    pub prompt: String,
    pub prompt_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Intended listener effect, where one is stated.
    #[serde(default)]
    pub effect: Option<String>,
}

impl CategoryTemplate {
    pub fn prompt_for(&self, language: Language) -> &str {
        match language {
            Language::English => &self.prompt,
            Language::Indonesian => &self.prompt_id,
        }
    }

    pub fn name_for(&self, language: Language) -> &str {
        match language {
            Language::English => &self.name,
            Language::Indonesian => &self.name_id,
        }
    }

    pub fn description_for(&self, language: Language) -> &str {
        match language {
            Language::English => &self.description,
            Language::Indonesian => &self.description_id,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateLibrary {
    #[serde(default)]
    pub quick: Vec<QuickTemplate>,
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryTemplate>,
}

impl TemplateLibrary {
    /// The library shipped with cantabile.
    pub fn builtin() -> Result<Self> {
        Self::parse(BUILTIN)
    }

    pub fn parse(source: &str) -> Result<Self> {
        let library: Self = toml::from_str(source)?;
        log::debug!(
            "Parsed template library: {} quick, {} category",
            library.quick.len(),
            library.categories.len()
        );
        Ok(library)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)?;
        Self::parse(&source)
    }

    pub fn quick(&self, id: &str) -> Result<&QuickTemplate> {
        self.quick
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound {
                entity: "quick template",
                id: id.to_string(),
            })
    }

    pub fn category_template(&self, id: &str) -> Result<&CategoryTemplate> {
        self.categories
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::NotFound {
                entity: "category template",
                id: id.to_string(),
            })
    }

    pub fn in_category<'a>(
        &'a self,
        category: &'a Category,
    ) -> impl Iterator<Item = &'a CategoryTemplate> + 'a {
        self.categories.iter().filter(move |t| &t.category == category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VocalGender;
    use crate::text::optimize_locally;
    use crate::EnhanceOptions;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_parses() {
        let library = TemplateLibrary::builtin().unwrap();
        assert_eq!(library.quick.len(), 8);
        assert!(library.categories.len() >= 12);
    }

    #[test]
    fn test_ids_are_unique() {
        let library = TemplateLibrary::builtin().unwrap();
        let mut ids: Vec<&str> = library
            .quick
            .iter()
            .map(|t| t.id.as_str())
            .chain(library.categories.iter().map(|t| t.id.as_str()))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }

    #[test]
    fn test_quick_selection() {
        let library = TemplateLibrary::builtin().unwrap();
        let wedding = library.quick("wedding-song").unwrap();
        let selection = wedding.selection(Mode::Full);
        assert_eq!(selection.tempo, 75);
        assert_eq!(selection.duration, Duration::ThreeMinutes);
        assert_eq!(selection.vocal_style.gender, VocalGender::Male);
        assert_eq!(selection.genres, vec!["Folk", "Pop"]);
        assert_eq!(selection.song_structure.len(), 8);
    }

    #[test]
    fn test_quick_selection_assembles() {
        let library = TemplateLibrary::builtin().unwrap();
        let selection = library.quick("meditation").unwrap().selection(Mode::Full);
        let prompt = crate::assemble(&selection);
        assert!(prompt.starts_with("[ambient, classical] Create a ambient and classical fusion song"));
        assert!(!prompt.contains("vocals"));
    }

    #[test]
    fn test_unknown_ids() {
        let library = TemplateLibrary::builtin().unwrap();
        assert!(matches!(
            library.quick("nope"),
            Err(Error::NotFound { entity: "quick template", .. })
        ));
        assert!(matches!(
            library.category_template("nope"),
            Err(Error::NotFound { .. })
        ));
    }

    #[test]
    fn test_in_category() {
        let library = TemplateLibrary::builtin().unwrap();
        let relaxation: Vec<_> = library.in_category(&Category::Relaxation).collect();
        assert_eq!(relaxation.len(), 5);
        assert!(relaxation.iter().all(|t| t.category == Category::Relaxation));
        assert_eq!(library.in_category(&Category::General).count(), 0);
    }

    #[test]
    fn test_prompt_for_language() {
        let library = TemplateLibrary::builtin().unwrap();
        let koplo = library.category_template("dangdut-koplo").unwrap();
        assert!(koplo.prompt_for(Language::English).starts_with("[dangdut, koplo, electronic] Create"));
        assert!(koplo.prompt_for(Language::Indonesian).starts_with("[dangdut, koplo, elektronik] Buat"));
        assert_eq!(koplo.name_for(Language::Indonesian), "Dangdut Koplo");
        assert_eq!(koplo.effect, None);
    }

    #[test]
    fn test_category_prompt_optimizes_locally() {
        let library = TemplateLibrary::builtin().unwrap();
        let koplo = library.category_template("dangdut-koplo").unwrap();
        let options = EnhanceOptions::new(Language::Indonesian, Category::Indonesian);
        let optimized = optimize_locally(koplo.prompt_for(Language::Indonesian), &options);
        assert!(optimized.starts_with("[dangdut, koplo, elektronik]"));
        assert!(optimized.contains("Dengan nuansa budaya Indonesia yang kental"));
    }

    #[test]
    fn test_load_user_library() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("templates.toml");
        std::fs::write(
            &path,
            r#"
[[quick]]
id = "tiny"
name = "Tiny"
description = "Smallest preset"
prompt = "Create a tiny song"
tempo = 100
key_signature = "D Major"
"#,
        )
        .unwrap();

        let library = TemplateLibrary::load(&path).unwrap();
        let tiny = library.quick("tiny").unwrap();
        assert_eq!(tiny.duration, Duration::TwoMinutes);
        assert!(library.categories.is_empty());
    }

    #[test]
    fn test_load_rejects_bad_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("templates.toml");
        std::fs::write(&path, "[[quick]]\nid = 3").unwrap();
        assert!(matches!(
            TemplateLibrary::load(&path),
            Err(Error::Template(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(matches!(TemplateLibrary::load(&missing), Err(Error::Io(_))));
    }
}
