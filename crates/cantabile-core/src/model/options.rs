//! Options shared by the local optimizer and the remote enhancement gateway.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::vocab::closed_vocab;

closed_vocab!(Language, "language", "Language of generated clauses and instructions.", {
    English => "english",
    Indonesian => "indonesian",
});

closed_vocab!(OptimizationLevel, "optimization level", "How aggressively a prompt is enhanced.", {
    Basic => "basic",
    Advanced => "advanced",
});

impl Default for Language {
    fn default() -> Self {
        Self::English
    }
}

impl Default for OptimizationLevel {
    fn default() -> Self {
        Self::Basic
    }
}

/// A template category.
///
/// The four built-in categories drive category-specific clauses in the
/// local optimizer. Any other name is carried through unchanged and adds
/// no clause.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    Relaxation,
    Indonesian,
    International,
    Commercial,
    #[default]
    General,
    Other(String),
}

impl Category {
    /// The built-in categories, in display order.
    pub const BUILTIN: &'static [Self] = &[
        Self::Relaxation,
        Self::Indonesian,
        Self::International,
        Self::Commercial,
    ];

    /// Resolve a category name; unknown names become [`Category::Other`].
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        match name.as_str() {
            "relaxation" => Self::Relaxation,
            "indonesian" => Self::Indonesian,
            "international" => Self::International,
            "commercial" => Self::Commercial,
            "" | "general" => Self::General,
            _ => Self::Other(name),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Relaxation => "relaxation",
            Self::Indonesian => "indonesian",
            Self::International => "international",
            Self::Commercial => "commercial",
            Self::General => "general",
            Self::Other(name) => name,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_name(&raw))
    }
}

/// Options for enhancing a single prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EnhanceOptions {
    pub language: Language,
    pub category: Category,
    #[serde(default)]
    pub level: OptimizationLevel,
}

impl EnhanceOptions {
    #[must_use]
    pub fn new(language: Language, category: Category) -> Self {
        Self {
            language,
            category,
            level: OptimizationLevel::Basic,
        }
    }

    #[must_use]
    pub fn advanced(mut self) -> Self {
        self.level = OptimizationLevel::Advanced;
        self
    }

    #[must_use]
    pub fn with_level(mut self, level: OptimizationLevel) -> Self {
        self.level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("Relaxation".parse::<Category>().unwrap(), Category::Relaxation);
        assert_eq!("".parse::<Category>().unwrap(), Category::General);
        assert_eq!(
            "Songstyle".parse::<Category>().unwrap(),
            Category::Other("songstyle".to_string())
        );
    }

    #[test]
    fn test_category_round_trips_through_json() {
        let json = serde_json::to_string(&Category::Commercial).unwrap();
        assert_eq!(json, "\"commercial\"");
        let other: Category = serde_json::from_str("\"lyrics\"").unwrap();
        assert_eq!(other.as_str(), "lyrics");
    }

    #[test]
    fn test_enhance_options_builder() {
        let options = EnhanceOptions::new(Language::Indonesian, Category::Relaxation).advanced();
        assert_eq!(options.language, Language::Indonesian);
        assert_eq!(options.level, OptimizationLevel::Advanced);
    }

    #[test]
    fn test_enhance_options_level_defaults_to_basic() {
        let options: EnhanceOptions =
            serde_json::from_str(r#"{"language": "english", "category": "commercial"}"#).unwrap();
        assert_eq!(options.level, OptimizationLevel::Basic);
    }
}
