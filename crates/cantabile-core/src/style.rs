//! Song style generation.
//!
//! A style is one value per [`CreativeCategory`]. Each category is either
//! fixed by the caller or left to chance; random categories are resolved
//! through a [`FragmentPicker`] so results can be reproduced.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::lyrics::{FragmentPicker, RandomPicker};
use crate::model::vocab::closed_vocab;

closed_vocab!(CreativeCategory, "creative category", "One dimension of a song style.", {
    Theme => "theme",
    Melody => "melody",
    Harmony => "harmony",
    Rhythm => "rhythm",
    Structure => "structure",
    Instrumentation => "instrumentation",
    Style => "style",
    Mood => "mood",
    Language => "language",
    Dynamic => "dynamic",
    Production => "production",
    Originality => "originality",
    VocalStyle => "vocal-style",
});

impl CreativeCategory {
    /// The closed list of values for this category.
    pub const fn options(self) -> &'static [&'static str] {
        match self {
            Self::Theme => &[
                "Love & Romance", "Adventure", "Nostalgia", "Rebellion", "Spirituality",
                "Party & Celebration", "Heartbreak", "Motivation", "Mystery", "Nature",
            ],
            Self::Melody => &[
                "Simple & Catchy", "Complex & Intricate", "Minimalist", "Ornamental", "Modal",
                "Pentatonic", "Chromatic", "Folk-inspired", "Jazz-influenced", "Electronic",
            ],
            Self::Harmony => &[
                "Major Key", "Minor Key", "Modal", "Jazz Harmony", "Dissonant", "Consonant",
                "Extended Chords", "Simple Triads", "Quartal", "Atonal",
            ],
            Self::Rhythm => &[
                "4/4 Standard", "3/4 Waltz", "6/8 Compound", "7/8 Odd Meter", "Syncopated",
                "Straight", "Swing", "Latin", "Polyrhythmic", "Free Time",
            ],
            Self::Structure => &[
                "Verse-Chorus", "AABA", "Through-composed", "Rondo", "Binary", "Ternary",
                "Verse-Bridge", "Intro-Outro", "Medley", "Suite",
            ],
            Self::Instrumentation => &[
                "Full Orchestra", "Rock Band", "Electronic", "Acoustic", "Jazz Ensemble",
                "String Quartet", "Solo Piano", "Choir", "World Instruments", "Hybrid",
            ],
            Self::Style => &[
                "Pop", "Rock", "Jazz", "Classical", "Electronic", "Folk", "R&B", "Hip-Hop",
                "Country", "World Music", "Fusion",
            ],
            Self::Mood => &[
                "Happy", "Sad", "Energetic", "Calm", "Mysterious", "Romantic", "Aggressive",
                "Peaceful", "Dramatic", "Playful",
            ],
            Self::Language => &[
                "Bahasa Indonesia", "English", "Sundanese", "Javanese", "Batak", "Minang",
                "Mandarin", "Japanese", "Korean", "Spanish",
            ],
            Self::Dynamic => &[
                "Soft & Gentle", "Loud & Powerful", "Dynamic Contrast", "Crescendo Build",
                "Sudden Changes", "Consistent Level", "Whisper to Scream", "Ambient",
                "Explosive", "Subtle",
            ],
            Self::Production => &[
                "Lo-fi", "Hi-fi", "Vintage", "Modern", "Raw", "Polished", "Ambient",
                "Compressed", "Spacious", "Intimate",
            ],
            Self::Originality => &[
                "Highly Original", "Familiar with Twist", "Traditional", "Experimental",
                "Fusion", "Retro", "Futuristic", "Cross-genre", "Minimalist", "Maximalist",
            ],
            Self::VocalStyle => &[
                "Powerful Belting", "Soft Crooning", "Rap/Spoken", "Operatic", "Folk Style",
                "Auto-tuned", "Harmony Rich", "Solo", "Call & Response", "Instrumental",
            ],
        }
    }
}

/// How one category gets its value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "choice", content = "value")]
pub enum StyleChoice {
    #[default]
    Random,
    Fixed(String),
}

/// What the caller wants from the style generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongStyleRequest {
    /// Free-text vision for the song.
    pub preferences: String,
    /// Categories missing here are random.
    pub choices: BTreeMap<CreativeCategory, StyleChoice>,
    /// Extra languages accepted as fixed values and added to the random pool.
    pub custom_languages: Vec<String>,
}

impl SongStyleRequest {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.preferences = preferences.into();
        self
    }

    /// Add a language outside the built-in list. Blank and duplicate
    /// names are ignored.
    #[must_use]
    pub fn with_custom_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into().trim().to_string();
        if !language.is_empty() && !self.custom_languages.contains(&language) {
            self.custom_languages.push(language);
        }
        self
    }

    /// Fix `category` to `value`, matched case-insensitively against the
    /// category's options (and custom languages for [`CreativeCategory::Language`]).
    pub fn with_fixed(mut self, category: CreativeCategory, value: &str) -> Result<Self> {
        let wanted = value.trim();
        let custom = match category {
            CreativeCategory::Language => self.custom_languages.as_slice(),
            _ => &[],
        };
        let canonical = category
            .options()
            .iter()
            .copied()
            .chain(custom.iter().map(String::as_str))
            .find(|option| option.eq_ignore_ascii_case(wanted))
            .map(str::to_string)
            .ok_or_else(|| {
                Error::InvalidSelection(format!(
                    "unknown {category} '{value}' (expected one of: {})",
                    category.options().join(", ")
                ))
            })?;
        self.choices.insert(category, StyleChoice::Fixed(canonical));
        Ok(self)
    }

    fn choice(&self, category: CreativeCategory) -> &StyleChoice {
        static RANDOM: StyleChoice = StyleChoice::Random;
        self.choices.get(&category).unwrap_or(&RANDOM)
    }
}

/// A song style with every category decided.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedStyle {
    pub preferences: String,
    pub values: BTreeMap<CreativeCategory, String>,
}

impl ResolvedStyle {
    /// The value chosen for `category`.
    pub fn get(&self, category: CreativeCategory) -> &str {
        self.values.get(&category).map_or("", String::as_str)
    }

    /// The one-paragraph generation prompt for this style.
    pub fn suno_prompt(&self) -> String {
        use CreativeCategory as C;
        let low = |c: C| self.get(c).to_lowercase();
        format!(
            "[{}, {}] Create a {} song with {} melody and {} harmony. \
             Use {} with {} rhythm. {} production style with {} vocals in {}. \
             {} dynamics throughout.",
            low(C::Style),
            low(C::Mood),
            low(C::Theme),
            low(C::Melody),
            low(C::Harmony),
            low(C::Instrumentation),
            low(C::Rhythm),
            low(C::Production),
            low(C::VocalStyle),
            self.get(C::Language),
            low(C::Dynamic),
        )
    }
}

/// Decide every category of `request`, drawing random ones from `picker`.
pub fn resolve_style(request: &SongStyleRequest, picker: &mut dyn FragmentPicker) -> ResolvedStyle {
    let mut values = BTreeMap::new();
    for &category in CreativeCategory::ALL {
        let value = match request.choice(category) {
            StyleChoice::Fixed(value) => value.clone(),
            StyleChoice::Random => {
                let mut pool: Vec<&str> = category.options().to_vec();
                if category == CreativeCategory::Language {
                    pool.extend(request.custom_languages.iter().map(String::as_str));
                }
                crate::lyrics::choose(pool.as_slice(), picker)
                    .map(|v| (*v).to_string())
                    .unwrap_or_default()
            }
        };
        values.insert(category, value);
    }
    log::debug!("Resolved song style over {} categories", values.len());
    ResolvedStyle {
        preferences: request.preferences.clone(),
        values,
    }
}

/// [`resolve_style`] with a thread-local random picker.
pub fn resolve_style_random(request: &SongStyleRequest) -> ResolvedStyle {
    resolve_style(request, &mut RandomPicker::new())
}

/// The full style description, ending with the generation prompt and a
/// short creative direction.
pub fn render_song_style(style: &ResolvedStyle) -> String {
    use CreativeCategory as C;
    let vision = if style.preferences.trim().is_empty() {
        "Creative exploration"
    } else {
        style.preferences.trim()
    };
    let low = |c: C| style.get(c).to_lowercase();

    let mut out = String::from("🎵 **Generated Song Style**\n\n");
    out.push_str(&format!("**User Vision:** {vision}\n\n"));

    let sections: [(&str, &[(&str, C)]); 3] = [
        (
            "Musical Elements",
            &[
                ("Theme", C::Theme),
                ("Melody", C::Melody),
                ("Harmony", C::Harmony),
                ("Rhythm", C::Rhythm),
                ("Structure", C::Structure),
            ],
        ),
        (
            "Production & Performance",
            &[
                ("Instrumentation", C::Instrumentation),
                ("Style/Genre", C::Style),
                ("Mood", C::Mood),
                ("Language", C::Language),
                ("Dynamics", C::Dynamic),
            ],
        ),
        (
            "Technical Specifications",
            &[
                ("Production Style", C::Production),
                ("Originality Level", C::Originality),
                ("Vocal Style", C::VocalStyle),
            ],
        ),
    ];
    for (heading, rows) in sections {
        out.push_str(&format!("**{heading}:**\n"));
        for (label, category) in rows {
            out.push_str(&format!("• **{label}:** {}\n", style.get(*category)));
        }
        out.push('\n');
    }

    out.push_str(&format!("**Suno AI Prompt:**\n{}\n\n", style.suno_prompt()));
    out.push_str(&format!(
        "**Creative Direction:**\nThis song style combines {} creativity with {} emotional \
         expression. The {} structure provides a solid foundation for the {} theme, while the \
         {} production enhances the overall sonic experience.",
        low(C::Originality),
        low(C::Mood),
        low(C::Structure),
        low(C::Theme),
        low(C::Production),
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(_: usize) -> usize {
        0
    }

    #[test]
    fn test_every_category_has_options() {
        assert_eq!(CreativeCategory::ALL.len(), 13);
        for category in CreativeCategory::ALL {
            assert!(category.options().len() >= 10, "{category}");
        }
    }

    #[test]
    fn test_all_random_with_first_picker() {
        let style = resolve_style(&SongStyleRequest::new(), &mut first);
        assert_eq!(style.get(CreativeCategory::Theme), "Love & Romance");
        assert_eq!(style.get(CreativeCategory::Language), "Bahasa Indonesia");
        assert_eq!(style.values.len(), 13);
    }

    #[test]
    fn test_fixed_values_are_canonicalized() {
        let request = SongStyleRequest::new()
            .with_fixed(CreativeCategory::Style, "hip-hop")
            .and_then(|r| r.with_fixed(CreativeCategory::Mood, "Calm"));
        let request = request.unwrap();
        let style = resolve_style(&request, &mut first);
        assert_eq!(style.get(CreativeCategory::Style), "Hip-Hop");
        assert_eq!(style.get(CreativeCategory::Mood), "Calm");
    }

    #[test]
    fn test_fixed_unknown_value_rejected() {
        let err = SongStyleRequest::new()
            .with_fixed(CreativeCategory::Rhythm, "5/4 Wobble")
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSelection(_)));
        assert!(err.to_string().contains("3/4 Waltz"));
    }

    #[test]
    fn test_custom_language_joins_random_pool() {
        let request = SongStyleRequest::new().with_custom_language("Balinese");
        let mut last = |n: usize| n - 1;
        let style = resolve_style(&request, &mut last);
        assert_eq!(style.get(CreativeCategory::Language), "Balinese");
    }

    #[test]
    fn test_custom_language_can_be_fixed() {
        let request = SongStyleRequest::new()
            .with_custom_language("  Balinese ")
            .with_custom_language("Balinese")
            .with_fixed(CreativeCategory::Language, "balinese")
            .unwrap();
        assert_eq!(request.custom_languages, vec!["Balinese".to_string()]);
        let style = resolve_style(&request, &mut first);
        assert_eq!(style.get(CreativeCategory::Language), "Balinese");
    }

    #[test]
    fn test_seeded_resolution_is_reproducible() {
        let request = SongStyleRequest::new();
        let a = resolve_style(&request, &mut RandomPicker::seeded(42));
        let b = resolve_style(&request, &mut RandomPicker::seeded(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_suno_prompt() {
        let style = resolve_style(&SongStyleRequest::new(), &mut first);
        assert_eq!(
            style.suno_prompt(),
            "[pop, happy] Create a love & romance song with simple & catchy melody and major key \
             harmony. Use full orchestra with 4/4 standard rhythm. lo-fi production style with \
             powerful belting vocals in Bahasa Indonesia. soft & gentle dynamics throughout."
        );
    }

    #[test]
    fn test_render_song_style() {
        let style = resolve_style(
            &SongStyleRequest::new().with_preferences("Club remix"),
            &mut first,
        );
        let text = render_song_style(&style);
        assert!(text.starts_with("🎵 **Generated Song Style**"));
        assert!(text.contains("**User Vision:** Club remix"));
        assert!(text.contains("• **Style/Genre:** Pop\n"));
        assert!(text.contains("• **Vocal Style:** Powerful Belting\n"));
        assert!(text.ends_with("enhances the overall sonic experience."));
    }

    #[test]
    fn test_category_parse() {
        assert_eq!(
            "Vocal-Style".parse::<CreativeCategory>().unwrap(),
            CreativeCategory::VocalStyle
        );
    }
}
