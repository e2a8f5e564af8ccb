use serde::{Deserialize, Serialize};

use crate::model::vocab::{
    Duration, Mode, ProductionStyle, SongLanguage, VocalCharacter, VocalGender,
};

/// Who sings and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VocalStyle {
    pub gender: VocalGender,
    pub character: VocalCharacter,
}

impl VocalStyle {
    #[must_use]
    pub const fn new(gender: VocalGender, character: VocalCharacter) -> Self {
        Self { gender, character }
    }

    /// `true` when the selection asks for no vocals at all.
    #[must_use]
    pub fn is_instrumental(&self) -> bool {
        self.gender == VocalGender::Instrumental
    }
}

/// Optional production details. Default values emit no clause.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvancedSettings {
    /// Free-text reference ("in the style of ...").
    pub style_reference: String,
    pub production_style: ProductionStyle,
    pub language: SongLanguage,
    pub effects: Vec<String>,
}

/// Everything the assembler needs to build a prompt.
///
/// Genres, moods and instruments keep the caller's order and are not
/// deduplicated here. An empty song structure simply drops the structure
/// clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptSelection {
    pub mode: Mode,
    pub genres: Vec<String>,
    pub moods: Vec<String>,
    pub instruments: Vec<String>,
    /// Beats per minute.
    pub tempo: u32,
    pub duration: Duration,
    pub key_signature: String,
    pub vocal_style: VocalStyle,
    pub song_structure: Vec<String>,
    pub advanced: AdvancedSettings,
    /// Lyric theme key, used by [`Mode::Lyrics`].
    pub theme: Option<String>,
}

impl Default for PromptSelection {
    fn default() -> Self {
        Self {
            mode: Mode::Full,
            genres: Vec::new(),
            moods: Vec::new(),
            instruments: Vec::new(),
            tempo: 120,
            duration: Duration::TwoMinutes,
            key_signature: String::from("C Major"),
            vocal_style: VocalStyle::default(),
            song_structure: Vec::new(),
            advanced: AdvancedSettings::default(),
            theme: None,
        }
    }
}

impl PromptSelection {
    #[must_use]
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.genres = genres.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_moods<I, S>(mut self, moods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.moods = moods.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_instruments<I, S>(mut self, instruments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.instruments = instruments.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_tempo(mut self, tempo: u32) -> Self {
        self.tempo = tempo;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key_signature = key.into();
        self
    }

    #[must_use]
    pub fn with_vocals(mut self, gender: VocalGender, character: VocalCharacter) -> Self {
        self.vocal_style = VocalStyle::new(gender, character);
        self
    }

    #[must_use]
    pub fn with_structure<I, S>(mut self, sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.song_structure = sections.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_advanced(mut self, advanced: AdvancedSettings) -> Self {
        self.advanced = advanced;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = Some(theme.into());
        self
    }
}
