//! Annotated lyric sheets in regional languages.
//!
//! A sheet is a twelve-section lyric with a details header and a
//! ready-to-paste generation prompt. Unknown (language, theme) pairs
//! fall back to Indonesian love lyrics slot by slot.

use serde::{Deserialize, Serialize};

pub const THEMES: &[&str] = &[
    "Sad",
    "Happy",
    "Love",
    "Friendship",
    "Heartbreak",
    "Comedy",
    "Fantasy",
    "Adventure",
    "Social Issues",
    "Spirit",
    "History",
    "Motivation",
    "Party",
    "Nostalgia",
];

pub const LYRIC_LANGUAGES: &[&str] = &[
    "Indonesian",
    "Sundanese",
    "Javanese",
    "Batak",
    "Minang",
    "Malaysian",
    "English",
    "Italian",
    "Spanish",
    "Mandarin",
];

pub const VOCAL_ARRANGEMENTS: &[&str] = &[
    "Solo",
    "Duet",
    "A Capella",
    "Harmony",
    "Call and Response",
    "Choir",
    "Rap Verse",
    "Spoken Word",
];

pub const VOICE_TYPES: &[&str] = &["Female", "Male", "Children", "Mixed"];

pub const VOICE_AGES: &[&str] = &[
    "5 years", "12 years", "15 years", "23 years", "30 years", "45 years", "60+ years",
];

pub const SHEET_GENRES: &[&str] = &[
    "Rock",
    "Hip Hop",
    "Remix",
    "Electronic EDM",
    "House Techno",
    "Jazz",
    "Blues",
    "Random",
    "Pop",
    "Dangdut",
    "Keroncong",
    "Reggae",
];

pub const SHEET_MOODS: &[&str] = &[
    "Joyful",
    "Reflective",
    "Angry",
    "Serene",
    "Melancholic",
    "Energetic",
    "Romantic",
    "Mysterious",
    "Uplifting",
    "Dramatic",
];

const SECTIONS: &[&str] = &[
    "Verse 1",
    "Pre-Chorus",
    "Chorus",
    "Guitar Solo",
    "Verse 2",
    "Pre-Chorus",
    "Chorus",
    "Bridge",
    "Pre-Chorus",
    "Chorus",
    "Outro",
    "End",
];

/// All slots of one (language, theme) entry.
#[derive(Debug, Clone, Copy)]
struct SheetFragments {
    language: &'static str,
    theme: &'static str,
    verse: &'static str,
    chorus: &'static str,
    pre_chorus: &'static str,
    bridge: &'static str,
    outro: &'static str,
}

const SHEETS: &[SheetFragments] = &[
    SheetFragments {
        language: "indonesian",
        theme: "love",
        verse: "Di bawah sinar rembulan malam\nKau datang membawa kedamaian\nHati yang dulu penuh luka\nKini berbunga karena cinta",
        chorus: "Kau adalah segalanya\nDalam hidup yang fana\nBersamamu aku kuat\nMenghadapi dunia",
        pre_chorus: "Dan aku tahu\nIni bukan mimpi\nKau nyata di sini\nBersamaku",
        bridge: "Ketika dunia terasa dingin dan gelap\nKau adalah api di hatiku\nTidak ada yang bisa memisahkan\nCinta yang kita miliki",
        outro: "Selamanya... selamanya...\nCinta kita abadi\nSelamanya... selamanya...",
    },
    SheetFragments {
        language: "indonesian",
        theme: "happy",
        verse: "Pagi cerah menyapa dunia\nSemangat baru mengalir deras\nTak ada yang bisa hentikan\nLangkah kaki menuju mimpi",
        chorus: "Hidup ini indah sekali\nJika kita mau bersyukur\nSetiap hari adalah anugerah\nYang patut kita rayakan",
        pre_chorus: "Rasakan semangat\nYang mengalir dalam jiwa\nHari ini milik kita\nUntuk bersinar",
        bridge: "Setiap rintangan yang menghadang\nHanya membuat kita lebih kuat\nBersama kita bisa melewati\nApapun yang terjadi",
        outro: "Terus bernyanyi... terus bersinar...\nHidup ini indah\nTerus bernyanyi...",
    },
    SheetFragments {
        language: "sundanese",
        theme: "love",
        verse: "Di handapeun cahaya bulan\nAnjeun datang mawa karapihan\nHaté nu tadina pinuh tatu\nAyeuna mekar ku asih",
        chorus: "Anjeun téh sagalana\nDina hirup nu fana\nBareng anjeun abdi kuat\nNyanghareupan dunya",
        pre_chorus: "Jeung abdi terang\nIeu lain impian\nAnjeun nyata di dieu\nBareng abdi",
        bridge: "Nalika dunya karasa tiis tur poék\nAnjeun téh seuneu di haté abdi\nTeu aya nu bisa misahkeun\nAsih nu urang gaduh",
        outro: "Salamina... salamina...\nAsih urang abadi\nSalamina... salamina...",
    },
];

/// Bridges, pre-choruses and outros exist for Sundanese happy songs even
/// though verses and choruses do not.
const SUNDANESE_HAPPY_EXTRAS: (&str, &str, &str) = (
    "Rarasakeun sumanget\nNu ngalir dina jiwa\nPoé ieu milik urang\nPikeun bersinar",
    "Unggal halangan nu ngahalangan\nNgan ngajadikeun urang leuwih kuat\nBareng urang bisa ngaliwatan\nNaon waé nu kajadian",
    "Terus nyanyi... terus bersinar...\nHirup ieu geulis\nTerus nyanyi...",
);

const DEFAULT_PREFERENCES: &str = "Creative exploration";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LyricSheetRequest {
    pub theme: String,
    pub lyric_language: String,
    pub genre: String,
    pub mood: String,
    pub vocal_arrangement: String,
    pub singer_voice_type: String,
    pub singer_voice_age: String,
    pub preferences: String,
}

impl Default for LyricSheetRequest {
    fn default() -> Self {
        Self {
            theme: "Love".to_string(),
            lyric_language: "Indonesian".to_string(),
            genre: "Pop".to_string(),
            mood: "Joyful".to_string(),
            vocal_arrangement: "Solo".to_string(),
            singer_voice_type: "Mixed".to_string(),
            singer_voice_age: "Adult".to_string(),
            preferences: String::new(),
        }
    }
}

impl LyricSheetRequest {
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.lyric_language = language.into();
        self
    }

    #[must_use]
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = genre.into();
        self
    }

    #[must_use]
    pub fn with_mood(mut self, mood: impl Into<String>) -> Self {
        self.mood = mood.into();
        self
    }

    #[must_use]
    pub fn with_vocals(
        mut self,
        arrangement: impl Into<String>,
        voice_type: impl Into<String>,
        voice_age: impl Into<String>,
    ) -> Self {
        self.vocal_arrangement = arrangement.into();
        self.singer_voice_type = voice_type.into();
        self.singer_voice_age = voice_age.into();
        self
    }

    #[must_use]
    pub fn with_preferences(mut self, preferences: impl Into<String>) -> Self {
        self.preferences = preferences.into();
        self
    }

    /// The one-line generation prompt that accompanies the sheet.
    pub fn suno_prompt(&self) -> String {
        format!(
            "[{}, {}] Create a {} {} song with {} {} vocals. Use the provided lyrics with {} style production.",
            self.genre.to_lowercase(),
            self.lyric_language.to_lowercase(),
            self.mood.to_lowercase(),
            self.theme.to_lowercase(),
            self.vocal_arrangement.to_lowercase(),
            self.singer_voice_type.to_lowercase(),
            self.genre.to_lowercase(),
        )
    }
}

fn lookup(language: &str, theme: &str) -> Option<&'static SheetFragments> {
    SHEETS
        .iter()
        .find(|s| s.language == language && s.theme == theme)
}

fn fallback() -> &'static SheetFragments {
    &SHEETS[0]
}

/// Resolve each slot for (language, theme), falling back per slot.
fn section_body(section: &str, language: &str, theme: &str) -> &'static str {
    let exact = lookup(language, theme);
    let base = exact.unwrap_or_else(fallback);
    let sundanese_happy = language == "sundanese" && theme == "happy";
    match section {
        "Verse 1" | "Verse 2" => base.verse,
        "Chorus" => base.chorus,
        "Guitar Solo" => "(Instrumental Solo)",
        "Pre-Chorus" if sundanese_happy => SUNDANESE_HAPPY_EXTRAS.0,
        "Pre-Chorus" => base.pre_chorus,
        "Bridge" if sundanese_happy => SUNDANESE_HAPPY_EXTRAS.1,
        "Bridge" => base.bridge,
        "Outro" if sundanese_happy => SUNDANESE_HAPPY_EXTRAS.2,
        "Outro" => base.outro,
        _ => "",
    }
}

/// The twelve-section lyric body.
pub fn render_lyric_body(language: &str, theme: &str) -> String {
    let language = language.to_lowercase();
    let theme = theme.to_lowercase();
    let mut lyrics = String::new();
    for section in SECTIONS {
        let body = section_body(section, &language, &theme);
        if body.is_empty() {
            lyrics.push_str(&format!("[{section}]\n\n"));
        } else {
            lyrics.push_str(&format!("[{section}]\n{body}\n\n"));
        }
    }
    lyrics
}

/// The full sheet: details header, lyrics and generation prompt.
pub fn render_lyric_sheet(request: &LyricSheetRequest) -> String {
    let preferences = if request.preferences.trim().is_empty() {
        DEFAULT_PREFERENCES
    } else {
        request.preferences.trim()
    };

    let sheet = format!(
        "**Generated Lyrics**\n\n\
         **User Preferences:** {preferences}\n\n\
         **Song Details:**\n\
         • **Theme:** {}\n\
         • **Language:** {}\n\
         • **Genre:** {}\n\
         • **Mood:** {}\n\
         • **Vocal Arrangement:** {}\n\
         • **Singer Type:** {}\n\
         • **Singer Age:** {}\n\n\
         **Lyrics:**\n\n\
         {}\n\n\
         **Suno AI Prompt:**\n\
         {}",
        request.theme,
        request.lyric_language,
        request.genre,
        request.mood,
        request.vocal_arrangement,
        request.singer_voice_type,
        request.singer_voice_age,
        render_lyric_body(&request.lyric_language, &request.theme),
        request.suno_prompt(),
    );
    sheet.trim().to_string()
}
