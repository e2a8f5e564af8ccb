use cantabile_core::{render_lyric_sheet, LyricSheetRequest};

#[derive(Debug, Clone, clap::Args)]
pub struct LyricsArgs {
    #[arg(long, default_value = "Love")]
    pub theme: String,

    /// Lyric language, e.g. Indonesian or Sundanese
    #[arg(long, default_value = "Indonesian")]
    pub language: String,

    #[arg(long, default_value = "Pop")]
    pub genre: String,

    #[arg(long, default_value = "Joyful")]
    pub mood: String,

    /// Solo, Duet, Harmony, Choir, ...
    #[arg(long, default_value = "Solo")]
    pub arrangement: String,

    /// Female, Male, Children or Mixed
    #[arg(long, default_value = "Mixed")]
    pub voice_type: String,

    #[arg(long, default_value = "Adult")]
    pub voice_age: String,

    /// Free-text notes shown in the sheet header
    #[arg(long, default_value = "")]
    pub preferences: String,
}

impl LyricsArgs {
    pub fn to_request(&self) -> LyricSheetRequest {
        LyricSheetRequest::default()
            .with_theme(&self.theme)
            .with_language(&self.language)
            .with_genre(&self.genre)
            .with_mood(&self.mood)
            .with_vocals(&self.arrangement, &self.voice_type, &self.voice_age)
            .with_preferences(&self.preferences)
    }
}

pub fn run_lyrics(args: &LyricsArgs) {
    println!("{}", render_lyric_sheet(&args.to_request()));
}
