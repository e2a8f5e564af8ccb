//! End-to-end prompt scenarios across the assembler, the optimizer and the
//! history store.

use cantabile_core::model::{
    AdvancedSettings, Category, Duration, Language, ProductionStyle, SongLanguage,
    VocalCharacter, VocalGender,
};
use cantabile_core::text::MAX_PROMPT_CHARS;
use cantabile_core::{
    assemble, assemble_with, normalize, optimize_locally, select_lyrics, EnhanceOptions,
    HistoryFilter, HistoryStore, Mode, PromptHistoryRecord, PromptSelection,
};
use tempfile::TempDir;

fn minimal_full() -> PromptSelection {
    PromptSelection::new(Mode::Full)
        .with_genres(["Pop"])
        .with_tempo(120)
        .with_duration(Duration::TwoMinutes)
        .with_key("C Major")
        .with_vocals(VocalGender::Female, VocalCharacter::Smooth)
}

/// Full mode with every input at its default.
#[test]
fn test_full_mode_minimal() {
    let prompt = assemble(&minimal_full());
    assert!(prompt.starts_with(
        "[pop] Create a pop song at 120 BPM in C Major with smooth female vocals Duration: 2min."
    ));
}

#[test]
fn test_instrumental_with_two_instruments() {
    let selection = minimal_full()
        .with_mode(Mode::Instrumental)
        .with_instruments(["Piano", "Violin"]);
    let prompt = assemble(&selection);
    assert!(prompt.contains("featuring piano and violin"));
    assert!(!prompt.contains("smooth female"));
    assert!(prompt.ends_with("No vocals, focus on melody and harmony."));
}

#[test]
fn test_custom_mode_extends_full() {
    let selection = minimal_full()
        .with_structure(["Intro", "Verse", "Chorus", "Outro"])
        .with_advanced(AdvancedSettings {
            production_style: ProductionStyle::Vintage,
            language: SongLanguage::Spanish,
            ..AdvancedSettings::default()
        });
    let full = assemble(&selection);
    let custom = assemble(&selection.clone().with_mode(Mode::Custom));
    assert!(custom.starts_with(&full));
    assert!(custom.contains("Technical specifications: 120 BPM, C Major, 2min duration."));
    assert!(custom.contains("Production: Vintage style recording with professional mixing."));
    assert!(custom.contains("Arrangement follows Intro → Verse → Chorus → Outro structure."));
}

#[test]
fn test_lyrics_mode_embeds_selector_output() {
    let selection = minimal_full()
        .with_mode(Mode::Lyrics)
        .with_genres(["Rock"])
        .with_theme("rebellion");
    let mut first = |_: usize| 0;
    let prompt = assemble_with(&selection, &mut first);
    let lyrics = select_lyrics("rebellion", "rock", &mut |_: usize| 0);
    assert!(prompt.ends_with(&normalize(&lyrics)));
}

#[test]
fn test_lyric_fallback_is_total() {
    let lyrics = select_lyrics("nonexistent-theme", "nonexistent-genre", &mut |_: usize| 0);
    assert!(lyrics.starts_with("[Verse 1]\nIn the moments when we shine"));
    assert_eq!(lyrics.matches("[Chorus]").count(), 2);
    assert!(!lyrics.contains("[Bridge]"));
}

#[test]
fn test_assembled_prompt_optimizes_within_bound() {
    let selection = minimal_full()
        .with_genres(["Ambient", "Lo-fi"])
        .with_moods(["Calm", "Dreamy", "Peaceful"])
        .with_instruments(["Piano", "Synthesizer", "Strings", "Pads"])
        .with_structure(["Intro", "Verse", "Chorus", "Verse", "Chorus", "Bridge", "Outro"]);
    let prompt = assemble(&selection);
    let options = EnhanceOptions::new(Language::English, Category::Relaxation).advanced();
    let optimized = optimize_locally(&prompt, &options);

    assert!(optimized.chars().count() <= MAX_PROMPT_CHARS);
    assert!(optimized.starts_with("[ambient, lo-fi]"));
}

#[test]
fn test_generate_and_record_history() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    let selection = minimal_full().with_moods(["Happy"]);
    let prompt = assemble(&selection);

    let mut store = HistoryStore::open(&path).unwrap();
    store.add(
        PromptHistoryRecord::new(prompt.clone(), Language::English)
            .with_selection(&selection)
            .with_category(Category::General),
    );
    store.save().unwrap();

    let store = HistoryStore::open(&path).unwrap();
    let found: Vec<_> = store.search("pop", HistoryFilter::English).collect();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].prompt, prompt);
    assert_eq!(found[0].moods, vec!["Happy"]);
}
