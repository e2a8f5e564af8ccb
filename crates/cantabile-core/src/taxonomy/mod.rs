//! Catalogs of genres, instruments, moods, keys and song sections.
//!
//! The assembler accepts any strings; these catalogs are what the CLI
//! offers and what [`validate_selection`] checks user input against.

pub mod genre;
pub mod instrumentation;
pub mod key;
pub mod mood;
pub mod structure;

pub use genre::{all_genres, find_genre, GenreGroup, GENRE_GROUPS};
pub use instrumentation::{all_instruments, find_instrument, InstrumentFamily, INSTRUMENT_FAMILIES};
pub use key::{find_effect, find_key, tempo_label, EFFECTS, KEY_SIGNATURES};
pub use mood::{all_moods, find_mood, MoodGroup, MOOD_GROUPS};
pub use structure::{find_section, move_section, DEFAULT_STRUCTURE, SECTIONS};

use crate::error::{Error, Result};
use crate::model::PromptSelection;

/// Check every catalog-backed field of a selection.
///
/// All unknown values are reported together. Tempo must be positive.
pub fn validate_selection(selection: &PromptSelection) -> Result<()> {
    let mut problems = Vec::new();

    if selection.tempo == 0 {
        problems.push("tempo must be a positive number of BPM".to_string());
    }

    collect_unknown(&mut problems, "genre", &selection.genres, find_genre);
    collect_unknown(&mut problems, "mood", &selection.moods, find_mood);
    collect_unknown(&mut problems, "instrument", &selection.instruments, find_instrument);
    collect_unknown(&mut problems, "section", &selection.song_structure, find_section);
    collect_unknown(&mut problems, "effect", &selection.advanced.effects, find_effect);

    if find_key(&selection.key_signature).is_none() {
        problems.push(format!("unknown key '{}'", selection.key_signature));
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidSelection(problems.join("; ")))
    }
}

fn collect_unknown(
    problems: &mut Vec<String>,
    kind: &str,
    values: &[String],
    find: fn(&str) -> Option<&'static str>,
) {
    for value in values {
        if find(value).is_none() {
            problems.push(format!("unknown {kind} '{value}'"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Mode;

    #[test]
    fn test_default_selection_is_valid() {
        assert!(validate_selection(&PromptSelection::default()).is_ok());
    }

    #[test]
    fn test_catalog_values_are_valid() {
        let selection = PromptSelection::new(Mode::Full)
            .with_genres(["pop", "Lo-fi"])
            .with_moods(["Dreamy"])
            .with_instruments(["Piano", "Gamelan"])
            .with_structure(DEFAULT_STRUCTURE.iter().copied())
            .with_key("e minor");
        assert!(validate_selection(&selection).is_ok());
    }

    #[test]
    fn test_unknown_values_are_reported_together() {
        let selection = PromptSelection::default()
            .with_genres(["Polka"])
            .with_instruments(["Kazoo"])
            .with_tempo(0)
            .with_key("Z Major");

        let err = validate_selection(&selection).unwrap_err().to_string();
        assert!(err.contains("unknown genre 'Polka'"));
        assert!(err.contains("unknown instrument 'Kazoo'"));
        assert!(err.contains("unknown key 'Z Major'"));
        assert!(err.contains("tempo must be a positive"));
    }
}
