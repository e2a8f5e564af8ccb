//! The lyric block embedded in lyrics-mode prompts.

use super::fragments::{
    bridge_for, find_fragments, GENERIC_CHORUS, GENERIC_VERSE_1, GENERIC_VERSE_2,
};
use super::{choose, FragmentPicker, RandomPicker};

/// Build a six-section lyric for `(genre, theme)`, or the generic
/// four-section lyric when no fragments exist for the pair.
///
/// Both keys are matched case-insensitively. One verse and one chorus
/// are picked and then repeated; the bridge depends on the theme only.
pub fn select_lyrics(theme: &str, genre: &str, picker: &mut dyn FragmentPicker) -> String {
    let theme = theme.to_lowercase();
    let genre = genre.to_lowercase();

    let Some(set) = find_fragments(&genre, &theme) else {
        return generic_lyrics();
    };
    let (Some(verse), Some(chorus)) = (choose(set.verses, picker), choose(set.choruses, picker))
    else {
        return generic_lyrics();
    };

    render_sections(&[
        ("Verse 1", verse),
        ("Chorus", chorus),
        ("Verse 2", verse),
        ("Chorus", chorus),
        ("Bridge", bridge_for(&theme)),
        ("Chorus", chorus),
    ])
}

/// [`select_lyrics`] with a thread-local random picker.
pub fn select_lyrics_random(theme: &str, genre: &str) -> String {
    select_lyrics(theme, genre, &mut RandomPicker::new())
}

/// The fixed lyric used for unknown (genre, theme) pairs.
pub fn generic_lyrics() -> String {
    render_sections(&[
        ("Verse 1", GENERIC_VERSE_1),
        ("Chorus", GENERIC_CHORUS),
        ("Verse 2", GENERIC_VERSE_2),
        ("Chorus", GENERIC_CHORUS),
    ])
}

/// `[Name]\nbody` blocks separated by blank lines.
pub(crate) fn render_sections(sections: &[(&str, &str)]) -> String {
    sections
        .iter()
        .map(|(name, body)| format!("[{name}]\n{body}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first(_: usize) -> usize {
        0
    }

    fn section_names(lyrics: &str) -> Vec<&str> {
        lyrics
            .lines()
            .filter(|line| line.starts_with('[') && line.ends_with(']'))
            .collect()
    }

    #[test]
    fn test_known_pair_section_order() {
        let lyrics = select_lyrics("love", "pop", &mut first);
        assert_eq!(
            section_names(&lyrics),
            vec!["[Verse 1]", "[Chorus]", "[Verse 2]", "[Chorus]", "[Bridge]", "[Chorus]"]
        );
        assert!(lyrics.starts_with("[Verse 1]\nWalking down the street tonight"));
        assert!(lyrics.contains("[Bridge]\nWhen the world gets cold and dark"));
    }

    #[test]
    fn test_verse_and_chorus_repeat() {
        let mut second = |_: usize| 1;
        let lyrics = select_lyrics("motivation", "pop", &mut second);
        assert_eq!(lyrics.matches("Dreams are calling out your name").count(), 2);
        assert_eq!(lyrics.matches("Never give up, never fall").count(), 3);
        assert!(!lyrics.contains("Rise up from the ashes"));
    }

    #[test]
    fn test_keys_are_case_insensitive() {
        let lyrics = select_lyrics("Rebellion", "ROCK", &mut first);
        assert!(lyrics.contains("They try to hold us down"));
        assert!(lyrics.contains("[Bridge]\nWe won't be silenced anymore"));
    }

    #[test]
    fn test_unknown_pair_falls_back_to_generic() {
        let lyrics = select_lyrics("nonexistent-theme", "nonexistent-genre", &mut first);
        assert_eq!(lyrics, generic_lyrics());
        assert_eq!(
            section_names(&lyrics),
            vec!["[Verse 1]", "[Chorus]", "[Verse 2]", "[Chorus]"]
        );
    }

    #[test]
    fn test_known_theme_wrong_genre_is_generic() {
        assert_eq!(select_lyrics("love", "rock", &mut first), generic_lyrics());
    }

    #[test]
    fn test_empty_inputs_are_total() {
        assert_eq!(select_lyrics("", "", &mut first), generic_lyrics());
    }

    #[test]
    fn test_random_stays_within_candidates() {
        for _ in 0..20 {
            let lyrics = select_lyrics_random("love", "pop");
            assert!(
                lyrics.starts_with("[Verse 1]\nWalking down")
                    || lyrics.starts_with("[Verse 1]\nIn the silence")
            );
        }
    }

    #[test]
    fn test_generic_text() {
        let lyrics = generic_lyrics();
        assert!(lyrics.starts_with("[Verse 1]\nIn the moments when we shine"));
        assert!(lyrics.ends_with("We are more than what we dream"));
    }
}
