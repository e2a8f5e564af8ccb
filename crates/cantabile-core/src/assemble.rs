//! Prompt assembly from a [`PromptSelection`].
//!
//! Each [`Mode`] has its own clause grammar. Clauses are appended in a
//! fixed order and dropped when their input is empty or at its default
//! value. Every result goes through [`normalize`] before it is returned.
//!
//! Only lyrics mode draws on randomness; the other modes are pure.

use crate::lyrics::{select_lyrics, FragmentPicker, RandomPicker};
use crate::model::{Mode, ProductionStyle, PromptSelection, SongLanguage};
use crate::text::normalize;

const NO_VOCALS: &str = "No vocals, focus on melody and harmony.";
const DEFAULT_THEME: &str = "love";
const DEFAULT_GENRE: &str = "pop";

/// Assemble a prompt, picking lyric fragments at random.
pub fn assemble(selection: &PromptSelection) -> String {
    assemble_with(selection, &mut RandomPicker::new())
}

/// Assemble a prompt with an explicit lyric fragment picker.
pub fn assemble_with(selection: &PromptSelection, picker: &mut dyn FragmentPicker) -> String {
    let raw = match selection.mode {
        Mode::Full => full(selection),
        Mode::Instrumental => instrumental(selection),
        Mode::Lyrics => lyrics(selection, picker),
        Mode::Custom => custom(selection),
    };
    normalize(&raw)
}

fn lowered(items: &[String], sep: &str) -> String {
    items.join(sep).to_lowercase()
}

/// `a`, `a and b`, or `a, b and c`.
fn fusion_list(items: &[String]) -> String {
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_lowercase(),
        Some((last, rest)) => format!("{} and {}", lowered(rest, ", "), last.to_lowercase()),
    }
}

/// Like [`fusion_list`] but with a serial comma past two items.
fn serial_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_lowercase(),
        [first, second] => format!("{} and {}", first.to_lowercase(), second.to_lowercase()),
        [rest @ .., last] => format!("{}, and {}", lowered(rest, ", "), last.to_lowercase()),
    }
}

fn genre_tags(selection: &PromptSelection) -> String {
    lowered(&selection.genres, ", ")
}

/// Clauses shared by full and instrumental mode, after the opening.
fn body_clauses(prompt: &mut String, selection: &PromptSelection, with_vocals: bool) {
    prompt.push_str(&format!(
        "at {} BPM in {} ",
        selection.tempo, selection.key_signature
    ));

    if !selection.instruments.is_empty() {
        prompt.push_str(&format!("featuring {} ", serial_list(&selection.instruments)));
    }

    let vocals = &selection.vocal_style;
    if with_vocals && !vocals.is_instrumental() {
        prompt.push_str(&format!(
            "with {} {} vocals ",
            vocals.character.as_str().to_lowercase(),
            vocals.gender.as_str().to_lowercase()
        ));
    }

    if !selection.moods.is_empty() {
        prompt.push_str(&format!(
            "The mood should be {} ",
            lowered(&selection.moods, " and ")
        ));
    }

    prompt.push_str(&format!("Duration: {}. ", selection.duration));

    if !selection.song_structure.is_empty() {
        prompt.push_str(&format!(
            "Structure: {}. ",
            selection.song_structure.join("-")
        ));
    }

    advanced_clauses(prompt, selection);
}

fn advanced_clauses(prompt: &mut String, selection: &PromptSelection) {
    let advanced = &selection.advanced;
    let reference = advanced.style_reference.trim();
    if !reference.is_empty() {
        prompt.push_str(&format!("Style similar to {reference}. "));
    }
    if advanced.production_style != ProductionStyle::Modern {
        prompt.push_str(&format!(
            "Production style: {}. ",
            advanced.production_style.as_str().to_lowercase()
        ));
    }
    if advanced.language != SongLanguage::English {
        prompt.push_str(&format!("Language: {}. ", advanced.language));
    }
    if !advanced.effects.is_empty() {
        prompt.push_str(&format!(
            "Audio effects: {}. ",
            lowered(&advanced.effects, ", ")
        ));
    }
}

fn full(selection: &PromptSelection) -> String {
    let mut prompt = String::new();
    if !selection.genres.is_empty() {
        prompt.push_str(&format!("[{}] ", genre_tags(selection)));
    }
    prompt.push_str("Create ");
    match selection.genres.len() {
        0 => prompt.push_str("a song "),
        1 => prompt.push_str(&format!("a {} song ", fusion_list(&selection.genres))),
        _ => prompt.push_str(&format!("a {} fusion song ", fusion_list(&selection.genres))),
    }
    body_clauses(&mut prompt, selection, true);
    prompt.trim().to_string()
}

fn instrumental(selection: &PromptSelection) -> String {
    let mut prompt = if selection.genres.is_empty() {
        String::from("[instrumental] Create ")
    } else {
        format!("[{}, instrumental] Create ", genre_tags(selection))
    };
    match selection.genres.len() {
        0 => prompt.push_str("an instrumental track "),
        1 => prompt.push_str(&format!(
            "an instrumental {} track ",
            fusion_list(&selection.genres)
        )),
        _ => prompt.push_str(&format!(
            "an instrumental {} fusion track ",
            fusion_list(&selection.genres)
        )),
    }
    body_clauses(&mut prompt, selection, false);
    prompt.push_str(NO_VOCALS);
    prompt
}

fn lyrics(selection: &PromptSelection, picker: &mut dyn FragmentPicker) -> String {
    let genre = selection
        .genres
        .first()
        .map(|g| g.to_lowercase())
        .unwrap_or_else(|| DEFAULT_GENRE.to_string());
    let theme = selection.theme.as_deref().unwrap_or(DEFAULT_THEME);

    let mut prompt = String::new();
    if !selection.genres.is_empty() {
        prompt.push_str(&format!("[{}] ", genre_tags(selection)));
    }
    prompt.push_str(&format!("Create a {genre} song "));

    let vocals = &selection.vocal_style;
    if !vocals.is_instrumental() {
        prompt.push_str(&format!(
            "with {} {} vocals ",
            vocals.character.as_str().to_lowercase(),
            vocals.gender.as_str().to_lowercase()
        ));
    }
    prompt.push_str(&format!("at {} BPM. ", selection.tempo));

    if !selection.moods.is_empty() {
        prompt.push_str(&format!("Mood: {}. ", lowered(&selection.moods, " and ")));
    }
    if !selection.instruments.is_empty() {
        prompt.push_str(&format!(
            "Instruments: {}. ",
            lowered(&selection.instruments, ", ")
        ));
    }

    prompt.push_str("\n\nLyrics:\n");
    prompt.push_str(&select_lyrics(theme, &genre, picker));

    let reference = selection.advanced.style_reference.trim();
    if !reference.is_empty() {
        prompt.push_str(&format!("\n\nStyle similar to {reference}."));
    }
    prompt.trim().to_string()
}

fn custom(selection: &PromptSelection) -> String {
    let mut prompt = full(selection);
    prompt.push_str(&format!(
        " Technical specifications: {} BPM, {}, {} duration.",
        selection.tempo, selection.key_signature, selection.duration
    ));
    prompt.push_str(&format!(
        " Production: {} style recording with professional mixing.",
        selection.advanced.production_style
    ));
    if !selection.song_structure.is_empty() {
        prompt.push_str(&format!(
            " Arrangement follows {} structure.",
            selection.song_structure.join(" → ")
        ));
    }
    prompt
}
