//! Keys, tempo bands and effects.

/// The musical keys offered by the key picker.
pub const KEY_SIGNATURES: &[&str] = &[
    "C Major", "D Major", "E Major", "F Major", "G Major", "A Major", "B Major",
    "C Minor", "D Minor", "E Minor", "F Minor", "G Minor", "A Minor", "B Minor",
];

/// Audio effects that can be requested in advanced settings.
pub const EFFECTS: &[&str] = &["Auto-tune", "Distortion", "Echo", "Chorus", "Reverb", "Compression"];

#[must_use]
pub fn find_key(name: &str) -> Option<&'static str> {
    KEY_SIGNATURES
        .iter()
        .copied()
        .find(|k| k.eq_ignore_ascii_case(name.trim()))
}

#[must_use]
pub fn find_effect(name: &str) -> Option<&'static str> {
    EFFECTS
        .iter()
        .copied()
        .find(|e| e.eq_ignore_ascii_case(name.trim()))
}

/// Human label for a tempo: Slow, Medium, Fast or Very Fast.
#[must_use]
pub fn tempo_label(bpm: u32) -> &'static str {
    match bpm {
        0..=79 => "Slow",
        80..=119 => "Medium",
        120..=149 => "Fast",
        _ => "Very Fast",
    }
}
