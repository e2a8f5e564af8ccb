/// Section names offered by the structure builder.
pub const SECTIONS: &[&str] = &[
    "Intro", "Verse", "Chorus", "Bridge", "Solo", "Outro", "Pre-Chorus", "Post-Chorus",
];

/// The structure a new selection starts from in the generator.
pub const DEFAULT_STRUCTURE: &[&str] = &[
    "Intro", "Verse", "Chorus", "Verse", "Chorus", "Bridge", "Chorus", "Outro",
];

#[must_use]
pub fn find_section(name: &str) -> Option<&'static str> {
    SECTIONS
        .iter()
        .copied()
        .find(|s| s.eq_ignore_ascii_case(name.trim()))
}

/// Move the section at `from` to position `to`, as a drag in the
/// structure builder does. Out-of-range indices leave the list unchanged.
pub fn move_section(structure: &mut Vec<String>, from: usize, to: usize) {
    if from >= structure.len() || to >= structure.len() {
        return;
    }
    let section = structure.remove(from);
    structure.insert(to, section);
}
