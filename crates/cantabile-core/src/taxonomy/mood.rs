/// A named cluster of related moods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodGroup {
    pub name: &'static str,
    pub moods: &'static [&'static str],
}

pub const MOOD_GROUPS: &[MoodGroup] = &[
    MoodGroup {
        name: "energetic",
        moods: &["Upbeat", "Energetic", "Powerful", "Motivational", "Happy", "Cheerful"],
    },
    MoodGroup {
        name: "calm",
        moods: &["Peaceful", "Soft", "Meditative", "Relaxing", "Dreamy", "Calm"],
    },
    MoodGroup {
        name: "emotional",
        moods: &["Romantic", "Heartfelt", "Melancholic", "Sad", "Nostalgic", "Emotional"],
    },
    MoodGroup {
        name: "dramatic",
        moods: &["Epic", "Cinematic", "Dark", "Mysterious", "Intense", "Dramatic"],
    },
    MoodGroup {
        name: "professional",
        moods: &["Inspiring", "Professional", "Confident", "Uplifting", "Focused", "Optimistic"],
    },
];

pub fn all_moods() -> impl Iterator<Item = &'static str> {
    MOOD_GROUPS.iter().flat_map(|g| g.moods.iter().copied())
}

#[must_use]
pub fn find_mood(name: &str) -> Option<&'static str> {
    all_moods().find(|m| m.eq_ignore_ascii_case(name.trim()))
}
