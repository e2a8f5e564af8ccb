//! Pre-authored lyric fragments, keyed by genre and theme.

/// Verse and chorus candidates for one (genre, theme) pair.
#[derive(Debug, Clone, Copy)]
pub struct FragmentSet {
    pub genre: &'static str,
    pub theme: &'static str,
    pub verses: &'static [&'static str],
    pub choruses: &'static [&'static str],
}

/// Theme used when no bridge exists for the requested one.
pub const FALLBACK_THEME: &str = "love";

pub const FRAGMENTS: &[FragmentSet] = &[
    FragmentSet {
        genre: "pop",
        theme: "love",
        verses: &[
            "Walking down the street tonight\nYour memory burning bright\nEvery step reminds me of you\nWishing all my dreams come true",
            "In the silence of my room\nI can feel you through the gloom\nPromises we used to make\nEvery breath for your sake",
        ],
        choruses: &[
            "You're the light that guides me home\nNever have to be alone\nIn your arms I feel so free\nYou're my perfect melody",
            "Take my hand and hold me tight\nEverything will be alright\nThis is love, this is true\nAll I need is me and you",
        ],
    },
    FragmentSet {
        genre: "pop",
        theme: "motivation",
        verses: &[
            "Rise up from the ashes now\nFind your strength, remember how\nEvery fall can make you strong\nThis is where you belong",
            "Dreams are calling out your name\nNothing left will be the same\nStep into the light today\nYou will find your way",
        ],
        choruses: &[
            "You can fly above the clouds\nBreak away from all the crowds\nThis is your moment to shine\nVictory is yours by design",
            "Never give up, never fall\nYou can conquer it all\nBelieve in yourself today\nYou will find your way",
        ],
    },
    FragmentSet {
        genre: "rock",
        theme: "rebellion",
        verses: &[
            "They try to hold us down\nBut we won't make a sound\nBreak the chains, ignite the fire\nWe are everything they fear",
            "Standing on the edge of time\nEvery reason, every rhyme\nWe won't bow, we won't bend\nThis fight will never end",
        ],
        choruses: &[
            "We are the thunder in the night\nWe are the flame that burns so bright\nRebel hearts will never die\nWe will touch the sky",
            "Break the walls, feel the power\nThis is our finest hour\nWe won't back down, we won't fall\nWe will conquer all",
        ],
    },
];

/// Bridges are indexed by theme alone.
pub const BRIDGES: &[(&str, &str)] = &[
    (
        "love",
        "When the world gets cold and dark\nYou're the fire in my heart\nNothing else can tear apart\nThis love we have, this perfect start",
    ),
    (
        "motivation",
        "Every mountain that you climb\nEvery dream that takes its time\nYou're stronger than you know inside\nLet your spirit be your guide",
    ),
    (
        "rebellion",
        "We won't be silenced anymore\nThis is what we're fighting for\nFreedom calls from every door\nWe are the ones they can't ignore",
    ),
];

pub const GENERIC_VERSE_1: &str = "In the moments when we shine\nEverything falls into line\nThis is our moment, this is our time\nTo make everything align";

pub const GENERIC_CHORUS: &str = "We are more than what we seem\nLiving out our wildest dream\nNothing's quite the way it seems\nWe are more than what we dream";

pub const GENERIC_VERSE_2: &str = "Through the darkness and the light\nWe will make everything right\nThis is our moment to ignite\nThe fire burning deep inside";

/// Exact, case-sensitive lookup. Callers lowercase their keys.
pub fn find_fragments(genre: &str, theme: &str) -> Option<&'static FragmentSet> {
    FRAGMENTS
        .iter()
        .find(|set| set.genre == genre && set.theme == theme)
}

/// The bridge for `theme`, or the love bridge.
pub fn bridge_for(theme: &str) -> &'static str {
    BRIDGES
        .iter()
        .find(|(name, _)| *name == theme)
        .or_else(|| BRIDGES.iter().find(|(name, _)| *name == FALLBACK_THEME))
        .map(|(_, text)| *text)
        .unwrap_or_default()
}

/// The (genre, theme) pairs that have authored fragments.
pub fn known_pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    FRAGMENTS.iter().map(|set| (set.genre, set.theme))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_set_has_candidates() {
        for set in FRAGMENTS {
            assert!(!set.verses.is_empty(), "{}/{}", set.genre, set.theme);
            assert!(!set.choruses.is_empty(), "{}/{}", set.genre, set.theme);
        }
    }

    #[test]
    fn test_find_fragments_is_exact() {
        assert!(find_fragments("pop", "love").is_some());
        assert!(find_fragments("Pop", "love").is_none());
        assert!(find_fragments("rock", "love").is_none());
    }

    #[test]
    fn test_bridge_fallback() {
        assert!(bridge_for("rebellion").starts_with("We won't be silenced"));
        assert_eq!(bridge_for("heartbreak"), bridge_for("love"));
    }

    #[test]
    fn test_known_pairs() {
        let pairs: Vec<_> = known_pairs().collect();
        assert_eq!(pairs.len(), 3);
        assert!(pairs.contains(&("rock", "rebellion")));
    }
}
