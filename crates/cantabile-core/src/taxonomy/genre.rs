/// A named group of genres, as presented in pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreGroup {
    pub name: &'static str,
    pub genres: &'static [&'static str],
}

/// The genre catalog.
pub const GENRE_GROUPS: &[GenreGroup] = &[
    GenreGroup {
        name: "popular",
        genres: &["Pop", "Rock", "Jazz", "Blues", "Country", "Folk"],
    },
    GenreGroup {
        name: "electronic",
        genres: &["EDM", "House", "Techno", "Ambient", "Lo-fi", "Dubstep"],
    },
    GenreGroup {
        name: "urban",
        genres: &["Hip-Hop", "R&B", "Funk", "Rap", "Trap", "Soul"],
    },
    GenreGroup {
        name: "world",
        genres: &["Classical", "Orchestra", "Indonesian", "Dangdut", "World Music", "Latin"],
    },
    GenreGroup {
        name: "alternative",
        genres: &["Indie", "Experimental", "Punk", "Grunge", "Alternative Rock", "Post-Rock"],
    },
];

/// Every catalog genre, group by group.
pub fn all_genres() -> impl Iterator<Item = &'static str> {
    GENRE_GROUPS.iter().flat_map(|g| g.genres.iter().copied())
}

/// Look up the catalog spelling of a genre (case-insensitive).
#[must_use]
pub fn find_genre(name: &str) -> Option<&'static str> {
    all_genres().find(|g| g.eq_ignore_ascii_case(name.trim()))
}
