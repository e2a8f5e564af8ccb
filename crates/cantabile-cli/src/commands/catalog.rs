use cantabile_core::lyrics::fragments::known_pairs;
use cantabile_core::lyrics::sheet::THEMES;
use cantabile_core::taxonomy::{
    DEFAULT_STRUCTURE, EFFECTS, GENRE_GROUPS, INSTRUMENT_FAMILIES, KEY_SIGNATURES, MOOD_GROUPS,
    SECTIONS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CatalogKind {
    Genres,
    Instruments,
    Moods,
    Keys,
    Sections,
    Effects,
    Themes,
}

pub fn show_catalog(kind: CatalogKind) {
    match kind {
        CatalogKind::Genres => {
            for group in GENRE_GROUPS {
                print_group(group.name, group.genres);
            }
        }
        CatalogKind::Instruments => {
            for family in INSTRUMENT_FAMILIES {
                print_group(family.name, family.instruments);
            }
        }
        CatalogKind::Moods => {
            for group in MOOD_GROUPS {
                print_group(group.name, group.moods);
            }
        }
        CatalogKind::Keys => {
            print_group("keys", KEY_SIGNATURES);
            println!("Tempo bands: Slow (<80), Medium (<120), Fast (<150), Very Fast");
        }
        CatalogKind::Sections => {
            print_group("sections", SECTIONS);
            println!("Default structure: {}", DEFAULT_STRUCTURE.join(" → "));
        }
        CatalogKind::Effects => print_group("effects", EFFECTS),
        CatalogKind::Themes => {
            print_group("lyric sheet themes", THEMES);
            println!("Lyric fragments (genre / theme):");
            for (genre, theme) in known_pairs() {
                println!("  {genre} / {theme}");
            }
        }
    }
}

fn print_group(name: &str, values: &[&str]) {
    println!("{name}:");
    for value in values {
        println!("  {value}");
    }
    println!();
}
