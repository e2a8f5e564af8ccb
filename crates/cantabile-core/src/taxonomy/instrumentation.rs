/// A named family of instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstrumentFamily {
    pub name: &'static str,
    pub instruments: &'static [&'static str],
}

/// The instrument catalog. "Synthesizer" appears in two families, as in
/// the pickers; lookups return the first match.
pub const INSTRUMENT_FAMILIES: &[InstrumentFamily] = &[
    InstrumentFamily {
        name: "strings",
        instruments: &["Acoustic Guitar", "Electric Guitar", "Bass Guitar", "Violin", "Cello", "Double Bass"],
    },
    InstrumentFamily {
        name: "percussion",
        instruments: &["Drums", "Electronic Beats", "Percussion", "Timpani", "Congas", "Tambourine"],
    },
    InstrumentFamily {
        name: "keys",
        instruments: &["Piano", "Electric Piano", "Organ", "Synthesizer", "Keyboard", "Harpsichord"],
    },
    InstrumentFamily {
        name: "brass",
        instruments: &["Trumpet", "Saxophone", "Trombone", "French Horn", "Tuba", "Flugelhorn"],
    },
    InstrumentFamily {
        name: "woodwinds",
        instruments: &["Flute", "Clarinet", "Oboe", "Bassoon", "Piccolo", "Recorder"],
    },
    InstrumentFamily {
        name: "electronic",
        instruments: &["Synthesizer", "Drum Machine", "Sampler", "Vocoder", "Theremin", "Electric Keyboard"],
    },
    InstrumentFamily {
        name: "traditional",
        instruments: &["Gamelan", "Sitar", "Didgeridoo", "Koto", "Bagpipes", "Banjo"],
    },
];

pub fn all_instruments() -> impl Iterator<Item = &'static str> {
    INSTRUMENT_FAMILIES
        .iter()
        .flat_map(|f| f.instruments.iter().copied())
}

#[must_use]
pub fn find_instrument(name: &str) -> Option<&'static str> {
    all_instruments().find(|i| i.eq_ignore_ascii_case(name.trim()))
}
