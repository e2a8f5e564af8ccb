//! Closed vocabularies for prompt selections.
//!
//! Every enum here has a fixed set of user-facing labels. Parsing is
//! case-insensitive and reports the valid labels on failure, so the CLI
//! can reject bad input at the boundary.

macro_rules! closed_vocab {
    ($name:ident, $what:expr, $doc:expr, { $($variant:ident => $label:expr),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every value, in catalog order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// All labels, in catalog order.
            #[must_use]
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        $crate::error::Error::InvalidSelection(format!(
                            "unknown {} '{}' (expected one of: {})",
                            $what,
                            s,
                            Self::labels().join(", ")
                        ))
                    })
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let raw = <String as ::serde::Deserialize>::deserialize(deserializer)?;
                raw.parse().map_err(<D::Error as ::serde::de::Error>::custom)
            }
        }
    };
}

pub(crate) use closed_vocab;

closed_vocab!(Mode, "mode", "A prompt-construction strategy.", {
    Full => "full",
    Instrumental => "instrumental",
    Lyrics => "lyrics",
    Custom => "custom",
});

closed_vocab!(VocalGender, "vocal gender", "Who sings, or `Instrumental` for no vocals.", {
    Male => "Male",
    Female => "Female",
    Duet => "Duet",
    Choir => "Choir",
    Instrumental => "Instrumental",
});

closed_vocab!(VocalCharacter, "vocal character", "The timbre of the vocal performance.", {
    Smooth => "Smooth",
    Raw => "Raw",
    Powerful => "Powerful",
    Soft => "Soft",
    AutoTuned => "Auto-tuned",
});

closed_vocab!(ProductionStyle, "production style", "Overall production treatment.", {
    Vintage => "Vintage",
    Modern => "Modern",
    LoFi => "Lo-fi",
    HiFi => "Hi-fi",
    Raw => "Raw",
    Polished => "Polished",
});

closed_vocab!(SongLanguage, "song language", "Language the song is sung in.", {
    English => "English",
    Indonesian => "Indonesian",
    Spanish => "Spanish",
    French => "French",
    Mixed => "Mixed",
});

closed_vocab!(Duration, "duration", "Target track length.", {
    ThirtySeconds => "30s",
    OneMinute => "1min",
    TwoMinutes => "2min",
    ThreeMinutes => "3min",
    FourMinutes => "4min",
});

impl Default for Mode {
    fn default() -> Self {
        Self::Full
    }
}

impl Default for VocalGender {
    fn default() -> Self {
        Self::Female
    }
}

impl Default for VocalCharacter {
    fn default() -> Self {
        Self::Smooth
    }
}

impl Default for ProductionStyle {
    fn default() -> Self {
        Self::Modern
    }
}

impl Default for SongLanguage {
    fn default() -> Self {
        Self::English
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::TwoMinutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("INSTRUMENTAL".parse::<Mode>().unwrap(), Mode::Instrumental);
        assert_eq!("auto-tuned".parse::<VocalCharacter>().unwrap(), VocalCharacter::AutoTuned);
        assert_eq!(" lo-fi ".parse::<ProductionStyle>().unwrap(), ProductionStyle::LoFi);
    }

    #[test]
    fn test_parse_error_lists_valid_values() {
        let err = "5min".parse::<Duration>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("unknown duration '5min'"));
        assert!(message.contains("30s, 1min, 2min, 3min, 4min"));
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Duration::ThirtySeconds.to_string(), "30s");
        assert_eq!(VocalGender::Instrumental.to_string(), "Instrumental");
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&ProductionStyle::HiFi).unwrap();
        assert_eq!(json, "\"Hi-fi\"");
        let back: ProductionStyle = serde_json::from_str("\"hi-fi\"").unwrap();
        assert_eq!(back, ProductionStyle::HiFi);
        assert!(serde_json::from_str::<Mode>("\"karaoke\"").is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(Mode::default(), Mode::Full);
        assert_eq!(ProductionStyle::default(), ProductionStyle::Modern);
        assert_eq!(SongLanguage::default(), SongLanguage::English);
        assert_eq!(Duration::default(), Duration::TwoMinutes);
    }
}
