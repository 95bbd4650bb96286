//! Caption styles
//!
//! The captioning API understands a closed set of tones. Each style has a
//! wire value (sent verbatim in the `style` form field), a display label for
//! menus, and a kebab-case name for the command line.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Tone of the generated captions
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CaptionStyle {
    /// Funny and witty captions
    #[default]
    #[serde(rename = "Funny")]
    #[value(name = "funny")]
    Funny,
    /// Inspirational, motivational captions
    #[serde(rename = "Inspirational")]
    #[value(name = "inspirational")]
    Inspirational,
    /// Very short captions
    #[serde(rename = "Short & Punchy")]
    #[value(name = "short-and-punchy", alias = "short")]
    ShortAndPunchy,
}

/// Error returned when a string names no known style
#[derive(Debug, Error, PartialEq, Eq)]
#[error("Unknown caption style '{0}' (expected one of: Funny, Inspirational, Short & Punchy)")]
pub struct UnknownStyle(pub String);

impl CaptionStyle {
    /// All styles, in menu order
    pub const ALL: [Self; 3] = [Self::Funny, Self::Inspirational, Self::ShortAndPunchy];

    /// Literal value sent to the API
    #[must_use]
    pub const fn wire_value(self) -> &'static str {
        match self {
            Self::Funny => "Funny",
            Self::Inspirational => "Inspirational",
            Self::ShortAndPunchy => "Short & Punchy",
        }
    }

    /// Human-facing menu label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Funny => "Funny & Witty",
            Self::Inspirational => "Inspirational",
            Self::ShortAndPunchy => "Short & Punchy",
        }
    }

    /// Name used on the command line
    #[must_use]
    pub const fn cli_name(self) -> &'static str {
        match self {
            Self::Funny => "funny",
            Self::Inspirational => "inspirational",
            Self::ShortAndPunchy => "short-and-punchy",
        }
    }

    /// Position of this style in [`CaptionStyle::ALL`]
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

impl fmt::Display for CaptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

impl FromStr for CaptionStyle {
    type Err = UnknownStyle;

    /// Accepts the wire value, the display label, or the CLI name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|style| {
                [style.wire_value(), style.label(), style.cli_name()]
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(needle))
            })
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_values_are_exact_literals() {
        assert_eq!(CaptionStyle::Funny.wire_value(), "Funny");
        assert_eq!(CaptionStyle::Inspirational.wire_value(), "Inspirational");
        assert_eq!(CaptionStyle::ShortAndPunchy.wire_value(), "Short & Punchy");
    }

    #[test]
    fn test_default_is_funny() {
        assert_eq!(CaptionStyle::default(), CaptionStyle::Funny);
    }

    #[test]
    fn test_parse_accepts_all_spellings() {
        assert_eq!("Funny".parse(), Ok(CaptionStyle::Funny));
        assert_eq!("funny & witty".parse(), Ok(CaptionStyle::Funny));
        assert_eq!("INSPIRATIONAL".parse(), Ok(CaptionStyle::Inspirational));
        assert_eq!("Short & Punchy".parse(), Ok(CaptionStyle::ShortAndPunchy));
        assert_eq!(" short-and-punchy ".parse(), Ok(CaptionStyle::ShortAndPunchy));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "Sarcastic".parse::<CaptionStyle>().unwrap_err();
        assert_eq!(err, UnknownStyle("Sarcastic".to_string()));
        assert!(err.to_string().contains("Sarcastic"));
    }

    #[test]
    fn test_serde_uses_wire_value() {
        let json = serde_json::to_string(&CaptionStyle::ShortAndPunchy).unwrap();
        assert_eq!(json, "\"Short & Punchy\"");

        let parsed: CaptionStyle = serde_json::from_str("\"Inspirational\"").unwrap();
        assert_eq!(parsed, CaptionStyle::Inspirational);
    }

    #[test]
    fn test_index_matches_menu_order() {
        for (i, style) in CaptionStyle::ALL.iter().enumerate() {
            assert_eq!(style.index(), i);
        }
    }
}
