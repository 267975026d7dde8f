//! Phrase-based translation between Standard German and Viennese
//!
//! Text is split into tokens, then the longest dictionary phrase at each
//! position is substituted while the capitalization of the source is kept.
//! Dictionaries are plain immutable values: build them once, share them
//! behind an `Arc` and pass them into every translation.
//!
//! # Example
//!
//! ```
//! use austrolate::{Dictionaries, Direction, TranslatorConfig};
//!
//! let dictionaries = Dictionaries::from_pairs([
//!     ("guten tag".to_string(), "servus".to_string()),
//!     ("kartoffel".to_string(), "erdäpfel".to_string()),
//! ]);
//! let config = TranslatorConfig::default();
//!
//! let viennese = dictionaries.translate(
//!     "Guten Tag! Eine Kartoffel?",
//!     Direction::StandardToViennese,
//!     config,
//! );
//! assert_eq!(viennese.text, "Servus! Eine Erdäpfel?");
//!
//! let standard = dictionaries.translate("servus", Direction::VienneseToStandard, config);
//! assert_eq!(standard.text, "guten tag");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod dictionary;
pub mod error;
pub mod loader;
pub mod token;
pub mod translator;

pub use dictionary::{PhraseDictionary, build_dictionary, invert_dictionary};
pub use error::{AustrolateError, Result};
pub use loader::{load_dictionaries, load_phrase_pairs, parse_phrase_pairs};
pub use token::{Token, TokenKind, reassemble, tokenize};
pub use translator::{
    DO_NOT_CAPITALIZE, PhraseTranslator, Translation, TranslatorConfig, translate,
};

/// Which way a text is translated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Standard German → Viennese
    StandardToViennese,
    /// Viennese → Standard German
    VienneseToStandard,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::StandardToViennese => "to-viennese",
            Direction::VienneseToStandard => "to-standard",
        }
    }

    pub fn reversed(&self) -> Direction {
        match self {
            Direction::StandardToViennese => Direction::VienneseToStandard,
            Direction::VienneseToStandard => Direction::StandardToViennese,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = AustrolateError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "to-viennese" | "standard-to-viennese" | "wien" | "wienerisch" => {
                Ok(Direction::StandardToViennese)
            }
            "to-standard" | "viennese-to-standard" | "de" | "deutsch" => {
                Ok(Direction::VienneseToStandard)
            }
            _ => Err(AustrolateError::InvalidDirection(s.to_string())),
        }
    }
}

/// Both translation directions built from one phrase list
#[derive(Debug, Clone, Default)]
pub struct Dictionaries {
    standard_to_viennese: PhraseDictionary,
    viennese_to_standard: PhraseDictionary,
}

impl Dictionaries {
    /// Build the forward dictionary from Standard → Viennese pairs and derive
    /// the reverse one by inversion
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let standard_to_viennese = PhraseDictionary::build(pairs);
        let viennese_to_standard = standard_to_viennese.invert();
        Dictionaries {
            standard_to_viennese,
            viennese_to_standard,
        }
    }

    /// Dictionaries where every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, direction: Direction) -> &PhraseDictionary {
        match direction {
            Direction::StandardToViennese => &self.standard_to_viennese,
            Direction::VienneseToStandard => &self.viennese_to_standard,
        }
    }

    pub fn translator(
        &self,
        direction: Direction,
        config: TranslatorConfig,
    ) -> PhraseTranslator<'_> {
        PhraseTranslator::with_config(self.get(direction), config)
    }

    pub fn translate(
        &self,
        text: &str,
        direction: Direction,
        config: TranslatorConfig,
    ) -> Translation {
        self.translator(direction, config).translate_text(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dictionaries {
        Dictionaries::from_pairs(
            [
                ("guten tag", "servus"),
                ("hallo", "servus"),
                ("tomate", "paradeiser"),
                ("sahne", "obers"),
            ]
            .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn test_direction_from_str() {
        assert_eq!("to-viennese".parse::<Direction>().unwrap(), Direction::StandardToViennese);
        assert_eq!("Wien".parse::<Direction>().unwrap(), Direction::StandardToViennese);
        assert_eq!("to_standard".parse::<Direction>().unwrap(), Direction::VienneseToStandard);
        assert_eq!("de".parse::<Direction>().unwrap(), Direction::VienneseToStandard);
        assert!(matches!(
            "bairisch".parse::<Direction>(),
            Err(AustrolateError::InvalidDirection(_))
        ));
    }

    #[test]
    fn test_direction_display_round_trips() {
        for direction in [Direction::StandardToViennese, Direction::VienneseToStandard] {
            assert_eq!(direction.to_string().parse::<Direction>().unwrap(), direction);
            assert_eq!(direction.reversed().reversed(), direction);
        }
    }

    #[test]
    fn test_direction_serde() {
        let json = serde_json::to_string(&Direction::VienneseToStandard).unwrap();
        assert_eq!(json, "\"viennese_to_standard\"");
        let parsed: Direction = serde_json::from_str("\"standard_to_viennese\"").unwrap();
        assert_eq!(parsed, Direction::StandardToViennese);
    }

    #[test]
    fn test_translate_both_directions() {
        let dictionaries = sample();
        let config = TranslatorConfig::default();

        let out = dictionaries.translate(
            "Hallo! Tomate mit Sahne.",
            Direction::StandardToViennese,
            config,
        );
        assert_eq!(out.text, "Servus! Paradeiser mit Obers.");

        // "servus" inverts to the first phrase that produced it
        let back = dictionaries.translate("Servus!", Direction::VienneseToStandard, config);
        assert_eq!(back.text, "Guten tag!");
    }

    #[test]
    fn test_empty_dictionaries_pass_through() {
        let dictionaries = Dictionaries::empty();
        let out = dictionaries.translate(
            "Grüß Gott",
            Direction::VienneseToStandard,
            TranslatorConfig::default(),
        );
        assert_eq!(out.text, "Grüß Gott");
    }
}
