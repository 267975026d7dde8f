//! Greedy phrase translator
//!
//! Walks a token sequence left to right. At every position the longest
//! dictionary phrase starting there is substituted; tokens no phrase covers
//! are copied through unchanged. Separators are tokens of their own, so
//! joining the output pieces without a delimiter keeps the original spacing
//! and punctuation.
//!
//! # Example
//!
//! ```
//! use austrolate::{PhraseDictionary, translate};
//! use austrolate::token::tokenize;
//!
//! let dict = PhraseDictionary::build([("guten tag", "servus"), ("guten", "guad")]);
//! let tokens = tokenize("Guten Tag, Herr Ober!");
//! assert_eq!(translate(&tokens, &dict, 3), "Servus, Herr Ober!");
//! ```

use crate::dictionary::PhraseDictionary;
use crate::token::{Token, tokenize};
use tracing::{debug, warn};

/// Lowercased phrases whose translation keeps its case even when the source
/// phrase was capitalized
pub const DO_NOT_CAPITALIZE: &[&str] = &["i"];

/// Default number of tokens tried per phrase (four words with their spaces)
pub const DEFAULT_MAX_PHRASE_LENGTH: usize = 7;

/// Default ceiling on outer-loop steps per translation
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Tunables for [`PhraseTranslator`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Longest phrase, in tokens, that is looked up
    pub max_phrase_length: usize,
    /// Hard ceiling on outer-loop steps; the translation stops once it is hit
    pub max_iterations: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            max_phrase_length: DEFAULT_MAX_PHRASE_LENGTH,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl TranslatorConfig {
    pub fn with_max_phrase_length(mut self, max_phrase_length: usize) -> Self {
        self.max_phrase_length = max_phrase_length;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Config whose phrase length covers exactly the longest key of `dictionary`
    pub fn fitted(dictionary: &PhraseDictionary) -> Self {
        Self::default().with_max_phrase_length(dictionary.max_phrase_tokens().max(1))
    }
}

/// Result of translating a token sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The translated text
    pub text: String,
    /// Input tokens handled before the loop ended
    pub consumed: usize,
    /// Input tokens in total
    pub total: usize,
}

impl Translation {
    /// Whether the iteration ceiling cut the translation short
    pub fn is_truncated(&self) -> bool {
        self.consumed < self.total
    }
}

/// Translator bound to one dictionary
#[derive(Debug, Clone, Copy)]
pub struct PhraseTranslator<'d> {
    dictionary: &'d PhraseDictionary,
    config: TranslatorConfig,
}

impl<'d> PhraseTranslator<'d> {
    pub fn new(dictionary: &'d PhraseDictionary) -> Self {
        Self::with_config(dictionary, TranslatorConfig::default())
    }

    pub fn with_config(dictionary: &'d PhraseDictionary, config: TranslatorConfig) -> Self {
        Self { dictionary, config }
    }

    pub fn config(&self) -> TranslatorConfig {
        self.config
    }

    /// Tokenize `text` and translate it
    pub fn translate_text(&self, text: &str) -> Translation {
        self.translate_tokens(&tokenize(text))
    }

    /// Translate an already tokenized text
    pub fn translate_tokens(&self, tokens: &[Token<'_>]) -> Translation {
        let mut output: Vec<String> = Vec::with_capacity(tokens.len());
        let mut i = 0;
        let mut steps = 0;

        while i < tokens.len() {
            if steps >= self.config.max_iterations {
                warn!(
                    "Translation stopped after {} steps at token {} of {}",
                    steps,
                    i,
                    tokens.len()
                );
                break;
            }
            steps += 1;

            let token = &tokens[i];
            if token.is_empty() {
                i += 1;
                continue;
            }

            match self.longest_match(&tokens[i..]) {
                Some((len, phrase, translation)) => {
                    debug!("Matched {:?} ({} tokens) -> {:?}", phrase, len, translation);
                    if token.starts_uppercase() && !DO_NOT_CAPITALIZE.contains(&phrase.as_str()) {
                        output.push(capitalize_first(translation));
                    } else {
                        output.push(translation.to_string());
                    }
                    i += len;
                }
                None => {
                    output.push(token.as_str().to_string());
                    i += 1;
                }
            }
        }

        Translation {
            text: output.concat(),
            consumed: i,
            total: tokens.len(),
        }
    }

    /// Longest dictionary phrase at the start of `tokens`
    ///
    /// Returns the span length in tokens, the lowercased phrase and its
    /// translation.
    fn longest_match(&self, tokens: &[Token<'_>]) -> Option<(usize, String, &'d str)> {
        let longest = self.config.max_phrase_length.min(tokens.len());
        (1..=longest).rev().find_map(|len| {
            let phrase = tokens[..len]
                .iter()
                .map(Token::as_str)
                .collect::<String>()
                .to_lowercase();
            self.dictionary
                .get_normalized(&phrase)
                .map(|translation| (len, phrase, translation))
        })
    }
}

/// Uppercase the first character of `text`
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Translate `tokens` with `dictionary`, trying phrases of up to
/// `max_phrase_length` tokens
pub fn translate(
    tokens: &[Token<'_>],
    dictionary: &PhraseDictionary,
    max_phrase_length: usize,
) -> String {
    let config = TranslatorConfig::default().with_max_phrase_length(max_phrase_length);
    PhraseTranslator::with_config(dictionary, config)
        .translate_tokens(tokens)
        .text
}
