//! Tokenizer
//!
//! Splits text into word runs and single-character separators. Tokens borrow
//! from the input, so concatenating them gives back the original text
//! byte for byte.

/// What kind of text a token covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A maximal run of alphanumeric characters or `_`
    Word,
    /// Exactly one non-word character (whitespace, punctuation, ...)
    Separator,
}

/// An atomic unit of text produced by [`tokenize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    text: &'a str,
    kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(text: &'a str, kind: TokenKind) -> Self {
        Token { text, kind }
    }

    pub fn word(text: &'a str) -> Self {
        Token::new(text, TokenKind::Word)
    }

    pub fn separator(text: &'a str) -> Self {
        Token::new(text, TokenKind::Separator)
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether the first character is uppercase
    pub fn starts_uppercase(&self) -> bool {
        self.text.chars().next().is_some_and(char::is_uppercase)
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split `text` into word and separator tokens
///
/// Runs of whitespace or punctuation become several one-character tokens,
/// never one merged token.
///
/// # Example
///
/// ```
/// use austrolate::token::tokenize;
///
/// let tokens: Vec<&str> = tokenize("Grüß Gott!").iter().map(|t| t.as_str()).collect();
/// assert_eq!(tokens, vec!["Grüß", " ", "Gott", "!"]);
/// ```
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (idx, c) in text.char_indices() {
        if is_word_char(c) {
            if word_start.is_none() {
                word_start = Some(idx);
            }
            continue;
        }
        if let Some(start) = word_start.take() {
            tokens.push(Token::word(&text[start..idx]));
        }
        tokens.push(Token::separator(&text[idx..idx + c.len_utf8()]));
    }

    if let Some(start) = word_start {
        tokens.push(Token::word(&text[start..]));
    }

    tokens
}

/// Concatenate token text back into a string
pub fn reassemble(tokens: &[Token<'_>]) -> String {
    tokens.iter().map(Token::as_str).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
        tokens.iter().map(Token::as_str).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_words_and_separators() {
        let tokens = tokenize("Guten Tag, Herr Wirt.");
        assert_eq!(
            texts(&tokens),
            vec!["Guten", " ", "Tag", ",", " ", "Herr", " ", "Wirt", "."]
        );
        assert_eq!(tokens[0].kind(), TokenKind::Word);
        assert_eq!(tokens[1].kind(), TokenKind::Separator);
    }

    #[test]
    fn test_separator_runs_stay_split() {
        let tokens = tokenize("a  -- b");
        assert_eq!(texts(&tokens), vec!["a", " ", " ", "-", "-", " ", "b"]);
    }

    #[test]
    fn test_only_separators() {
        let tokens = tokenize("?! ");
        assert_eq!(texts(&tokens), vec!["?", "!", " "]);
        assert!(tokens.iter().all(|t| !t.is_word()));
    }

    #[test]
    fn test_umlauts_and_digits_are_word_characters() {
        assert_eq!(texts(&tokenize("Größe 42_b")), vec!["Größe", " ", "42_b"]);
    }

    #[test]
    fn test_apostrophe_splits_word() {
        assert_eq!(texts(&tokenize("g'sund")), vec!["g", "'", "sund"]);
    }

    #[test]
    fn test_no_trailing_empty_token() {
        let tokens = tokenize("servus ");
        assert_eq!(texts(&tokens), vec!["servus", " "]);
        assert!(tokens.iter().all(|t| !t.is_empty()));
    }

    #[test]
    fn test_starts_uppercase() {
        assert!(Token::word("Ärger").starts_uppercase());
        assert!(!Token::word("ärger").starts_uppercase());
        assert!(!Token::word("").starts_uppercase());
    }

    proptest! {
        #[test]
        fn prop_reassemble_is_lossless(text in "\\PC*") {
            prop_assert_eq!(reassemble(&tokenize(&text)), text);
        }

        #[test]
        fn prop_separators_are_single_chars(text in "[a-zäöüß ,.!?'-]{0,40}") {
            for token in tokenize(&text) {
                prop_assert!(!token.is_empty());
                if !token.is_word() {
                    prop_assert_eq!(token.as_str().chars().count(), 1);
                }
            }
        }
    }
}
