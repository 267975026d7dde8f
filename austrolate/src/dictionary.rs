//! Phrase dictionaries
//!
//! A [`PhraseDictionary`] maps lowercase phrases to their translation. It is
//! built once from a raw mapping and never mutated afterwards, so it can be
//! shared across threads behind an `Arc` without locking.

use crate::token::tokenize;
use indexmap::IndexMap;

/// Immutable, case-insensitive phrase → translation mapping
///
/// Entries keep the order in which their key was first seen, which makes
/// [`PhraseDictionary::invert`] reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseDictionary {
    entries: IndexMap<String, String>,
    // token count of the longest key
    max_phrase_tokens: usize,
}

impl PhraseDictionary {
    /// An empty dictionary; every lookup misses
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a dictionary from raw phrase pairs
    ///
    /// Every key is lowercased. When two keys collapse to the same lowercase
    /// form, the last one in iteration order wins.
    ///
    /// # Example
    ///
    /// ```
    /// use austrolate::PhraseDictionary;
    ///
    /// let dict = PhraseDictionary::build([("Servus", "hallo"), ("SERVUS", "grüß dich")]);
    /// assert_eq!(dict.get("servus"), Some("grüß dich"));
    /// assert_eq!(dict.len(), 1);
    /// ```
    pub fn build<I, K, V>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut entries = IndexMap::new();
        for (key, value) in raw {
            entries.insert(key.as_ref().to_lowercase(), value.into());
        }
        Self::from_entries(entries)
    }

    /// Swap keys and values
    ///
    /// When several phrases share a translation, the first one in iteration
    /// order is kept and the rest are dropped silently. The new keys are
    /// lowercased like any other dictionary key.
    pub fn invert(&self) -> Self {
        let mut entries = IndexMap::with_capacity(self.entries.len());
        for (key, value) in &self.entries {
            entries
                .entry(value.to_lowercase())
                .or_insert_with(|| key.clone());
        }
        Self::from_entries(entries)
    }

    fn from_entries(entries: IndexMap<String, String>) -> Self {
        let max_phrase_tokens = entries
            .keys()
            .map(|key| tokenize(key).len())
            .max()
            .unwrap_or(0);
        Self {
            entries,
            max_phrase_tokens,
        }
    }

    /// Case-insensitive lookup
    pub fn get(&self, phrase: &str) -> Option<&str> {
        self.get_normalized(&phrase.to_lowercase())
    }

    /// Lookup for a phrase that is already lowercase
    pub(crate) fn get_normalized(&self, phrase: &str) -> Option<&str> {
        self.entries.get(phrase).map(String::as_str)
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.get(phrase).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of tokens in the longest key
    ///
    /// This is the smallest phrase length that still lets every entry match.
    /// Computed once when the dictionary is built.
    pub fn max_phrase_tokens(&self) -> usize {
        self.max_phrase_tokens
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for PhraseDictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::build(iter)
    }
}

/// Build a [`PhraseDictionary`] from raw pairs, lowercasing keys
pub fn build_dictionary<I, K, V>(raw: I) -> PhraseDictionary
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    PhraseDictionary::build(raw)
}

/// Invert a dictionary, keeping the first key seen for each value
pub fn invert_dictionary(dictionary: &PhraseDictionary) -> PhraseDictionary {
    dictionary.invert()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_lowercases_keys() {
        let dict = PhraseDictionary::build([("Guten Tag", "Servus")]);
        assert_eq!(dict.iter().collect::<Vec<_>>(), vec![("guten tag", "Servus")]);
    }

    #[test]
    fn test_build_last_write_wins() {
        let dict = build_dictionary([("Bub", "Bua"), ("bub", "Bursch")]);
        assert_eq!(dict.len(), 1);
        assert_eq!(dict.get("bub"), Some("Bursch"));
    }

    #[test]
    fn test_build_keeps_first_position_on_collision() {
        let dict = build_dictionary([("a", "1"), ("b", "2"), ("A", "3")]);
        let keys: Vec<&str> = dict.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(dict.get("a"), Some("3"));
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let dict = build_dictionary([("kartoffel", "erdäpfel")]);
        assert_eq!(dict.get("Kartoffel"), Some("erdäpfel"));
        assert_eq!(dict.get("KARTOFFEL"), Some("erdäpfel"));
        assert!(dict.contains("kArToFfEl"));
        assert_eq!(dict.get("tomate"), None);
    }

    #[test]
    fn test_invert_first_wins() {
        let dict = build_dictionary([("a", "x"), ("b", "x")]);
        let inverted = invert_dictionary(&dict);
        assert_eq!(inverted.iter().collect::<Vec<_>>(), vec![("x", "a")]);
    }

    #[test]
    fn test_invert_lowercases_new_keys() {
        let dict = build_dictionary([("tomate", "Paradeiser")]);
        let inverted = dict.invert();
        assert_eq!(inverted.get("paradeiser"), Some("tomate"));
    }

    #[test]
    fn test_invert_preserves_order() {
        let dict = build_dictionary([("c", "3"), ("a", "1"), ("b", "2")]);
        let inverted = dict.invert();
        let keys: Vec<&str> = inverted.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_empty_dictionary() {
        let dict = PhraseDictionary::empty();
        assert!(dict.is_empty());
        assert_eq!(dict.max_phrase_tokens(), 0);
        assert!(dict.invert().is_empty());
    }

    #[test]
    fn test_max_phrase_tokens() {
        let dict = build_dictionary([("servus", "hallo"), ("guten tag", "grüß gott")]);
        // "guten", " ", "tag"
        assert_eq!(dict.max_phrase_tokens(), 3);
        // "grüß", " ", "gott"
        assert_eq!(dict.invert().max_phrase_tokens(), 3);
    }

    #[test]
    fn test_max_phrase_tokens_follows_collisions() {
        // the longer value for "a" is overwritten, the key stays one token
        let dict = build_dictionary([("a", "x y z"), ("A", "x")]);
        assert_eq!(dict.max_phrase_tokens(), 1);
        assert_eq!(dict.invert().max_phrase_tokens(), 1);
    }

    #[test]
    fn test_collect_into_dictionary() {
        let dict: PhraseDictionary = vec![("Jänner".to_string(), "Januar".to_string())]
            .into_iter()
            .collect();
        assert_eq!(dict.get("jänner"), Some("Januar"));
    }
}
