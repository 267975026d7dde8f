use crate::Dictionaries;
use crate::error::{AustrolateError, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Parse phrase pairs from dictionary JSON
///
/// The JSON should have the following structure:
/// ```json
/// {
///     "@metadata": { ... },  // Ignored
///     "guten tag": "servus",
///     "kartoffel": "erdäpfel"
/// }
/// ```
///
/// Keys map Standard German phrases to Viennese ones. Pairs come back in
/// file order. `origin` names the source in error messages.
pub fn parse_phrase_pairs(content: &str, origin: &str) -> Result<Vec<(String, String)>> {
    let json: Value = serde_json::from_str(content).map_err(|source| AustrolateError::Json {
        origin: origin.to_string(),
        source,
    })?;

    let obj = json
        .as_object()
        .ok_or_else(|| AustrolateError::InvalidRoot(origin.to_string()))?;

    let mut pairs = Vec::with_capacity(obj.len());
    for (key, value) in obj {
        if key.starts_with('@') {
            continue;
        }

        match value.as_str() {
            Some(phrase) => pairs.push((key.clone(), phrase.to_string())),
            None => warn!("Phrase '{}' in {} is not a string, skipping", key, origin),
        }
    }

    Ok(pairs)
}

/// Load phrase pairs from a dictionary JSON file
///
/// # Errors
/// - File not found or unreadable
/// - Invalid JSON
/// - Root is not an object
pub fn load_phrase_pairs(path: &Path) -> Result<Vec<(String, String)>> {
    let content = fs::read_to_string(path).map_err(|source| AustrolateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let pairs = parse_phrase_pairs(&content, &path.display().to_string())?;
    debug!("Loaded {} phrase pairs from {}", pairs.len(), path.display());
    Ok(pairs)
}

/// Load a dictionary file and build both translation directions
pub fn load_dictionaries(path: &Path) -> Result<Dictionaries> {
    let pairs = load_phrase_pairs(path)?;
    if pairs.is_empty() {
        warn!("Dictionary {} contains no phrases", path.display());
    }
    Ok(Dictionaries::from_pairs(pairs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_parse_skips_metadata_and_non_strings() {
        let pairs = parse_phrase_pairs(
            r#"{"@metadata": {"source": "x"}, "tomate": "paradeiser", "zahl": 3}"#,
            "inline",
        )
        .unwrap();
        assert_eq!(pairs, vec![("tomate".to_string(), "paradeiser".to_string())]);
    }

    #[test]
    fn test_parse_keeps_file_order() {
        let pairs = parse_phrase_pairs(r#"{"z": "1", "a": "2", "m": "3"}"#, "inline").unwrap();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_parse_rejects_non_object_root() {
        let err = parse_phrase_pairs(r#"["a", "b"]"#, "inline").unwrap_err();
        assert!(matches!(err, AustrolateError::InvalidRoot(origin) if origin == "inline"));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_phrase_pairs("{not json", "inline").unwrap_err();
        assert!(matches!(err, AustrolateError::Json { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_phrase_pairs(Path::new("/nonexistent/dictionary.json")).unwrap_err();
        assert!(matches!(err, AustrolateError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/dictionary.json"));
    }

    #[test]
    fn test_load_dictionaries_builds_both_directions() {
        let file = write_json(r#"{"Guten Tag": "Servus", "Hallo": "Servus", "Junge": "Bua"}"#);
        let dictionaries = load_dictionaries(file.path()).unwrap();

        let forward = dictionaries.get(Direction::StandardToViennese);
        assert_eq!(forward.get("guten tag"), Some("Servus"));
        assert_eq!(forward.len(), 3);

        let backward = dictionaries.get(Direction::VienneseToStandard);
        assert_eq!(backward.get("servus"), Some("guten tag"));
        assert_eq!(backward.get("bua"), Some("junge"));
        assert_eq!(backward.len(), 2);
    }
}
