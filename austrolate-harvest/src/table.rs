//! Phrase table extraction
//!
//! The Vienna dictionary site lists phrases in an HTML table whose third
//! column holds the Standard German phrase and whose fourth column holds the
//! Viennese one. Further pages are reached through a `<table id>_next` link.

use crate::error::HarvestResult;
use regex::Regex;
use reqwest::Url;
use tracing::warn;

/// Default id of the phrase table on the dictionary site
pub const DEFAULT_TABLE_ID: &str = "phrases-table";

/// Column holding the Standard German phrase
const STANDARD_COLUMN: usize = 2;
/// Column holding the Viennese phrase
const VIENNESE_COLUMN: usize = 3;

/// One harvested dictionary row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhrasePair {
    pub standard: String,
    pub viennese: String,
}

impl PhrasePair {
    pub fn new(standard: &str, viennese: &str) -> Self {
        Self {
            standard: standard.to_string(),
            viennese: viennese.to_string(),
        }
    }
}

/// Extracts phrase pairs and pagination links from one table id
#[derive(Debug, Clone)]
pub struct TableParser {
    table: Regex,
    row: Regex,
    cell: Regex,
    tag: Regex,
    whitespace: Regex,
    next_link: Regex,
    href: Regex,
    class: Regex,
}

impl TableParser {
    pub fn new(table_id: &str) -> HarvestResult<Self> {
        let id = regex::escape(table_id);
        Ok(Self {
            table: Regex::new(&format!(
                r#"(?is)<table\b[^>]*\bid\s*=\s*["']{id}["'][^>]*>(.*?)</table>"#
            ))?,
            row: Regex::new(r"(?is)<tr\b[^>]*>(.*?)</tr>")?,
            cell: Regex::new(r"(?is)<td\b[^>]*>(.*?)</td>")?,
            tag: Regex::new(r"(?s)<[^>]*>")?,
            whitespace: Regex::new(r"\s+")?,
            next_link: Regex::new(&format!(
                r#"(?is)<[a-z]+\b([^>]*\bid\s*=\s*["']{id}_next["'][^>]*)>"#
            ))?,
            href: Regex::new(r#"(?i)\bhref\s*=\s*["']([^"']*)["']"#)?,
            class: Regex::new(r#"(?i)\bclass\s*=\s*["']([^"']*)["']"#)?,
        })
    }

    /// All phrase pairs in the table, in page order
    ///
    /// Header rows, rows with fewer than four cells and rows with an empty
    /// phrase on either side are skipped.
    pub fn parse_phrase_table(&self, html: &str) -> Vec<PhrasePair> {
        let Some(table) = self.table.captures(html).and_then(|c| c.get(1)) else {
            return Vec::new();
        };

        let mut pairs = Vec::new();
        for row in self.row.captures_iter(table.as_str()) {
            let cells: Vec<String> = self
                .cell
                .captures_iter(&row[1])
                .map(|cell| self.cell_text(&cell[1]))
                .collect();

            if cells.len() <= VIENNESE_COLUMN {
                continue;
            }
            let standard = &cells[STANDARD_COLUMN];
            let viennese = &cells[VIENNESE_COLUMN];
            if standard.is_empty() || viennese.is_empty() {
                continue;
            }
            pairs.push(PhrasePair::new(standard, viennese));
        }
        pairs
    }

    /// Absolute URL of the next page, if the page links to one
    pub fn find_next_page(&self, html: &str, current_url: &str) -> Option<String> {
        let attrs = self.next_link.captures(html)?.get(1)?.as_str();

        let disabled = self
            .class
            .captures(attrs)
            .is_some_and(|c| c[1].split_whitespace().any(|class| class == "disabled"));
        if disabled {
            return None;
        }

        let href = html_escape::decode_html_entities(self.href.captures(attrs)?.get(1)?.as_str())
            .trim()
            .to_string();
        if href.is_empty() || href == "#" || href.to_lowercase().starts_with("javascript:") {
            return None;
        }

        match Url::parse(current_url).and_then(|base| base.join(&href)) {
            Ok(next) => Some(next.to_string()),
            Err(e) => {
                warn!("Ignoring next link '{}' on {}: {}", href, current_url, e);
                None
            }
        }
    }

    fn cell_text(&self, cell_html: &str) -> String {
        let stripped = self.tag.replace_all(cell_html, " ");
        let decoded = html_escape::decode_html_entities(&stripped);
        self.whitespace.replace_all(&decoded, " ").trim().to_string()
    }
}
