//! Paginated harvesting
//!
//! Starts at the first page of the phrase table, collects every row and
//! follows the "next" link until the table runs out, a page repeats, or the
//! page limit is reached.

use crate::error::HarvestResult;
use crate::source::PageSource;
use crate::table::{PhrasePair, TableParser};
use serde_json::{Map, Value, json};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// First page of the Standard German → Viennese phrase table
pub const DEFAULT_START_URL: &str = "https://sprachen.wien.gv.at/worterbuch/?from_language=18&to_language=12&select_category=0&filter_form_sent=1";

/// Page limit for one harvest
pub const DEFAULT_MAX_PAGES: usize = 200;

/// Phrase pairs collected by a [`Harvester`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Harvest {
    /// Unique pairs in page order; the first row for a Standard phrase wins
    pub pairs: Vec<PhrasePair>,
    /// Pages fetched
    pub pages: usize,
    /// Rows dropped because their Standard phrase was already seen
    pub duplicates: usize,
}

impl Harvest {
    /// Dictionary JSON with a `@metadata` header, in the format the
    /// `austrolate` loader reads
    pub fn to_json(&self, source_url: &str) -> Value {
        let mut obj = Map::new();
        obj.insert(
            "@metadata".to_string(),
            json!({
                "source": source_url,
                "pages": self.pages,
                "phrases": self.pairs.len(),
            }),
        );
        for pair in &self.pairs {
            obj.insert(pair.standard.clone(), Value::String(pair.viennese.clone()));
        }
        Value::Object(obj)
    }
}

/// Walks the paginated phrase table of one page source
pub struct Harvester<S: PageSource> {
    source: S,
    parser: TableParser,
    max_pages: usize,
}

impl<S: PageSource> Harvester<S> {
    pub fn new(source: S, parser: TableParser) -> Self {
        Self {
            source,
            parser,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// Harvest all pages reachable from `start_url`
    ///
    /// # Errors
    ///
    /// Fails when any page cannot be fetched.
    pub async fn harvest(&self, start_url: &str) -> HarvestResult<Harvest> {
        let mut harvest = Harvest::default();
        let mut visited = HashSet::new();
        let mut seen = HashSet::new();
        let mut url = start_url.to_string();

        loop {
            if harvest.pages >= self.max_pages {
                warn!("Stopping after {} pages (page limit)", harvest.pages);
                break;
            }
            if !visited.insert(url.clone()) {
                warn!("Page {} was already harvested, stopping", url);
                break;
            }

            info!(
                "Fetching page {} from {} ({})",
                harvest.pages + 1,
                url,
                self.source.source_name()
            );
            let html = self.source.fetch(&url).await?;
            harvest.pages += 1;

            let rows = self.parser.parse_phrase_table(&html);
            debug!("Page {} has {} rows", harvest.pages, rows.len());
            if rows.is_empty() {
                warn!("No phrase rows found on {}", url);
            }

            for pair in rows {
                if seen.insert(pair.standard.to_lowercase()) {
                    harvest.pairs.push(pair);
                } else {
                    harvest.duplicates += 1;
                }
            }

            match self.parser.find_next_page(&html, &url) {
                Some(next) => url = next,
                None => break,
            }
        }

        info!(
            "Harvested {} phrase pairs from {} pages ({} duplicates dropped)",
            harvest.pairs.len(),
            harvest.pages,
            harvest.duplicates
        );
        Ok(harvest)
    }
}

/// Write dictionary JSON to `path`, replacing it atomically
pub fn write_dictionary(path: &Path, dictionary: &Value) -> HarvestResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    serde_json::to_writer_pretty(&mut file, dictionary)?;
    file.write_all(b"\n")?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}
