//! Phrase harvesting for austrolate
//!
//! Collects Standard German / Viennese phrase pairs from the City of Vienna
//! dictionary (`sprachen.wien.gv.at`) and writes them as a dictionary file
//! for the `austrolate` translator.
//!
//! # Workflow Example
//!
//! ```ignore
//! use austrolate_harvest::{
//!     DEFAULT_START_URL, DEFAULT_TABLE_ID, Harvester, HttpPageSource, TableParser,
//!     write_dictionary,
//! };
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let harvester = Harvester::new(HttpPageSource::new()?, TableParser::new(DEFAULT_TABLE_ID)?);
//!     let harvest = harvester.harvest(DEFAULT_START_URL).await?;
//!     write_dictionary(Path::new("data/dictionary.json"), &harvest.to_json(DEFAULT_START_URL))?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod harvest;
pub mod mock;
pub mod source;
pub mod table;

pub use error::{HarvestError, HarvestResult};
pub use harvest::{DEFAULT_MAX_PAGES, DEFAULT_START_URL, Harvest, Harvester, write_dictionary};
pub use mock::StaticPageSource;
pub use source::{HttpPageSource, PageSource};
pub use table::{DEFAULT_TABLE_ID, PhrasePair, TableParser};
