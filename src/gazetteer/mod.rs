//! Census Gazetteer places pipeline.
//!
//! Strictly linear: fetch the archive, map every row, write the CSV.
//! Nothing touches the output path until the whole table has been
//! fetched and transformed.

pub mod output;
pub mod source;
pub mod states;
pub mod transform;
pub mod types;

pub use output::{persist, DEFAULT_OUTPUT};
pub use source::{fetch, load_archive, DEFAULT_URL};
pub use transform::{transform, Transformer};
pub use types::{GazetteerError, PlaceOutput, PlaceRecord, PlaceTable, UnknownStatePolicy};

use log::info;
use std::path::PathBuf;

/// Where the Gazetteer archive comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    Archive(PathBuf),
}

impl Default for Source {
    fn default() -> Self {
        Self::Url(DEFAULT_URL.to_string())
    }
}

/// Run configuration. `Config::default()` is the stock Census download
/// written to `us_all_census_places.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub source: Source,
    pub output: PathBuf,
    pub policy: UnknownStatePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            policy: UnknownStatePolicy::default(),
        }
    }
}

/// Run fetch → transform → persist. Returns the number of rows written.
pub fn run(config: &Config) -> Result<usize, GazetteerError> {
    let table = match &config.source {
        Source::Url(url) => fetch(url)?,
        Source::Archive(path) => load_archive(path)?,
    };

    let rows = Transformer::new()
        .with_policy(config.policy)
        .transform(&table)?;
    info!("transformed {} rows (unknown states: {})", rows.len(), config.policy);

    persist(&rows, &config.output)?;
    Ok(rows.len())
}
