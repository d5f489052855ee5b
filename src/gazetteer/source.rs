//! Gazetteer sources: the Census download and local zip archives.
//!
//! Both end up in `read_archive`, which requires exactly one file entry and
//! parses it as a tab-separated table with a header row.

use super::types::{GazetteerError, PlaceRecord, PlaceTable};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, info};
use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

pub const DEFAULT_URL: &str =
    "https://www2.census.gov/geo/docs/maps-data/data/gazetteer/2023_Gaz_place_national.zip";

const USER_AGENT: &str = "gazetteer-places/0.1";

const COL_USPS: &str = "USPS";
const COL_NAME: &str = "NAME";
const COL_POP: &str = "POP2020";

/// Download the archive at `url` and parse its table.
pub fn fetch(url: &str) -> Result<PlaceTable, GazetteerError> {
    info!("fetching {}", url);
    let response = ureq::get(url)
        .set("User-Agent", USER_AGENT)
        .call()
        .map_err(|e| GazetteerError::Network(e.to_string()))?;

    let mut body = Vec::new();
    response
        .into_reader()
        .read_to_end(&mut body)
        .map_err(|e| GazetteerError::Network(e.to_string()))?;
    info!("downloaded {} bytes", body.len());

    read_archive(Cursor::new(body))
}

/// Parse a zip archive already on disk.
pub fn load_archive(path: &Path) -> Result<PlaceTable, GazetteerError> {
    info!("reading archive {}", path.display());
    let file = File::open(path)?;
    read_archive(file)
}

/// Open a zip archive and parse its single data file.
pub fn read_archive<R: Read + Seek>(reader: R) -> Result<PlaceTable, GazetteerError> {
    let mut archive = ZipArchive::new(reader)?;

    let mut files = Vec::new();
    for i in 0..archive.len() {
        let entry = archive.by_index(i)?;
        if entry.is_file() {
            files.push(i);
        } else {
            debug!("skipping directory entry {}", entry.name());
        }
    }

    let index = match files.as_slice() {
        [] => return Err(GazetteerError::EmptyArchive),
        [only] => *only,
        many => return Err(GazetteerError::MultipleEntries(many.len())),
    };

    let entry = archive.by_index(index)?;
    info!("parsing {} ({} bytes uncompressed)", entry.name(), entry.size());
    parse_table(entry)
}

/// Parse tab-separated text with a header row into a `PlaceTable`.
///
/// Header names are trimmed; the Census files pad the last one with spaces.
/// Columns other than `USPS`, `NAME` and `POP2020` are ignored.
pub fn parse_table<R: Read>(reader: R) -> Result<PlaceTable, GazetteerError> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b'\t')
        .trim(Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let usps = column(&headers, COL_USPS)?;
    let name = column(&headers, COL_NAME)?;
    let pop = column(&headers, COL_POP)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let raw_pop = record.get(pop).unwrap_or("");
        let pop2020 = raw_pop
            .trim()
            .parse::<u64>()
            .map_err(|_| GazetteerError::InvalidPopulation {
                value: raw_pop.to_string(),
                line,
            })?;

        rows.push(PlaceRecord {
            usps: record.get(usps).unwrap_or("").to_string(),
            name: record.get(name).unwrap_or("").to_string(),
            pop2020,
            line,
        });
    }

    info!("parsed {} place rows", rows.len());
    Ok(PlaceTable { rows })
}

fn column(headers: &StringRecord, wanted: &'static str) -> Result<usize, GazetteerError> {
    headers
        .iter()
        .position(|h| h == wanted)
        .ok_or(GazetteerError::MissingColumn(wanted))
}
