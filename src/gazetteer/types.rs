//! Core types for the gazetteer pipeline.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Literal written to the `country_code` column of every row.
pub const COUNTRY_CODE: &str = "us";

/// One place row from the Gazetteer file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRecord {
    /// Two-letter postal abbreviation (`USPS` column).
    pub usps: String,
    /// Place name, as published (`NAME` column).
    pub name: String,
    /// 2020 census population (`POP2020` column).
    pub pop2020: u64,
    /// 1-based line in the source file (the header is line 1).
    pub line: u64,
}

/// The parsed input table, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaceTable {
    pub rows: Vec<PlaceRecord>,
}

impl PlaceTable {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<Vec<PlaceRecord>> for PlaceTable {
    fn from(rows: Vec<PlaceRecord>) -> Self {
        Self { rows }
    }
}

/// One row of the output CSV. Field order is the column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaceOutput {
    pub country_code: &'static str,
    /// `None` serializes as an empty field.
    pub state_slug: Option<String>,
    pub name: String,
    pub slug: String,
    pub population: u64,
}

/// What to do with an abbreviation that is not one of the 51 known codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownStatePolicy {
    /// Leave `state_slug` empty and warn once per distinct code.
    #[default]
    Empty,
    /// Write the lower-cased abbreviation as the slug.
    Raw,
    /// Abort the run.
    Fail,
}

impl FromStr for UnknownStatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "empty" => Ok(Self::Empty),
            "raw" => Ok(Self::Raw),
            "fail" => Ok(Self::Fail),
            _ => Err(format!("Unknown policy '{}'. Use 'empty', 'raw' or 'fail'.", s)),
        }
    }
}

impl fmt::Display for UnknownStatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Raw => write!(f, "raw"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// Pipeline errors. Every variant aborts the run.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid archive: {0}")]
    Archive(#[from] zip::result::ZipError),
    #[error("Archive contains no data file")]
    EmptyArchive,
    #[error("Archive contains {0} files, expected exactly one")]
    MultipleEntries(usize),
    #[error("Malformed table: {0}")]
    Parse(#[from] csv::Error),
    #[error("Missing column '{0}'")]
    MissingColumn(&'static str),
    #[error("Invalid population '{value}' on line {line}")]
    InvalidPopulation { value: String, line: u64 },
    #[error("Unknown state abbreviation '{code}' on line {line}")]
    UnknownState { code: String, line: u64 },
    #[error("Cannot write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_parse() {
        assert_eq!("empty".parse::<UnknownStatePolicy>(), Ok(UnknownStatePolicy::Empty));
        assert_eq!("RAW".parse::<UnknownStatePolicy>(), Ok(UnknownStatePolicy::Raw));
        assert_eq!("fail".parse::<UnknownStatePolicy>(), Ok(UnknownStatePolicy::Fail));
        assert!("drop".parse::<UnknownStatePolicy>().is_err());
    }

    #[test]
    fn test_policy_display_round_trips() {
        for p in [
            UnknownStatePolicy::Empty,
            UnknownStatePolicy::Raw,
            UnknownStatePolicy::Fail,
        ] {
            assert_eq!(p.to_string().parse::<UnknownStatePolicy>(), Ok(p));
        }
    }

    #[test]
    fn test_error_messages() {
        let e = GazetteerError::MissingColumn("POP2020");
        assert_eq!(e.to_string(), "Missing column 'POP2020'");
        let e = GazetteerError::UnknownState {
            code: "PR".into(),
            line: 7,
        };
        assert_eq!(e.to_string(), "Unknown state abbreviation 'PR' on line 7");
    }
}
