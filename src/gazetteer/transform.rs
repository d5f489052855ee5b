//! Row mapping from Gazetteer records to output records.

use super::states::state_slug;
use super::types::{GazetteerError, PlaceOutput, PlaceTable, UnknownStatePolicy, COUNTRY_CODE};
use crate::slug::slugify;
use log::warn;
use std::collections::BTreeMap;

/// Maps each input row to one output row, preserving order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transformer {
    policy: UnknownStatePolicy,
}

impl Transformer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: UnknownStatePolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn transform(&self, table: &PlaceTable) -> Result<Vec<PlaceOutput>, GazetteerError> {
        let mut unknown: BTreeMap<&str, usize> = BTreeMap::new();
        let mut out = Vec::with_capacity(table.len());

        for row in &table.rows {
            let state = match state_slug(&row.usps) {
                Some(slug) => Some(slug.to_string()),
                None => match self.policy {
                    UnknownStatePolicy::Empty => {
                        *unknown.entry(row.usps.as_str()).or_insert(0) += 1;
                        None
                    }
                    UnknownStatePolicy::Raw => {
                        *unknown.entry(row.usps.as_str()).or_insert(0) += 1;
                        Some(row.usps.trim().to_lowercase())
                    }
                    UnknownStatePolicy::Fail => {
                        return Err(GazetteerError::UnknownState {
                            code: row.usps.clone(),
                            line: row.line,
                        });
                    }
                },
            };

            out.push(PlaceOutput {
                country_code: COUNTRY_CODE,
                state_slug: state,
                name: row.name.clone(),
                slug: slugify(&row.name),
                population: row.pop2020,
            });
        }

        for (code, count) in &unknown {
            warn!(
                "unknown state abbreviation '{}' in {} row(s); state_slug written as {}",
                code,
                count,
                match self.policy {
                    UnknownStatePolicy::Raw => "the raw code",
                    _ => "empty",
                }
            );
        }

        Ok(out)
    }
}

/// Transform with the default policy (unknown codes leave `state_slug` empty).
pub fn transform(table: &PlaceTable) -> Result<Vec<PlaceOutput>, GazetteerError> {
    Transformer::new().transform(table)
}
