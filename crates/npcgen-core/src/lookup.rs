//! Career data lookup.
//!
//! [`CareerLookup`] is the contract the session uses to expand a career
//! name into its levels. [`CareerTable`] is an in-memory implementation
//! loaded from JSON.

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::career::CareerRow;
use crate::error::{NpcError, NpcResult};

/// Source of career level data.
pub trait CareerLookup {
    /// Every known level of `career` from 1 through `upto_level`, ascending.
    ///
    /// Returns an empty list if the career is unknown.
    fn lookup_career_levels(&self, career: &str, upto_level: i32) -> Vec<CareerRow>;
}

impl<F> CareerLookup for F
where
    F: Fn(&str, i32) -> Vec<CareerRow>,
{
    fn lookup_career_levels(&self, career: &str, upto_level: i32) -> Vec<CareerRow> {
        self(career, upto_level)
    }
}

/// A table of career rows held in memory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CareerTable {
    careers: Vec<CareerRow>,
}

impl CareerTable {
    /// Create a table from rows.
    pub fn new(careers: Vec<CareerRow>) -> Self {
        Self { careers }
    }

    /// Parse a table from JSON of the form `{ "careers": [ ... ] }`.
    pub fn from_json_str(json: &str) -> NpcResult<Self> {
        let table: Self = serde_json::from_str(json)?;
        if let Some(row) = table.careers.iter().find(|r| r.career.trim().is_empty()) {
            return Err(NpcError::InvalidData(format!(
                "career row at level {} has no name",
                row.level
            )));
        }
        Ok(table)
    }

    /// Load a table from a JSON file.
    pub fn load(path: &Path) -> NpcResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| NpcError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// All rows in the table.
    pub fn rows(&self) -> &[CareerRow] {
        &self.careers
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.careers.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.careers.is_empty()
    }

    /// Sorted, de-duplicated base career names.
    pub fn career_names(&self) -> Vec<String> {
        self.careers
            .iter()
            .map(|r| r.career.trim().to_string())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All rows of one career, ascending by level.
    pub fn levels_of(&self, career: &str) -> Vec<&CareerRow> {
        let wanted = career.trim().to_lowercase();
        let mut rows: Vec<&CareerRow> = self
            .careers
            .iter()
            .filter(|r| r.career.trim().to_lowercase() == wanted)
            .collect();
        rows.sort_by_key(|r| r.level);
        rows
    }
}

impl CareerLookup for CareerTable {
    fn lookup_career_levels(&self, career: &str, upto_level: i32) -> Vec<CareerRow> {
        self.levels_of(career)
            .into_iter()
            .filter(|r| (1..=upto_level).contains(&r.level))
            .cloned()
            .collect()
    }
}
