//! Career requests as typed by the user, e.g. `"Engineer:2, Smith"`.

use std::fmt;

/// A request to add a career up to a given level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CareerRequest {
    /// Base career name.
    pub career: String,
    /// Highest level to add.
    pub level: i32,
}

impl CareerRequest {
    /// Request `career` up to `level`.
    pub fn new(career: impl Into<String>, level: i32) -> Self {
        Self {
            career: career.into(),
            level,
        }
    }

    /// Parse a single `name` or `name:level` item.
    ///
    /// The level defaults to 1 when it is missing or not a number.
    /// Returns `None` if the career name is blank.
    pub fn parse(input: &str) -> Option<Self> {
        let (career, level) = match input.split_once(':') {
            Some((career, level)) => (career.trim(), level.trim().parse().unwrap_or(1)),
            None => (input.trim(), 1),
        };
        if career.is_empty() {
            return None;
        }
        Some(Self::new(career, level))
    }

    /// Parse a comma-separated list, skipping blank items.
    pub fn parse_list(input: &str) -> Vec<Self> {
        input.split(',').filter_map(Self::parse).collect()
    }
}

impl fmt::Display for CareerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.career, self.level)
    }
}
