//! Career levels: the unit of advancement an NPC is built from.
//!
//! A [`CareerRow`] is a provisional record as it comes out of the career
//! data. Once a session accepts it, the row is frozen into a
//! [`CareerLevel`] with a stable [`LevelId`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier assigned to every accepted career level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LevelId(pub u64);

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One row of career data: the bonuses granted by a single career level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRow {
    /// Base career name (e.g., "Engineer").
    pub career: String,
    /// Level number, also the bonus multiplier.
    pub level: i32,
    /// Social status label, informational only.
    #[serde(default)]
    pub status: String,
    /// Characteristic codes this level raises.
    #[serde(default)]
    pub characteristics: Vec<String>,
    /// Skills this level raises.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Talents granted at this level.
    #[serde(default)]
    pub talents: Vec<String>,
}

impl CareerRow {
    /// Create a row with no status and no bonuses.
    pub fn new(career: impl Into<String>, level: i32) -> Self {
        Self {
            career: career.into(),
            level,
            status: String::new(),
            characteristics: Vec::new(),
            skills: Vec::new(),
            talents: Vec::new(),
        }
    }

    /// Set the status label.
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Set the characteristic codes.
    pub fn with_characteristics<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characteristics = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Set the skills.
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the talents.
    pub fn with_talents<I, S>(mut self, talents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.talents = talents.into_iter().map(Into::into).collect();
        self
    }
}

/// An accepted, immutable career level.
///
/// The only way to change a level's talents is [`CareerLevel::with_talents`],
/// which yields a new value carrying the same id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerLevel {
    id: LevelId,
    #[serde(flatten)]
    row: CareerRow,
}

impl CareerLevel {
    /// Freeze a data row under the given id.
    pub fn new(id: LevelId, row: CareerRow) -> Self {
        Self { id, row }
    }

    /// The level's identifier.
    pub fn id(&self) -> LevelId {
        self.id
    }

    /// Base career name.
    pub fn career(&self) -> &str {
        &self.row.career
    }

    /// Level number.
    pub fn level(&self) -> i32 {
        self.row.level
    }

    /// Status label.
    pub fn status(&self) -> &str {
        &self.row.status
    }

    /// Characteristic codes raised by this level.
    pub fn characteristics(&self) -> &[String] {
        &self.row.characteristics
    }

    /// Skills raised by this level.
    pub fn skills(&self) -> &[String] {
        &self.row.skills
    }

    /// Talents granted by this level.
    pub fn talents(&self) -> &[String] {
        &self.row.talents
    }

    /// The underlying data row.
    pub fn row(&self) -> &CareerRow {
        &self.row
    }

    /// Produce the finalized version of this level with the given talents.
    pub fn with_talents<I, S>(self, talents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: self.id,
            row: self.row.with_talents(talents),
        }
    }
}

impl fmt::Display for CareerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row.career, self.row.level)
    }
}
