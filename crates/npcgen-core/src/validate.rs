//! Advisory checks on a list of career levels.
//!
//! None of these block aggregation; they are surfaced to the user before
//! an NPC is exported.

use std::fmt;

use crate::career::CareerLevel;

/// A problem found on a single career level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// The level grants no talents.
    MissingTalents {
        /// `"<career> <level>"` label.
        label: String,
    },
    /// The level number is zero or negative.
    NonPositiveLevel {
        /// `"<career> <level>"` label.
        label: String,
    },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTalents { label } => write!(f, "warning: {label}: no talents"),
            Self::NonPositiveLevel { label } => {
                write!(f, "warning: {label}: level is not positive")
            }
        }
    }
}

/// Check every career level, in order.
pub fn validate_careers(careers: &[CareerLevel]) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    for career in careers {
        if career.level() <= 0 {
            issues.push(ValidationIssue::NonPositiveLevel {
                label: career.to_string(),
            });
        }
        if career.talents().is_empty() {
            issues.push(ValidationIssue::MissingTalents {
                label: career.to_string(),
            });
        }
    }
    issues
}
