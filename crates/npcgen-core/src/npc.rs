//! The aggregated NPC view.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::career::CareerLevel;

/// A characteristic code and its current value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Characteristic {
    /// Characteristic code (e.g., "Ws").
    pub code: String,
    /// Current value.
    pub value: i64,
}

/// An NPC with totals computed from its career levels.
///
/// This is a computed view: it is rebuilt from `careers` whenever it is
/// needed and never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Npc {
    /// NPC name.
    pub name: String,
    /// NPC race.
    pub race: String,
    /// Career levels in the order they were applied.
    pub careers: Vec<CareerLevel>,
    /// Characteristics in canonical order, followed by extra codes in the
    /// order they were first raised.
    pub characteristics: Vec<Characteristic>,
    /// Skill bonus totals.
    pub skills: BTreeMap<String, i64>,
    /// How many times each talent was granted.
    pub talents: BTreeMap<String, u32>,
}

impl Npc {
    /// Create an NPC with no careers and no stats.
    pub fn new(name: impl Into<String>, race: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            race: race.into(),
            careers: Vec::new(),
            characteristics: Vec::new(),
            skills: BTreeMap::new(),
            talents: BTreeMap::new(),
        }
    }

    /// Name of the most recently applied career, or `""`.
    pub fn latest_career(&self) -> &str {
        self.careers.last().map(|c| c.career()).unwrap_or("")
    }

    /// Status of the most recently applied career level, or `""`.
    pub fn latest_status(&self) -> &str {
        self.careers.last().map(|c| c.status()).unwrap_or("")
    }

    /// Value of a characteristic, if the NPC has it.
    pub fn characteristic(&self, code: &str) -> Option<i64> {
        self.characteristics
            .iter()
            .find(|c| c.code == code)
            .map(|c| c.value)
    }

    /// Skill bonus, returning 0 if the skill was never raised.
    pub fn skill(&self, name: &str) -> i64 {
        self.skills.get(name).copied().unwrap_or(0)
    }

    /// Number of times a talent was granted.
    pub fn talent_count(&self, name: &str) -> u32 {
        self.talents.get(name).copied().unwrap_or(0)
    }
}
