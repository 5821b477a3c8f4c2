//! Formatted listings for exporting a finished NPC.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::npc::{Characteristic, Npc};

/// `"Ws: 30, Bs: 35, ..."` in the NPC's characteristic order.
pub fn format_characteristics(characteristics: &[Characteristic]) -> String {
    characteristics
        .iter()
        .map(|c| format!("{}: {}", c.code, c.value))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"Climb 5, Navigation 10"`, sorted by name ignoring case.
pub fn format_skills(skills: &BTreeMap<String, i64>) -> String {
    sorted_ignoring_case(skills)
        .into_iter()
        .map(|(name, value)| format!("{name} {value}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `"Artistic, Tinker 2"`, sorted by name ignoring case.
///
/// A count is shown only for talents granted more than once.
pub fn format_talents(talents: &BTreeMap<String, u32>) -> String {
    sorted_ignoring_case(talents)
        .into_iter()
        .map(|(name, count)| {
            if *count > 1 {
                format!("{name} {count}")
            } else {
                name.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn sorted_ignoring_case<V>(map: &BTreeMap<String, V>) -> Vec<(&String, &V)> {
    let mut items: Vec<_> = map.iter().collect();
    items.sort_by_cached_key(|(name, _)| name.to_lowercase());
    items
}

/// Display-ready summary of an NPC, as consumed by exporters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NpcSummary {
    /// NPC name.
    pub name: String,
    /// NPC race.
    pub race: String,
    /// Most recent career name.
    pub latest_career: String,
    /// Most recent status label.
    pub latest_status: String,
    /// Comma-joined characteristic listing.
    pub characteristics: String,
    /// Comma-joined skill listing.
    pub skills: String,
    /// Comma-joined talent listing.
    pub talents: String,
    /// `(career, level)` for every applied career level.
    pub careers: Vec<(String, i32)>,
}

impl NpcSummary {
    /// Summarize an aggregated NPC.
    pub fn from_npc(npc: &Npc) -> Self {
        Self {
            name: npc.name.clone(),
            race: npc.race.clone(),
            latest_career: npc.latest_career().to_string(),
            latest_status: npc.latest_status().to_string(),
            characteristics: format_characteristics(&npc.characteristics),
            skills: format_skills(&npc.skills),
            talents: format_talents(&npc.talents),
            careers: npc
                .careers
                .iter()
                .map(|c| (c.career().to_string(), c.level()))
                .collect(),
        }
    }

    /// Plain-text rendering, one field per line.
    pub fn to_text(&self) -> String {
        let careers = self
            .careers
            .iter()
            .map(|(career, level)| format!("{career} {level}"))
            .collect::<Vec<_>>()
            .join(", ");

        let mut out = String::new();
        out.push_str(&format!("Name: {}\n", self.name));
        out.push_str(&format!("Race: {}\n", self.race));
        out.push_str(&format!("Career: {}\n", self.latest_career));
        out.push_str(&format!("Status: {}\n", self.latest_status));
        out.push_str(&format!("Careers: {careers}\n"));
        out.push_str(&format!("Characteristics: {}\n", self.characteristics));
        out.push_str(&format!("Skills: {}\n", self.skills));
        out.push_str(&format!("Talents: {}\n", self.talents));
        out
    }
}
