//! Aggregation engine: folds career levels into NPC totals.
//!
//! The engine is a pure function of its inputs. Totals are always
//! recomputed from the full list of career levels; there is no way to
//! subtract a single level's contribution.

use crate::career::CareerLevel;
use crate::config::RulesConfig;
use crate::npc::{Characteristic, Npc};

/// Build an NPC by applying `careers` in order on top of the baseline.
///
/// For every level, each listed characteristic and skill gains
/// `rules.per_level * level`, and each listed talent gains one count.
/// Non-positive levels are applied literally. Totals are kept in `i64` and
/// saturate instead of overflowing, so no level value can make this fail.
/// Characteristic codes outside the canonical set start at
/// `rules.baseline` the first time they appear.
pub fn build_npc(name: &str, race: &str, careers: &[CareerLevel], rules: &RulesConfig) -> Npc {
    let mut npc = Npc::new(name, race);
    npc.careers = careers.to_vec();
    npc.characteristics = baseline_characteristics(rules);

    for career in careers {
        let bonus = i64::from(rules.per_level).saturating_mul(i64::from(career.level()));

        for code in career.characteristics() {
            raise_characteristic(&mut npc.characteristics, code, bonus, rules.baseline.into());
        }

        for skill in career.skills() {
            let total = npc.skills.entry(skill.clone()).or_insert(0);
            *total = total.saturating_add(bonus);
        }

        for talent in career.talents() {
            *npc.talents.entry(talent.clone()).or_insert(0) += 1;
        }
    }

    npc
}

/// Every canonical characteristic at the baseline value.
fn baseline_characteristics(rules: &RulesConfig) -> Vec<Characteristic> {
    let mut characteristics: Vec<Characteristic> = Vec::with_capacity(rules.characteristics.len());
    for code in &rules.characteristics {
        if characteristics.iter().any(|c| &c.code == code) {
            continue;
        }
        characteristics.push(Characteristic {
            code: code.clone(),
            value: rules.baseline.into(),
        });
    }
    characteristics
}

fn raise_characteristic(
    characteristics: &mut Vec<Characteristic>,
    code: &str,
    bonus: i64,
    baseline: i64,
) {
    match characteristics.iter_mut().find(|c| c.code == code) {
        Some(existing) => existing.value = existing.value.saturating_add(bonus),
        None => characteristics.push(Characteristic {
            code: code.to_string(),
            value: baseline.saturating_add(bonus),
        }),
    }
}
