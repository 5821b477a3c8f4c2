pub mod build;
pub mod careers;
pub mod shell;

use std::path::Path;

use npcgen_core::{CareerTable, RulesConfig};

use crate::RulesArgs;

/// Load career data, reporting failures as user-facing messages.
fn load_table(path: &Path) -> Result<CareerTable, String> {
    let table = CareerTable::load(path).map_err(|e| e.to_string())?;
    tracing::debug!(path = %path.display(), rows = table.len(), "loaded career data");
    Ok(table)
}

/// Resolve the rules file and command-line overrides.
pub fn load_rules(args: &RulesArgs) -> Result<RulesConfig, String> {
    let mut rules = match &args.rules {
        Some(path) => RulesConfig::load(path).map_err(|e| e.to_string())?,
        None => RulesConfig::default(),
    };
    if let Some(baseline) = args.baseline {
        rules = rules.with_baseline(baseline);
    }
    if let Some(per_level) = args.per_level {
        rules = rules.with_per_level(per_level);
    }
    Ok(rules)
}
