//! Rules configuration for stat aggregation.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{NpcError, NpcResult};

/// The ten standard characteristic codes, in display order.
pub const STANDARD_CHARACTERISTICS: [&str; 10] =
    ["Ws", "Bs", "S", "T", "I", "Agi", "Dex", "Int", "Wp", "Fel"];

/// Constants that drive the aggregation engine.
///
/// Every NPC starts with each canonical characteristic at `baseline`.
/// Each career level adds `per_level * level` to every characteristic and
/// skill it lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Starting value of every characteristic.
    pub baseline: i32,
    /// Bonus multiplied by a career level's number.
    pub per_level: i32,
    /// Canonical characteristic codes, always present on a built NPC.
    pub characteristics: Vec<String>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            baseline: 30,
            per_level: 5,
            characteristics: STANDARD_CHARACTERISTICS
                .iter()
                .map(|c| c.to_string())
                .collect(),
        }
    }
}

impl RulesConfig {
    /// Parse a rules file. Fields missing from the JSON keep their defaults.
    pub fn from_json_str(json: &str) -> NpcResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a rules file from disk.
    pub fn load(path: &Path) -> NpcResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| NpcError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Set the characteristic baseline.
    pub fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = baseline;
        self
    }

    /// Set the per-level increment.
    pub fn with_per_level(mut self, per_level: i32) -> Self {
        self.per_level = per_level;
        self
    }

    /// Replace the canonical characteristic codes.
    pub fn with_characteristics<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.characteristics = codes.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = RulesConfig::default();
        assert_eq!(cfg.baseline, 30);
        assert_eq!(cfg.per_level, 5);
        assert_eq!(cfg.characteristics.len(), 10);
        assert_eq!(cfg.characteristics[0], "Ws");
        assert_eq!(cfg.characteristics[9], "Fel");
    }

    #[test]
    fn builder_methods() {
        let cfg = RulesConfig::default()
            .with_baseline(20)
            .with_per_level(10)
            .with_characteristics(["M", "Ws"]);
        assert_eq!(cfg.baseline, 20);
        assert_eq!(cfg.per_level, 10);
        assert_eq!(cfg.characteristics, vec!["M", "Ws"]);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = RulesConfig::from_json_str(r#"{ "per_level": 3 }"#).unwrap();
        assert_eq!(cfg.per_level, 3);
        assert_eq!(cfg.baseline, 30);
        assert_eq!(cfg.characteristics.len(), 10);
    }

    #[test]
    fn malformed_json_is_invalid_data() {
        let err = RulesConfig::from_json_str("{ baseline: }").unwrap_err();
        assert!(matches!(err, NpcError::InvalidData(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("rules.json");
        std::fs::write(&path, r#"{ "baseline": 25 }"#).unwrap();

        let cfg = RulesConfig::load(&path).unwrap();
        assert_eq!(cfg.baseline, 25);
        assert_eq!(cfg.per_level, 5);
    }

    #[test]
    fn load_missing_file() {
        let err = RulesConfig::load(Path::new("/nonexistent/rules.json")).unwrap_err();
        assert!(matches!(err, NpcError::Io { .. }));
    }
}
