//! Engine thresholds.

use serde::Deserialize;

/// Tunable thresholds of the decision engine.
///
/// Every field has a default, so a JSON config file only needs the fields
/// it changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TacticsConfig {
    /// A diamond holder drops its diamond when an enemy is this close (steps).
    pub flee_distance: u32,
    /// Summon only while the nearest enemy is more than `level + margin` away.
    pub summon_safety_margin: u32,
    /// Summon only while at least `level + margin` ticks remain.
    pub summon_tick_margin: u32,
    /// Aligned enemies closer than this count as a lasso threat.
    pub lasso_danger_range: u32,
    /// Seed for the per-pass random source.
    pub seed: u64,
    /// Break ties between equally good spawn tiles at random.
    pub randomize_ties: bool,
    /// Shuffle neighbour order for fallback moves.
    pub shuffle_fallback_moves: bool,
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self {
            flee_distance: 2,
            summon_safety_margin: 2,
            summon_tick_margin: 1,
            lasso_danger_range: 2,
            seed: 0,
            randomize_ties: false,
            shuffle_fallback_moves: false,
        }
    }
}

impl TacticsConfig {
    /// Parse a config from JSON, filling missing fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed JSON or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Same config with a different seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TacticsConfig::from_json(r#"{"flee_distance": 4, "seed": 7}"#).unwrap();
        assert_eq!(config.flee_distance, 4);
        assert_eq!(config.seed, 7);
        assert_eq!(config.summon_safety_margin, 2);
        assert!(!config.randomize_ties);
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(TacticsConfig::from_json(r#"{"flee": 4}"#).is_err());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(TacticsConfig::from_json("{}").unwrap(), TacticsConfig::default());
    }
}
