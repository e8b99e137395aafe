//! Tunable wheel constants.

use crate::error::WheelError;
use serde::{Deserialize, Serialize};

// ─── Config ───────────────────────────────────────────────────────────────

/// Configuration shared by the spin engine, renderer, and persistence layer.
///
/// Every field has a default, so hosts may pass a partial JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WheelConfig {
    /// Key the entry list is persisted under.
    pub storage_key: String,

    /// Length of the spin animation in milliseconds. Default: **4200**.
    pub spin_duration_ms: u32,

    /// Fewest full extra turns before landing (inclusive). Default: **6**.
    pub min_extra_spins: u32,

    /// Most full extra turns before landing (inclusive). Default: **9**.
    pub max_extra_spins: u32,

    /// Half-width of the landing window, as a fraction of one slice.
    /// Must stay below 0.5 so the pointer never reaches a neighbour.
    pub landing_spread: f64,

    /// Labels longer than this are cut and end with an ellipsis.
    pub max_label_chars: usize,

    /// Entries needed before a spin is allowed.
    pub min_entries: usize,

    pub confetti_particles: usize,
    pub confetti_frames: u32,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            storage_key: "rpb.entries".to_string(),
            spin_duration_ms: 4200,
            min_extra_spins: 6,
            max_extra_spins: 9,
            landing_spread: 0.35,
            max_label_chars: 22,
            min_entries: 2,
            confetti_particles: 160,
            confetti_frames: 240,
        }
    }
}

impl WheelConfig {
    /// Parse a (possibly partial) JSON config and validate it.
    pub fn from_json(json: &str) -> Result<Self, WheelError> {
        let config: WheelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WheelError> {
        if !(0.0..0.5).contains(&self.landing_spread) {
            return Err(WheelError::InvalidConfig(format!(
                "landing_spread must be in [0, 0.5), got {}",
                self.landing_spread
            )));
        }
        if self.min_extra_spins > self.max_extra_spins {
            return Err(WheelError::InvalidConfig(format!(
                "min_extra_spins ({}) exceeds max_extra_spins ({})",
                self.min_extra_spins, self.max_extra_spins
            )));
        }
        if self.spin_duration_ms == 0 {
            return Err(WheelError::InvalidConfig(
                "spin_duration_ms must be positive".to_string(),
            ));
        }
        if self.min_entries < 2 {
            return Err(WheelError::InvalidConfig(format!(
                "min_entries must be at least 2, got {}",
                self.min_entries
            )));
        }
        Ok(())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        WheelConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = WheelConfig::from_json(r#"{"spin_duration_ms": 1000}"#).unwrap();
        assert_eq!(
            config,
            WheelConfig {
                spin_duration_ms: 1000,
                ..WheelConfig::default()
            }
        );
    }

    #[test]
    fn rejects_spread_that_reaches_neighbour() {
        let err = WheelConfig::from_json(r#"{"landing_spread": 0.5}"#).unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_inverted_spin_range() {
        let err =
            WheelConfig::from_json(r#"{"min_extra_spins": 10, "max_extra_spins": 3}"#).unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_zero_duration() {
        let err = WheelConfig::from_json(r#"{"spin_duration_ms": 0}"#).unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfig(_)));
    }

    #[test]
    fn rejects_min_entries_below_two() {
        let err = WheelConfig::from_json(r#"{"min_entries": 1}"#).unwrap_err();
        assert!(matches!(err, WheelError::InvalidConfig(_)));
        WheelConfig::from_json(r#"{"min_entries": 2}"#).unwrap();
    }

    #[test]
    fn rejects_malformed_json() {
        let err = WheelConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, WheelError::Json(_)));
    }
}
