//! Chain inputs: per-device links and the run-wide configuration.

use crate::cable::{BASELINE_CABLE_KEY, CableSpec, resolve_cable};
use crate::loss::PairMode;
use crate::situation::CableSituation;
use poe_core::Real;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DEVICE_DRAW_W: Real = 0.0;
pub const DEFAULT_EFFICIENCY_PERCENT: Real = 80.0;
pub const DEFAULT_CABLE_LENGTH_M: Real = 0.0;
pub const DEFAULT_SWITCH_OUTPUT_W: Real = 30.0;

/// Standard PSE output levels a switch port can be configured for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PsePreset {
    pub standard: &'static str,
    pub output_w: Real,
}

pub const PSE_PRESETS: [PsePreset; 4] = [
    PsePreset {
        standard: "802.3af",
        output_w: 15.4,
    },
    PsePreset {
        standard: "802.3at",
        output_w: 30.0,
    },
    PsePreset {
        standard: "802.3bt type 3",
        output_w: 60.0,
    },
    PsePreset {
        standard: "802.3bt type 4",
        output_w: 90.0,
    },
];

/// One device position in the chain and the cable feeding it.
///
/// Every field is optional; [`LinkInput::resolve`] fills in the documented
/// defaults. An explicit zero is kept as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_draw_w: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub efficiency_percent: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cable_length_m: Option<Real>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cable_type: Option<String>,
}

impl LinkInput {
    pub fn new(device_draw_w: Real, efficiency_percent: Real) -> Self {
        Self {
            device_draw_w: Some(device_draw_w),
            efficiency_percent: Some(efficiency_percent),
            ..Self::default()
        }
    }

    pub fn with_cable(mut self, length_m: Real, cable_type: impl Into<String>) -> Self {
        self.cable_length_m = Some(length_m);
        self.cable_type = Some(cable_type.into());
        self
    }

    pub fn resolve(&self) -> ResolvedLink {
        let cable_key = self.cable_type.as_deref().unwrap_or(BASELINE_CABLE_KEY);
        ResolvedLink {
            device_draw_w: self.device_draw_w.unwrap_or(DEFAULT_DEVICE_DRAW_W),
            efficiency_percent: self
                .efficiency_percent
                .unwrap_or(DEFAULT_EFFICIENCY_PERCENT),
            cable_length_m: self.cable_length_m.unwrap_or(DEFAULT_CABLE_LENGTH_M),
            cable: resolve_cable(cable_key),
        }
    }
}

/// A link with every default applied and its cable grade looked up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedLink {
    pub device_draw_w: Real,
    pub efficiency_percent: Real,
    pub cable_length_m: Real,
    pub cable: &'static CableSpec,
}

/// Settings shared by every segment of one calculation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ChainConfig {
    #[serde(default)]
    pub pair_mode: PairMode,
    #[serde(default)]
    pub cable_situation: CableSituation,
}

impl ChainConfig {
    pub fn new(pair_mode: PairMode, cable_situation: CableSituation) -> Self {
        Self {
            pair_mode,
            cable_situation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_link_resolves_to_defaults() {
        let link = LinkInput::default().resolve();
        assert_eq!(link.device_draw_w, 0.0);
        assert_eq!(link.efficiency_percent, 80.0);
        assert_eq!(link.cable_length_m, 0.0);
        assert_eq!(link.cable.key, "Cat5e");
    }

    #[test]
    fn explicit_zero_is_not_replaced() {
        let link = LinkInput {
            efficiency_percent: Some(0.0),
            ..LinkInput::default()
        }
        .resolve();
        assert_eq!(link.efficiency_percent, 0.0);
    }

    #[test]
    fn unknown_cable_type_resolves_to_baseline() {
        let link = LinkInput::new(5.0, 90.0).with_cable(10.0, "Cat9").resolve();
        assert_eq!(link.cable.key, "Cat5e");
        assert_eq!(link.cable_length_m, 10.0);
    }

    #[test]
    fn default_config_is_two_pair_typical() {
        let config = ChainConfig::default();
        assert_eq!(config.pair_mode, PairMode::TwoPair);
        assert_eq!(config.cable_situation, CableSituation::Typical);
    }

    #[test]
    fn default_switch_output_is_a_preset() {
        assert!(
            PSE_PRESETS
                .iter()
                .any(|preset| preset.output_w == DEFAULT_SWITCH_OUTPUT_W)
        );
    }

    #[test]
    fn link_deserializes_with_missing_fields() {
        let link: LinkInput = serde_json::from_str(r#"{"device_draw_w": 7.0}"#).unwrap();
        assert_eq!(link.device_draw_w, Some(7.0));
        assert_eq!(link.efficiency_percent, None);
        assert_eq!(link.resolve().efficiency_percent, 80.0);
    }
}
