//! Lumped I²R cable loss model.
//!
//! Current is estimated from the through-power at the nominal 48 V supply,
//! and the whole run is treated as a single resistor. This is a first-order
//! approximation: on long, lossy runs the real voltage sags and current rises,
//! which this model does not follow.

use crate::cable::{CableSpec, resolve_cable};
use poe_core::constants::poe_voltage;
use poe_core::{Current, Length, Power, Real, clamp_non_negative, m, w};
use serde::{Deserialize, Serialize};
use uom::si::power::watt;

/// How many conductor pairs share the supply current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairMode {
    #[default]
    TwoPair,
    /// Single pair carries everything: twice the loop resistance.
    OnePair,
}

impl PairMode {
    pub fn from_two_pair(two_pair: bool) -> Self {
        if two_pair {
            PairMode::TwoPair
        } else {
            PairMode::OnePair
        }
    }

    pub fn is_two_pair(self) -> bool {
        matches!(self, PairMode::TwoPair)
    }

    fn resistance_factor(self) -> Real {
        match self {
            PairMode::TwoPair => 1.0,
            PairMode::OnePair => 2.0,
        }
    }
}

/// Loss over one segment for an already-resolved cable.
pub fn segment_loss(
    through: Power,
    length: Length,
    cable: &CableSpec,
    pair_mode: PairMode,
) -> Power {
    let resistance = cable.loop_resistance(length) * pair_mode.resistance_factor();
    let current: Current = through / poe_voltage();
    current * current * resistance
}

/// Raw (unscaled) cable loss in watts.
///
/// Zero or negative length is exactly zero loss and does not consult the
/// catalog. Unknown `cable_type` keys use the baseline grade.
pub fn cable_loss(watts_through: Real, length_m: Real, cable_type: &str, two_pair: bool) -> Real {
    if length_m <= 0.0 {
        return 0.0;
    }
    let cable = resolve_cable(cable_type);
    segment_loss(
        w(watts_through),
        m(length_m),
        cable,
        PairMode::from_two_pair(two_pair),
    )
    .get::<watt>()
}

/// Power delivered at the far end of a segment, clamped at zero.
pub fn power_after_cable(watts_in: Real, length_m: Real, cable_type: &str, two_pair: bool) -> Real {
    if length_m <= 0.0 {
        return watts_in;
    }
    clamp_non_negative(watts_in - cable_loss(watts_in, length_m, cable_type, two_pair))
}
