//! Cable catalog: per-metre loop resistance for each supported cable grade.

use poe_core::{Length, Real, Resistance, ohms};
use uom::si::length::meter;

/// One catalog entry. Resistance is for the two-pair loop, per metre of run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CableSpec {
    pub key: &'static str,
    pub display_name: &'static str,
    pub resistance_per_meter_ohm: Real,
}

impl CableSpec {
    /// Loop resistance of a run of `length`, before any pair-mode doubling.
    pub fn loop_resistance(&self, length: Length) -> Resistance {
        ohms(self.resistance_per_meter_ohm * length.get::<meter>())
    }
}

/// Key of the variant used for missing or unknown cable types.
pub const BASELINE_CABLE_KEY: &str = "Cat5e";

// Cat5e is calibrated so that 90 W over 100 m loses 10.5 W in the "typical"
// situation: R_100m = 10.5 / (90/48)^2 ~= 2.99 ohm.
const CABLE_CATALOG: [CableSpec; 4] = [
    CableSpec {
        key: "Cat5e",
        display_name: "Category 5e",
        resistance_per_meter_ohm: 0.0299,
    },
    CableSpec {
        key: "Cat6",
        display_name: "Category 6",
        resistance_per_meter_ohm: 0.0267,
    },
    CableSpec {
        key: "Cat6a",
        display_name: "Category 6A",
        resistance_per_meter_ohm: 0.0236,
    },
    CableSpec {
        key: "Cat7",
        display_name: "Category 7",
        resistance_per_meter_ohm: 0.0217,
    },
];

pub fn cable_catalog() -> &'static [CableSpec] {
    &CABLE_CATALOG
}

/// Supported cable keys, in catalog order.
pub fn cable_type_keys() -> impl Iterator<Item = &'static str> {
    CABLE_CATALOG.iter().map(|spec| spec.key)
}

/// Exact-match lookup. `None` for keys outside the catalog.
pub fn find_cable(key: &str) -> Option<&'static CableSpec> {
    CABLE_CATALOG.iter().find(|spec| spec.key == key)
}

pub fn baseline_cable() -> &'static CableSpec {
    &CABLE_CATALOG[0]
}

/// Lookup that never fails: unknown keys resolve to the baseline grade.
pub fn resolve_cable(key: &str) -> &'static CableSpec {
    match find_cable(key) {
        Some(spec) => spec,
        None => {
            tracing::trace!(key, fallback = BASELINE_CABLE_KEY, "unknown cable type");
            baseline_cable()
        }
    }
}
