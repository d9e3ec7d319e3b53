//! Installation situation (ambient temperature, bundling) scaling of cable loss.

use poe_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative cable installation condition.
///
/// The lumped resistive model does not capture conductor heating; the
/// situation multiplier derates its result instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CableSituation {
    Cool,
    #[default]
    Typical,
    Warm,
    Worst,
}

/// Reference loss for 90 W over 100 m of Cat5e in the typical situation.
pub const TYPICAL_REFERENCE_LOSS_W: Real = 10.5;

impl CableSituation {
    pub const ALL: [CableSituation; 4] = [
        CableSituation::Cool,
        CableSituation::Typical,
        CableSituation::Warm,
        CableSituation::Worst,
    ];

    pub fn key(self) -> &'static str {
        match self {
            CableSituation::Cool => "cool",
            CableSituation::Typical => "typical",
            CableSituation::Warm => "warm",
            CableSituation::Worst => "worst",
        }
    }

    /// Exact-match parse; `None` for anything unrecognized.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|situation| situation.key() == key)
    }

    /// Reference 100 m loss and the observed range it was picked from, in watts.
    pub fn reference_loss_w(self) -> (Real, (Real, Real)) {
        match self {
            CableSituation::Cool => (9.0, (8.0, 10.0)),
            CableSituation::Typical => (TYPICAL_REFERENCE_LOSS_W, (9.0, 12.0)),
            CableSituation::Warm => (13.0, (12.0, 14.0)),
            CableSituation::Worst => (16.0, (15.0, 17.0)),
        }
    }

    /// Loss multiplier relative to `Typical`.
    pub fn loss_multiplier(self) -> Real {
        let (reference, _) = self.reference_loss_w();
        reference / TYPICAL_REFERENCE_LOSS_W
    }
}

impl fmt::Display for CableSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Multiplier for a situation key. Unrecognized keys apply no scaling.
pub fn situation_multiplier(key: &str) -> Real {
    CableSituation::from_key(key)
        .map(CableSituation::loss_multiplier)
        .unwrap_or(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typical_is_neutral() {
        assert_eq!(CableSituation::Typical.loss_multiplier(), 1.0);
        assert_eq!(CableSituation::default(), CableSituation::Typical);
    }

    #[test]
    fn multipliers_are_ordered() {
        let m: Vec<_> = CableSituation::ALL
            .iter()
            .map(|s| s.loss_multiplier())
            .collect();
        assert!(m[0] < 1.0);
        assert!(m.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn reference_loss_inside_its_range() {
        for situation in CableSituation::ALL {
            let (reference, (lo, hi)) = situation.reference_loss_w();
            assert!(lo <= reference && reference <= hi, "{situation}");
        }
    }

    #[test]
    fn from_key_is_exact() {
        assert_eq!(CableSituation::from_key("worst"), Some(CableSituation::Worst));
        assert_eq!(CableSituation::from_key("Worst"), None);
        assert_eq!(CableSituation::from_key(" cool "), None);
        assert_eq!(CableSituation::from_key("scorching"), None);
    }

    #[test]
    fn capitalized_or_padded_key_is_unscaled() {
        assert_eq!(situation_multiplier("Worst"), 1.0);
        assert_eq!(situation_multiplier(" worst"), 1.0);
    }

    #[test]
    fn unknown_key_multiplier_is_one() {
        assert_eq!(situation_multiplier("scorching"), 1.0);
        assert_eq!(situation_multiplier(""), 1.0);
        assert!((situation_multiplier("worst") - 16.0 / 10.5).abs() < 1e-12);
    }

    #[test]
    fn serde_uses_lowercase_keys() {
        let json = serde_json::to_string(&CableSituation::Warm).unwrap();
        assert_eq!(json, "\"warm\"");
        let back: CableSituation = serde_json::from_str("\"cool\"").unwrap();
        assert_eq!(back, CableSituation::Cool);
    }
}
