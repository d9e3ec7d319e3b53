//! Stage records produced by chain propagation.

use poe_core::Real;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const SOURCE_LABEL: &str = "Switch (PSE)";

/// Advisory diagnostic attached to a device stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarginNote {
    /// Power after the cable is below the device's draw.
    Insufficient,
    /// The device runs but forwards under 1 W while more devices follow.
    NoMarginForNext,
    /// The device runs with under 1 W to spare.
    Minimal,
}

impl MarginNote {
    pub fn message(self) -> &'static str {
        match self {
            MarginNote::Insufficient => "Insufficient power (device cannot operate)",
            MarginNote::NoMarginForNext => "No margin for next device",
            MarginNote::Minimal => "Minimal margin",
        }
    }
}

impl fmt::Display for MarginNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One position in the power flow: the source at index 0, then each device.
///
/// Every field except `label` and `output_w` is `None` on the source stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub label: String,
    pub power_in_w: Option<Real>,
    pub cable_loss_w: Option<Real>,
    /// Not clamped: a segment losing more than it carries shows a negative value.
    pub power_after_cable_w: Option<Real>,
    pub device_draw_w: Option<Real>,
    pub efficiency_percent: Option<Real>,
    pub output_w: Real,
    pub margin_note: Option<MarginNote>,
}

impl Stage {
    pub fn source(switch_output_w: Real) -> Self {
        Self {
            label: SOURCE_LABEL.to_string(),
            power_in_w: None,
            cable_loss_w: None,
            power_after_cable_w: None,
            device_draw_w: None,
            efficiency_percent: None,
            output_w: switch_output_w,
            margin_note: None,
        }
    }

    pub fn device_label(position: usize) -> String {
        format!("Device {position}")
    }

    pub fn is_source(&self) -> bool {
        self.power_in_w.is_none()
    }

    pub fn is_insufficient(&self) -> bool {
        self.margin_note == Some(MarginNote::Insufficient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_messages() {
        assert!(MarginNote::Insufficient.to_string().contains("Insufficient"));
        assert_eq!(MarginNote::NoMarginForNext.message(), "No margin for next device");
        assert_eq!(MarginNote::Minimal.to_string(), "Minimal margin");
    }

    #[test]
    fn source_stage_has_only_output() {
        let stage = Stage::source(60.0);
        assert_eq!(stage.label, SOURCE_LABEL);
        assert!(stage.is_source());
        assert_eq!(stage.output_w, 60.0);
        assert_eq!(stage.margin_note, None);
    }

    #[test]
    fn device_labels_are_one_based() {
        assert_eq!(Stage::device_label(1), "Device 1");
    }

    #[test]
    fn source_serializes_nulls() {
        let json = serde_json::to_value(Stage::source(30.0)).unwrap();
        assert!(json["power_in_w"].is_null());
        assert!(json["margin_note"].is_null());
        assert_eq!(json["output_w"], 30.0);
    }
}
