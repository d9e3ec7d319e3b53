//! Chain-level verdicts derived from a finished stage sequence.

use crate::propagate::MARGIN_THRESHOLD_W;
use crate::stage::Stage;
use poe_core::Real;
use serde::{Deserialize, Serialize};

/// Whether a device stage receives enough power to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Powered,
    Underpowered,
}

pub fn device_status(stage: &Stage) -> DeviceStatus {
    if stage.is_insufficient() {
        DeviceStatus::Underpowered
    } else {
        DeviceStatus::Powered
    }
}

/// Overall verdict for a cascade, judged from its last stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum ChainSummary {
    /// No devices in the chain.
    Empty,
    /// The last device cannot operate.
    Underpowered { devices: usize },
    /// Every device runs but nothing usable is left after the last one.
    MaxCascade { devices: usize },
    Usable { devices: usize, remaining_w: Real },
}

impl ChainSummary {
    pub fn devices(&self) -> usize {
        match *self {
            ChainSummary::Empty => 0,
            ChainSummary::Underpowered { devices }
            | ChainSummary::MaxCascade { devices }
            | ChainSummary::Usable { devices, .. } => devices,
        }
    }

    pub fn message(&self) -> String {
        match *self {
            ChainSummary::Empty => {
                "No devices in the chain. Add devices to see how many can be cascaded.".to_string()
            }
            ChainSummary::Underpowered { .. } => {
                "Chain is underpowered: one or more devices do not receive enough power. \
                 Reduce draw, shorten cables, use better cable or increase switch PSE."
                    .to_string()
            }
            ChainSummary::MaxCascade { devices } => format!(
                "Maximum cascade in this configuration: {devices} device(s). \
                 No usable power remains after the last device."
            ),
            ChainSummary::Usable {
                devices,
                remaining_w,
            } => format!(
                "Usable cascade: {devices} device(s). Remaining power after last device: \
                 {remaining_w:.2} W."
            ),
        }
    }
}

pub fn summarize_chain(stages: &[Stage]) -> ChainSummary {
    let devices = stages.iter().filter(|stage| !stage.is_source()).count();
    let Some(last) = stages.last().filter(|_| devices > 0) else {
        return ChainSummary::Empty;
    };

    if last.is_insufficient() {
        ChainSummary::Underpowered { devices }
    } else if last.output_w < MARGIN_THRESHOLD_W {
        ChainSummary::MaxCascade { devices }
    } else {
        ChainSummary::Usable {
            devices,
            remaining_w: last.output_w,
        }
    }
}
