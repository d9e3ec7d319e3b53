//! poe-chain: power flow through a daisy-chained POE cascade.
//!
//! A switch (PSE) feeds a sequence of powered devices over copper segments.
//! Each segment dissipates I²R loss, each device takes its draw and
//! re-injects the remainder, derated by its conversion efficiency.
//!
//! The engine is pure: every call is a function of its arguments plus two
//! read-only tables (the cable catalog and the situation multipliers). It
//! never fails; missing or unknown inputs degrade to documented defaults and
//! problems are reported through per-stage [`MarginNote`]s.
//!
//! # Example
//!
//! ```
//! use poe_chain::{ChainConfig, LinkInput, propagate_chain, summarize_chain};
//!
//! let links = [
//!     LinkInput::new(5.0, 85.0).with_cable(10.0, "Cat6"),
//!     LinkInput::new(3.0, 85.0).with_cable(20.0, "Cat6"),
//! ];
//! let stages = propagate_chain(30.0, &links, &ChainConfig::default());
//! assert_eq!(stages.len(), 3);
//! println!("{}", summarize_chain(&stages).message());
//! ```

pub mod cable;
pub mod device;
pub mod loss;
pub mod model;
pub mod propagate;
pub mod situation;
pub mod stage;
pub mod summary;

// Re-exports
pub use cable::{
    BASELINE_CABLE_KEY, CableSpec, cable_catalog, cable_type_keys, find_cable, resolve_cable,
};
pub use device::device_pass_through_output;
pub use loss::{PairMode, cable_loss, power_after_cable, segment_loss};
pub use model::{
    ChainConfig, DEFAULT_EFFICIENCY_PERCENT, DEFAULT_SWITCH_OUTPUT_W, LinkInput, PSE_PRESETS,
    PsePreset, ResolvedLink,
};
pub use propagate::{MARGIN_THRESHOLD_W, propagate_chain};
pub use situation::{CableSituation, situation_multiplier};
pub use stage::{MarginNote, SOURCE_LABEL, Stage};
pub use summary::{ChainSummary, DeviceStatus, device_status, summarize_chain};
