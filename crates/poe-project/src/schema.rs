//! Chain description file schema.

use poe_chain::{
    CableSituation, ChainConfig, DEFAULT_SWITCH_OUTPUT_W, LinkInput, PairMode, Stage,
    propagate_chain,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChainFile {
    pub version: u32,
    pub name: String,
    #[serde(default = "default_switch_output_w")]
    pub switch_output_w: f64,
    #[serde(default)]
    pub pair_mode: PairMode,
    /// Kept as text so unknown situations reach the engine's neutral fallback.
    #[serde(default = "default_cable_situation")]
    pub cable_situation: String,
    #[serde(default)]
    pub links: Vec<LinkInput>,
}

fn default_switch_output_w() -> f64 {
    DEFAULT_SWITCH_OUTPUT_W
}

fn default_cable_situation() -> String {
    CableSituation::Typical.key().to_string()
}

impl ChainFile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: crate::LATEST_VERSION,
            name: name.into(),
            switch_output_w: DEFAULT_SWITCH_OUTPUT_W,
            pair_mode: PairMode::default(),
            cable_situation: default_cable_situation(),
            links: Vec::new(),
        }
    }

    /// Small two-device chain used by `poe-cli template`.
    pub fn example() -> Self {
        let mut file = Self::new("Example cascade");
        file.switch_output_w = 60.0;
        file.links = vec![
            LinkInput::new(5.0, 85.0).with_cable(10.0, "Cat6"),
            LinkInput::new(7.0, 85.0).with_cable(25.0, "Cat6"),
        ];
        file
    }

    /// Parsed situation; `None` when the text names no known situation.
    pub fn situation(&self) -> Option<CableSituation> {
        CableSituation::from_key(&self.cable_situation)
    }

    /// Unknown situations fall back to `Typical`, which applies no scaling.
    pub fn config(&self) -> ChainConfig {
        ChainConfig::new(self.pair_mode, self.situation().unwrap_or_default())
    }

    pub fn propagate(&self) -> Vec<Stage> {
        propagate_chain(self.switch_output_w, &self.links, &self.config())
    }
}
