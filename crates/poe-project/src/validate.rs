//! Range checks the engine deliberately leaves to its callers.

use crate::schema::ChainFile;
use poe_chain::find_cable;
use poe_core::{Bound, PoeError, ensure_in_range};
use std::fmt;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{field}: {source}")]
    OutOfRange { field: String, source: PoeError },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Inputs that are accepted but will be replaced by a default during the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    UnknownCableType { link: usize, key: String },
    UnknownSituation { key: String },
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::UnknownCableType { link, key } => write!(
                f,
                "links[{link}].cable_type '{key}' is not in the catalog; using {}",
                poe_chain::BASELINE_CABLE_KEY
            ),
            ValidationWarning::UnknownSituation { key } => {
                write!(f, "cable_situation '{key}' is not recognized; loss is not scaled")
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

fn check(
    field: impl FnOnce() -> String,
    result: Result<f64, PoeError>,
) -> Result<(), ValidationError> {
    result.map(|_| ()).map_err(|source| ValidationError::OutOfRange {
        field: field(),
        source,
    })
}

pub fn validate_chain(file: &ChainFile) -> Result<ValidationReport, ValidationError> {
    if file.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    check(
        || "switch_output_w".to_string(),
        ensure_in_range(
            file.switch_output_w,
            Bound::Exclusive(0.0),
            Bound::Unbounded,
            "switch output",
            "> 0 W",
        ),
    )?;

    let mut report = ValidationReport::default();

    if file.situation().is_none() {
        report.warnings.push(ValidationWarning::UnknownSituation {
            key: file.cable_situation.clone(),
        });
    }

    for (index, link) in file.links.iter().enumerate() {
        if let Some(draw) = link.device_draw_w {
            check(
                || format!("links[{index}].device_draw_w"),
                ensure_in_range(
                    draw,
                    Bound::Inclusive(0.0),
                    Bound::Unbounded,
                    "device draw",
                    ">= 0 W",
                ),
            )?;
        }
        if let Some(eff) = link.efficiency_percent {
            check(
                || format!("links[{index}].efficiency_percent"),
                ensure_in_range(
                    eff,
                    Bound::Exclusive(0.0),
                    Bound::Inclusive(100.0),
                    "efficiency",
                    "(0, 100] %",
                ),
            )?;
        }
        if let Some(length) = link.cable_length_m {
            check(
                || format!("links[{index}].cable_length_m"),
                ensure_in_range(
                    length,
                    Bound::Inclusive(0.0),
                    Bound::Unbounded,
                    "cable length",
                    ">= 0 m",
                ),
            )?;
        }
        if let Some(key) = &link.cable_type
            && find_cable(key).is_none()
        {
            report.warnings.push(ValidationWarning::UnknownCableType {
                link: index,
                key: key.clone(),
            });
        }
    }

    Ok(report)
}
