//! poe-project: chain description files and caller-side validation.

pub mod schema;
pub mod validate;

pub use schema::ChainFile;
pub use validate::{ValidationError, ValidationReport, ValidationWarning, validate_chain};

use std::path::Path;

pub const LATEST_VERSION: u32 = 1;

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Unknown chain file format: {path} (expected .yaml, .yml or .json)")]
    UnknownFormat { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A chain file that passed validation, with any warnings it produced.
#[derive(Debug, Clone)]
pub struct LoadedChain {
    pub file: ChainFile,
    pub report: ValidationReport,
}

pub fn parse_yaml(content: &str) -> ProjectResult<LoadedChain> {
    let file: ChainFile = serde_yaml::from_str(content)?;
    let report = validate_chain(&file)?;
    Ok(LoadedChain { file, report })
}

pub fn parse_json(content: &str) -> ProjectResult<LoadedChain> {
    let file: ChainFile = serde_json::from_str(content)?;
    let report = validate_chain(&file)?;
    Ok(LoadedChain { file, report })
}

pub fn load_yaml(path: &Path) -> ProjectResult<LoadedChain> {
    let content = std::fs::read_to_string(path)?;
    parse_yaml(&content)
}

pub fn load_json(path: &Path) -> ProjectResult<LoadedChain> {
    let content = std::fs::read_to_string(path)?;
    parse_json(&content)
}

/// Dispatch on the file extension.
pub fn load_chain(path: &Path) -> ProjectResult<LoadedChain> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("yaml" | "yml") => load_yaml(path),
        Some("json") => load_json(path),
        _ => Err(ProjectError::UnknownFormat {
            path: path.display().to_string(),
        }),
    }
}

pub fn to_yaml_string(file: &ChainFile) -> ProjectResult<String> {
    Ok(serde_yaml::to_string(file)?)
}
