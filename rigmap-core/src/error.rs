use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RigmapError {
    #[error("failed to read {}: {source}", path.display())]
    Io { path: PathBuf, #[source] source: std::io::Error },
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown canonical joint '{0}'")]
    UnknownJoint(String),
}

pub type Result<T> = std::result::Result<T, RigmapError>;
