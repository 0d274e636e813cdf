//! Flat bone-name lists handed over by a model loader.
//!
//! Accepted shapes: a JSON/YAML array of strings, a JSON/YAML object with a
//! `bones` array, or plain text with one name per line (`#` comments and
//! blank lines skipped).

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, RigmapError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListFormat { Json, Yaml, Text }

impl ListFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase).as_deref() {
            Some("json") => ListFormat::Json,
            Some("yaml") | Some("yml") => ListFormat::Yaml,
            _ => ListFormat::Text,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListDoc {
    Bare(Vec<String>),
    Wrapped { bones: Vec<String> },
}

impl ListDoc {
    fn into_names(self) -> Vec<String> {
        match self {
            ListDoc::Bare(names) | ListDoc::Wrapped { bones: names } => names,
        }
    }
}

pub fn parse_str(s: &str, format: ListFormat) -> Result<Vec<String>> {
    let names = match format {
        ListFormat::Json => serde_json::from_str::<ListDoc>(s)?.into_names(),
        ListFormat::Yaml => serde_yaml::from_str::<ListDoc>(s)?.into_names(),
        ListFormat::Text => s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_string)
            .collect(),
    };
    Ok(names)
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .map_err(|source| RigmapError::Io { path: path.to_path_buf(), source })?;
    let names = parse_str(&data, ListFormat::from_path(path))?;
    log::debug!("read {} bone name(s) from {}", names.len(), path.display());
    Ok(names)
}
