//! Site configuration: document metadata and the page list.

use serde::{Deserialize, Serialize};
#[cfg(feature = "server")]
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Frontend Setup";
pub const DEFAULT_DESCRIPTION: &str =
    "A website demonstrating interaction between frontend and backend services.";
pub const DEFAULT_PAGES: &[&str] = &["Products"];

/// Built once at start-up and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub pages: Vec<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            pages: DEFAULT_PAGES.iter().map(|p| p.to_string()).collect(),
        }
    }
}

#[cfg(feature = "server")]
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[cfg(feature = "server")]
impl SiteConfig {
    /// Parse a JSON document. Missing fields take their default value.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loaded site config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
