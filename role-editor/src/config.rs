//! Editor configuration, read from the environment

use crate::catalog::CapabilityCatalog;
use crate::error::CatalogError;
use std::path::PathBuf;

/// Runtime configuration of the editor and its tooling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// JSON capability catalog; the builtin catalog is used when unset
    pub catalog_path: Option<PathBuf>,
    pub log_level: String,
    pub log_json: bool,
    /// Directory for daily rotating log files
    pub log_dir: Option<String>,
}

impl EditorConfig {
    pub fn from_env() -> Self {
        Self {
            catalog_path: std::env::var("ROLE_CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.trim().is_empty()),
        }
    }

    /// Apply `.env` (if present), then read the environment
    pub fn load() -> Self {
        dotenv::dotenv().ok();
        Self::from_env()
    }

    /// Catalog from `catalog_path`, or the builtin one
    pub fn catalog(&self) -> Result<CapabilityCatalog, CatalogError> {
        match &self.catalog_path {
            Some(path) => CapabilityCatalog::from_path(path),
            None => Ok(CapabilityCatalog::builtin()),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            log_level: "info".into(),
            log_json: false,
            log_dir: None,
        }
    }
}
