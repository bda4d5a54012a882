//! Panel path configuration.
//!
//! The configuration maps each panel type to the path its instance is
//! loaded from. It is read once when the panel subsystem is built:
//!
//! ```json
//! {
//!   "panelInfoList": [
//!     { "panelType": "MainMenu", "path": "panels/main_menu" },
//!     { "panelType": "Settings", "path": "panels/settings" }
//!   ]
//! }
//! ```
//!
//! Validation accumulates every violation instead of stopping at the first
//! one, so a broken file is reported in full.

use crate::panel::error::{ConfigViolation, PanelConfigError};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::debug;

/// One `(panel type, path)` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelInfo {
    pub panel_type: String,
    pub path: String,
}

impl PanelInfo {
    pub fn new(panel_type: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            panel_type: panel_type.into(),
            path: path.into(),
        }
    }
}

/// Raw panel configuration as stored on disk.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    pub panel_info_list: Vec<PanelInfo>,
}

impl PanelConfig {
    pub fn new(panel_info_list: Vec<PanelInfo>) -> Self {
        Self { panel_info_list }
    }

    /// Parse configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, PanelConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse configuration from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self, PanelConfigError> {
        let text = fs::read_to_string(path).map_err(|source| PanelConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Check every record, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();
        let mut seen = HashSet::new();

        for (index, info) in self.panel_info_list.iter().enumerate() {
            if info.panel_type.trim().is_empty() {
                checks.push(Validation::fail(ConfigViolation::EmptyPanelType { index }));
                continue;
            }
            if info.path.trim().is_empty() {
                checks.push(Validation::fail(ConfigViolation::EmptyPath {
                    panel_type: info.panel_type.clone(),
                }));
            }
            if !seen.insert(info.panel_type.as_str()) {
                checks.push(Validation::fail(ConfigViolation::DuplicatePanelType {
                    panel_type: info.panel_type.clone(),
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Validate and freeze the configuration into a lookup table.
    pub fn into_path_table(self) -> Result<PanelPathTable, PanelConfigError> {
        if let Validation::Failure(errors) = self.validate() {
            return Err(PanelConfigError::Invalid(errors.iter().cloned().collect()));
        }

        let paths: HashMap<String, String> = self
            .panel_info_list
            .into_iter()
            .map(|info| (info.panel_type, info.path))
            .collect();
        debug!(count = paths.len(), "Loaded panel path table");
        Ok(PanelPathTable { paths })
    }
}

/// Immutable mapping from panel type to load path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelPathTable {
    paths: HashMap<String, String>,
}

impl PanelPathTable {
    /// Path configured for `panel_type`.
    pub fn get(&self, panel_type: &str) -> Option<&str> {
        self.paths.get(panel_type).map(String::as_str)
    }

    pub fn contains(&self, panel_type: &str) -> bool {
        self.paths.contains_key(panel_type)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Configured panel types in ascending order.
    pub fn panel_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.paths.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }
}
