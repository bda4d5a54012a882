//! Panel error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading the panel path table.
///
/// Any of these aborts construction of the panel subsystem.
#[derive(Debug, Error)]
pub enum PanelConfigError {
    /// The configuration file could not be read
    #[error("Failed to read panel configuration {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid JSON of the expected shape
    #[error("Failed to parse panel configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but breaks one or more rules
    #[error("Panel configuration has {} violation(s): {}", .0.len(), join_violations(.0))]
    Invalid(Vec<ConfigViolation>),
}

/// A single rule broken by a panel configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("entry {index} has an empty panel type")]
    EmptyPanelType { index: usize },

    #[error("panel {panel_type:?} has an empty path")]
    EmptyPath { panel_type: String },

    #[error("panel {panel_type:?} is mapped more than once")]
    DuplicatePanelType { panel_type: String },
}

/// Errors raised while resolving or pushing a panel.
#[derive(Debug, Error)]
pub enum PanelError {
    /// The panel type has no path in the configuration
    #[error("Panel type {panel_type:?} has no configured path")]
    Unmapped { panel_type: String },

    /// The loader failed to materialize the panel
    #[error("Failed to instantiate panel {panel_type:?} from {path:?}: {source}")]
    Instantiate {
        panel_type: String,
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
