//! Lazily populated panel instance cache.

use super::config::{PanelConfig, PanelPathTable};
use super::error::{PanelConfigError, PanelError};
use super::loader::PanelLoader;
use super::unit::PanelRef;
use std::collections::HashMap;
use std::path::Path;
use std::rc::Rc;
use tracing::debug;

/// Path table plus the permanent cache of live panels.
///
/// A panel is instantiated the first time its type is resolved and the same
/// instance is returned for every later resolution. Nothing is ever evicted.
pub struct PanelRegistry<L: PanelLoader> {
    paths: PanelPathTable,
    instances: HashMap<String, PanelRef>,
    loader: L,
    container: L::Container,
}

impl<L: PanelLoader> PanelRegistry<L> {
    /// Create a registry over an already validated path table.
    pub fn new(paths: PanelPathTable, loader: L, container: L::Container) -> Self {
        Self {
            paths,
            instances: HashMap::new(),
            loader,
            container,
        }
    }

    /// Validate `config` and build a registry over it.
    pub fn from_config(
        config: PanelConfig,
        loader: L,
        container: L::Container,
    ) -> Result<Self, PanelConfigError> {
        Ok(Self::new(config.into_path_table()?, loader, container))
    }

    /// Build a registry from JSON configuration text.
    pub fn from_json(
        json: &str,
        loader: L,
        container: L::Container,
    ) -> Result<Self, PanelConfigError> {
        Self::from_config(PanelConfig::from_json(json)?, loader, container)
    }

    /// Build a registry from a JSON configuration file.
    pub fn from_path(
        path: &Path,
        loader: L,
        container: L::Container,
    ) -> Result<Self, PanelConfigError> {
        Self::from_config(PanelConfig::from_path(path)?, loader, container)
    }

    /// Return the live panel for `panel_type`, instantiating it on first use.
    pub fn resolve(&mut self, panel_type: &str) -> Result<PanelRef, PanelError> {
        if let Some(panel) = self.instances.get(panel_type) {
            return Ok(Rc::clone(panel));
        }

        let path = self
            .paths
            .get(panel_type)
            .ok_or_else(|| PanelError::Unmapped {
                panel_type: panel_type.to_string(),
            })?;
        let panel = self
            .loader
            .instantiate(path, &self.container)
            .map_err(|err| PanelError::Instantiate {
                panel_type: panel_type.to_string(),
                path: path.to_string(),
                source: Box::new(err),
            })?;

        debug!(panel_type, path, "Instantiated panel");
        self.instances.insert(panel_type.to_string(), Rc::clone(&panel));
        Ok(panel)
    }

    /// Configured path for `panel_type`.
    pub fn path_of(&self, panel_type: &str) -> Option<&str> {
        self.paths.get(panel_type)
    }

    /// Whether an instance of `panel_type` has been created.
    pub fn is_cached(&self, panel_type: &str) -> bool {
        self.instances.contains_key(panel_type)
    }

    pub fn cached_len(&self) -> usize {
        self.instances.len()
    }

    pub fn paths(&self) -> &PanelPathTable {
        &self.paths
    }

    pub fn loader(&self) -> &L {
        &self.loader
    }

    pub fn container(&self) -> &L::Container {
        &self.container
    }
}
