//! Navigation stack of live panels.

use super::error::PanelError;
use super::loader::PanelLoader;
use super::registry::PanelRegistry;
use super::unit::PanelRef;
use std::rc::Rc;
use tracing::debug;

struct Entry {
    panel_type: String,
    panel: PanelRef,
}

/// LIFO stack of panels with pause/resume semantics.
///
/// Only the top panel is interactive; every panel below it has been paused
/// but not exited. An empty stack shows nothing and is a valid resting
/// state.
pub struct PanelStack<L: PanelLoader> {
    registry: PanelRegistry<L>,
    entries: Vec<Entry>,
}

impl<L: PanelLoader> PanelStack<L> {
    /// Create an empty stack drawing panels from `registry`.
    pub fn new(registry: PanelRegistry<L>) -> Self {
        Self {
            registry,
            entries: Vec::new(),
        }
    }

    /// Show `panel_type` on top of the stack and return its instance.
    ///
    /// The panel is resolved first (instantiated on first use), so a failed
    /// push leaves the stack and every panel untouched. On success the
    /// previous top is paused, the panel is pushed and then entered.
    pub fn push(&mut self, panel_type: &str) -> Result<PanelRef, PanelError> {
        let panel = self.registry.resolve(panel_type)?;

        if let Some(top) = self.entries.last() {
            top.panel.borrow_mut().on_pause();
        }
        self.entries.push(Entry {
            panel_type: panel_type.to_string(),
            panel: Rc::clone(&panel),
        });
        panel.borrow_mut().on_enter();

        debug!(panel_type, depth = self.entries.len(), "Pushed panel");
        Ok(panel)
    }

    /// Exit the top panel and resume the one below it.
    ///
    /// Popping an empty stack does nothing and returns `None`.
    pub fn pop(&mut self) -> Option<PanelRef> {
        let entry = self.entries.pop()?;
        entry.panel.borrow_mut().on_exit();

        if let Some(top) = self.entries.last() {
            top.panel.borrow_mut().on_resume();
        }

        debug!(
            panel_type = %entry.panel_type,
            depth = self.entries.len(),
            "Popped panel"
        );
        Some(entry.panel)
    }

    /// The interactive panel, if any.
    pub fn top(&self) -> Option<&PanelRef> {
        self.entries.last().map(|entry| &entry.panel)
    }

    /// Panel type of the interactive panel, if any.
    pub fn top_type(&self) -> Option<&str> {
        self.entries.last().map(|entry| entry.panel_type.as_str())
    }

    /// Panel types from bottom to top.
    pub fn panel_types(&self) -> Vec<&str> {
        self.entries
            .iter()
            .map(|entry| entry.panel_type.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn registry(&self) -> &PanelRegistry<L> {
        &self.registry
    }
}
