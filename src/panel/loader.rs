//! Instantiation seam between the panel cache and the host's resources.

use super::unit::PanelRef;

/// Turns a configured load path into a live panel instance.
///
/// The host implements this on top of whatever resource system it uses.
/// Every instance is parented under the shared display `Container` handed
/// to the registry at construction.
pub trait PanelLoader {
    /// Display container new panels are attached to.
    type Container;

    /// Failure to materialize a panel.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a new live panel from `path`, attached to `parent`.
    ///
    /// Called from [`PanelStack::push`](super::PanelStack::push) before the
    /// current top is paused, so the top is still interactive while this
    /// runs and an error leaves it that way.
    fn instantiate(&mut self, path: &str, parent: &Self::Container)
        -> Result<PanelRef, Self::Error>;
}
