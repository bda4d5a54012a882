//! Panel lifecycle trait.

use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a live panel instance.
///
/// The handle is both the lifecycle target and the display handle handed
/// back to callers of [`PanelStack::push`](super::PanelStack::push).
pub type PanelRef = Rc<RefCell<dyn Panel>>;

/// Lifecycle capability set of a navigable panel.
///
/// A panel below the stack top is paused, never exited: it keeps its
/// display resources and is resumed when everything above it is popped.
pub trait Panel {
    /// The panel became the stack top by being pushed.
    fn on_enter(&mut self);

    /// Another panel was pushed on top of this one.
    fn on_pause(&mut self) {}

    /// The panel above this one was popped.
    fn on_resume(&mut self) {}

    /// The panel was popped off the stack.
    fn on_exit(&mut self);
}
