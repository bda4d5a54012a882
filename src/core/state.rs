//! State identity and the lifecycle trait.
//!
//! Every state registered with a [`StateMachine`] implements [`State`]. The
//! machine only ever holds shared handles ([`StateRef`]) to states; the
//! caller that created a state keeps ownership of it.

use crate::machine::StateMachine;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Unique numeric identifier of a state within a registry.
///
/// Absence of an active state is expressed with `Option<StateId>`, so every
/// value, including zero, names a real state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(pub u32);

impl StateId {
    /// Raw numeric value.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl From<u32> for StateId {
    fn from(value: u32) -> Self {
        StateId(value)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Shared handle to a registered state.
pub type StateRef<P = ()> = Rc<RefCell<dyn State<P>>>;

/// Lifecycle capability set of a state machine state.
///
/// `P` is the payload passed along with every switch. States that need
/// two independent values use a tuple payload.
///
/// The machine calls the hooks in a fixed order on every switch: the
/// outgoing state's [`on_leave`](State::on_leave), then the incoming
/// state's [`on_enter`](State::on_enter). The periodic hooks are only
/// called on the current state and default to doing nothing.
///
/// # Example
///
/// ```rust
/// use modestack::core::{State, StateId, StateRef};
/// use modestack::machine::StateMachine;
///
/// struct Idle;
///
/// impl State for Idle {
///     fn id(&self) -> StateId {
///         StateId(1)
///     }
///
///     fn on_enter(&mut self, _machine: &StateMachine, _previous: Option<&StateRef>, _params: &()) {}
///
///     fn on_leave(&mut self, _next: Option<&StateRef>, _params: &()) {}
/// }
///
/// assert_eq!(Idle.id(), StateId(1));
/// assert_eq!(Idle.name(), "state");
/// ```
pub trait State<P = ()> {
    /// Identifier this state registers under. Must not change while the
    /// state is registered.
    fn id(&self) -> StateId;

    /// Human readable name used in diagnostics.
    fn name(&self) -> &str {
        "state"
    }

    /// Called after this state has been installed as current.
    ///
    /// `machine` already reports this state as current. `previous` is the
    /// state that was left, if any.
    fn on_enter(&mut self, machine: &StateMachine<P>, previous: Option<&StateRef<P>>, params: &P);

    /// Called before this state is replaced. `next` is `None` when the
    /// machine is being stopped.
    fn on_leave(&mut self, next: Option<&StateRef<P>>, params: &P);

    /// Per-frame hook.
    fn on_update(&mut self) {}

    /// Fixed-step (physics) hook.
    fn on_fixed_update(&mut self) {}

    /// Hook run after every state has had its per-frame update.
    fn on_late_update(&mut self) {}
}
