//! Builder API for ergonomic state machine construction.
//!
//! The builder collects states, an optional observer and an optional
//! initial state, then registers everything in one validated step.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::StateMachineBuilder;

use crate::core::{State, StateRef};
use std::cell::RefCell;
use std::rc::Rc;

/// Wrap a state in a shared handle ready for registration.
///
/// # Example
///
/// ```
/// use modestack::builder::{shared, StateMachineBuilder};
/// use modestack::core::{State, StateId, StateRef};
/// use modestack::machine::StateMachine;
///
/// struct Title;
///
/// impl State for Title {
///     fn id(&self) -> StateId { StateId(1) }
///     fn on_enter(&mut self, _: &StateMachine, _: Option<&StateRef>, _: &()) {}
///     fn on_leave(&mut self, _: Option<&StateRef>, _: &()) {}
/// }
///
/// let machine = StateMachineBuilder::new()
///     .state(shared(Title))
///     .initial(StateId(1), ())
///     .build()
///     .unwrap();
/// assert!(machine.is_in_state(StateId(1)));
/// ```
pub fn shared<S, P>(state: S) -> StateRef<P>
where
    S: State<P> + 'static,
{
    Rc::new(RefCell::new(state))
}
