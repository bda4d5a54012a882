//! The state machine controller.
//!
//! [`StateMachine`] owns a [`StateRegistry`](crate::core::StateRegistry),
//! tracks the single current state and runs the switch protocol:
//!
//! 1. the outgoing state's `on_leave`
//! 2. the incoming state is installed as current
//! 3. the observer, if any, is notified
//! 4. the incoming state's `on_enter`
//!
//! Periodic hooks are forwarded to the current state by the `dispatch_*`
//! methods, which an external frame scheduler calls once per tick. A tick
//! arriving while the current state is inside one of its own hooks is
//! skipped.

mod controller;
mod error;

pub use controller::{StateMachine, Tick, TransitionObserver, DEFAULT_HISTORY_LIMIT};
pub use error::SwitchError;
