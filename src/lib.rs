//! Modestack: mutually exclusive modes with ordered lifecycle callbacks
//!
//! Modestack manages units of which exactly one is active at a time and
//! runs a fixed lifecycle protocol whenever the active unit changes. It
//! ships two controllers built on the same idea:
//!
//! - [`StateMachine`]: a single current state picked from a registry,
//!   switched with leave → install → notify → enter
//! - [`PanelStack`]: a LIFO stack of lazily instantiated, cached panels
//!   where covering a panel pauses it instead of tearing it down
//!
//! Everything is single-threaded and synchronous. Handles are
//! `Rc<RefCell<..>>`, so the controllers cannot cross threads.
//!
//! # Core Concepts
//!
//! - **State**: lifecycle trait for machine states via [`State`]
//! - **Observer**: optional callback notified on every successful switch
//! - **History**: immutable record of switches over time
//! - **Panel**: lifecycle trait for navigable screens via [`Panel`]
//!
//! # Example
//!
//! ```rust
//! use modestack::core::{State, StateId, StateRef};
//! use modestack::machine::StateMachine;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct Idle;
//! struct Running;
//!
//! impl State for Idle {
//!     fn id(&self) -> StateId { StateId(1) }
//!     fn on_enter(&mut self, _: &StateMachine, _: Option<&StateRef>, _: &()) {}
//!     fn on_leave(&mut self, _: Option<&StateRef>, _: &()) {}
//! }
//!
//! impl State for Running {
//!     fn id(&self) -> StateId { StateId(2) }
//!     fn on_enter(&mut self, _: &StateMachine, _: Option<&StateRef>, _: &()) {}
//!     fn on_leave(&mut self, _: Option<&StateRef>, _: &()) {}
//! }
//!
//! let mut machine: StateMachine = StateMachine::new();
//! machine.register_state(Rc::new(RefCell::new(Idle))).unwrap();
//! machine.register_state(Rc::new(RefCell::new(Running))).unwrap();
//!
//! machine.switch_to(StateId(1), &()).unwrap();
//! machine.switch_to(StateId(2), &()).unwrap();
//! assert!(machine.is_in_state(StateId(2)));
//! assert!(!machine.is_in_state(StateId(1)));
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod panel;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::{
    RegistryError, State, StateId, StateRef, TransitionHistory, TransitionRecord,
};
pub use machine::{StateMachine, SwitchError, Tick};
pub use panel::{Panel, PanelError, PanelLoader, PanelRef, PanelRegistry, PanelStack};
