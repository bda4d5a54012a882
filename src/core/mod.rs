//! Core state types.
//!
//! This module contains the building blocks the machine is assembled from:
//! - State identity and the lifecycle trait every state implements
//! - The registry mapping identifiers to registered states
//! - Immutable history of switches

mod history;
mod registry;
mod state;

pub use history::{TransitionHistory, TransitionRecord};
pub use registry::{RegistryError, StateRegistry};
pub use state::{State, StateId, StateRef};
