//! Registry of states keyed by identifier.

use super::state::{StateId, StateRef};
use std::collections::HashMap;
use thiserror::Error;

/// Errors reported by registry mutations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("State {0} is already registered")]
    DuplicateState(StateId),

    #[error("State {0} is not registered")]
    UnknownState(StateId),

    #[error("State {0} is currently active and cannot be removed")]
    ActiveState(StateId),
}

/// Mapping from [`StateId`] to registered state.
///
/// Pure storage: registering or removing a state never calls any of its
/// lifecycle hooks.
pub struct StateRegistry<P = ()> {
    states: HashMap<StateId, StateRef<P>>,
}

impl<P> StateRegistry<P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            states: HashMap::new(),
        }
    }

    /// Register a state under its own identifier.
    ///
    /// Fails without touching the registry if the identifier is taken.
    pub fn register(&mut self, state: StateRef<P>) -> Result<(), RegistryError> {
        let id = state.borrow().id();
        if self.states.contains_key(&id) {
            return Err(RegistryError::DuplicateState(id));
        }
        self.states.insert(id, state);
        Ok(())
    }

    /// Remove a state, handing back the registry's handle to it.
    ///
    /// The active-state check lives on the machine, which knows what is
    /// current.
    pub fn remove(&mut self, id: StateId) -> Result<StateRef<P>, RegistryError> {
        self.states
            .remove(&id)
            .ok_or(RegistryError::UnknownState(id))
    }

    /// Look up a state (pure).
    pub fn get(&self, id: StateId) -> Option<&StateRef<P>> {
        self.states.get(&id)
    }

    pub fn contains(&self, id: StateId) -> bool {
        self.states.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Registered identifiers in ascending order.
    pub fn ids(&self) -> Vec<StateId> {
        let mut ids: Vec<StateId> = self.states.keys().copied().collect();
        ids.sort();
        ids
    }
}

impl<P> Default for StateRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
