//! Build errors for the state machine builder.

use crate::core::{RegistryError, StateId};
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("State registration failed: {0}")]
    Registry(#[from] RegistryError),

    #[error("Initial state {0} was never added. Call .state(..) with it before .build()")]
    UnknownInitialState(StateId),

    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,
}
