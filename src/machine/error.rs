//! Switch error types.

use crate::core::StateId;
use thiserror::Error;

/// Reasons a switch request is refused.
///
/// A refused switch makes no lifecycle calls and leaves the machine as it
/// was.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SwitchError {
    /// The requested state is already current
    #[error("State {0} is already active")]
    AlreadyActive(StateId),

    /// No state is registered under the requested identifier
    #[error("State {0} is not registered")]
    UnknownState(StateId),
}
