//! State machine that runs the switch protocol.

use crate::core::{
    RegistryError, StateId, StateRef, StateRegistry, TransitionHistory, TransitionRecord,
};
use crate::machine::error::SwitchError;
use std::rc::Rc;
use tracing::{debug, warn};

/// Callback notified on every successful switch with
/// `(previous, next, params)`.
///
/// The observer runs after the new state is installed and before its
/// `on_enter`. It must not switch the same machine.
pub type TransitionObserver<P = ()> = Box<dyn FnMut(Option<&StateRef<P>>, &StateRef<P>, &P)>;

/// Number of history records a new machine retains.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

/// Kind of scheduler callback forwarded to the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tick {
    /// Once per rendered frame
    Update,
    /// Once per fixed (physics) step
    FixedUpdate,
    /// Once per frame, after every update
    LateUpdate,
}

struct Active<P> {
    id: StateId,
    state: StateRef<P>,
}

/// Single-active-state machine over a registry of lifecycle states.
///
/// # Example
///
/// ```rust
/// use modestack::core::{State, StateId, StateRef};
/// use modestack::machine::StateMachine;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct Menu;
///
/// impl State for Menu {
///     fn id(&self) -> StateId { StateId(1) }
///     fn on_enter(&mut self, _: &StateMachine, _: Option<&StateRef>, _: &()) {}
///     fn on_leave(&mut self, _: Option<&StateRef>, _: &()) {}
/// }
///
/// let mut machine: StateMachine = StateMachine::new();
/// machine.register_state(Rc::new(RefCell::new(Menu))).unwrap();
///
/// assert!(machine.switch_to(StateId(1), &()).is_ok());
/// assert!(machine.is_in_state(StateId(1)));
/// assert!(machine.switch_to(StateId(1), &()).is_err());
/// ```
pub struct StateMachine<P = ()> {
    registry: StateRegistry<P>,
    current: Option<Active<P>>,
    observer: Option<TransitionObserver<P>>,
    history: TransitionHistory,
    history_limit: Option<usize>,
}

impl<P> StateMachine<P> {
    /// Create a machine with an empty registry and no active state.
    ///
    /// History keeps the last [`DEFAULT_HISTORY_LIMIT`] records.
    pub fn new() -> Self {
        Self {
            registry: StateRegistry::new(),
            current: None,
            observer: None,
            history: TransitionHistory::new(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }

    /// Register a state under its own identifier.
    pub fn register_state(&mut self, state: StateRef<P>) -> Result<(), RegistryError> {
        let result = self.registry.register(state);
        if let Err(err) = &result {
            warn!(error = %err, "State registration rejected");
        }
        result
    }

    /// Remove a registered state.
    ///
    /// Fails if the identifier is unknown or names the current state.
    pub fn remove_state(&mut self, id: StateId) -> Result<StateRef<P>, RegistryError> {
        if !self.registry.contains(id) {
            return Err(RegistryError::UnknownState(id));
        }
        if self.current_id() == Some(id) {
            return Err(RegistryError::ActiveState(id));
        }
        self.registry.remove(id)
    }

    /// Look up a registered state (pure).
    pub fn state(&self, id: StateId) -> Option<&StateRef<P>> {
        self.registry.get(id)
    }

    pub fn registry(&self) -> &StateRegistry<P> {
        &self.registry
    }

    /// Current state, if any.
    ///
    /// While the current state's own hook runs its handle is mutably
    /// borrowed; use [`current_id`](Self::current_id) from inside hooks.
    pub fn current_state(&self) -> Option<&StateRef<P>> {
        self.current.as_ref().map(|active| &active.state)
    }

    /// Identifier of the current state, `None` when no state is active.
    pub fn current_id(&self) -> Option<StateId> {
        self.current.as_ref().map(|active| active.id)
    }

    /// Whether a state is active and carries `id`.
    pub fn is_in_state(&self, id: StateId) -> bool {
        self.current_id() == Some(id)
    }

    /// Install the observer, replacing any previous one.
    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(Option<&StateRef<P>>, &StateRef<P>, &P) + 'static,
    {
        self.set_boxed_observer(Box::new(observer));
    }

    pub(crate) fn set_boxed_observer(&mut self, observer: TransitionObserver<P>) {
        self.observer = Some(observer);
    }

    /// Remove the observer, returning it if one was installed.
    pub fn clear_observer(&mut self) -> Option<TransitionObserver<P>> {
        self.observer.take()
    }

    pub fn history(&self) -> &TransitionHistory {
        &self.history
    }

    /// Cap the number of retained history records. `None` keeps all, which
    /// grows without bound on a long-lived machine.
    pub fn set_history_limit(&mut self, limit: Option<usize>) {
        self.history_limit = limit;
        if let Some(limit) = limit {
            self.history.truncate_front(limit);
        }
    }

    pub fn history_limit(&self) -> Option<usize> {
        self.history_limit
    }

    /// Switch to the state registered under `id`.
    ///
    /// Runs, in order: the current state's `on_leave`, installation of the
    /// new state, the observer, and the new state's `on_enter`. Fails
    /// without any lifecycle call if `id` is already current or unknown.
    pub fn switch_to(&mut self, id: StateId, params: &P) -> Result<(), SwitchError> {
        if self.is_in_state(id) {
            debug!(state = %id, "Switch ignored, state already active");
            return Err(SwitchError::AlreadyActive(id));
        }
        let next = match self.registry.get(id) {
            Some(state) => Rc::clone(state),
            None => {
                debug!(state = %id, "Switch rejected, state not registered");
                return Err(SwitchError::UnknownState(id));
            }
        };
        debug_assert_eq!(
            next.borrow().id(),
            id,
            "state registered under {id} reports a different id"
        );

        if let Some(active) = &self.current {
            active.state.borrow_mut().on_leave(Some(&next), params);
        }

        let previous = self.current.replace(Active {
            id,
            state: Rc::clone(&next),
        });
        let previous_id = previous.as_ref().map(|active| active.id);
        let previous = previous.map(|active| active.state);

        if let Some(observer) = self.observer.as_mut() {
            observer(previous.as_ref(), &next, params);
        }

        next.borrow_mut().on_enter(self, previous.as_ref(), params);

        debug!(from = ?previous_id, to = %id, "Switched state");
        self.push_history(TransitionRecord::now(previous_id, Some(id)));
        Ok(())
    }

    /// Leave the current state and clear it. Does nothing when no state is
    /// active.
    pub fn stop(&mut self, params: &P) {
        let Some(active) = &self.current else {
            return;
        };
        let id = active.id;
        active.state.borrow_mut().on_leave(None, params);
        self.current = None;

        debug!(state = %id, "Stopped state machine");
        self.push_history(TransitionRecord::now(Some(id), None));
    }

    /// Forward the per-frame hook to the current state.
    pub fn dispatch_update(&self) {
        self.dispatch(Tick::Update);
    }

    /// Forward the fixed-step hook to the current state.
    pub fn dispatch_fixed_update(&self) {
        self.dispatch(Tick::FixedUpdate);
    }

    /// Forward the late hook to the current state.
    pub fn dispatch_late_update(&self) {
        self.dispatch(Tick::LateUpdate);
    }

    /// Forward `tick` to the current state; no-op when none is active.
    ///
    /// When called from inside one of the current state's own hooks the
    /// state is already borrowed, so the tick is skipped with a warning.
    pub fn dispatch(&self, tick: Tick) {
        let Some(active) = &self.current else {
            return;
        };
        let Ok(mut state) = active.state.try_borrow_mut() else {
            warn!(state = %active.id, ?tick, "Tick skipped, state is inside a hook");
            return;
        };
        match tick {
            Tick::Update => state.on_update(),
            Tick::FixedUpdate => state.on_fixed_update(),
            Tick::LateUpdate => state.on_late_update(),
        }
    }

    fn push_history(&mut self, record: TransitionRecord) {
        self.history.push(record, self.history_limit);
    }
}

impl<P> Default for StateMachine<P> {
    fn default() -> Self {
        Self::new()
    }
}
