//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{StateId, StateRef};
use crate::machine::{StateMachine, TransitionObserver};

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<P = ()> {
    states: Vec<StateRef<P>>,
    observer: Option<TransitionObserver<P>>,
    initial: Option<(StateId, P)>,
    history_limit: Option<usize>,
}

impl<P> StateMachineBuilder<P> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            observer: None,
            initial: None,
            history_limit: None,
        }
    }

    /// Add a state to register.
    pub fn state(mut self, state: StateRef<P>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = StateRef<P>>) -> Self {
        self.states.extend(states);
        self
    }

    /// Install a transition observer.
    pub fn observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(Option<&StateRef<P>>, &StateRef<P>, &P) + 'static,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Switch into `id` with `params` once the machine is built.
    pub fn initial(mut self, id: StateId, params: P) -> Self {
        self.initial = Some((id, params));
        self
    }

    /// Cap the number of retained history records. Without it the machine
    /// keeps its default cap.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Build the state machine.
    ///
    /// The observer is installed before the initial switch, so it sees it.
    pub fn build(self) -> Result<StateMachine<P>, BuildError> {
        if self.history_limit == Some(0) {
            return Err(BuildError::ZeroHistoryLimit);
        }

        let mut machine = StateMachine::new();
        if let Some(limit) = self.history_limit {
            machine.set_history_limit(Some(limit));
        }
        for state in self.states {
            machine.register_state(state)?;
        }
        if let Some(observer) = self.observer {
            machine.set_boxed_observer(observer);
        }
        if let Some((id, params)) = self.initial {
            machine
                .switch_to(id, &params)
                .map_err(|_| BuildError::UnknownInitialState(id))?;
        }

        Ok(machine)
    }
}

impl<P> Default for StateMachineBuilder<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{RegistryError, State};
    use crate::machine::DEFAULT_HISTORY_LIMIT;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Plain(u32);

    impl State for Plain {
        fn id(&self) -> StateId {
            StateId(self.0)
        }

        fn on_enter(&mut self, _: &StateMachine, _: Option<&StateRef>, _: &()) {}

        fn on_leave(&mut self, _: Option<&StateRef>, _: &()) {}
    }

    fn plain(id: u32) -> StateRef {
        Rc::new(RefCell::new(Plain(id)))
    }

    #[test]
    fn empty_builder_builds_idle_machine() {
        let machine = StateMachineBuilder::<()>::new().build().unwrap();
        assert!(machine.registry().is_empty());
        assert!(machine.current_id().is_none());
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = StateMachineBuilder::new()
            .state(plain(1))
            .states(vec![plain(2), plain(3)])
            .initial(StateId(2), ())
            .build()
            .unwrap();

        assert_eq!(machine.registry().len(), 3);
        assert!(machine.is_in_state(StateId(2)));
    }

    #[test]
    fn builder_rejects_duplicate_states() {
        let result = StateMachineBuilder::new()
            .state(plain(1))
            .state(plain(1))
            .build();

        assert!(matches!(
            result,
            Err(BuildError::Registry(RegistryError::DuplicateState(StateId(1))))
        ));
    }

    #[test]
    fn builder_rejects_unknown_initial_state() {
        let result = StateMachineBuilder::new()
            .state(plain(1))
            .initial(StateId(7), ())
            .build();

        assert!(matches!(
            result,
            Err(BuildError::UnknownInitialState(StateId(7)))
        ));
    }

    #[test]
    fn builder_rejects_zero_history_limit() {
        let result = StateMachineBuilder::new()
            .state(plain(1))
            .history_limit(0)
            .build();

        assert!(matches!(result, Err(BuildError::ZeroHistoryLimit)));
    }

    /// Payload-generic construction, so no `'static` bound leaks onto `P`.
    fn build_with<P>(
        states: Vec<StateRef<P>>,
        initial: StateId,
        params: P,
    ) -> StateMachine<P> {
        StateMachineBuilder::new()
            .states(states)
            .initial(initial, params)
            .build()
            .unwrap()
    }

    struct Greeter {
        greeted: Rc<RefCell<Vec<String>>>,
    }

    impl State<String> for Greeter {
        fn id(&self) -> StateId {
            StateId(1)
        }

        fn on_enter(
            &mut self,
            _: &StateMachine<String>,
            _: Option<&StateRef<String>>,
            who: &String,
        ) {
            self.greeted.borrow_mut().push(who.clone());
        }

        fn on_leave(&mut self, _: Option<&StateRef<String>>, _: &String) {}
    }

    #[test]
    fn generic_payload_reaches_initial_switch() {
        let greeted = Rc::new(RefCell::new(Vec::new()));
        let greeter: StateRef<String> = Rc::new(RefCell::new(Greeter {
            greeted: Rc::clone(&greeted),
        }));

        let machine = build_with(vec![greeter], StateId(1), "player one".to_string());

        assert!(machine.is_in_state(StateId(1)));
        assert_eq!(*greeted.borrow(), vec!["player one".to_string()]);
        assert_eq!(machine.history_limit(), Some(DEFAULT_HISTORY_LIMIT));
    }

    #[test]
    fn observer_sees_initial_switch() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);

        let machine = StateMachineBuilder::new()
            .state(plain(1))
            .observer(move |from, to, _| {
                sink.borrow_mut()
                    .push((from.map(|s| s.borrow().id()), to.borrow().id()));
            })
            .initial(StateId(1), ())
            .history_limit(4)
            .build()
            .unwrap();

        assert_eq!(*seen.borrow(), vec![(None, StateId(1))]);
        assert_eq!(machine.history().len(), 1);
    }
}
