//! Property-based tests for the state machine and panel stack.
//!
//! These tests use proptest to drive both controllers with random
//! operation sequences and compare them against a simple model.

use modestack::core::{RegistryError, State, StateId, StateRef};
use modestack::machine::{StateMachine, SwitchError};
use modestack::panel::{
    Panel, PanelConfig, PanelError, PanelInfo, PanelLoader, PanelRef, PanelRegistry, PanelStack,
};
use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::HashSet;
use std::convert::Infallible;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Event {
    Enter(u32),
    Leave(u32),
    Observed(Option<u32>, u32),
}

type Log = Rc<RefCell<Vec<Event>>>;

struct Tracked {
    id: u32,
    log: Log,
}

impl State for Tracked {
    fn id(&self) -> StateId {
        StateId(self.id)
    }

    fn on_enter(&mut self, machine: &StateMachine, _: Option<&StateRef>, _: &()) {
        assert!(machine.is_in_state(StateId(self.id)));
        self.log.borrow_mut().push(Event::Enter(self.id));
    }

    fn on_leave(&mut self, _: Option<&StateRef>, _: &()) {
        self.log.borrow_mut().push(Event::Leave(self.id));
    }
}

fn tracked(id: u32, log: &Log) -> StateRef {
    Rc::new(RefCell::new(Tracked {
        id,
        log: Rc::clone(log),
    }))
}

#[derive(Clone, Debug)]
enum MachineOp {
    Switch(u32),
    Stop,
    Remove(u32),
    Register(u32),
}

fn machine_op() -> impl Strategy<Value = MachineOp> {
    prop_oneof![
        4 => (0..6u32).prop_map(MachineOp::Switch),
        1 => Just(MachineOp::Stop),
        1 => (0..6u32).prop_map(MachineOp::Remove),
        1 => (0..6u32).prop_map(MachineOp::Register),
    ]
}

#[derive(Clone, Debug)]
enum StackOp {
    Push(usize),
    Pop,
}

fn stack_op() -> impl Strategy<Value = StackOp> {
    prop_oneof![
        3 => (0..4usize).prop_map(StackOp::Push),
        2 => Just(StackOp::Pop),
    ]
}

// "Ghost" has no configured path.
const PANEL_TYPES: [&str; 4] = ["Menu", "Settings", "Shop", "Ghost"];

struct Screen {
    name: String,
    log: Rc<RefCell<Vec<String>>>,
}

impl Panel for Screen {
    fn on_enter(&mut self) {
        self.log.borrow_mut().push(format!("enter {}", self.name));
    }

    fn on_pause(&mut self) {
        self.log.borrow_mut().push(format!("pause {}", self.name));
    }

    fn on_resume(&mut self) {
        self.log.borrow_mut().push(format!("resume {}", self.name));
    }

    fn on_exit(&mut self) {
        self.log.borrow_mut().push(format!("exit {}", self.name));
    }
}

struct ScreenLoader {
    log: Rc<RefCell<Vec<String>>>,
    loads: Rc<RefCell<Vec<String>>>,
}

impl PanelLoader for ScreenLoader {
    type Container = ();
    type Error = Infallible;

    fn instantiate(&mut self, path: &str, _: &()) -> Result<PanelRef, Infallible> {
        self.loads.borrow_mut().push(path.to_string());
        Ok(Rc::new(RefCell::new(Screen {
            name: path.to_string(),
            log: Rc::clone(&self.log),
        })))
    }
}

proptest! {
    #[test]
    fn machine_matches_model(ops in prop::collection::vec(machine_op(), 1..40)) {
        let log = Log::default();
        let mut machine: StateMachine = StateMachine::new();
        let observer_log = Rc::clone(&log);
        machine.set_observer(move |from, to, _| {
            observer_log.borrow_mut().push(Event::Observed(
                from.map(|s| s.borrow().id().get()),
                to.borrow().id().get(),
            ));
        });

        let mut registered: HashSet<u32> = (0..4).collect();
        for id in 0..4 {
            machine.register_state(tracked(id, &log)).unwrap();
        }
        let mut current: Option<u32> = None;

        for op in ops {
            let before = log.borrow().len();
            match op {
                MachineOp::Switch(id) => {
                    let result = machine.switch_to(StateId(id), &());
                    let events: Vec<Event> = log.borrow()[before..].to_vec();
                    if current == Some(id) {
                        prop_assert_eq!(result, Err(SwitchError::AlreadyActive(StateId(id))));
                        prop_assert!(events.is_empty());
                    } else if !registered.contains(&id) {
                        prop_assert_eq!(result, Err(SwitchError::UnknownState(StateId(id))));
                        prop_assert!(events.is_empty());
                    } else {
                        prop_assert!(result.is_ok());
                        let mut expected = Vec::new();
                        if let Some(old) = current {
                            expected.push(Event::Leave(old));
                        }
                        expected.push(Event::Observed(current, id));
                        expected.push(Event::Enter(id));
                        prop_assert_eq!(events, expected);
                        current = Some(id);
                    }
                }
                MachineOp::Stop => {
                    machine.stop(&());
                    let events: Vec<Event> = log.borrow()[before..].to_vec();
                    match current.take() {
                        Some(old) => prop_assert_eq!(events, vec![Event::Leave(old)]),
                        None => prop_assert!(events.is_empty()),
                    }
                }
                MachineOp::Remove(id) => {
                    let result = machine.remove_state(StateId(id));
                    if !registered.contains(&id) {
                        prop_assert!(matches!(result, Err(RegistryError::UnknownState(_))));
                    } else if current == Some(id) {
                        prop_assert!(matches!(result, Err(RegistryError::ActiveState(_))));
                    } else {
                        prop_assert!(result.is_ok());
                        registered.remove(&id);
                    }
                    prop_assert_eq!(log.borrow().len(), before);
                }
                MachineOp::Register(id) => {
                    let result = machine.register_state(tracked(id, &log));
                    if registered.insert(id) {
                        prop_assert!(result.is_ok());
                    } else {
                        prop_assert_eq!(result, Err(RegistryError::DuplicateState(StateId(id))));
                    }
                    prop_assert_eq!(log.borrow().len(), before);
                }
            }

            prop_assert_eq!(machine.current_id(), current.map(StateId));
            for id in 0..6 {
                prop_assert_eq!(machine.is_in_state(StateId(id)), current == Some(id));
            }
            let mut expected_ids: Vec<u32> = registered.iter().copied().collect();
            expected_ids.sort();
            prop_assert_eq!(
                machine.registry().ids(),
                expected_ids.into_iter().map(StateId).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn stack_matches_model(ops in prop::collection::vec(stack_op(), 1..40)) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let loads = Rc::new(RefCell::new(Vec::new()));
        let config = PanelConfig::new(vec![
            PanelInfo::new("Menu", "menu"),
            PanelInfo::new("Settings", "settings"),
            PanelInfo::new("Shop", "shop"),
        ]);
        let loader = ScreenLoader {
            log: Rc::clone(&log),
            loads: Rc::clone(&loads),
        };
        let registry = PanelRegistry::from_config(config, loader, ()).unwrap();
        let mut stack = PanelStack::new(registry);

        let mut model: Vec<&str> = Vec::new();
        let mut pushed_types: HashSet<&str> = HashSet::new();

        for op in ops {
            let before = log.borrow().len();
            match op {
                StackOp::Push(index) => {
                    let panel_type = PANEL_TYPES[index];
                    let result = stack.push(panel_type);
                    let events: Vec<String> = log.borrow()[before..].to_vec();
                    if panel_type == "Ghost" {
                        let unmapped = matches!(result, Err(PanelError::Unmapped { .. }));
                        prop_assert!(unmapped);
                        prop_assert!(events.is_empty());
                    } else {
                        prop_assert!(result.is_ok());
                        let path = panel_type.to_lowercase();
                        let mut expected = Vec::new();
                        if let Some(top) = model.last() {
                            expected.push(format!("pause {}", top.to_lowercase()));
                        }
                        expected.push(format!("enter {path}"));
                        prop_assert_eq!(events, expected);
                        model.push(panel_type);
                        pushed_types.insert(panel_type);
                    }
                }
                StackOp::Pop => {
                    let popped = stack.pop();
                    let events: Vec<String> = log.borrow()[before..].to_vec();
                    match model.pop() {
                        Some(top) => {
                            prop_assert!(popped.is_some());
                            let mut expected = vec![format!("exit {}", top.to_lowercase())];
                            if let Some(next) = model.last() {
                                expected.push(format!("resume {}", next.to_lowercase()));
                            }
                            prop_assert_eq!(events, expected);
                        }
                        None => {
                            prop_assert!(popped.is_none());
                            prop_assert!(events.is_empty());
                        }
                    }
                }
            }

            prop_assert_eq!(stack.panel_types(), model.clone());
            prop_assert_eq!(stack.len(), model.len());
            prop_assert_eq!(loads.borrow().len(), pushed_types.len());
        }
    }
}
