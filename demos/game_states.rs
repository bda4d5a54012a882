//! Game Mode State Machine
//!
//! This example drives a small game loop through its top-level modes.
//!
//! Key concepts:
//! - States implementing the lifecycle trait
//! - Payload passed to leave/enter hooks
//! - Observer reacting to every switch
//! - Frame scheduler forwarding ticks to the current state
//!
//! Run with: RUST_LOG=debug cargo run --example game_states

use modestack::builder::{shared, StateMachineBuilder};
use modestack::core::{State, StateId, StateRef};
use modestack::machine::{StateMachine, SwitchError, Tick};
use tracing_subscriber::EnvFilter;

const TITLE: StateId = StateId(1);
const PLAYING: StateId = StateId(2);
const GAME_OVER: StateId = StateId(3);

/// Payload carried by every switch: (level, reason).
type Switch = (u32, &'static str);

struct Title;

impl State<Switch> for Title {
    fn id(&self) -> StateId {
        TITLE
    }

    fn name(&self) -> &str {
        "Title"
    }

    fn on_enter(&mut self, _: &StateMachine<Switch>, _: Option<&StateRef<Switch>>, _: &Switch) {
        println!("  [Title] press start");
    }

    fn on_leave(&mut self, _: Option<&StateRef<Switch>>, (_, reason): &Switch) {
        println!("  [Title] leaving: {reason}");
    }
}

#[derive(Default)]
struct Playing {
    frames: u32,
}

impl State<Switch> for Playing {
    fn id(&self) -> StateId {
        PLAYING
    }

    fn name(&self) -> &str {
        "Playing"
    }

    fn on_enter(
        &mut self,
        machine: &StateMachine<Switch>,
        _: Option<&StateRef<Switch>>,
        (level, _): &Switch,
    ) {
        self.frames = 0;
        println!(
            "  [Playing] level {level} (current = {:?})",
            machine.current_id()
        );
    }

    fn on_leave(&mut self, _: Option<&StateRef<Switch>>, (_, reason): &Switch) {
        println!("  [Playing] {} frames played, {reason}", self.frames);
    }

    fn on_update(&mut self) {
        self.frames += 1;
    }
}

struct GameOver;

impl State<Switch> for GameOver {
    fn id(&self) -> StateId {
        GAME_OVER
    }

    fn name(&self) -> &str {
        "GameOver"
    }

    fn on_enter(&mut self, _: &StateMachine<Switch>, _: Option<&StateRef<Switch>>, _: &Switch) {
        println!("  [GameOver] thanks for playing");
    }

    fn on_leave(&mut self, _: Option<&StateRef<Switch>>, _: &Switch) {}
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Game Mode State Machine ===\n");

    let mut machine = StateMachineBuilder::<Switch>::new()
        .states([shared(Title), shared(Playing::default()), shared(GameOver)])
        .observer(|from, to, _| {
            let from = from.map(|s| s.borrow().name().to_string());
            println!("observer: {:?} -> {}", from, to.borrow().name());
        })
        .initial(TITLE, (0, "boot"))
        .build()
        .expect("states are unique");

    machine
        .switch_to(PLAYING, &(1, "start pressed"))
        .expect("playing is registered");

    // One second of frames from the host scheduler
    for _ in 0..60 {
        machine.dispatch(Tick::Update);
        machine.dispatch(Tick::LateUpdate);
    }

    match machine.switch_to(PLAYING, &(1, "again")) {
        Err(SwitchError::AlreadyActive(id)) => println!("already in {id}, ignored"),
        other => println!("unexpected: {other:?}"),
    }

    machine
        .switch_to(GAME_OVER, &(1, "out of lives"))
        .expect("game over is registered");
    machine.stop(&(0, "shutdown"));

    println!("\nPath: {:?}", machine.history().path());
    println!("\n=== Example Complete ===");
}
