//! Panel Navigation
//!
//! This example walks a menu hierarchy with the panel stack.
//!
//! Key concepts:
//! - Panel path table loaded from JSON configuration
//! - Host loader instantiating panels under a shared container
//! - Pause/resume instead of teardown for covered panels
//! - Cached instances reused across pushes
//!
//! Run with: RUST_LOG=debug cargo run --example panel_navigation

use modestack::panel::{Panel, PanelError, PanelLoader, PanelRef, PanelRegistry, PanelStack};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

const PANELS: &str = r#"{
    "panelInfoList": [
        { "panelType": "MainMenu", "path": "panels/main_menu" },
        { "panelType": "Settings", "path": "panels/settings" },
        { "panelType": "Shop", "path": "panels/shop" },
        { "panelType": "Credits", "path": "missing/credits" }
    ]
}"#;

struct Screen {
    path: String,
}

impl Panel for Screen {
    fn on_enter(&mut self) {
        println!("  show   {}", self.path);
    }

    fn on_pause(&mut self) {
        println!("  pause  {}", self.path);
    }

    fn on_resume(&mut self) {
        println!("  resume {}", self.path);
    }

    fn on_exit(&mut self) {
        println!("  hide   {}", self.path);
    }
}

#[derive(Debug)]
struct MissingAsset(String);

impl fmt::Display for MissingAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no asset at {}", self.0)
    }
}

impl std::error::Error for MissingAsset {}

/// Stand-in for the host's resource system.
struct AssetLoader {
    loads: usize,
}

impl PanelLoader for AssetLoader {
    type Container = String;
    type Error = MissingAsset;

    fn instantiate(&mut self, path: &str, canvas: &String) -> Result<PanelRef, MissingAsset> {
        if path.starts_with("missing/") {
            return Err(MissingAsset(path.to_string()));
        }
        self.loads += 1;
        println!("  load   {path} under {canvas}");
        Ok(Rc::new(RefCell::new(Screen {
            path: path.to_string(),
        })))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Panel Navigation ===\n");

    let registry = PanelRegistry::from_json(PANELS, AssetLoader { loads: 0 }, "Canvas".into())?;
    let mut stack = PanelStack::new(registry);

    stack.push("MainMenu")?;
    stack.push("Settings")?;
    stack.pop();
    stack.push("Shop")?;
    stack.pop();
    stack.push("Settings")?;

    match stack.push("Credits") {
        Err(err @ PanelError::Instantiate { .. }) => println!("  skipped: {err}"),
        other => println!("  unexpected: {:?}", other.map(|_| ())),
    }

    println!("\nStack (bottom to top): {:?}", stack.panel_types());
    println!("Panels loaded: {}", stack.registry().loader().loads);

    while stack.pop().is_some() {}
    println!("Stack empty: {}", stack.is_empty());

    println!("\n=== Example Complete ===");
    Ok(())
}
