//! Panel navigation stack.
//!
//! Panels are navigable screens with an enter/pause/resume/exit lifecycle.
//! The pieces, leaves first:
//!
//! - [`PanelConfig`]: the `panel type -> load path` table, read once
//! - [`PanelLoader`]: host seam that turns a path into a live panel
//! - [`PanelRegistry`]: permanent per-type instance cache
//! - [`PanelStack`]: the stack itself
//!
//! # Example
//!
//! ```rust
//! use modestack::panel::{Panel, PanelLoader, PanelRef, PanelRegistry, PanelStack};
//! use std::cell::RefCell;
//! use std::convert::Infallible;
//! use std::rc::Rc;
//!
//! struct Screen;
//!
//! impl Panel for Screen {
//!     fn on_enter(&mut self) {}
//!     fn on_exit(&mut self) {}
//! }
//!
//! struct Loader;
//!
//! impl PanelLoader for Loader {
//!     type Container = ();
//!     type Error = Infallible;
//!
//!     fn instantiate(&mut self, _path: &str, _parent: &()) -> Result<PanelRef, Infallible> {
//!         Ok(Rc::new(RefCell::new(Screen)))
//!     }
//! }
//!
//! let config = r#"{ "panelInfoList": [ { "panelType": "Settings", "path": "panels/settings" } ] }"#;
//! let registry = PanelRegistry::from_json(config, Loader, ()).unwrap();
//! let mut stack = PanelStack::new(registry);
//!
//! let settings = stack.push("Settings").unwrap();
//! stack.pop();
//! let again = stack.push("Settings").unwrap();
//! assert!(Rc::ptr_eq(&settings, &again));
//! ```

mod config;
mod error;
mod loader;
mod registry;
mod stack;
mod unit;

pub use config::{PanelConfig, PanelInfo, PanelPathTable};
pub use error::{ConfigViolation, PanelConfigError, PanelError};
pub use loader::PanelLoader;
pub use registry::PanelRegistry;
pub use stack::PanelStack;
pub use unit::{Panel, PanelRef};
