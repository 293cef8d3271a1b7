//! Input bindings
//!
//! This module turns binding definitions into inputs and routes device events
//! to named controls:
//! - Parses definition strings (`"A"`, `"scancode 4"`, `"mouse button left"`)
//! - Resolves legacy key names for the fixed movement keys
//! - Owns the controls and the scancode/mouse/controller lookup tables
//!
//! # Architecture
//!
//! ```text
//! definition → InputDescriptor::parse() → Bindings::bind() → table slot
//! DeviceEvent → Bindings::fire_event() → Control::control_state()
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut bindings = Bindings::new();
//! bindings.add_fn_control("jump", |state| println!("jump {state}"));
//! bindings.bind_all(["Space", "mouse button right"], "jump");
//! bindings.fire_event(DeviceEvent::key_down(Scancode::SPACE));
//! ```

mod binding;
mod config;
mod context;
mod defaults;
#[allow(clippy::module_inception)]
mod keymap;
mod scancodes;
mod types;

pub use binding::{Control, FnControl, CONTROL_ACTIVE, CONTROL_RELEASED};
pub use config::parse_key_name;
pub use context::{ControlMode, DeviceEvent};
pub use defaults::Keys;
pub use keymap::{Bindings, ControlId};
pub use types::{
    mouse, InputDescriptor, Scancode, MAX_CONTROLLER_AXES, MAX_CONTROLLER_BUTTONS,
    MAX_MOUSE_BUTTONS, NUM_SCANCODES,
};
