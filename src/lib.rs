//! Abuse-SDL configuration
//!
//! This crate reads and writes the game's `abuserc` file and resolves control
//! bindings:
//! - [`conffile`]: streaming parser for the INI-style file format
//! - [`options`]: typed options with defaults and validation
//! - [`settings`]: section registry and the option bundles it fills
//! - [`keymap`]: input definitions, key names and the binding table

pub mod cli;
pub mod conffile;
pub mod config;
pub mod config_paths;
pub mod keymap;
pub mod options;
pub mod settings;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use config::{load_settings, ConfigError};
pub use keymap::{Bindings, Control, InputDescriptor, Scancode};
pub use options::{InvalidValue, Resolution, WindowMode};
pub use settings::{Flags, RcParser, RunMode, Settings};
