//! Settings registry and the option bundles stored in the rc file
//!
//! [`RcParser`] borrows options from an owning struct such as [`Settings`] and
//! routes parsed `key = value` lines to them by section. Root-level keys that
//! the root section doesn't declare fall back to a default section, so a flat
//! file without headers configures the `[game]` bundle.

mod bundle;
mod flags;
mod registry;

pub use bundle::{default_game_window_mode, AbuseOptions, Settings, RC_HEADER};
pub use flags::{Flags, RunMode};
pub use registry::{RcParser, DEFAULT_SECTION, ROOT_SECTION};
