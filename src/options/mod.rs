//! Typed, defaultable configuration options
//!
//! Each option kind knows how to parse itself from config text, reset to its
//! default and render itself back out for a freshly written config file.
//!
//! Options are plain fields of whatever settings struct declares them. The
//! registry borrows them through [`OptionRef`], a closed enum over the option
//! kinds, so dispatch is an exhaustive `match` rather than a trait object.

mod error;
mod option;
mod value;

pub use error::InvalidValue;
pub use option::{
    BoolOption, ConfOption, IntOption, OptionRef, RangedOption, ResolutionOption, StringOption,
    WindowModeOption,
};
pub use value::{OptionValue, Resolution, WindowMode};
