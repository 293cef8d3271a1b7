//! Line-oriented INI-style configuration file parser
//!
//! This module knows nothing about what the keys mean. It turns a byte stream
//! into structural events and hands them to a [`ConfHandler`]:
//!
//! ```text
//! bytes → parse() → section_start / value_set / blank_value / invalid_line
//! ```
//!
//! # Grammar
//!
//! ```ini
//! ; comment
//! root_key = value
//! [section]
//! bare_key            ; blank value
//! key = value ; trailing comment
//! ```
//!
//! Malformed lines (unterminated `[`, text after `]`, `;` inside a section
//! header) are reported through [`ConfHandler::invalid_line`] and skipped.

mod event;
mod parser;

pub use event::{ConfEvent, EventLog};
pub use parser::{parse, parse_file, ConfHandler};
