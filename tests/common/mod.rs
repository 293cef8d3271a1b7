//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use abuserc::conffile::{ConfEvent, EventLog};
use abuserc::keymap::Control;

/// Sample file exercising whitespace, comments and section headers
pub const SAMPLE_CONF: &str = "; Example file
  with = spaces
line=compact
this line=compact with comment;comment
padding =end ;comment
withcomment;=value
with whitespace ;
[ section with padding ]
[compact]
";

/// Structural events for `text`
pub fn events(text: &str) -> Vec<ConfEvent> {
    EventLog::from_text(text).expect("in-memory reads cannot fail")
}

/// Write `text` to an rc file in `dir`, returning its path
pub fn write_rc(dir: &Path, text: &str) -> PathBuf {
    let path = dir.join("abuserc");
    fs::write(&path, text).expect("write rc file");
    path
}

/// Control that appends every state it receives to a shared log
pub struct Recorder(pub Rc<RefCell<Vec<i16>>>);

impl Recorder {
    pub fn new() -> (Self, Rc<RefCell<Vec<i16>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (Recorder(Rc::clone(&log)), log)
    }
}

impl Control for Recorder {
    fn control_state(&mut self, state: i16) {
        self.0.borrow_mut().push(state);
    }
}
