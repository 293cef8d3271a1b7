//! Owned structural events and a handler that records them

use std::io::{self, Read};

use super::parser::{parse, ConfHandler};

/// One structural event, as delivered to a [`ConfHandler`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfEvent {
    SectionStart(String),
    ValueSet { key: String, value: String },
    BlankValue(String),
    InvalidLine { line: String, line_number: usize },
}

impl ConfEvent {
    pub fn section(name: &str) -> Self {
        ConfEvent::SectionStart(name.to_string())
    }

    pub fn value(key: &str, value: &str) -> Self {
        ConfEvent::ValueSet {
            key: key.to_string(),
            value: value.to_string(),
        }
    }

    pub fn blank(key: &str) -> Self {
        ConfEvent::BlankValue(key.to_string())
    }
}

/// Handler that keeps every event in order
///
/// Useful for tooling and tests; blank values are recorded as
/// [`ConfEvent::BlankValue`] rather than being folded into `ValueSet`.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<ConfEvent>,
    pub started: bool,
    pub finished: bool,
}

impl EventLog {
    /// Parse `reader` and return the recorded log
    pub fn record<R: Read>(reader: R) -> io::Result<Self> {
        let mut log = Self::default();
        parse(reader, &mut log)?;
        Ok(log)
    }

    /// Events from an in-memory string
    pub fn from_text(text: &str) -> io::Result<Vec<ConfEvent>> {
        Self::record(text.as_bytes()).map(|log| log.events)
    }
}

impl ConfHandler for EventLog {
    fn parse_start(&mut self) {
        self.started = true;
    }

    fn parse_end(&mut self) {
        self.finished = true;
    }

    fn section_start(&mut self, section: &str) {
        self.events.push(ConfEvent::section(section));
    }

    fn value_set(&mut self, key: &str, value: &str) {
        self.events.push(ConfEvent::value(key, value));
    }

    fn blank_value(&mut self, key: &str) {
        self.events.push(ConfEvent::blank(key));
    }

    fn invalid_line(&mut self, line: &str, line_number: usize) {
        self.events.push(ConfEvent::InvalidLine {
            line: line.to_string(),
            line_number,
        });
    }
}
