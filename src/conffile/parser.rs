//! Character-level state machine for the configuration file format

use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

/// Receiver for structural events produced by [`parse`]
///
/// Only [`value_set`](ConfHandler::value_set) is required. Every other hook has
/// a default that either does nothing or forwards somewhere sensible.
pub trait ConfHandler {
    /// Called once before the first byte is read
    fn parse_start(&mut self) {}

    /// Called once after the final line has been flushed
    fn parse_end(&mut self) {}

    /// A `[section]` header was read
    fn section_start(&mut self, _section: &str) {}

    /// A `key = value` line was read. `value` is empty for `key =`.
    fn value_set(&mut self, key: &str, value: &str);

    /// A key with no `=` at all (e.g. `fullscreen` or `fullscreen ; comment`)
    fn blank_value(&mut self, key: &str) {
        self.value_set(key, "");
    }

    /// A line that could not be parsed. `line_number` starts at 1.
    fn invalid_line(&mut self, line: &str, line_number: usize) {
        tracing::warn!("Could not parse line {}: {}", line_number, line);
    }
}

/// Parser states. A line always starts in `InitWhitespace`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum State {
    /// Skipping whitespace at the start of a line
    InitWhitespace,
    /// Inside a key (any non-whitespace start that isn't `[` or `;`)
    Key,
    /// Found `[`, waiting for the section name
    Section,
    /// Inside the section name
    SectionKey,
    /// Found the closing `]`
    AfterSection,
    /// Found `=` after a key
    AfterEquals,
    /// Inside a value
    Value,
    /// After `;`, everything up to the newline is ignored
    Comment,
    /// The line is malformed, reported once it ends
    Invalid,
}

/// Event to send to the handler, sliced out of the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Emit {
    BlankValue,
    SectionStart,
    ValueSet,
    EmptyValue,
    InvalidLine,
}

/// Line-relative offsets of the key and value. End markers only advance on
/// non-whitespace, so leading and trailing whitespace never ends up in a slice.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub key_start: usize,
    pub key_end: usize,
    pub value_start: usize,
    pub value_end: usize,
}

/// C `isspace` in the default locale
#[inline]
fn is_space(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

impl State {
    /// Consume one non-newline byte. `pos` is the line length after the byte
    /// was appended, so the byte itself lives at `pos - 1`.
    pub(crate) fn advance(self, byte: u8, pos: usize, span: &mut Span) -> (State, Option<Emit>) {
        match self {
            State::InitWhitespace => match byte {
                b if is_space(b) => (self, None),
                b'[' => {
                    span.key_start = pos;
                    span.key_end = pos;
                    (State::Section, None)
                }
                b';' => (State::Comment, None),
                _ => {
                    span.key_start = pos - 1;
                    span.key_end = pos;
                    (State::Key, None)
                }
            },
            State::Key => match byte {
                b';' => (State::Comment, Some(Emit::BlankValue)),
                b'=' => (State::AfterEquals, None),
                b if is_space(b) => (self, None),
                _ => {
                    span.key_end = pos;
                    (self, None)
                }
            },
            State::Section => match byte {
                b']' => {
                    span.key_start = 0;
                    span.key_end = 0;
                    (State::AfterSection, None)
                }
                b if is_space(b) => (self, None),
                _ => {
                    span.key_start = pos - 1;
                    span.key_end = pos;
                    (State::SectionKey, None)
                }
            },
            State::SectionKey => match byte {
                b']' => (State::AfterSection, None),
                b';' => (State::Invalid, None),
                b if is_space(b) => (self, None),
                _ => {
                    span.key_end = pos;
                    (self, None)
                }
            },
            State::AfterSection => match byte {
                b';' => (State::Comment, Some(Emit::SectionStart)),
                b if is_space(b) => (self, None),
                _ => (State::Invalid, None),
            },
            State::AfterEquals => match byte {
                b if is_space(b) => (self, None),
                b';' => (State::Comment, Some(Emit::EmptyValue)),
                _ => {
                    span.value_start = pos - 1;
                    span.value_end = pos;
                    (State::Value, None)
                }
            },
            State::Value => match byte {
                b if is_space(b) => (self, None),
                b';' => (State::Comment, Some(Emit::ValueSet)),
                _ => {
                    span.value_end = pos;
                    (self, None)
                }
            },
            State::Comment | State::Invalid => (self, None),
        }
    }

    /// The event (if any) fired when a line ends in this state
    pub(crate) fn at_line_end(self) -> Option<Emit> {
        match self {
            State::InitWhitespace | State::Comment => None,
            State::Key => Some(Emit::BlankValue),
            State::Section | State::SectionKey | State::Invalid => Some(Emit::InvalidLine),
            State::AfterSection => Some(Emit::SectionStart),
            State::AfterEquals => Some(Emit::EmptyValue),
            State::Value => Some(Emit::ValueSet),
        }
    }
}

/// Bytes of the line being parsed plus the slice offsets into it
#[derive(Debug, Default)]
struct LineBuffer {
    bytes: Vec<u8>,
    span: Span,
}

impl LineBuffer {
    fn slice(&self, start: usize, end: usize) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes[start..end])
    }

    fn key(&self) -> Cow<'_, str> {
        self.slice(self.span.key_start, self.span.key_end)
    }

    fn value(&self) -> Cow<'_, str> {
        self.slice(self.span.value_start, self.span.value_end)
    }

    fn raw(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    fn clear(&mut self) {
        self.bytes.clear();
        self.span = Span::default();
    }

    fn send<H: ConfHandler + ?Sized>(&self, emit: Emit, line_number: usize, handler: &mut H) {
        match emit {
            Emit::BlankValue => handler.blank_value(&self.key()),
            Emit::SectionStart => handler.section_start(&self.key()),
            Emit::ValueSet => handler.value_set(&self.key(), &self.value()),
            Emit::EmptyValue => handler.value_set(&self.key(), ""),
            Emit::InvalidLine => handler.invalid_line(&self.raw(), line_number),
        }
    }
}

/// Parse a configuration stream, feeding events to `handler`
///
/// `\n`, `\r\n` and a lone `\r` all end a line. End of input flushes the last
/// line as if a newline had been read. Malformed lines never abort the parse;
/// the only error returned is a read failure from the underlying stream, in
/// which case `parse_end` is not called.
pub fn parse<R: Read, H: ConfHandler + ?Sized>(reader: R, handler: &mut H) -> io::Result<()> {
    let mut bytes = BufReader::new(reader).bytes().peekable();
    let mut state = State::InitWhitespace;
    let mut line = LineBuffer::default();
    let mut line_number = 1;

    handler.parse_start();

    loop {
        let byte = match bytes.next() {
            None => None,
            Some(Ok(b'\r')) => {
                if let Some(Ok(b'\n')) = bytes.peek() {
                    bytes.next();
                }
                Some(b'\n')
            }
            Some(Ok(b)) => Some(b),
            Some(Err(e)) => return Err(e),
        };

        match byte {
            Some(b'\n') | None => {
                if let Some(emit) = state.at_line_end() {
                    line.send(emit, line_number, handler);
                }
                state = State::InitWhitespace;
                line.clear();
                line_number += 1;

                if byte.is_none() {
                    break;
                }
            }
            Some(b) => {
                line.bytes.push(b);
                let (next, emit) = state.advance(b, line.bytes.len(), &mut line.span);
                if let Some(emit) = emit {
                    line.send(emit, line_number, handler);
                }
                state = next;
            }
        }
    }

    handler.parse_end();
    Ok(())
}

/// Parse the file at `path`
///
/// Returns `Ok(false)` if the file could not be opened (it probably doesn't
/// exist), `Ok(true)` once it has been fully parsed, and `Err` if it was opened
/// but reading it failed.
pub fn parse_file<H: ConfHandler + ?Sized>(
    path: impl AsRef<Path>,
    handler: &mut H,
) -> io::Result<bool> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            tracing::debug!("Unable to open {}: {}", path.display(), e);
            return Ok(false);
        }
    };

    parse(file, handler)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(state: State, input: &str) -> (State, Span, Vec<Emit>) {
        let mut span = Span::default();
        let mut state = state;
        let mut emitted = Vec::new();
        for (i, b) in input.bytes().enumerate() {
            let (next, emit) = state.advance(b, i + 1, &mut span);
            emitted.extend(emit);
            state = next;
        }
        (state, span, emitted)
    }

    #[test]
    fn test_init_whitespace_transitions() {
        assert_eq!(run(State::InitWhitespace, "  \t").0, State::InitWhitespace);
        assert_eq!(run(State::InitWhitespace, "[").0, State::Section);
        assert_eq!(run(State::InitWhitespace, ";").0, State::Comment);
        assert_eq!(run(State::InitWhitespace, "k").0, State::Key);
        // `=` and `]` are ordinary key characters at the start of a line
        assert_eq!(run(State::InitWhitespace, "=").0, State::Key);
        assert_eq!(run(State::InitWhitespace, "]").0, State::Key);
    }

    #[test]
    fn test_key_end_skips_whitespace() {
        let (state, span, emitted) = run(State::InitWhitespace, "  my key  ");
        assert_eq!(state, State::Key);
        assert!(emitted.is_empty());
        assert_eq!((span.key_start, span.key_end), (2, 8));
    }

    #[test]
    fn test_key_then_comment_emits_blank_value() {
        let (state, _, emitted) = run(State::InitWhitespace, "key;");
        assert_eq!(state, State::Comment);
        assert_eq!(emitted, vec![Emit::BlankValue]);
    }

    #[test]
    fn test_key_equals_value() {
        let (state, span, emitted) = run(State::InitWhitespace, "k = v w ");
        assert_eq!(state, State::Value);
        assert!(emitted.is_empty());
        assert_eq!((span.key_start, span.key_end), (0, 1));
        assert_eq!((span.value_start, span.value_end), (4, 7));
    }

    #[test]
    fn test_after_equals_comment_emits_empty_value() {
        let (state, _, emitted) = run(State::InitWhitespace, "k = ;");
        assert_eq!(state, State::Comment);
        assert_eq!(emitted, vec![Emit::EmptyValue]);
    }

    #[test]
    fn test_value_comment_emits_value_set() {
        let (_, _, emitted) = run(State::InitWhitespace, "k=v;c=d");
        assert_eq!(emitted, vec![Emit::ValueSet]);
    }

    #[test]
    fn test_empty_section() {
        let (state, span, _) = run(State::InitWhitespace, "[ ]");
        assert_eq!(state, State::AfterSection);
        assert_eq!((span.key_start, span.key_end), (0, 0));
    }

    #[test]
    fn test_section_with_semicolon_is_invalid() {
        assert_eq!(run(State::InitWhitespace, "[sec;").0, State::Invalid);
        assert_eq!(run(State::InitWhitespace, "[sec] x").0, State::Invalid);
    }

    #[test]
    fn test_section_then_comment_emits_section_start() {
        let (state, span, emitted) = run(State::InitWhitespace, "[ a b ] ;");
        assert_eq!(state, State::Comment);
        assert_eq!(emitted, vec![Emit::SectionStart]);
        assert_eq!((span.key_start, span.key_end), (2, 5));
    }

    #[test]
    fn test_comment_and_invalid_absorb_everything() {
        assert_eq!(run(State::Comment, "[]=;x").0, State::Comment);
        assert_eq!(run(State::Invalid, "[]=;x").0, State::Invalid);
    }

    #[test]
    fn test_line_end_actions() {
        assert_eq!(State::InitWhitespace.at_line_end(), None);
        assert_eq!(State::Comment.at_line_end(), None);
        assert_eq!(State::Key.at_line_end(), Some(Emit::BlankValue));
        assert_eq!(State::Section.at_line_end(), Some(Emit::InvalidLine));
        assert_eq!(State::SectionKey.at_line_end(), Some(Emit::InvalidLine));
        assert_eq!(State::Invalid.at_line_end(), Some(Emit::InvalidLine));
        assert_eq!(State::AfterSection.at_line_end(), Some(Emit::SectionStart));
        assert_eq!(State::AfterEquals.at_line_end(), Some(Emit::EmptyValue));
        assert_eq!(State::Value.at_line_end(), Some(Emit::ValueSet));
    }

    #[test]
    fn test_is_space_matches_c_locale() {
        for b in [b' ', b'\t', b'\n', b'\r', 0x0b, 0x0c] {
            assert!(is_space(b));
        }
        assert!(!is_space(b'a'));
        assert!(!is_space(0));
    }
}
