//! Text grammars for input definitions
//!
//! Two related grammars turn human-typed strings into inputs:
//!
//! - [`InputDescriptor::parse`] handles binding definitions such as `"A"`,
//!   `"scancode 0x1d"` or `"mouse button left"`.
//! - [`parse_key_name`] handles the older single-key spellings used by the
//!   fixed movement keys, e.g. `"left-ctrl"` or `"scancode:224"`.
//!
//! Both are pure: invalid text yields `Invalid`/`None`, never an error.

use super::types::{mouse, InputDescriptor, Scancode};
use crate::util::{is_c_space, leading_c_integer, parse_c_integer};

/// Strip a case-insensitive keyword from the front of `text`
///
/// The keyword must be a whole word: it has to be followed by the end of the
/// string or a non-letter, so `"scrolllock"` doesn't match `"sc"`.
fn strip_keyword<'t>(text: &'t str, keyword: &str) -> Option<&'t str> {
    let rest = strip_prefix_ignore_case(text, keyword)?;
    match rest.chars().next() {
        Some(ch) if ch.is_alphabetic() => None,
        _ => Some(rest),
    }
}

fn strip_prefix_ignore_case<'t>(text: &'t str, prefix: &str) -> Option<&'t str> {
    let head = text.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &text[prefix.len()..])
}

fn only_space(text: &str) -> bool {
    text.chars().all(is_c_space)
}

impl InputDescriptor {
    /// Parse a binding definition
    ///
    /// Leading whitespace is skipped, then the first word selects the device:
    ///
    /// - `scancode`/`scan`/`sc` followed by an integer (`0x` hex, leading-0
    ///   octal or decimal) below [`NUM_SCANCODES`](super::NUM_SCANCODES)
    /// - `mouse button` followed by `left`, `middle`, `right` or a number
    /// - `control`: controller inputs, not resolvable from text yet
    /// - anything else is a key name such as `"Left Ctrl"`
    ///
    /// Text left over after a complete definition makes it invalid.
    pub fn parse(definition: &str) -> InputDescriptor {
        let text = definition.trim_start_matches(is_c_space);

        for keyword in ["scancode", "scan", "sc"] {
            if let Some(rest) = strip_keyword(text, keyword) {
                return parse_scancode_number(rest);
            }
        }
        if let Some(rest) = strip_keyword(text, "mouse") {
            return parse_mouse_button(rest);
        }
        if strip_keyword(text, "control").is_some() {
            tracing::debug!("Controller bindings are not supported: {:?}", definition);
            return InputDescriptor::Invalid;
        }

        match Scancode::from_name(text.trim_end_matches(is_c_space)) {
            Some(scancode) => InputDescriptor::Keyboard(scancode),
            None => InputDescriptor::Invalid,
        }
    }
}

fn parse_scancode_number(text: &str) -> InputDescriptor {
    let Some((value, end)) = leading_c_integer(text) else {
        return InputDescriptor::Invalid;
    };
    if !only_space(&text[end..]) {
        return InputDescriptor::Invalid;
    }
    match Scancode::from_index(value) {
        Some(scancode) => InputDescriptor::Keyboard(scancode),
        None => InputDescriptor::Invalid,
    }
}

fn parse_mouse_button(text: &str) -> InputDescriptor {
    let text = text.trim_start_matches(is_c_space);
    let Some(rest) = strip_keyword(text, "button") else {
        return InputDescriptor::Invalid;
    };
    let rest = rest.trim_start_matches(is_c_space);

    for (keyword, button) in [
        ("left", mouse::LEFT),
        ("middle", mouse::MIDDLE),
        ("right", mouse::RIGHT),
    ] {
        if let Some(tail) = strip_keyword(rest, keyword) {
            return if only_space(tail) {
                InputDescriptor::MouseButton(button)
            } else {
                InputDescriptor::Invalid
            };
        }
    }

    match leading_c_integer(rest) {
        Some((value, end)) if only_space(&rest[end..]) => match u8::try_from(value) {
            Ok(button) => InputDescriptor::MouseButton(button),
            Err(_) => InputDescriptor::Invalid,
        },
        _ => InputDescriptor::Invalid,
    }
}

/// Resolve a legacy single-key name to a scancode
///
/// - a single character is always a key name, so `"4"` is the 4 key
/// - a whole integer below the scancode count is taken as a raw scancode
/// - `scancode` plus one of `:`, `_`, `-` or a space forces the rest to be read
///   as a scancode number (or name)
/// - otherwise `-` and `_` are read as spaces, so `"left-ctrl"` and
///   `"left_ctrl"` both mean `"Left Ctrl"`
pub fn parse_key_name(name: &str) -> Option<Scancode> {
    let mut chars = name.chars();
    if let (Some(_), None) = (chars.next(), chars.next()) {
        return Scancode::from_name(name);
    }

    if let Some(scancode) = parse_c_integer(name).and_then(Scancode::from_index) {
        return Some(scancode);
    }

    if let Some(tail) = strip_prefix_ignore_case(name, "scancode") {
        let mut tail_chars = tail.chars();
        if let Some(':' | '_' | '-' | ' ') = tail_chars.next() {
            let forced = tail_chars.as_str();
            return match parse_c_integer(forced) {
                Some(value) => Scancode::from_index(value),
                None => Scancode::from_name(forced),
            };
        }
    }

    Scancode::from_name(&name.replace(['-', '_'], " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_keyword_needs_word_boundary() {
        assert_eq!(strip_keyword("sc 4", "sc"), Some(" 4"));
        assert_eq!(strip_keyword("SC4", "sc"), Some("4"));
        assert_eq!(strip_keyword("ScrollLock", "sc"), None);
        assert_eq!(strip_keyword("s", "sc"), None);
        assert_eq!(strip_keyword("mouse", "mouse"), Some(""));
    }

    #[test]
    fn test_scancode_prefixes() {
        let expected = InputDescriptor::Keyboard(Scancode(4));
        assert_eq!(InputDescriptor::parse("scancode 4"), expected);
        assert_eq!(InputDescriptor::parse("scan 4"), expected);
        assert_eq!(InputDescriptor::parse("  SC 0x4  "), expected);
        assert_eq!(InputDescriptor::parse("sc 04"), expected);
        assert_eq!(InputDescriptor::parse("scancode4"), expected);
    }

    #[test]
    fn test_scancode_rejects_bad_numbers() {
        for text in ["scancode", "scancode 512", "scancode -1", "sc 4 5", "sc 4x", "sc four"] {
            assert_eq!(InputDescriptor::parse(text), InputDescriptor::Invalid, "{text}");
        }
    }

    #[test]
    fn test_key_names_that_start_like_prefixes() {
        assert_eq!(
            InputDescriptor::parse("ScrollLock"),
            InputDescriptor::Keyboard(Scancode(71))
        );
        assert_eq!(
            InputDescriptor::parse("Space"),
            InputDescriptor::Keyboard(Scancode::SPACE)
        );
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(
            InputDescriptor::parse("mouse button left"),
            InputDescriptor::MouseButton(mouse::LEFT)
        );
        assert_eq!(
            InputDescriptor::parse("Mouse Button Right "),
            InputDescriptor::MouseButton(mouse::RIGHT)
        );
        assert_eq!(
            InputDescriptor::parse("mouse button middle"),
            InputDescriptor::MouseButton(mouse::MIDDLE)
        );
        assert_eq!(
            InputDescriptor::parse("mouse button 5"),
            InputDescriptor::MouseButton(5)
        );
    }

    #[test]
    fn test_mouse_rejects_malformed() {
        for text in [
            "mouse",
            "mouse left",
            "mouse button",
            "mouse button leftish",
            "mouse button left 2",
            "mouse button 300",
            "mouse button -1",
            "mousebutton 1",
        ] {
            assert_eq!(InputDescriptor::parse(text), InputDescriptor::Invalid, "{text}");
        }
    }

    #[test]
    fn test_control_prefix_is_unsupported() {
        assert_eq!(InputDescriptor::parse("control button a"), InputDescriptor::Invalid);
    }

    #[test]
    fn test_literal_names() {
        assert_eq!(InputDescriptor::parse("a"), InputDescriptor::parse("A"));
        assert_eq!(
            InputDescriptor::parse("left ctrl"),
            InputDescriptor::Keyboard(Scancode::LEFT_CTRL)
        );
        assert_eq!(InputDescriptor::parse("no such key"), InputDescriptor::Invalid);
        assert_eq!(InputDescriptor::parse(""), InputDescriptor::Invalid);
    }

    #[test]
    fn test_key_name_single_character() {
        assert_eq!(parse_key_name("a"), Some(Scancode::A));
        assert_eq!(parse_key_name("A"), Some(Scancode::A));
        assert_eq!(parse_key_name("4"), Some(Scancode::NUM_4));
        assert_eq!(parse_key_name("-"), Some(Scancode(45)));
    }

    #[test]
    fn test_key_name_integers() {
        assert_eq!(parse_key_name("0x4"), Some(Scancode(4)));
        assert_eq!(parse_key_name("42"), Some(Scancode(42)));
        assert_eq!(parse_key_name("010"), Some(Scancode(8)));
        assert_eq!(parse_key_name("600"), None);
    }

    #[test]
    fn test_key_name_forced_scancode() {
        assert_eq!(parse_key_name("scancode:4"), Some(Scancode(4)));
        assert_eq!(parse_key_name("SCANCODE_0x1d"), Some(Scancode(29)));
        assert_eq!(parse_key_name("scancode-224"), Some(Scancode::LEFT_CTRL));
        assert_eq!(parse_key_name("scancode 4"), Some(Scancode(4)));
        assert_eq!(parse_key_name("scancode:999"), None);
    }

    #[test]
    fn test_key_name_separators_normalized() {
        assert_eq!(parse_key_name("left-ctrl"), Some(Scancode::LEFT_CTRL));
        assert_eq!(parse_key_name("left_ctrl"), Some(Scancode::LEFT_CTRL));
        assert_eq!(parse_key_name("Right Ctrl"), Some(Scancode::RIGHT_CTRL));
        assert_eq!(parse_key_name("keypad_enter"), Some(Scancode(88)));
        assert_eq!(parse_key_name(""), None);
    }
}
