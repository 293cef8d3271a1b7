//! Value types that options can hold, and their text conversions

use std::fmt;

use serde::Serialize;

use super::error::InvalidValue;
use crate::util::{is_c_space, leading_int, IntPrefixError};

/// A type that can be stored in a [`ConfOption`](super::ConfOption)
pub trait OptionValue: Clone {
    /// Convert config text into a value, without side effects
    fn parse_value(text: &str) -> Result<Self, InvalidValue>;

    /// Canonical text form, re-parsable by `parse_value`
    fn to_value_string(&self) -> String;
}

impl OptionValue for bool {
    fn parse_value(text: &str) -> Result<Self, InvalidValue> {
        match text {
            "yes" | "y" | "true" | "1" | "on" => Ok(true),
            "no" | "n" | "false" | "0" | "off" => Ok(false),
            _ => Err(InvalidValue::InvalidBoolean),
        }
    }

    fn to_value_string(&self) -> String {
        let text = if *self { "true" } else { "false" };
        text.to_string()
    }
}

impl OptionValue for String {
    fn parse_value(text: &str) -> Result<Self, InvalidValue> {
        Ok(text.to_string())
    }

    fn to_value_string(&self) -> String {
        self.clone()
    }
}

impl OptionValue for i32 {
    /// Whole-string base-10 integer; trailing garbage is rejected
    fn parse_value(text: &str) -> Result<Self, InvalidValue> {
        match leading_int(text) {
            Ok((value, used)) if used == text.len() => Ok(value),
            Ok(_) | Err(IntPrefixError::NoDigits) => Err(InvalidValue::NotAnInteger),
            Err(IntPrefixError::Overflow) => Err(InvalidValue::OutOfIntRange),
        }
    }

    fn to_value_string(&self) -> String {
        self.to_string()
    }
}

/// How the main window is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowMode {
    Windowed,
    BorderlessFullscreen,
    Fullscreen,
}

impl WindowMode {
    pub fn as_str(self) -> &'static str {
        match self {
            WindowMode::Windowed => "windowed",
            WindowMode::BorderlessFullscreen => "borderless_fullscreen",
            WindowMode::Fullscreen => "fullscreen",
        }
    }
}

impl fmt::Display for WindowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OptionValue for WindowMode {
    fn parse_value(text: &str) -> Result<Self, InvalidValue> {
        match text {
            "window" | "windowed" => Ok(WindowMode::Windowed),
            "fullscreen" => Ok(WindowMode::Fullscreen),
            "borderless" | "borderless_fullscreen" | "borderless fullscreen" => {
                Ok(WindowMode::BorderlessFullscreen)
            }
            _ => Err(InvalidValue::UnknownWindowMode),
        }
    }

    fn to_value_string(&self) -> String {
        self.as_str().to_string()
    }
}

/// A width/height pair such as a window or game size
///
/// Accepted forms are `640x480`, `640,480` and `640 480`: two integers
/// separated by whitespace and at most one `,` or `x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    pub width: i32,
    pub height: i32,
}

impl Resolution {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

fn resolution_error(e: IntPrefixError) -> InvalidValue {
    match e {
        IntPrefixError::NoDigits => InvalidValue::InvalidResolution,
        IntPrefixError::Overflow => InvalidValue::OutOfIntRange,
    }
}

impl OptionValue for Resolution {
    fn parse_value(text: &str) -> Result<Self, InvalidValue> {
        let (width, mut idx) = leading_int(text).map_err(resolution_error)?;

        let mut have_separator = false;
        for ch in text[idx..].chars() {
            if is_c_space(ch) {
                // keep going
            } else if ch == ',' || ch == 'x' {
                if have_separator {
                    return Err(InvalidValue::InvalidResolution);
                }
                have_separator = true;
            } else if ch.is_ascii_digit() {
                break;
            } else {
                return Err(InvalidValue::InvalidResolution);
            }
            idx += ch.len_utf8();
        }

        let (height, used) = leading_int(&text[idx..]).map_err(resolution_error)?;
        if idx + used < text.len() {
            return Err(InvalidValue::InvalidResolution);
        }

        Ok(Resolution { width, height })
    }

    fn to_value_string(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRUE_LITERALS: [&str; 5] = ["yes", "y", "true", "1", "on"];
    const FALSE_LITERALS: [&str; 5] = ["no", "n", "false", "0", "off"];

    #[test]
    fn test_bool_literals() {
        for text in TRUE_LITERALS {
            assert_eq!(bool::parse_value(text), Ok(true), "{text}");
        }
        for text in FALSE_LITERALS {
            assert_eq!(bool::parse_value(text), Ok(false), "{text}");
        }
    }

    #[test]
    fn test_bool_is_case_sensitive() {
        for text in ["Yes", "TRUE", "On", "2", "", "yes ", "nope"] {
            assert_eq!(bool::parse_value(text), Err(InvalidValue::InvalidBoolean), "{text}");
        }
    }

    #[test]
    fn test_int_rejects_trailing_garbage() {
        assert_eq!(i32::parse_value("12"), Ok(12));
        assert_eq!(i32::parse_value("-12"), Ok(-12));
        assert_eq!(i32::parse_value("12px"), Err(InvalidValue::NotAnInteger));
        assert_eq!(i32::parse_value("twelve"), Err(InvalidValue::NotAnInteger));
        assert_eq!(i32::parse_value(""), Err(InvalidValue::NotAnInteger));
    }

    #[test]
    fn test_int_magnitude_overflow_is_distinct() {
        assert_eq!(
            i32::parse_value("4294967296"),
            Err(InvalidValue::OutOfIntRange)
        );
    }

    #[test]
    fn test_window_mode_vocabulary() {
        assert_eq!(WindowMode::parse_value("window"), Ok(WindowMode::Windowed));
        assert_eq!(WindowMode::parse_value("windowed"), Ok(WindowMode::Windowed));
        assert_eq!(WindowMode::parse_value("fullscreen"), Ok(WindowMode::Fullscreen));
        for text in ["borderless", "borderless_fullscreen", "borderless fullscreen"] {
            assert_eq!(
                WindowMode::parse_value(text),
                Ok(WindowMode::BorderlessFullscreen)
            );
        }
        assert_eq!(
            WindowMode::parse_value("Fullscreen"),
            Err(InvalidValue::UnknownWindowMode)
        );
    }

    #[test]
    fn test_window_mode_round_trip() {
        for mode in [
            WindowMode::Windowed,
            WindowMode::BorderlessFullscreen,
            WindowMode::Fullscreen,
        ] {
            assert_eq!(WindowMode::parse_value(&mode.to_value_string()), Ok(mode));
        }
    }

    #[test]
    fn test_resolution_separators() {
        let expected = Ok(Resolution::new(640, 480));
        assert_eq!(Resolution::parse_value("640x480"), expected);
        assert_eq!(Resolution::parse_value("640,480"), expected);
        assert_eq!(Resolution::parse_value("640 480"), expected);
        assert_eq!(Resolution::parse_value("640 x 480"), expected);
        assert_eq!(Resolution::parse_value("640 ,\t480"), expected);
    }

    #[test]
    fn test_resolution_rejects_malformed() {
        for text in [
            "640x480x200",
            "640",
            "abc",
            "640x",
            "x480",
            "640xx480",
            "640,x480",
            "640y480",
            "640x480 ",
            "640x-480",
        ] {
            assert!(Resolution::parse_value(text).is_err(), "{text:?} should fail");
        }
    }

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::new(320, 200).to_value_string(), "320x200");
    }
}
