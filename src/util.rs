//! Small text helpers shared by the option and key-name parsers
//!
//! Whitespace and integer prefixes follow the C library rules (`isspace`,
//! `stoi`, `strtol` with base 0) that existing rc files were written against.

use std::num::IntErrorKind;

/// C `isspace` in the default locale
#[inline]
pub fn is_c_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

/// Failure of [`leading_int`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntPrefixError {
    /// No digits where an integer was expected
    NoDigits,
    /// Digits were found but the value does not fit in an `i32`
    Overflow,
}

/// Parse the integer at the start of `text`, the way `std::stoi` does
///
/// Skips leading whitespace, accepts an optional sign, then at least one
/// decimal digit. Returns the value and the number of bytes consumed.
pub fn leading_int(text: &str) -> Result<(i32, usize), IntPrefixError> {
    let start = text.len() - text.trim_start_matches(is_c_space).len();
    let bytes = text.as_bytes();
    let mut end = start;
    if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let digits_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == digits_start {
        return Err(IntPrefixError::NoDigits);
    }

    match text[start..end].parse::<i32>() {
        Ok(value) => Ok((value, end)),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(IntPrefixError::Overflow),
            _ => Err(IntPrefixError::NoDigits),
        },
    }
}

/// Parse the integer at the start of `text` with automatic radix detection,
/// the way `strtol(text, &end, 0)` does
///
/// `0x`/`0X` selects hex, a leading `0` selects octal, anything else is
/// decimal. Returns the value and the number of bytes consumed, or `None` if
/// no digits were found. Values that do not fit in an `i64` are `None` too.
pub fn leading_c_integer(text: &str) -> Option<(i64, usize)> {
    let start = text.len() - text.trim_start_matches(is_c_space).len();
    let bytes = text.as_bytes();
    let mut pos = start;

    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let has_hex_prefix = bytes.get(pos) == Some(&b'0')
        && matches!(bytes.get(pos + 1), Some(b'x') | Some(b'X'))
        && bytes.get(pos + 2).is_some_and(u8::is_ascii_hexdigit);

    let (radix, digits_start) = if has_hex_prefix {
        (16, pos + 2)
    } else if bytes.get(pos) == Some(&b'0') {
        (8, pos)
    } else {
        (10, pos)
    };

    let mut end = digits_start;
    while bytes
        .get(end)
        .is_some_and(|b| (*b as char).is_digit(radix))
    {
        end += 1;
    }
    if end == digits_start {
        return None;
    }

    let magnitude = i64::from_str_radix(&text[digits_start..end], radix).ok()?;
    Some((if negative { -magnitude } else { magnitude }, end))
}

/// Parse all of `text` (ignoring surrounding whitespace) as a C integer
///
/// Returns `None` if anything other than whitespace follows the number.
pub fn parse_c_integer(text: &str) -> Option<i64> {
    let (value, end) = leading_c_integer(text)?;
    if text[end..].chars().all(is_c_space) {
        Some(value)
    } else {
        None
    }
}
