//! Core types for input bindings: Scancode, InputDescriptor

use std::fmt;

use serde::Serialize;

use super::scancodes;

/// Size of the keyboard binding table (every possible scancode)
pub const NUM_SCANCODES: usize = 512;

/// Mice report buttons as a 32-bit mask, so that many can be bound
pub const MAX_MOUSE_BUTTONS: usize = 32;

/// Controller buttons and axes that can be bound
pub const MAX_CONTROLLER_BUTTONS: usize = 32;
pub const MAX_CONTROLLER_AXES: usize = 16;

/// Platform mouse button numbers
pub mod mouse {
    pub const LEFT: u8 = 1;
    pub const MIDDLE: u8 = 2;
    pub const RIGHT: u8 = 3;
}

/// A physical key position, independent of keyboard layout (USB HID usage)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Scancode(pub u16);

impl Scancode {
    pub const A: Scancode = Scancode(4);
    pub const D: Scancode = Scancode(7);
    pub const S: Scancode = Scancode(22);
    pub const W: Scancode = Scancode(26);
    pub const NUM_1: Scancode = Scancode(30);
    pub const NUM_4: Scancode = Scancode(33);
    pub const RETURN: Scancode = Scancode(40);
    pub const ESCAPE: Scancode = Scancode(41);
    pub const SPACE: Scancode = Scancode(44);
    pub const INSERT: Scancode = Scancode(73);
    pub const RIGHT: Scancode = Scancode(79);
    pub const LEFT: Scancode = Scancode(80);
    pub const DOWN: Scancode = Scancode(81);
    pub const UP: Scancode = Scancode(82);
    pub const LEFT_CTRL: Scancode = Scancode(224);
    pub const RIGHT_CTRL: Scancode = Scancode(228);

    /// Scancode from a table index, if it is in range
    pub fn from_index(index: i64) -> Option<Scancode> {
        if (0..NUM_SCANCODES as i64).contains(&index) {
            Some(Scancode(index as u16))
        } else {
            None
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Case-insensitive lookup of a key name such as `"Left Ctrl"` or `"a"`
    pub fn from_name(name: &str) -> Option<Scancode> {
        scancodes::lookup(name)
    }

    /// Human-readable name, if the key has one
    pub fn name(self) -> Option<&'static str> {
        scancodes::name_of(self)
    }
}

impl fmt::Display for Scancode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Scancode {}", self.0),
        }
    }
}

/// A parsed, validated input definition
///
/// Constructed from strings such as `"A"`, `"scancode 4"` or
/// `"mouse button left"` by [`InputDescriptor::parse`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "device", content = "code", rename_all = "snake_case")]
pub enum InputDescriptor {
    Keyboard(Scancode),
    MouseButton(u8),
    ControllerButton(u8),
    ControllerAxis(u8),
    Invalid,
}

impl InputDescriptor {
    pub fn is_valid(self) -> bool {
        self != InputDescriptor::Invalid
    }

    /// Whether this input comes from a game controller
    pub fn is_controller(self) -> bool {
        matches!(
            self,
            InputDescriptor::ControllerButton(_) | InputDescriptor::ControllerAxis(_)
        )
    }
}

impl fmt::Display for InputDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InputDescriptor::Keyboard(scancode) => write!(f, "{}", scancode),
            InputDescriptor::MouseButton(mouse::LEFT) => f.write_str("Left Mouse Button"),
            InputDescriptor::MouseButton(mouse::MIDDLE) => f.write_str("Middle Mouse Button"),
            InputDescriptor::MouseButton(mouse::RIGHT) => f.write_str("Right Mouse Button"),
            InputDescriptor::MouseButton(n) => write!(f, "Mouse Button {}", n),
            InputDescriptor::ControllerButton(n) => write!(f, "Controller Button {}", n),
            InputDescriptor::ControllerAxis(n) => write!(f, "Controller Axis {}", n),
            InputDescriptor::Invalid => f.write_str("Invalid"),
        }
    }
}
