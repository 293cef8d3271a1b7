//! Fixed movement and button keys with their default scancodes
//!
//! These predate the binding table: each slot holds a single scancode and is
//! addressed by a fixed name (`left`, `up2`, `b3`, ...).

use serde::Serialize;

use super::config::parse_key_name;
use super::keymap::Bindings;
use super::types::Scancode;

/// `Left_2` and `left2` name the same slot
fn normalize(name: &str) -> String {
    name.to_ascii_lowercase().replace('_', "")
}

/// The movement keys, their alternates, and four buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Keys {
    pub left: Option<Scancode>,
    pub left_2: Option<Scancode>,
    pub right: Option<Scancode>,
    pub right_2: Option<Scancode>,
    pub up: Option<Scancode>,
    pub up_2: Option<Scancode>,
    pub down: Option<Scancode>,
    pub down_2: Option<Scancode>,
    pub b1: Option<Scancode>,
    pub b2: Option<Scancode>,
    pub b3: Option<Scancode>,
    pub b4: Option<Scancode>,
}

impl Default for Keys {
    /// Arrow keys, with WASD as the alternates
    fn default() -> Self {
        Self {
            left: Some(Scancode::LEFT),
            left_2: Some(Scancode::A),
            right: Some(Scancode::RIGHT),
            right_2: Some(Scancode::D),
            up: Some(Scancode::UP),
            up_2: Some(Scancode::W),
            down: Some(Scancode::DOWN),
            down_2: Some(Scancode::S),
            b1: None,
            b2: None,
            b3: Some(Scancode::RIGHT_CTRL),
            b4: Some(Scancode::INSERT),
        }
    }
}

impl Keys {
    /// Slot names accepted by [`get`](Self::get) and [`set`](Self::set)
    pub const NAMES: [&'static str; 12] = [
        "left", "left2", "right", "right2", "up", "up2", "down", "down2", "b1", "b2", "b3", "b4",
    ];

    fn slot_mut(&mut self, name: &str) -> Option<&mut Option<Scancode>> {
        let slot = match normalize(name).as_str() {
            "left" => &mut self.left,
            "left2" => &mut self.left_2,
            "right" => &mut self.right,
            "right2" => &mut self.right_2,
            "up" => &mut self.up,
            "up2" => &mut self.up_2,
            "down" => &mut self.down,
            "down2" => &mut self.down_2,
            "b1" => &mut self.b1,
            "b2" => &mut self.b2,
            "b3" => &mut self.b3,
            "b4" => &mut self.b4,
            _ => return None,
        };
        Some(slot)
    }

    /// Scancode of the named slot, case-insensitively
    ///
    /// `None` if the name is unknown or the slot is empty.
    pub fn get(&self, name: &str) -> Option<Scancode> {
        match normalize(name).as_str() {
            "left" => self.left,
            "left2" => self.left_2,
            "right" => self.right,
            "right2" => self.right_2,
            "up" => self.up,
            "up2" => self.up_2,
            "down" => self.down,
            "down2" => self.down_2,
            "b1" => self.b1,
            "b2" => self.b2,
            "b3" => self.b3,
            "b4" => self.b4,
            _ => None,
        }
    }

    /// Set the named slot from a key name (see [`parse_key_name`])
    ///
    /// Returns false and leaves the slot alone if either name is unknown.
    pub fn set(&mut self, name: &str, key_name: &str) -> bool {
        let Some(scancode) = parse_key_name(key_name) else {
            tracing::warn!("Unknown key name \"{}\" for {}", key_name, name);
            return false;
        };
        match self.slot_mut(name) {
            Some(slot) => {
                *slot = Some(scancode);
                true
            }
            None => {
                tracing::warn!("Unknown key slot {}", name);
                false
            }
        }
    }

    /// Bind every filled slot to the control of the same name
    ///
    /// Slots whose control isn't registered are skipped. Returns the number
    /// of keys bound.
    pub fn bind_into(&self, bindings: &mut Bindings) -> usize {
        Self::NAMES
            .iter()
            .filter_map(|&name| self.get(name).map(|scancode| (name, scancode)))
            .filter(|&(name, scancode)| bindings.bind_scancode(scancode, name))
            .count()
    }
}
