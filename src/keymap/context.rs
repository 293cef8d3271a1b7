//! Device events fed to the binding table, and the active input mode

use serde::Serialize;

use super::binding::{CONTROL_ACTIVE, CONTROL_RELEASED};
use super::types::{InputDescriptor, Scancode};

/// An input event already resolved to a device and code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceEvent {
    Key { scancode: Scancode, pressed: bool },
    MouseButton { button: u8, pressed: bool },
    ControllerButton { button: u8, pressed: bool },
    ControllerAxis { axis: u8, value: i16 },
}

impl DeviceEvent {
    pub fn key_down(scancode: Scancode) -> Self {
        DeviceEvent::Key {
            scancode,
            pressed: true,
        }
    }

    pub fn key_up(scancode: Scancode) -> Self {
        DeviceEvent::Key {
            scancode,
            pressed: false,
        }
    }

    pub fn mouse_down(button: u8) -> Self {
        DeviceEvent::MouseButton {
            button,
            pressed: true,
        }
    }

    pub fn mouse_up(button: u8) -> Self {
        DeviceEvent::MouseButton {
            button,
            pressed: false,
        }
    }

    /// The input this event came from
    pub fn input(self) -> InputDescriptor {
        match self {
            DeviceEvent::Key { scancode, .. } => InputDescriptor::Keyboard(scancode),
            DeviceEvent::MouseButton { button, .. } => InputDescriptor::MouseButton(button),
            DeviceEvent::ControllerButton { button, .. } => {
                InputDescriptor::ControllerButton(button)
            }
            DeviceEvent::ControllerAxis { axis, .. } => InputDescriptor::ControllerAxis(axis),
        }
    }

    /// Control state this event delivers
    pub fn state(self) -> i16 {
        match self {
            DeviceEvent::Key { pressed, .. }
            | DeviceEvent::MouseButton { pressed, .. }
            | DeviceEvent::ControllerButton { pressed, .. } => {
                if pressed {
                    CONTROL_ACTIVE
                } else {
                    CONTROL_RELEASED
                }
            }
            // -32768 has no positive counterpart
            DeviceEvent::ControllerAxis { value, .. } => value.max(-CONTROL_ACTIVE),
        }
    }

    /// Which kind of device produced this event
    pub fn mode(self) -> ControlMode {
        match self {
            DeviceEvent::Key { .. } | DeviceEvent::MouseButton { .. } => {
                ControlMode::KeyboardMouse
            }
            DeviceEvent::ControllerButton { .. } | DeviceEvent::ControllerAxis { .. } => {
                ControlMode::Controller
            }
        }
    }
}

/// Device class that most recently produced an event
///
/// Binding descriptions prefer inputs of this class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlMode {
    #[default]
    KeyboardMouse,
    Controller,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_states() {
        assert_eq!(DeviceEvent::key_down(Scancode::A).state(), 0x7FFF);
        assert_eq!(DeviceEvent::mouse_up(1).state(), 0);
    }

    #[test]
    fn test_axis_state_is_symmetric() {
        let event = DeviceEvent::ControllerAxis {
            axis: 0,
            value: i16::MIN,
        };
        assert_eq!(event.state(), -0x7FFF);
        assert_eq!(event.mode(), ControlMode::Controller);
    }

    #[test]
    fn test_event_input() {
        assert_eq!(
            DeviceEvent::mouse_down(3).input(),
            InputDescriptor::MouseButton(3)
        );
        assert_eq!(
            DeviceEvent::key_up(Scancode::UP).mode(),
            ControlMode::KeyboardMouse
        );
    }
}
