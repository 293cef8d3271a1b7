//! Binding table: routes device events to named controls

use std::collections::HashMap;
use std::fmt;

use super::binding::{Control, FnControl};
use super::config::parse_key_name;
use super::context::{ControlMode, DeviceEvent};
use super::types::{
    InputDescriptor, Scancode, MAX_CONTROLLER_AXES, MAX_CONTROLLER_BUTTONS, MAX_MOUSE_BUTTONS,
    NUM_SCANCODES,
};

/// Stable handle to a registered control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ControlId(usize);

struct NamedControl {
    name: String,
    control: Box<dyn Control>,
}

/// Input bindings for named controls
///
/// Controls are owned here, one per name. The lookup tables hold
/// [`ControlId`]s, so an input drives at most one control while a control can
/// be bound to any number of inputs.
pub struct Bindings {
    controls: Vec<NamedControl>,
    names: HashMap<String, ControlId>,
    keys: Box<[Option<ControlId>]>,
    mouse_buttons: [Option<ControlId>; MAX_MOUSE_BUTTONS],
    controller_buttons: [Option<ControlId>; MAX_CONTROLLER_BUTTONS],
    controller_axes: [Option<ControlId>; MAX_CONTROLLER_AXES],
    mode: ControlMode,
}

impl Default for Bindings {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Bindings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bindings")
            .field("controls", &self.control_names().collect::<Vec<_>>())
            .field("bound_inputs", &self.bound_inputs().count())
            .field("mode", &self.mode)
            .finish()
    }
}

impl Bindings {
    /// Create a table with no controls and nothing bound
    pub fn new() -> Self {
        Self {
            controls: Vec::new(),
            names: HashMap::new(),
            keys: vec![None; NUM_SCANCODES].into_boxed_slice(),
            mouse_buttons: [None; MAX_MOUSE_BUTTONS],
            controller_buttons: [None; MAX_CONTROLLER_BUTTONS],
            controller_axes: [None; MAX_CONTROLLER_AXES],
            mode: ControlMode::default(),
        }
    }

    /// Register `control` under `name`, taking ownership
    ///
    /// If the name is already registered the old control is dropped and the
    /// new one takes over its bindings.
    pub fn add_control(&mut self, name: &str, control: impl Control + 'static) -> ControlId {
        let control: Box<dyn Control> = Box::new(control);
        if let Some(&id) = self.names.get(name) {
            tracing::debug!("Replacing control {}", name);
            self.controls[id.0].control = control;
            return id;
        }

        let id = ControlId(self.controls.len());
        self.controls.push(NamedControl {
            name: name.to_string(),
            control,
        });
        self.names.insert(name.to_string(), id);
        id
    }

    /// [`add_control`](Self::add_control) for a closure
    pub fn add_fn_control(&mut self, name: &str, f: impl FnMut(i16) + 'static) -> ControlId {
        self.add_control(name, FnControl::new(f))
    }

    pub fn control_id(&self, name: &str) -> Option<ControlId> {
        self.names.get(name).copied()
    }

    pub fn control_name(&self, id: ControlId) -> Option<&str> {
        self.controls.get(id.0).map(|c| c.name.as_str())
    }

    /// Registered control names, in registration order
    pub fn control_names(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().map(|c| c.name.as_str())
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    fn slot_mut(&mut self, input: InputDescriptor) -> Option<&mut Option<ControlId>> {
        match input {
            InputDescriptor::Keyboard(scancode) => self.keys.get_mut(scancode.index()),
            InputDescriptor::MouseButton(n) => self.mouse_buttons.get_mut(n as usize),
            InputDescriptor::ControllerButton(n) => self.controller_buttons.get_mut(n as usize),
            InputDescriptor::ControllerAxis(n) => self.controller_axes.get_mut(n as usize),
            InputDescriptor::Invalid => None,
        }
    }

    fn slot(&self, input: InputDescriptor) -> Option<ControlId> {
        match input {
            InputDescriptor::Keyboard(scancode) => self.keys.get(scancode.index()).copied().flatten(),
            InputDescriptor::MouseButton(n) => self.mouse_buttons.get(n as usize).copied().flatten(),
            InputDescriptor::ControllerButton(n) => {
                self.controller_buttons.get(n as usize).copied().flatten()
            }
            InputDescriptor::ControllerAxis(n) => {
                self.controller_axes.get(n as usize).copied().flatten()
            }
            InputDescriptor::Invalid => None,
        }
    }

    /// Bind `input` to the control called `name`
    ///
    /// Returns false if the name is not registered or the input is invalid or
    /// out of range for its table. Any previous binding of the input is
    /// replaced.
    pub fn bind(&mut self, input: InputDescriptor, name: &str) -> bool {
        let Some(id) = self.control_id(name) else {
            tracing::debug!("Cannot bind {} to unknown control {}", input, name);
            return false;
        };
        match self.slot_mut(input) {
            Some(slot) => {
                *slot = Some(id);
                tracing::debug!("Bound {} to {}", input, name);
                true
            }
            None => {
                tracing::debug!("Cannot bind {} to {}: no such input", input, name);
                false
            }
        }
    }

    pub fn bind_scancode(&mut self, scancode: Scancode, name: &str) -> bool {
        self.bind(InputDescriptor::Keyboard(scancode), name)
    }

    /// Bind a key given in the legacy key-name grammar
    pub fn bind_key_name(&mut self, key_name: &str, name: &str) -> bool {
        match parse_key_name(key_name) {
            Some(scancode) => self.bind_scancode(scancode, name),
            None => {
                tracing::warn!("Unknown key name \"{}\" (binding ignored)", key_name);
                false
            }
        }
    }

    /// Parse `definition` and bind the resulting input
    pub fn bind_definition(&mut self, definition: &str, name: &str) -> bool {
        let input = InputDescriptor::parse(definition);
        if !input.is_valid() {
            tracing::warn!(
                "Unable to parse \"{}\" as a control input (binding ignored)",
                definition
            );
            return false;
        }
        self.bind(input, name)
    }

    /// Bind every definition to `name`, returning how many succeeded
    pub fn bind_all<I, S>(&mut self, definitions: I, name: &str) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        definitions
            .into_iter()
            .filter(|definition| self.bind_definition(definition.as_ref(), name))
            .count()
    }

    /// Remove whatever is bound to `input`. Returns false for invalid inputs.
    pub fn unbind(&mut self, input: InputDescriptor) -> bool {
        match self.slot_mut(input) {
            Some(slot) => {
                *slot = None;
                true
            }
            None => false,
        }
    }

    /// Remove every binding. Registered controls are kept.
    pub fn reset_bindings(&mut self) {
        self.keys.fill(None);
        self.mouse_buttons.fill(None);
        self.controller_buttons.fill(None);
        self.controller_axes.fill(None);
    }

    /// Name of the control bound to `input`
    pub fn bound_to(&self, input: InputDescriptor) -> Option<&str> {
        self.slot(input).and_then(|id| self.control_name(id))
    }

    /// Every bound input with its control
    pub fn bound_inputs(&self) -> impl Iterator<Item = (InputDescriptor, ControlId)> + '_ {
        let keys = self.keys.iter().enumerate().filter_map(|(code, slot)| {
            slot.map(|id| (InputDescriptor::Keyboard(Scancode(code as u16)), id))
        });
        let mouse = self.mouse_buttons.iter().enumerate().filter_map(|(n, slot)| {
            slot.map(|id| (InputDescriptor::MouseButton(n as u8), id))
        });
        let buttons = self.controller_buttons.iter().enumerate().filter_map(|(n, slot)| {
            slot.map(|id| (InputDescriptor::ControllerButton(n as u8), id))
        });
        let axes = self.controller_axes.iter().enumerate().filter_map(|(n, slot)| {
            slot.map(|id| (InputDescriptor::ControllerAxis(n as u8), id))
        });
        keys.chain(mouse).chain(buttons).chain(axes)
    }

    /// Deliver a device event to whatever control it is bound to
    ///
    /// Unbound inputs are ignored. Every event updates the active
    /// [`ControlMode`].
    pub fn fire_event(&mut self, event: DeviceEvent) {
        self.mode = event.mode();
        if let Some(id) = self.slot(event.input()) {
            self.controls[id.0].control.control_state(event.state());
        }
    }

    /// Human-readable list of the inputs bound to `name`, joined with `/`
    ///
    /// Inputs from the device class that was used last are preferred; if the
    /// control has none of those the others are listed instead. `None` if the
    /// control is unknown or unbound.
    pub fn describe(&self, name: &str) -> Option<String> {
        let id = self.control_id(name)?;
        let (controller, keyboard_mouse): (Vec<_>, Vec<_>) = self
            .bound_inputs()
            .filter(|&(_, bound)| bound == id)
            .map(|(input, _)| input)
            .partition(|input| input.is_controller());

        let (preferred, fallback) = match self.mode {
            ControlMode::KeyboardMouse => (keyboard_mouse, controller),
            ControlMode::Controller => (controller, keyboard_mouse),
        };
        let chosen = if preferred.is_empty() { fallback } else { preferred };
        if chosen.is_empty() {
            return None;
        }

        Some(
            chosen
                .iter()
                .map(|input| input.to_string())
                .collect::<Vec<_>>()
                .join("/"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_requires_registered_control() {
        let mut bindings = Bindings::new();
        assert!(!bindings.bind_scancode(Scancode::A, "fire"));

        bindings.add_fn_control("fire", |_| {});
        assert!(bindings.bind_scancode(Scancode::A, "fire"));
        assert_eq!(
            bindings.bound_to(InputDescriptor::Keyboard(Scancode::A)),
            Some("fire")
        );
    }

    #[test]
    fn test_bind_rejects_out_of_range() {
        let mut bindings = Bindings::new();
        bindings.add_fn_control("fire", |_| {});
        assert!(!bindings.bind(InputDescriptor::MouseButton(32), "fire"));
        assert!(bindings.bind(InputDescriptor::MouseButton(31), "fire"));
        assert!(!bindings.bind_scancode(Scancode(512), "fire"));
        assert!(!bindings.bind(InputDescriptor::Invalid, "fire"));
    }

    #[test]
    fn test_unbind_and_reset() {
        let mut bindings = Bindings::new();
        bindings.add_fn_control("jump", |_| {});
        bindings.bind_scancode(Scancode::SPACE, "jump");
        bindings.bind(InputDescriptor::MouseButton(1), "jump");

        assert!(bindings.unbind(InputDescriptor::Keyboard(Scancode::SPACE)));
        assert_eq!(bindings.bound_to(InputDescriptor::Keyboard(Scancode::SPACE)), None);
        assert_eq!(bindings.bound_to(InputDescriptor::MouseButton(1)), Some("jump"));

        bindings.reset_bindings();
        assert_eq!(bindings.bound_inputs().count(), 0);
        assert_eq!(bindings.control_id("jump"), Some(ControlId(0)));
    }

    #[test]
    fn test_describe_unbound() {
        let mut bindings = Bindings::new();
        assert_eq!(bindings.describe("jump"), None);
        bindings.add_fn_control("jump", |_| {});
        assert_eq!(bindings.describe("jump"), None);
    }
}
