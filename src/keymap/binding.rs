//! Controls: the targets that bound inputs drive

/// State delivered when an input is released
pub const CONTROL_RELEASED: i16 = 0;

/// State delivered when a digital input is pressed (fully active)
pub const CONTROL_ACTIVE: i16 = 0x7FFF;

/// Anything that can be driven by a bound input
///
/// `state` is `0` when released and `0x7FFF` when fully active. Analog axes
/// deliver intermediate values, negative when pushed the other way.
pub trait Control {
    fn control_state(&mut self, state: i16);
}

/// Adapter that turns a closure into a [`Control`]
pub struct FnControl<F>(pub F);

impl<F: FnMut(i16)> FnControl<F> {
    pub fn new(f: F) -> Self {
        FnControl(f)
    }
}

impl<F: FnMut(i16)> Control for FnControl<F> {
    fn control_state(&mut self, state: i16) {
        (self.0)(state)
    }
}

impl<F> std::fmt::Debug for FnControl<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("FnControl")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_control_forwards_state() {
        let mut seen = Vec::new();
        {
            let mut control = FnControl::new(|state: i16| seen.push(state));
            control.control_state(CONTROL_ACTIVE);
            control.control_state(CONTROL_RELEASED);
        }
        assert_eq!(seen, vec![0x7FFF, 0]);
    }
}
