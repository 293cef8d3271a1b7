//! Option containers and the closed enum the registry dispatches through

use std::fmt::Display;

use super::error::InvalidValue;
use super::value::{OptionValue, Resolution, WindowMode};

/// An option holding a default and a current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfOption<T> {
    default: T,
    value: T,
    user_set: bool,
    description: String,
}

impl<T: OptionValue> ConfOption<T> {
    pub fn new(default: T, description: impl Into<String>) -> Self {
        Self {
            value: default.clone(),
            default,
            user_set: false,
            description: description.into(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Parse `text` into this option. On error nothing changes.
    pub fn parse(&mut self, text: &str) -> Result<(), InvalidValue> {
        self.value = T::parse_value(text)?;
        self.user_set = true;
        Ok(())
    }

    /// Restore the default and forget that the user set anything
    pub fn reset(&mut self) {
        self.value = self.default.clone();
        self.user_set = false;
    }

    /// Whether the current value came from parsed input
    pub fn user_set(&self) -> bool {
        self.user_set
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value_string(&self) -> String {
        self.value.to_value_string()
    }

    pub fn default_value_string(&self) -> String {
        self.default.to_value_string()
    }
}

impl<T: OptionValue + Copy> ConfOption<T> {
    /// Copy of the current value
    pub fn get(&self) -> T {
        self.value
    }
}

impl ConfOption<Resolution> {
    pub fn width(&self) -> i32 {
        self.value.width
    }

    pub fn height(&self) -> i32 {
        self.value.height
    }
}

/// An option whose accepted values lie in an inclusive range
///
/// Values outside the range are rejected, never clamped. The default itself
/// is not checked against the range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangedOption<T> {
    inner: ConfOption<T>,
    min: T,
    max: T,
}

impl<T: OptionValue + PartialOrd + Display> RangedOption<T> {
    /// `min` and `max` may be given in either order, and may be equal
    pub fn new(default: T, min: T, max: T, description: impl Into<String>) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            inner: ConfOption::new(default, description),
            min,
            max,
        }
    }

    pub fn value(&self) -> &T {
        self.inner.value()
    }

    pub fn default_value(&self) -> &T {
        self.inner.default_value()
    }

    pub fn min(&self) -> &T {
        &self.min
    }

    pub fn max(&self) -> &T {
        &self.max
    }

    pub fn parse(&mut self, text: &str) -> Result<(), InvalidValue> {
        let parsed = T::parse_value(text)?;
        if parsed < self.min || parsed > self.max {
            return Err(InvalidValue::OutOfRange {
                min: self.min.to_string(),
                max: self.max.to_string(),
            });
        }
        self.inner.value = parsed;
        self.inner.user_set = true;
        Ok(())
    }

    pub fn reset(&mut self) {
        self.inner.reset();
    }

    pub fn user_set(&self) -> bool {
        self.inner.user_set()
    }

    pub fn description(&self) -> &str {
        self.inner.description()
    }

    pub fn value_string(&self) -> String {
        self.inner.value_string()
    }

    pub fn default_value_string(&self) -> String {
        self.inner.default_value_string()
    }
}

impl<T: OptionValue + PartialOrd + Display + Copy> RangedOption<T> {
    pub fn get(&self) -> T {
        self.inner.get()
    }
}

pub type BoolOption = ConfOption<bool>;
pub type StringOption = ConfOption<String>;
pub type IntOption = RangedOption<i32>;
pub type WindowModeOption = ConfOption<WindowMode>;
pub type ResolutionOption = ConfOption<Resolution>;

/// Mutable borrow of one option, whatever its kind
#[derive(Debug)]
pub enum OptionRef<'a> {
    Bool(&'a mut BoolOption),
    Int(&'a mut IntOption),
    Str(&'a mut StringOption),
    WindowMode(&'a mut WindowModeOption),
    Resolution(&'a mut ResolutionOption),
}

macro_rules! each_kind {
    ($target:expr, $opt:ident => $body:expr) => {
        match $target {
            OptionRef::Bool($opt) => $body,
            OptionRef::Int($opt) => $body,
            OptionRef::Str($opt) => $body,
            OptionRef::WindowMode($opt) => $body,
            OptionRef::Resolution($opt) => $body,
        }
    };
}

impl OptionRef<'_> {
    pub fn parse(&mut self, text: &str) -> Result<(), InvalidValue> {
        each_kind!(self, opt => opt.parse(text))
    }

    pub fn reset(&mut self) {
        each_kind!(self, opt => opt.reset())
    }

    pub fn user_set(&self) -> bool {
        each_kind!(self, opt => opt.user_set())
    }

    pub fn description(&self) -> &str {
        each_kind!(self, opt => opt.description())
    }

    pub fn value_string(&self) -> String {
        each_kind!(self, opt => opt.value_string())
    }

    pub fn default_value_string(&self) -> String {
        each_kind!(self, opt => opt.default_value_string())
    }
}

impl<'a> From<&'a mut BoolOption> for OptionRef<'a> {
    fn from(opt: &'a mut BoolOption) -> Self {
        OptionRef::Bool(opt)
    }
}

impl<'a> From<&'a mut IntOption> for OptionRef<'a> {
    fn from(opt: &'a mut IntOption) -> Self {
        OptionRef::Int(opt)
    }
}

impl<'a> From<&'a mut StringOption> for OptionRef<'a> {
    fn from(opt: &'a mut StringOption) -> Self {
        OptionRef::Str(opt)
    }
}

impl<'a> From<&'a mut WindowModeOption> for OptionRef<'a> {
    fn from(opt: &'a mut WindowModeOption) -> Self {
        OptionRef::WindowMode(opt)
    }
}

impl<'a> From<&'a mut ResolutionOption> for OptionRef<'a> {
    fn from(opt: &'a mut ResolutionOption) -> Self {
        OptionRef::Resolution(opt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sets_user_flag_and_reset_clears_it() {
        let mut opt = BoolOption::new(false, "Use mono audio");
        assert!(!opt.user_set());

        opt.parse("yes").unwrap();
        assert!(opt.get());
        assert!(opt.user_set());

        opt.reset();
        assert!(!opt.get());
        assert!(!opt.user_set());
    }

    #[test]
    fn test_failed_parse_leaves_state_alone() {
        let mut opt = BoolOption::new(false, "");
        opt.parse("on").unwrap();
        assert!(opt.parse("maybe").is_err());
        assert!(opt.get());
        assert!(opt.user_set());

        let mut fresh = BoolOption::new(true, "");
        assert!(fresh.parse("maybe").is_err());
        assert!(!fresh.user_set());
    }

    #[test]
    fn test_ranged_bounds_are_normalized() {
        let opt = IntOption::new(5, 10, 0, "");
        assert_eq!(*opt.min(), 0);
        assert_eq!(*opt.max(), 10);
    }

    #[test]
    fn test_ranged_accepts_every_value_in_range() {
        let mut opt = IntOption::new(0, -3, 3, "");
        for x in -3..=3 {
            opt.parse(&x.to_string()).unwrap();
            assert_eq!(opt.get(), x);
            let rendered = opt.value_string();
            let mut again = IntOption::new(0, -3, 3, "");
            again.parse(&rendered).unwrap();
            assert_eq!(again.get(), x);
        }
    }

    #[test]
    fn test_ranged_rejects_out_of_range_without_clamping() {
        let mut opt = IntOption::new(2, 0, 3, "");
        for x in [-1, 4, 100, i32::MIN, i32::MAX] {
            let err = opt.parse(&x.to_string()).unwrap_err();
            assert!(matches!(err, InvalidValue::OutOfRange { .. }));
            assert_eq!(opt.get(), 2);
            assert!(!opt.user_set());
        }
    }

    #[test]
    fn test_ranged_min_equal_to_max() {
        let mut opt = IntOption::new(7, 7, 7, "");
        assert!(opt.parse("7").is_ok());
        assert!(opt.parse("6").is_err());
    }

    #[test]
    fn test_resolution_option_does_not_partially_update() {
        let mut opt = ResolutionOption::new(Resolution::new(320, 200), "");
        for text in ["640x480x200", "640", "abc"] {
            assert!(opt.parse(text).is_err());
            assert_eq!((opt.width(), opt.height()), (320, 200));
        }
        opt.parse("640x480").unwrap();
        assert_eq!((opt.width(), opt.height()), (640, 480));
        assert_eq!(opt.default_value_string(), "320x200");
    }

    #[test]
    fn test_option_ref_dispatch() {
        let mut mode = WindowModeOption::new(WindowMode::Windowed, "Window mode");
        {
            let mut opt = OptionRef::from(&mut mode);
            opt.parse("fullscreen").unwrap();
            assert!(opt.user_set());
            assert_eq!(opt.value_string(), "fullscreen");
            assert_eq!(opt.default_value_string(), "windowed");
            assert_eq!(opt.description(), "Window mode");
        }
        assert_eq!(mode.get(), WindowMode::Fullscreen);
    }
}
