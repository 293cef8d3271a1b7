//! Resolved startup flags and the run mode that selects them

use serde::Serialize;

use crate::options::{Resolution, WindowMode};

/// Which bundle of options drives this run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    #[default]
    Game,
    Edit,
}

impl RunMode {
    /// Config section holding this mode's options
    pub fn section_name(self) -> &'static str {
        match self {
            RunMode::Game => "game",
            RunMode::Edit => "edit",
        }
    }
}

/// Final settings handed to video/audio setup
///
/// Built from the rc file by [`Settings::flags`](super::Settings::flags), then
/// adjusted by command line flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flags {
    pub window_mode: WindowMode,
    pub mono: bool,
    pub nosound: bool,
    pub grabmouse: bool,
    pub antialias: bool,
    pub software: bool,
    /// Internal game resolution; its aspect ratio need not match the window
    pub game_width: i32,
    pub game_height: i32,
    pub monitor: i32,
    /// Ignored in the fullscreen modes
    pub window_width: i32,
    pub window_height: i32,
    /// `None` means the built-in data directory
    pub datadir: Option<String>,
}

impl Default for Flags {
    fn default() -> Self {
        Self {
            window_mode: WindowMode::BorderlessFullscreen,
            mono: false,
            nosound: false,
            grabmouse: false,
            antialias: false,
            software: false,
            game_width: 320,
            game_height: 200,
            monitor: 0,
            window_width: 640,
            window_height: 480,
            datadir: None,
        }
    }
}

impl Flags {
    pub fn game_size(&self) -> Resolution {
        Resolution::new(self.game_width, self.game_height)
    }

    pub fn window_size(&self) -> Resolution {
        Resolution::new(self.window_width, self.window_height)
    }
}
