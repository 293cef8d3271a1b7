//! The concrete option bundles declared by the game

use super::flags::{Flags, RunMode};
use super::registry::{RcParser, ROOT_SECTION};
use crate::options::{
    BoolOption, IntOption, Resolution, ResolutionOption, StringOption, WindowMode,
    WindowModeOption,
};

/// Header line written at the top of a generated rc file
pub const RC_HEADER: &str = "; Abuse-SDL Configuration File";

/// Options that differ between playing and editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbuseOptions {
    pub window_mode: WindowModeOption,
    pub software: BoolOption,
    pub mono: BoolOption,
    pub grabmouse: BoolOption,
    pub antialias: BoolOption,
    pub monitor: IntOption,
    pub window_size: ResolutionOption,
    pub game_size: ResolutionOption,
}

impl AbuseOptions {
    pub fn new(window_mode: WindowMode) -> Self {
        Self {
            window_mode: WindowModeOption::new(
                window_mode,
                "Window mode (one of windowed, borderless_fullscreen, or fullscreen)",
            ),
            software: BoolOption::new(false, "Force software renderer"),
            mono: BoolOption::new(false, "Use mono audio only (disable stereo sound)"),
            grabmouse: BoolOption::new(false, "Grab mouse, keeping it in the game window"),
            antialias: BoolOption::new(false, "antialias game (never use, looks terrible)"),
            monitor: IntOption::new(
                0,
                0,
                i32::MAX,
                "the monitor to use (0 is primary, order is OS-defined)",
            ),
            window_size: ResolutionOption::new(
                Resolution::new(640, 480),
                "default window size (used only in windowed/fullscreen mode)",
            ),
            game_size: ResolutionOption::new(
                Resolution::new(320, 200),
                "default game size (defaults to 320x200, the original game resolution)",
            ),
        }
    }

    /// Register every option in the parser's current section
    pub fn add_options<'a>(&'a mut self, parser: &mut RcParser<'a>) {
        parser.add_option("window_mode", &mut self.window_mode);
        parser.add_option("software", &mut self.software);
        parser.add_option("mono", &mut self.mono);
        parser.add_option("grabmouse", &mut self.grabmouse);
        parser.add_option("antialias", &mut self.antialias);
        parser.add_option("monitor", &mut self.monitor);
        parser.add_option("window_size", &mut self.window_size);
        parser.add_option("game_size", &mut self.game_size);
    }

    /// Copy these values into `flags`
    pub fn apply(&self, flags: &mut Flags) {
        flags.window_mode = self.window_mode.get();
        flags.software = self.software.get();
        flags.mono = self.mono.get();
        flags.grabmouse = self.grabmouse.get();
        flags.antialias = self.antialias.get();
        flags.monitor = self.monitor.get();
        flags.game_width = self.game_size.width();
        flags.game_height = self.game_size.height();
        flags.window_width = self.window_size.width();
        flags.window_height = self.window_size.height();
    }
}

/// Window mode the game starts in when nothing says otherwise
///
/// On macOS a fullscreen app gets its own desktop, so real fullscreen is the
/// natural default there.
pub fn default_game_window_mode() -> WindowMode {
    if cfg!(target_os = "macos") {
        WindowMode::Fullscreen
    } else {
        WindowMode::BorderlessFullscreen
    }
}

fn default_datadir() -> StringOption {
    match option_env!("ABUSE_ASSETDIR") {
        Some(dir) => StringOption::new(dir.to_string(), "Data directory (where Abuse data is stored)"),
        None => StringOption::new(String::new(), "Data directory (if blank, use default)"),
    }
}

/// Everything stored in the rc file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub datadir: StringOption,
    pub game: AbuseOptions,
    pub edit: AbuseOptions,
}

impl Default for Settings {
    fn default() -> Self {
        Self::new()
    }
}

impl Settings {
    pub fn new() -> Self {
        Self {
            datadir: default_datadir(),
            game: AbuseOptions::new(default_game_window_mode()),
            edit: AbuseOptions::new(WindowMode::Windowed),
        }
    }

    /// Registry over these settings: `datadir` at the root, then the `[game]`
    /// and `[edit]` bundles
    pub fn parser(&mut self) -> RcParser<'_> {
        let mut parser = RcParser::new();
        parser.set_section(ROOT_SECTION);
        parser.add_option("datadir", &mut self.datadir);
        parser.set_section(RunMode::Game.section_name());
        self.game.add_options(&mut parser);
        parser.set_section(RunMode::Edit.section_name());
        self.edit.add_options(&mut parser);
        parser.set_section(ROOT_SECTION);
        parser
    }

    pub fn options(&self, mode: RunMode) -> &AbuseOptions {
        match mode {
            RunMode::Game => &self.game,
            RunMode::Edit => &self.edit,
        }
    }

    /// Resolve the flags for `mode`
    pub fn flags(&self, mode: RunMode) -> Flags {
        let mut flags = Flags::default();
        self.options(mode).apply(&mut flags);
        let datadir = self.datadir.value();
        if !datadir.is_empty() {
            flags.datadir = Some(datadir.clone());
        }
        flags
    }

    /// The text of a freshly generated rc file
    pub fn defaults_text(&mut self) -> String {
        self.parser().defaults_string(RC_HEADER)
    }
}
