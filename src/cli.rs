//! Command-line argument parsing
//!
//! Supports:
//! - The game's startup flags, applied on top of the rc file
//! - Showing the resolved flags
//! - Printing a default rc file
//! - Resolving input definitions for binding customization

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::options::WindowMode;
use crate::settings::{Flags, RunMode};

/// Inspect and generate Abuse configuration
#[derive(Parser, Debug)]
#[command(name = "abuserc", version, about = "Inspect and generate Abuse configuration")]
pub struct CliArgs {
    /// Use the level editor's settings
    #[arg(long, global = true)]
    pub edit: bool,

    /// Run in fullscreen mode
    #[arg(long, global = true, conflicts_with_all = ["borderless", "window"])]
    pub fullscreen: bool,

    /// Run in borderless fullscreen mode
    #[arg(long, global = true, conflicts_with = "window")]
    pub borderless: bool,

    /// Run in a window
    #[arg(long, global = true)]
    pub window: bool,

    /// Internal game resolution
    #[arg(long, global = true, num_args = 2, value_names = ["WIDTH", "HEIGHT"])]
    pub size: Option<Vec<i32>>,

    /// Force the software renderer
    #[arg(long, global = true)]
    pub software: bool,

    /// Disable sound
    #[arg(long, global = true)]
    pub nosound: bool,

    /// Antialias the game display
    #[arg(long, global = true)]
    pub antialias: bool,

    /// Use mono audio only
    #[arg(long, global = true)]
    pub mono: bool,

    /// Keep the mouse inside the game window
    #[arg(long, global = true)]
    pub grabmouse: bool,

    /// Directory holding the game data
    #[arg(long, global = true, value_name = "DIR")]
    pub datadir: Option<String>,

    /// Read this rc file instead of the one in the save directory
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Print the resolved startup flags (default)
    Show {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a configuration file holding every default
    Defaults,
    /// Resolve input definitions such as "Left Ctrl" or "mouse button left"
    Key {
        #[arg(required = true, value_name = "DEFINITION")]
        definitions: Vec<String>,
    },
}

/// Command line settings that override the rc file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagOverrides {
    pub window_mode: Option<WindowMode>,
    pub game_size: Option<(i32, i32)>,
    pub software: bool,
    pub nosound: bool,
    pub antialias: bool,
    pub mono: bool,
    pub grabmouse: bool,
    pub datadir: Option<String>,
}

impl FlagOverrides {
    /// Apply on top of flags resolved from the rc file
    ///
    /// Switches can only turn features on; the rc file decides otherwise.
    pub fn apply(&self, flags: &mut Flags) {
        if let Some(mode) = self.window_mode {
            flags.window_mode = mode;
        }
        if let Some((width, height)) = self.game_size {
            flags.game_width = width;
            flags.game_height = height;
        }
        flags.software |= self.software;
        flags.nosound |= self.nosound;
        flags.antialias |= self.antialias;
        flags.mono |= self.mono;
        flags.grabmouse |= self.grabmouse;
        if let Some(dir) = &self.datadir {
            flags.datadir = Some(dir.clone());
        }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: RunMode,
    pub overrides: FlagOverrides,
    /// Explicit rc file, if one was given
    pub rc_path: Option<PathBuf>,
    pub command: CliCommand,
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let window_mode = if self.fullscreen {
            Some(WindowMode::Fullscreen)
        } else if self.borderless {
            Some(WindowMode::BorderlessFullscreen)
        } else if self.window {
            Some(WindowMode::Windowed)
        } else {
            None
        };

        let game_size = match self.size.as_deref() {
            None => None,
            Some(&[width, height]) if width > 0 && height > 0 => Some((width, height)),
            Some(other) => {
                return Err(format!(
                    "Invalid --size {:?}: expected two positive integers",
                    other
                ))
            }
        };

        Ok(StartupConfig {
            mode: if self.edit { RunMode::Edit } else { RunMode::Game },
            overrides: FlagOverrides {
                window_mode,
                game_size,
                software: self.software,
                nosound: self.nosound,
                antialias: self.antialias,
                mono: self.mono,
                grabmouse: self.grabmouse,
                datadir: self.datadir,
            },
            rc_path: self.config,
            command: self.command.unwrap_or(CliCommand::Show { json: false }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> StartupConfig {
        let mut argv = vec!["abuserc"];
        argv.extend_from_slice(args);
        CliArgs::try_parse_from(argv).unwrap().into_config().unwrap()
    }

    #[test]
    fn test_no_args_shows_game_flags() {
        let config = parse(&[]);
        assert_eq!(config.mode, RunMode::Game);
        assert_eq!(config.command, CliCommand::Show { json: false });
        assert_eq!(config.overrides, FlagOverrides::default());
        assert_eq!(config.rc_path, None);
    }

    #[test]
    fn test_window_mode_switches() {
        assert_eq!(
            parse(&["--fullscreen"]).overrides.window_mode,
            Some(WindowMode::Fullscreen)
        );
        assert_eq!(
            parse(&["--borderless"]).overrides.window_mode,
            Some(WindowMode::BorderlessFullscreen)
        );
        assert_eq!(
            parse(&["--window"]).overrides.window_mode,
            Some(WindowMode::Windowed)
        );
        assert!(CliArgs::try_parse_from(["abuserc", "--window", "--fullscreen"]).is_err());
    }

    #[test]
    fn test_size_takes_two_values() {
        let config = parse(&["--size", "640", "400"]);
        assert_eq!(config.overrides.game_size, Some((640, 400)));
        assert!(CliArgs::try_parse_from(["abuserc", "--size", "640"]).is_err());

        let args = CliArgs::try_parse_from(["abuserc", "--size", "0", "400"]).unwrap();
        assert!(args.into_config().is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let config = parse(&["show", "--json", "--edit", "--mono"]);
        assert_eq!(config.mode, RunMode::Edit);
        assert_eq!(config.command, CliCommand::Show { json: true });
        assert!(config.overrides.mono);
    }

    #[test]
    fn test_key_command_requires_definitions() {
        assert!(CliArgs::try_parse_from(["abuserc", "key"]).is_err());
        let config = parse(&["key", "Left Ctrl", "mouse button left"]);
        assert_eq!(
            config.command,
            CliCommand::Key {
                definitions: vec!["Left Ctrl".to_string(), "mouse button left".to_string()],
            }
        );
    }

    #[test]
    fn test_overrides_apply_on_top_of_flags() {
        let mut flags = Flags {
            mono: true,
            ..Flags::default()
        };
        let overrides = FlagOverrides {
            window_mode: Some(WindowMode::Windowed),
            game_size: Some((400, 300)),
            nosound: true,
            datadir: Some("/data".to_string()),
            ..FlagOverrides::default()
        };
        overrides.apply(&mut flags);

        assert_eq!(flags.window_mode, WindowMode::Windowed);
        assert_eq!((flags.game_width, flags.game_height), (400, 300));
        assert!(flags.nosound);
        assert!(flags.mono);
        assert_eq!(flags.datadir.as_deref(), Some("/data"));
    }
}
