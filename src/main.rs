//! abuserc - inspect and generate Abuse configuration

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;

use abuserc::cli::{CliArgs, CliCommand, StartupConfig};
use abuserc::config;
use abuserc::keymap::{parse_key_name, InputDescriptor};
use abuserc::settings::{Flags, Settings, RC_HEADER};

fn main() -> Result<()> {
    let args = CliArgs::parse();
    abuserc::tracing::init();

    let startup = args.into_config().map_err(anyhow::Error::msg)?;
    let mut out = io::stdout().lock();

    match &startup.command {
        CliCommand::Show { json } => {
            let flags = resolve_flags(&startup)?;
            if *json {
                serde_json::to_writer_pretty(&mut out, &flags)
                    .context("Failed to serialize flags")?;
                writeln!(out)?;
            } else {
                print_flags(&mut out, &flags)?;
            }
        }
        CliCommand::Defaults => {
            Settings::new()
                .parser()
                .write_defaults(&mut out, RC_HEADER)
                .context("Failed to write default configuration")?;
        }
        CliCommand::Key { definitions } => {
            for definition in definitions {
                print_key(&mut out, definition)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Read the rc file and apply command line overrides
fn resolve_flags(startup: &StartupConfig) -> Result<Flags> {
    let path = match &startup.rc_path {
        Some(path) => path.clone(),
        None => config::default_rc_path().context("Cannot locate the configuration file")?,
    };

    let loaded = config::load_settings(&path, startup.mode);
    tracing::debug!("Configuration {}: {:?}", path.display(), loaded.status);

    let mut flags = loaded.flags;
    startup.overrides.apply(&mut flags);
    Ok(flags)
}

fn print_flags(out: &mut impl Write, flags: &Flags) -> io::Result<()> {
    writeln!(out, "window_mode = {}", flags.window_mode)?;
    writeln!(out, "window_size = {}", flags.window_size())?;
    writeln!(out, "game_size   = {}", flags.game_size())?;
    writeln!(out, "monitor     = {}", flags.monitor)?;
    writeln!(out, "software    = {}", flags.software)?;
    writeln!(out, "mono        = {}", flags.mono)?;
    writeln!(out, "nosound     = {}", flags.nosound)?;
    writeln!(out, "grabmouse   = {}", flags.grabmouse)?;
    writeln!(out, "antialias   = {}", flags.antialias)?;
    writeln!(
        out,
        "datadir     = {}",
        flags.datadir.as_deref().unwrap_or("(default)")
    )
}

fn print_key(out: &mut impl Write, definition: &str) -> io::Result<()> {
    let input = InputDescriptor::parse(definition);
    let legacy = match parse_key_name(definition) {
        Some(scancode) => format!("{} (scancode {})", scancode, scancode.0),
        None => "unknown".to_string(),
    };
    writeln!(out, "{:?}", definition)?;
    match input {
        InputDescriptor::Keyboard(scancode) => {
            writeln!(out, "  input:    {} (scancode {})", input, scancode.0)?
        }
        _ => writeln!(out, "  input:    {}", input)?,
    }
    writeln!(out, "  key name: {}", legacy)
}
