use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nes_junk_lib::{Settings, settings_path};

use crate::error::CliError;

/// Print where the settings file lives.
pub(crate) fn run_config_path(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "{}", settings_path().display())?;
    Ok(())
}

/// Show the settings file status and the effective values.
pub(crate) fn run_config_show(settings: &Settings, out: &mut dyn Write) -> Result<(), CliError> {
    let path = settings_path();
    let rendered = settings.to_toml_string()?;

    writeln!(
        out,
        "{}",
        "nes-junk Configuration".if_supports_color(Stdout, |t| t.bold()),
    )?;
    writeln!(out)?;

    let status = if path.exists() {
        "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
    } else {
        "(not found, using defaults)"
            .if_supports_color(Stdout, |t| t.dimmed())
            .to_string()
    };
    writeln!(
        out,
        "  Config file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        status,
    )?;
    writeln!(out)?;

    for line in rendered.lines() {
        writeln!(out, "  {}", line)?;
    }
    Ok(())
}
