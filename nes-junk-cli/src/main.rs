//! nes-junk CLI
//!
//! Command-line interface for inspecting and splitting iNES cartridge images.

mod cli_types;
mod commands;
mod error;

use std::io::Write;

use clap::Parser;
use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use nes_junk_lib::Settings;

use cli_types::{Cli, Commands, ConfigAction};
use error::CliError;

/// Install the logger on stderr, keeping stdout for command output.
///
/// Info lines are printed bare; `RUST_LOG` overrides the level chosen by
/// the flags.
fn init_logger(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "WARN:".if_supports_color(Stderr, |t| t.yellow()),
                record.args(),
            ),
            Level::Error => writeln!(
                buf,
                "{} {}",
                "ERROR:".if_supports_color(Stderr, |t| t.bright_red()),
                record.args(),
            ),
            level => writeln!(
                buf,
                "{}",
                format!("[{} {}] {}", level, record.target(), record.args())
                    .if_supports_color(Stderr, |t| t.dimmed()),
            ),
        })
        .init();
}

fn run(cli: Cli, out: &mut dyn Write) -> Result<(), CliError> {
    match cli.command {
        Commands::Check {
            file,
            no_hash,
            hashes,
        } => {
            let settings = Settings::load()?;
            commands::check::run_check(&file, no_hash, hashes, &settings, out)
        }
        Commands::Split {
            file,
            out_dir,
            dry_run,
        } => {
            let settings = Settings::load()?;
            commands::split::run_split(&file, out_dir, dry_run, &settings, out)
        }
        Commands::Config { action } => match action {
            ConfigAction::Path => commands::config::run_config_path(out),
            ConfigAction::Show => commands::config::run_config_show(&Settings::load()?, out),
        },
    }
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose, cli.quiet);

    let result = run(cli, &mut std::io::stdout().lock());
    if let Err(e) = result {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
