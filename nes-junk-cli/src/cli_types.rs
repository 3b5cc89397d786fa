//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use nes_junk_core::HashAlgorithm;

#[derive(Parser)]
#[command(name = "nes-junk")]
#[command(about = "Inspect and split iNES / NES 2.0 cartridge images", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Print the header fields, sizes and hashes of an image
    Check {
        /// Path to the .nes file
        file: PathBuf,

        /// Skip computing hashes
        #[arg(long, conflicts_with = "hashes")]
        no_hash: bool,

        /// Digests to show (e.g., crc32,md5,sha1)
        #[arg(long, value_delimiter = ',')]
        hashes: Option<Vec<HashAlgorithm>>,
    },

    /// Write the trainer, PRG and CHR regions to separate files
    Split {
        /// Path to the .nes file
        file: PathBuf,

        /// Directory for the output files (default: next to the input)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,

        /// Show planned files without writing them
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Inspect the settings file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Print the settings file location
    Path,

    /// Print the effective settings
    Show,
}
