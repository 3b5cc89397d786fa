use std::io::Write;
use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use nes_junk_core::HashAlgorithm;
use nes_junk_lib::{Report, ReportLine, Settings, build_report, hash_cartridge};

use crate::error::CliError;

/// Print the report for one image to `out`.
pub(crate) fn run_check(
    file: &Path,
    no_hash: bool,
    hashes: Option<Vec<HashAlgorithm>>,
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cart = super::load(file)?;

    let algorithms = if no_hash {
        Vec::new()
    } else {
        settings.resolve_hashes(hashes)
    };
    let digests = (!algorithms.is_empty()).then(|| hash_cartridge(&cart, &algorithms));

    let report = build_report(&cart, digests.as_ref(), &algorithms);
    write_report(&report, out)?;
    super::log_warnings(file, &cart);
    Ok(())
}

fn write_report(report: &Report, out: &mut dyn Write) -> std::io::Result<()> {
    for line in report.lines() {
        match line {
            ReportLine::Blank => writeln!(out)?,
            ReportLine::Title(title) => writeln!(
                out,
                "{}",
                format!("{}:", title).if_supports_color(Stdout, |t| t.bold()),
            )?,
            ReportLine::Row {
                indent,
                label,
                value,
            } => writeln!(
                out,
                "{}{} : {}",
                indent,
                label.if_supports_color(Stdout, |t| t.cyan()),
                value,
            )?,
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tests/check_tests.rs"]
mod tests;
