use std::io::Write;
use std::path::{Path, PathBuf};

use nes_junk_ines::plan_split;
use nes_junk_lib::{Settings, artifact_path, write_artifacts};

use crate::error::CliError;

/// Split one image into its region files, listing each as
/// `<path>\t<size>` on `out`.
pub(crate) fn run_split(
    file: &Path,
    out_dir: Option<PathBuf>,
    dry_run: bool,
    settings: &Settings,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cart = super::load(file)?;
    super::log_warnings(file, &cart);

    let out_dir = settings.resolve_output_dir(out_dir);
    let artifacts = plan_split(&cart);

    if dry_run {
        log::info!("Dry run: no files will be written");
        for artifact in &artifacts {
            let path = artifact_path(file, out_dir.as_deref(), &artifact.suffix)?;
            writeln!(out, "{}\t{}", path.display(), artifact.data.len())?;
        }
        return Ok(());
    }

    // Files already on disk are listed even if a later one fails.
    let mut listed = Ok(());
    let result = write_artifacts(file, out_dir.as_deref(), &artifacts, &mut |w| {
        if listed.is_ok() {
            listed = writeln!(out, "{}\t{}", w.path.display(), w.size);
        }
    });
    listed?;
    let written = result?;
    log::debug!("wrote {} file(s) for {}", written.len(), file.display());
    Ok(())
}

#[cfg(test)]
#[path = "tests/split_tests.rs"]
mod tests;
