//! Writing planned split artifacts to disk.
//!
//! Every file is created with create-new semantics, so an existing file
//! stops the run instead of being overwritten. Files written before the
//! failure stay on disk.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use nes_junk_ines::Artifact;

use crate::error::SplitError;

/// A file produced by [`write_artifacts`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifact {
    pub path: PathBuf,
    pub size: u64,
}

/// Destination for `suffix`: `<out_dir>/<input stem><suffix>`.
///
/// `out_dir` defaults to the input's own directory.
pub fn artifact_path(
    input: &Path,
    out_dir: Option<&Path>,
    suffix: &str,
) -> Result<PathBuf, SplitError> {
    let stem = input
        .file_stem()
        .ok_or_else(|| SplitError::NoFileStem(input.to_path_buf()))?;
    let mut name = stem.to_os_string();
    name.push(suffix);

    let dir = match out_dir {
        Some(dir) => dir,
        None => input.parent().unwrap_or_else(|| Path::new("")),
    };
    Ok(dir.join(name))
}

fn write_new(path: &Path, data: &[u8]) -> Result<(), SplitError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| {
            if e.kind() == io::ErrorKind::AlreadyExists {
                SplitError::ArtifactExists(path.to_path_buf())
            } else {
                SplitError::io(path, e)
            }
        })?;
    file.write_all(data).map_err(|e| SplitError::io(path, e))
}

/// Write `artifacts` in order, calling `on_written` after each file.
pub fn write_artifacts(
    input: &Path,
    out_dir: Option<&Path>,
    artifacts: &[Artifact<'_>],
    on_written: &mut dyn FnMut(&WrittenArtifact),
) -> Result<Vec<WrittenArtifact>, SplitError> {
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = artifact_path(input, out_dir, &artifact.suffix)?;
        write_new(&path, artifact.data)?;
        let entry = WrittenArtifact {
            path,
            size: artifact.data.len() as u64,
        };
        on_written(&entry);
        written.push(entry);
    }
    Ok(written)
}
