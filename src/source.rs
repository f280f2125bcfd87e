//! Locates and validates the AppTemplate source root.

use std::path::{Path, PathBuf};

use log::debug;

use crate::constants::SOURCE_MARKERS;
use crate::context::absolutize;
use crate::error::{Error, Result};

/// Whether `dir` holds every marker subdirectory.
pub fn is_template_root(dir: &Path) -> bool {
    SOURCE_MARKERS.iter().all(|marker| dir.join(marker).is_dir())
}

/// Checks an explicitly given source root.
///
/// # Errors
/// * `Error::SourceDoesNotExistError` if the directory is missing
/// * `Error::InvalidSourceError` if it lacks the `protos` marker
pub fn validate_source(source_root: &Path) -> Result<()> {
    if !source_root.is_dir() {
        return Err(Error::SourceDoesNotExistError {
            source_dir: source_root.display().to_string(),
        });
    }

    let marker = SOURCE_MARKERS[0];
    if !source_root.join(marker).is_dir() {
        return Err(Error::InvalidSourceError {
            source_dir: source_root.display().to_string(),
            marker: marker.to_string(),
        });
    }
    Ok(())
}

/// Directories searched when no source is given: the executable's directory
/// and two of its ancestors, then the working directory.
pub fn candidate_roots() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Ok(exe) = std::env::current_exe() {
        candidates.extend(exe.ancestors().skip(1).take(3).map(Path::to_path_buf));
    }
    if let Ok(cwd) = std::env::current_dir() {
        candidates.push(cwd);
    }
    candidates
}

/// Picks the first candidate that looks like an AppTemplate root.
pub fn detect_source(candidates: &[PathBuf]) -> Result<PathBuf> {
    candidates
        .iter()
        .inspect(|candidate| debug!("Looking for AppTemplate in {}", candidate.display()))
        .find(|candidate| is_template_root(candidate))
        .cloned()
        .ok_or_else(|| Error::SourceNotFoundError {
            searched: candidates
                .iter()
                .map(|c| format!("'{}'", c.display()))
                .collect::<Vec<_>>()
                .join(", "),
        })
}

/// Returns the absolute source root, validating an explicit one or
/// auto-detecting it otherwise.
pub fn resolve_source(explicit: Option<&Path>) -> Result<PathBuf> {
    match explicit {
        Some(source) => {
            let source_root = absolutize(source)?;
            validate_source(&source_root)?;
            Ok(source_root)
        }
        None => detect_source(&candidate_roots()),
    }
}
