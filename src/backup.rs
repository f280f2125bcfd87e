//! Saves a copy of a pre-existing target before anything is written into it.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use walkdir::WalkDir;

use crate::constants::BACKUP_SUFFIX;
use crate::error::{Error, Result};
use crate::operation::OperationRunner;

/// `<parent>/<name>.backup` next to the target.
pub fn backup_path(target_root: &Path) -> Option<PathBuf> {
    let name = target_root.file_name()?.to_string_lossy();
    Some(target_root.with_file_name(format!("{name}{BACKUP_SUFFIX}")))
}

fn is_non_empty_dir(path: &Path) -> Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    Ok(fs::read_dir(path)?.next().is_some())
}

fn copy_tree(source: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(source).map_err(|e| Error::ProcessError {
            source_path: entry.path().display().to_string(),
            e: e.to_string(),
        })?;
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}

/// Copies a non-empty target to its sibling backup, replacing an older
/// backup. Returns where the backup went, if one was made.
pub fn backup_target(target_root: &Path, runner: &mut OperationRunner) -> Result<Option<PathBuf>> {
    if !is_non_empty_dir(target_root)? {
        debug!("Target '{}' is empty or missing, no backup needed", target_root.display());
        return Ok(None);
    }
    let Some(backup_dir) = backup_path(target_root) else {
        return Ok(None);
    };

    if runner.dry_run() {
        runner.report(format!(
            "[DRY RUN] Would create backup of '{}' at '{}'",
            target_root.display(),
            backup_dir.display()
        ));
        return Ok(None);
    }

    if backup_dir.exists() {
        fs::remove_dir_all(&backup_dir)?;
    }
    copy_tree(target_root, &backup_dir)?;
    runner.report(format!("Created backup at '{}'", backup_dir.display()));
    Ok(Some(backup_dir))
}
