//! Copies the template tree into the target, rewriting text files.

use std::fs;
use std::path::Path;

use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::constants::{TRANSFORMABLE_BASENAMES, TRANSFORMABLE_EXTENSIONS};
use crate::context::Project;
use crate::error::{Error, Result};
use crate::filter::PathFilter;
use crate::operation::{FileOperation, OperationRunner};
use crate::transform::transform_project;

/// Whether a file is read as text and run through the project pass.
pub fn is_transformable<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    let basename_matches = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| TRANSFORMABLE_BASENAMES.contains(&name));
    let extension_matches = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TRANSFORMABLE_EXTENSIONS.contains(&ext));
    basename_matches || extension_matches
}

/// The entry's path relative to `root`, with forward slashes on every OS.
pub fn relative_path(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).map_err(|e| Error::ProcessError {
        source_path: path.display().to_string(),
        e: e.to_string(),
    })?;
    let parts: Vec<String> = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    Ok(parts.join("/"))
}

/// Walks the source tree depth-first and mirrors the included part into the
/// target.
pub struct TreeCopier<'a> {
    filter: &'a PathFilter,
    project: &'a Project,
}

impl<'a> TreeCopier<'a> {
    pub fn new(filter: &'a PathFilter, project: &'a Project) -> Self {
        Self { filter, project }
    }

    fn is_excluded(&self, source_root: &Path, dest_root: &Path, entry: &DirEntry) -> bool {
        if entry.depth() > 0 && entry.path() == dest_root {
            debug!("Skipping the target directory '{}' inside the source", dest_root.display());
            return true;
        }

        match relative_path(source_root, entry.path()) {
            Ok(relative) => {
                let excluded = self.filter.should_exclude(&relative);
                if excluded {
                    debug!("Skipping excluded path '{relative}'");
                }
                excluded
            }
            Err(_) => true,
        }
    }

    /// Decides what happens to one entry that passed the filter.
    ///
    /// # Returns
    /// * `Result<FileOperation>` - Create, copy or write at the project-renamed path
    ///
    /// # Errors
    /// * `Error::ProcessError` if a text file cannot be read
    pub fn plan(&self, source_root: &Path, dest_root: &Path, entry: &Path) -> Result<FileOperation> {
        let relative = relative_path(source_root, entry)?;
        let target = if relative.is_empty() {
            dest_root.to_path_buf()
        } else {
            dest_root.join(transform_project(&relative, self.project)?)
        };

        if entry.is_dir() {
            return Ok(FileOperation::CreateDirectory { target });
        }

        if is_transformable(entry) {
            let content = fs::read_to_string(entry).map_err(|e| Error::ProcessError {
                source_path: relative.clone(),
                e: e.to_string(),
            })?;
            Ok(FileOperation::Write { target, content: transform_project(&content, self.project)? })
        } else {
            Ok(FileOperation::Copy { source: entry.to_path_buf(), target })
        }
    }

    /// Copies `source_root` into `dest_root`.
    ///
    /// Excluded directories are pruned without descending, and so is
    /// `dest_root` when it lies inside `source_root`. A failure on one entry
    /// is logged and skipped; only a missing source root is fatal.
    pub fn copy(&self, source_root: &Path, dest_root: &Path, runner: &mut OperationRunner) -> Result<()> {
        if !source_root.is_dir() {
            return Err(Error::SourceDoesNotExistError {
                source_dir: source_root.display().to_string(),
            });
        }

        let walker = WalkDir::new(source_root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !self.is_excluded(source_root, dest_root, entry));

        for dir_entry in walker {
            let entry = match dir_entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("{}", Error::WalkError(e));
                    continue;
                }
            };

            let result = self
                .plan(source_root, dest_root, entry.path())
                .and_then(|operation| runner.apply(&operation));
            if let Err(e) = result {
                warn!("{e}");
            }
        }
        Ok(())
    }
}
