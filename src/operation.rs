//! Filesystem side effects, and the dry-run switch in front of them.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// One change to the target tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOperation {
    CreateDirectory { target: PathBuf },
    Copy { source: PathBuf, target: PathBuf },
    Write { target: PathBuf, content: String },
}

impl FileOperation {
    /// The path this operation changes.
    pub fn target(&self) -> &Path {
        match self {
            FileOperation::CreateDirectory { target }
            | FileOperation::Copy { target, .. }
            | FileOperation::Write { target, .. } => target,
        }
    }

    /// Describes the operation for the user.
    ///
    /// # Arguments
    /// * `dry_run` - Whether the operation is only being reported
    pub fn get_message(&self, dry_run: bool) -> String {
        let prefix = if dry_run { "[DRY RUN] Would " } else { "" };
        let verb = |verb: &str| {
            if dry_run {
                format!("{prefix}{}", verb.to_lowercase())
            } else {
                verb.to_string()
            }
        };

        match self {
            FileOperation::CreateDirectory { target } => {
                format!("{} directory '{}'", verb("Create"), target.display())
            }
            FileOperation::Copy { source, target } => format!(
                "{} '{}' to '{}'",
                verb("Copy"),
                source.display(),
                target.display()
            ),
            FileOperation::Write { target, .. } => {
                format!("{} '{}'", verb("Write"), target.display())
            }
        }
    }
}

/// Applies file operations, or only reports them in dry-run mode.
///
/// Every applied or reported operation is printed as one advisory line and
/// kept in [`OperationRunner::messages`].
#[derive(Debug, Default)]
pub struct OperationRunner {
    dry_run: bool,
    messages: Vec<String>,
}

impl OperationRunner {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run, messages: Vec::new() }
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    /// Advisory lines emitted so far, in order.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Prints and records a free-form advisory line.
    pub fn report<S: Into<String>>(&mut self, message: S) {
        let message = message.into();
        println!("{message}");
        self.messages.push(message);
    }

    /// Performs `operation` unless this is a dry run, then reports it.
    pub fn apply(&mut self, operation: &FileOperation) -> Result<()> {
        log::debug!("Handling file operation: {operation:?}");
        if !self.dry_run {
            match operation {
                FileOperation::CreateDirectory { target } => fs::create_dir_all(target)?,
                FileOperation::Copy { source, target } => {
                    ensure_parent(target)?;
                    fs::copy(source, target)?;
                }
                FileOperation::Write { target, content } => {
                    ensure_parent(target)?;
                    fs::write(target, content)?;
                }
            }
        }
        self.report(operation.get_message(self.dry_run));
        Ok(())
    }
}

fn ensure_parent(target: &Path) -> Result<()> {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
