//! Runs the downstream generators once every file is written.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{info, warn};

use crate::error::{Error, Result};
use crate::operation::OperationRunner;

/// An external command and the directory it runs in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorCommand {
    pub program: String,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
}

impl GeneratorCommand {
    pub fn new(program: &str, args: &[&str], working_dir: PathBuf) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
            working_dir,
        }
    }

    /// The command line as typed in a shell.
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Runs the command with inherited stdout and stderr.
    ///
    /// # Errors
    /// * `Error::IoError` if the program cannot be started
    /// * `Error::CommandError` if it exits unsuccessfully
    pub fn run(&self) -> Result<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(&self.working_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;

        if !status.success() {
            return Err(Error::CommandError { command: self.display(), status });
        }
        Ok(())
    }
}

/// `buf generate` in the target, then the frontend build in `target/web`.
pub fn generator_commands(target_root: &Path) -> Vec<GeneratorCommand> {
    vec![
        GeneratorCommand::new("buf", &["generate"], target_root.to_path_buf()),
        GeneratorCommand::new("make", &["build-frontend"], target_root.join("web")),
    ]
}

/// Runs every generator. Failures are warnings and never undo written files.
pub fn run_generators(commands: &[GeneratorCommand], runner: &mut OperationRunner) {
    for command in commands {
        if runner.dry_run() {
            runner.report(format!("[DRY RUN] Would run: {}", command.display()));
            continue;
        }

        info!("Running '{}' in '{}'", command.display(), command.working_dir.display());
        match command.run() {
            Ok(()) => runner.report(format!("Ran: {}", command.display())),
            Err(e) => warn!("Failed to run '{}': {e}", command.display()),
        }
    }
}
