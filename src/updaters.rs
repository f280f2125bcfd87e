//! Post-generation patches of the project's structured files.
//!
//! Each updater is a no-op when its file does not exist in the target, and
//! running one twice gives the same result as running it once.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use log::{debug, warn};
use regex::Regex;

use crate::constants::project as template;
use crate::context::Project;
use crate::error::Result;
use crate::operation::{FileOperation, OperationRunner};

pub const GO_MOD: &str = "go.mod";
pub const PACKAGE_JSON: &str = "web/package.json";
pub const DEVLOOP_CONFIG: &str = ".devloop.yaml";

/// Points the `module` line of go.mod at the new module path.
pub fn update_go_mod(content: &str, project: &Project) -> Result<String> {
    let re = Regex::new(&format!(
        r"(?m)^module\s+{}[ \t]*$",
        regex::escape(template::MODULE_PATH)
    ))?;
    let replacement = format!("module {}", project.module_path);
    Ok(re.replace_all(content, regex::NoExpand(&replacement)).into_owned())
}

/// Sets `name` and `description` of package.json, keeping key order and the
/// other fields as they are.
pub fn update_package_json(content: &str, project: &Project) -> Result<String> {
    let mut manifest: IndexMap<String, serde_json::Value> = serde_json::from_str(content)?;
    manifest.insert("name".to_string(), serde_json::Value::String(project.name.clone()));
    manifest.insert(
        "description".to_string(),
        serde_json::Value::String(format!("{} web frontend", project.name)),
    );

    let mut updated = serde_json::to_string_pretty(&manifest)?;
    if content.ends_with('\n') {
        updated.push('\n');
    }
    Ok(updated)
}

/// Replaces the template project token in the task-runner config.
pub fn update_devloop_config(content: &str, project: &Project) -> String {
    content.replace(template::NAME, &project.name)
}

fn patch_file<F>(target_root: &Path, file: &str, runner: &mut OperationRunner, patch: F) -> Result<()>
where
    F: FnOnce(&str) -> Result<String>,
{
    let target = target_root.join(file);
    if !target.is_file() {
        debug!("'{file}' not present in target, nothing to update");
        return Ok(());
    }

    let content = fs::read_to_string(&target)?;
    let updated = patch(&content)?;
    if updated == content {
        debug!("'{file}' is already up to date");
        return Ok(());
    }
    runner.apply(&FileOperation::Write { target, content: updated })
}

/// Runs all three updaters against the target tree. A failing updater is
/// logged and does not stop the others.
pub fn update_project_configuration(
    target_root: &Path,
    project: &Project,
    runner: &mut OperationRunner,
) {
    let results = [
        (GO_MOD, patch_file(target_root, GO_MOD, runner, |c| update_go_mod(c, project))),
        (
            PACKAGE_JSON,
            patch_file(target_root, PACKAGE_JSON, runner, |c| update_package_json(c, project)),
        ),
        (
            DEVLOOP_CONFIG,
            patch_file(target_root, DEVLOOP_CONFIG, runner, |c| {
                Ok(update_devloop_config(c, project))
            }),
        ),
    ];
    for (file, result) in results {
        if let Err(e) = result {
            warn!("Failed to update '{file}': {e}");
        }
    }
}
