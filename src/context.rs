//! Resolved settings of a single run.

use std::path::{Component, Path, PathBuf};

use crate::cli::Args;
use crate::error::{Error, Result};
use crate::source::resolve_source;

/// The project being created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Lowercase project name, replaces `apptemplate`.
    pub name: String,
    /// Go module path, replaces `github.com/panyam/apptemplate`.
    pub module_path: String,
}

impl Project {
    pub fn new<S: Into<String>, T: Into<String>>(name: S, module_path: T) -> Self {
        Self { name: name.into(), module_path: module_path.into() }
    }

    /// Uses `github.com/$USER/<name>` when no module path is given.
    pub fn with_default_module_path<S: Into<String>>(name: S, module_path: Option<String>) -> Self {
        let name = name.into();
        let module_path = module_path.unwrap_or_else(|| {
            let user = std::env::var("USER").unwrap_or_else(|_| "user".to_string());
            format!("github.com/{user}/{name}")
        });
        Self { name, module_path }
    }
}

/// Everything the pipeline needs, fixed before the first file is touched.
#[derive(Debug, Clone)]
pub struct Context {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
    pub entities: Vec<String>,
    pub project: Project,
    pub exclude_template_entity: bool,
    pub dry_run: bool,
    pub skip_codegen: bool,
    pub config_path: Option<PathBuf>,
}

impl Context {
    /// Resolves paths, names and entities from the command line.
    ///
    /// # Errors
    /// * `Error::ValidationError` for an empty or malformed entity list
    /// * Source resolution errors, see [`resolve_source`]
    pub fn from_args(args: &Args) -> Result<Self> {
        let entities = parse_entities(&args.entities)?;
        let target_root = absolutize(args.target())?;
        let source_root = resolve_source(args.source().map(PathBuf::as_path))?;

        let project_name = match &args.project_name {
            Some(name) => name.clone(),
            None => directory_name(&target_root)?,
        };

        Ok(Self {
            source_root,
            target_root,
            entities,
            project: Project::with_default_module_path(project_name, args.module_path.clone()),
            exclude_template_entity: args.exclude_appitem,
            dry_run: args.dry_run,
            skip_codegen: args.skip_codegen,
            config_path: args.config.clone(),
        })
    }
}

/// Trims the entity names, drops empty ones and checks the rest.
///
/// Every name must start with an ASCII letter and contain only ASCII
/// letters and digits.
pub fn parse_entities(raw: &[String]) -> Result<Vec<String>> {
    let entities: Vec<String> = raw
        .iter()
        .map(|entity| entity.trim().to_string())
        .filter(|entity| !entity.is_empty())
        .collect();

    if entities.is_empty() {
        return Err(Error::ValidationError("at least one entity name is required".into()));
    }

    for entity in &entities {
        let starts_with_letter = entity.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_with_letter || !entity.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(Error::ValidationError(format!(
                "entity name '{entity}' must be alphanumeric and start with a letter"
            )));
        }
    }

    Ok(entities)
}

/// Makes `path` absolute against the working directory and removes `.` and
/// `..` components lexically, without touching the filesystem.
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    let path = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()?.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}

fn directory_name(path: &Path) -> Result<String> {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(|| {
            Error::ValidationError(format!(
                "cannot derive a project name from '{}', pass --project-name",
                path.display()
            ))
        })
}
