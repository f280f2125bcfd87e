//! Generates the entity-specific files for each requested entity.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::constants::ENTITY_ROLE_FILES;
use crate::context::Project;
use crate::error::{Error, Result};
use crate::operation::{FileOperation, OperationRunner};
use crate::transform::{transform_entity, transform_project};

/// Renames both the template entity and the template project in a
/// forward-slash relative path, e.g. `services/appitems_service.go` becomes
/// `services/books_service.go` for `Book`.
pub fn entity_destination(role_file: &str, entity: &str, project: &Project) -> Result<String> {
    transform_project(&transform_entity(role_file, entity)?, project)
}

/// Produces every role file of every entity.
pub struct EntityGenerator<'a> {
    project: &'a Project,
}

impl<'a> EntityGenerator<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// Plans one role file for one entity.
    ///
    /// # Returns
    /// * `Ok(None)` - The template has no file for this role
    /// * `Ok(Some(op))` - The write that produces the entity's file
    pub fn plan(
        &self,
        source_root: &Path,
        dest_root: &Path,
        role_file: &str,
        entity: &str,
    ) -> Result<Option<FileOperation>> {
        let source = source_root.join(role_file);
        if !source.is_file() {
            return Ok(None);
        }

        let content = fs::read_to_string(&source).map_err(|e| Error::ProcessError {
            source_path: role_file.to_string(),
            e: e.to_string(),
        })?;
        let content = transform_project(&transform_entity(&content, entity)?, self.project)?;
        let target = dest_root.join(entity_destination(role_file, entity, self.project)?);

        Ok(Some(FileOperation::Write { target, content }))
    }

    /// Generates all role files, entity by entity in the given order.
    ///
    /// Missing role templates and failing writes are warnings; the remaining
    /// roles and entities are still processed.
    pub fn generate(
        &self,
        source_root: &Path,
        dest_root: &Path,
        entities: &[String],
        runner: &mut OperationRunner,
    ) {
        for entity in entities {
            info!("Generating files for entity: {entity}");
            for role_file in ENTITY_ROLE_FILES {
                match self.plan(source_root, dest_root, role_file, entity) {
                    Ok(Some(operation)) => {
                        if let Err(e) = runner.apply(&operation) {
                            warn!("Failed to generate '{role_file}' for {entity}: {e}");
                        }
                    }
                    Ok(None) => warn!(
                        "Template file '{role_file}' not found, skipping it for entity {entity}"
                    ),
                    Err(e) => warn!("{e}"),
                }
            }
        }
    }
}
