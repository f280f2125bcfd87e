//! dropin scaffolds a project from the AppTemplate starter.
//! It copies the template tree into a target directory, renames the template
//! project to the new one and turns the template `AppItem` entity into the
//! entities the user asks for.

/// Backup of a pre-existing target directory
pub mod backup;

/// Command-line interface module for dropin
pub mod cli;

/// External code generators run after the copy
pub mod codegen;

/// Exclusion configuration
/// Supports JSON and YAML formats (dropin.json, dropin.yaml, dropin.yml)
pub mod config;

/// Common constants: template tokens, marker directories, role files
pub mod constants;

/// Resolved settings of a run
pub mod context;

/// Template tree traversal and copy
pub mod copier;

/// Per-entity file generation
pub mod entities;

/// Error types and handling for dropin
pub mod error;

/// Inclusion and exclusion of source paths
pub mod filter;

/// Pluralization of entity names
pub mod inflect;

/// Filesystem operations and dry-run reporting
pub mod operation;

/// Orchestration of a full run
pub mod runner;

/// Rewrite of the shared schema file
pub mod schema;

/// Source root validation and auto-detection
pub mod source;

/// Project-level and entity-level token substitution
pub mod transform;

/// go.mod, package.json and .devloop.yaml patches
pub mod updaters;
