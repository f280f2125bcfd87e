//! Rewrites the shared schema-definition file (`models.proto`).
//!
//! The file is copied once per run. With the template entity excluded, its
//! `message AppItem { ... }` block is removed and one message per entity is
//! appended, rendered from [`MESSAGE_TEMPLATE`].

use std::fs;
use std::path::Path;

use log::debug;
use minijinja::Environment;
use regex::Regex;

use crate::constants::{entity, SCHEMA_FILE};
use crate::context::Project;
use crate::error::Result;
use crate::operation::{FileOperation, OperationRunner};
use crate::transform::transform_project;

/// Field layout shared by every synthesized entity message.
pub const MESSAGE_TEMPLATE: &str = r#"// {{ name }} represents a {{ lower }} in the system
message {{ name }} {
  google.protobuf.Timestamp created_at = 1;
  google.protobuf.Timestamp updated_at = 2;

  // Unique ID for the {{ lower }}
  string id = 3;

  // Name of the {{ lower }}
  string name = 4;

  // Description of the {{ lower }}
  string description = 5;

  // Tags associated with the {{ lower }}
  repeated string tags = 6;

  // Image URL for the {{ lower }}
  string image_url = 7;

  // Example attribute of the {{ lower }}
  string difficulty = 8;
}
"#;

/// Renders the message block for one entity, ending in a newline.
pub fn render_message_block(entity_name: &str) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("message", MESSAGE_TEMPLATE)?;
    let context = serde_json::json!({
        "name": entity_name,
        "lower": entity_name.to_lowercase(),
    });
    let rendered = env.get_template("message")?.render(context)?;
    Ok(format!("{}\n", rendered.trim_end()))
}

/// Deletes the block that starts with the `message <name> {` line and ends at
/// the first closing brace in column zero, together with the `//` comment
/// lines directly above it and one blank line below it.
pub fn remove_message_block(content: &str, message_name: &str) -> Result<String> {
    let pattern = format!(
        r"(?m)^(?:[ \t]*//.*\r?\n)*message[ \t]+{}[ \t]*\{{(?s:.*?)^\}}[ \t]*(?:\r?\n)?(?:[ \t]*\r?\n)?",
        regex::escape(message_name)
    );
    let re = Regex::new(&pattern)?;
    Ok(re.replacen(content, 1, "").into_owned())
}

/// Produces the target schema content from the template's.
pub fn rewrite_schema(
    content: &str,
    project: &Project,
    entities: &[String],
    exclude_template_entity: bool,
) -> Result<String> {
    let mut content = transform_project(content, project)?;
    if !exclude_template_entity {
        return Ok(content);
    }

    content = remove_message_block(&content, entity::PASCAL_SINGULAR)?;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for entity_name in entities {
        content.push('\n');
        content.push_str(&render_message_block(entity_name)?);
    }
    Ok(content)
}

/// Copies the schema file into the target's project directory.
/// A template without a schema file is skipped silently.
pub fn generate_schema(
    source_root: &Path,
    dest_root: &Path,
    project: &Project,
    entities: &[String],
    exclude_template_entity: bool,
    runner: &mut OperationRunner,
) -> Result<()> {
    let source = source_root.join(SCHEMA_FILE);
    if !source.is_file() {
        debug!("No schema file at '{}'", source.display());
        return Ok(());
    }

    let content = fs::read_to_string(&source)?;
    let content = rewrite_schema(&content, project, entities, exclude_template_entity)?;
    let target = dest_root.join(transform_project(SCHEMA_FILE, project)?);
    runner.apply(&FileOperation::Write { target, content })
}
