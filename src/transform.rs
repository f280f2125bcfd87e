//! Literal token substitution over file content and paths.
//!
//! Both passes are ordered lists of `(old, new)` pairs applied in a single
//! left-to-right scan. At each position the first entry in table order that
//! matches wins, and replaced text is never scanned again. Longer tokens
//! precede the tokens they contain, so `AppItems` is never half-rewritten by
//! `AppItem`.

use cruet::case::{pascal::to_pascal_case, screaming_snake::to_screaming_snake_case};
use regex::{Captures, Regex};

use crate::constants::{entity, project};
use crate::context::Project;
use crate::error::Result;
use crate::inflect::EntityForms;

/// An ordered table of literal replacements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<(String, String)>,
}

impl SubstitutionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. Entries whose two sides are equal are dropped.
    pub fn push<S: Into<String>, T: Into<String>>(&mut self, old: S, new: T) -> &mut Self {
        let (old, new) = (old.into(), new.into());
        if !old.is_empty() && old != new {
            self.entries.push((old, new));
        }
        self
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    fn replacement(&self, matched: &str) -> String {
        self.entries
            .iter()
            .find(|(old, _)| old == matched)
            .map_or_else(|| matched.to_string(), |(_, new)| new.clone())
    }

    /// Replaces every occurrence of every entry in one pass over `content`.
    ///
    /// # Errors
    /// * `Error::RegexError` if the combined pattern exceeds the regex size limit
    pub fn apply(&self, content: &str) -> Result<String> {
        if self.entries.is_empty() {
            return Ok(content.to_string());
        }

        let alternation = self
            .entries
            .iter()
            .map(|(old, _)| regex::escape(old))
            .collect::<Vec<_>>()
            .join("|");
        let re = Regex::new(&alternation)?;
        Ok(re
            .replace_all(content, |caps: &Captures| self.replacement(&caps[0]))
            .into_owned())
    }
}

/// Builds the project-level table.
///
/// Entries run from the most specific fragment (the module path) down to the
/// bare tokens, so every fragment is rewritten exactly once.
pub fn project_table(project: &Project) -> SubstitutionTable {
    let name = project.name.as_str();
    let upper = to_screaming_snake_case(name);
    let display = to_pascal_case(name);

    let mut table = SubstitutionTable::new();
    table
        .push(project::MODULE_PATH, project.module_path.as_str())
        .push(format!("{}_", project::UPPER_NAME), format!("{upper}_"))
        .push(format!("package {}.v1;", project::NAME), format!("package {name}.v1;"))
        .push(format!("package {}", project::NAME), format!("package {name}"))
        .push(format!("gen/go/{}/", project::NAME), format!("gen/go/{name}/"))
        .push(format!("protos/{}/", project::NAME), format!("protos/{name}/"))
        .push(format!("{}/v1", project::NAME), format!("{name}/v1"))
        .push(format!("\"name\": \"{}\"", project::NAME), format!("\"name\": \"{name}\""))
        .push(format!("\"{}\"", project::NAME), format!("\"{name}\""))
        .push(format!("\"{}\"", project::DISPLAY_NAME), format!("\"{display}\""))
        .push(project::DISPLAY_NAME, display.as_str())
        .push(project::UPPER_NAME, upper.as_str())
        .push(project::NAME, name);
    table
}

/// Builds the entity-level table for one entity.
pub fn entity_table(entity_name: &str) -> SubstitutionTable {
    let forms = EntityForms::new(entity_name);

    let mut table = SubstitutionTable::new();
    table
        .push(entity::PASCAL_PLURAL, forms.pascal_plural.as_str())
        .push(entity::PASCAL_SINGULAR, forms.pascal_singular.as_str())
        .push(entity::LOWER_PLURAL, forms.lower_plural.as_str())
        .push(entity::LOWER_SINGULAR, forms.lower_singular.as_str());
    table
}

/// Rewrites project-wide identifiers in `content`.
pub fn transform_project(content: &str, project: &Project) -> Result<String> {
    project_table(project).apply(content)
}

/// Renames the template entity in `content` to `entity_name`.
pub fn transform_entity(content: &str, entity_name: &str) -> Result<String> {
    entity_table(entity_name).apply(content)
}
