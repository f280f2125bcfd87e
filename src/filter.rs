//! Decides which source paths take part in the copy.

use crate::config::ExclusionConfig;
use crate::constants::WHITELISTED_DOTFILE;
use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;

fn build_glob_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        debug!("Adding exclusion pattern: {pattern}");
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// Compiled exclusion rules. Built once from an [`ExclusionConfig`] and
/// never mutated afterwards.
#[derive(Debug, Clone)]
pub struct PathFilter {
    exclude: GlobSet,
    entity_exclude: GlobSet,
    exclude_template_entity: bool,
}

impl PathFilter {
    /// Compiles the config's patterns.
    ///
    /// # Arguments
    /// * `config` - Generic and entity-specific glob patterns
    /// * `exclude_template_entity` - Whether entity-specific patterns apply
    ///
    /// # Errors
    /// * `Error::GlobSetParseError` if any pattern is not a valid glob
    pub fn new(config: &ExclusionConfig, exclude_template_entity: bool) -> Result<Self> {
        Ok(Self {
            exclude: build_glob_set(&config.exclude)?,
            entity_exclude: build_glob_set(&config.entity_exclude)?,
            exclude_template_entity,
        })
    }

    /// Returns whether `relative_path` (forward-slash separated, relative to
    /// the source root) is left out of the copy.
    ///
    /// Rules, first match wins:
    /// 1. the root (empty path) is kept;
    /// 2. any hidden component excludes the path, except the whitelisted dotfile;
    /// 3. a generic exclusion glob excludes it;
    /// 4. an entity exclusion glob excludes it when entity exclusion is on.
    pub fn should_exclude(&self, relative_path: &str) -> bool {
        if relative_path.is_empty() {
            return false;
        }

        if relative_path != WHITELISTED_DOTFILE
            && relative_path.split('/').any(|part| part.starts_with('.'))
        {
            return true;
        }

        if self.exclude.is_match(relative_path) {
            return true;
        }

        self.exclude_template_entity && self.entity_exclude.is_match(relative_path)
    }
}
