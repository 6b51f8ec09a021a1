//! CLI subcommand implementations.

pub mod batch;
pub mod check;
pub mod init;
pub mod list_rules;
pub mod output;
pub mod rules;

use anyhow::{Context, Result};
use fsd_lint::RuleSet;
use std::path::Path;

use crate::config_resolver::ConfigSource;

/// Loads the rule document for a resolved config source.
pub fn load_rules(source: &ConfigSource) -> Result<RuleSet> {
    match source {
        ConfigSource::Default => Ok(RuleSet::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let p: &Path = other.path().context("resolved config has no path")?;
            if source.is_global() {
                tracing::info!("Using global config: {}", p.display());
            }
            RuleSet::from_file(p).with_context(|| format!("Failed to load rules: {}", p.display()))
        }
    }
}
