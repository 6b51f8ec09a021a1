//! Rules command: print the active rule document as JSON.

use anyhow::{Context, Result};
use fsd_lint::ToolService;
use std::path::Path;

/// Runs the rules command.
pub fn run(config: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let source = crate::config_resolver::resolve(&cwd, config);
    let rules = super::load_rules(&source)?;

    let service = ToolService::new(rules);
    let document = service.get_rules();
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
