//! Batch command: run a JSON analysis request, CI-style.
//!
//! Reads the same `{ files, codeSnippets }` body the tool surface accepts and
//! prints the report as JSON. An unparseable body yields the generic error
//! envelope and a non-zero exit, never a partial report.

use anyhow::{Context, Result};
use fsd_lint::{service, ToolService};
use std::io::Read;
use std::path::Path;

/// Runs the batch command.
pub fn run(input: Option<&Path>, config: Option<&Path>) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let source = crate::config_resolver::resolve(&cwd, config);
    let rules = super::load_rules(&source)?;

    let body = read_body(input)?;

    let request: serde_json::Value = match serde_json::from_str(&body) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("Unparseable request body: {e}");
            let envelope = service::error_envelope("Internal Server Error");
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            std::process::exit(1);
        }
    };

    let tool_service = ToolService::new(rules);
    let report = tool_service.analyze_project(&request);

    println!("{}", serde_json::to_string_pretty(&report)?);

    if report.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn read_body(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read request body from stdin")?;
            Ok(body)
        }
    }
}
