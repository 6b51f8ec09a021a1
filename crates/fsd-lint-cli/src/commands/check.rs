//! Check command: scan a project directory.
//!
//! Walks TypeScript sources (gitignore-aware), extracts import specifiers,
//! and runs the full project-scan pipeline including structure checks.

use anyhow::{Context, Result};
use fsd_lint::{AnalysisCoordinator, FileDescriptor};
use std::path::{Path, PathBuf};

use crate::extract;
use crate::OutputFormat;

/// File extensions handed to the analyzers.
const SUPPORTED_EXTS: &[&str] = &["ts", "tsx"];

/// Runs the check command.
pub fn run(path: &Path, format: OutputFormat, config: Option<&Path>) -> Result<()> {
    let source = crate::config_resolver::resolve(path, config);
    let rules = super::load_rules(&source)?;
    let coordinator = AnalysisCoordinator::new(rules);

    let files = discover_files(path)?;
    tracing::info!("Analyzing {} files", files.len());

    let mut descriptors = Vec::with_capacity(files.len());
    for file_path in &files {
        let content = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read {}", file_path.display()))?;

        let rel = file_path
            .strip_prefix(path)
            .unwrap_or(file_path)
            .to_string_lossy()
            .replace('\\', "/");

        let imports = extract::extract_imports(&content);
        descriptors.push(
            FileDescriptor::new(rel)
                .with_imports(imports)
                .with_content(content),
        );
    }

    let report = coordinator.analyze_project(&descriptors);
    super::output::print(&report, format)?;

    if report.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}

fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut builder = ignore::WalkBuilder::new(root);
    builder.hidden(false).git_ignore(true);

    let mut files = Vec::new();
    for entry in builder.build() {
        let entry = entry?;
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if !SUPPORTED_EXTS.contains(&ext) {
            continue;
        }

        files.push(path.to_path_buf());
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn discovers_only_supported_extensions() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src/shared/ui");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("button.tsx"), "export const Button = 1;").unwrap();
        fs::write(src.join("helpers.ts"), "export const x = 1;").unwrap();
        fs::write(src.join("readme.md"), "# nope").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| {
            let ext = f.extension().and_then(|e| e.to_str()).unwrap_or("");
            SUPPORTED_EXTS.contains(&ext)
        }));
    }

    #[test]
    fn discovery_is_sorted() {
        let tmp = TempDir::new().unwrap();
        let src = tmp.path().join("src");
        fs::create_dir_all(&src).unwrap();
        fs::write(src.join("b.ts"), "").unwrap();
        fs::write(src.join("a.ts"), "").unwrap();

        let files = discover_files(tmp.path()).unwrap();
        assert!(files.windows(2).all(|w| w[0] <= w[1]));
    }
}
