//! Import extraction from TypeScript/TSX source.
//!
//! The analysis core never parses source itself; this collaborator pulls raw
//! import specifiers out with regexes, including path-relative and aliased
//! specifiers, and hands them to the boundary agent.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// import x from 'spec', import 'spec', export { x } from 'spec'
static IMPORT_FROM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?m)^\s*(?:import|export)\s+(?:[^;'"]*?\s+from\s+)?['"]([^'"]+)['"]"#)
        .unwrap_or_else(|e| panic!("import regex: {e}"))
});

// require('spec') and dynamic import('spec')
static CALL_IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?:\brequire|\bimport)\s*\(\s*['"]([^'"]+)['"]\s*\)"#)
        .unwrap_or_else(|e| panic!("call import regex: {e}"))
});

/// Extract all import specifiers from a source file, in order of first
/// appearance, without duplicates.
#[must_use]
pub fn extract_imports(source: &str) -> Vec<String> {
    let mut imports = Vec::new();
    let mut seen = HashSet::new();

    for line in source.lines() {
        let trimmed = line.trim();

        // Skip comments
        if trimmed.starts_with("//") || trimmed.starts_with('*') || trimmed.starts_with("/*") {
            continue;
        }

        for caps in IMPORT_FROM_RE.captures_iter(line) {
            if let Some(m) = caps.get(1) {
                let spec = m.as_str().to_string();
                if seen.insert(spec.clone()) {
                    imports.push(spec);
                }
            }
        }

        for caps in CALL_IMPORT_RE.captures_iter(line) {
            if let Some(m) = caps.get(1) {
                let spec = m.as_str().to_string();
                if seen.insert(spec.clone()) {
                    imports.push(spec);
                }
            }
        }
    }

    imports
}
