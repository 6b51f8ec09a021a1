//! Layer boundary enforcement.
//!
//! Checks caller-supplied import lists against the configured layer
//! allow-lists and, when barrel exports are enforced, flags imports that
//! reach past a slice's public entry point. No filesystem traversal and no
//! type resolution: the caller extracts the import specifiers, this agent
//! classifies them.

use std::collections::HashMap;

use fsd_lint_core::{AgentKind, FileDescriptor, RuleSet, Severity, Violation};

use crate::layer::LayerResolver;

/// Rule id for forbidden cross-layer imports.
pub const LAYER_RULE_ID: &str = "fsd-layer-violation";

/// Rule id for imports of slice internals.
pub const PRIVATE_IMPORT_RULE_ID: &str = "fsd-private-import";

/// Detects cross-layer and private-import violations.
pub struct BoundaryAnalyzer {
    resolver: LayerResolver,
    /// from-layer -> allowed target layers.
    allow: HashMap<String, Vec<String>>,
    enforce_barrel_exports: bool,
}

impl BoundaryAnalyzer {
    /// Build an analyzer from the rule document.
    #[must_use]
    pub fn new(rules: &RuleSet) -> Self {
        let allow = rules
            .fsd
            .boundaries
            .iter()
            .map(|b| (b.from.clone(), b.allow.clone()))
            .collect();

        Self {
            resolver: LayerResolver::new(&rules.fsd),
            allow,
            enforce_barrel_exports: rules.fsd.rules.enforce_barrel_exports,
        }
    }

    /// Check a batch of files for boundary violations.
    ///
    /// Files that match no configured layer are skipped entirely, as are
    /// imports that match no layer: absence of information is not a
    /// violation.
    #[must_use]
    pub fn analyze(&self, files: &[FileDescriptor]) -> Vec<Violation> {
        let mut violations = Vec::new();

        for file in files {
            let Some(from_layer) = self.resolver.resolve(&file.path) else {
                continue;
            };

            let allowed = self
                .allow
                .get(from_layer)
                .map_or(&[] as &[String], Vec::as_slice);

            for import in &file.imports {
                let Some(to_layer) = self.resolver.resolve(import) else {
                    continue;
                };

                if to_layer != from_layer && !allowed.iter().any(|a| a == to_layer) {
                    violations.push(
                        Violation::new(
                            AgentKind::FsdInspector,
                            LAYER_RULE_ID,
                            Severity::High,
                            format!("{} -> {import}", file.path),
                            format!(
                                "Layer violation: \"{from_layer}\" must not import from \"{to_layer}\"."
                            ),
                        )
                        .with_suggestion(
                            "Move the shared logic to the shared layer or refactor the dependency.",
                        ),
                    );
                }

                if self.enforce_barrel_exports && Some(to_layer) != self.resolver.foundational() {
                    violations.extend(self.check_private_import(&file.path, import, to_layer));
                }
            }
        }

        violations
    }

    /// An import reaching more than one segment past the layer segment
    /// bypasses the slice's public entry point.
    fn check_private_import(&self, path: &str, import: &str, to_layer: &str) -> Option<Violation> {
        let parts: Vec<&str> = import.split('/').collect();
        let layer_index = parts.iter().position(|p| *p == to_layer)?;

        if parts.len() <= layer_index + 2 {
            return None;
        }

        let slice = parts[layer_index + 1];
        Some(
            Violation::new(
                AgentKind::FsdInspector,
                PRIVATE_IMPORT_RULE_ID,
                Severity::Medium,
                format!("{path} -> {import}"),
                format!(
                    "Private import: access to slice \"{slice}\" must go through its public API (index.ts)."
                ),
            )
            .with_suggestion(format!(
                "Import from \"@/{to_layer}/{slice}\" instead of the internal path."
            )),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsd_lint_core::BoundaryDef;

    fn test_rules() -> RuleSet {
        let mut rules = RuleSet::default();
        rules.fsd.layers = vec![
            "features".to_string(),
            "entities".to_string(),
            "shared".to_string(),
        ];
        rules.fsd.boundaries = vec![
            BoundaryDef {
                from: "features".to_string(),
                allow: vec!["entities".to_string(), "shared".to_string()],
            },
            BoundaryDef {
                from: "entities".to_string(),
                allow: vec!["shared".to_string()],
            },
        ];
        rules
    }

    fn file(path: &str, imports: &[&str]) -> FileDescriptor {
        FileDescriptor::new(path).with_imports(imports.iter().copied())
    }

    #[test]
    fn upward_import_is_a_layer_violation() {
        let analyzer = BoundaryAnalyzer::new(&test_rules());
        let v = analyzer.analyze(&[file("src/entities/user/model.ts", &["src/features/auth"])]);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].rule_id, LAYER_RULE_ID);
        assert_eq!(v[0].severity, Severity::High);
        assert_eq!(v[0].location, "src/entities/user/model.ts -> src/features/auth");
        assert!(v[0].message.contains("\"entities\""));
        assert!(v[0].message.contains("\"features\""));
    }

    #[test]
    fn downward_import_is_allowed() {
        let analyzer = BoundaryAnalyzer::new(&test_rules());
        let v = analyzer.analyze(&[file("src/entities/user/model.ts", &["src/shared/ui"])]);
        assert!(v.is_empty());
    }

    #[test]
    fn same_layer_import_is_allowed() {
        let analyzer = BoundaryAnalyzer::new(&test_rules());
        let v = analyzer.analyze(&[file(
            "src/entities/user/index.ts",
            &["@/entities/session"],
        )]);
        assert!(v.is_empty());
    }

    #[test]
    fn file_outside_layers_is_skipped() {
        let analyzer = BoundaryAnalyzer::new(&test_rules());
        let v = analyzer.analyze(&[file("src/lib/helpers.ts", &["src/features/auth"])]);
        assert!(v.is_empty());
    }

    #[test]
    fn import_outside_layers_is_skipped() {
        let analyzer = BoundaryAnalyzer::new(&test_rules());
        let v = analyzer.analyze(&[file("src/features/auth/ui.tsx", &["react", "lodash/merge"])]);
        assert!(v.is_empty());
    }

    #[test]
    fn layer_without_boundary_entry_gets_no_allowance() {
        let mut rules = test_rules();
        rules.fsd.boundaries.retain(|b| b.from != "entities");
        let analyzer = BoundaryAnalyzer::new(&rules);
        let v = analyzer.analyze(&[file("src/entities/user/model.ts", &["src/shared/ui"])]);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].rule_id, LAYER_RULE_ID);
    }

    #[test]
    fn deep_import_is_a_private_import() {
        let analyzer = BoundaryAnalyzer::new(&test_rules());
        let v = analyzer.analyze(&[file(
            "src/features/auth/ui.tsx",
            &["@/entities/user/model/types"],
        )]);
        assert_eq!(v.len(), 1);
        assert_eq!(v[0].rule_id, PRIVATE_IMPORT_RULE_ID);
        assert_eq!(v[0].severity, Severity::Medium);
        assert!(v[0].message.contains("\"user\""));
        assert_eq!(
            v[0].suggestion.as_deref(),
            Some("Import from \"@/entities/user\" instead of the internal path.")
        );
    }

    #[test]
    fn slice_root_import_is_not_private() {
        let analyzer = BoundaryAnalyzer::new(&test_rules());
        let v = analyzer.analyze(&[file("src/features/auth/ui.tsx", &["@/entities/user"])]);
        assert!(v.is_empty());
    }

    #[test]
    fn foundational_layer_is_exempt_from_barrel_enforcement() {
        let analyzer = BoundaryAnalyzer::new(&test_rules());
        let v = analyzer.analyze(&[file(
            "src/features/auth/ui.tsx",
            &["@/shared/ui/button/icon"],
        )]);
        assert!(v.is_empty());
    }

    #[test]
    fn barrel_enforcement_can_be_disabled() {
        let mut rules = test_rules();
        rules.fsd.rules.enforce_barrel_exports = false;
        let analyzer = BoundaryAnalyzer::new(&rules);
        let v = analyzer.analyze(&[file(
            "src/features/auth/ui.tsx",
            &["@/entities/user/model/types"],
        )]);
        assert!(v.is_empty());
    }

    #[test]
    fn forbidden_deep_import_emits_both_violations() {
        let analyzer = BoundaryAnalyzer::new(&test_rules());
        let v = analyzer.analyze(&[file(
            "src/entities/user/model.ts",
            &["@/features/auth/model/store"],
        )]);
        assert_eq!(v.len(), 2);
        assert_eq!(v[0].rule_id, LAYER_RULE_ID);
        assert_eq!(v[1].rule_id, PRIVATE_IMPORT_RULE_ID);
    }
}
