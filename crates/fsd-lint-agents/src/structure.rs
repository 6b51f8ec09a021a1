//! Module structure constraints.
//!
//! Operates on a module's file listing only: no directory traversal, the
//! caller supplies the paths.

use fsd_lint_core::{AgentKind, RuleSet, Severity, Violation};

/// Rule id for oversized flat model directories.
pub const MODEL_FOLDERS_RULE_ID: &str = "structure-model-folders";

/// Rule id for api modules missing a converter file.
pub const MANDATORY_CONVERTER_RULE_ID: &str = "structure-mandatory-converter-for-api";

/// Checks a module's file listing against the structure rules.
pub struct StructureAnalyzer {
    base_max_size: usize,
    subfolders: Vec<String>,
    converter_suffix: String,
    converters_mandatory: bool,
}

impl StructureAnalyzer {
    /// Build an analyzer from the rule document.
    #[must_use]
    pub fn new(rules: &RuleSet) -> Self {
        Self {
            base_max_size: rules.structure.model.base_max_size,
            subfolders: rules.structure.model.subfolders.clone(),
            converter_suffix: rules.structure.converters.suffix.clone(),
            converters_mandatory: rules.structure.converters.mandatory,
        }
    }

    /// Check one module (e.g., `src/entities/user`) given its file listing.
    #[must_use]
    pub fn check_module_structure(&self, module_path: &str, files: &[String]) -> Vec<Violation> {
        let mut violations = Vec::new();

        let model_files: Vec<&String> = files.iter().filter(|f| f.contains("/model/")).collect();
        if !model_files.is_empty() && model_files.len() > self.base_max_size {
            // Only flat model files trigger the split requirement
            let has_root_model_file = model_files.iter().any(|f| {
                f.split_once("/model/")
                    .is_some_and(|(_, rest)| !rest.contains('/'))
            });

            if has_root_model_file {
                violations.push(
                    Violation::new(
                        AgentKind::StyleEnforcer,
                        MODEL_FOLDERS_RULE_ID,
                        Severity::Medium,
                        module_path,
                        format!(
                            "Model has {} files. Move them to subfolders: {}.",
                            model_files.len(),
                            self.subfolders.join(", ")
                        ),
                    )
                    .with_suggestion("Organize model files into directories."),
                );
            }
        }

        let has_api_segment = files.iter().any(|f| f.contains("/api/"));
        if has_api_segment && self.converters_mandatory {
            let has_converter = files.iter().any(|f| f.ends_with(&self.converter_suffix));
            if !has_converter {
                violations.push(
                    Violation::new(
                        AgentKind::StyleEnforcer,
                        MANDATORY_CONVERTER_RULE_ID,
                        Severity::High,
                        module_path,
                        format!(
                            "Module \"{module_path}\" has an \"api\" segment but is missing a mandatory converter (*{}).",
                            self.converter_suffix
                        ),
                    )
                    .with_suggestion("Create a converter to decouple backend DTOs from frontend models."),
                );
            }
        }

        violations
    }
}
