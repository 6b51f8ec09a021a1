//! Orchestrates the agents over a batch of inputs and builds the report.

use fsd_lint_core::{CodeSnippet, FileDescriptor, Report, RuleSet, Violation};
use fsd_lint_agents::{
    generate_recommendations, BoundaryAnalyzer, NamingAnalyzer, StructureAnalyzer,
};
use tracing::{debug, info};

/// Runs the analysis agents and merges their output into a [`Report`].
///
/// The coordinator owns the rule document and the agents built from it; it is
/// stateless across requests, so one instance can serve concurrent callers.
pub struct AnalysisCoordinator {
    rules: RuleSet,
    boundary: BoundaryAnalyzer,
    naming: NamingAnalyzer,
    structure: StructureAnalyzer,
}

impl AnalysisCoordinator {
    /// Builds a coordinator (and its agents) from a rule document.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        let boundary = BoundaryAnalyzer::new(&rules);
        let naming = NamingAnalyzer::new(&rules);
        let structure = StructureAnalyzer::new(&rules);
        Self {
            rules,
            boundary,
            naming,
            structure,
        }
    }

    /// The rule document this coordinator was built from.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Analyzes a batch of file descriptors and code snippets.
    ///
    /// Violation order: boundary violations first (input file order), then
    /// naming violations (snippet order). Structure checks are not part of
    /// the batch path; use [`Self::analyze_project`] for a full scan.
    #[must_use]
    pub fn analyze_batch(&self, files: &[FileDescriptor], snippets: &[CodeSnippet]) -> Report {
        info!(
            "Analyzing batch: {} file(s), {} snippet(s)",
            files.len(),
            snippets.len()
        );

        let mut violations = self.boundary.analyze(files);
        for snippet in snippets {
            violations.extend(self.naming.analyze(&snippet.file_name, &snippet.content));
        }

        self.build_report(violations, files.len())
    }

    /// Analyzes a full project listing where descriptors carry content.
    ///
    /// Per file: naming violations (when content is present), then boundary
    /// violations. Structure violations follow, one batch per module, where a
    /// module is the first three path segments of files nested at least that
    /// deep; modules are visited in first-appearance order.
    #[must_use]
    pub fn analyze_project(&self, files: &[FileDescriptor]) -> Report {
        info!("Analyzing project: {} file(s)", files.len());

        let mut violations = Vec::new();

        for file in files {
            if let Some(content) = &file.content {
                violations.extend(self.naming.analyze(&file.path, content));
            }
            violations.extend(self.boundary.analyze(std::slice::from_ref(file)));
        }

        for (module, module_files) in group_modules(files) {
            debug!("Checking module structure: {module}");
            violations.extend(self.structure.check_module_structure(&module, &module_files));
        }

        self.build_report(violations, files.len())
    }

    fn build_report(&self, violations: Vec<Violation>, analyzed_files: usize) -> Report {
        let recommendations = generate_recommendations(&violations);
        Report::build(
            violations,
            analyzed_files,
            recommendations,
            chrono::Utc::now().to_rfc3339(),
        )
    }
}

/// Groups files by inferred module path (first three path segments, e.g.
/// `src/entities/user`), preserving first-appearance order. Files nested
/// fewer than three segments deep belong to no module.
fn group_modules(files: &[FileDescriptor]) -> Vec<(String, Vec<String>)> {
    let mut modules: Vec<(String, Vec<String>)> = Vec::new();

    for file in files {
        let parts: Vec<&str> = file.path.split('/').collect();
        if parts.len() < 3 {
            continue;
        }
        let module = parts[..3].join("/");
        if !modules.iter().any(|(m, _)| *m == module) {
            let module_files: Vec<String> = files
                .iter()
                .filter(|f| f.path.starts_with(&module))
                .map(|f| f.path.clone())
                .collect();
            modules.push((module, module_files));
        }
    }

    modules
}
