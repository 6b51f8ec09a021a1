//! Aggregate recommendations derived from a full violation list.

use fsd_lint_core::Violation;

use crate::naming::INTERFACE_RULE_ID;

/// Number of error-bucket violations above which a boundary refactor is
/// recommended.
const REFACTOR_THRESHOLD: usize = 5;

/// Derives advisory strings from the complete violation list.
///
/// Recommendations are aggregate heuristics, not tied 1:1 to violations; the
/// output order is fixed by heuristic priority.
#[must_use]
pub fn generate_recommendations(violations: &[Violation]) -> Vec<String> {
    let mut recommendations = Vec::new();

    let error_count = violations.iter().filter(|v| v.severity.is_error()).count();
    if error_count > REFACTOR_THRESHOLD {
        recommendations.push(
            "Critical architecture issues detected. Priority: Refactor layer boundaries."
                .to_string(),
        );
    }

    if violations.iter().any(|v| v.rule_id == INTERFACE_RULE_ID) {
        recommendations.push(
            "Consider running an automated codemod to fix interface naming prefixes (I_)."
                .to_string(),
        );
    }

    recommendations
}
