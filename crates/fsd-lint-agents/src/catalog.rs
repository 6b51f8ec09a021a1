//! Static catalog of every rule the agents can emit.

use fsd_lint_core::{AgentKind, Severity};

use crate::{boundary, naming, structure};

/// Descriptive entry for one rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleInfo {
    /// Stable rule id, as it appears in violations.
    pub id: &'static str,
    /// Agent that emits the rule.
    pub agent: AgentKind,
    /// Severity the rule emits at.
    pub severity: Severity,
    /// One-line description.
    pub description: &'static str,
}

/// Returns every rule in emission-source order.
#[must_use]
pub fn all_rules() -> Vec<RuleInfo> {
    vec![
        RuleInfo {
            id: boundary::LAYER_RULE_ID,
            agent: AgentKind::FsdInspector,
            severity: Severity::High,
            description: "Cross-layer import outside the configured allow-list",
        },
        RuleInfo {
            id: boundary::PRIVATE_IMPORT_RULE_ID,
            agent: AgentKind::FsdInspector,
            severity: Severity::Medium,
            description: "Import reaches past a slice's public entry point",
        },
        RuleInfo {
            id: naming::INTERFACE_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Medium,
            description: "Interface name missing the configured prefix or PascalCase remainder",
        },
        RuleInfo {
            id: naming::INTERFACE_BACKEND_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::High,
            description: "Interface in a backend file missing the backend suffix",
        },
        RuleInfo {
            id: naming::INTERFACE_FRONTEND_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Medium,
            description: "Interface in a regular file carrying the backend suffix",
        },
        RuleInfo {
            id: naming::TYPE_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Medium,
            description: "Type alias missing the configured prefix or PascalCase remainder",
        },
        RuleInfo {
            id: naming::ENUM_TYPE_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Medium,
            description: "Enum-style type alias not UPPER_CASE with the _TYPE suffix",
        },
        RuleInfo {
            id: naming::ENUM_CONST_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Medium,
            description: "Literal enum object missing the enum prefix",
        },
        RuleInfo {
            id: naming::NO_CONSOLE_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Medium,
            description: "console.* usage",
        },
        RuleInfo {
            id: naming::NO_ANY_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Medium,
            description: "`any` annotation or cast",
        },
        RuleInfo {
            id: naming::NO_ENUM_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Medium,
            description: "Native enum declaration (always flagged)",
        },
        RuleInfo {
            id: naming::NO_ADHOC_COLORS_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Medium,
            description: "Ad-hoc color utility class bypassing the theme",
        },
        RuleInfo {
            id: naming::USE_CN_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Low,
            description: "Composed class list without the class-merge utility",
        },
        RuleInfo {
            id: structure::MODEL_FOLDERS_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::Medium,
            description: "Oversized flat model directory",
        },
        RuleInfo {
            id: structure::MANDATORY_CONVERTER_RULE_ID,
            agent: AgentKind::StyleEnforcer,
            severity: Severity::High,
            description: "api segment without a mandatory converter file",
        },
    ]
}
