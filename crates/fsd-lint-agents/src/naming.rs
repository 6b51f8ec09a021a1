//! Declaration naming and linter prohibitions.
//!
//! Regex-driven scans over raw source text, no parse tree. Declaration-level
//! checks (interfaces, type aliases, enums) emit one violation per offending
//! declaration; whole-file checks (console, any, colors, class-merge utility)
//! cap at one violation per file regardless of occurrence count.

use once_cell::sync::Lazy;
use regex::Regex;

use fsd_lint_core::{AgentKind, RuleSet, Severity, Violation};

/// Rule id for interfaces missing the configured prefix.
pub const INTERFACE_RULE_ID: &str = "interface-naming";
/// Rule id for backend interfaces missing the backend suffix.
pub const INTERFACE_BACKEND_RULE_ID: &str = "interface-backend-naming";
/// Rule id for frontend interfaces carrying the backend suffix.
pub const INTERFACE_FRONTEND_RULE_ID: &str = "interface-frontend-naming";
/// Rule id for type aliases missing the configured prefix.
pub const TYPE_RULE_ID: &str = "type-naming";
/// Rule id for malformed enum-style type aliases.
pub const ENUM_TYPE_RULE_ID: &str = "enum-type-naming";
/// Rule id for literal enum objects missing the enum prefix.
pub const ENUM_CONST_RULE_ID: &str = "enum-const-naming";
/// Rule id for console usage.
pub const NO_CONSOLE_RULE_ID: &str = "no-console";
/// Rule id for untyped escape hatches.
pub const NO_ANY_RULE_ID: &str = "no-any";
/// Rule id for native enum declarations.
pub const NO_ENUM_RULE_ID: &str = "no-enum";
/// Rule id for ad-hoc color utility classes.
pub const NO_ADHOC_COLORS_RULE_ID: &str = "no-adhoc-colors";
/// Rule id for missing class-merge utility usage.
pub const USE_CN_RULE_ID: &str = "use-cn-utility";

static INTERFACE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"interface\s+([A-Za-z0-9_]+)").unwrap_or_else(|e| panic!("interface regex: {e}"))
});
static TYPE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"type\s+([A-Za-z0-9_]+)\s*=").unwrap_or_else(|e| panic!("type regex: {e}"))
});
static CONST_ENUM_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)export\s+const\s+([A-Z][A-Z0-9_]+)\s*=\s*\{.*?\}\s*as\s+const")
        .unwrap_or_else(|e| panic!("const enum regex: {e}"))
});
static ENUM_DECL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"enum\s+([A-Za-z0-9_]+)").unwrap_or_else(|e| panic!("enum regex: {e}"))
});
static CONSOLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bconsole\.").unwrap_or_else(|e| panic!("console regex: {e}")));
static ANY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r":\s*any\b|as\s+any\b").unwrap_or_else(|e| panic!("any regex: {e}"))
});
static CLASS_LIST_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"className=["'][^"']+ [^"']+["']|className=\{[^}]+\}"#)
        .unwrap_or_else(|e| panic!("class list regex: {e}"))
});

/// Scans a single file's text for naming and linter violations.
pub struct NamingAnalyzer {
    interface_prefix: String,
    type_prefix: String,
    enum_prefix: String,
    backend_type_suffix: String,
    backend_file_suffix: String,
    no_console: bool,
    no_any: bool,
    required_utility: String,
    /// Compiled from the forbidden color list; `None` when the list is empty.
    color_re: Option<Regex>,
}

impl NamingAnalyzer {
    /// Build an analyzer from the rule document.
    #[must_use]
    pub fn new(rules: &RuleSet) -> Self {
        let color_re = if rules.styles.forbidden_colors.is_empty() {
            None
        } else {
            let tokens: Vec<String> = rules
                .styles
                .forbidden_colors
                .iter()
                .map(|c| regex::escape(c))
                .collect();
            let pattern = format!(r"\b({})-[a-z0-9]+\b", tokens.join("|"));
            Regex::new(&pattern).ok()
        };

        Self {
            interface_prefix: rules.naming.prefixes.interface.clone(),
            type_prefix: rules.naming.prefixes.type_alias.clone(),
            enum_prefix: rules.naming.prefixes.enum_object.clone(),
            backend_type_suffix: rules.naming.backend.type_suffix.clone(),
            backend_file_suffix: rules.naming.backend.file_suffix.clone(),
            no_console: rules.linter.no_console,
            no_any: rules.linter.no_any,
            required_utility: rules.styles.required_utility.clone(),
            color_re,
        }
    }

    /// Check one file's content. Pure function of its inputs.
    #[must_use]
    pub fn analyze(&self, file_name: &str, content: &str) -> Vec<Violation> {
        let mut violations = Vec::new();

        self.check_interfaces(file_name, content, &mut violations);
        self.check_type_aliases(file_name, content, &mut violations);
        self.check_const_enums(file_name, content, &mut violations);
        self.check_console(file_name, content, &mut violations);
        self.check_any(file_name, content, &mut violations);
        self.check_enum_decls(file_name, content, &mut violations);
        self.check_colors(file_name, content, &mut violations);
        self.check_class_merge(file_name, content, &mut violations);

        violations
    }

    fn check_interfaces(&self, file_name: &str, content: &str, out: &mut Vec<Violation>) {
        let is_backend_file = file_name.contains(&self.backend_file_suffix);

        for caps in INTERFACE_RE.captures_iter(content) {
            let name = &caps[1];
            let has_prefix = name.starts_with(&self.interface_prefix);
            let pascal_after = starts_uppercase(name, self.interface_prefix.len());
            let has_backend_suffix = name.ends_with(&self.backend_type_suffix);

            if !has_prefix || !pascal_after {
                out.push(
                    Violation::new(
                        AgentKind::StyleEnforcer,
                        INTERFACE_RULE_ID,
                        Severity::Medium,
                        file_name,
                        format!(
                            "Interface \"{name}\" does not follow the naming convention (must be {} + PascalCase).",
                            self.interface_prefix
                        ),
                    )
                    .with_suggestion(format!(
                        "Rename to {}{}",
                        self.interface_prefix,
                        capitalize(name)
                    )),
                );
            }

            if is_backend_file && !has_backend_suffix {
                out.push(
                    Violation::new(
                        AgentKind::StyleEnforcer,
                        INTERFACE_BACKEND_RULE_ID,
                        Severity::High,
                        file_name,
                        format!(
                            "Interface \"{name}\" in a backend file must have \"{}\" suffix.",
                            self.backend_type_suffix
                        ),
                    )
                    .with_suggestion(format!("Rename to {name}{}", self.backend_type_suffix)),
                );
            } else if !is_backend_file && has_backend_suffix {
                out.push(
                    Violation::new(
                        AgentKind::StyleEnforcer,
                        INTERFACE_FRONTEND_RULE_ID,
                        Severity::Medium,
                        file_name,
                        format!(
                            "Interface \"{name}\" should not have \"{}\" suffix in a regular file. Decouple UI from backend types.",
                            self.backend_type_suffix
                        ),
                    )
                    .with_suggestion(format!(
                        "Rename to {} and move the backend type to a \"{}\" file.",
                        name.replace(&self.backend_type_suffix, ""),
                        self.backend_file_suffix
                    )),
                );
            }
        }
    }

    fn check_type_aliases(&self, file_name: &str, content: &str, out: &mut Vec<Violation>) {
        for caps in TYPE_RE.captures_iter(content) {
            let name = &caps[1];

            if name.starts_with(&self.enum_prefix) {
                let well_formed = name.ends_with("_TYPE")
                    && name
                        .chars()
                        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');
                if !well_formed {
                    let mut renamed = name.to_uppercase();
                    if !renamed.ends_with("_TYPE") {
                        renamed.push_str("_TYPE");
                    }
                    out.push(
                        Violation::new(
                            AgentKind::StyleEnforcer,
                            ENUM_TYPE_RULE_ID,
                            Severity::Medium,
                            file_name,
                            format!(
                                "Enum type \"{name}\" must follow the pattern {}NAME_TYPE (all UPPER_CASE).",
                                self.enum_prefix
                            ),
                        )
                        .with_suggestion(format!("Rename to {renamed}")),
                    );
                }
            } else if !name.starts_with(&self.type_prefix)
                || !starts_uppercase(name, self.type_prefix.len())
            {
                out.push(
                    Violation::new(
                        AgentKind::StyleEnforcer,
                        TYPE_RULE_ID,
                        Severity::Medium,
                        file_name,
                        format!(
                            "Type \"{name}\" does not follow the naming convention (must be {} + PascalCase for regular types).",
                            self.type_prefix
                        ),
                    )
                    .with_suggestion(format!("Rename to {}{}", self.type_prefix, capitalize(name))),
                );
            }
        }
    }

    fn check_const_enums(&self, file_name: &str, content: &str, out: &mut Vec<Violation>) {
        for caps in CONST_ENUM_RE.captures_iter(content) {
            let name = &caps[1];
            if !name.starts_with(&self.enum_prefix) {
                out.push(
                    Violation::new(
                        AgentKind::StyleEnforcer,
                        ENUM_CONST_RULE_ID,
                        Severity::Medium,
                        file_name,
                        format!(
                            "Literal enum object \"{name}\" must start with \"{}\" prefix.",
                            self.enum_prefix
                        ),
                    )
                    .with_suggestion(format!("Rename to {}{name}", self.enum_prefix)),
                );
            }
        }
    }

    fn check_console(&self, file_name: &str, content: &str, out: &mut Vec<Violation>) {
        if self.no_console && CONSOLE_RE.is_match(content) {
            out.push(
                Violation::new(
                    AgentKind::StyleEnforcer,
                    NO_CONSOLE_RULE_ID,
                    Severity::Medium,
                    file_name,
                    "Usage of console.* is disallowed by linter rules.",
                )
                .with_suggestion("Remove console calls or use a proper logger."),
            );
        }
    }

    fn check_any(&self, file_name: &str, content: &str, out: &mut Vec<Violation>) {
        if self.no_any && ANY_RE.is_match(content) {
            out.push(
                Violation::new(
                    AgentKind::StyleEnforcer,
                    NO_ANY_RULE_ID,
                    Severity::Medium,
                    file_name,
                    "Use of `any` is disallowed by linter rules.",
                )
                .with_suggestion("Replace `any` with a more specific type."),
            );
        }
    }

    // Native enums are forbidden outright; the linter toggle does not gate this.
    fn check_enum_decls(&self, file_name: &str, content: &str, out: &mut Vec<Violation>) {
        for caps in ENUM_DECL_RE.captures_iter(content) {
            let name = &caps[1];
            let upper = name.to_uppercase();
            let prefix = &self.enum_prefix;
            out.push(
                Violation::new(
                    AgentKind::StyleEnforcer,
                    NO_ENUM_RULE_ID,
                    Severity::Medium,
                    file_name,
                    format!(
                        "Use of 'enum {name}' is disallowed. Replace with a literal exported object prefixed with {prefix}."
                    ),
                )
                .with_patch(format!(
                    "export const {prefix}{upper} = {{ /* ... */ }} as const;\nexport type {prefix}{upper}_TYPE = typeof {prefix}{upper}[keyof typeof {prefix}{upper}];"
                )),
            );
        }
    }

    fn check_colors(&self, file_name: &str, content: &str, out: &mut Vec<Violation>) {
        let Some(re) = &self.color_re else {
            return;
        };
        if re.is_match(content) {
            out.push(
                Violation::new(
                    AgentKind::StyleEnforcer,
                    NO_ADHOC_COLORS_RULE_ID,
                    Severity::Medium,
                    file_name,
                    "Usage of ad-hoc Tailwind colors is disallowed. Use theme-based variables (e.g., bg-background, text-primary).",
                )
                .with_suggestion("Replace hardcoded colors with design-system variables."),
            );
        }
    }

    fn check_class_merge(&self, file_name: &str, content: &str, out: &mut Vec<Violation>) {
        let uses_utility = content.contains(&format!("{}(", self.required_utility));
        if content.contains("className=") && !uses_utility && CLASS_LIST_RE.is_match(content) {
            out.push(
                Violation::new(
                    AgentKind::StyleEnforcer,
                    USE_CN_RULE_ID,
                    Severity::Low,
                    file_name,
                    format!("Use \"{}\" utility for class merging.", self.required_utility),
                )
                .with_suggestion(format!("Wrap classes in {}(...)", self.required_utility)),
            );
        }
    }
}

/// True when the character at `offset` exists and is ASCII uppercase.
fn starts_uppercase(name: &str, offset: usize) -> bool {
    name.len() > offset
        && name[offset..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_uppercase())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fsd_lint_core::RuleSet;

    fn analyzer() -> NamingAnalyzer {
        NamingAnalyzer::new(&RuleSet::default())
    }

    fn rule_ids(violations: &[Violation]) -> Vec<&str> {
        violations.iter().map(|v| v.rule_id.as_str()).collect()
    }

    #[test]
    fn unprefixed_interface_is_flagged() {
        let v = analyzer().analyze("user.types.ts", "interface User {}");
        assert_eq!(rule_ids(&v), vec![INTERFACE_RULE_ID]);
        assert_eq!(v[0].severity, Severity::Medium);
        assert_eq!(v[0].suggestion.as_deref(), Some("Rename to IUser"));
    }

    #[test]
    fn prefixed_interface_is_clean() {
        let v = analyzer().analyze("user.types.ts", "interface IUser {}");
        assert!(v.is_empty());
    }

    #[test]
    fn prefix_without_pascal_remainder_is_flagged() {
        // "Iuser" starts with the prefix but the remainder is lowercase
        let v = analyzer().analyze("user.types.ts", "interface Iuser {}");
        assert_eq!(rule_ids(&v), vec![INTERFACE_RULE_ID]);
    }

    #[test]
    fn backend_file_requires_backend_suffix() {
        let v = analyzer().analyze("user-backend.ts", "interface IUser {}");
        assert_eq!(rule_ids(&v), vec![INTERFACE_BACKEND_RULE_ID]);
        assert_eq!(v[0].severity, Severity::High);
        assert_eq!(v[0].suggestion.as_deref(), Some("Rename to IUserBackend"));
    }

    #[test]
    fn backend_suffix_in_backend_file_is_clean() {
        let v = analyzer().analyze("user-backend.ts", "interface IUserBackend {}");
        assert!(v.is_empty());
    }

    #[test]
    fn backend_suffix_in_frontend_file_is_flagged() {
        let v = analyzer().analyze("user.types.ts", "interface IUserBackend {}");
        assert_eq!(rule_ids(&v), vec![INTERFACE_FRONTEND_RULE_ID]);
        assert!(v[0].message.contains("Decouple UI from backend types"));
    }

    #[test]
    fn per_declaration_emission_for_interfaces() {
        let v = analyzer().analyze("x.ts", "interface User {}\ninterface Account {}");
        assert_eq!(rule_ids(&v), vec![INTERFACE_RULE_ID, INTERFACE_RULE_ID]);
    }

    #[test]
    fn unprefixed_type_alias_is_flagged() {
        let v = analyzer().analyze("x.ts", "type UserId = string;");
        assert_eq!(rule_ids(&v), vec![TYPE_RULE_ID]);
        assert_eq!(v[0].suggestion.as_deref(), Some("Rename to TUserId"));
    }

    #[test]
    fn prefixed_type_alias_is_clean() {
        let v = analyzer().analyze("x.ts", "type TUserId = string;");
        assert!(v.is_empty());
    }

    #[test]
    fn enum_style_type_must_be_upper_with_type_suffix() {
        let v = analyzer().analyze("x.ts", "type ENUM_Role = 'admin';");
        assert_eq!(rule_ids(&v), vec![ENUM_TYPE_RULE_ID]);
        assert_eq!(v[0].suggestion.as_deref(), Some("Rename to ENUM_ROLE_TYPE"));
    }

    #[test]
    fn well_formed_enum_type_is_clean() {
        let v = analyzer().analyze(
            "x.ts",
            "type ENUM_ROLE_TYPE = typeof ENUM_ROLE[keyof typeof ENUM_ROLE];",
        );
        assert!(v.is_empty());
    }

    #[test]
    fn literal_enum_object_needs_enum_prefix() {
        let content = "export const ROLES = {\n  ADMIN: 'admin',\n} as const;";
        let v = analyzer().analyze("x.ts", content);
        assert_eq!(rule_ids(&v), vec![ENUM_CONST_RULE_ID]);
        assert_eq!(v[0].suggestion.as_deref(), Some("Rename to ENUM_ROLES"));
    }

    #[test]
    fn prefixed_literal_enum_object_is_clean() {
        let content = "export const ENUM_ROLES = {\n  ADMIN: 'admin',\n} as const;";
        let v = analyzer().analyze("x.ts", content);
        assert!(v.is_empty());
    }

    #[test]
    fn console_fires_once_per_file() {
        let v = analyzer().analyze("x.ts", "console.log(1);\nconsole.error(2);");
        assert_eq!(rule_ids(&v), vec![NO_CONSOLE_RULE_ID]);
    }

    #[test]
    fn console_toggle_disables_check() {
        let mut rules = RuleSet::default();
        rules.linter.no_console = false;
        let v = NamingAnalyzer::new(&rules).analyze("x.ts", "console.log(1);");
        assert!(v.is_empty());
    }

    #[test]
    fn any_annotation_and_cast_fire_once() {
        let v = analyzer().analyze("x.ts", "const a: any = 1;\nconst b = x as any;");
        assert_eq!(rule_ids(&v), vec![NO_ANY_RULE_ID]);
    }

    #[test]
    fn native_enum_fires_regardless_of_toggles() {
        let mut rules = RuleSet::default();
        rules.linter.no_enums = false;
        rules.linter.no_console = false;
        rules.linter.no_any = false;
        let v = NamingAnalyzer::new(&rules).analyze("x.ts", "enum Role { ADMIN }");
        assert_eq!(rule_ids(&v), vec![NO_ENUM_RULE_ID]);
        assert!(v[0].patch.as_deref().is_some_and(|p| p.contains("ENUM_ROLE")));
    }

    #[test]
    fn adhoc_color_fires_once_per_file() {
        let v = analyzer().analyze(
            "x.tsx",
            r#"<div className="bg-slate-500" /><p className="text-red-300" />"#,
        );
        // Both class attributes are single-class, so only the color rule fires
        assert_eq!(rule_ids(&v), vec![NO_ADHOC_COLORS_RULE_ID]);
    }

    #[test]
    fn theme_tokens_are_not_colors() {
        let v = analyzer().analyze("x.tsx", r#"<div className="bg-background" />"#);
        assert!(v.is_empty());
    }

    #[test]
    fn multi_class_attribute_without_utility_is_flagged() {
        let v = analyzer().analyze("x.tsx", r#"<div className="flex items-center" />"#);
        assert_eq!(rule_ids(&v), vec![USE_CN_RULE_ID]);
        assert_eq!(v[0].severity, Severity::Low);
    }

    #[test]
    fn utility_call_satisfies_class_merge_rule() {
        let v = analyzer().analyze(
            "x.tsx",
            r#"<div className={cn("flex items-center", props.className)} />"#,
        );
        assert!(v.is_empty());
    }

    #[test]
    fn repeated_analysis_is_deterministic() {
        let a = analyzer();
        let content = "interface User {}\nconsole.log(1);\nenum Role { A }";
        assert_eq!(a.analyze("x.ts", content), a.analyze("x.ts", content));
    }
}
