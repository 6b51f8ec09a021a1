//! End-to-end tests for the batch pipeline and the tool service.

use fsd_lint::{
    AnalysisCoordinator, CodeSnippet, FileDescriptor, ReportStatus, RuleSet, Severity, ToolService,
};
use serde_json::json;

fn coordinator() -> AnalysisCoordinator {
    AnalysisCoordinator::new(RuleSet::default())
}

#[test]
fn layer_violation_symmetry() {
    let c = coordinator();

    let upward = vec![FileDescriptor::new("src/entities/user/model.ts")
        .with_imports(["src/features/auth"])];
    let report = c.analyze_batch(&upward, &[]);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].rule_id, "fsd-layer-violation");
    assert_eq!(report.violations[0].severity, Severity::High);

    let downward = vec![FileDescriptor::new("src/entities/user/model.ts")
        .with_imports(["src/shared/ui"])];
    assert!(c.analyze_batch(&downward, &[]).violations.is_empty());
}

#[test]
fn private_import_detection() {
    let c = coordinator();

    let deep = vec![FileDescriptor::new("src/features/auth/ui.tsx")
        .with_imports(["@/entities/user/model/types"])];
    let report = c.analyze_batch(&deep, &[]);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].rule_id, "fsd-private-import");

    let public = vec![
        FileDescriptor::new("src/features/auth/ui.tsx").with_imports(["@/entities/user"]),
    ];
    assert!(c.analyze_batch(&public, &[]).violations.is_empty());
}

#[test]
fn interface_naming_round_trip() {
    let c = coordinator();
    let cases = [
        ("x.ts", "interface User {}", vec!["interface-naming"]),
        ("x.ts", "interface IUser {}", vec![]),
        ("x-backend.ts", "interface IUserBackend {}", vec![]),
        ("x.ts", "interface IUserBackend {}", vec!["interface-frontend-naming"]),
    ];

    for (file_name, content, expected) in cases {
        let report = c.analyze_batch(&[], &[CodeSnippet::new(file_name, content)]);
        let ids: Vec<&str> = report
            .violations
            .iter()
            .map(|v| v.rule_id.as_str())
            .collect();
        assert_eq!(ids, expected, "case: {file_name} / {content}");
    }
}

#[test]
fn no_enum_fires_with_all_linter_toggles_off() {
    let mut rules = RuleSet::default();
    rules.linter.no_console = false;
    rules.linter.no_any = false;
    rules.linter.no_enums = false;

    let c = AnalysisCoordinator::new(rules);
    let report = c.analyze_batch(&[], &[CodeSnippet::new("x.ts", "enum Role { ADMIN }")]);
    assert_eq!(report.violations.len(), 1);
    assert_eq!(report.violations[0].rule_id, "no-enum");
}

#[test]
fn status_derivation() {
    let c = coordinator();

    let clean = c.analyze_batch(&[FileDescriptor::new("src/shared/ui/a.tsx")], &[]);
    assert_eq!(clean.status, ReportStatus::Success);

    let dirty = c.analyze_batch(&[], &[CodeSnippet::new("x.ts", "console.log(1)")]);
    assert_eq!(dirty.status, ReportStatus::Error);
}

#[test]
fn repeated_runs_produce_identical_violations() {
    let c = coordinator();
    let files = vec![
        FileDescriptor::new("src/entities/user/model.ts")
            .with_imports(["@/features/auth/model/store", "@/shared/ui"]),
    ];
    let snippets = vec![CodeSnippet::new(
        "user-backend.ts",
        "interface User {}\nconsole.log(1);",
    )];

    let first = c.analyze_batch(&files, &snippets);
    let second = c.analyze_batch(&files, &snippets);
    assert_eq!(first.violations, second.violations);
    assert_eq!(first.summary, second.summary);
    assert_eq!(first.recommendations, second.recommendations);
}

#[test]
fn batch_report_serializes_with_wire_keys() {
    let service = ToolService::new(RuleSet::default());
    let params = json!({
        "files": [{ "path": "src/entities/user/model.ts", "imports": ["@/features/auth"] }],
        "codeSnippets": [{ "fileName": "x.ts", "content": "const a: any = 1;" }],
    });

    let text = service
        .call_tool("analyze_project", &params)
        .expect("analysis succeeds");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid JSON");

    assert_eq!(value["status"], "error");
    assert_eq!(value["summary"]["totalErrors"], 1);
    assert_eq!(value["summary"]["totalWarnings"], 1);
    assert_eq!(value["summary"]["analyzedFiles"], 1);
    assert_eq!(value["violations"][0]["ruleId"], "fsd-layer-violation");
    assert_eq!(value["violations"][0]["agent"], "FSD_INSPECTOR");
    assert_eq!(value["violations"][1]["ruleId"], "no-any");
    assert!(value["timestamp"].as_str().is_some());
}

#[test]
fn lenient_parsing_never_fails_the_request() {
    let service = ToolService::new(RuleSet::default());
    for params in [
        json!({}),
        json!({ "files": "not-an-array" }),
        json!({ "files": [null, 1, {}], "codeSnippets": 7 }),
    ] {
        let report = service.analyze_project(&params);
        assert_eq!(report.status, ReportStatus::Success);
    }
}
