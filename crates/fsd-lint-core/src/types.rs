//! Core types for rule violations and analysis reports.

use serde::{Deserialize, Serialize};

/// Severity level for rule violations.
///
/// `High` and `Critical` count as errors in report summaries;
/// `Low` and `Medium` count as warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    /// Stylistic nit, lowest priority.
    Low,
    /// Convention breach that should be addressed.
    Medium,
    /// Architecture breach that must be fixed.
    High,
    /// Breach that compromises the whole module boundary model.
    Critical,
}

impl Severity {
    /// Whether this severity lands in the error bucket of a report summary.
    #[must_use]
    pub fn is_error(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// The analyzer that produced a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentKind {
    /// Layer boundary and encapsulation checks.
    FsdInspector,
    /// Naming, linter, style, and structure checks.
    StyleEnforcer,
    /// Aggregate recommendation synthesis.
    Recommender,
}

impl std::fmt::Display for AgentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FsdInspector => write!(f, "FSD_INSPECTOR"),
            Self::StyleEnforcer => write!(f, "STYLE_ENFORCER"),
            Self::Recommender => write!(f, "RECOMMENDER"),
        }
    }
}

/// A single detected rule breach.
///
/// Violations are pure facts: once constructed they are never mutated,
/// deduplicated, or reordered by downstream aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    /// Which analyzer emitted this violation.
    pub agent: AgentKind,
    /// Stable rule identifier (e.g., `"fsd-layer-violation"`).
    pub rule_id: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// File path, or `"<path> -> <import>"` for import-level findings.
    pub location: String,
    /// Human-readable message.
    pub message: String,
    /// Optional fix hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    /// Optional replacement snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch: Option<String>,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        agent: AgentKind,
        rule_id: impl Into<String>,
        severity: Severity,
        location: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            agent,
            rule_id: rule_id.into(),
            severity,
            location: location.into(),
            message: message.into(),
            suggestion: None,
            patch: None,
        }
    }

    /// Adds a fix hint to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Adds a replacement snippet to this violation.
    #[must_use]
    pub fn with_patch(mut self, patch: impl Into<String>) -> Self {
        self.patch = Some(patch.into());
        self
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} [{}] {}",
            self.location, self.severity, self.rule_id, self.message
        )
    }
}

/// One input file for boundary analysis.
///
/// Transient: constructed per analysis request, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDescriptor {
    /// Path relative to the project root.
    pub path: String,
    /// Raw import specifiers, as extracted by the caller.
    #[serde(default)]
    pub imports: Vec<String>,
    /// Raw source text, when available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl FileDescriptor {
    /// Creates a descriptor carrying only a path.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            imports: Vec::new(),
            content: None,
        }
    }

    /// Sets the import list.
    #[must_use]
    pub fn with_imports<I, S>(mut self, imports: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.imports = imports.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the source content.
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }
}

/// A named piece of source text submitted for naming/linter analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeSnippet {
    /// File name the snippet came from.
    pub file_name: String,
    /// Raw source text.
    pub content: String,
}

impl CodeSnippet {
    /// Creates a new snippet.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            content: content.into(),
        }
    }
}

/// Overall outcome of an analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// No violations found.
    Success,
    /// At least one violation found.
    Error,
    /// Reserved for transports that distinguish warning-only runs.
    Warning,
}

/// Violation counts for a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    /// Number of HIGH and CRITICAL violations.
    pub total_errors: usize,
    /// Number of LOW and MEDIUM violations.
    pub total_warnings: usize,
    /// Number of files covered by the request.
    pub analyzed_files: usize,
}

/// The aggregate, deterministic output of one analysis run.
///
/// Constructed fresh per request; never cached across requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// `success` if zero violations, else `error`.
    pub status: ReportStatus,
    /// RFC 3339 timestamp of report creation.
    pub timestamp: String,
    /// Violation counts.
    pub summary: ReportSummary,
    /// Full violation list, in analyzer-emission order.
    pub violations: Vec<Violation>,
    /// Aggregate advisory strings.
    pub recommendations: Vec<String>,
}

impl Report {
    /// Builds a report from a violation list, deriving status and summary.
    #[must_use]
    pub fn build(
        violations: Vec<Violation>,
        analyzed_files: usize,
        recommendations: Vec<String>,
        timestamp: String,
    ) -> Self {
        let total_errors = violations.iter().filter(|v| v.severity.is_error()).count();
        let total_warnings = violations.len() - total_errors;

        let status = if violations.is_empty() {
            ReportStatus::Success
        } else {
            ReportStatus::Error
        };

        Self {
            status,
            timestamp,
            summary: ReportSummary {
                total_errors,
                total_warnings,
                analyzed_files,
            },
            violations,
            recommendations,
        }
    }

    /// Returns true if any violation lands in the error bucket.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.summary.total_errors > 0
    }
}
