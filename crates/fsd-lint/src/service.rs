//! Tool operations: the synchronous request → response mapping that protocol
//! and HTTP collaborators wrap.
//!
//! Request parsing is deliberately lenient: a missing or non-array `files`
//! field degrades to an empty batch, and entries of the wrong shape are
//! skipped. Only an unparseable top-level body is a hard failure, surfaced as
//! a generic error envelope with no partial report.

use serde::Serialize;
use serde_json::Value;

use fsd_lint_core::{CodeSnippet, FileDescriptor, Report, RuleSet};

use crate::coordinator::AnalysisCoordinator;

/// Tool name for batch analysis.
pub const ANALYZE_PROJECT_TOOL: &str = "analyze_project";
/// Tool name for fetching the active rule document.
pub const GET_RULES_TOOL: &str = "get_rules";
/// Tool name for submitting a rule document update.
pub const UPDATE_RULES_TOOL: &str = "update_rules";

/// Errors surfaced to tool callers.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// The request body could not be used at all.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
    /// The tool name is not registered.
    #[error("unknown tool: {0}")]
    UnknownTool(String),
    /// Response serialization failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Acknowledgement returned by [`ToolService::update_rules`].
#[derive(Debug, Clone, Serialize)]
pub struct UpdateAck {
    /// Always `"success"` when the document was accepted.
    pub status: String,
    /// Human-readable confirmation.
    pub message: String,
}

/// Dispatches tool calls onto the analysis coordinator.
pub struct ToolService {
    coordinator: AnalysisCoordinator,
}

impl ToolService {
    /// Builds a service around a rule document.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            coordinator: AnalysisCoordinator::new(rules),
        }
    }

    /// The coordinator behind this service.
    #[must_use]
    pub fn coordinator(&self) -> &AnalysisCoordinator {
        &self.coordinator
    }

    /// Runs batch analysis over a parsed request body.
    ///
    /// Expects `{ "files": [string | {path, imports}], "codeSnippets"?:
    /// [{fileName, content}] }`; malformed sections degrade to empty.
    #[must_use]
    pub fn analyze_project(&self, params: &Value) -> Report {
        let files = parse_files(params.get("files"));
        let snippets = parse_snippets(params.get("codeSnippets"));
        self.coordinator.analyze_batch(&files, &snippets)
    }

    /// Returns the active rule document as JSON.
    #[must_use]
    pub fn get_rules(&self) -> Value {
        serde_json::to_value(self.coordinator.rules()).unwrap_or(Value::Null)
    }

    /// Accepts a rule document update without persisting it.
    ///
    /// The body must parse as a complete rule document; the accepted update
    /// is logged and then dropped. Durable storage is a separate extension
    /// point, not implemented here.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidRequest`] when the body is not a valid
    /// rule document.
    pub fn update_rules(&self, body: &Value) -> Result<UpdateAck, ServiceError> {
        let incoming: RuleSet = serde_json::from_value(body.clone())
            .map_err(|e| ServiceError::InvalidRequest(e.to_string()))?;
        incoming
            .validate()
            .map_err(|e| ServiceError::InvalidRequest(e.to_string()))?;

        tracing::info!(
            layers = incoming.fsd.layers.len(),
            "Rule update accepted (not persisted)"
        );

        Ok(UpdateAck {
            status: "success".to_string(),
            message: "Rules updated successfully".to_string(),
        })
    }

    /// Dispatches a named tool call and returns the JSON response text.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown tool names or invalid `update_rules`
    /// bodies; analysis itself never fails.
    pub fn call_tool(&self, name: &str, params: &Value) -> Result<String, ServiceError> {
        match name {
            ANALYZE_PROJECT_TOOL => {
                let report = self.analyze_project(params);
                Ok(serde_json::to_string_pretty(&report)?)
            }
            GET_RULES_TOOL => Ok(serde_json::to_string_pretty(&self.get_rules())?),
            UPDATE_RULES_TOOL => {
                let ack = self.update_rules(params)?;
                Ok(serde_json::to_string_pretty(&ack)?)
            }
            other => Err(ServiceError::UnknownTool(other.to_string())),
        }
    }
}

/// The generic error envelope returned when a request cannot be processed at
/// all. Transports map this to their 500-equivalent.
#[must_use]
pub fn error_envelope(message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "message": message,
    })
}

fn parse_files(value: Option<&Value>) -> Vec<FileDescriptor> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items.iter().filter_map(parse_file_entry).collect()
}

fn parse_file_entry(value: &Value) -> Option<FileDescriptor> {
    match value {
        Value::String(path) => Some(FileDescriptor::new(path)),
        Value::Object(obj) => {
            let path = obj.get("path")?.as_str()?;
            let imports = obj
                .get("imports")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_default();
            Some(FileDescriptor {
                path: path.to_string(),
                imports,
                content: None,
            })
        }
        _ => None,
    }
}

fn parse_snippets(value: Option<&Value>) -> Vec<CodeSnippet> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let obj = item.as_object()?;
            let file_name = obj.get("fileName")?.as_str()?;
            let content = obj.get("content")?.as_str()?;
            Some(CodeSnippet::new(file_name, content))
        })
        .collect()
}
