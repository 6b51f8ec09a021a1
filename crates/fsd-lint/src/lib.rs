//! # fsd-lint
//!
//! Rule-based architecture linter for Feature-Sliced-Design frontends.
//!
//! This is the main facade crate: it re-exports the core types and agents and
//! provides the [`AnalysisCoordinator`] plus the [`service`] layer that tool
//! and HTTP collaborators wrap.
//!
//! ## Programmatic Usage
//!
//! ```
//! use fsd_lint::{AnalysisCoordinator, FileDescriptor, RuleSet};
//!
//! let coordinator = AnalysisCoordinator::new(RuleSet::default());
//! let files = vec![
//!     FileDescriptor::new("src/entities/user/model.ts")
//!         .with_imports(["@/features/auth"]),
//! ];
//! let report = coordinator.analyze_batch(&files, &[]);
//! assert!(report.has_errors());
//! ```
//!
//! ## Tool Calls
//!
//! ```
//! use fsd_lint::{RuleSet, ToolService};
//! use serde_json::json;
//!
//! let service = ToolService::new(RuleSet::default());
//! let response = service
//!     .call_tool("analyze_project", &json!({ "files": [] }))
//!     .unwrap();
//! assert!(response.contains("success"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod coordinator;
pub mod service;

pub use coordinator::AnalysisCoordinator;
pub use service::{
    error_envelope, ServiceError, ToolService, UpdateAck, ANALYZE_PROJECT_TOOL, GET_RULES_TOOL,
    UPDATE_RULES_TOOL,
};

// Re-export core types and agents
pub use fsd_lint_core::*;

/// Built-in analysis agents.
pub mod agents {
    pub use fsd_lint_agents::*;
}
