//! # fsd-lint-agents
//!
//! Built-in analysis agents for fsd-lint.
//!
//! Each agent is a pure function of the rule document and its inputs:
//!
//! | Agent | Rules | Input |
//! |-------|-------|-------|
//! | [`BoundaryAnalyzer`] | `fsd-layer-violation`, `fsd-private-import` | file paths + import lists |
//! | [`NamingAnalyzer`] | `interface-*`, `type-naming`, `enum-*`, `no-console`, `no-any`, `no-enum`, `no-adhoc-colors`, `use-cn-utility` | file name + content |
//! | [`StructureAnalyzer`] | `structure-model-folders`, `structure-mandatory-converter-for-api` | module path + file listing |
//! | [`generate_recommendations`] | aggregate advisories | full violation list |
//!
//! There is no shared mutable state: the rule document is read once at
//! construction and each `analyze` call recomputes from scratch, so results
//! are deterministic and agents can run concurrently.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod boundary;
mod catalog;
mod layer;
mod naming;
mod recommend;
mod structure;

pub use boundary::{BoundaryAnalyzer, LAYER_RULE_ID, PRIVATE_IMPORT_RULE_ID};
pub use catalog::{all_rules, RuleInfo};
pub use layer::LayerResolver;
pub use naming::{
    NamingAnalyzer, ENUM_CONST_RULE_ID, ENUM_TYPE_RULE_ID, INTERFACE_BACKEND_RULE_ID,
    INTERFACE_FRONTEND_RULE_ID, INTERFACE_RULE_ID, NO_ADHOC_COLORS_RULE_ID, NO_ANY_RULE_ID,
    NO_CONSOLE_RULE_ID, NO_ENUM_RULE_ID, TYPE_RULE_ID, USE_CN_RULE_ID,
};
pub use recommend::generate_recommendations;
pub use structure::{StructureAnalyzer, MANDATORY_CONVERTER_RULE_ID, MODEL_FOLDERS_RULE_ID};

/// Re-export core types for convenience.
pub use fsd_lint_core::{RuleSet, Severity, Violation};
