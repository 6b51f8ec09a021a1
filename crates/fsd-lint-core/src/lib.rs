//! # fsd-lint-core
//!
//! Core types and rule schema for fsd-lint.
//!
//! This crate provides the building blocks shared by every analyzer:
//!
//! - [`RuleSet`]: the immutable rule document (layers, boundaries, naming,
//!   linter, structure, styles), loaded once per process
//! - [`Violation`]: a single detected rule breach
//! - [`Report`]: the aggregate, deterministic output of one analysis run
//! - [`FileDescriptor`] / [`CodeSnippet`]: transient per-request inputs
//!
//! Analyzers are pure functions of `(RuleSet, inputs)`; nothing in this crate
//! performs I/O except [`RuleSet::from_file`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod rules;
mod types;

pub use rules::{
    BackendNaming, BoundaryDef, ConverterRules, FsdRules, FsdToggles, LinterRules, ModelStructure,
    NamingPrefixes, NamingRules, RuleSet, RulesError, StructureRules, StyleRules,
};
pub use types::{
    AgentKind, CodeSnippet, FileDescriptor, Report, ReportStatus, ReportSummary, Severity,
    Violation,
};
