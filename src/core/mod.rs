//! Core analysis engine.
//!
//! - `context`: Configuration resolution and the parse/scan pipeline
//! - `file_scanner`: Directory walking filtered by extension and ignore rules
//! - `parsers`: Resource definition file parsers
//! - `references`: Textual reference extraction

pub mod context;
pub mod file_scanner;
pub mod parsers;
pub mod references;

use std::collections::BTreeSet;

pub use context::{AnalysisContext, AnalysisData, DeclaredStrings, UsedStrings};

/// A set of string resource identifiers.
///
/// Ordered so that reports list identifiers lexicographically.
pub type KeySet = BTreeSet<String>;

/// A non-fatal problem with a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWarning {
    pub file_path: String,
    pub error: String,
}
