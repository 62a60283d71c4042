//! Unstrung - unused string resource finder for Android projects
//!
//! Unstrung parses the `strings.xml` files of two locales, scans Kotlin
//! sources and XML resources for `R.string.<name>` and `@string/<name>`
//! references, and reports entries that are declared but never referenced.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, report printing)
//! - `config`: Configuration file loading and parsing
//! - `core`: Resource parsing, file scanning and reference extraction
//! - `rules`: Set reconciliation of declared and referenced strings

pub mod cli;
pub mod config;
pub mod core;
pub mod rules;
