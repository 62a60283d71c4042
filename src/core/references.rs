//! Textual string-resource reference extraction.
//!
//! Two forms are recognized:
//! - `<namespace>.string.<identifier>` in code (e.g. `R.string.app_name`)
//! - `@string/<identifier>` in markup (e.g. `android:text="@string/ok"`)
//!
//! Matching is purely textual. References built at runtime are not found,
//! and occurrences inside comments or string literals are still counted.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex::Regex;

use crate::core::KeySet;

static MARKUP_REFERENCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@string/(\w+)").unwrap());

/// Compiled reference patterns for one resource namespace.
#[derive(Debug, Clone)]
pub struct ReferencePatterns {
    dotted: Regex,
}

impl ReferencePatterns {
    /// Build the patterns for a namespace such as `R` or `com.example.R`.
    pub fn new(namespace: &str) -> Result<Self> {
        let pattern = format!(r"{}\.string\.(\w+)", regex::escape(namespace));
        let dotted = Regex::new(&pattern)
            .with_context(|| format!("Invalid resource namespace: \"{}\"", namespace))?;
        Ok(Self { dotted })
    }

    /// Add every identifier referenced in `content` to `used`.
    ///
    /// Both patterns are applied to every file, whatever its type.
    pub fn collect(&self, content: &str, used: &mut KeySet) {
        for regex in [&self.dotted, &*MARKUP_REFERENCE_REGEX] {
            used.extend(
                regex
                    .captures_iter(content)
                    .filter_map(|caps| caps.get(1))
                    .map(|m| m.as_str().to_string()),
            );
        }
    }

    /// Convenience wrapper returning the identifiers referenced in `content`.
    pub fn extract(&self, content: &str) -> KeySet {
        let mut used = KeySet::new();
        self.collect(content, &mut used);
        used
    }
}
