//! Unused string resource detection rule.
//!
//! Detects entries declared in a locale's resource file that no scanned
//! file references, and compares the result across the two locales.

use crate::core::{DeclaredStrings, KeySet};

/// Unused entries of a single locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleUnused {
    pub label: String,
    /// Resource path as configured (e.g. "values/strings.xml").
    pub resource_path: String,
    pub declared_count: usize,
    pub unused: KeySet,
    /// Unused here but used (or not declared) in the other locale.
    pub unused_only_here: KeySet,
}

/// Result of reconciling two locales against the referenced identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnusedReport {
    pub primary: LocaleUnused,
    pub secondary: LocaleUnused,
    pub used_count: usize,
    pub unused_in_both: KeySet,
}

impl UnusedReport {
    pub fn has_unused(&self) -> bool {
        !self.primary.unused.is_empty() || !self.secondary.unused.is_empty()
    }
}

/// Entries of `declared` that are absent from `used`.
///
/// The result is always a subset of `declared`.
pub fn unused_keys(declared: &KeySet, used: &KeySet) -> KeySet {
    declared.difference(used).cloned().collect()
}

pub fn check_unused_strings(
    primary: &DeclaredStrings,
    secondary: &DeclaredStrings,
    used: &KeySet,
) -> UnusedReport {
    let primary_unused = unused_keys(&primary.keys, used);
    let secondary_unused = unused_keys(&secondary.keys, used);

    let unused_in_both = primary_unused
        .intersection(&secondary_unused)
        .cloned()
        .collect();
    let primary_only = primary_unused
        .difference(&secondary_unused)
        .cloned()
        .collect();
    let secondary_only = secondary_unused
        .difference(&primary_unused)
        .cloned()
        .collect();

    UnusedReport {
        primary: LocaleUnused {
            label: primary.locale.label.clone(),
            resource_path: primary.locale.path.clone(),
            declared_count: primary.keys.len(),
            unused: primary_unused,
            unused_only_here: primary_only,
        },
        secondary: LocaleUnused {
            label: secondary.locale.label.clone(),
            resource_path: secondary.locale.path.clone(),
            declared_count: secondary.keys.len(),
            unused: secondary_unused,
            unused_only_here: secondary_only,
        },
        used_count: used.len(),
        unused_in_both,
    }
}
