use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Compiled `ignores` entries.
///
/// Each entry is tried against the walked path made relative to every
/// anchor directory and to the directory being scanned. Literal entries
/// ignore everything under that path; glob entries must match the whole
/// relative path.
#[derive(Debug, Default)]
pub struct IgnoreRules {
    anchors: Vec<PathBuf>,
    literal_paths: Vec<PathBuf>,
    glob_patterns: Vec<Pattern>,
}

impl IgnoreRules {
    pub fn new(patterns: &[String], anchors: Vec<PathBuf>) -> Result<Self> {
        let mut literal_paths = Vec::new();
        let mut glob_patterns = Vec::new();

        for p in patterns {
            if is_glob_pattern(p) {
                let pattern = Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))?;
                glob_patterns.push(pattern);
            } else {
                literal_paths.push(PathBuf::from(p.trim_end_matches('/')));
            }
        }

        Ok(Self {
            anchors,
            literal_paths,
            glob_patterns,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.literal_paths.is_empty() && self.glob_patterns.is_empty()
    }

    fn is_ignored(&self, path: &Path, base_dir: &Path) -> bool {
        if self.is_empty() {
            return false;
        }
        self.anchors
            .iter()
            .map(PathBuf::as_path)
            .chain(std::iter::once(base_dir))
            .filter_map(|anchor| path.strip_prefix(anchor).ok())
            .filter(|relative| !relative.as_os_str().is_empty())
            .any(|relative| self.matches(relative))
    }

    fn matches(&self, relative: &Path) -> bool {
        self.literal_paths
            .iter()
            .any(|literal| relative.starts_with(literal))
            || self.glob_patterns.iter().any(|p| p.matches_path(relative))
    }
}

/// Result of scanning a directory tree.
pub struct ScanResult {
    /// Matching files, in walk order (sorted by file name per directory).
    pub files: Vec<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively collect files under `base_dir` with the given extension.
///
/// Paths matched by `ignores` are skipped. Entries that cannot be accessed
/// are counted in `skipped_count` and the walk continues.
pub fn scan_files(
    base_dir: &Path,
    extension: &str,
    ignores: &IgnoreRules,
    verbose: bool,
) -> ScanResult {
    let mut files = Vec::new();
    let mut skipped_count = 0;

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if ignores.is_ignored(path, base_dir) {
            continue;
        }

        if path.is_file() && has_extension(path, extension) {
            files.push(path.to_path_buf());
        }
    }

    ScanResult {
        files,
        skipped_count,
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some(extension)
}
