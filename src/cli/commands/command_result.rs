use crate::{
    core::{FileWarning, UsedStrings},
    rules::unused::UnusedReport,
};

#[derive(Debug)]
pub enum CommandSummary {
    Analyze(Box<AnalyzeSummary>),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct AnalyzeSummary {
    pub report: UnusedReport,
    pub diagnostics: Diagnostics,
}

/// Non-fatal problems met while parsing and scanning.
#[derive(Debug, Default)]
pub struct Diagnostics {
    /// Locale files that could not be parsed.
    pub resource_warnings: Vec<FileWarning>,
    /// Scan roots that do not exist.
    pub missing_dirs: Vec<String>,
    /// Files that could not be read during the scan.
    pub read_warnings: Vec<FileWarning>,
    /// Directory entries the walk could not access.
    pub skipped_count: usize,
    pub files_scanned: usize,
    pub verbose: bool,
}

impl Diagnostics {
    pub fn from_used(used: &UsedStrings, verbose: bool) -> Self {
        Self {
            resource_warnings: Vec::new(),
            missing_dirs: used
                .missing_dirs
                .iter()
                .map(|p| p.to_string_lossy().to_string())
                .collect(),
            read_warnings: used.warnings.clone(),
            skipped_count: used.skipped_count,
            files_scanned: used.files_scanned,
            verbose,
        }
    }
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running an unstrung command
#[derive(Debug)]
pub struct CommandResult {
    pub summary: CommandSummary,
}
