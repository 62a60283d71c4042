//! Report formatting and printing utilities.
//!
//! The report goes to stdout; diagnostics go to stderr. Both have `_to`
//! variants taking a writer so they can be tested.

use std::io::{self, Write};

use colored::Colorize;

use super::commands::{AnalyzeSummary, CommandResult, CommandSummary, Diagnostics, InitSummary};
use crate::config::CONFIG_FILE_NAME;
use crate::core::KeySet;
use crate::rules::unused::{LocaleUnused, UnusedReport};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Analyze(summary) => print_analyze(summary),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_analyze(summary: &AnalyzeSummary) {
    print_diagnostics_to(&summary.diagnostics, &mut io::stderr().lock());
    print_report_to(&summary.report, &mut io::stdout().lock());
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}

/// Print the unused string report to a custom writer.
pub fn print_report_to<W: Write>(report: &UnusedReport, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{}\n",
        "=== Unused string resources ===".bold()
    );

    for locale in [&report.primary, &report.secondary] {
        let _ = writeln!(
            writer,
            "{} ({}): {}",
            locale.label.bold(),
            locale.resource_path,
            pluralize(locale.declared_count, "string")
        );
    }
    let _ = writeln!(
        writer,
        "\nReferenced in project: {}\n",
        pluralize(report.used_count, "string")
    );

    let _ = writeln!(writer, "{}\n", "=== Unused strings ===".bold());
    for locale in [&report.primary, &report.secondary] {
        let _ = writeln!(writer, "Unused in {}: {}", locale.label, locale.unused.len());
    }
    let _ = writeln!(writer, "Unused in both: {}", report.unused_in_both.len());
    for locale in [&report.primary, &report.secondary] {
        let _ = writeln!(
            writer,
            "Only unused in {}: {}",
            locale.label,
            locale.unused_only_here.len()
        );
    }

    for locale in [&report.primary, &report.secondary] {
        print_locale_list(locale, writer);
    }

    if !report.unused_in_both.is_empty() {
        let heading = format!(
            "--- Unused in both files ({}) ---",
            report.unused_in_both.len()
        );
        print_key_list(&heading, &report.unused_in_both, writer);
    }

    if !report.has_unused() {
        let _ = writeln!(
            writer,
            "\n{} {}",
            SUCCESS_MARK.green(),
            "All declared strings are referenced".green()
        );
    }
}

fn print_locale_list<W: Write>(locale: &LocaleUnused, writer: &mut W) {
    if locale.unused.is_empty() {
        return;
    }
    let heading = format!(
        "--- Unused in {} ({}) ---",
        locale.label, locale.resource_path
    );
    print_key_list(&heading, &locale.unused, writer);
}

fn print_key_list<W: Write>(heading: &str, keys: &KeySet, writer: &mut W) {
    let _ = writeln!(writer, "\n{}", heading.yellow());
    for key in keys {
        let _ = writeln!(writer, "  {}", key);
    }
}

/// Print non-fatal problems to a custom writer.
///
/// Locale file failures and missing directories are always shown. Per-file
/// read failures are listed in verbose mode and counted otherwise.
pub fn print_diagnostics_to<W: Write>(diagnostics: &Diagnostics, writer: &mut W) {
    let warning = "warning:".bold().yellow();

    for w in &diagnostics.resource_warnings {
        let _ = writeln!(writer, "{} {}", warning, w.error);
    }

    for dir in &diagnostics.missing_dirs {
        let _ = writeln!(
            writer,
            "{} Directory not found, skipping: {}",
            warning, dir
        );
    }

    let hint = if diagnostics.verbose {
        String::new()
    } else {
        format!(" (use {} for details)", "-v".cyan())
    };

    if diagnostics.verbose {
        for w in &diagnostics.read_warnings {
            let _ = writeln!(
                writer,
                "{} Cannot read {}: {}",
                warning, w.file_path, w.error
            );
        }
    } else if !diagnostics.read_warnings.is_empty() {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read{}",
            warning,
            diagnostics.read_warnings.len(),
            hint
        );
    }

    if diagnostics.skipped_count > 0 {
        let _ = writeln!(
            writer,
            "{} {} path(s) skipped due to access errors{}",
            warning, diagnostics.skipped_count, hint
        );
    }

    if diagnostics.verbose {
        let _ = writeln!(
            writer,
            "Scanned {}",
            pluralize(diagnostics.files_scanned, "file")
        );
    }
}

fn pluralize(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

// ============================================================
// Tests
// ============================================================
