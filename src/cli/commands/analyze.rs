use anyhow::Result;

use super::{AnalyzeSummary, CommandResult, CommandSummary, Diagnostics};
use crate::{cli::args::AnalyzeArgs, core::AnalysisContext, rules::unused::check_unused_strings};

/// Parse both locale files, scan the tree and reconcile.
///
/// Only configuration problems and a missing application directory are
/// errors; everything else is reported as a diagnostic.
pub fn analyze(args: &AnalyzeArgs) -> Result<CommandResult> {
    let ctx = AnalysisContext::new(args)?;
    let data = ctx.collect();

    let report = check_unused_strings(&data.primary, &data.secondary, &data.used.keys);

    let mut diagnostics = Diagnostics::from_used(&data.used, ctx.verbose);
    diagnostics.resource_warnings = [data.primary.warning, data.secondary.warning]
        .into_iter()
        .flatten()
        .collect();

    Ok(CommandResult {
        summary: CommandSummary::Analyze(Box::new(AnalyzeSummary {
            report,
            diagnostics,
        })),
    })
}
