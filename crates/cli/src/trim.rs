//! One trim run: plan, then list or remove

use crate::args::TrimArgs;
use crate::report;
use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use retention::{DirLister, Remover, Variant};
use std::io::Write;
use tracing::info;

/// Counts from a finished run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub planned: usize,
    pub removed: usize,
    pub failed: usize,
}

/// Run one trim against `fs`
///
/// Guard, discovery and empty-layout failures are returned as errors before
/// anything is removed. Failed removals are counted in the summary but do
/// not make the run fail.
pub fn run<F, W>(
    variant: Variant,
    args: &TrimArgs,
    fs: &mut F,
    now: NaiveDateTime,
    out: &mut W,
) -> Result<RunSummary>
where
    F: DirLister + Remover,
    W: Write,
{
    let policy = args.policy(variant);
    let plan = variant.plan(&*fs, &args.backup_parent_dir, &policy, now)?;
    let planned = plan.removal_count();

    report::print_banner(out, variant, now, planned == 0).context("Failed to write report")?;

    if policy.dry_run {
        report::print_plan(out, &plan, &policy).context("Failed to write removal plan")?;
        return Ok(RunSummary {
            planned,
            ..RunSummary::default()
        });
    }

    let outcome = plan.execute(fs);
    report::print_outcome(out, &outcome).context("Failed to write report")?;

    info!(
        "Removed {} of {} planned backups ({} failed)",
        outcome.removed.len(),
        planned,
        outcome.failed.len()
    );

    Ok(RunSummary {
        planned,
        removed: outcome.removed.len(),
        failed: outcome.failed.len(),
    })
}
