//! Console reporting for trim runs

use crate::util::{format_banner_date, format_unit_date};
use chrono::NaiveDateTime;
use owo_colors::{OwoColorize, Stream};
use retention::{BackupUnit, ExecutionReport, RetentionPolicy, TrimPlan, Variant};
use std::io::{self, Write};

/// Print the policy and every planned removal without touching anything
pub fn print_plan(
    out: &mut impl Write,
    plan: &TrimPlan,
    policy: &RetentionPolicy,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "listOnly:      {}", policy.dry_run)?;
    writeln!(out, "numToKeep:     {}", policy.min_count_to_keep)?;
    writeln!(out, "minDaysToKeep: {}", policy.min_days_to_keep)?;
    writeln!(out, "maxToRemove:   {}", policy.max_removals_per_run)?;

    for group in &plan.groups {
        match plan.variant {
            Variant::CatalogTree => {
                writeln!(out)?;
                let header = format!("Catalog: {}", group.group.root.display());
                writeln!(out, "{}", header.if_supports_color(Stream::Stdout, |t| t.bold()))?;
            }
            Variant::ZipArchive => {
                writeln!(out)?;
                writeln!(out, "All zip files:")?;
                for unit in group.group.units.iter().rev() {
                    print_unit(out, unit)?;
                }
            }
        }

        writeln!(out)?;
        if group.removals.is_empty() {
            writeln!(
                out,
                "{}",
                "No backup files to be removed.".if_supports_color(Stream::Stdout, |t| t.dimmed())
            )?;
        } else {
            writeln!(out, "Backup files to be removed:")?;
            for unit in &group.removals {
                print_unit(out, unit)?;
            }
        }
    }

    Ok(())
}

fn print_unit(out: &mut impl Write, unit: &BackupUnit) -> io::Result<()> {
    writeln!(
        out,
        "  {}, {}",
        format_unit_date(unit.date()),
        unit.locator().display()
    )
}

/// First line of a real run: "<tool>: <date>[ No backup files to trim]"
pub fn print_banner(
    out: &mut impl Write,
    variant: Variant,
    now: NaiveDateTime,
    nothing_to_trim: bool,
) -> io::Result<()> {
    let extra = if nothing_to_trim {
        " No backup files to trim"
    } else {
        ""
    };
    writeln!(out, "{}: {}{}", variant.tool_name(), format_banner_date(now), extra)
}

pub fn print_outcome(out: &mut impl Write, report: &ExecutionReport) -> io::Result<()> {
    for path in &report.removed {
        writeln!(out, "Removed: {}", path.display())?;
    }

    if !report.failed.is_empty() {
        writeln!(
            out,
            "{} {}",
            "Failed to remove:".if_supports_color(Stream::Stdout, |t| t.red()),
            report.failed.len()
        )?;
    }

    Ok(())
}
