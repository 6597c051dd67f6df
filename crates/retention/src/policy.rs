//! Retention policy and removal selection

use crate::BackupUnit;
use chrono::{Days, NaiveDateTime, NaiveTime};

/// Extra day of grace applied when ages are measured from wall-clock time
pub const WALL_CLOCK_GRACE_DAYS: u64 = 1;

/// What "age" is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeReference {
    /// Current wall-clock time, with [`WALL_CLOCK_GRACE_DAYS`] of grace.
    /// An age window of 0 disables the age rule.
    Now,
    /// The date of the newest discovered unit
    NewestUnit,
}

/// Retention policy configuration, immutable for a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionPolicy {
    /// Number of most recent units that are never removed (default: 10)
    pub min_count_to_keep: u32,
    /// Units younger than this many days are never removed (default: 30)
    pub min_days_to_keep: u32,
    /// Cap on removals in one run, 0 = unlimited (default: 0)
    pub max_removals_per_run: u32,
    /// Report the plan without touching the filesystem
    pub dry_run: bool,
    /// Reference point for the age window
    pub age_reference: AgeReference,
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self {
            min_count_to_keep: 10,
            min_days_to_keep: 30,
            max_removals_per_run: 0,
            dry_run: false,
            age_reference: AgeReference::Now,
        }
    }
}

/// Pick the units to remove.
///
/// Rules are applied in order, each narrowing the survivors of the last:
/// 1. the `min_count_to_keep` newest units are exempt
/// 2. only units strictly older than the age window stay candidates
/// 3. at most `max_removals_per_run` candidates are kept, oldest first
///
/// `units` may arrive in any order. The result is oldest first.
pub fn select_for_removal(
    units: &[BackupUnit],
    policy: &RetentionPolicy,
    now: NaiveDateTime,
) -> Vec<BackupUnit> {
    let mut ordered: Vec<&BackupUnit> = units.iter().collect();
    ordered.sort_by(|a, b| BackupUnit::chronological(a, b));

    let newest = ordered.last().map(|unit| unit.date());

    // Rule 1: exempt the newest N
    let eligible = ordered
        .len()
        .saturating_sub(policy.min_count_to_keep as usize);
    ordered.truncate(eligible);

    // Rule 2: age window
    let min_days = policy.min_days_to_keep;
    let mut candidates: Vec<&BackupUnit> = match policy.age_reference {
        AgeReference::Now if min_days == 0 => ordered,
        AgeReference::Now => {
            let window = Days::new(u64::from(min_days) + WALL_CLOCK_GRACE_DAYS);
            match now.checked_sub_days(window) {
                Some(cutoff) => ordered
                    .into_iter()
                    .filter(|unit| unit.date().and_time(NaiveTime::MIN) < cutoff)
                    .collect(),
                None => Vec::new(),
            }
        }
        AgeReference::NewestUnit => match newest {
            Some(newest) => ordered
                .into_iter()
                .filter(|unit| {
                    newest.signed_duration_since(unit.date()).num_days() > i64::from(min_days)
                })
                .collect(),
            None => Vec::new(),
        },
    };

    // Rule 3: cap, preferring the oldest
    let cap = policy.max_removals_per_run as usize;
    if cap > 0 && candidates.len() > cap {
        candidates.truncate(cap);
    }

    candidates.into_iter().cloned().collect()
}
