//! The two supported backup layouts and the plan built for each

use crate::discover::{discover_archives, discover_catalogs, UnitGroup};
use crate::execute::{remove_units, ExecutionReport, RemovalKind};
use crate::fs::{DirLister, Remover};
use crate::policy::{select_for_removal, AgeReference, RetentionPolicy};
use crate::{guard, BackupUnit, Result};
use chrono::NaiveDateTime;
use std::path::Path;

/// Backup layout being trimmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Capture One: `<root>/<catalog>/<yyyy-mm-dd hh.mm>/`
    CatalogTree,
    /// Lightroom: `<root>/<yyyy-mm-dd hhmm>/<catalog>.lrcat.zip`
    ZipArchive,
}

impl Variant {
    pub fn tool_name(self) -> &'static str {
        match self {
            Variant::CatalogTree => "capture-one-trim",
            Variant::ZipArchive => "lr-trim",
        }
    }

    /// Substrings the root path must contain
    pub fn guard_markers(self) -> &'static [&'static str] {
        match self {
            Variant::CatalogTree => &[".backup"],
            Variant::ZipArchive => &["lightroom", "backups"],
        }
    }

    pub fn age_reference(self) -> AgeReference {
        match self {
            Variant::CatalogTree => AgeReference::Now,
            Variant::ZipArchive => AgeReference::NewestUnit,
        }
    }

    pub fn removal_kind(self) -> RemovalKind {
        match self {
            Variant::CatalogTree => RemovalKind::Tree,
            Variant::ZipArchive => RemovalKind::FileThenParent,
        }
    }

    pub fn check_root(self, root: &Path) -> Result<()> {
        guard::check_root(root, self.guard_markers())
    }

    pub fn discover(self, lister: &impl DirLister, root: &Path) -> Result<Vec<UnitGroup>> {
        match self {
            Variant::CatalogTree => discover_catalogs(lister, root),
            Variant::ZipArchive => discover_archives(lister, root),
        }
    }

    /// Guard, discover and select, without touching anything
    ///
    /// Every group is discovered before any selection so a bad layout fails
    /// the run before the first removal.
    pub fn plan(
        self,
        lister: &impl DirLister,
        root: &Path,
        policy: &RetentionPolicy,
        now: NaiveDateTime,
    ) -> Result<TrimPlan> {
        self.check_root(root)?;
        let groups = self
            .discover(lister, root)?
            .into_iter()
            .map(|group| {
                let removals = select_for_removal(&group.units, policy, now);
                GroupPlan { group, removals }
            })
            .collect();

        Ok(TrimPlan {
            variant: self,
            groups,
        })
    }
}

/// Removal decision for one group
#[derive(Debug, Clone)]
pub struct GroupPlan {
    pub group: UnitGroup,
    /// Oldest first
    pub removals: Vec<BackupUnit>,
}

/// Removal decisions for a whole run
#[derive(Debug, Clone)]
pub struct TrimPlan {
    pub variant: Variant,
    pub groups: Vec<GroupPlan>,
}

impl TrimPlan {
    pub fn removal_count(&self) -> usize {
        self.groups.iter().map(|plan| plan.removals.len()).sum()
    }

    /// Carry out every group's removals
    pub fn execute(&self, remover: &mut impl Remover) -> ExecutionReport {
        let kind = self.variant.removal_kind();
        let mut report = ExecutionReport::default();
        for plan in &self.groups {
            report.merge(remove_units(remover, kind, &plan.removals));
        }
        report
    }
}
