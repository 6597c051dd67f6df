//! Removal of selected units

use crate::fs::Remover;
use crate::{BackupUnit, TrimError};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// How a unit is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalKind {
    /// Recursively remove the unit directory
    Tree,
    /// Remove the file, then its parent folder if that left it empty
    FileThenParent,
}

/// Outcome of removing a set of units
#[derive(Debug, Default)]
pub struct ExecutionReport {
    pub removed: Vec<PathBuf>,
    pub failed: Vec<TrimError>,
}

impl ExecutionReport {
    pub fn merge(&mut self, other: ExecutionReport) {
        self.removed.extend(other.removed);
        self.failed.extend(other.failed);
    }
}

/// Remove every unit once, in order
///
/// A failure is recorded and logged, and the remaining units are still
/// processed. Nothing is retried.
pub fn remove_units(
    remover: &mut impl Remover,
    kind: RemovalKind,
    units: &[BackupUnit],
) -> ExecutionReport {
    let mut report = ExecutionReport::default();

    for unit in units {
        let path = unit.locator();

        let result = match kind {
            RemovalKind::Tree => {
                info!("Removing backup directory: {}", path.display());
                remover.remove_tree(path)
            }
            RemovalKind::FileThenParent => {
                info!("Removing: {}", path.display());
                let removed = remover.remove_file(path);
                if removed.is_ok() {
                    if let Some(parent) = path.parent() {
                        remove_parent(remover, parent);
                    }
                }
                removed
            }
        };

        match result {
            Ok(()) => report.removed.push(path.to_path_buf()),
            Err(source) => {
                let err = TrimError::Deletion {
                    path: path.to_path_buf(),
                    source,
                };
                error!("{}", err);
                report.failed.push(err);
            }
        }
    }

    report
}

/// Best effort: the session folder usually holds only the archive
fn remove_parent(remover: &mut impl Remover, parent: &Path) {
    match remover.remove_empty_dir(parent) {
        Ok(()) => info!("Removed directory: {}", parent.display()),
        Err(e) => warn!("Could not remove directory {}: {}", parent.display(), e),
    }
}
