//! Backup unit discovery
//!
//! Two layouts are supported:
//! - catalog trees: `root/<catalog>/<yyyy-mm-dd suffix>/` where every dated
//!   directory is a unit and every catalog is its own group
//! - zip archives: `root/<yyyy-mm-dd suffix>/<name>.zip` where every zip is a
//!   unit and all of them form one group
//!
//! Candidates that don't match the naming pattern are logged and skipped.
//! A group without any unit is an error: it usually means the layout is not
//! what we expect rather than that there is nothing to trim.

use crate::fs::DirLister;
use crate::{BackupUnit, DatePattern, Result, TrimError};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Units that share one retention decision, oldest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitGroup {
    /// Catalog directory, or the backup root for archives
    pub root: PathBuf,
    pub units: Vec<BackupUnit>,
}

impl UnitGroup {
    fn new(root: &Path, mut units: Vec<BackupUnit>) -> Self {
        units.sort_by(BackupUnit::chronological);
        Self {
            root: root.to_path_buf(),
            units,
        }
    }
}

fn list(lister: &impl DirLister, dir: &Path) -> Result<Vec<PathBuf>> {
    lister.list(dir).map_err(|source| TrimError::Listing {
        path: dir.to_path_buf(),
        source,
    })
}

/// Discover dated backup directories, one group per catalog
pub fn discover_catalogs(lister: &impl DirLister, root: &Path) -> Result<Vec<UnitGroup>> {
    let pattern = DatePattern::catalog();
    let mut groups = Vec::new();

    for catalog in list(lister, root)? {
        if !lister.is_dir(&catalog) {
            warn!("Ignoring non-directory entry {}", catalog.display());
            continue;
        }

        let mut units = Vec::new();
        for candidate in list(lister, &catalog)? {
            match pattern.extract_from_path(&candidate) {
                Some(stamp) if lister.is_dir(&candidate) => {
                    units.push(BackupUnit::new(candidate, stamp));
                }
                _ => warn!("Ignoring non-matching file {}", candidate.display()),
            }
        }

        if units.is_empty() {
            return Err(TrimError::DiscoveryEmpty {
                path: catalog,
                what: "Capture One backup directories",
            });
        }

        debug!("Found {} backups in {}", units.len(), catalog.display());
        groups.push(UnitGroup::new(&catalog, units));
    }

    if groups.is_empty() {
        return Err(TrimError::DiscoveryEmpty {
            path: root.to_path_buf(),
            what: "Capture One catalogs",
        });
    }

    Ok(groups)
}

/// Discover zip archives inside dated session folders, as a single group
pub fn discover_archives(lister: &impl DirLister, root: &Path) -> Result<Vec<UnitGroup>> {
    let pattern = DatePattern::session();
    let mut units = Vec::new();

    for folder in list(lister, root)? {
        if !lister.is_dir(&folder) {
            continue;
        }

        for file in list(lister, &folder)? {
            let is_zip = file.extension().is_some_and(|ext| ext == "zip");
            if !is_zip || !lister.is_file(&file) {
                continue;
            }

            match pattern.extract_from_path(&folder) {
                Some(stamp) => units.push(BackupUnit::new(file, stamp)),
                None => warn!(
                    "Found zip file without proper date in parent directory {}",
                    folder.display()
                ),
            }
        }
    }

    if units.is_empty() {
        return Err(TrimError::DiscoveryEmpty {
            path: root.to_path_buf(),
            what: "Lightroom backup zip files",
        });
    }

    debug!("Found {} backup archives in {}", units.len(), root.display());
    Ok(vec![UnitGroup::new(root, units)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::{LocalFs, MemoryTree};
    use tempfile::TempDir;

    fn names(group: &UnitGroup) -> Vec<String> {
        group
            .units
            .iter()
            .map(|unit| unit.locator().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn test_catalogs_are_grouped_and_sorted() {
        let mut tree = MemoryTree::new();
        tree.add_dir("/b.backup/Wedding/2024-03-01 9.15")
            .add_dir("/b.backup/Wedding/2023-12-24 18.00")
            .add_dir("/b.backup/Travel/2024-01-02 7.45");

        let groups = discover_catalogs(&tree, Path::new("/b.backup")).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].root, PathBuf::from("/b.backup/Travel"));
        assert_eq!(
            names(&groups[1]),
            vec![
                "/b.backup/Wedding/2023-12-24 18.00",
                "/b.backup/Wedding/2024-03-01 9.15",
            ]
        );
    }

    #[test]
    fn test_catalog_skips_non_matching_and_files() {
        let mut tree = MemoryTree::new();
        tree.add_dir("/b.backup/Cat/2024-01-01 1.0")
            .add_dir("/b.backup/Cat/2024-13-40 1.5")
            .add_dir("/b.backup/Cat/notes")
            .add_file("/b.backup/Cat/2024-01-02 1.0")
            .add_file("/b.backup/.DS_Store");

        let groups = discover_catalogs(&tree, Path::new("/b.backup")).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(names(&groups[0]), vec!["/b.backup/Cat/2024-01-01 1.0"]);
    }

    #[test]
    fn test_empty_catalog_is_fatal() {
        let mut tree = MemoryTree::new();
        tree.add_dir("/b.backup/Good/2024-01-01 1.0")
            .add_dir("/b.backup/Odd/not-a-backup");

        let err = discover_catalogs(&tree, Path::new("/b.backup")).unwrap_err();
        assert!(matches!(
            err,
            TrimError::DiscoveryEmpty { ref path, .. } if path == Path::new("/b.backup/Odd")
        ));
    }

    #[test]
    fn test_missing_root_is_listing_error() {
        let tree = MemoryTree::new();
        let err = discover_catalogs(&tree, Path::new("/nope.backup")).unwrap_err();
        assert!(matches!(err, TrimError::Listing { .. }));
    }

    #[test]
    fn test_archives_form_one_group() {
        let mut tree = MemoryTree::new();
        tree.add_file("/LR/Backups/2024-02-10 0915/Catalog.lrcat.zip")
            .add_file("/LR/Backups/2023-11-30 2200/Catalog.lrcat.zip")
            .add_file("/LR/Backups/2024-02-10 0915/notes.txt")
            .add_file("/LR/Backups/undated/Catalog.lrcat.zip")
            .add_file("/LR/Backups/stray.zip");

        let groups = discover_archives(&tree, Path::new("/LR/Backups")).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(
            names(&groups[0]),
            vec![
                "/LR/Backups/2023-11-30 2200/Catalog.lrcat.zip",
                "/LR/Backups/2024-02-10 0915/Catalog.lrcat.zip",
            ]
        );
    }

    #[test]
    fn test_archive_requires_zip_file() {
        let mut tree = MemoryTree::new();
        tree.add_dir("/LR/Backups/2024-02-10 0915/Catalog.lrcat.zip")
            .add_file("/LR/Backups/2024-02-10 0915/Catalog.lrcat");

        let err = discover_archives(&tree, Path::new("/LR/Backups")).unwrap_err();
        assert!(matches!(err, TrimError::DiscoveryEmpty { .. }));
    }

    #[test]
    fn test_discovers_on_local_disk() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("Photos.backup");
        std::fs::create_dir_all(root.join("Cat/2024-05-01 12.00")).unwrap();
        std::fs::create_dir_all(root.join("Cat/2024-04-01 12.00")).unwrap();

        let groups = discover_catalogs(&LocalFs, &root).unwrap();
        assert_eq!(groups[0].units.len(), 2);
        assert_eq!(
            groups[0].units[0].locator(),
            root.join("Cat/2024-04-01 12.00")
        );
    }
}
