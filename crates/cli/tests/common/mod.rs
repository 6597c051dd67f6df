//! Backup layouts on disk for integration tests

use chrono::{Days, Local, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Date `days` before today, formatted for a backup name
pub fn days_ago(days: u64) -> String {
    let today = Local::now().date_naive();
    format_date(today.checked_sub_days(Days::new(days)).unwrap())
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// A temporary backup root
pub struct BackupFixture {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl BackupFixture {
    /// `<tmp>/Photos.backup`, the Capture One layout
    pub fn capture_one() -> Self {
        Self::with_root("Photos.backup")
    }

    /// `<tmp>/Lightroom/Backups`, the Lightroom layout
    pub fn lightroom() -> Self {
        Self::with_root("Lightroom/Backups")
    }

    fn with_root(relative: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join(relative);
        fs::create_dir_all(&root).unwrap();
        Self {
            _temp_dir: temp_dir,
            root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<catalog>/<date> 10.00/` with a catalog file inside
    pub fn add_catalog_backup(&self, catalog: &str, date: &str) -> PathBuf {
        let dir = self.root.join(catalog).join(format!("{date} 10.00"));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{catalog}.cocatalogdb")), b"catalog").unwrap();
        dir
    }

    /// `<root>/<date> 1000/Catalog.lrcat.zip`
    pub fn add_lightroom_backup(&self, date: &str) -> PathBuf {
        let dir = self.root.join(format!("{date} 1000"));
        fs::create_dir_all(&dir).unwrap();
        let zip = dir.join("Catalog.lrcat.zip");
        fs::write(&zip, b"PK").unwrap();
        zip
    }
}
