//! Backup units and the date stamps parsed from their names

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// One dated, removable backup artifact (a directory or an archive file)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupUnit {
    /// Where the unit lives; used for removal and display
    locator: PathBuf,
    /// Calendar date parsed from the name
    date: NaiveDate,
    /// Zero-padded `yyyy-mm-dd suffix`, lexical order == chronological order.
    /// Every dot-separated part of the suffix is padded too, so `9.15` sorts
    /// before `18.00`.
    sort_key: String,
}

impl BackupUnit {
    /// Build a unit from its location and the stamp parsed from its name
    pub fn new(locator: impl Into<PathBuf>, stamp: DateStamp) -> Self {
        let sort_key = format!(
            "{:04}-{:02}-{:02} {}",
            stamp.date.year(),
            stamp.date.month(),
            stamp.date.day(),
            pad_suffix(&stamp.suffix)
        );

        Self {
            locator: locator.into(),
            date: stamp.date,
            sort_key,
        }
    }

    pub fn locator(&self) -> &Path {
        &self.locator
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn sort_key(&self) -> &str {
        &self.sort_key
    }

    /// Oldest first. Ties on the sort key fall back to the locator so the
    /// order is total.
    pub fn chronological(a: &BackupUnit, b: &BackupUnit) -> Ordering {
        a.sort_key
            .cmp(&b.sort_key)
            .then_with(|| a.locator.cmp(&b.locator))
    }
}

/// Width every numeric part of a suffix is padded to
const SUFFIX_PART_WIDTH: usize = 6;

fn pad_suffix(suffix: &str) -> String {
    suffix
        .split('.')
        .map(|part| format!("{part:0>width$}", width = SUFFIX_PART_WIDTH))
        .collect::<Vec<_>>()
        .join(".")
}

/// Date and trailing suffix extracted from a `yyyy-mm-dd suffix` name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateStamp {
    pub date: NaiveDate,
    pub suffix: String,
}

/// Matches the trailing path segment of a backup against
/// `<yyyy>-<mm>-<dd> <suffix>`
#[derive(Debug, Clone)]
pub struct DatePattern {
    regex: Regex,
}

impl DatePattern {
    /// Capture One backup directories: `2024-01-05 10.30`
    pub fn catalog() -> Self {
        Self::with_suffix(r"[0-9.]+")
    }

    /// Lightroom session folders: `2024-01-05 1030`
    pub fn session() -> Self {
        Self::with_suffix(r"[0-9]+")
    }

    fn with_suffix(suffix: &str) -> Self {
        let pattern = format!(r"^([0-9]+)-([0-9]+)-([0-9]+)\s({suffix})$");
        Self {
            regex: Regex::new(&pattern).expect("date pattern is a valid regex"),
        }
    }

    /// Parse a single name segment
    ///
    /// Returns `None` when the name does not match or the numbers do not form
    /// a real calendar date (`2024-13-40`).
    pub fn extract(&self, segment: &str) -> Option<DateStamp> {
        let caps = self.regex.captures(segment)?;
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        let date = NaiveDate::from_ymd_opt(year, month, day)?;

        Some(DateStamp {
            date,
            suffix: caps[4].to_string(),
        })
    }

    /// Parse the last component of `path`, independent of the platform separator
    pub fn extract_from_path(&self, path: &Path) -> Option<DateStamp> {
        let name = path.file_name()?.to_str()?;
        self.extract(name)
    }
}
