//! Root path sanity check
//!
//! A coarse check that the path looks like a backup location before anything
//! is listed or removed. It only narrows the blast radius of a mistyped path.

use crate::{Result, TrimError};
use std::path::Path;

/// Fail unless `root` contains every marker, compared case-insensitively
pub fn check_root(root: &Path, markers: &[&str]) -> Result<()> {
    let lowered = root.to_string_lossy().to_lowercase();

    if markers
        .iter()
        .all(|marker| lowered.contains(&marker.to_lowercase()))
    {
        Ok(())
    } else {
        Err(TrimError::Guard {
            path: root.to_path_buf(),
            markers: markers.join(" and "),
        })
    }
}
