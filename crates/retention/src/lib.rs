//! Retention-based trimming of photo catalog backups
//!
//! This crate provides:
//! - Backup units and date parsing from backup names
//! - Retention policy and removal selection
//! - Root path guard
//! - Discovery for catalog trees and zip archives
//! - Removal with per-unit failure isolation

pub mod discover;
pub mod error;
pub mod execute;
pub mod fs;
pub mod guard;
pub mod policy;
pub mod unit;
pub mod variant;

// Re-exports
pub use discover::UnitGroup;
pub use error::{Result, TrimError};
pub use execute::{ExecutionReport, RemovalKind};
pub use fs::{DirLister, LocalFs, Remover};
#[cfg(any(test, feature = "testing"))]
pub use fs::MemoryTree;
pub use policy::{select_for_removal, AgeReference, RetentionPolicy};
pub use unit::{BackupUnit, DatePattern, DateStamp};
pub use variant::{GroupPlan, TrimPlan, Variant};
