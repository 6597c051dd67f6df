//! Command line arguments shared by both tools

use clap::{CommandFactory, FromArgMatches, Parser};
use retention::{RetentionPolicy, Variant};
use std::ffi::OsString;
use std::path::PathBuf;

/// Trim old photo catalog backups
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct TrimArgs {
    /// List only, don't delete anything
    #[arg(short = 'l', long = "list-only")]
    pub list_only: bool,

    /// Minimum number of days of backups to keep from newest backup
    #[arg(short = 'd', value_name = "DAYS", default_value_t = 30)]
    pub min_days: u32,

    /// Minimum number of backups to keep
    #[arg(short = 'n', value_name = "COUNT", default_value_t = 10)]
    pub min_count: u32,

    /// Maximum number of backups to remove in this run (0 = unlimited)
    #[arg(short = 'm', value_name = "COUNT", default_value_t = 0)]
    pub max_remove: u32,

    /// Directory holding the backups
    pub backup_parent_dir: PathBuf,
}

impl TrimArgs {
    pub fn policy(&self, variant: Variant) -> RetentionPolicy {
        RetentionPolicy {
            min_count_to_keep: self.min_count,
            min_days_to_keep: self.min_days,
            max_removals_per_run: self.max_remove,
            dry_run: self.list_only,
            age_reference: variant.age_reference(),
        }
    }
}

/// Parse `args` (program name first) under the tool's own name
pub fn parse_from<I, T>(variant: Variant, args: I) -> Result<TrimArgs, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut command = TrimArgs::command()
        .name(variant.tool_name())
        .bin_name(variant.tool_name());
    let mut matches = command.try_get_matches_from_mut(args)?;
    TrimArgs::from_arg_matches_mut(&mut matches).map_err(|err| err.format(&mut command))
}
