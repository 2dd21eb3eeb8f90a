use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rowguard",
    about = "Drift guards for the providers SQLite database: row counts, schema checksum, integrity, backups",
    version
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Project root holding rowguard.toml and the baseline files
    #[arg(long, global = true, default_value = ".")]
    pub root: String,

    /// Database path (overrides SQLITE_PATH and rowguard.toml)
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Row-count baseline file (overrides ROWGUARD_BASELINE and rowguard.toml)
    #[arg(long, global = true)]
    pub baseline: Option<String>,

    /// Degrade to partial results on database errors instead of aborting
    #[arg(long, global = true)]
    pub tolerant: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check row counts against the baseline (exit 1 on drift)
    Rowcounts {
        /// Accept current counts as the new baseline
        #[arg(long, conflicts_with = "refresh")]
        write: bool,

        /// Recompute counts into the staging file without comparing
        #[arg(long)]
        refresh: bool,
    },

    /// Print the schema checksum and check it against the baseline
    Schema {
        /// Accept the current checksum as the new baseline
        #[arg(long)]
        write: bool,
    },

    /// Run PRAGMA integrity_check
    Integrity,

    /// Back up the database into the backup directory
    Backup {
        /// Backups to keep after pruning
        #[arg(long)]
        keep: Option<u32>,
    },

    /// List existing backups, oldest first
    Backups,

    /// Restore the database from a backup file
    Restore {
        /// Backup file to restore from
        file: String,
    },

    /// Run integrity, schema and row-count checks in order
    Health,
}
