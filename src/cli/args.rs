//! Command-line argument definitions for the import wizard
//!
//! The flag names mirror the long-standing interface of the importer
//! (`--postgres_connection` keeps its underscore).

use crate::config::Delimiter;
use crate::constants::{
    DEFAULT_LOG_DIR, DEFAULT_POSTGRES_CONNECTION, DEFAULT_SCHEMA, POSTGRES_CONNECTION_ENV,
};
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the import wizard
///
/// Imports a raw data set into a table in a Postgres database. Every column
/// is created as TEXT and named after the sanitized header field.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "postgres-import-wizard",
    version,
    about = "Import a raw data set into a table in a Postgres database",
    long_about = "Creates SCHEMA.TABLE with one TEXT column per header field of FILE and \
                  streams FILE into it with COPY. The whole import runs in one transaction: \
                  either every row lands or nothing changes."
)]
pub struct Args {
    /// Delete any table that already exists at "SCHEMA"."TABLE"
    #[arg(long = "clean", help = "Delete any table that already exists at \"SCHEMA\".\"TABLE\"")]
    pub clean: bool,

    /// Delimiter separating fields in FILE
    ///
    /// One of ',', '|' or a tab character. The names comma, pipe and tab
    /// are accepted as well.
    #[arg(
        long = "delimiter",
        value_name = "DELIMITER",
        default_value = ",",
        help = "Delimiter separating fields in FILE (',', '|' or tab)"
    )]
    pub delimiter: Delimiter,

    /// Path to data file to import
    #[arg(long = "file", value_name = "FILE", help = "Path to data file to import")]
    pub file: PathBuf,

    /// Postgres connection string for raw database
    #[arg(
        long = "postgres_connection",
        value_name = "CONNECTION",
        env = POSTGRES_CONNECTION_ENV,
        default_value = DEFAULT_POSTGRES_CONNECTION,
        hide_env_values = true,
        help = "Postgres connection string for raw database"
    )]
    pub postgres_connection: String,

    /// Name of schema in which to create table
    #[arg(
        long = "schema",
        value_name = "SCHEMA",
        default_value = DEFAULT_SCHEMA,
        help = "Name of schema in which to create table"
    )]
    pub schema: String,

    /// Name of table to create
    #[arg(long = "table", value_name = "TABLE", help = "Name of table to create")]
    pub table: String,

    /// Directory receiving the log file
    #[arg(
        long = "log-dir",
        value_name = "DIR",
        default_value = DEFAULT_LOG_DIR,
        help = "Directory for the log file (truncated on each run)"
    )]
    pub log_dir: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Only log errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate argument consistency before a configuration is built
    pub fn validate(&self) -> Result<()> {
        if self.table.trim().is_empty() {
            return Err(Error::configuration("--table must not be empty"));
        }

        if self.schema.trim().is_empty() {
            return Err(Error::configuration("--schema must not be empty"));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "info",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}
