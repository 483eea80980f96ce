//! Configuration management and validation.
//!
//! Provides the delimiter type accepted on the command line and the
//! validated configuration for a single import run.

use crate::app::models::TableRef;
use crate::cli::args::Args;
use crate::constants::{DEFAULT_LOG_DIR, DEFAULT_POSTGRES_CONNECTION, DEFAULT_SCHEMA};
use crate::{Error, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Field delimiters supported for source files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    /// Comma separated values
    #[default]
    Comma,
    /// Pipe separated values
    Pipe,
    /// Tab separated values
    Tab,
}

impl Delimiter {
    /// The delimiter character
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Pipe => '|',
            Delimiter::Tab => '\t',
        }
    }

    /// The delimiter as a single byte, for byte-oriented readers
    pub fn as_byte(self) -> u8 {
        self.as_char() as u8
    }

    /// The delimiter as a string slice
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Pipe => "|",
            Delimiter::Tab => "\t",
        }
    }
}

impl FromStr for Delimiter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "," | "comma" => Ok(Delimiter::Comma),
            "|" | "pipe" => Ok(Delimiter::Pipe),
            "\t" | "\\t" | "tab" => Ok(Delimiter::Tab),
            other => Err(Error::invalid_delimiter(other)),
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Tab => f.write_str("\\t"),
            other => f.write_str(other.as_str()),
        }
    }
}

/// Configuration for a single import run
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Drop any existing table at the destination before creating it
    pub clean: bool,
    /// Delimiter separating fields in the source file
    pub delimiter: Delimiter,
    /// Source file to import
    pub file: PathBuf,
    /// PostgreSQL connection string
    pub postgres_connection: String,
    /// Destination table
    pub table: TableRef,
    /// Directory receiving the log file
    pub log_dir: PathBuf,
}

impl ImportConfig {
    /// Create a configuration with default connection, schema and log directory
    pub fn new(file: impl Into<PathBuf>, table: impl Into<String>) -> Self {
        Self {
            clean: false,
            delimiter: Delimiter::default(),
            file: file.into(),
            postgres_connection: DEFAULT_POSTGRES_CONNECTION.to_string(),
            table: TableRef::new(DEFAULT_SCHEMA, table),
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
        }
    }

    /// Build a configuration from parsed command line arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            clean: args.clean,
            delimiter: args.delimiter,
            file: args.file.clone(),
            postgres_connection: args.postgres_connection.clone(),
            table: TableRef::new(args.schema.clone(), args.table.clone()),
            log_dir: args.log_dir.clone(),
        }
    }

    /// Validate the configuration before any connection is opened
    pub fn validate(&self) -> Result<()> {
        if self.table.schema.is_empty() {
            return Err(Error::configuration("Schema name must not be empty"));
        }

        if self.table.table.is_empty() {
            return Err(Error::configuration("Table name must not be empty"));
        }

        if !self.file.exists() {
            return Err(Error::file_not_found(self.file.display().to_string()));
        }

        if !self.file.is_file() {
            return Err(Error::configuration(format!(
                "Source path is not a regular file: {}",
                self.file.display()
            )));
        }

        self.postgres_connection
            .parse::<postgres::Config>()
            .map_err(|e| {
                Error::configuration(format!("Invalid PostgreSQL connection string: {}", e))
            })?;

        debug!("Configuration validated for {}", self.table);
        Ok(())
    }
}
