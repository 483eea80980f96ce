//! Postgres Import Wizard Library
//!
//! A Rust library for importing a delimited text file into a freshly created
//! PostgreSQL table in which every column is `TEXT`.
//!
//! This library provides tools for:
//! - Deriving column names from a file's header line (BOM-aware)
//! - Optionally dropping an existing table under a savepoint
//! - Creating the destination table with properly quoted identifiers
//! - Streaming the file into the table with `COPY ... FROM STDIN`
//! - All-or-nothing semantics: one transaction, committed only on success

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_extractor;
        pub mod table_importer;
    }
    pub mod adapters {
        pub mod postgres;
        pub mod source_file;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod logging;
}

// Re-export commonly used types
pub use app::models::{DropOutcome, ImportStage, ImportSummary, TableRef};
pub use config::{Delimiter, ImportConfig};

/// Result type alias for the import wizard
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for import operations
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}: {source}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Database round-trip failed in a way not classified below
    #[error("Database error: {message}: {source}")]
    Database {
        message: String,
        #[source]
        source: postgres::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Delimiter outside the supported set
    #[error("Unsupported delimiter {value:?}: expected ',', '|' or tab")]
    InvalidDelimiter { value: String },

    /// File not found
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    /// Header produced no column names
    #[error("No columns derived from header for table {table}")]
    NoColumns { table: String },

    /// CREATE TABLE hit an existing table
    #[error("Table {table} already exists")]
    TableAlreadyExists { table: String },

    /// CREATE TABLE rejected the column list or identifiers
    #[error("Invalid definition for table {table}: {reason}")]
    InvalidTableDefinition { table: String, reason: String },

    /// DROP TABLE failed for a reason other than the table being absent
    #[error("Failed to drop table {table}: {reason}")]
    DropFailed { table: String, reason: String },

    /// COPY rejected the streamed data
    #[error("COPY into {table} rejected: {reason}")]
    CopyRejected { table: String, reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a database error with context
    pub fn database(message: impl Into<String>, source: postgres::Error) -> Self {
        Self::Database {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid delimiter error
    pub fn invalid_delimiter(value: impl Into<String>) -> Self {
        Self::InvalidDelimiter {
            value: value.into(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(path: impl Into<String>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a no columns error
    pub fn no_columns(table: &TableRef) -> Self {
        Self::NoColumns {
            table: table.to_string(),
        }
    }

    /// Create a table already exists error
    pub fn table_already_exists(table: &TableRef) -> Self {
        Self::TableAlreadyExists {
            table: table.to_string(),
        }
    }

    /// Create an invalid table definition error
    pub fn invalid_table_definition(table: &TableRef, reason: impl Into<String>) -> Self {
        Self::InvalidTableDefinition {
            table: table.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a drop failed error
    pub fn drop_failed(table: &TableRef, reason: impl Into<String>) -> Self {
        Self::DropFailed {
            table: table.to_string(),
            reason: reason.into(),
        }
    }

    /// Create a copy rejected error
    pub fn copy_rejected(table: &TableRef, reason: impl Into<String>) -> Self {
        Self::CopyRejected {
            table: table.to_string(),
            reason: reason.into(),
        }
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<postgres::Error> for Error {
    fn from(error: postgres::Error) -> Self {
        Self::Database {
            message: "Database operation failed".to_string(),
            source: error,
        }
    }
}
