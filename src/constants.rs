//! Application constants for the import wizard
//!
//! Default values for CLI arguments, logging locations, and the byte-level
//! markers recognised when reading source files.

// =============================================================================
// Connection and Destination Defaults
// =============================================================================

/// Default PostgreSQL connection string for the raw database
pub const DEFAULT_POSTGRES_CONNECTION: &str = "postgresql://postgres@localhost:5433/raw";

/// Environment variable consulted when `--postgres_connection` is not given
pub const POSTGRES_CONNECTION_ENV: &str = "POSTGRES_CONNECTION";

/// Default schema in which the table is created
pub const DEFAULT_SCHEMA: &str = "raw";

/// Column type used for every imported field
pub const COLUMN_TYPE: &str = "TEXT";

// =============================================================================
// Source File Handling
// =============================================================================

/// UTF-8 byte order mark, skipped when present at the start of a source file
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Size of the chunks streamed from the source file into COPY
pub const COPY_CHUNK_SIZE: usize = 64 * 1024;

// =============================================================================
// Logging
// =============================================================================

/// Default directory for the log file
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Log file name within the log directory, truncated on every run
pub const LOG_FILE_NAME: &str = "logger.log";

/// Timestamp format used on every log line
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Tracing target used to build the default filter directive
pub const LOG_TARGET: &str = "postgres_import_wizard";
