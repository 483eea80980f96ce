//! Table importer: drop, create and bulk-copy inside one transaction
//!
//! The importer runs three steps strictly in order against a single outer
//! transaction and commits only when all of them succeed:
//!
//! 1. optional `DROP TABLE` inside a savepoint, where a missing table is absorbed
//! 2. `CREATE TABLE` with one `TEXT` column per field
//! 3. `COPY ... FROM STDIN` streaming the whole source file, header included
//!
//! ## Architecture
//!
//! - [`session`] - Two-level transaction traits the importer is written against
//! - [`statements`] - SQL text with every identifier and literal escaped
//! - [`importer`] - Step sequencing, stage tracking and rollback
//!
//! ## Usage
//!
//! ```rust,no_run
//! use postgres_import_wizard::app::adapters::postgres::PostgresDatabase;
//! use postgres_import_wizard::app::services::table_importer::TableImporter;
//! use postgres_import_wizard::ImportConfig;
//!
//! # fn example() -> postgres_import_wizard::Result<()> {
//! let config = ImportConfig::new("people.csv", "people");
//! let mut database = PostgresDatabase::connect(&config.postgres_connection)?;
//! let fields = vec!["FirstName".to_string(), "LastName".to_string()];
//!
//! let summary = TableImporter::new(&config).run(&mut database, &fields)?;
//! println!("{} rows copied into {}", summary.rows_copied, summary.table);
//! # Ok(())
//! # }
//! ```

pub mod importer;
pub mod session;
pub mod statements;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use importer::TableImporter;
pub use session::{Database, ImportTransaction};
