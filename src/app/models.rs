//! Core data models for the import pipeline
//!
//! Defines the destination table reference, the typed outcome of the optional
//! drop step, the stages an import passes through, and the summary reported
//! once the transaction commits.

use std::fmt;

/// Destination table identified by schema and table name
///
/// Names are kept exactly as supplied. Quoting happens only when statements
/// are built, never here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableRef {
    pub schema: String,
    pub table: String,
}

impl TableRef {
    /// Create a new table reference
    pub fn new(schema: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            table: table.into(),
        }
    }
}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema, self.table)
    }
}

/// Result of attempting to drop the destination table inside a savepoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The table existed and was dropped
    Dropped,
    /// The table did not exist; the savepoint was rolled back and the import continues
    NotFound,
}

/// Stages of a single import, in the order they are reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportStage {
    Start,
    TableDroppedOrSkipped,
    TableCreated,
    DataCopied,
    Committed,
}

impl fmt::Display for ImportStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImportStage::Start => "start",
            ImportStage::TableDroppedOrSkipped => "table dropped or skipped",
            ImportStage::TableCreated => "table created",
            ImportStage::DataCopied => "data copied",
            ImportStage::Committed => "committed",
        };
        f.write_str(name)
    }
}

/// Outcome of a committed import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    /// Table that was created and populated
    pub table: TableRef,
    /// Number of TEXT columns created
    pub columns: usize,
    /// Rows reported by COPY
    pub rows_copied: u64,
    /// Outcome of the drop step, `None` when `--clean` was not requested
    pub drop_outcome: Option<DropOutcome>,
    /// Last stage reached
    pub stage: ImportStage,
}
