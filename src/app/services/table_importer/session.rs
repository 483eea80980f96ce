//! Transaction abstraction used by the importer.
//!
//! [`Database::begin`] opens the outer transaction covering the whole
//! import. The drop step runs in a nested sub-transaction owned by the
//! implementation and reports a [`DropOutcome`] instead of an error when the
//! table is missing, so the outer transaction is never poisoned by it.

use crate::app::models::{DropOutcome, TableRef};
use crate::config::Delimiter;
use crate::Result;
use std::io::Read;

/// A connection able to open the outer import transaction
pub trait Database {
    /// Begin the transaction that spans drop, create and copy
    fn begin(&mut self) -> Result<Box<dyn ImportTransaction + '_>>;
}

/// Operations available inside the outer import transaction
pub trait ImportTransaction {
    /// Drop the table inside a savepoint
    ///
    /// A missing table rolls back only the savepoint and yields
    /// [`DropOutcome::NotFound`]. Any other failure is returned as an error.
    fn drop_table(&mut self, table: &TableRef) -> Result<DropOutcome>;

    /// Create the table with one `TEXT` column per field, in order
    fn create_table(&mut self, table: &TableRef, fields: &[String]) -> Result<()>;

    /// Stream CSV-framed data, header line included, into the table
    ///
    /// Returns the number of rows copied.
    fn copy_from(
        &mut self,
        table: &TableRef,
        delimiter: Delimiter,
        source: &mut dyn Read,
    ) -> Result<u64>;

    /// Commit everything done in this transaction
    fn commit(self: Box<Self>) -> Result<()>;

    /// Discard everything done in this transaction
    fn rollback(self: Box<Self>) -> Result<()>;
}
