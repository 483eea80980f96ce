//! Test utilities and mock infrastructure for table importer testing
//!
//! This module provides an in-memory database implementing the session
//! traits, plus helpers for writing source files.

use std::collections::{HashMap, HashSet};
use std::io::{Read, Write};
use tempfile::NamedTempFile;

use super::session::{Database, ImportTransaction};
use crate::app::models::{DropOutcome, TableRef};
use crate::config::Delimiter;
use crate::{Error, Result};


/// Table held by the mock database
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MockTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// In-memory database with transactional tables
///
/// Each transaction works on a copy of the committed tables; commit
/// replaces them, rollback throws the copy away.
#[derive(Debug, Default)]
pub struct MockDatabase {
    pub tables: HashMap<TableRef, MockTable>,
    /// When set, DROP fails with this reason even if the table exists
    pub drop_failure: Option<String>,
    /// Operations in the order they were issued
    pub events: Vec<String>,
}

impl MockDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a committed table
    pub fn with_table(mut self, table: TableRef, columns: &[&str], rows: usize) -> Self {
        let columns: Vec<String> = columns.iter().map(|c| c.to_string()).collect();
        let rows = (0..rows)
            .map(|i| columns.iter().map(|c| format!("{}{}", c, i)).collect())
            .collect();
        self.tables.insert(table, MockTable { columns, rows });
        self
    }

    pub fn table(&self, table: &TableRef) -> Option<&MockTable> {
        self.tables.get(table)
    }
}

impl Database for MockDatabase {
    fn begin(&mut self) -> Result<Box<dyn ImportTransaction + '_>> {
        self.events.push("begin".to_string());
        let working = self.tables.clone();
        Ok(Box::new(MockTransaction {
            database: self,
            working,
        }))
    }
}

/// Transaction over the mock database
pub struct MockTransaction<'a> {
    database: &'a mut MockDatabase,
    working: HashMap<TableRef, MockTable>,
}

impl MockTransaction<'_> {
    fn record(&mut self, event: impl Into<String>) {
        self.database.events.push(event.into());
    }
}

impl ImportTransaction for MockTransaction<'_> {
    fn drop_table(&mut self, table: &TableRef) -> Result<DropOutcome> {
        self.record("savepoint");
        if let Some(reason) = self.database.drop_failure.clone() {
            self.record("rollback to savepoint");
            return Err(Error::drop_failed(table, reason));
        }

        if self.working.remove(table).is_some() {
            self.record(format!("drop {}", table));
            self.record("release savepoint");
            Ok(DropOutcome::Dropped)
        } else {
            self.record("rollback to savepoint");
            Ok(DropOutcome::NotFound)
        }
    }

    fn create_table(&mut self, table: &TableRef, fields: &[String]) -> Result<()> {
        if self.working.contains_key(table) {
            return Err(Error::table_already_exists(table));
        }
        if fields.iter().any(String::is_empty) {
            return Err(Error::invalid_table_definition(
                table,
                "zero-length delimited identifier",
            ));
        }
        let mut seen = HashSet::new();
        if let Some(duplicate) = fields.iter().find(|f| !seen.insert(f.as_str())) {
            return Err(Error::invalid_table_definition(
                table,
                format!("column \"{}\" specified more than once", duplicate),
            ));
        }

        self.record(format!("create {} ({})", table, fields.join(", ")));
        self.working.insert(
            table.clone(),
            MockTable {
                columns: fields.to_vec(),
                rows: Vec::new(),
            },
        );
        Ok(())
    }

    fn copy_from(
        &mut self,
        table: &TableRef,
        delimiter: Delimiter,
        source: &mut dyn Read,
    ) -> Result<u64> {
        self.record(format!("copy {}", table));
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter.as_byte())
            .has_headers(true)
            .flexible(true)
            .from_reader(source);

        let target = self
            .working
            .get_mut(table)
            .ok_or_else(|| Error::copy_rejected(table, "relation does not exist"))?;

        let mut copied = 0;
        for record in reader.records() {
            let record = record.map_err(|e| Error::copy_rejected(table, e.to_string()))?;
            if record.len() != target.columns.len() {
                return Err(Error::copy_rejected(
                    table,
                    format!(
                        "expected {} columns, found {}",
                        target.columns.len(),
                        record.len()
                    ),
                ));
            }
            target.rows.push(record.iter().map(str::to_string).collect());
            copied += 1;
        }
        Ok(copied)
    }

    fn commit(self: Box<Self>) -> Result<()> {
        let this = *self;
        this.database.events.push("commit".to_string());
        this.database.tables = this.working;
        Ok(())
    }

    fn rollback(self: Box<Self>) -> Result<()> {
        self.database.events.push("rollback".to_string());
        Ok(())
    }
}

/// Write a source file with the given contents
pub fn write_source(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
