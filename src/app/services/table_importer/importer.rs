//! Import orchestration
//!
//! Sequences the drop, create and copy steps against one transaction and
//! guarantees rollback on every failure path.

use super::session::{Database, ImportTransaction};
use crate::app::adapters::source_file::open_source;
use crate::app::models::{DropOutcome, ImportStage, ImportSummary};
use crate::config::ImportConfig;
use crate::{Error, Result};
use tracing::{debug, info, warn};

/// Imports one source file into one freshly created table
#[derive(Debug)]
pub struct TableImporter<'a> {
    config: &'a ImportConfig,
}

impl<'a> TableImporter<'a> {
    pub fn new(config: &'a ImportConfig) -> Self {
        Self { config }
    }

    /// Run the import and commit on success
    ///
    /// Any error rolls back the whole transaction before it is returned, so
    /// neither a newly created table nor partially copied rows survive.
    pub fn run<D: Database + ?Sized>(
        &self,
        database: &mut D,
        fields: &[String],
    ) -> Result<ImportSummary> {
        let mut transaction = database.begin()?;
        let mut stage = ImportStage::Start;

        match self.execute_steps(transaction.as_mut(), fields, &mut stage) {
            Ok(mut summary) => {
                transaction.commit()?;
                summary.stage = ImportStage::Committed;
                debug!("Import of {} committed", summary.table);
                Ok(summary)
            }
            Err(error) => {
                warn!(
                    "Rolling back import into {} after stage '{}'",
                    self.config.table, stage
                );
                if let Err(rollback_error) = transaction.rollback() {
                    warn!("Rollback failed: {}", rollback_error);
                }
                Err(error)
            }
        }
    }

    fn execute_steps(
        &self,
        transaction: &mut dyn ImportTransaction,
        fields: &[String],
        stage: &mut ImportStage,
    ) -> Result<ImportSummary> {
        let table = &self.config.table;

        let drop_outcome = if self.config.clean {
            info!("Dropping existing table {}", table);
            let outcome = transaction.drop_table(table)?;
            match outcome {
                DropOutcome::Dropped => info!("Table {} dropped", table),
                DropOutcome::NotFound => {
                    info!("Table {} does not exist, nothing to drop", table)
                }
            }
            Some(outcome)
        } else {
            None
        };
        advance(stage, ImportStage::TableDroppedOrSkipped);

        if fields.is_empty() {
            return Err(Error::no_columns(table));
        }

        info!("Creating raw data table");
        transaction.create_table(table, fields)?;
        info!("Table created");
        advance(stage, ImportStage::TableCreated);

        info!("Copying data file into the table");
        let mut source = open_source(&self.config.file)?;
        let rows_copied = transaction.copy_from(table, self.config.delimiter, &mut source)?;
        info!("{} rows successfully copied into {}", rows_copied, table);
        advance(stage, ImportStage::DataCopied);

        Ok(ImportSummary {
            table: table.clone(),
            columns: fields.len(),
            rows_copied,
            drop_outcome,
            stage: *stage,
        })
    }
}

fn advance(stage: &mut ImportStage, next: ImportStage) {
    debug!("Import stage: {} -> {}", stage, next);
    *stage = next;
}
