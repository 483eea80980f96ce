//! Command implementation for the import wizard CLI
//!
//! Wires configuration, logging, the database connection, the field
//! extractor and the table importer into one run, and owns the cleanup that
//! must happen on every exit path.

use crate::app::adapters::postgres::PostgresDatabase;
use crate::app::models::ImportSummary;
use crate::app::services::field_extractor::extract_fields_from_file;
use crate::app::services::table_importer::TableImporter;
use crate::cli::args::Args;
use crate::cli::logging::ImportLogger;
use crate::config::ImportConfig;
use crate::Result;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Main command runner
///
/// 1. Set up logging (stdout plus log file)
/// 2. Validate arguments and build the configuration
/// 3. Connect, derive fields, import, commit
/// 4. Close the connection whatever the outcome
pub fn run(args: Args) -> Result<ImportSummary> {
    let config = ImportConfig::from_args(&args);

    let logger = ImportLogger::init(&config.log_dir, args.get_log_level())?;
    logger.in_scope(|| {
        debug!("Command line arguments: {:?}", args.clone().redacted());
        debug!("Logging to {}", logger.log_file().display());

        if let Err(e) = args.validate() {
            error!("Invalid arguments: {}", e);
            return Err(e);
        }
        run_import(&config)
    })
}

/// Execute one import with the given configuration
///
/// Fatal errors are logged here before being returned to the caller.
pub fn run_import(config: &ImportConfig) -> Result<ImportSummary> {
    let start_time = Instant::now();
    info!("Job starting");

    let result = config.validate().and_then(|()| {
        info!("Connecting to db");
        let mut database = PostgresDatabase::connect(&config.postgres_connection)?;

        let outcome = import_with(&mut database, config);

        if let Err(e) = database.close() {
            warn!("Error while closing connection: {}", e);
        }
        outcome
    });

    match &result {
        Ok(summary) => info!(
            "Imported {} rows into {} ({} columns) in {:.2?}",
            summary.rows_copied,
            summary.table,
            summary.columns,
            start_time.elapsed()
        ),
        Err(e) => error!("Exception occurred while loading raw data: {}", e),
    }
    info!("Job complete");

    result
}

fn import_with(database: &mut PostgresDatabase, config: &ImportConfig) -> Result<ImportSummary> {
    info!("Getting header line from file");
    let fields = extract_fields_from_file(&config.file, config.delimiter)?;

    info!("Beginning Postgres import...");
    TableImporter::new(config).run(database, &fields)
}

impl Args {
    /// Copy of the arguments safe to log: the connection string is replaced
    fn redacted(mut self) -> Self {
        self.postgres_connection = "<redacted>".to_string();
        self
    }
}
