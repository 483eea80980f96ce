//! Logging setup for an import run
//!
//! Builds a subscriber writing `LEVEL [timestamp] message` lines to both
//! stdout and a log file. The subscriber is owned by [`ImportLogger`] and
//! only active inside [`ImportLogger::in_scope`], so the import code receives its logger
//! explicitly instead of relying on a process-wide default.

use crate::constants::{LOG_FILE_NAME, LOG_TARGET, LOG_TIMESTAMP_FORMAT};
use crate::{Error, Result};
use chrono::Local;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{Dispatch, Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt};

/// Line layout `LEVEL [YYYY-MM-DD HH:MM:SS] message`, in local time
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportLogFormat;

impl<S, N> FormatEvent<S, N> for ImportLogFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        write!(
            writer,
            "{} [{}] ",
            event.metadata().level(),
            Local::now().format(LOG_TIMESTAMP_FORMAT)
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Logger handed to the import run
pub struct ImportLogger {
    dispatch: Dispatch,
    log_file: PathBuf,
    // Flushes the file writer when dropped
    _guard: WorkerGuard,
}

impl ImportLogger {
    /// Create the log directory, truncate the log file and build the subscriber
    ///
    /// `RUST_LOG` takes precedence over `level` when set.
    pub fn init(log_dir: &Path, level: &str) -> Result<Self> {
        fs::create_dir_all(log_dir).map_err(|e| {
            Error::io(
                format!("Failed to create log directory {}", log_dir.display()),
                e,
            )
        })?;

        let log_file = log_dir.join(LOG_FILE_NAME);
        let file = File::create(&log_file).map_err(|e| {
            Error::io(format!("Failed to create log file {}", log_file.display()), e)
        })?;
        let (file_writer, guard) = tracing_appender::non_blocking(file);

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("{}={}", LOG_TARGET, level)));

        let subscriber = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .event_format(ImportLogFormat)
                    .with_ansi(false)
                    .with_writer(file_writer),
            )
            .with(
                fmt::layer()
                    .event_format(ImportLogFormat)
                    .with_writer(std::io::stdout),
            );

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            log_file,
            _guard: guard,
        })
    }

    /// Path of the log file written by this logger
    pub fn log_file(&self) -> &Path {
        &self.log_file
    }

    /// Run `f` with this logger receiving every event
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }
}
