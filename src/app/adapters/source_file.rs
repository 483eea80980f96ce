//! Source file access with byte-order-mark handling.
//!
//! Files exported from spreadsheet tools frequently start with a UTF-8 BOM.
//! Both the header read and the COPY stream open the file through here so
//! the marker never reaches a column name or the database.

use crate::constants::UTF8_BOM;
use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use tracing::debug;

/// Open a source file positioned after any leading UTF-8 BOM
pub fn open_source(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path)
        .map_err(|e| Error::io(format!("Failed to open source file {}", path.display()), e))?;
    let mut reader = BufReader::new(file);

    let skipped = skip_bom(&mut reader)
        .map_err(|e| Error::io(format!("Failed to read source file {}", path.display()), e))?;
    if skipped {
        debug!("Skipped byte order mark in {}", path.display());
    }

    Ok(reader)
}

/// Consume a leading UTF-8 BOM if the reader starts with one
///
/// Returns whether a marker was skipped.
pub fn skip_bom<R: BufRead>(reader: &mut R) -> io::Result<bool> {
    let buffer = reader.fill_buf()?;
    if buffer.starts_with(UTF8_BOM) {
        reader.consume(UTF8_BOM.len());
        Ok(true)
    } else {
        Ok(false)
    }
}
