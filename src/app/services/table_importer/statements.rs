//! SQL statement construction.
//!
//! Identifiers go through PostgreSQL identifier escaping and the delimiter
//! through literal escaping. Nothing supplied by the user is spliced into a
//! statement verbatim.

use crate::app::models::TableRef;
use crate::config::Delimiter;
use crate::constants::COLUMN_TYPE;
use postgres_protocol::escape::{escape_identifier, escape_literal};

/// Schema-qualified, quoted table name: `"schema"."table"`
pub fn qualified_name(table: &TableRef) -> String {
    format!(
        "{}.{}",
        escape_identifier(&table.schema),
        escape_identifier(&table.table)
    )
}

/// `DROP TABLE` for the destination
pub fn drop_table(table: &TableRef) -> String {
    format!("DROP TABLE {}", qualified_name(table))
}

/// `CREATE TABLE` with one `TEXT` column per field, in field order
pub fn create_table(table: &TableRef, fields: &[String]) -> String {
    let columns = fields
        .iter()
        .map(|field| format!("{} {}", escape_identifier(field), COLUMN_TYPE))
        .collect::<Vec<_>>()
        .join(", ");

    format!("CREATE TABLE {} ({})", qualified_name(table), columns)
}

/// `COPY ... FROM STDIN` in CSV format with header skipping
pub fn copy_from_stdin(table: &TableRef, delimiter: Delimiter) -> String {
    format!(
        "COPY {} FROM STDIN WITH (FORMAT CSV, HEADER TRUE, DELIMITER {})",
        qualified_name(table),
        escape_literal(delimiter.as_str()).trim_start()
    )
}
