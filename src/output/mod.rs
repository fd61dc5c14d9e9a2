//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Print `rows` as a table, or `data` as a JSON envelope.
///
/// Pretty output is command specific; callers handle it before reaching here
/// and anything that falls through is rendered as a table.
pub fn print_rows<T, R>(data: &T, rows: &[R], format: OutputFormat) -> Result<()>
where
    T: Serialize + ?Sized,
    R: Tabled,
{
    match format {
        OutputFormat::Json => println!("{}", json::format_json(data)?),
        OutputFormat::Table | OutputFormat::Pretty => println!("{}", table::format_table(rows)),
    }
    Ok(())
}
