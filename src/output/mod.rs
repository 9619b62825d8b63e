//! Output formatting for CLI results

use serde::Serialize;
use tabled::Tabled;

use crate::cli::OutputFormat;
use crate::error::Result;

pub mod json;
pub mod table;

/// Trait for types that can be formatted for output
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(table::format_table(self)),
            OutputFormat::Json => Ok(json::format_json_list(self)?),
        }
    }
}

/// Print a single record: a one-row table, or a bare JSON object in `data`.
pub fn print_one<T: Tabled + Serialize>(item: T, format: OutputFormat) -> Result<()> {
    let output = match format {
        OutputFormat::Table => table::format_table(std::slice::from_ref(&item)),
        OutputFormat::Json => json::format_json(&item)?,
    };
    println!("{}", output);
    Ok(())
}
