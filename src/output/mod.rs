//! Output formatting module.
//!
//! Provides formatters for plain text, JSON, and CSV output of command
//! reports.

mod csv_format;
mod json_format;
mod plain;
mod report;

pub use csv_format::CsvReport;
pub use plain::{print_error, print_warning, PlainReport};
pub use report::{
    CompareReport, ContainsReport, InspectReport, KindInfo, KindsReport, ValidationEntry,
    ValidationReport, ValueDetails,
};

use crate::cli::OutputFormat;
use serde::Serialize;
use std::io::{self, Write};

/// A report that can be rendered in every output format.
pub trait Report: Serialize + PlainReport + CsvReport {}

impl<T: Serialize + PlainReport + CsvReport> Report for T {}

/// Render a report to `out` in the requested format.
pub fn write_report<R: Report, W: Write>(report: &R, format: OutputFormat, out: W) -> io::Result<()> {
    match format {
        OutputFormat::Plain => plain::write_plain(report, out),
        OutputFormat::Json => json_format::write_json(report, out),
        OutputFormat::Csv => csv_format::write_csv(report, out),
    }
}

/// Render a report to standard output.
pub fn print_report<R: Report>(report: &R, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    write_report(report, format, stdout.lock())
}
