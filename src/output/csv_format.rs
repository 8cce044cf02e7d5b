//! CSV output formatting.

use super::report::{
    CompareReport, ContainsReport, InspectReport, KindsReport, ValidationReport,
};
use crate::framework::Diagnostics;
use std::io::{self, Write};

/// Tabular view of a report.
pub trait CsvReport {
    fn csv_header(&self) -> &'static [&'static str];
    fn csv_rows(&self) -> Vec<Vec<String>>;
}

/// Write a report as CSV with a header row.
pub fn write_csv<R: CsvReport, W: Write>(report: &R, out: W) -> io::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    wtr.write_record(report.csv_header())?;
    for row in report.csv_rows() {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Diagnostic details joined into one cell.
fn errors_cell(diagnostics: &Diagnostics) -> String {
    diagnostics
        .errors()
        .map(|d| format!("{}: {}", d.summary, d.detail))
        .collect::<Vec<_>>()
        .join(" | ")
}

impl CsvReport for ValidationReport {
    fn csv_header(&self) -> &'static [&'static str] {
        &["kind", "value", "valid", "error"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.entries
            .iter()
            .map(|entry| {
                vec![
                    self.kind.to_string(),
                    entry.value.clone(),
                    entry.valid.to_string(),
                    errors_cell(&entry.diagnostics),
                ]
            })
            .collect()
    }
}

impl CsvReport for CompareReport {
    fn csv_header(&self) -> &'static [&'static str] {
        &["kind", "current", "new", "equal", "error"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.kind.to_string(),
            self.current.clone(),
            self.new.clone(),
            self.equal.to_string(),
            errors_cell(&self.diagnostics),
        ]]
    }
}

impl CsvReport for InspectReport {
    fn csv_header(&self) -> &'static [&'static str] {
        &[
            "kind",
            "value",
            "family",
            "canonical",
            "octets",
            "prefix_len",
            "network",
            "error",
        ]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        let details = self.details.as_ref();
        vec![vec![
            self.kind.to_string(),
            self.value.clone(),
            details.and_then(|d| d.family.clone()).unwrap_or_default(),
            details.map(|d| d.canonical.clone()).unwrap_or_default(),
            details.map(|d| d.octets.clone()).unwrap_or_default(),
            details
                .and_then(|d| d.prefix_len)
                .map_or(String::new(), |bits| bits.to_string()),
            details.and_then(|d| d.network.clone()).unwrap_or_default(),
            errors_cell(&self.diagnostics),
        ]]
    }
}

impl CsvReport for ContainsReport {
    fn csv_header(&self) -> &'static [&'static str] {
        &["prefix", "address", "contains", "error"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        vec![vec![
            self.prefix.clone(),
            self.address.clone(),
            self.contains.to_string(),
            errors_cell(&self.diagnostics),
        ]]
    }
}

impl CsvReport for KindsReport {
    fn csv_header(&self) -> &'static [&'static str] {
        &["kind", "value_type", "format"]
    }

    fn csv_rows(&self) -> Vec<Vec<String>> {
        self.kinds
            .iter()
            .map(|info| {
                vec![
                    info.kind.to_string(),
                    info.value_type.to_string(),
                    info.format.to_string(),
                ]
            })
            .collect()
    }
}
