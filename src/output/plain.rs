//! Plain text output formatting.
//!
//! Produces human-readable output with colors and formatting.

use super::report::{
    CompareReport, ContainsReport, InspectReport, KindsReport, ValidationReport,
};
use crate::framework::Diagnostics;
use console::style;
use std::io::{self, Write};

/// Human-readable view of a report.
pub trait PlainReport {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()>;
}

pub fn write_plain<R: PlainReport, W: Write>(report: &R, mut out: W) -> io::Result<()> {
    report.write_plain(&mut out)
}

/// Print each diagnostic indented under its value.
fn write_diagnostics(out: &mut dyn Write, diagnostics: &Diagnostics) -> io::Result<()> {
    for diag in diagnostics {
        writeln!(out, "    {}", style(&diag.summary).red().bold())?;
        for line in diag.detail.lines() {
            if line.is_empty() {
                continue;
            }
            writeln!(out, "      {}", line)?;
        }
    }
    Ok(())
}

impl PlainReport for ValidationReport {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        for entry in &self.entries {
            if entry.valid {
                writeln!(out, "  {} {}", style("✓").green().bold(), entry.value)?;
            } else {
                writeln!(out, "  {} {}", style("✗").red().bold(), entry.value)?;
            }
            write_diagnostics(out, &entry.diagnostics)?;
        }

        let invalid = self.invalid_count();
        writeln!(out)?;
        writeln!(
            out,
            "  {} {} checked as {}, {} invalid",
            style("Summary:").bold(),
            self.entries.len(),
            style(self.kind).cyan(),
            if invalid == 0 {
                style(invalid).green().bold()
            } else {
                style(invalid).red().bold()
            }
        )
    }
}

impl PlainReport for CompareReport {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        let verdict = if self.equal {
            style("equal").green().bold()
        } else {
            style("not equal").yellow().bold()
        };
        writeln!(
            out,
            "  {} {} {} ({})",
            self.current,
            style("vs").dim(),
            self.new,
            style(self.kind).cyan()
        )?;
        writeln!(out, "  {} {}", style("Result:").bold(), verdict)?;
        write_diagnostics(out, &self.diagnostics)
    }
}

impl PlainReport for InspectReport {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(
            out,
            "  {} {} ({})",
            style("Value:").bold(),
            self.value,
            style(self.kind).cyan()
        )?;

        let Some(details) = &self.details else {
            return write_diagnostics(out, &self.diagnostics);
        };

        if let Some(family) = &details.family {
            writeln!(out, "  {} {}", style("Family:").bold(), family)?;
        }
        writeln!(out, "  {} {}", style("Canonical:").bold(), details.canonical)?;
        writeln!(out, "  {} {}", style("Octets:").bold(), style(&details.octets).dim())?;
        if let Some(bits) = details.prefix_len {
            writeln!(out, "  {} {}", style("Prefix Length:").bold(), bits)?;
        }
        if let Some(network) = &details.network {
            writeln!(out, "  {} {}", style("Network:").bold(), network)?;
        }
        if let Some(zone) = &details.zone {
            writeln!(out, "  {} {}", style("Zone:").bold(), zone)?;
        }
        if let Some(format) = &details.format {
            writeln!(out, "  {} {}", style("Format:").bold(), format)?;
        }
        Ok(())
    }
}

impl PlainReport for ContainsReport {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        let verdict = if self.diagnostics.has_error() {
            style("cannot be checked against").red().bold()
        } else if self.contains {
            style("contains").green().bold()
        } else {
            style("does not contain").yellow().bold()
        };
        writeln!(out, "  {} {} {}", self.prefix, verdict, self.address)?;
        write_diagnostics(out, &self.diagnostics)
    }
}

impl PlainReport for KindsReport {
    fn write_plain(&self, out: &mut dyn Write) -> io::Result<()> {
        for info in &self.kinds {
            writeln!(
                out,
                "  {:<14} {}",
                style(info.kind).cyan().bold(),
                style(info.format).dim()
            )?;
        }
        Ok(())
    }
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}
