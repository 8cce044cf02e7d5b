//! Validate subcommand implementation.
//!
//! Handles `nettypes validate <value>...`, running attribute validation on
//! each value.

use crate::cli::Context;
use crate::error::CliResult;
use crate::framework::{AttributePath, StringValue};
use crate::output::{ValidationEntry, ValidationReport};
use crate::types::{self, KindId};
use clap::Parser;
use tracing::debug;

/// Validate one or more values of a kind.
#[derive(Parser, Debug)]
pub struct ValidateCommand {
    /// Kind to validate as (defaults to the configured kind)
    #[arg(short, long, value_enum)]
    pub kind: Option<KindId>,

    /// Values to validate
    ///
    /// Examples:
    ///   192.0.2.1            IPv4 address
    ///   2001:db8::/32        IPv6 prefix
    ///   00-00-5e-00-53-01    MAC address
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
}

impl ValidateCommand {
    /// Execute the validate command. Fails when any value is invalid.
    pub fn execute(&self, ctx: &Context) -> CliResult<bool> {
        let report = self.report(ctx.kind_or_default(self.kind));
        debug!(
            kind = %report.kind,
            checked = report.entries.len(),
            invalid = report.invalid_count(),
            "validation finished"
        );

        ctx.emit(&report)?;
        Ok(report.all_valid())
    }

    fn report(&self, kind: KindId) -> ValidationReport {
        let mut report = ValidationReport::new(kind);
        for (index, value) in self.values.iter().enumerate() {
            let path = AttributePath::root("value").index(index);
            let diagnostics = types::validate(kind, &StringValue::known(value.as_str()), &path);
            report.push(ValidationEntry::new(value.as_str(), diagnostics));
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(kind: KindId, values: &[&str]) -> ValidateCommand {
        ValidateCommand {
            kind: Some(kind),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_report() {
        let report = command(KindId::Ipv6Address, &["::1", "10.0.0.1", "::FFFF:10.0.0.1"])
            .report(KindId::Ipv6Address);

        let valid: Vec<bool> = report.entries.iter().map(|e| e.valid).collect();
        assert_eq!(valid, vec![true, false, true]);

        let diag = report.entries[1].diagnostics.iter().next().unwrap();
        assert_eq!(diag.path.as_ref().map(ToString::to_string).as_deref(), Some("value[1]"));
    }

    #[test]
    fn test_mac_delimiters() {
        let report = command(KindId::MacAddress, &["00:00:5e:00:53:01", "0000.5e00.5301", "00:00:5e"])
            .report(KindId::MacAddress);
        assert_eq!(report.invalid_count(), 1);
    }
}
