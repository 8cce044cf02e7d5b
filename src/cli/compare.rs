//! Compare subcommand implementation.

use crate::cli::Context;
use crate::error::CliResult;
use crate::framework::StringValue;
use crate::output::CompareReport;
use crate::types::{self, KindId};
use clap::Parser;

/// Check whether two values denote the same address, prefix or MAC.
#[derive(Parser, Debug)]
pub struct CompareCommand {
    /// Kind to compare as (defaults to the configured kind)
    #[arg(short, long, value_enum)]
    pub kind: Option<KindId>,

    /// The prior value
    #[arg(value_name = "CURRENT")]
    pub current: String,

    /// The newly computed value
    #[arg(value_name = "NEW")]
    pub new: String,
}

impl CompareCommand {
    /// Execute the compare command. Unequal values are a normal result;
    /// only comparator errors fail.
    pub fn execute(&self, ctx: &Context) -> CliResult<bool> {
        let report = self.report(ctx.kind_or_default(self.kind));
        ctx.emit(&report)?;
        Ok(!report.diagnostics.has_error())
    }

    fn report(&self, kind: KindId) -> CompareReport {
        let (equal, diagnostics) = types::semantic_equals(
            kind,
            &StringValue::known(self.current.as_str()),
            &StringValue::known(self.new.as_str()),
        );
        CompareReport {
            kind,
            current: self.current.clone(),
            new: self.new.clone(),
            equal,
            diagnostics,
        }
    }
}
