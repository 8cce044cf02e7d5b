//! Inspect subcommand implementation.

use crate::cli::Context;
use crate::error::CliResult;
use crate::framework::StringValue;
use crate::output::InspectReport;
use crate::types::{self, KindId};
use clap::Parser;

/// Parse a value and show its structured form.
#[derive(Parser, Debug)]
pub struct InspectCommand {
    /// Kind to parse as (defaults to the configured kind)
    #[arg(short, long, value_enum)]
    pub kind: Option<KindId>,

    /// Value to inspect
    #[arg(value_name = "VALUE")]
    pub value: String,
}

impl InspectCommand {
    pub fn execute(&self, ctx: &Context) -> CliResult<bool> {
        let kind = ctx.kind_or_default(self.kind);
        let result = types::typed_value(kind, &StringValue::known(self.value.as_str()));
        let report = InspectReport::new(kind, self.value.as_str(), result);

        ctx.emit(&report)?;
        Ok(report.details.is_some())
    }
}
