//! Contains subcommand implementation.

use crate::cli::Context;
use crate::error::CliResult;
use crate::framework::Diagnostics;
use crate::output::ContainsReport;
use crate::types::{IpAddress, IpPrefix};
use clap::Parser;

/// Test whether a prefix contains an address.
///
/// Addresses of the other family, and zoned addresses, are never contained.
#[derive(Parser, Debug)]
pub struct ContainsCommand {
    /// IPv4 or IPv6 CIDR prefix
    #[arg(value_name = "PREFIX")]
    pub prefix: String,

    /// IPv4 or IPv6 address
    #[arg(value_name = "ADDRESS")]
    pub address: String,
}

impl ContainsCommand {
    /// Execute the contains command. Succeeds only when both inputs parse
    /// and the address is inside the prefix.
    pub fn execute(&self, ctx: &Context) -> CliResult<bool> {
        let report = self.report();
        ctx.emit(&report)?;
        Ok(report.contains)
    }

    fn report(&self) -> ContainsReport {
        let prefix = IpPrefix::new(self.prefix.as_str()).typed_value();
        let address = IpAddress::new(self.address.as_str()).typed_value();

        let result = match (prefix, address) {
            (Ok(prefix), Ok(address)) => Ok(prefix.contains(&address)),
            (prefix, address) => {
                let mut diags = Diagnostics::new();
                if let Err(d) = prefix {
                    diags.append(d);
                }
                if let Err(d) = address {
                    diags.append(d);
                }
                tracing::debug!(errors = diags.len(), "contains inputs rejected");
                Err(diags)
            }
        };

        ContainsReport::new(self.prefix.as_str(), self.address.as_str(), result)
    }
}
