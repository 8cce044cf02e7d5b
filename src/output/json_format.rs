//! JSON output formatting.

use serde::Serialize;
use std::io::{self, Write};

/// Write a report as pretty-printed JSON followed by a newline.
pub fn write_json<R: Serialize, W: Write>(report: &R, mut out: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::{AttributePath, Diagnostic, Diagnostics};
    use crate::output::{ValidationEntry, ValidationReport};
    use crate::types::KindId;

    #[test]
    fn test_validation_report_json() {
        let mut report = ValidationReport::new(KindId::Ipv4Prefix);
        report.push(ValidationEntry::new(
            "::/128",
            Diagnostics::from(Diagnostic::attribute_error(
                AttributePath::root("value").index(0),
                "Invalid IPv4 CIDR String Value",
                "detail",
            )),
        ));

        let mut buf = Vec::new();
        write_json(&report, &mut buf).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();

        assert_eq!(json["kind"], "ipv4-prefix");
        assert_eq!(json["entries"][0]["valid"], false);
        assert_eq!(json["entries"][0]["diagnostics"][0]["path"], "value[0]");
        assert_eq!(
            json["entries"][0]["diagnostics"][0]["summary"],
            "Invalid IPv4 CIDR String Value"
        );
    }
}
