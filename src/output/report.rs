//! Result records produced by CLI commands.

use crate::framework::Diagnostics;
use crate::parse::{Addr, Prefix};
use crate::types::{KindId, NetValue};
use serde::Serialize;

/// Outcome of validating one value.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationEntry {
    pub value: String,
    pub valid: bool,
    pub diagnostics: Diagnostics,
}

impl ValidationEntry {
    pub fn new(value: impl Into<String>, diagnostics: Diagnostics) -> Self {
        Self {
            value: value.into(),
            valid: !diagnostics.has_error(),
            diagnostics,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub kind: KindId,
    pub entries: Vec<ValidationEntry>,
}

impl ValidationReport {
    pub fn new(kind: KindId) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, entry: ValidationEntry) {
        self.entries.push(entry);
    }

    pub fn all_valid(&self) -> bool {
        self.entries.iter().all(|e| e.valid)
    }

    pub fn invalid_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.valid).count()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub kind: KindId,
    pub current: String,
    pub new: String,
    pub equal: bool,
    pub diagnostics: Diagnostics,
}

/// Structured breakdown of a parsed value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    pub canonical: String,
    /// Octets as lowercase hex, no separators.
    pub octets: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix_len: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl ValueDetails {
    fn address(addr: &Addr) -> Self {
        Self {
            family: Some(addr.family().to_string()),
            canonical: addr.to_string(),
            octets: hex(addr.octets()),
            prefix_len: None,
            network: None,
            zone: addr.zone().map(str::to_string),
            format: addr.is_ipv4_mapped().then(|| "IPv4-mapped".to_string()),
        }
    }

    fn prefix(prefix: &Prefix) -> Self {
        Self {
            prefix_len: Some(prefix.bits()),
            network: prefix.masked().ok().map(|p| p.to_string()),
            canonical: prefix.to_string(),
            ..Self::address(prefix.addr())
        }
    }
}

impl From<&NetValue> for ValueDetails {
    fn from(value: &NetValue) -> Self {
        match value {
            NetValue::Address(addr) => Self::address(addr),
            NetValue::Prefix(prefix) => Self::prefix(prefix),
            NetValue::Mac(mac) => Self {
                family: None,
                canonical: mac.to_string(),
                octets: hex(mac.octets()),
                prefix_len: None,
                network: None,
                zone: None,
                format: Some(mac.format().to_string()),
            },
        }
    }
}

fn hex(octets: &[u8]) -> String {
    octets.iter().map(|b| format!("{:02x}", b)).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub kind: KindId,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<ValueDetails>,
    pub diagnostics: Diagnostics,
}

impl InspectReport {
    pub fn new(kind: KindId, value: impl Into<String>, result: Result<NetValue, Diagnostics>) -> Self {
        let (details, diagnostics) = match result {
            Ok(parsed) => (Some(ValueDetails::from(&parsed)), Diagnostics::new()),
            Err(diagnostics) => (None, diagnostics),
        };
        Self {
            kind,
            value: value.into(),
            details,
            diagnostics,
        }
    }
}

/// Membership check. `contains` is false whenever either input failed to
/// parse; the failures are in `diagnostics`.
#[derive(Debug, Clone, Serialize)]
pub struct ContainsReport {
    pub prefix: String,
    pub address: String,
    pub contains: bool,
    pub diagnostics: Diagnostics,
}

impl ContainsReport {
    pub fn new(
        prefix: impl Into<String>,
        address: impl Into<String>,
        result: Result<bool, Diagnostics>,
    ) -> Self {
        let (contains, diagnostics) = match result {
            Ok(contains) => (contains, Diagnostics::new()),
            Err(diagnostics) => (false, diagnostics),
        };
        Self {
            prefix: prefix.into(),
            address: address.into(),
            contains,
            diagnostics,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct KindInfo {
    pub kind: KindId,
    pub value_type: &'static str,
    pub format: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct KindsReport {
    pub kinds: Vec<KindInfo>,
}

impl KindsReport {
    /// Every supported kind, in declaration order.
    pub fn all() -> Self {
        let kinds = KindId::ALL
            .into_iter()
            .map(|kind| {
                let spec = kind.spec();
                KindInfo {
                    kind,
                    value_type: spec.value_type,
                    format: spec.format,
                }
            })
            .collect();
        Self { kinds }
    }
}
