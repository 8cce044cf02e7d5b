//! Kind descriptors.
//!
//! Each network string kind is a zero-sized marker implementing [`Kind`]:
//! which grammar to run, which address family is allowed, and the message
//! table its diagnostics are built from. The engine in [`super::value`] is
//! written once against this trait.

use crate::parse::{
    parse_addr, parse_mac, parse_prefix, Addr, AddrParseError, Family, MacAddr, MacParseError,
    Prefix, PrefixParseError,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which address families a kind accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyRule {
    Any,
    Only(Family),
}

/// Static configuration of one kind. All text here is part of the
/// observable diagnostic contract.
#[derive(Debug)]
pub struct KindSpec {
    pub id: KindId,
    /// Value type name shown in comparator diagnostics.
    pub value_type: &'static str,
    /// Attribute type name.
    pub type_name: &'static str,
    pub family: FamilyRule,
    /// What a valid string looks like, with RFC citation where one applies.
    pub format: &'static str,
    /// Body sentence used when a value parses but is the other family.
    pub wrong_family: Option<&'static str>,
    /// Summary for validation failures.
    pub invalid_summary: &'static str,
    /// Summary for a non-string wire value.
    pub type_validation_summary: &'static str,
    /// Summary for typed accessor failures.
    pub accessor_summary: &'static str,
    /// Noun phrase used in "... string value is null".
    pub subject: &'static str,
}

impl KindSpec {
    pub(crate) fn malformed_detail(&self, input: &str, err: &dyn fmt::Display) -> String {
        format!(
            "A string value was provided that is not valid {}.\n\n\
             Given Value: {}\n\
             Error: {}",
            self.format, input, err
        )
    }

    pub(crate) fn wrong_family_detail(&self, input: &str) -> String {
        format!(
            "{}\n\nGiven Value: {}\n",
            self.wrong_family.unwrap_or_default(),
            input
        )
    }

    pub(crate) fn null_detail(&self) -> String {
        format!("{} string value is null", self.subject)
    }

    pub(crate) fn unknown_detail(&self) -> String {
        format!("{} string value is unknown", self.subject)
    }
}

/// A network string kind.
pub trait Kind:
    Copy + Default + fmt::Debug + PartialEq + Eq + std::hash::Hash + Send + Sync + 'static
{
    /// Structured value produced by a successful parse.
    type Output: Clone + PartialEq + fmt::Debug + fmt::Display + Into<NetValue>;
    type Error: std::error::Error + Clone + PartialEq;

    const SPEC: KindSpec;

    fn parse(input: &str) -> Result<Self::Output, Self::Error>;

    /// Address family of a parsed value, if the kind has one.
    fn family(output: &Self::Output) -> Option<Family>;
}

macro_rules! address_kind {
    ($(#[$meta:meta])* $name:ident, $spec:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Kind for $name {
            type Output = Addr;
            type Error = AddrParseError;

            const SPEC: KindSpec = $spec;

            fn parse(input: &str) -> Result<Addr, AddrParseError> {
                parse_addr(input)
            }

            fn family(output: &Addr) -> Option<Family> {
                Some(output.family())
            }
        }
    };
}

macro_rules! prefix_kind {
    ($(#[$meta:meta])* $name:ident, $spec:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl Kind for $name {
            type Output = Prefix;
            type Error = PrefixParseError;

            const SPEC: KindSpec = $spec;

            fn parse(input: &str) -> Result<Prefix, PrefixParseError> {
                parse_prefix(input)
            }

            fn family(output: &Prefix) -> Option<Family> {
                Some(output.family())
            }
        }
    };
}

address_kind!(
    /// IPv4 or IPv6 address (RFC 791, RFC 4291).
    IpAddressKind,
    KindSpec {
        id: KindId::IpAddress,
        value_type: "IpAddress",
        type_name: "IpAddressType",
        family: FamilyRule::Any,
        format: "IPv4 or IPv6 string format (RFC 791, RFC 4291)",
        wrong_family: None,
        invalid_summary: "Invalid IP Address String Value",
        type_validation_summary: "IP Address Type Validation Error",
        accessor_summary: "IPAddress ValueIPAddress Error",
        subject: "IP address",
    }
);

address_kind!(
    /// IPv4 dotted-decimal address with no leading zeros.
    Ipv4AddressKind,
    KindSpec {
        id: KindId::Ipv4Address,
        value_type: "Ipv4Address",
        type_name: "Ipv4AddressType",
        family: FamilyRule::Only(Family::V4),
        format: "IPv4 string format",
        wrong_family: Some("An IPv6 string format was provided, string value must be IPv4 format."),
        invalid_summary: "Invalid IPv4 Address String Value",
        type_validation_summary: "IPv4 Address Type Validation Error",
        accessor_summary: "IPv4Address ValueIPv4Address Error",
        subject: "IPv4 address",
    }
);

address_kind!(
    /// IPv6 address, including IPv4-mapped and IPv4-compatible forms (RFC 4291).
    Ipv6AddressKind,
    KindSpec {
        id: KindId::Ipv6Address,
        value_type: "Ipv6Address",
        type_name: "Ipv6AddressType",
        family: FamilyRule::Only(Family::V6),
        format: "IPv6 string format (RFC 4291)",
        wrong_family: Some(
            "An IPv4 string format was provided, string value must be IPv6 string format \
             or IPv4-Mapped IPv6 string format (RFC 4291).",
        ),
        invalid_summary: "Invalid IPv6 Address String Value",
        type_validation_summary: "IPv6 Address Type Validation Error",
        accessor_summary: "IPv6Address ValueIPv6Address Error",
        subject: "IPv6 address",
    }
);

prefix_kind!(
    /// IPv4 or IPv6 CIDR prefix (RFC 4632, RFC 4291).
    IpPrefixKind,
    KindSpec {
        id: KindId::IpPrefix,
        value_type: "IpPrefix",
        type_name: "IpPrefixType",
        family: FamilyRule::Any,
        format: "IPv4 or IPv6 CIDR string format (RFC 4632, RFC 4291)",
        wrong_family: None,
        invalid_summary: "Invalid IP CIDR String Value",
        type_validation_summary: "IP Prefix Type Validation Error",
        accessor_summary: "IPPrefix ValueIPPrefix Error",
        subject: "IP CIDR",
    }
);

prefix_kind!(
    /// IPv4 CIDR prefix (RFC 4632).
    Ipv4PrefixKind,
    KindSpec {
        id: KindId::Ipv4Prefix,
        value_type: "Ipv4Prefix",
        type_name: "Ipv4PrefixType",
        family: FamilyRule::Only(Family::V4),
        format: "IPv4 CIDR string format (RFC 4632)",
        wrong_family: Some(
            "An IPv6 CIDR string format was provided, string value must be IPv4 CIDR string \
             format (RFC 4632).",
        ),
        invalid_summary: "Invalid IPv4 CIDR String Value",
        type_validation_summary: "IPv4 Prefix Type Validation Error",
        accessor_summary: "IPv4Prefix ValueIPv4Prefix Error",
        subject: "IPv4 CIDR",
    }
);

prefix_kind!(
    /// IPv6 CIDR prefix (RFC 4291).
    Ipv6PrefixKind,
    KindSpec {
        id: KindId::Ipv6Prefix,
        value_type: "Ipv6Prefix",
        type_name: "Ipv6PrefixType",
        family: FamilyRule::Only(Family::V6),
        format: "IPv6 CIDR string format (RFC 4291)",
        wrong_family: Some(
            "An IPv4 CIDR string format was provided, string value must be IPv6 CIDR string \
             format (RFC 4291).",
        ),
        invalid_summary: "Invalid IPv6 CIDR String Value",
        type_validation_summary: "IPv6 Prefix Type Validation Error",
        accessor_summary: "IPv6Prefix ValueIPv6Prefix Error",
        subject: "IPv6 CIDR",
    }
);

/// EUI-48, EUI-64 or 20-octet InfiniBand hardware address.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MacAddressKind;

impl Kind for MacAddressKind {
    type Output = MacAddr;
    type Error = MacParseError;

    const SPEC: KindSpec = KindSpec {
        id: KindId::MacAddress,
        value_type: "MacAddress",
        type_name: "MacAddressType",
        family: FamilyRule::Any,
        format: "MAC string format",
        wrong_family: None,
        invalid_summary: "Invalid MAC Address String Value",
        type_validation_summary: "MAC Address Type Validation Error",
        accessor_summary: "MACAddress ValueMACAddress Error",
        subject: "MAC address",
    };

    fn parse(input: &str) -> Result<MacAddr, MacParseError> {
        parse_mac(input)
    }

    fn family(_output: &MacAddr) -> Option<Family> {
        None
    }
}

/// Runtime identifier for a kind, for callers that choose one dynamically.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum KindId {
    /// IPv4 or IPv6 address
    #[default]
    IpAddress,
    /// IPv4 address
    Ipv4Address,
    /// IPv6 address
    Ipv6Address,
    /// IPv4 or IPv6 CIDR prefix
    IpPrefix,
    /// IPv4 CIDR prefix
    Ipv4Prefix,
    /// IPv6 CIDR prefix
    Ipv6Prefix,
    /// MAC address
    MacAddress,
}

impl KindId {
    pub const ALL: [KindId; 7] = [
        Self::IpAddress,
        Self::Ipv4Address,
        Self::Ipv6Address,
        Self::IpPrefix,
        Self::Ipv4Prefix,
        Self::Ipv6Prefix,
        Self::MacAddress,
    ];

    pub fn spec(self) -> &'static KindSpec {
        match self {
            Self::IpAddress => &IpAddressKind::SPEC,
            Self::Ipv4Address => &Ipv4AddressKind::SPEC,
            Self::Ipv6Address => &Ipv6AddressKind::SPEC,
            Self::IpPrefix => &IpPrefixKind::SPEC,
            Self::Ipv4Prefix => &Ipv4PrefixKind::SPEC,
            Self::Ipv6Prefix => &Ipv6PrefixKind::SPEC,
            Self::MacAddress => &MacAddressKind::SPEC,
        }
    }
}

impl fmt::Display for KindId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::IpAddress => "ip-address",
            Self::Ipv4Address => "ipv4-address",
            Self::Ipv6Address => "ipv6-address",
            Self::IpPrefix => "ip-prefix",
            Self::Ipv4Prefix => "ipv4-prefix",
            Self::Ipv6Prefix => "ipv6-prefix",
            Self::MacAddress => "mac-address",
        };
        f.write_str(name)
    }
}

/// A parsed value of any kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum NetValue {
    Address(Addr),
    Prefix(Prefix),
    Mac(MacAddr),
}

impl From<Addr> for NetValue {
    fn from(addr: Addr) -> Self {
        Self::Address(addr)
    }
}

impl From<Prefix> for NetValue {
    fn from(prefix: Prefix) -> Self {
        Self::Prefix(prefix)
    }
}

impl From<MacAddr> for NetValue {
    fn from(mac: MacAddr) -> Self {
        Self::Mac(mac)
    }
}

impl fmt::Display for NetValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Address(addr) => write!(f, "{}", addr),
            Self::Prefix(prefix) => write!(f, "{}", prefix),
            Self::Mac(mac) => write!(f, "{}", mac),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_table_is_consistent() {
        for id in KindId::ALL {
            let spec = id.spec();
            assert_eq!(spec.id, id);
            assert_eq!(spec.wrong_family.is_some(), spec.family != FamilyRule::Any);
        }
    }

    #[test]
    fn test_detail_templates() {
        let spec = &Ipv4PrefixKind::SPEC;
        assert_eq!(
            spec.wrong_family_detail("::/128"),
            "An IPv6 CIDR string format was provided, string value must be IPv4 CIDR string format (RFC 4632).\n\n\
             Given Value: ::/128\n"
        );
        assert_eq!(
            spec.malformed_detail("x", &"boom"),
            "A string value was provided that is not valid IPv4 CIDR string format (RFC 4632).\n\nGiven Value: x\nError: boom"
        );
        assert_eq!(spec.null_detail(), "IPv4 CIDR string value is null");
        assert_eq!(
            MacAddressKind::SPEC.unknown_detail(),
            "MAC address string value is unknown"
        );
    }

    #[test]
    fn test_kind_id_display_matches_value_enum() {
        use clap::ValueEnum;
        for id in KindId::ALL {
            let name = id.to_string();
            assert_eq!(KindId::from_str(&name, false).unwrap(), id);
        }
    }
}
