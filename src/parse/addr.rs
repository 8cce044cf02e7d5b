//! IPv4 / IPv6 address grammar.
//!
//! IPv4 is strict dotted decimal: four fields, 0-255, no leading zeros.
//! IPv6 follows RFC 4291 section 2.2: hex groups, a single `::` elision, an
//! optional embedded dotted-quad in the last 32 bits and an optional `%zone`.

use super::Quoted;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Address family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    V4,
    V6,
}

impl Family {
    /// Width of an address of this family in bits.
    pub const fn bits(self) -> u8 {
        match self {
            Self::V4 => 32,
            Self::V6 => 128,
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4 => write!(f, "IPv4"),
            Self::V6 => write!(f, "IPv6"),
        }
    }
}

/// A parsed IP address.
///
/// IPv4-mapped and IPv4-compatible literals such as `::ffff:1.2.3.4` are
/// [`Addr::V6`]: the family follows the overall literal, not the embedded
/// dotted-quad.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Addr {
    V4([u8; 4]),
    V6 {
        octets: [u8; 16],
        zone: Option<String>,
    },
}

impl Addr {
    pub fn family(&self) -> Family {
        match self {
            Self::V4(_) => Family::V4,
            Self::V6 { .. } => Family::V6,
        }
    }

    pub fn is_ipv4(&self) -> bool {
        matches!(self, Self::V4(_))
    }

    pub fn is_ipv6(&self) -> bool {
        matches!(self, Self::V6 { .. })
    }

    /// Check for the `::ffff:0:0/96` IPv4-mapped range.
    pub fn is_ipv4_mapped(&self) -> bool {
        match self {
            Self::V4(_) => false,
            Self::V6 { octets, .. } => {
                octets[..10].iter().all(|&b| b == 0) && octets[10] == 0xff && octets[11] == 0xff
            }
        }
    }

    /// Raw network-order bytes (4 or 16 of them).
    pub fn octets(&self) -> &[u8] {
        match self {
            Self::V4(octets) => octets,
            Self::V6 { octets, .. } => octets,
        }
    }

    /// IPv6 scope zone, if one was given.
    pub fn zone(&self) -> Option<&str> {
        match self {
            Self::V4(_) => None,
            Self::V6 { zone, .. } => zone.as_deref(),
        }
    }

    /// Convert to the standard library representation. The zone is dropped.
    pub fn to_ip_addr(&self) -> IpAddr {
        match self {
            Self::V4(octets) => IpAddr::V4(Ipv4Addr::from(*octets)),
            Self::V6 { octets, .. } => IpAddr::V6(Ipv6Addr::from(*octets)),
        }
    }
}

impl From<IpAddr> for Addr {
    fn from(ip: IpAddr) -> Self {
        match ip {
            IpAddr::V4(v4) => Self::V4(v4.octets()),
            IpAddr::V6(v6) => Self::V6 {
                octets: v6.octets(),
                zone: None,
            },
        }
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(octets) => write!(f, "{}", Ipv4Addr::from(*octets)),
            Self::V6 { octets, zone } => {
                write!(f, "{}", Ipv6Addr::from(*octets))?;
                if let Some(zone) = zone {
                    write!(f, "%{}", zone)?;
                }
                Ok(())
            }
        }
    }
}

impl FromStr for Addr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_addr(s)
    }
}

impl Serialize for Addr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Addr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_addr(&s).map_err(serde::de::Error::custom)
    }
}

/// Reason an address literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AddrErrorKind {
    #[error("unable to parse IP")]
    Unrecognized,
    #[error("missing IPv6 address")]
    MissingIpv6,
    #[error("IPv4 field has octet with leading zero")]
    LeadingZero,
    #[error("IPv4 field has value >255")]
    OctetOverflow,
    #[error("IPv4 field must have at least one digit")]
    EmptyOctet,
    #[error("IPv4 address too long")]
    Ipv4TooLong,
    #[error("IPv4 address too short")]
    Ipv4TooShort,
    #[error("unexpected character")]
    UnexpectedChar,
    #[error("zone must be a non-empty string")]
    EmptyZone,
    #[error("each group must have 4 or less digits")]
    GroupTooLong,
    #[error("each colon-separated field must have at least one digit")]
    EmptyGroup,
    #[error("embedded IPv4 address must replace the final 2 fields of the address")]
    MisplacedIpv4,
    #[error("too many hex fields to fit an embedded IPv4 at the end of the address")]
    NoRoomForIpv4,
    #[error("unexpected character, want colon")]
    WantColon,
    #[error("colon must be followed by more characters")]
    TrailingColon,
    #[error("multiple :: in address")]
    MultipleEllipsis,
    #[error("trailing garbage after address")]
    TrailingGarbage,
    #[error("address string too short")]
    Ipv6TooShort,
    #[error("the :: must expand to at least one field of zeros")]
    EmptyEllipsis,
}

/// Address parse failure carrying the full input and, where useful, the
/// unparsed remainder at which parsing stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddrParseError {
    input: String,
    kind: AddrErrorKind,
    at: Option<String>,
}

impl AddrParseError {
    fn new(input: &str, kind: AddrErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
            at: None,
        }
    }

    fn at(input: &str, kind: AddrErrorKind, rest: &str) -> Self {
        Self {
            input: input.to_string(),
            kind,
            at: Some(rest.to_string()),
        }
    }

    pub fn kind(&self) -> AddrErrorKind {
        self.kind
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for AddrParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ParseAddr({}): {}", Quoted(&self.input), self.kind)?;
        if let Some(at) = &self.at {
            write!(f, " (at {})", Quoted(at))?;
        }
        Ok(())
    }
}

impl std::error::Error for AddrParseError {}

/// Parse an IPv4 or IPv6 address literal.
pub fn parse_addr(input: &str) -> Result<Addr, AddrParseError> {
    for b in input.bytes() {
        match b {
            b'.' => return parse_ipv4_fields(input, 0, input.len()).map(Addr::V4),
            b':' => return parse_ipv6(input),
            b'%' => return Err(AddrParseError::new(input, AddrErrorKind::MissingIpv6)),
            _ => {}
        }
    }
    Err(AddrParseError::new(input, AddrErrorKind::Unrecognized))
}

/// Parse `input[start..end]` as a dotted quad. Errors always quote the whole
/// `input` so an embedded IPv4 tail reports the IPv6 literal it came from.
fn parse_ipv4_fields(input: &str, start: usize, end: usize) -> Result<[u8; 4], AddrParseError> {
    let s = &input[start..end];
    let bytes = s.as_bytes();
    let mut fields = [0u8; 4];
    let mut val: u16 = 0;
    let mut pos = 0;
    let mut digits = 0;

    for (i, &c) in bytes.iter().enumerate() {
        match c {
            b'0'..=b'9' => {
                if digits == 1 && val == 0 {
                    return Err(AddrParseError::new(input, AddrErrorKind::LeadingZero));
                }
                val = val * 10 + u16::from(c - b'0');
                digits += 1;
                if val > 255 {
                    return Err(AddrParseError::new(input, AddrErrorKind::OctetOverflow));
                }
            }
            b'.' => {
                if i == 0 || i == bytes.len() - 1 || bytes[i - 1] == b'.' {
                    return Err(AddrParseError::at(input, AddrErrorKind::EmptyOctet, &s[i..]));
                }
                if pos == 3 {
                    return Err(AddrParseError::new(input, AddrErrorKind::Ipv4TooLong));
                }
                fields[pos] = val as u8;
                pos += 1;
                val = 0;
                digits = 0;
            }
            _ => {
                return Err(AddrParseError::at(input, AddrErrorKind::UnexpectedChar, &s[i..]));
            }
        }
    }

    if pos < 3 {
        return Err(AddrParseError::new(input, AddrErrorKind::Ipv4TooShort));
    }
    fields[3] = val as u8;
    Ok(fields)
}

fn hex_value(c: u8) -> u16 {
    match c {
        b'0'..=b'9' => u16::from(c - b'0'),
        b'a'..=b'f' => u16::from(c - b'a' + 10),
        b'A'..=b'F' => u16::from(c - b'A' + 10),
        _ => 0,
    }
}

fn parse_ipv6(input: &str) -> Result<Addr, AddrParseError> {
    let (mut s, zone) = match input.split_once('%') {
        Some((_, "")) => return Err(AddrParseError::new(input, AddrErrorKind::EmptyZone)),
        Some((addr, zone)) => (addr, Some(zone.to_string())),
        None => (input, None),
    };

    let mut ip = [0u8; 16];
    let mut ellipsis: Option<usize> = None;

    if let Some(rest) = s.strip_prefix("::") {
        ellipsis = Some(0);
        s = rest;
        if s.is_empty() {
            return Ok(Addr::V6 { octets: ip, zone });
        }
    }

    let mut i = 0;
    while i < 16 {
        let digits = s.bytes().take_while(u8::is_ascii_hexdigit).count();
        if digits > 4 {
            return Err(AddrParseError::at(input, AddrErrorKind::GroupTooLong, s));
        }
        if digits == 0 {
            return Err(AddrParseError::at(input, AddrErrorKind::EmptyGroup, s));
        }

        // Dotted tail: the rest of the literal is an embedded IPv4 address.
        if s.as_bytes().get(digits) == Some(&b'.') {
            if ellipsis.is_none() && i != 12 {
                return Err(AddrParseError::at(input, AddrErrorKind::MisplacedIpv4, s));
            }
            if i + 4 > 16 {
                return Err(AddrParseError::at(input, AddrErrorKind::NoRoomForIpv4, s));
            }
            let end = input.len() - zone.as_ref().map_or(0, |z| z.len() + 1);
            let fields = parse_ipv4_fields(input, end - s.len(), end)?;
            ip[i..i + 4].copy_from_slice(&fields);
            s = "";
            i += 4;
            break;
        }

        let group = s.bytes().take(digits).fold(0u16, |acc, c| (acc << 4) | hex_value(c));
        ip[i..i + 2].copy_from_slice(&group.to_be_bytes());
        i += 2;

        s = &s[digits..];
        if s.is_empty() {
            break;
        }

        s = match s.strip_prefix(':') {
            None => return Err(AddrParseError::at(input, AddrErrorKind::WantColon, s)),
            Some("") => return Err(AddrParseError::at(input, AddrErrorKind::TrailingColon, s)),
            Some(rest) => rest,
        };

        if let Some(rest) = s.strip_prefix(':') {
            if ellipsis.is_some() {
                return Err(AddrParseError::at(input, AddrErrorKind::MultipleEllipsis, s));
            }
            ellipsis = Some(i);
            s = rest;
            if s.is_empty() {
                break;
            }
        }
    }

    if !s.is_empty() {
        return Err(AddrParseError::at(input, AddrErrorKind::TrailingGarbage, s));
    }

    if i < 16 {
        let Some(ellipsis) = ellipsis else {
            return Err(AddrParseError::new(input, AddrErrorKind::Ipv6TooShort));
        };
        let gap = 16 - i;
        ip.copy_within(ellipsis..i, ellipsis + gap);
        ip[ellipsis..ellipsis + gap].fill(0);
    } else if ellipsis.is_some() {
        return Err(AddrParseError::new(input, AddrErrorKind::EmptyEllipsis));
    }

    Ok(Addr::V6 { octets: ip, zone })
}
