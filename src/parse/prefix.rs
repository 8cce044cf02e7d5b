//! CIDR prefix grammar: `<address>/<decimal length>`.
//!
//! The address portion is kept exactly as written. `10.1.2.3/8` stays
//! `10.1.2.3/8`; host bits are never cleared, so two prefixes are equal only
//! when both address and length match.

use super::addr::{parse_addr, Addr, AddrParseError, Family};
use super::Quoted;
use ipnetwork::{IpNetwork, IpNetworkError};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An address paired with a prefix length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix {
    addr: Addr,
    bits: u8,
}

impl Prefix {
    /// Build a prefix, returning None if `bits` exceeds the family width or
    /// the address carries an IPv6 zone.
    pub fn new(addr: Addr, bits: u8) -> Option<Self> {
        if bits > addr.family().bits() || addr.zone().is_some() {
            return None;
        }
        Some(Self { addr, bits })
    }

    pub fn addr(&self) -> &Addr {
        &self.addr
    }

    pub fn bits(&self) -> u8 {
        self.bits
    }

    pub fn family(&self) -> Family {
        self.addr.family()
    }

    /// True for a /32 (IPv4) or /128 (IPv6).
    pub fn is_single_ip(&self) -> bool {
        self.bits == self.family().bits()
    }

    /// Convert to an [`IpNetwork`] with the address as written.
    pub fn to_network(&self) -> Result<IpNetwork, IpNetworkError> {
        IpNetwork::new(self.addr.to_ip_addr(), self.bits)
    }

    /// The same prefix with host bits cleared.
    pub fn masked(&self) -> Result<Self, IpNetworkError> {
        let network = self.to_network()?;
        Ok(Self {
            addr: Addr::from(network.network()),
            bits: self.bits,
        })
    }

    /// Membership test. Zoned addresses and addresses of the other family are
    /// never contained.
    pub fn contains(&self, addr: &Addr) -> bool {
        if addr.zone().is_some() || addr.family() != self.family() {
            return false;
        }
        self.to_network()
            .map_or(false, |network| network.contains(addr.to_ip_addr()))
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.addr, self.bits)
    }
}

impl FromStr for Prefix {
    type Err = PrefixParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_prefix(s)
    }
}

impl Serialize for Prefix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Prefix {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_prefix(&s).map_err(serde::de::Error::custom)
    }
}

/// Reason a prefix literal was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PrefixErrorKind {
    #[error("no '/'")]
    MissingSlash,
    #[error(transparent)]
    Addr(#[from] AddrParseError),
    #[error("IPv6 zones cannot be present in a prefix")]
    Zoned,
    #[error("bad bits after slash: {}", Quoted(.0))]
    BadBits(String),
    #[error("prefix length out of range")]
    OutOfRange,
}

/// Prefix parse failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ParsePrefix({}): {kind}", Quoted(.input))]
pub struct PrefixParseError {
    input: String,
    kind: PrefixErrorKind,
}

impl PrefixParseError {
    fn new(input: &str, kind: impl Into<PrefixErrorKind>) -> Self {
        Self {
            input: input.to_string(),
            kind: kind.into(),
        }
    }

    pub fn kind(&self) -> &PrefixErrorKind {
        &self.kind
    }
}

/// Parse a CIDR prefix. The length is split off at the last `/`.
pub fn parse_prefix(input: &str) -> Result<Prefix, PrefixParseError> {
    let Some((addr_part, bits_str)) = input.rsplit_once('/') else {
        return Err(PrefixParseError::new(input, PrefixErrorKind::MissingSlash));
    };

    let addr = parse_addr(addr_part).map_err(|e| PrefixParseError::new(input, e))?;
    if addr.zone().is_some() {
        return Err(PrefixParseError::new(input, PrefixErrorKind::Zoned));
    }

    // Plain base-10 only: no sign and no leading zero.
    let bad_bits = || PrefixParseError::new(input, PrefixErrorKind::BadBits(bits_str.to_string()));
    if bits_str.len() > 1 && !matches!(bits_str.as_bytes()[0], b'1'..=b'9') {
        return Err(bad_bits());
    }
    let bits: i64 = bits_str.parse().map_err(|_| bad_bits())?;

    if !(0..=i64::from(addr.family().bits())).contains(&bits) {
        return Err(PrefixParseError::new(input, PrefixErrorKind::OutOfRange));
    }

    Ok(Prefix {
        addr,
        bits: bits as u8,
    })
}
