//! Hardware address grammar.
//!
//! Accepted forms, hex digits in either case:
//! - `00:00:5e:00:53:01`
//! - `00-00-5e-00-53-01`
//! - `0000.5e00.5301`
//!
//! for IEEE 802 MAC-48/EUI-48 (6 octets), EUI-64 (8 octets) and IP over
//! InfiniBand link-layer addresses (20 octets).

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Octet counts a hardware address may have.
const VALID_LENGTHS: [usize; 3] = [6, 8, 20];

/// Which hardware address format a [`MacAddr`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MacFormat {
    Eui48,
    Eui64,
    Infiniband,
}

impl fmt::Display for MacFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Eui48 => write!(f, "EUI-48"),
            Self::Eui64 => write!(f, "EUI-64"),
            Self::Infiniband => write!(f, "InfiniBand"),
        }
    }
}

/// A decoded hardware address of 6, 8 or 20 octets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MacAddr(Vec<u8>);

impl MacAddr {
    /// Wrap raw octets, returning None for an unsupported length.
    pub fn from_octets(octets: impl Into<Vec<u8>>) -> Option<Self> {
        let octets = octets.into();
        VALID_LENGTHS.contains(&octets.len()).then_some(Self(octets))
    }

    pub fn octets(&self) -> &[u8] {
        &self.0
    }

    pub fn format(&self) -> MacFormat {
        match self.0.len() {
            6 => MacFormat::Eui48,
            8 => MacFormat::Eui64,
            _ => MacFormat::Infiniband,
        }
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{:02x}", octet)?;
        }
        Ok(())
    }
}

impl FromStr for MacAddr {
    type Err = MacParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_mac(s)
    }
}

impl Serialize for MacAddr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MacAddr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        parse_mac(&s).map_err(serde::de::Error::custom)
    }
}

/// Hardware address parse failure. The input is omitted from the message
/// when it is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacParseError {
    input: String,
}

impl fmt::Display for MacParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.input.is_empty() {
            write!(f, "address {}: ", self.input)?;
        }
        f.write_str("invalid MAC address")
    }
}

impl std::error::Error for MacParseError {}

fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode two hex digits at the start of `s`. If `s` continues past them the
/// next byte must be `sep`.
fn hex_pair(s: &[u8], sep: Option<u8>) -> Option<u8> {
    if s.len() > 2 && Some(s[2]) != sep {
        return None;
    }
    let hi = hex_digit(*s.first()?)?;
    let lo = hex_digit(*s.get(1)?)?;
    Some((hi << 4) | lo)
}

/// Parse a hardware address.
pub fn parse_mac(input: &str) -> Result<MacAddr, MacParseError> {
    let invalid = || MacParseError {
        input: input.to_string(),
    };
    let s = input.as_bytes();
    if s.len() < 14 {
        return Err(invalid());
    }

    let octets = if s[2] == b':' || s[2] == b'-' {
        if (s.len() + 1) % 3 != 0 {
            return Err(invalid());
        }
        let n = (s.len() + 1) / 3;
        if !VALID_LENGTHS.contains(&n) {
            return Err(invalid());
        }
        (0..n)
            .map(|i| hex_pair(&s[i * 3..], Some(s[2])))
            .collect::<Option<Vec<u8>>>()
    } else if s[4] == b'.' {
        if (s.len() + 1) % 5 != 0 {
            return Err(invalid());
        }
        let n = 2 * (s.len() + 1) / 5;
        if !VALID_LENGTHS.contains(&n) {
            return Err(invalid());
        }
        (0..n / 2)
            .flat_map(|group| {
                let x = group * 5;
                [hex_pair(&s[x..x + 2], None), hex_pair(&s[x + 2..], Some(b'.'))]
            })
            .collect::<Option<Vec<u8>>>()
    } else {
        None
    };

    octets.map(MacAddr).ok_or_else(invalid)
}
