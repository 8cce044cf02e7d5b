//! # nettypes - Validated Network String Types
//!
//! String-backed value types for IPv4/IPv6 addresses, CIDR prefixes and MAC
//! addresses, built to plug into a plugin framework's attribute system.
//! Each type validates its text on demand, treats differently spelled
//! strings of the same value as semantically equal, and parses into a
//! structured value through a typed accessor.
//!
//! ## Example Usage
//!
//! ```rust
//! use nettypes::framework::{AttributePath, SemanticEquals, ValidateAttribute};
//! use nettypes::types::{Ipv4Prefix, Ipv6Address};
//!
//! let current = Ipv6Address::new("2001:DB8::8:800:200C:417A");
//! let (equal, diags) = current.string_semantic_equals(&Ipv6Address::new("2001:db8:0:0:8:800:200c:417a"));
//! assert!(equal && diags.is_empty());
//!
//! let diags = Ipv4Prefix::new("::/128").validate_attribute(&AttributePath::root("cidr"));
//! assert!(diags.has_error());
//! ```
//!
//! ## Architecture
//!
//! - [`parse`] - Address, prefix and MAC grammars with stable error text
//! - [`framework`] - The host's value, diagnostic and extension-point shapes
//! - [`types`] - The kind table and the generic value/type engine
//! - [`config`] - Settings for the `nettypes` binary
//! - [`cli`] - Subcommand definitions and handlers
//! - [`output`] - Plain, JSON and CSV report rendering
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod framework;
pub mod output;
pub mod parse;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConfigError, WireError};
pub use framework::{Diagnostic, Diagnostics, StringValue};
pub use parse::{Addr, MacAddr, Prefix};
pub use types::{
    IpAddress, IpPrefix, Ipv4Address, Ipv4Prefix, Ipv6Address, Ipv6Prefix, KindId, MacAddress,
    NetString, NetStringType,
};
