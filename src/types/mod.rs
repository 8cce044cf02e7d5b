//! Network string types.
//!
//! Seven kinds share one engine: [`NetString<K>`] for values and
//! [`NetStringType<K>`] for attribute types, parameterized by a [`Kind`]
//! marker that supplies the grammar, the family rule and the message table.
//!
//! Callers that only know the kind at runtime go through [`KindId`] and the
//! functions in this module.

mod kind;
mod string_type;
mod value;

pub use kind::{
    FamilyRule, IpAddressKind, IpPrefixKind, Ipv4AddressKind, Ipv4PrefixKind, Ipv6AddressKind,
    Ipv6PrefixKind, Kind, KindId, KindSpec, MacAddressKind, NetValue,
};
pub use string_type::NetStringType;
pub use value::NetString;

use crate::framework::{
    AttributePath, Diagnostics, SemanticEquals, StringValue, ValidateAttribute,
};

pub type IpAddress = NetString<IpAddressKind>;
pub type Ipv4Address = NetString<Ipv4AddressKind>;
pub type Ipv6Address = NetString<Ipv6AddressKind>;
pub type IpPrefix = NetString<IpPrefixKind>;
pub type Ipv4Prefix = NetString<Ipv4PrefixKind>;
pub type Ipv6Prefix = NetString<Ipv6PrefixKind>;
pub type MacAddress = NetString<MacAddressKind>;

pub type IpAddressType = NetStringType<IpAddressKind>;
pub type Ipv4AddressType = NetStringType<Ipv4AddressKind>;
pub type Ipv6AddressType = NetStringType<Ipv6AddressKind>;
pub type IpPrefixType = NetStringType<IpPrefixKind>;
pub type Ipv4PrefixType = NetStringType<Ipv4PrefixKind>;
pub type Ipv6PrefixType = NetStringType<Ipv6PrefixKind>;
pub type MacAddressType = NetStringType<MacAddressKind>;

/// Expand `$body` once with `$k` bound to the marker type for `$id`.
macro_rules! with_kind {
    ($id:expr, $k:ident => $body:expr) => {
        match $id {
            KindId::IpAddress => {
                type $k = IpAddressKind;
                $body
            }
            KindId::Ipv4Address => {
                type $k = Ipv4AddressKind;
                $body
            }
            KindId::Ipv6Address => {
                type $k = Ipv6AddressKind;
                $body
            }
            KindId::IpPrefix => {
                type $k = IpPrefixKind;
                $body
            }
            KindId::Ipv4Prefix => {
                type $k = Ipv4PrefixKind;
                $body
            }
            KindId::Ipv6Prefix => {
                type $k = Ipv6PrefixKind;
                $body
            }
            KindId::MacAddress => {
                type $k = MacAddressKind;
                $body
            }
        }
    };
}

/// Attribute validation for a kind chosen at runtime.
pub fn validate(kind: KindId, value: &StringValue, path: &AttributePath) -> Diagnostics {
    with_kind!(kind, K => NetString::<K>::from_string_value(value.clone()).validate_attribute(path))
}

/// Semantic equality for a kind chosen at runtime.
pub fn semantic_equals(kind: KindId, current: &StringValue, new: &StringValue) -> (bool, Diagnostics) {
    with_kind!(kind, K => {
        let current = NetString::<K>::from_string_value(current.clone());
        let new = NetString::<K>::from_string_value(new.clone());
        current.string_semantic_equals(&new)
    })
}

/// Typed accessor for a kind chosen at runtime.
pub fn typed_value(kind: KindId, value: &StringValue) -> Result<NetValue, Diagnostics> {
    with_kind!(kind, K => NetString::<K>::from_string_value(value.clone()).typed_value().map(Into::into))
}
