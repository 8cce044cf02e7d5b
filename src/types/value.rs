//! The generic network string value.

use super::kind::{FamilyRule, Kind, KindSpec};
use crate::framework::{
    AttributePath, Diagnostic, Diagnostics, FuncError, SemanticEquals, StringValuable, StringValue,
    ValidateAttribute, ValidateParameter,
};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;
use tracing::{debug, trace};

const SEMANTIC_EQUALITY_SUMMARY: &str = "Semantic Equality Check Error";

/// A three-state string that should hold a value of kind `K`.
///
/// Construction never validates; the host calls [`ValidateAttribute`] or
/// [`ValidateParameter`] when it wants diagnostics, and
/// [`typed_value`](Self::typed_value) when it wants the parsed form. Every
/// call parses the text afresh.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NetString<K: Kind> {
    value: StringValue,
    kind: PhantomData<K>,
}

/// Why a known string was refused.
enum Rejection<E> {
    Malformed(E),
    WrongFamily,
}

impl<E: fmt::Display> Rejection<E> {
    fn detail(&self, spec: &KindSpec, input: &str) -> String {
        match self {
            Self::Malformed(err) => spec.malformed_detail(input, err),
            Self::WrongFamily => spec.wrong_family_detail(input),
        }
    }
}

impl<K: Kind> NetString<K> {
    /// A known value.
    pub fn new(value: impl Into<String>) -> Self {
        Self::from_string_value(StringValue::known(value))
    }

    pub fn null() -> Self {
        Self::from_string_value(StringValue::Null)
    }

    pub fn unknown() -> Self {
        Self::from_string_value(StringValue::Unknown)
    }

    /// Null for `None`, known otherwise.
    pub fn from_option(value: Option<impl Into<String>>) -> Self {
        Self::from_string_value(StringValue::from_option(value))
    }

    pub fn from_string_value(value: StringValue) -> Self {
        Self {
            value,
            kind: PhantomData,
        }
    }

    pub fn spec() -> &'static KindSpec {
        K::SPEC.id.spec()
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    pub fn is_unknown(&self) -> bool {
        self.value.is_unknown()
    }

    pub fn is_known(&self) -> bool {
        self.value.is_known()
    }

    /// The text, or an empty string when null or unknown.
    pub fn value_str(&self) -> &str {
        self.value.value_str()
    }

    pub fn string_value(&self) -> &StringValue {
        &self.value
    }

    pub fn into_string_value(self) -> StringValue {
        self.value
    }

    fn check(input: &str) -> Result<K::Output, Rejection<K::Error>> {
        let output = K::parse(input).map_err(Rejection::Malformed)?;
        if let FamilyRule::Only(expected) = K::SPEC.family {
            if K::family(&output) != Some(expected) {
                return Err(Rejection::WrongFamily);
            }
        }
        Ok(output)
    }

    /// Detail text for a refused known value, `None` when it is valid or
    /// when there is nothing to check.
    fn rejection(&self) -> Option<String> {
        let input = self.value.as_str()?;
        let rejection = Self::check(input).err()?;
        let detail = rejection.detail(&K::SPEC, input);
        debug!(kind = %K::SPEC.id, value = input, "rejected network string");
        Some(detail)
    }

    /// Parse into the structured form.
    ///
    /// Null and unknown values are refused with state-specific text. A
    /// malformed value reports the parser's own message; a value of the
    /// other address family reports the wrong-family body.
    pub fn typed_value(&self) -> Result<K::Output, Diagnostics> {
        trace!(kind = %K::SPEC.id, value = %self.value, "typed value requested");
        let summary = K::SPEC.accessor_summary;
        let input = match &self.value {
            StringValue::Null => {
                return Err(Diagnostic::error(summary, K::SPEC.null_detail()).into());
            }
            StringValue::Unknown => {
                return Err(Diagnostic::error(summary, K::SPEC.unknown_detail()).into());
            }
            StringValue::Known(input) => input,
        };

        Self::check(input).map_err(|rejection| {
            let detail = match rejection {
                Rejection::Malformed(err) => err.to_string(),
                Rejection::WrongFamily => K::SPEC.wrong_family_detail(input),
            };
            Diagnostic::error(summary, detail).into()
        })
    }
}

impl<K: Kind> fmt::Display for NetString<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<K: Kind> From<&str> for NetString<K> {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<K: Kind> From<String> for NetString<K> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<K: Kind> From<StringValue> for NetString<K> {
    fn from(value: StringValue) -> Self {
        Self::from_string_value(value)
    }
}

impl<K: Kind> StringValuable for NetString<K> {
    fn to_string_value(&self) -> StringValue {
        self.value.clone()
    }

    fn value_type_name(&self) -> &'static str {
        K::SPEC.value_type
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<K: Kind> SemanticEquals for NetString<K> {
    /// Equal when both sides parse to the same structured value, whatever
    /// the spelling. Null and unknown only equal the same state.
    fn string_semantic_equals(&self, new_value: &dyn StringValuable) -> (bool, Diagnostics) {
        let mut diags = Diagnostics::new();

        let Some(other) = new_value.as_any().downcast_ref::<Self>() else {
            debug!(
                expected = K::SPEC.value_type,
                got = new_value.value_type_name(),
                "semantic equality type mismatch"
            );
            diags.add_error(
                SEMANTIC_EQUALITY_SUMMARY,
                format!(
                    "An unexpected value type was received while performing semantic equality checks. \
                     Please report this to the provider developers.\n\n\
                     Expected Value Type: {}\n\
                     Got Value Type: {}",
                    K::SPEC.value_type,
                    new_value.value_type_name()
                ),
            );
            return (false, diags);
        };

        let (current, new) = match (&self.value, &other.value) {
            (StringValue::Known(current), StringValue::Known(new)) => (current, new),
            (current, new) => return (current == new, diags),
        };

        match (K::parse(current), K::parse(new)) {
            (Ok(current), Ok(new)) => (current == new, diags),
            (Err(err), _) | (_, Err(err)) => {
                debug!(kind = %K::SPEC.id, error = %err, "semantic equality parse failure");
                diags.add_error(SEMANTIC_EQUALITY_SUMMARY, err.to_string());
                (false, diags)
            }
        }
    }
}

impl<K: Kind> ValidateAttribute for NetString<K> {
    fn validate_attribute(&self, path: &AttributePath) -> Diagnostics {
        let mut diags = Diagnostics::new();
        if let Some(detail) = self.rejection() {
            diags.add_attribute_error(path, K::SPEC.invalid_summary, detail);
        }
        diags
    }
}

impl<K: Kind> ValidateParameter for NetString<K> {
    fn validate_parameter(&self, position: usize) -> Result<(), FuncError> {
        match self.rejection() {
            Some(detail) => Err(FuncError::argument(
                position,
                format!("{}: {}", K::SPEC.invalid_summary, detail),
            )),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{parse_addr, parse_mac, parse_prefix, Family};
    use crate::types::{
        IpAddress, IpPrefix, Ipv4Address, Ipv4Prefix, Ipv6Address, Ipv6Prefix, MacAddress,
    };

    fn equals<K: Kind>(current: NetString<K>, new: &dyn StringValuable) -> (bool, Diagnostics) {
        current.string_semantic_equals(new)
    }

    fn attribute_diags<K: Kind>(value: NetString<K>) -> Diagnostics {
        value.validate_attribute(&AttributePath::root("test"))
    }

    #[test]
    fn test_ipv4_address_validate_attribute() {
        assert!(attribute_diags(Ipv4Address::null()).is_empty());
        assert!(attribute_diags(Ipv4Address::unknown()).is_empty());
        assert!(attribute_diags(Ipv4Address::new("192.0.2.1")).is_empty());

        let diags = attribute_diags(Ipv4Address::new("192.168.0.000"));
        let expected = Diagnostics::from(Diagnostic::attribute_error(
            AttributePath::root("test"),
            "Invalid IPv4 Address String Value",
            "A string value was provided that is not valid IPv4 string format.\n\n\
             Given Value: 192.168.0.000\n\
             Error: ParseAddr(\"192.168.0.000\"): IPv4 field has octet with leading zero",
        ));
        assert_eq!(diags, expected);

        let diags = attribute_diags(Ipv4Address::new("2001:db8::1"));
        assert_eq!(
            diags.iter().next().map(|d| d.detail.as_str()),
            Some(
                "An IPv6 string format was provided, string value must be IPv4 format.\n\n\
                 Given Value: 2001:db8::1\n"
            )
        );
    }

    #[test]
    fn test_ipv6_address_validate_attribute() {
        for valid in ["::", "::FFFF:192.168.255.255", "2001:db8::1", "fe80::1%eth0"] {
            assert!(attribute_diags(Ipv6Address::new(valid)).is_empty(), "{}", valid);
        }

        let diags = attribute_diags(Ipv6Address::new("192.168.255.255"));
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid IPv6 Address String Value");
        assert_eq!(
            diag.detail,
            "An IPv4 string format was provided, string value must be IPv6 string format or \
             IPv4-Mapped IPv6 string format (RFC 4291).\n\nGiven Value: 192.168.255.255\n"
        );

        let diags = attribute_diags(Ipv6Address::new("2001:db8::1::"));
        assert_eq!(
            diags.iter().next().map(|d| d.detail.as_str()),
            Some(
                "A string value was provided that is not valid IPv6 string format (RFC 4291).\n\n\
                 Given Value: 2001:db8::1::\n\
                 Error: ParseAddr(\"2001:db8::1::\"): multiple :: in address (at \":\")"
            )
        );
    }

    #[test]
    fn test_ip_address_accepts_both_families() {
        assert!(attribute_diags(IpAddress::new("192.0.2.1")).is_empty());
        assert!(attribute_diags(IpAddress::new("2001:db8::1")).is_empty());

        let diags = attribute_diags(IpAddress::new("not-an-ip"));
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid IP Address String Value");
        assert_eq!(
            diag.detail,
            "A string value was provided that is not valid IPv4 or IPv6 string format \
             (RFC 791, RFC 4291).\n\nGiven Value: not-an-ip\n\
             Error: ParseAddr(\"not-an-ip\"): unable to parse IP"
        );
    }

    #[test]
    fn test_prefix_validate_attribute() {
        assert!(attribute_diags(Ipv4Prefix::new("10.0.0.0/8")).is_empty());
        assert!(attribute_diags(Ipv6Prefix::new("2001:db8::/32")).is_empty());

        let diags = attribute_diags(Ipv4Prefix::new("::/128"));
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid IPv4 CIDR String Value");
        assert_eq!(
            diag.detail,
            "An IPv6 CIDR string format was provided, string value must be IPv4 CIDR string \
             format (RFC 4632).\n\nGiven Value: ::/128\n"
        );

        let diags = attribute_diags(Ipv6Prefix::new("10.0.0.0/8"));
        assert_eq!(
            diags.iter().next().map(|d| d.detail.as_str()),
            Some(
                "An IPv4 CIDR string format was provided, string value must be IPv6 CIDR string \
                 format (RFC 4291).\n\nGiven Value: 10.0.0.0/8\n"
            )
        );

        let diags = attribute_diags(Ipv4Prefix::new("127.0.0.000/8"));
        assert_eq!(
            diags.iter().next().map(|d| d.detail.as_str()),
            Some(
                "A string value was provided that is not valid IPv4 CIDR string format (RFC 4632).\n\n\
                 Given Value: 127.0.0.000/8\n\
                 Error: ParsePrefix(\"127.0.0.000/8\"): ParseAddr(\"127.0.0.000\"): \
                 IPv4 field has octet with leading zero"
            )
        );

        let diags = attribute_diags(IpPrefix::new("192168255255/8"));
        assert!(diags.iter().next().unwrap().detail.ends_with(
            "Error: ParsePrefix(\"192168255255/8\"): ParseAddr(\"192168255255\"): unable to parse IP"
        ));

        let diags = attribute_diags(IpPrefix::new("127.0.0.0/999"));
        assert!(diags
            .iter()
            .next()
            .unwrap()
            .detail
            .ends_with("Error: ParsePrefix(\"127.0.0.0/999\"): prefix length out of range"));
    }

    #[test]
    fn test_ip_prefix_union() {
        let value = IpPrefix::new("172.16.0.0/12");
        assert!(attribute_diags(value.clone()).is_empty());

        let prefix = value.typed_value().unwrap();
        assert_eq!(prefix.addr(), &parse_addr("172.16.0.0").unwrap());
        assert_eq!(prefix.bits(), 12);
        assert_eq!(prefix.family(), Family::V4);
    }

    #[test]
    fn test_mac_validate_attribute() {
        for valid in [
            "00:00:5e:00:53:01",
            "02-00-5E-10-00-00-00-01",
            "0000.5e00.5301",
            "00:00:00:00:fe:80:00:00:00:00:00:00:02:00:5e:10:00:00:00:01",
        ] {
            assert!(attribute_diags(MacAddress::new(valid)).is_empty(), "{}", valid);
        }

        let diags = attribute_diags(MacAddress::new("00:00:5e:00:53"));
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid MAC Address String Value");
        assert_eq!(
            diag.detail,
            "A string value was provided that is not valid MAC string format.\n\n\
             Given Value: 00:00:5e:00:53\n\
             Error: address 00:00:5e:00:53: invalid MAC address"
        );

        let diags = attribute_diags(MacAddress::new(""));
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Invalid MAC Address String Value");
        assert_eq!(
            diag.detail,
            "A string value was provided that is not valid MAC string format.\n\n\
             Given Value: \n\
             Error: invalid MAC address"
        );
    }

    #[test]
    fn test_validate_parameter() {
        assert_eq!(Ipv6Address::null().validate_parameter(0), Ok(()));
        assert_eq!(Ipv6Address::unknown().validate_parameter(0), Ok(()));
        assert_eq!(Ipv6Address::new("::1").validate_parameter(0), Ok(()));

        let err = Ipv6Address::new("10.0.0.1").validate_parameter(3).unwrap_err();
        assert_eq!(err.position, Some(3));
        assert_eq!(
            err.text,
            "Invalid IPv6 Address String Value: An IPv4 string format was provided, string value \
             must be IPv6 string format or IPv4-Mapped IPv6 string format (RFC 4291).\n\n\
             Given Value: 10.0.0.1\n"
        );

        let err = MacAddress::new("zz").validate_parameter(0).unwrap_err();
        assert_eq!(
            err.text,
            "Invalid MAC Address String Value: A string value was provided that is not valid \
             MAC string format.\n\nGiven Value: zz\nError: address zz: invalid MAC address"
        );

        let err = Ipv4Prefix::new("::/128").validate_parameter(1).unwrap_err();
        assert_eq!(err.position, Some(1));
        assert_eq!(
            err.text,
            "Invalid IPv4 CIDR String Value: An IPv6 CIDR string format was provided, string \
             value must be IPv4 CIDR string format (RFC 4632).\n\nGiven Value: ::/128\n"
        );

        let err = IpPrefix::new("10.0.0.0/\t8").validate_parameter(0).unwrap_err();
        assert!(err.text.ends_with(
            "Error: ParsePrefix(\"10.0.0.0/\\t8\"): bad bits after slash: \"\\t8\""
        ));
    }

    #[test]
    fn test_semantic_equals() {
        let cases = [
            (equals(Ipv6Address::new("::"), &Ipv6Address::new("0:0:0:0:0:0:0:0")), true),
            (
                equals(
                    Ipv6Address::new("2001:DB8:0:0:8:800:200C:417A"),
                    &Ipv6Address::new("2001:db8::8:800:200c:417a"),
                ),
                true,
            ),
            (
                equals(
                    Ipv6Address::new("::FFFF:192.168.255.255"),
                    &Ipv6Address::new("::ffff:c0a8:ffff"),
                ),
                true,
            ),
            (equals(Ipv6Address::new("::1"), &Ipv6Address::new("::2")), false),
            (equals(Ipv4Address::new("192.0.2.1"), &Ipv4Address::new("192.0.2.1")), true),
            (equals(IpAddress::new("::1"), &IpAddress::new("0:0::1")), true),
            (
                equals(Ipv6Prefix::new("FF00::/8"), &Ipv6Prefix::new("FF00:0:0:0:0:0:0:0/8")),
                true,
            ),
            (
                equals(
                    Ipv6Prefix::new("2001:DB8::CD30/60"),
                    &Ipv6Prefix::new("2001:0DB8:0:0:0:0:0:CD30/60"),
                ),
                true,
            ),
            (
                equals(
                    Ipv6Prefix::new("2001:DB8::CD30/60"),
                    &Ipv6Prefix::new("2001:0DB8:0:0:0:0:0:0CD3/60"),
                ),
                false,
            ),
            (
                equals(
                    Ipv4Prefix::new("104.28.204.175/32"),
                    &Ipv4Prefix::new("104.28.204.175/31"),
                ),
                false,
            ),
            (equals(Ipv4Prefix::new("10.0.0.1/8"), &Ipv4Prefix::new("10.0.0.0/8")), false),
            (
                equals(IpPrefix::new("::/128"), &IpPrefix::new("0:0:0:0:0:0:0:0/128")),
                true,
            ),
            (
                equals(MacAddress::new("00:00:5e:00:53:00"), &MacAddress::new("00-00-5E-00-53-00")),
                true,
            ),
            (
                equals(MacAddress::new("00:00:5e:00:53:00"), &MacAddress::new("0000.5e00.5300")),
                true,
            ),
            (
                equals(MacAddress::new("00:00:5e:00:53:00"), &MacAddress::new("00:00:5e:00:53:01")),
                false,
            ),
        ];

        for (i, ((equal, diags), expected)) in cases.into_iter().enumerate() {
            assert_eq!(equal, expected, "case {}", i);
            assert!(diags.is_empty(), "case {}: {}", i, diags);
        }
    }

    #[test]
    fn test_semantic_equals_is_symmetric_and_transitive() {
        let forms = ["00:00:5e:00:53:00", "00-00-5e-00-53-00", "0000.5e00.5300"];
        for a in forms {
            for b in forms {
                let (equal, diags) = equals(MacAddress::new(a), &MacAddress::new(b));
                assert!(equal, "{} vs {}", a, b);
                assert!(diags.is_empty());
            }
        }
    }

    #[test]
    fn test_semantic_equals_states() {
        assert!(equals(Ipv4Address::null(), &Ipv4Address::null()).0);
        assert!(equals(Ipv4Address::unknown(), &Ipv4Address::unknown()).0);
        assert!(!equals(Ipv4Address::null(), &Ipv4Address::unknown()).0);
        assert!(!equals(Ipv4Address::null(), &Ipv4Address::new("10.0.0.1")).0);
    }

    #[test]
    fn test_semantic_equals_type_mismatch() {
        let (equal, diags) = equals(Ipv6Address::new("::"), &StringValue::known("::"));
        assert!(!equal);
        let expected = Diagnostics::from(Diagnostic::error(
            "Semantic Equality Check Error",
            "An unexpected value type was received while performing semantic equality checks. \
             Please report this to the provider developers.\n\n\
             Expected Value Type: Ipv6Address\n\
             Got Value Type: StringValue",
        ));
        assert_eq!(diags, expected);

        let (equal, diags) = equals(IpPrefix::new("::/0"), &Ipv6Prefix::new("::/0"));
        assert!(!equal);
        assert!(diags.iter().next().unwrap().detail.ends_with(
            "Expected Value Type: IpPrefix\nGot Value Type: Ipv6Prefix"
        ));
    }

    #[test]
    fn test_semantic_equals_unparsable() {
        let (equal, diags) = equals(Ipv4Address::new("10.0.0.1"), &Ipv4Address::new("bogus"));
        assert!(!equal);
        assert!(diags.has_error());
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Semantic Equality Check Error");
        assert_eq!(diag.detail, "ParseAddr(\"bogus\"): unable to parse IP");
    }

    #[test]
    fn test_typed_value() {
        assert_eq!(
            Ipv4Address::new("192.0.2.1").typed_value(),
            Ok(parse_addr("192.0.2.1").unwrap())
        );
        assert_eq!(
            Ipv6Prefix::new("2001:db8::/32").typed_value(),
            Ok(parse_prefix("2001:db8::/32").unwrap())
        );
        assert_eq!(
            MacAddress::new("00-00-5E-00-53-01").typed_value(),
            Ok(parse_mac("00:00:5e:00:53:01").unwrap())
        );
    }

    #[test]
    fn test_typed_value_null_and_unknown() {
        let cases = [
            (Ipv4Address::null().typed_value().unwrap_err(), "IPv4Address ValueIPv4Address Error", "IPv4 address string value is null"),
            (Ipv4Address::unknown().typed_value().unwrap_err(), "IPv4Address ValueIPv4Address Error", "IPv4 address string value is unknown"),
        ];
        for (diags, summary, detail) in cases {
            assert_eq!(diags, Diagnostics::from(Diagnostic::error(summary, detail)));
        }

        let diags = Ipv6Prefix::unknown().typed_value().unwrap_err();
        assert_eq!(
            diags,
            Diagnostics::from(Diagnostic::error(
                "IPv6Prefix ValueIPv6Prefix Error",
                "IPv6 CIDR string value is unknown"
            ))
        );

        let diags = MacAddress::null().typed_value().unwrap_err();
        assert_eq!(
            diags,
            Diagnostics::from(Diagnostic::error(
                "MACAddress ValueMACAddress Error",
                "MAC address string value is null"
            ))
        );

        let diags = IpPrefix::null().typed_value().unwrap_err();
        assert_eq!(
            diags.iter().next().map(|d| d.detail.as_str()),
            Some("IP CIDR string value is null")
        );
    }

    #[test]
    fn test_typed_value_invalid() {
        let diags = IpAddress::new("1.2.3").typed_value().unwrap_err();
        assert_eq!(
            diags,
            Diagnostics::from(Diagnostic::error(
                "IPAddress ValueIPAddress Error",
                "ParseAddr(\"1.2.3\"): IPv4 address too short"
            ))
        );

        let diags = Ipv4Prefix::new("::/128").typed_value().unwrap_err();
        assert_eq!(
            diags,
            Diagnostics::from(Diagnostic::error(
                "IPv4Prefix ValueIPv4Prefix Error",
                "An IPv6 CIDR string format was provided, string value must be IPv4 CIDR string \
                 format (RFC 4632).\n\nGiven Value: ::/128\n"
            ))
        );
    }

    #[test]
    fn test_accessor_is_deterministic() {
        let value = Ipv6Address::new("2001:0DB8::0001");
        assert_eq!(value.typed_value(), value.typed_value());
    }

    #[test]
    fn test_concurrent_use() {
        let current = Ipv6Prefix::new("2001:db8::/32");
        let new = Ipv6Prefix::new("2001:0db8:0:0:0:0:0:0/32");
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..100 {
                        assert!(attribute_diags(current.clone()).is_empty());
                        assert!(current.string_semantic_equals(&new).0);
                    }
                });
            }
        });
    }

    #[test]
    fn test_value_type_name_and_state() {
        let value = Ipv4Prefix::from_option(None::<String>);
        assert!(value.is_null());
        assert_eq!(value.value_type_name(), "Ipv4Prefix");
        assert_eq!(value.value_str(), "");

        let value: Ipv4Prefix = "10.0.0.0/8".into();
        assert!(value.is_known());
        assert_eq!(value.to_string_value(), StringValue::known("10.0.0.0/8"));
    }
}
