//! Host value representations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A string as supplied by configuration: concrete, explicitly absent, or
/// not yet known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "lowercase")]
pub enum StringValue {
    #[default]
    Null,
    Unknown,
    Known(String),
}

impl StringValue {
    pub fn known(value: impl Into<String>) -> Self {
        Self::Known(value.into())
    }

    /// `None` becomes [`StringValue::Null`].
    pub fn from_option(value: Option<impl Into<String>>) -> Self {
        value.map_or(Self::Null, Self::known)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Known(s) => Some(s),
            _ => None,
        }
    }

    /// The text, or an empty string when null or unknown.
    pub fn value_str(&self) -> &str {
        self.as_str().unwrap_or_default()
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "<null>"),
            Self::Unknown => write!(f, "<unknown>"),
            Self::Known(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<&str> for StringValue {
    fn from(s: &str) -> Self {
        Self::known(s)
    }
}

impl From<String> for StringValue {
    fn from(s: String) -> Self {
        Self::Known(s)
    }
}

/// The type tag of a [`WireValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    String,
    Number,
    Bool,
    List,
}

impl fmt::Display for WireType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => write!(f, "String"),
            Self::Number => write!(f, "Number"),
            Self::Bool => write!(f, "Bool"),
            Self::List => write!(f, "List"),
        }
    }
}

/// A value as it arrives over the host's wire protocol, before any typed
/// decoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum WireValue {
    /// No value and no type information at all.
    #[default]
    Untyped,
    String(StringValue),
    /// Numbers travel in their textual form.
    Number(String),
    Bool(bool),
    List(Vec<WireValue>),
}

impl WireValue {
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(StringValue::known(value))
    }

    pub fn wire_type(&self) -> Option<WireType> {
        match self {
            Self::Untyped => None,
            Self::String(_) => Some(WireType::String),
            Self::Number(_) => Some(WireType::Number),
            Self::Bool(_) => Some(WireType::Bool),
            Self::List(_) => Some(WireType::List),
        }
    }
}

impl fmt::Display for WireValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Untyped => write!(f, "invalid typeless value"),
            Self::String(StringValue::Known(s)) => write!(f, "String<{:?}>", s),
            Self::String(StringValue::Null) => write!(f, "String<null>"),
            Self::String(StringValue::Unknown) => write!(f, "String<unknown>"),
            Self::Number(n) => write!(f, "Number<{:?}>", n),
            Self::Bool(b) => write!(f, "Bool<{}>", b),
            Self::List(items) => {
                write!(f, "List[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_value_states() {
        assert!(StringValue::default().is_null());
        assert!(StringValue::Unknown.is_unknown());
        assert_eq!(StringValue::known("::1").as_str(), Some("::1"));
        assert_eq!(StringValue::Unknown.value_str(), "");
        assert_eq!(StringValue::from_option(None::<String>), StringValue::Null);
        assert_eq!(
            StringValue::from_option(Some("10.0.0.0/8")),
            StringValue::known("10.0.0.0/8")
        );
    }

    #[test]
    fn test_string_value_serde() {
        let json = serde_json::to_string(&StringValue::known("::1")).unwrap();
        assert_eq!(json, r#"{"state":"known","value":"::1"}"#);
        let back: StringValue = serde_json::from_str(r#"{"state":"unknown"}"#).unwrap();
        assert_eq!(back, StringValue::Unknown);
    }

    #[test]
    fn test_wire_display() {
        assert_eq!(WireValue::Number("123".into()).to_string(), "Number<\"123\">");
        assert_eq!(WireValue::string("::1").to_string(), "String<\"::1\">");
        assert_eq!(
            WireValue::List(vec![WireValue::Bool(true), WireValue::string("a")]).to_string(),
            "List[Bool<true>, String<\"a\">]"
        );
        assert_eq!(WireValue::Untyped.wire_type(), None);
    }
}
