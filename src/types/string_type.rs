//! Attribute type objects for network strings.

use super::kind::Kind;
use super::value::NetString;
use crate::framework::{
    AttributePath, Diagnostics, StringTypable, StringValue, TypeWithValidate, ValidateAttribute,
    WireValue,
};
use std::fmt;
use std::marker::PhantomData;

/// The attribute type whose values are [`NetString<K>`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NetStringType<K: Kind>(PhantomData<K>);

impl<K: Kind> NetStringType<K> {
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<K: Kind> fmt::Display for NetStringType<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(K::SPEC.type_name)
    }
}

impl<K: Kind> StringTypable for NetStringType<K> {
    type Value = NetString<K>;

    fn type_name(&self) -> &'static str {
        K::SPEC.type_name
    }

    fn value_from_string(&self, value: StringValue) -> NetString<K> {
        NetString::from_string_value(value)
    }
}

impl<K: Kind> TypeWithValidate for NetStringType<K> {
    /// Rejects non-string wire values outright; string values get the same
    /// content checks as [`ValidateAttribute`].
    fn validate(&self, wire: &WireValue, path: &AttributePath) -> Diagnostics {
        match wire {
            WireValue::Untyped => Diagnostics::new(),
            WireValue::String(value) => self
                .value_from_string(value.clone())
                .validate_attribute(path),
            other => {
                tracing::debug!(kind = %K::SPEC.id, wire = %other, "non-string wire value");
                let mut diags = Diagnostics::new();
                diags.add_attribute_error(
                    path,
                    K::SPEC.type_validation_summary,
                    format!(
                        "An unexpected error was encountered trying to validate an attribute value. \
                         This is always an error in the provider. Please report the following to \
                         the provider developer:\n\n\
                         expected String value, received {}",
                        other
                    ),
                );
                diags
            }
        }
    }
}
