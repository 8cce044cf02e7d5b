//! Extension points the host framework calls into.
//!
//! A string-backed custom type provides a value implementing
//! [`StringValuable`] plus whichever validation and equality hooks it
//! supports, and a type object implementing [`StringTypable`].

use super::diag::{Diagnostics, FuncError};
use super::path::AttributePath;
use super::value::{StringValue, WireValue};
use crate::error::WireError;
use std::any::Any;
use std::fmt;

/// A value backed by a three-state string.
pub trait StringValuable: Any + fmt::Debug + Send + Sync {
    /// The underlying string state.
    fn to_string_value(&self) -> StringValue;

    /// Name of the concrete value type, used in diagnostics.
    fn value_type_name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

impl StringValuable for StringValue {
    fn to_string_value(&self) -> StringValue {
        self.clone()
    }

    fn value_type_name(&self) -> &'static str {
        "StringValue"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Decides whether a newly computed value is a no-op change from the
/// prior one.
pub trait SemanticEquals: StringValuable {
    /// Returns whether `new_value` denotes the same thing as `self`. A false
    /// result may come with error diagnostics, which callers must check.
    fn string_semantic_equals(&self, new_value: &dyn StringValuable) -> (bool, Diagnostics);
}

/// Validation invoked for a configuration attribute.
pub trait ValidateAttribute {
    fn validate_attribute(&self, path: &AttributePath) -> Diagnostics;
}

/// Validation invoked for a function parameter at a positional index.
pub trait ValidateParameter {
    fn validate_parameter(&self, position: usize) -> Result<(), FuncError>;
}

/// A string-backed attribute type.
pub trait StringTypable {
    type Value: StringValuable;

    fn type_name(&self) -> &'static str;

    fn value_from_string(&self, value: StringValue) -> Self::Value;

    /// Decode a wire value. Anything but a string (or a typeless value,
    /// which decodes as null) is rejected.
    fn value_from_wire(&self, wire: &WireValue) -> Result<Self::Value, WireError> {
        let Some(found) = wire.wire_type() else {
            return Ok(self.value_from_string(StringValue::Null));
        };
        match wire {
            WireValue::String(value) => Ok(self.value_from_string(value.clone())),
            _ => Err(WireError::NotAString(found)),
        }
    }
}

/// Validation run against the raw wire value before decoding.
pub trait TypeWithValidate {
    fn validate(&self, wire: &WireValue, path: &AttributePath) -> Diagnostics;
}
