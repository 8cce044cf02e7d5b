//! The host framework's side of the boundary.
//!
//! These are the value, diagnostic and trait shapes a plugin framework's
//! attribute system exposes. The network types in [`crate::types`] plug into
//! them; nothing here knows about addresses.

mod diag;
mod path;
pub mod traits;
mod value;

pub use diag::{Diagnostic, Diagnostics, FuncError, Severity};
pub use path::{AttributePath, PathStep};
pub use traits::{
    SemanticEquals, StringTypable, StringValuable, TypeWithValidate, ValidateAttribute,
    ValidateParameter,
};
pub use value::{StringValue, WireType, WireValue};
