//! Configuration for the `nettypes` binary.
//!
//! Settings are read from an XDG-compliant location (or an explicit path)
//! and never written back.

mod settings;

pub use settings::{AppSettings, Paths};
