//! Presentation layer
//!
//! Everything printed to stdout is rendered here; logging goes to stderr through
//! `log`.

pub mod display;
pub mod formatter;

pub use formatter::formatter_for;
