//! Common utility modules for shared functionality across the codebase.

pub mod serde_utils;
pub mod string_utils;
