//! Command implementations for brewmatch CLI

pub mod clean_cache;
pub mod completions;
pub mod context;
pub mod resolve;
pub mod search;
pub mod uninstall_script;
pub mod version;
