//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - resolve: Resolve command arguments
//! - search: Search command arguments
//! - uninstall_script: Uninstall script generator arguments
//! - cache: Cache command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod cache;
pub mod completions;
pub mod resolve;
pub mod search;
pub mod uninstall_script;

pub use cache::{CacheArgs, CacheSubcommand};
pub use completions::CompletionsArgs;
pub use resolve::ResolveArgs;
pub use search::SearchArgs;
pub use uninstall_script::UninstallScriptArgs;

/// brewmatch - resolve app names to Homebrew casks
#[derive(Parser, Debug)]
#[command(
    name = "brewmatch",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve free-text application names to Homebrew cask tokens",
    long_about = "brewmatch maps application names as people write them (\"Visual Studio Code\", \
                  \"Zoom for Mac\") to Homebrew cask tokens, and says how confident the match is: \
                  auto-accept, accept with alternatives, or manual review.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  brewmatch resolve \"Visual Studio Code\"   \x1b[90m# Resolve one app name\x1b[0m\n   \
                  brewmatch resolve Signal Slack --json    \x1b[90m# Resolve several names as JSON\x1b[0m\n   \
                  brewmatch search password                \x1b[90m# Show ranked candidates\x1b[0m\n   \
                  brewmatch --offline resolve Zoom         \x1b[90m# Use the cached catalog only\x1b[0m\n   \
                  brewmatch uninstall-script signal        \x1b[90m# Write an uninstall script\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Configuration file (defaults to ./brewmatch.yaml when present)
    #[arg(long, short = 'c', global = true, env = "BREWMATCH_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Read the cask catalog from a local cask.json instead of the Homebrew API
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "offline")]
    pub catalog: Option<PathBuf>,

    /// Use the catalog snapshot cached by the last online run
    #[arg(long, global = true)]
    pub offline: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve app names to cask tokens
    Resolve(ResolveArgs),

    /// Show ranked catalog candidates for an app name
    Search(SearchArgs),

    /// Generate bash uninstall scripts from cask metadata
    UninstallScript(UninstallScriptArgs),

    /// Manage the catalog cache
    #[command(name = "cache")]
    Cache(CacheArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
