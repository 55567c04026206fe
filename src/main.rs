//! brewmatch - resolve free-text application names to Homebrew cask tokens
//!
//! Normalizes a name, scores it against every cask in the Homebrew catalog, ranks the
//! candidates and decides whether the best one can be trusted.

use clap::Parser;

mod cache;
mod cask;
mod catalog;
mod cli;
mod commands;
mod common;
mod config;
mod error;
mod hash;
mod http;
mod progress;
mod resolver;
mod ui;
mod uninstall;

use cli::{Cli, Commands};
use commands::context::{CatalogSource, CommandContext};
use error::Result;

/// Route `log` output to stderr; `-v` lowers the default level, `RUST_LOG` wins
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let source = CatalogSource::from_flags(cli.catalog, cli.offline);

    match cli.command {
        Commands::Resolve(args) => {
            let ctx = CommandContext::new(cli.config.as_deref(), source)?;
            commands::resolve::run(&ctx, args)
        }
        Commands::Search(args) => {
            let ctx = CommandContext::new(cli.config.as_deref(), source)?;
            commands::search::run(&ctx, args)
        }
        Commands::UninstallScript(args) => {
            let ctx = CommandContext::new(cli.config.as_deref(), source)?;
            commands::uninstall_script::run(&ctx, args)
        }
        Commands::Cache(args) => commands::clean_cache::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
