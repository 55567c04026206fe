use crate::cache;
use crate::cli::{CacheArgs, CacheSubcommand};
use crate::error::Result;
use crate::ui::display::format_cache_stats;

pub fn run(args: CacheArgs) -> Result<()> {
    match args.command {
        Some(CacheSubcommand::Clear) => clean_all_cache(),
        // Default: show only cache statistics
        None => show_cache_stats(),
    }
}

fn show_cache_stats() -> Result<()> {
    let cache_dir = cache::cache_dir()?;
    let stats = cache::snapshot_stats()?;

    print!("{}", format_cache_stats(&cache_dir, stats.as_ref()));
    if stats.is_some() {
        println!("\nRun 'brewmatch cache clear' to remove the cached catalog.");
    } else {
        println!("Run any command without --offline to populate it.");
    }

    Ok(())
}

fn clean_all_cache() -> Result<()> {
    cache::clear_cache()?;
    println!("Cache cleared successfully.");
    Ok(())
}
