//! Search command implementation

use super::context::CommandContext;
use crate::cli::SearchArgs;
use crate::error::{Result, config_invalid};
use crate::resolver::Resolver;
use crate::ui::formatter_for;

/// Run search command
///
/// Prints raw ranker output. A catalog that cannot be loaded is an error here, so an
/// empty result always means nothing matched.
pub fn run(ctx: &CommandContext, args: SearchArgs) -> Result<()> {
    let min_score = args
        .min_score
        .unwrap_or(ctx.config.resolver.min_candidate_score);
    if !(0.0..=1.0).contains(&min_score) {
        return Err(config_invalid(
            format!("--min-score must be between 0 and 1, got {}", min_score),
        ));
    }

    let query = args.query_text();
    let resolver = Resolver::new(ctx.config.resolver, &ctx.catalog);
    let results = resolver.search(&query, min_score, args.limit)?;

    let output = formatter_for(args.json).search_results(&query, &results)?;
    println!("{}", output.trim_end());
    Ok(())
}
