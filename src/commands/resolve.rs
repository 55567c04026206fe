//! Resolve command implementation

use inquire::Select;

use super::context::CommandContext;
use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::resolver::{Outcome, Resolution, Resolver};
use crate::ui::formatter_for;

/// Label for declining every candidate in the picker
const NONE_OF_THESE: &str = "(none of these)";

/// Run resolve command
///
/// Every outcome, including an unavailable catalog, exits successfully; the outcome
/// itself tells the caller what to do.
pub fn run(ctx: &CommandContext, args: ResolveArgs) -> Result<()> {
    let resolver = Resolver::new(ctx.config.resolver, &ctx.catalog);
    let resolutions = resolver.resolve_all(&args.queries);

    let output = formatter_for(args.json).resolutions(&resolutions)?;
    println!("{}", output.trim_end());

    if resolutions.iter().any(Resolution::is_catalog_unavailable) {
        log::warn!("Catalog unavailable; every query was sent to manual review");
    }

    if args.interactive {
        for resolution in &resolutions {
            if let Some(token) = pick_interactively(resolution)? {
                println!("{} -> {}", resolution.query, token);
            }
        }
    }

    Ok(())
}

/// Let a human choose among the candidates of an unconfident resolution
///
/// Returns `None` for confident resolutions, for resolutions without candidates and
/// when the user declines or cancels.
fn pick_interactively(resolution: &Resolution) -> Result<Option<String>> {
    let Some(mut items) = picker_items(resolution) else {
        return Ok(None);
    };
    items.push(NONE_OF_THESE.to_string());

    let Some(selection) = Select::new(
        &format!("Which cask is '{}'?", resolution.query),
        items,
    )
    .with_starting_cursor(0)
    .with_page_size(10)
    .without_filtering()
    .with_help_message("↑↓ to move, ENTER to select, ESC to skip")
    .prompt_skippable()?
    else {
        return Ok(None);
    };

    if selection == NONE_OF_THESE {
        return Ok(None);
    }
    Ok(Some(selection))
}

/// Tokens offered in the picker, best first
fn picker_items(resolution: &Resolution) -> Option<Vec<String>> {
    if resolution.outcome == Outcome::AutoAccept || resolution.candidates.is_empty() {
        return None;
    }
    Some(
        resolution
            .candidates
            .iter()
            .map(|c| c.token.clone())
            .collect(),
    )
}
