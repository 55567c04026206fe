use clap::Parser;

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Resolve one app name:\n    brewmatch resolve \"Visual Studio Code\"\n\n\
                  Resolve several names as JSON:\n    brewmatch resolve Signal Slack \"Zoom for Mac\" --json\n\n\
                  Pick interactively when unsure:\n    brewmatch resolve vscode --interactive\n\n\
                  Resolve against a local catalog:\n    brewmatch --catalog cask.json resolve Signal")]
pub struct ResolveArgs {
    /// App names to resolve (each argument is one name)
    #[arg(required = true, value_name = "QUERY")]
    pub queries: Vec<String>,

    /// Print the resolution as JSON
    #[arg(long)]
    pub json: bool,

    /// Choose among candidates when the match is not confident
    #[arg(long, short = 'i', conflicts_with = "json")]
    pub interactive: bool,
}
