use clap::Parser;

/// Arguments for the search command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the best matches:\n    brewmatch search password\n\n\
                  Show everything scoring 0.5 or more:\n    brewmatch search \"visual studio\" --min-score 0.5 --limit 20")]
pub struct SearchArgs {
    /// App name to search for; several words are joined with spaces
    #[arg(required = true, value_name = "QUERY")]
    pub query: Vec<String>,

    /// Drop candidates scoring below this value (defaults to the configured floor)
    #[arg(long, value_name = "SCORE")]
    pub min_score: Option<f64>,

    /// Maximum number of candidates to show
    #[arg(long, short = 'n', default_value_t = 10)]
    pub limit: usize,

    /// Print the results as JSON
    #[arg(long)]
    pub json: bool,
}

impl SearchArgs {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}
