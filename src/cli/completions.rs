use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    brewmatch completions bash > ~/.bash_completion.d/brewmatch\n\n\
                  Generate zsh completions:\n    brewmatch completions zsh > ~/.zfunc/_brewmatch\n\n\
                  Generate fish completions:\n    brewmatch completions fish > ~/.config/fish/completions/brewmatch.fish\n\n\
                  Generate PowerShell completions:\n    brewmatch completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
