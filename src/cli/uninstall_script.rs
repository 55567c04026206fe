use clap::{Args, Parser};
use std::path::PathBuf;

use crate::uninstall::script::DEFAULT_OUTPUT_DIR;

/// Arguments for the uninstall-script command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Script for one cask:\n    brewmatch uninstall-script \"Visual Studio Code\"\n\n\
                  Script from a saved cask document:\n    brewmatch uninstall-script --json-file signal.json\n\n\
                  Scripts for every app definition in a directory:\n    brewmatch uninstall-script --apps-dir Apps --output-dir out")]
pub struct UninstallScriptArgs {
    /// App name or cask token to look up in the Homebrew API
    #[arg(value_name = "NAME", required_unless_present_any = ["json_file", "json_string", "apps_dir"])]
    pub name: Option<String>,

    #[command(flatten)]
    pub input: ScriptInput,

    /// Directory the scripts are written to
    #[arg(long, short = 'o', value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,
}

/// Alternative inputs; at most one may be given, and not together with a name
#[derive(Args, Debug)]
#[group(multiple = false, conflicts_with = "name")]
pub struct ScriptInput {
    /// Read the cask document from a file
    #[arg(long, value_name = "FILE")]
    pub json_file: Option<PathBuf>,

    /// Take the cask document from the command line
    #[arg(long, value_name = "JSON")]
    pub json_string: Option<String>,

    /// Generate one script per `*.json` app definition in a directory
    #[arg(long, value_name = "DIR")]
    pub apps_dir: Option<PathBuf>,
}
