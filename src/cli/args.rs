use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone, PartialEq, Eq)]
#[command(name = "loanadvisor")]
#[command(
    about = "Interactive loan calculator with an AI advisor",
    long_about = "Interactive loan calculator with an AI advisor\n\nConfig file loading:\n  - --config <path> (explicit file, overrides default path discovery)\n  - Default probe path when --config is not provided:\n    1. $XDG_CONFIG_HOME/loanadvisor/config.toml\n    2. ~/.config/loanadvisor/config.toml"
)]
pub struct CliArgs {
    /// Load config from this file path instead of the default discovery path.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log redacted HTTP requests and responses to stderr.
    #[arg(long)]
    pub verbose_http: bool,
}
