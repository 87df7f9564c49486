use anyhow::Result;
use clap::Parser;
use loanadvisor::cli::CliArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    loanadvisor::run(args).await
}
