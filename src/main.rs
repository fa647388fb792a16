use anyhow::Result;
use clap::Parser;
use swell_tui::cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    swell_tui::run(cli).await
}
