use anyhow::Result;
use clap::Parser;

use league_roster::cli::{Cli, Commands};
use league_roster::cli::commands::{execute_leagues, execute_roster};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Roster { league_id, data } => execute_roster(league_id, &data).await,
        Commands::Leagues { data } => execute_leagues(&data).await,
    }
}
