use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "league_roster")]
#[command(about = "A demo tool for aggregating players across a league's teams")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the aggregated roster for a league
    Roster {
        /// League ID to aggregate players for
        league_id: i32,

        /// League dataset file (JSON)
        #[arg(short, long, default_value = "league_data.json")]
        data: PathBuf,
    },

    /// List the leagues known to the dataset
    Leagues {
        /// League dataset file (JSON)
        #[arg(short, long, default_value = "league_data.json")]
        data: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_command_parses_with_defaults() {
        let cli = Cli::try_parse_from(["league_roster", "roster", "3"]).unwrap();

        match cli.command {
            Commands::Roster { league_id, data } => {
                assert_eq!(league_id, 3);
                assert_eq!(data, PathBuf::from("league_data.json"));
            }
            _ => panic!("Expected Roster command"),
        }
    }

    #[test]
    fn test_leagues_command_parses_custom_data_path() {
        let cli =
            Cli::try_parse_from(["league_roster", "leagues", "--data", "demo.json"]).unwrap();

        match cli.command {
            Commands::Leagues { data } => assert_eq!(data, PathBuf::from("demo.json")),
            _ => panic!("Expected Leagues command"),
        }
    }
}
