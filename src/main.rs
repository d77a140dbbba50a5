use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use footstats::api;
use footstats::cli;
use footstats::config::Config;

#[derive(Parser)]
#[command(name = "footstats")]
#[command(about = "A football analytics engine for team statistics and match predictions")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Aggregate a team's match history into summary statistics
    Analyze {
        #[arg(short, long)]
        team: String,
        /// JSON file holding an array of match records
        #[arg(short, long)]
        matches: PathBuf,
    },
    /// Predict an upcoming match from each side's history
    Predict {
        #[arg(long)]
        home: String,
        #[arg(long)]
        away: String,
        /// JSON file with the home side's match records
        #[arg(long)]
        home_matches: PathBuf,
        /// JSON file with the away side's match records
        #[arg(long)]
        away_matches: PathBuf,
    },
    /// Summarize direct meetings between two teams
    HeadToHead {
        #[arg(long)]
        team1: String,
        #[arg(long)]
        team2: String,
        /// JSON file holding an array of match records
        #[arg(short, long)]
        matches: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let mut config = Config::load();

    match cli.command {
        Some(Commands::Serve { port }) => {
            if let Some(port) = port {
                config.server.port = port;
            }
            tracing::info!("Starting footstats API server on port {}", config.server.port);
            api::serve(config).await?;
        }
        Some(Commands::Analyze { team, matches }) => {
            cli::analyze_team(&team, &matches)?;
        }
        Some(Commands::Predict {
            home,
            away,
            home_matches,
            away_matches,
        }) => {
            cli::predict_match(&home, &away, &home_matches, &away_matches)?;
        }
        Some(Commands::HeadToHead {
            team1,
            team2,
            matches,
        }) => {
            cli::head_to_head(&team1, &team2, &matches)?;
        }
        None => {
            // Default to serving
            tracing::info!("Starting footstats API server on port {}", config.server.port);
            api::serve(config).await?;
        }
    }

    Ok(())
}
