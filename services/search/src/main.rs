mod commands;
mod pipeline;
mod sources;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use marketscout_config::init_tracing;

#[derive(Parser)]
#[command(
    name = "marketscout",
    version,
    about = "Cross-marketplace scout for specific secondhand items"
)]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Score a feed of scraped listings through the full pipeline
    Score {
        /// JSON file containing an array of listings
        listings: PathBuf,
    },
    /// Score bare URLs from a file (one per line, '#' comments allowed)
    CheckUrls {
        /// Path to the URLs file
        urls_file: PathBuf,
    },
    /// Print a daily summary report
    Report {
        /// Date to show (YYYY-MM-DD); defaults to the newest summary
        #[arg(long)]
        date: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let _ = dotenvy::dotenv();
    init_tracing(if cli.verbose { "debug" } else { "info" });

    let result = match &cli.command {
        Command::Score { listings } => commands::run_score(&cli.config, listings),
        Command::CheckUrls { urls_file } => commands::run_check_urls(&cli.config, urls_file),
        Command::Report { date } => commands::run_report(&cli.config, date.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
