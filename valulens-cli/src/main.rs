//! ValuLens CLI — one-shot analysis rendering.
//!
//! Commands:
//! - `analyze` — request an analysis from the service and print the report
//! - `sample` — render the built-in sample payload offline

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use valulens_core::report::markdown;
use valulens_core::sample::sample_result;
use valulens_core::{build_report, AnalysisClient, ClientConfig};

#[derive(Parser)]
#[command(
    name = "valulens",
    about = "ValuLens CLI — filing-first company analysis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request an analysis from the service and print the rendered report.
    Analyze {
        /// Ticker symbol (e.g. AAPL).
        ticker: String,

        /// Analysis endpoint URL. Overrides the config file.
        #[arg(long)]
        endpoint: Option<String>,

        /// Path to a TOML config file. Defaults to the user config directory.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the raw JSON payload instead of the rendered report.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Render the built-in sample payload offline.
    Sample,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze {
            ticker,
            endpoint,
            config,
            json,
        } => run_analyze(&ticker, endpoint, config, json),
        Commands::Sample => run_sample(),
    };

    if let Err(err) = result {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run_analyze(
    ticker: &str,
    endpoint: Option<String>,
    config_path: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let path = config_path.unwrap_or_else(default_config_path);
    let mut config = ClientConfig::load(&path)?;
    if let Some(endpoint) = endpoint {
        config.endpoint = endpoint;
    }

    let client = AnalysisClient::new(&config)?;
    let result = client.analyze(ticker)?;

    if json {
        let raw = serde_json::to_string_pretty(&result)
            .context("failed to serialize analysis result")?;
        println!("{raw}");
    } else {
        let report = build_report(&result);
        print!("{}", markdown::render(&report, result.ticker.as_deref()));
    }
    Ok(())
}

fn run_sample() -> Result<()> {
    let result = sample_result();
    let report = build_report(&result);
    print!("{}", markdown::render(&report, result.ticker.as_deref()));
    Ok(())
}

fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("valulens")
        .join("valulens.toml")
}
