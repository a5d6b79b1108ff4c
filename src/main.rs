//! Forecourt - Entry Point
//!
//! Command-line front door for the layout engine: reads a JSON layout
//! request, runs screening or the full validation, and prints the placement
//! payload or the failure reason.

use clap::Parser;
use forecourt::core::error::{LayoutError, Result};
use forecourt::layout::{screen_site, validate_layout};
use forecourt::request::LayoutRequest;
use forecourt::rules::{load_rule_table, RuleTable};

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "forecourt", about = "Compute a forecourt layout for a site request")]
struct Cli {
    /// Path to the JSON layout request
    request: PathBuf,

    /// Optional TOML rulebook overlay
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Run the coarse site screen only, without placing anything
    #[arg(long)]
    screen_only: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_env_filter("forecourt=info")
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let rules = match &cli.rules {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading rulebook overlay");
            load_rule_table(path).map_err(LayoutError::Rules)?
        }
        None => RuleTable::default(),
    };

    let raw = fs::read_to_string(&cli.request)?;
    let request: LayoutRequest = serde_json::from_str(&raw)?;

    if cli.screen_only {
        screen_site(&request, &rules)?;
        println!("{}", serde_json::json!({ "valid": true }));
        return Ok(());
    }

    let layout = validate_layout(&request, &rules)?;
    tracing::info!(
        mpds = layout.mpds.len(),
        tanks = layout.tanks.centers.len(),
        "layout validated"
    );

    let output = if cli.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };
    println!("{output}");
    Ok(())
}
