//! Check deposit CLI
//!
//! Command-line interface for processing check deposits from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- deposits.csv > outcomes.csv
//! cargo run -- --strategy sync deposits.csv > outcomes.csv
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 deposits.csv > outcomes.csv
//! cargo run -- --specialist-threshold 50000 --regulatory-threshold 500000 deposits.csv
//! ```
//!
//! The program reads deposit requests from the input CSV file, runs each one
//! through validation and review routing, and writes one outcome row per
//! request to stdout. Logs go to stderr and are controlled by `RUST_LOG`.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, file not readable, etc.)

use check_deposit_engine::cli;
use check_deposit_engine::strategy;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = cli::parse_args();

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, args.to_thresholds(), config)
    };

    // Outcome rows go to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
