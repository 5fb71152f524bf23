use crate::core::ReviewThresholds;
use crate::strategy::BatchConfig;
use clap::{Parser, ValueEnum};
use rust_decimal::Decimal;
use std::path::PathBuf;

/// Process check deposits with tiered fraud review
#[derive(Parser, Debug)]
#[command(name = "check-deposit")]
#[command(about = "Process check deposits with tiered fraud review", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing deposit requests
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Processing strategy to use for the batch
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for sequential or 'async' for concurrent batches"
    )]
    pub strategy: StrategyType,

    /// Number of deposits per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of deposits per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of worker threads processing a batch (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,

    /// Amount above which a deposit needs specialist review
    #[arg(
        long = "specialist-threshold",
        value_name = "AMOUNT",
        help = "Amount above which a deposit needs specialist review (default: 100000)"
    )]
    pub specialist_threshold: Option<Decimal>,

    /// Amount above which a deposit needs regulatory review
    #[arg(
        long = "regulatory-threshold",
        value_name = "AMOUNT",
        help = "Amount above which a deposit needs regulatory review (default: 1000000)"
    )]
    pub regulatory_threshold: Option<Decimal>,
}

/// Available processing strategies
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

impl CliArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values take their defaults; zero values are rejected by
    /// `BatchConfig::new` with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_none() && self.max_concurrent_batches.is_none() {
            return BatchConfig::default();
        }

        let default = BatchConfig::default();
        BatchConfig::new(
            self.batch_size.unwrap_or(default.batch_size),
            self.max_concurrent_batches
                .unwrap_or(default.max_concurrent_batches),
        )
    }

    /// Create the review thresholds from CLI arguments
    pub fn to_thresholds(&self) -> ReviewThresholds {
        if self.specialist_threshold.is_none() && self.regulatory_threshold.is_none() {
            return ReviewThresholds::default();
        }

        let default = ReviewThresholds::default();
        ReviewThresholds::new(
            self.specialist_threshold.unwrap_or(default.specialist),
            self.regulatory_threshold.unwrap_or(default.regulatory),
        )
    }
}
