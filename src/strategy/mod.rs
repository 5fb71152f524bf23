//! Processing strategy module for batch deposit processing
//!
//! This module defines the Strategy pattern for complete processing pipelines,
//! covering CSV parsing, deposit orchestration and outcome output. Different
//! implementations (synchronous, concurrent batch) are selected at runtime.

use crate::cli::StrategyType;
use crate::core::ReviewThresholds;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Processing strategy trait for complete deposit processing pipelines
pub trait ProcessingStrategy: Send + Sync {
    /// Process deposits from input file and write outcomes to output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file (`check_number,amount`)
    /// * `output` - Writer receiving one outcome row per processed request
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the batch ran to completion
    /// * `Err(String)` if a fatal error occurred (file not found, I/O error, etc.)
    ///
    /// Individual request failures are logged and do not stop the batch.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `thresholds` - Escalation thresholds applied by the validator
/// * `config` - Optional batch configuration (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    thresholds: ReviewThresholds,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(thresholds)),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config, thresholds))
        }
    }
}

/// Log a rejected request; the batch carries on
pub(crate) fn log_rejection(line: u64, check_number: &str, error: &crate::types::DepositError) {
    tracing::warn!(line, check_number, error = %error, "deposit rejected");
}

/// Log the totals once a batch has been fully processed
pub(crate) fn log_summary(processed: usize, specialist: usize, regulatory: usize) {
    tracing::info!(
        processed,
        specialist_reviews = specialist,
        regulatory_reviews = regulatory,
        "deposit batch complete"
    );
}
