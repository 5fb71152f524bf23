//! Asynchronous batch processing strategy
//!
//! Multi-threaded implementation of the ProcessingStrategy trait. Deposits are
//! read in batches and each batch is fanned out over tokio tasks, partitioned by
//! check number.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     ├── BatchProcessor (check-number partitioning + tasks)
//!     └── AsyncDepositOrchestrator
//!         ├── ConcurrentReviewRegistry (specialist)
//!         └── ConcurrentReviewRegistry (regulatory)
//! ```
//!
//! Batches are processed one after another, so requests sharing a check number
//! keep their input order across batch boundaries too.

use crate::core::r#async::{AsyncDepositOrchestrator, BatchProcessor, ConcurrentReviewRegistry};
use crate::core::ReviewThresholds;
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::write_outcomes_csv;
use crate::strategy::{log_rejection, log_summary, ProcessingStrategy};
use crate::types::{DepositOutcome, ReviewTier};
use std::io::Write;
use std::path::Path;
use std::sync::Arc;

/// Configuration for batch processing
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of deposits per batch
    pub batch_size: usize,
    /// Number of worker threads processing a batch
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig with custom values
    ///
    /// Zero values are replaced by the defaults with a warning.
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            tracing::warn!(
                batch_size,
                default = default.batch_size,
                "invalid batch_size, using default"
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            tracing::warn!(
                max_concurrent_batches,
                default = default.max_concurrent_batches,
                "invalid max_concurrent_batches, using default"
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
    thresholds: ReviewThresholds,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig, thresholds: ReviewThresholds) -> Self {
        Self { config, thresholds }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process deposits from input file and write outcomes to output
    ///
    /// 1. Builds a tokio multi-threaded runtime
    /// 2. Reads deposits in batches using AsyncReader
    /// 3. Processes each batch (partitions in parallel) before reading the next
    /// 4. Writes all outcomes in input order
    ///
    /// Fatal errors (file not found, runtime errors) are returned immediately.
    /// Malformed rows and rejected deposits are logged and processing continues.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(|e| format!("Failed to create tokio runtime: {}", e))?;

        runtime.block_on(async {
            let specialist_reviews =
                Arc::new(ConcurrentReviewRegistry::new(ReviewTier::Specialist));
            let regulatory_reviews =
                Arc::new(ConcurrentReviewRegistry::new(ReviewTier::Regulatory));
            let orchestrator = AsyncDepositOrchestrator::new(
                self.thresholds,
                Arc::clone(&specialist_reviews),
                Arc::clone(&regulatory_reviews),
            );
            let processor = BatchProcessor::new(orchestrator);

            let file = tokio::fs::File::open(input_path)
                .await
                .map_err(|e| format!("Failed to open file '{}': {}", input_path.display(), e))?;

            // csv-async reads through the futures AsyncRead traits
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut results = Vec::new();
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }

                for result in processor.process_batch(batch).await {
                    if let DepositOutcome::Rejected(error) = &result.outcome {
                        log_rejection(
                            result.record.line,
                            &result.record.request.check_number,
                            error,
                        );
                    }
                    results.push(result);
                }
            }

            log_summary(
                results.len(),
                specialist_reviews.len(),
                regulatory_reviews.len(),
            );

            write_outcomes_csv(&results, output)?;

            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategy::SyncProcessingStrategy;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_batch_config_zero_values_fall_back() {
        let config = BatchConfig::new(0, 0);
        let default = BatchConfig::default();

        assert_eq!(config.batch_size, default.batch_size);
        assert_eq!(config.max_concurrent_batches, default.max_concurrent_batches);
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let strategy =
            AsyncProcessingStrategy::new(BatchConfig::default(), ReviewThresholds::default());
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.csv"), &mut output);
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Failed to open file"));
    }

    #[test]
    fn test_async_strategy_matches_sync_across_batches() {
        // Repeated check numbers spanning several small batches
        let csv_content = "check_number,amount\n\
                          X1,150000\n\
                          A1,10\n\
                          X1,0\n\
                          Y1,2000000\n\
                          X1,175000\n\
                          ,5\n\
                          Z1,bogus\n\
                          Y1,999999.99\n";
        let file = create_temp_csv(csv_content);

        let async_strategy =
            AsyncProcessingStrategy::new(BatchConfig::new(2, 4), ReviewThresholds::default());
        let mut async_output = Vec::new();
        async_strategy
            .process(file.path(), &mut async_output)
            .unwrap();

        let mut sync_output = Vec::new();
        SyncProcessingStrategy::default()
            .process(file.path(), &mut sync_output)
            .unwrap();

        assert_eq!(
            String::from_utf8(async_output).unwrap(),
            String::from_utf8(sync_output).unwrap()
        );
    }
}
