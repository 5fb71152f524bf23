//! Synchronous processing strategy
//!
//! Single-threaded implementation of the ProcessingStrategy trait. Records are
//! streamed from the CSV file one at a time and each is processed to its
//! terminal outcome before the next is read.
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Deposit handling to `DepositOrchestrator` (business logic)
//! - CSV output to `csv_format::write_outcomes_csv` (format handling)

use crate::core::{DepositOrchestrator, ReviewQueue, ReviewThresholds};
use crate::io::csv_format::write_outcomes_csv;
use crate::io::sync_reader::SyncReader;
use crate::strategy::{log_rejection, log_summary, ProcessingStrategy};
use crate::types::{DepositOutcome, ProcessingResult};
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// # Examples
///
/// ```no_run
/// use check_deposit_engine::core::ReviewThresholds;
/// use check_deposit_engine::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(ReviewThresholds::default());
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("deposits.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncProcessingStrategy {
    thresholds: ReviewThresholds,
}

impl SyncProcessingStrategy {
    pub fn new(thresholds: ReviewThresholds) -> Self {
        Self { thresholds }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Process deposits from input file and write outcomes to output
    ///
    /// Fatal errors (file not found, I/O errors) are returned immediately.
    /// Malformed rows and rejected deposits are logged and processing continues.
    fn process(&self, input_path: &Path, output: &mut dyn Write) -> Result<(), String> {
        let mut orchestrator = DepositOrchestrator::with_thresholds(self.thresholds);
        let reader = SyncReader::new(input_path)?;

        let mut results = Vec::new();
        for result in reader {
            match result {
                Ok(record) => {
                    let outcome = orchestrator.process(record.request.clone());
                    if let DepositOutcome::Rejected(error) = &outcome {
                        log_rejection(record.line, &record.request.check_number, error);
                    }
                    results.push(ProcessingResult { record, outcome });
                }
                Err(e) => {
                    tracing::warn!(error = %e, "skipping malformed deposit record");
                }
            }
        }

        log_summary(
            results.len(),
            orchestrator.specialist_reviews().len(),
            orchestrator.regulatory_reviews().len(),
        );

        write_outcomes_csv(&results, output)?;

        Ok(())
    }
}
