//! Batch processing with check-number partitioning
//!
//! This module provides the `BatchProcessor` struct, which processes a batch of
//! deposit records concurrently while keeping requests for the same check
//! number in input order.
//!
//! # Design
//!
//! A batch is partitioned by check number. Each partition is processed
//! sequentially on its own tokio task, so two requests for the same check
//! number resolve last-writer-wins in the order they were read. Partitions for
//! different check numbers run in parallel.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     └── AsyncDepositOrchestrator  (shared, cloned per task)
//! ```

use std::collections::HashMap;

use super::AsyncDepositOrchestrator;
use crate::core::traits::DepositValidator;
use crate::types::{CheckNumber, DepositRecord, ProcessingResult};

/// Batch processor with check-number partitioning
#[derive(Debug)]
pub struct BatchProcessor<V = crate::core::ThresholdValidator> {
    orchestrator: AsyncDepositOrchestrator<V>,
}

impl<V> Clone for BatchProcessor<V> {
    fn clone(&self) -> Self {
        Self {
            orchestrator: self.orchestrator.clone(),
        }
    }
}

impl<V> BatchProcessor<V>
where
    V: DepositValidator + Send + Sync + 'static,
{
    /// Create a new BatchProcessor over a shared orchestrator
    pub fn new(orchestrator: AsyncDepositOrchestrator<V>) -> Self {
        Self { orchestrator }
    }

    /// Partition a batch by check number
    ///
    /// # Guarantees
    ///
    /// - Each record appears in exactly one partition
    /// - Records within a partition keep their original order
    pub fn partition_by_check_number(
        &self,
        batch: Vec<DepositRecord>,
    ) -> HashMap<CheckNumber, Vec<DepositRecord>> {
        let mut partitions: HashMap<CheckNumber, Vec<DepositRecord>> = HashMap::new();

        for record in batch {
            partitions
                .entry(record.request.check_number.clone())
                .or_default()
                .push(record);
        }

        partitions
    }

    /// Process the records of one partition sequentially, in order
    pub async fn process_partition(&self, records: Vec<DepositRecord>) -> Vec<ProcessingResult> {
        let mut results = Vec::with_capacity(records.len());

        for record in records {
            let outcome = self.orchestrator.process(record.request.clone());
            results.push(ProcessingResult { record, outcome });
        }

        results
    }

    /// Process a batch of records
    ///
    /// Partitions are processed concurrently on tokio tasks. Results are
    /// returned sorted by input line, so callers see them in input order.
    /// A panicking task is logged and its records are dropped from the result.
    pub async fn process_batch(&self, batch: Vec<DepositRecord>) -> Vec<ProcessingResult> {
        let partitions = self.partition_by_check_number(batch);

        let mut tasks = Vec::with_capacity(partitions.len());
        for (_check_number, records) in partitions {
            let processor = self.clone();
            tasks.push(tokio::spawn(async move {
                processor.process_partition(records).await
            }));
        }

        let mut results = Vec::new();
        for task in tasks {
            match task.await {
                Ok(partition_results) => results.extend(partition_results),
                Err(e) => tracing::error!(error = %e, "deposit partition task failed"),
            }
        }

        results.sort_by_key(|result| result.record.line);
        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::r#async::ConcurrentReviewRegistry;
    use crate::core::ReviewThresholds;
    use crate::types::{DepositRequest, ReviewTier};
    use rust_decimal::Decimal;
    use std::sync::Arc;

    fn processor() -> BatchProcessor {
        BatchProcessor::new(AsyncDepositOrchestrator::new(
            ReviewThresholds::default(),
            Arc::new(ConcurrentReviewRegistry::new(ReviewTier::Specialist)),
            Arc::new(ConcurrentReviewRegistry::new(ReviewTier::Regulatory)),
        ))
    }

    fn record(line: u64, check: &str, amount: i64) -> DepositRecord {
        DepositRecord {
            line,
            request: DepositRequest::new(check, Decimal::from(amount)),
        }
    }

    #[test]
    fn test_partition_empty_batch() {
        let partitions = processor().partition_by_check_number(vec![]);
        assert!(partitions.is_empty());
    }

    #[test]
    fn test_partition_keeps_order_within_check_number() {
        let batch = vec![
            record(1, "A", 10),
            record(2, "B", 20),
            record(3, "A", 30),
            record(4, "A", 40),
        ];

        let partitions = processor().partition_by_check_number(batch);

        assert_eq!(partitions.len(), 2);
        let lines: Vec<u64> = partitions["A"].iter().map(|r| r.line).collect();
        assert_eq!(lines, vec![1, 3, 4]);
        assert_eq!(partitions["B"].len(), 1);
    }

    #[tokio::test]
    async fn test_process_batch_returns_results_in_input_order() {
        let batch = vec![
            record(1, "C", 100),
            record(2, "A", 200_000),
            record(3, "B", 0),
            record(4, "D", 2_000_000),
        ];

        let results = processor().process_batch(batch).await;

        let statuses: Vec<(u64, &str)> = results
            .iter()
            .map(|r| (r.record.line, r.outcome.status()))
            .collect();
        assert_eq!(
            statuses,
            vec![
                (1, "cleared"),
                (2, "specialist_review"),
                (3, "rejected"),
                (4, "regulatory_review"),
            ]
        );
    }

    #[tokio::test]
    async fn test_same_check_number_is_last_writer_wins() {
        let processor = processor();
        let batch = vec![
            record(1, "X1", 150_000),
            record(2, "Y1", 5),
            record(3, "X1", 175_000),
            record(4, "X1", 125_000),
        ];

        processor.process_batch(batch).await;

        let registry = processor.orchestrator.specialist_reviews();
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.amount_for("X1"), Some(Decimal::from(125_000)));
    }

    #[tokio::test]
    async fn test_many_check_numbers_in_parallel() {
        let processor = processor();
        let batch: Vec<_> = (0..200)
            .map(|i| record(i + 1, &format!("CHK{}", i), 100_001 + i as i64))
            .collect();

        let results = processor.process_batch(batch).await;

        assert_eq!(results.len(), 200);
        assert_eq!(processor.orchestrator.specialist_reviews().len(), 200);
        assert!(processor.orchestrator.regulatory_reviews().is_empty());
    }
}
