//! Thread-safe review registry for concurrent deposit processing
//!
//! This module provides the `ConcurrentReviewRegistry` struct, the shared
//! counterpart of [`ReviewRegistry`](crate::core::ReviewRegistry).
//!
//! # Design
//!
//! Entries live in a `DashMap`, which locks per shard. Each write is a single
//! `insert`, so concurrent submissions for different check numbers never lose
//! an update, and submissions for the same check number are serialized with
//! the last writer winning.

use crate::core::traits::ReviewQueue;
use crate::types::{CheckNumber, ReviewTier};
use dashmap::DashMap;
use rust_decimal::Decimal;

/// Thread-safe review registry for a single tier
///
/// All methods take `&self`; share it across tasks with `Arc`.
#[derive(Debug)]
pub struct ConcurrentReviewRegistry {
    tier: ReviewTier,
    entries: DashMap<CheckNumber, Decimal>,
}

impl ConcurrentReviewRegistry {
    /// Create a new empty registry for the given tier
    pub fn new(tier: ReviewTier) -> Self {
        Self {
            tier,
            entries: DashMap::new(),
        }
    }

    pub fn tier(&self) -> ReviewTier {
        self.tier
    }

    /// Record a check for review, returning the amount it replaced (if any)
    pub fn submit(&self, check_number: &str, amount: Decimal) -> Option<Decimal> {
        self.entries.insert(check_number.to_string(), amount)
    }

    pub fn contains(&self, check_number: &str) -> bool {
        self.entries.contains_key(check_number)
    }

    pub fn amount_for(&self, check_number: &str) -> Option<Decimal> {
        self.entries.get(check_number).map(|entry| *entry.value())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Snapshot of all entries sorted by check number
    ///
    /// Entries submitted while the snapshot is taken may or may not appear.
    pub fn entries(&self) -> Vec<(CheckNumber, Decimal)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

impl ReviewQueue for ConcurrentReviewRegistry {
    fn submit(&mut self, check_number: &str, amount: Decimal) -> Option<Decimal> {
        ConcurrentReviewRegistry::submit(self, check_number, amount)
    }

    fn contains(&self, check_number: &str) -> bool {
        ConcurrentReviewRegistry::contains(self, check_number)
    }

    fn amount_for(&self, check_number: &str) -> Option<Decimal> {
        ConcurrentReviewRegistry::amount_for(self, check_number)
    }

    fn len(&self) -> usize {
        ConcurrentReviewRegistry::len(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_submit_and_lookup() {
        let registry = ConcurrentReviewRegistry::new(ReviewTier::Specialist);

        assert!(registry.is_empty());
        assert_eq!(registry.submit("A1", Decimal::from(150_000)), None);
        assert!(registry.contains("A1"));
        assert_eq!(registry.amount_for("A1"), Some(Decimal::from(150_000)));
        assert_eq!(registry.tier(), ReviewTier::Specialist);
    }

    #[test]
    fn test_resubmission_overwrites() {
        let registry = ConcurrentReviewRegistry::new(ReviewTier::Regulatory);

        registry.submit("A1", Decimal::from(2_000_000));
        let previous = registry.submit("A1", Decimal::from(3_000_000));

        assert_eq!(previous, Some(Decimal::from(2_000_000)));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.amount_for("A1"), Some(Decimal::from(3_000_000)));
    }

    #[test]
    fn test_concurrent_submissions_are_not_lost() {
        let registry = Arc::new(ConcurrentReviewRegistry::new(ReviewTier::Specialist));

        let mut handles = vec![];
        for worker in 0..8 {
            let registry = Arc::clone(&registry);
            handles.push(thread::spawn(move || {
                for i in 0..100 {
                    registry.submit(&format!("W{}-{}", worker, i), Decimal::from(100_001 + i));
                }
            }));
        }

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(registry.len(), 800);
        assert_eq!(registry.amount_for("W3-42"), Some(Decimal::from(100_043)));
    }

    #[test]
    fn test_usable_through_review_queue_trait() {
        fn submit_twice<Q: ReviewQueue>(queue: &mut Q) {
            queue.submit("T1", Decimal::from(1));
            queue.submit("T1", Decimal::from(2));
        }

        let mut registry = ConcurrentReviewRegistry::new(ReviewTier::Specialist);
        submit_twice(&mut registry);

        assert_eq!(ReviewQueue::len(&registry), 1);
        assert_eq!(registry.amount_for("T1"), Some(Decimal::from(2)));
    }
}
