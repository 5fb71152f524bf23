//! In-memory registry of deposits awaiting review
//!
//! This module provides the ReviewRegistry component that records escalated
//! deposits for one review tier. The orchestrator owns one instance per tier
//! (specialist and regulatory).
//!
//! # Re-submission
//!
//! Check numbers are unique keys. Re-submitting a check number overwrites the
//! stored amount, so repeated submissions never produce duplicate entries.
//!
//! Entries are kept for the lifetime of the registry; nothing is evicted.

use crate::core::traits::ReviewQueue;
use crate::types::{CheckNumber, ReviewTier};
use rust_decimal::Decimal;
use std::collections::HashMap;

/// Review registry for a single tier
///
/// Maintains a HashMap of check number to submitted amount.
#[derive(Debug, Clone)]
pub struct ReviewRegistry {
    tier: ReviewTier,
    /// Map of check number to the most recently submitted amount
    entries: HashMap<CheckNumber, Decimal>,
}

impl ReviewRegistry {
    /// Create a new empty registry for the given tier
    pub fn new(tier: ReviewTier) -> Self {
        ReviewRegistry {
            tier,
            entries: HashMap::new(),
        }
    }

    pub fn tier(&self) -> ReviewTier {
        self.tier
    }

    /// Snapshot of all entries sorted by check number
    pub fn entries(&self) -> Vec<(CheckNumber, Decimal)> {
        let mut entries: Vec<_> = self
            .entries
            .iter()
            .map(|(check, amount)| (check.clone(), *amount))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

impl ReviewQueue for ReviewRegistry {
    fn submit(&mut self, check_number: &str, amount: Decimal) -> Option<Decimal> {
        self.entries.insert(check_number.to_string(), amount)
    }

    fn contains(&self, check_number: &str) -> bool {
        self.entries.contains_key(check_number)
    }

    fn amount_for(&self, check_number: &str) -> Option<Decimal> {
        self.entries.get(check_number).copied()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
