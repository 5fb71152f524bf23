//! Deposit orchestration for concurrent batch processing
//!
//! This module provides the `AsyncDepositOrchestrator` struct, which applies the
//! same routing as [`DepositOrchestrator`](crate::core::DepositOrchestrator) but
//! records escalations in shared `ConcurrentReviewRegistry` instances.
//!
//! # Architecture
//!
//! ```text
//! AsyncDepositOrchestrator
//!     ├── Arc<V: DepositValidator>           (pure, shared read-only)
//!     ├── Arc<ConcurrentReviewRegistry>      (specialist tier)
//!     └── Arc<ConcurrentReviewRegistry>      (regulatory tier)
//! ```
//!
//! The orchestrator is cheap to clone; clones share the same registries.

use std::sync::Arc;

use rust_decimal::Decimal;

use super::ConcurrentReviewRegistry;
use crate::core::orchestrator::settle;
use crate::core::traits::DepositValidator;
use crate::core::validator::{ReviewThresholds, ThresholdValidator};
use crate::types::{ConfirmationToken, DepositError, DepositOutcome, DepositRequest, ReviewTier};

/// Thread-safe deposit orchestrator
#[derive(Debug)]
pub struct AsyncDepositOrchestrator<V = ThresholdValidator> {
    validator: Arc<V>,
    specialist_reviews: Arc<ConcurrentReviewRegistry>,
    regulatory_reviews: Arc<ConcurrentReviewRegistry>,
}

impl<V> Clone for AsyncDepositOrchestrator<V> {
    fn clone(&self) -> Self {
        Self {
            validator: Arc::clone(&self.validator),
            specialist_reviews: Arc::clone(&self.specialist_reviews),
            regulatory_reviews: Arc::clone(&self.regulatory_reviews),
        }
    }
}

impl AsyncDepositOrchestrator {
    /// Create an orchestrator with the given thresholds over shared registries
    ///
    /// # Arguments
    ///
    /// * `thresholds` - Escalation thresholds for the validator
    /// * `specialist_reviews` - Registry receiving specialist escalations
    /// * `regulatory_reviews` - Registry receiving regulatory escalations
    pub fn new(
        thresholds: ReviewThresholds,
        specialist_reviews: Arc<ConcurrentReviewRegistry>,
        regulatory_reviews: Arc<ConcurrentReviewRegistry>,
    ) -> Self {
        Self::from_parts(
            ThresholdValidator::new(thresholds),
            specialist_reviews,
            regulatory_reviews,
        )
    }
}

impl<V: DepositValidator> AsyncDepositOrchestrator<V> {
    pub fn from_parts(
        validator: V,
        specialist_reviews: Arc<ConcurrentReviewRegistry>,
        regulatory_reviews: Arc<ConcurrentReviewRegistry>,
    ) -> Self {
        Self {
            validator: Arc::new(validator),
            specialist_reviews,
            regulatory_reviews,
        }
    }

    /// Process a request to its terminal outcome
    ///
    /// Safe to call from many tasks at once.
    pub fn process(&self, request: DepositRequest) -> DepositOutcome {
        let verdict = self.validator.validate(&request);

        settle(request, verdict, |tier, check_number, amount| {
            let registry = match tier {
                ReviewTier::Specialist => &self.specialist_reviews,
                ReviewTier::Regulatory => &self.regulatory_reviews,
            };
            registry.submit(check_number, amount);
        })
    }

    /// Deposit a check; see [`DepositOrchestrator::perform_deposit`](crate::core::DepositOrchestrator::perform_deposit)
    pub fn perform_deposit(
        &self,
        check_number: &str,
        amount: Decimal,
    ) -> Result<ConfirmationToken, DepositError> {
        self.process(DepositRequest::new(check_number, amount))
            .into_result()
    }

    pub fn specialist_reviews(&self) -> &ConcurrentReviewRegistry {
        &self.specialist_reviews
    }

    pub fn regulatory_reviews(&self) -> &ConcurrentReviewRegistry {
        &self.regulatory_reviews
    }

    pub fn is_under_specialist_review(&self, check_number: &str) -> bool {
        self.specialist_reviews.contains(check_number)
    }

    pub fn is_under_regulatory_review(&self, check_number: &str) -> bool {
        self.regulatory_reviews.contains(check_number)
    }
}
