//! Deposit orchestration
//!
//! This module provides the DepositOrchestrator that drives a deposit request
//! through the validator and decides what happens to each classification:
//!
//! - Cleared deposits return their `CONF-` token unchanged
//! - Escalations are recorded in the matching review registry and answered
//!   with a provisional `FAKECONF-` token (a success from the caller's side)
//! - Invalid input and unexpected classifications are propagated as errors
//!
//! The orchestrator is the only layer that decides which classifications are
//! terminal. Each request performs at most one registry write.

use crate::core::review_registry::ReviewRegistry;
use crate::core::traits::{DepositValidator, ReviewQueue};
use crate::core::validator::{ReviewThresholds, ThresholdValidator};
use crate::types::{
    ClassifiedError, ConfirmationToken, DepositError, DepositOutcome, DepositRequest, ReviewTier,
};
use rust_decimal::Decimal;

/// Turn a validator verdict into the terminal outcome of a request
///
/// `submit` is invoked exactly once for an escalation and never otherwise.
pub(crate) fn settle<F>(
    request: DepositRequest,
    verdict: Result<ConfirmationToken, ClassifiedError>,
    submit: F,
) -> DepositOutcome
where
    F: FnOnce(ReviewTier, &str, Decimal),
{
    match verdict {
        Ok(token) => DepositOutcome::Cleared(token),
        Err(ClassifiedError::InvalidInput(reason)) => {
            DepositOutcome::Rejected(DepositError::InvalidInput(reason))
        }
        Err(ClassifiedError::RequiresSpecialistReview) => {
            escalate(ReviewTier::Specialist, request, submit)
        }
        Err(ClassifiedError::RequiresRegulatoryReview) => {
            escalate(ReviewTier::Regulatory, request, submit)
        }
        Err(ClassifiedError::Unexpected(cause)) => {
            DepositOutcome::Rejected(DepositError::Unexpected(cause))
        }
    }
}

fn escalate<F>(tier: ReviewTier, request: DepositRequest, submit: F) -> DepositOutcome
where
    F: FnOnce(ReviewTier, &str, Decimal),
{
    submit(tier, &request.check_number, request.amount);
    tracing::debug!(
        check_number = %request.check_number,
        amount = %request.amount,
        %tier,
        "deposit submitted for review"
    );

    DepositOutcome::Escalated {
        tier,
        token: ConfirmationToken::provisional(request.check_number),
    }
}

/// Deposit orchestrator
///
/// Owns the validator and both review registries. Registries start empty and
/// live as long as the orchestrator.
#[derive(Debug, Clone)]
pub struct DepositOrchestrator<V = ThresholdValidator, Q = ReviewRegistry> {
    validator: V,
    specialist_reviews: Q,
    regulatory_reviews: Q,
}

impl DepositOrchestrator {
    /// Create an orchestrator with the default thresholds and empty registries
    pub fn new() -> Self {
        Self::with_thresholds(ReviewThresholds::default())
    }

    /// Create an orchestrator with custom thresholds and empty registries
    pub fn with_thresholds(thresholds: ReviewThresholds) -> Self {
        DepositOrchestrator {
            validator: ThresholdValidator::new(thresholds),
            specialist_reviews: ReviewRegistry::new(ReviewTier::Specialist),
            regulatory_reviews: ReviewRegistry::new(ReviewTier::Regulatory),
        }
    }
}

impl Default for DepositOrchestrator {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, Q> DepositOrchestrator<V, Q>
where
    V: DepositValidator,
    Q: ReviewQueue,
{
    /// Assemble an orchestrator from explicit parts
    pub fn from_parts(validator: V, specialist_reviews: Q, regulatory_reviews: Q) -> Self {
        DepositOrchestrator {
            validator,
            specialist_reviews,
            regulatory_reviews,
        }
    }

    /// Process a request to its terminal outcome
    pub fn process(&mut self, request: DepositRequest) -> DepositOutcome {
        let verdict = self.validator.validate(&request);
        let specialist = &mut self.specialist_reviews;
        let regulatory = &mut self.regulatory_reviews;

        settle(request, verdict, |tier, check_number, amount| {
            let registry = match tier {
                ReviewTier::Specialist => specialist,
                ReviewTier::Regulatory => regulatory,
            };
            registry.submit(check_number, amount);
        })
    }

    /// Deposit a check
    ///
    /// # Returns
    ///
    /// * `Ok(ConfirmationToken)` - `CONF-<check>` when cleared, `FAKECONF-<check>`
    ///   when recorded for specialist or regulatory review
    /// * `Err(DepositError::InvalidInput)` - empty check number, negative or zero amount
    /// * `Err(DepositError::Unexpected)` - any classification the orchestrator does not route
    pub fn perform_deposit(
        &mut self,
        check_number: &str,
        amount: Decimal,
    ) -> Result<ConfirmationToken, DepositError> {
        self.process(DepositRequest::new(check_number, amount))
            .into_result()
    }

    pub fn specialist_reviews(&self) -> &Q {
        &self.specialist_reviews
    }

    pub fn regulatory_reviews(&self) -> &Q {
        &self.regulatory_reviews
    }

    /// Whether the check is waiting for specialist review
    pub fn is_under_specialist_review(&self, check_number: &str) -> bool {
        self.specialist_reviews.contains(check_number)
    }

    /// Whether the check is waiting for regulatory review
    pub fn is_under_regulatory_review(&self, check_number: &str) -> bool {
        self.regulatory_reviews.contains(check_number)
    }
}
