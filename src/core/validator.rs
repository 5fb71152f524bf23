//! Deposit validation and risk classification
//!
//! The validator inspects a single deposit request and either clears it with a
//! `CONF-` token or classifies it. Rules are evaluated in a fixed order and the
//! first match wins:
//!
//! 1. Empty check number → invalid input
//! 2. Negative amount → invalid input
//! 3. Zero amount → invalid input
//! 4. Amount above the regulatory threshold → regulatory review
//! 5. Amount above the specialist threshold → specialist review
//! 6. Otherwise → cleared
//!
//! Threshold comparisons are strict, so an amount exactly equal to a threshold
//! is cleared rather than escalated.

use crate::core::traits::DepositValidator;
use crate::types::{ClassifiedError, ConfirmationToken, DepositRequest, InvalidInputReason};
use rust_decimal::Decimal;

/// Amounts strictly above this go to specialist review (100,000)
pub const SPECIALIST_REVIEW_THRESHOLD: Decimal = Decimal::from_parts(100_000, 0, 0, false, 0);

/// Amounts strictly above this go to regulatory review (1,000,000)
pub const REGULATORY_REVIEW_THRESHOLD: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Escalation thresholds applied by [`ThresholdValidator`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReviewThresholds {
    /// Amounts strictly above this need specialist review
    pub specialist: Decimal,
    /// Amounts strictly above this need regulatory review
    pub regulatory: Decimal,
}

impl Default for ReviewThresholds {
    fn default() -> Self {
        Self {
            specialist: SPECIALIST_REVIEW_THRESHOLD,
            regulatory: REGULATORY_REVIEW_THRESHOLD,
        }
    }
}

impl ReviewThresholds {
    /// Create thresholds with custom values
    ///
    /// Negative thresholds, or a specialist threshold above the regulatory
    /// one, are replaced by the defaults with a warning.
    pub fn new(specialist: Decimal, regulatory: Decimal) -> Self {
        if specialist.is_sign_negative() || regulatory.is_sign_negative() {
            tracing::warn!(
                %specialist,
                %regulatory,
                "review thresholds cannot be negative, using defaults"
            );
            return Self::default();
        }

        if specialist > regulatory {
            tracing::warn!(
                %specialist,
                %regulatory,
                "specialist threshold exceeds regulatory threshold, using defaults"
            );
            return Self::default();
        }

        Self {
            specialist,
            regulatory,
        }
    }
}

/// Rule-based validator driven by [`ReviewThresholds`]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThresholdValidator {
    thresholds: ReviewThresholds,
}

impl ThresholdValidator {
    pub fn new(thresholds: ReviewThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> ReviewThresholds {
        self.thresholds
    }

    /// Classify a check number and amount
    ///
    /// # Returns
    ///
    /// * `Ok(ConfirmationToken)` - `CONF-<check_number>` for a cleared deposit
    /// * `Err(ClassifiedError::InvalidInput)` - empty check number, negative or zero amount
    /// * `Err(ClassifiedError::RequiresRegulatoryReview)` - amount above the regulatory threshold
    /// * `Err(ClassifiedError::RequiresSpecialistReview)` - amount above the specialist threshold
    pub fn classify(
        &self,
        check_number: &str,
        amount: Decimal,
    ) -> Result<ConfirmationToken, ClassifiedError> {
        if check_number.is_empty() {
            return Err(ClassifiedError::InvalidInput(
                InvalidInputReason::EmptyCheckNumber,
            ));
        }

        if amount < Decimal::ZERO {
            return Err(ClassifiedError::InvalidInput(
                InvalidInputReason::NegativeAmount,
            ));
        }

        if amount.is_zero() {
            return Err(ClassifiedError::InvalidInput(InvalidInputReason::ZeroAmount));
        }

        // Regulatory first: its range sits inside the specialist one
        if amount > self.thresholds.regulatory {
            return Err(ClassifiedError::RequiresRegulatoryReview);
        }

        if amount > self.thresholds.specialist {
            return Err(ClassifiedError::RequiresSpecialistReview);
        }

        Ok(ConfirmationToken::cleared(check_number))
    }
}

impl DepositValidator for ThresholdValidator {
    fn validate(&self, request: &DepositRequest) -> Result<ConfirmationToken, ClassifiedError> {
        self.classify(&request.check_number, request.amount)
    }
}

/// Classify a deposit using the default thresholds
pub fn validate(check_number: &str, amount: Decimal) -> Result<ConfirmationToken, ClassifiedError> {
    ThresholdValidator::default().classify(check_number, amount)
}
