//! Error types for the Check Deposit Engine
//!
//! Two layers of errors exist:
//!
//! - [`ClassifiedError`] is what the validator returns. It mixes genuine
//!   failures with escalation signals (specialist / regulatory review).
//! - [`DepositError`] is what the orchestrator propagates to its caller. Only
//!   terminal failures reach this type; escalations are absorbed into a
//!   registry write and a provisional confirmation.

use thiserror::Error;

/// Reason a deposit request was rejected as caller-fixable bad input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInputReason {
    #[error("empty check number")]
    EmptyCheckNumber,

    #[error("amount cannot be negative")]
    NegativeAmount,

    #[error("amount cannot be zero")]
    ZeroAmount,
}

/// Classification produced by the validator for every non-clean request
///
/// Exactly one variant applies per failure. Branching on this enum replaces
/// any inspection of message text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifiedError {
    /// Caller-fixable input problem
    #[error("bad input: {0}")]
    InvalidInput(InvalidInputReason),

    /// Amount large enough to need a specialist to look at it
    #[error("suspicious activity, need specialist review")]
    RequiresSpecialistReview,

    /// Amount large enough to be escalated to the regulator
    #[error("suspicious activity, regulatory review required")]
    RequiresRegulatoryReview,

    /// Catch-all for classifications the orchestrator does not know about
    ///
    /// The built-in rule set never produces this.
    #[error("{0}")]
    Unexpected(String),
}

/// Error propagated to the caller of `perform_deposit`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DepositError {
    /// Rejected input, wrapped with a hint for the operator
    #[error("fix the amount: bad input: {0}")]
    InvalidInput(InvalidInputReason),

    /// A classification the orchestrator could not handle
    #[error("unexpected error: {0}")]
    Unexpected(String),
}

impl DepositError {
    /// Create an Unexpected error from any displayable cause
    pub fn unexpected(cause: impl std::fmt::Display) -> Self {
        DepositError::Unexpected(cause.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::error::Error as _;

    #[rstest]
    #[case::empty_check(
        ClassifiedError::InvalidInput(InvalidInputReason::EmptyCheckNumber),
        "bad input: empty check number"
    )]
    #[case::negative(
        ClassifiedError::InvalidInput(InvalidInputReason::NegativeAmount),
        "bad input: amount cannot be negative"
    )]
    #[case::zero(
        ClassifiedError::InvalidInput(InvalidInputReason::ZeroAmount),
        "bad input: amount cannot be zero"
    )]
    #[case::specialist(
        ClassifiedError::RequiresSpecialistReview,
        "suspicious activity, need specialist review"
    )]
    #[case::regulatory(
        ClassifiedError::RequiresRegulatoryReview,
        "suspicious activity, regulatory review required"
    )]
    #[case::unexpected(ClassifiedError::Unexpected("ledger offline".to_string()), "ledger offline")]
    fn test_classified_error_display(#[case] error: ClassifiedError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_input(
        DepositError::InvalidInput(InvalidInputReason::ZeroAmount),
        "fix the amount: bad input: amount cannot be zero"
    )]
    #[case::unexpected(
        DepositError::unexpected("ledger offline"),
        "unexpected error: ledger offline"
    )]
    fn test_deposit_error_display(#[case] error: DepositError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn test_invalid_input_reason_reported_once() {
        let error = DepositError::InvalidInput(InvalidInputReason::NegativeAmount);

        assert!(error.source().is_none());
        assert_eq!(error.to_string().matches("amount cannot be negative").count(), 1);
    }

    #[test]
    fn test_zero_and_negative_are_distinguishable() {
        assert_ne!(
            InvalidInputReason::ZeroAmount.to_string(),
            InvalidInputReason::NegativeAmount.to_string()
        );
    }
}
