//! Core traits for validation and review queues
//!
//! These traits are the seams between the orchestrator and the components it
//! drives, so alternative rule sets and registry backends can be swapped in
//! without touching the routing logic.

use crate::types::{ClassifiedError, ConfirmationToken, DepositRequest};
use rust_decimal::Decimal;

/// Trait for classifying a deposit request
///
/// Implementations must be pure: the same request always yields the same
/// result and nothing outside the validator is touched.
pub trait DepositValidator {
    /// Either clear the request or classify why it cannot be cleared
    fn validate(&self, request: &DepositRequest) -> Result<ConfirmationToken, ClassifiedError>;
}

/// Trait for a registry of deposits awaiting review
///
/// Keys are check numbers and are unique. Submitting a check number that is
/// already present replaces its amount.
pub trait ReviewQueue {
    /// Record a check for review, returning the amount it replaced (if any)
    fn submit(&mut self, check_number: &str, amount: Decimal) -> Option<Decimal>;

    /// Whether the check is awaiting review
    fn contains(&self, check_number: &str) -> bool;

    /// Amount recorded for the check
    fn amount_for(&self, check_number: &str) -> Option<Decimal>;

    /// Number of checks awaiting review
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
