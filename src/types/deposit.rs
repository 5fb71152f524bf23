//! Deposit-related types for the Check Deposit Engine
//!
//! This module defines the deposit request, the confirmation token handed back
//! to callers, and the terminal outcome of processing a single request.

use super::error::DepositError;
use rust_decimal::Decimal;
use std::fmt;

/// Check identifier
///
/// Free-form string supplied by the caller. It is never transformed; tokens
/// embed it verbatim.
pub type CheckNumber = String;

/// A single check deposit as supplied by the caller
///
/// Constructed per call and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositRequest {
    /// The check identifier (must be non-empty to be accepted)
    pub check_number: CheckNumber,

    /// The deposited amount
    ///
    /// Signed on purpose: negative and zero amounts are representable so the
    /// validator can reject them with a specific reason.
    pub amount: Decimal,
}

impl DepositRequest {
    /// Create a new deposit request
    pub fn new(check_number: impl Into<CheckNumber>, amount: Decimal) -> Self {
        DepositRequest {
            check_number: check_number.into(),
            amount,
        }
    }
}

/// Deposit request read from batch input
///
/// Carries the input line the request came from so that results produced
/// out of order can be reported in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct DepositRecord {
    /// Line number in the input file (the header is line 1)
    pub line: u64,

    /// The request itself
    pub request: DepositRequest,
}

/// Which path produced a confirmation token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Fully cleared deposit, rendered as `CONF-<check>`
    Cleared,

    /// Provisionally accepted pending review, rendered as `FAKECONF-<check>`
    Provisional,
}

impl TokenKind {
    /// Prefix used when rendering a token of this kind
    pub fn prefix(self) -> &'static str {
        match self {
            TokenKind::Cleared => "CONF-",
            TokenKind::Provisional => "FAKECONF-",
        }
    }
}

/// Confirmation token returned to the caller
///
/// The two formats are disjoint: the kind alone decides the prefix, and the
/// check number follows unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConfirmationToken {
    kind: TokenKind,
    check_number: CheckNumber,
}

impl ConfirmationToken {
    /// Token for a fully cleared deposit
    pub fn cleared(check_number: impl Into<CheckNumber>) -> Self {
        ConfirmationToken {
            kind: TokenKind::Cleared,
            check_number: check_number.into(),
        }
    }

    /// Token for a deposit accepted pending review
    pub fn provisional(check_number: impl Into<CheckNumber>) -> Self {
        ConfirmationToken {
            kind: TokenKind::Provisional,
            check_number: check_number.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn check_number(&self) -> &str {
        &self.check_number
    }

    /// Whether the deposit behind this token is still awaiting review
    pub fn is_provisional(&self) -> bool {
        self.kind == TokenKind::Provisional
    }
}

impl fmt::Display for ConfirmationToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.check_number)
    }
}

/// Review tier an escalated deposit is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewTier {
    /// Amount above the specialist threshold
    Specialist,

    /// Amount above the regulatory threshold
    Regulatory,
}

impl ReviewTier {
    /// Stable lowercase label used in output and logs
    pub fn as_str(self) -> &'static str {
        match self {
            ReviewTier::Specialist => "specialist_review",
            ReviewTier::Regulatory => "regulatory_review",
        }
    }
}

impl fmt::Display for ReviewTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of a single deposit request
///
/// Every request ends in exactly one of these states:
///
/// ```text
/// Received ──validate──┬── Cleared
///                      ├── Escalated(tier)
///                      └── Rejected
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DepositOutcome {
    /// Validation passed, deposit cleared
    Cleared(ConfirmationToken),

    /// Deposit recorded in a review registry and provisionally confirmed
    Escalated {
        tier: ReviewTier,
        token: ConfirmationToken,
    },

    /// Deposit refused; the error is surfaced to the caller
    Rejected(DepositError),
}

impl DepositOutcome {
    /// Stable status label used in CSV output
    pub fn status(&self) -> &'static str {
        match self {
            DepositOutcome::Cleared(_) => "cleared",
            DepositOutcome::Escalated { tier, .. } => tier.as_str(),
            DepositOutcome::Rejected(_) => "rejected",
        }
    }

    /// Collapse the outcome into the caller-facing result
    ///
    /// Escalations are success-shaped: the caller receives the provisional
    /// token and no error.
    pub fn into_result(self) -> Result<ConfirmationToken, DepositError> {
        match self {
            DepositOutcome::Cleared(token) | DepositOutcome::Escalated { token, .. } => Ok(token),
            DepositOutcome::Rejected(error) => Err(error),
        }
    }
}

/// A processed record paired with its terminal outcome
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// The record that was processed
    pub record: DepositRecord,

    /// Its terminal outcome
    pub outcome: DepositOutcome,
}
