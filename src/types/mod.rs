//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `deposit`: Deposit requests, confirmation tokens and outcomes
//! - `error`: Classified and propagated error types

pub mod deposit;
pub mod error;

pub use deposit::{
    CheckNumber, ConfirmationToken, DepositOutcome, DepositRecord, DepositRequest,
    ProcessingResult, ReviewTier, TokenKind,
};
pub use error::{ClassifiedError, DepositError, InvalidInputReason};
