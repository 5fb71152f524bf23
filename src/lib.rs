//! Check Deposit Engine Library
//! # Overview
//!
//! This library validates check deposits, classifies them by risk tier and
//! routes escalated ones into review registries. A CSV driver runs whole
//! batches through either a sync or a concurrent async strategy.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (requests, tokens, outcomes, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::validator`] - Input validation and risk classification
//!   - [`core::orchestrator`] - Routes verdicts to tokens, registries and errors
//!   - [`core::review_registry`] - Deposits awaiting specialist or regulatory review
//! - [`io`] - CSV input and outcome output
//! - [`strategy`] - Pluggable processing pipelines
//! - [`roles`] - Role capabilities (develop, deploy, speak)
//!
//! # Outcomes
//!
//! Every request ends in exactly one of:
//!
//! - **Cleared**: a `CONF-<check>` token
//! - **Specialist review**: amount above 100,000, a provisional `FAKECONF-<check>` token
//! - **Regulatory review**: amount above 1,000,000, a provisional `FAKECONF-<check>` token
//! - **Rejected**: empty check number, negative or zero amount
//!
//! ```
//! use check_deposit_engine::DepositOrchestrator;
//! use rust_decimal::Decimal;
//!
//! let mut orchestrator = DepositOrchestrator::new();
//! let token = orchestrator
//!     .perform_deposit("12345678", Decimal::new(12345, 2))
//!     .unwrap();
//! assert_eq!(token.to_string(), "CONF-12345678");
//! ```

pub mod cli;
pub mod core;
pub mod io;
pub mod roles;
pub mod strategy;
pub mod types;

pub use core::{validate, DepositOrchestrator, ReviewRegistry, ReviewThresholds};
pub use io::write_outcomes_csv;
pub use types::{
    CheckNumber, ClassifiedError, ConfirmationToken, DepositError, DepositOutcome,
    DepositRequest, ReviewTier,
};
