//! Core business logic module
//!
//! This module contains the deposit processing components:
//! - `traits` - Seams for validators and review queues
//! - `validator` - Rule-based validation and risk classification
//! - `review_registry` - In-memory registry of deposits awaiting review
//! - `orchestrator` - Routes validator verdicts to registries, tokens and errors
//! - `async` - Thread-safe counterparts and the batch processor

pub mod r#async;
pub mod orchestrator;
pub mod review_registry;
pub mod traits;
pub mod validator;

pub use orchestrator::DepositOrchestrator;
pub use r#async::{AsyncDepositOrchestrator, BatchProcessor, ConcurrentReviewRegistry};
pub use review_registry::ReviewRegistry;
pub use traits::{DepositValidator, ReviewQueue};
pub use validator::{
    validate, ReviewThresholds, ThresholdValidator, REGULATORY_REVIEW_THRESHOLD,
    SPECIALIST_REVIEW_THRESHOLD,
};
