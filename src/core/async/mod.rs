//! Concurrent implementations of core components
//!
//! This module provides thread-safe counterparts of the orchestrator and the
//! review registries, plus the batch processor that fans work out over tokio
//! tasks.
//!
//! # Architecture
//!
//! - **ConcurrentReviewRegistry**: review registry backed by DashMap
//! - **AsyncDepositOrchestrator**: routes requests into shared registries
//! - **BatchProcessor**: partitions batches by check number and processes
//!   partitions concurrently
//!
//! # Thread Safety
//!
//! - Requests for different check numbers proceed in parallel
//! - Requests for the same check number are processed in input order
//! - No global locks; DashMap locks per shard

pub mod batch_processor;
pub mod orchestrator;
pub mod review_registry;

pub use batch_processor::BatchProcessor;
pub use orchestrator::AsyncDepositOrchestrator;
pub use review_registry::ConcurrentReviewRegistry;
