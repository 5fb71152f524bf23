//! Benchmark suite for comparing processing strategies
//!
//! This benchmark compares the performance of synchronous and asynchronous
//! processing strategies using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```
//!
//! # Benchmark Inputs
//!
//! Inputs are generated into temporary files before timing starts, at 100,
//! 10,000 and 100,000 deposit requests. Each input mixes cleared, escalated
//! and rejected requests over a pool of repeating check numbers.

use check_deposit_engine::cli::StrategyType;
use check_deposit_engine::core::ReviewThresholds;
use check_deposit_engine::strategy::{create_strategy, BatchConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const SIZES: &[usize] = &[100, 10_000, 100_000];

fn main() {
    divan::main();
}

/// Write `count` deposit requests to a temporary CSV file
fn generate_input(count: usize) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    writeln!(file, "check_number,amount").expect("Failed to write header");

    for i in 0..count {
        let amount = match i % 10 {
            0 => "0".to_string(),
            1 => "250000".to_string(),
            2 => "2500000".to_string(),
            3 => "-10".to_string(),
            n => format!("{}.{:02}", 100 * n, i % 100),
        };
        writeln!(file, "{:08},{}", i % 5_000, amount).expect("Failed to write record");
    }

    file.flush().expect("Failed to flush temp file");
    file
}

fn run(bencher: divan::Bencher, count: usize, strategy_type: StrategyType) {
    let input = generate_input(count);
    let config = match strategy_type {
        StrategyType::Sync => None,
        StrategyType::Async => Some(BatchConfig::default()),
    };
    let strategy = create_strategy(strategy_type, ReviewThresholds::default(), config);

    bencher.bench_local(|| {
        let mut output = Vec::new();
        strategy
            .process(input.path(), &mut output)
            .expect("Processing failed");
        output
    });
}

/// Benchmark synchronous processing strategy
#[divan::bench(args = SIZES)]
fn sync_strategy(bencher: divan::Bencher, count: usize) {
    run(bencher, count, StrategyType::Sync);
}

/// Benchmark asynchronous processing strategy
#[divan::bench(args = SIZES)]
fn async_strategy(bencher: divan::Bencher, count: usize) {
    run(bencher, count, StrategyType::Async);
}
