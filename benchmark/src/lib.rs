// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! FFI Overhead Benchmark Runner
//!
//! Report types, JSON persistence and console rendering for runs of the
//! FFI overhead harness.
//!
//! # Scenarios
//!
//! - **Scalar**: host `a + b` vs the same add across the C ABI
//! - **Bulk**: host sum of the workload vs the same sum across the C ABI
//! - **Decomposition**: host total vs the provider's self-timed total
//!
//! # Data Output
//!
//! Runs can be saved as JSON files for later comparison.

pub mod console;
pub mod metrics;
pub mod reporter;

pub use metrics::{BenchmarkReport, ComparisonResult, DecompositionResult, SystemInfo};
pub use reporter::{JsonReporter, ReporterError};
