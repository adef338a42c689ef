// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! FFI Overhead Core Library
//!
//! Measures what a call across a foreign-function boundary costs and splits
//! the host-measured time into native compute and boundary overhead.
//! Provides configuration, the host clock, workload generation, the
//! scenario runner and the overhead analyzer.

pub mod analyzer;
pub mod clock;
pub mod config;
pub mod error;
pub mod measurement;
pub mod provider;
pub mod runner;
pub mod types;
pub mod workload;

// Re-export commonly used types
pub use analyzer::{decompose, Decomposition, Shares};
pub use clock::{Clock, MonotonicClock};
pub use config::{BenchmarkConfig, ConfigLoader};
pub use error::{BenchError, BenchResult, ClockError, NativeCallError, Phase};
pub use measurement::{ComparisonMeasurement, LoopTiming, ScenarioMeasurement, SuiteMeasurement};
pub use provider::{HostCompute, NativeComputeProvider, PureHost, TimedResult};
pub use runner::ScenarioRunner;
pub use types::{CallCount, ListSize, ScenarioId};
pub use workload::Workload;
