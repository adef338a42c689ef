// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Results produced by the scenario runner.
//!
//! Durations are fractional milliseconds. Derived quantities (overhead,
//! ratios) are computed on demand and never stored.

use serde::{Deserialize, Serialize};

use crate::analyzer::{self, Decomposition};
use crate::error::BenchResult;
use crate::types::ScenarioId;

/// Host-measured time of one tight loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoopTiming {
    pub total_host_duration_ms: f64,
    pub call_count: u64,
}

/// Host baseline loop against provider loop (scenarios A and B).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonMeasurement {
    pub scenario: ScenarioId,
    pub host_baseline: LoopTiming,
    pub provider: LoopTiming,
}

impl ComparisonMeasurement {
    /// `provider / baseline`. `None` when the baseline took no measurable time.
    pub fn ffi_factor(&self) -> Option<f64> {
        ratio(
            self.provider.total_host_duration_ms,
            self.host_baseline.total_host_duration_ms,
        )
    }

    /// How many times faster the provider was (`baseline / provider`).
    pub fn speedup(&self) -> Option<f64> {
        ratio(
            self.host_baseline.total_host_duration_ms,
            self.provider.total_host_duration_ms,
        )
    }

    /// How many times slower the provider was (`provider / baseline`).
    pub fn slowdown(&self) -> Option<f64> {
        self.ffi_factor()
    }

    pub fn provider_is_faster(&self) -> bool {
        self.provider.total_host_duration_ms < self.host_baseline.total_host_duration_ms
    }
}

fn ratio(numerator: f64, denominator: f64) -> Option<f64> {
    (denominator > 0.0).then(|| numerator / denominator)
}

/// Host total against the provider's self-reported total (scenario C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioMeasurement {
    pub scenario: ScenarioId,
    pub total_host_duration_ms: f64,
    pub total_native_duration_ms: f64,
    pub call_count: u64,
}

impl ScenarioMeasurement {
    /// Boundary-crossing time. Negative values are measurement noise and are
    /// reported as-is.
    pub fn overhead_ms(&self) -> f64 {
        self.total_host_duration_ms - self.total_native_duration_ms
    }

    pub fn decompose(&self) -> BenchResult<Decomposition> {
        analyzer::decompose(
            self.total_host_duration_ms,
            self.total_native_duration_ms,
            self.call_count,
        )
    }
}

/// Results of a full run. A scenario that was not selected is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SuiteMeasurement {
    pub scalar: Option<ComparisonMeasurement>,
    pub bulk: Option<ComparisonMeasurement>,
    pub decomposition: Option<ScenarioMeasurement>,
}
