// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Scenario runner.
//!
//! Each scenario reads the clock, performs a fixed number of sequential
//! calls with nothing else in the loop, and reads the clock again. Logging
//! happens only before and after a loop. A failed call aborts the scenario
//! and no partial measurement is returned.

use std::hint::black_box;

use tracing::{debug, info};

use crate::clock::{self, Clock};
use crate::config::BenchmarkConfig;
use crate::error::{BenchError, BenchResult, NativeCallError, Phase};
use crate::measurement::{ComparisonMeasurement, LoopTiming, ScenarioMeasurement, SuiteMeasurement};
use crate::provider::{HostCompute, NativeComputeProvider, PureHost};
use crate::types::ScenarioId;
use crate::workload::Workload;

/// Operands for the scalar scenario.
const SCALAR_LHS: i64 = 10;
const SCALAR_RHS: i64 = 20;

/// Drives the three scenarios against one provider.
pub struct ScenarioRunner<'w, C, P, H = PureHost> {
    config: BenchmarkConfig,
    workload: &'w Workload,
    clock: C,
    provider: P,
    host: H,
}

impl<'w, C, P> ScenarioRunner<'w, C, P, PureHost>
where
    C: Clock,
    P: NativeComputeProvider,
{
    /// Create a runner using plain Rust arithmetic as the host baseline.
    ///
    /// The workload must have been generated for `config.list_size`.
    pub fn new(
        config: BenchmarkConfig,
        workload: &'w Workload,
        clock: C,
        provider: P,
    ) -> BenchResult<Self> {
        if workload.len() != config.list_size.get() {
            return Err(BenchError::InvalidArgument {
                field: "workload",
                value: workload.len().to_string(),
                reason: format!(
                    "Workload length does not match configured list_size {}",
                    config.list_size
                ),
            });
        }

        Ok(Self {
            config,
            workload,
            clock,
            provider,
            host: PureHost,
        })
    }
}

impl<'w, C, P, H> ScenarioRunner<'w, C, P, H>
where
    C: Clock,
    P: NativeComputeProvider,
    H: HostCompute,
{
    /// Replace the host baseline implementation.
    pub fn with_host<H2: HostCompute>(self, host: H2) -> ScenarioRunner<'w, C, P, H2> {
        ScenarioRunner {
            config: self.config,
            workload: self.workload,
            clock: self.clock,
            provider: self.provider,
            host,
        }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Scenario A: scalar add on the host, then through the provider.
    pub fn run_scalar(&self) -> BenchResult<ComparisonMeasurement> {
        let phase = Phase::ScalarScenario;
        let calls = self.config.simple_call_count.get();
        info!(calls, provider = self.provider.name(), "Running scalar scenario");

        let host_ms = self.time_loop(phase, calls, |_| {
            black_box(
                self.host
                    .scalar_add(black_box(SCALAR_LHS), black_box(SCALAR_RHS)),
            );
            Ok(())
        })?;

        let provider_ms = self.time_loop(phase, calls, |call_index| {
            let sum = self
                .provider
                .scalar_add(black_box(SCALAR_LHS), black_box(SCALAR_RHS))
                .map_err(|source| native_failure(phase, call_index, source))?;
            black_box(sum);
            Ok(())
        })?;

        let measurement = ComparisonMeasurement {
            scenario: ScenarioId::Scalar,
            host_baseline: LoopTiming {
                total_host_duration_ms: host_ms,
                call_count: calls,
            },
            provider: LoopTiming {
                total_host_duration_ms: provider_ms,
                call_count: calls,
            },
        };
        debug!(host_ms, provider_ms, ffi_factor = ?measurement.ffi_factor(), "Scalar scenario done");
        Ok(measurement)
    }

    /// Scenario B: bulk sum over the workload on the host, then through the
    /// provider.
    pub fn run_bulk(&self) -> BenchResult<ComparisonMeasurement> {
        let phase = Phase::BulkScenario;
        let calls = self.config.complex_call_count.get();
        let data = self.workload.as_slice();
        info!(
            calls,
            list_size = data.len(),
            provider = self.provider.name(),
            "Running bulk scenario"
        );

        let host_ms = self.time_loop(phase, calls, |_| {
            black_box(self.host.bulk_sum(black_box(data)));
            Ok(())
        })?;

        let provider_ms = self.time_loop(phase, calls, |call_index| {
            let sum = self
                .provider
                .bulk_sum(black_box(data))
                .map_err(|source| native_failure(phase, call_index, source))?;
            black_box(finite_sum(phase, call_index, sum)?);
            Ok(())
        })?;

        let measurement = ComparisonMeasurement {
            scenario: ScenarioId::Bulk,
            host_baseline: LoopTiming {
                total_host_duration_ms: host_ms,
                call_count: calls,
            },
            provider: LoopTiming {
                total_host_duration_ms: provider_ms,
                call_count: calls,
            },
        };
        debug!(host_ms, provider_ms, "Bulk scenario done");
        Ok(measurement)
    }

    /// Scenario C: self-timed bulk sum. The host times the whole loop while
    /// the provider's per-call durations are summed as integer nanoseconds
    /// and converted to milliseconds once, after the loop.
    ///
    /// Provider and host clocks are assumed to agree over the window; no
    /// skew calibration is applied.
    pub fn run_decomposition(&self) -> BenchResult<ScenarioMeasurement> {
        let phase = Phase::DecompositionScenario;
        let calls = self.config.complex_call_count.get();
        let data = self.workload.as_slice();
        info!(
            calls,
            list_size = data.len(),
            provider = self.provider.name(),
            "Running decomposition scenario"
        );

        let mut native_nanos: u128 = 0;
        let host_ms = self.time_loop(phase, calls, |call_index| {
            let timed = self
                .provider
                .bulk_sum_timed(black_box(data))
                .map_err(|source| native_failure(phase, call_index, source))?;
            let value = finite_sum(phase, call_index, timed.value)?;
            native_nanos += u128::from(timed.native_duration_nanos);
            black_box(value);
            Ok(())
        })?;

        let measurement = ScenarioMeasurement {
            scenario: ScenarioId::Decomposition,
            total_host_duration_ms: host_ms,
            total_native_duration_ms: clock::nanos_to_ms(native_nanos),
            call_count: calls,
        };
        debug!(
            host_ms,
            native_ms = measurement.total_native_duration_ms,
            overhead_ms = measurement.overhead_ms(),
            "Decomposition scenario done"
        );
        Ok(measurement)
    }

    /// Run the selected scenarios in A, B, C order. The first failure aborts
    /// the whole run.
    pub fn run_selected(&self, scenarios: &[ScenarioId]) -> BenchResult<SuiteMeasurement> {
        let mut suite = SuiteMeasurement::default();
        if scenarios.contains(&ScenarioId::Scalar) {
            suite.scalar = Some(self.run_scalar()?);
        }
        if scenarios.contains(&ScenarioId::Bulk) {
            suite.bulk = Some(self.run_bulk()?);
        }
        if scenarios.contains(&ScenarioId::Decomposition) {
            suite.decomposition = Some(self.run_decomposition()?);
        }
        Ok(suite)
    }

    /// Run all three scenarios.
    pub fn run_all(&self) -> BenchResult<SuiteMeasurement> {
        self.run_selected(&[ScenarioId::Scalar, ScenarioId::Bulk, ScenarioId::Decomposition])
    }

    /// Time `calls` sequential invocations of `body`, in milliseconds.
    #[inline(always)]
    fn time_loop<F>(&self, phase: Phase, calls: u64, mut body: F) -> BenchResult<f64>
    where
        F: FnMut(u64) -> BenchResult<()>,
    {
        let start = clock::read(&self.clock, phase)?;
        for call_index in 0..calls {
            body(call_index)?;
        }
        let end = clock::read(&self.clock, phase)?;
        clock::span_ms(start, end, phase)
    }
}

fn native_failure(phase: Phase, call_index: u64, source: NativeCallError) -> BenchError {
    BenchError::NativeCallFailure {
        phase,
        call_index,
        source,
    }
}

/// A bulk sum that is NaN or infinite cannot come from a finite workload.
fn finite_sum(phase: Phase, call_index: u64, value: f64) -> BenchResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(native_failure(
            phase,
            call_index,
            NativeCallError::MalformedResult {
                reason: format!("non-finite sum {}", value),
            },
        ))
    }
}
