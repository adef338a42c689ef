// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! End-to-end tests for the scenario runner and overhead analyzer.
//!
//! Stub clocks and stub providers make the timings deterministic, so these
//! tests check the accounting rather than the machine.

use std::cell::Cell;

use ffi_overhead_core::{
    decompose, BenchError, BenchmarkConfig, Clock, ClockError, HostCompute, MonotonicClock,
    NativeCallError, NativeComputeProvider, Phase, ScenarioId, ScenarioRunner, TimedResult,
    Workload,
};

/// Clock that advances by a fixed step on every reading.
struct StepClock {
    now: Cell<u64>,
    step: u64,
}

impl StepClock {
    fn new(step: u64) -> Self {
        Self {
            now: Cell::new(0),
            step,
        }
    }
}

impl Clock for StepClock {
    fn now_nanos(&self) -> Result<u64, ClockError> {
        let now = self.now.get();
        self.now.set(now + self.step);
        Ok(now)
    }
}

/// Clock that never moves.
struct FrozenClock;

impl Clock for FrozenClock {
    fn now_nanos(&self) -> Result<u64, ClockError> {
        Ok(0)
    }
}

/// Clock whose timer cannot be read.
struct MissingClock;

impl Clock for MissingClock {
    fn now_nanos(&self) -> Result<u64, ClockError> {
        Err(ClockError::new("timer unavailable"))
    }
}

/// Provider that reports a constant native duration per call.
struct ConstantProvider {
    nanos_per_call: u64,
    calls: Cell<u64>,
}

impl ConstantProvider {
    fn new(nanos_per_call: u64) -> Self {
        Self {
            nanos_per_call,
            calls: Cell::new(0),
        }
    }
}

impl NativeComputeProvider for ConstantProvider {
    fn name(&self) -> &str {
        "constant"
    }

    fn scalar_add(&self, a: i64, b: i64) -> Result<i64, NativeCallError> {
        self.calls.set(self.calls.get() + 1);
        Ok(a + b)
    }

    fn bulk_sum(&self, data: &[f64]) -> Result<f64, NativeCallError> {
        self.calls.set(self.calls.get() + 1);
        Ok(data.iter().sum())
    }

    fn bulk_sum_timed(&self, data: &[f64]) -> Result<TimedResult, NativeCallError> {
        self.calls.set(self.calls.get() + 1);
        Ok(TimedResult {
            value: data.iter().sum(),
            native_duration_nanos: self.nanos_per_call,
        })
    }
}

/// Provider whose every operation fails on the given call.
struct FailingProvider {
    fail_at: u64,
    calls: Cell<u64>,
}

impl FailingProvider {
    fn tick(&self) -> Result<(), NativeCallError> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        if call == self.fail_at {
            Err(NativeCallError::Status { code: 1 })
        } else {
            Ok(())
        }
    }
}

impl NativeComputeProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    fn scalar_add(&self, a: i64, b: i64) -> Result<i64, NativeCallError> {
        self.tick()?;
        Ok(a + b)
    }

    fn bulk_sum(&self, data: &[f64]) -> Result<f64, NativeCallError> {
        self.tick()?;
        Ok(data.iter().sum())
    }

    fn bulk_sum_timed(&self, data: &[f64]) -> Result<TimedResult, NativeCallError> {
        self.tick()?;
        Ok(TimedResult {
            value: data.iter().sum(),
            native_duration_nanos: 10,
        })
    }
}

/// Host stub that adds instantly.
struct InstantHost;

impl HostCompute for InstantHost {
    fn scalar_add(&self, a: i64, b: i64) -> i64 {
        a + b
    }

    fn bulk_sum(&self, data: &[f64]) -> f64 {
        data.iter().sum()
    }
}

#[test]
fn test_scalar_and_bulk_report_configured_counts() {
    for calls in [1u64, 2, 50] {
        let config = BenchmarkConfig::new(calls, calls, 8).unwrap();
        let workload = Workload::from_size(config.list_size);
        let provider = ConstantProvider::new(0);
        let runner =
            ScenarioRunner::new(config, &workload, MonotonicClock::new(), &provider).unwrap();

        let scalar = runner.run_scalar().unwrap();
        assert_eq!(scalar.scenario, ScenarioId::Scalar);
        assert_eq!(scalar.host_baseline.call_count, calls);
        assert_eq!(scalar.provider.call_count, calls);
        assert!(scalar.host_baseline.total_host_duration_ms >= 0.0);
        assert!(scalar.provider.total_host_duration_ms >= 0.0);

        let bulk = runner.run_bulk().unwrap();
        assert_eq!(bulk.scenario, ScenarioId::Bulk);
        assert_eq!(bulk.provider.call_count, calls);
        assert!(bulk.provider.total_host_duration_ms >= 0.0);

        assert_eq!(provider.calls.get(), calls * 2);
    }
}

#[test]
fn test_native_total_is_exact_for_constant_provider() {
    let config = BenchmarkConfig::new(1, 10, 32).unwrap();
    let workload = Workload::from_size(config.list_size);
    let provider = ConstantProvider::new(1_000);
    let runner = ScenarioRunner::new(config, &workload, MonotonicClock::new(), &provider).unwrap();

    let measurement = runner.run_decomposition().unwrap();
    assert_eq!(measurement.call_count, 10);
    assert_eq!(measurement.total_native_duration_ms, 0.01);
}

#[test]
fn test_native_accumulator_is_wider_than_per_call_reading() {
    // Three maximal readings overflow a u64 sum.
    let config = BenchmarkConfig::new(1, 3, 1).unwrap();
    let workload = Workload::from_size(config.list_size);
    let provider = ConstantProvider::new(u64::MAX);
    let runner = ScenarioRunner::new(config, &workload, FrozenClock, &provider).unwrap();

    let measurement = runner.run_decomposition().unwrap();
    let expected = (3 * u128::from(u64::MAX)) as f64 / 1_000_000.0;
    assert_eq!(measurement.total_native_duration_ms, expected);
    assert!(measurement.overhead_ms() < 0.0);
}

#[test]
fn test_step_clock_gives_exact_host_totals() {
    let config = BenchmarkConfig::new(5, 5, 4).unwrap();
    let workload = Workload::from_size(config.list_size);
    let provider = ConstantProvider::new(250_000);
    let runner = ScenarioRunner::new(config, &workload, StepClock::new(2_000_000), &provider)
        .unwrap();

    let measurement = runner.run_decomposition().unwrap();
    assert_eq!(measurement.total_host_duration_ms, 2.0);
    assert_eq!(measurement.total_native_duration_ms, 1.25);
    assert_eq!(measurement.overhead_ms(), 0.75);

    let decomposition = measurement.decompose().unwrap();
    assert_eq!(decomposition.per_call_host_ms, 0.4);
    let shares = decomposition.shares.unwrap();
    assert_eq!(shares.native_share_pct, 62.5);
    assert_eq!(shares.overhead_share_pct, 37.5);
}

#[test]
fn test_zero_duration_clock_omits_shares() {
    let config = BenchmarkConfig::new(1, 4, 4).unwrap();
    let workload = Workload::from_size(config.list_size);
    let provider = ConstantProvider::new(0);
    let runner = ScenarioRunner::new(config, &workload, FrozenClock, &provider).unwrap();

    let measurement = runner.run_decomposition().unwrap();
    assert_eq!(measurement.total_host_duration_ms, 0.0);

    let decomposition = measurement.decompose().unwrap();
    assert!(decomposition.shares.is_none());
}

#[test]
fn test_ffi_factor_finite_with_instant_stubs() {
    let config = BenchmarkConfig::new(1000, 1, 1).unwrap();
    let workload = Workload::from_size(config.list_size);
    let provider = ConstantProvider::new(0);
    let runner = ScenarioRunner::new(config, &workload, StepClock::new(1_000), &provider)
        .unwrap()
        .with_host(InstantHost);

    let scalar = runner.run_scalar().unwrap();
    let factor = scalar.ffi_factor().unwrap();
    assert!(factor.is_finite());
    assert!(factor >= 0.0);
}

#[test]
fn test_negative_overhead_share_does_not_fail() {
    let decomposition = decompose(10.0, 12.0, 4).unwrap();
    let shares = decomposition.shares.unwrap();
    assert!(shares.overhead_share_pct < 0.0);
    assert_eq!(shares.overhead_share_pct, -20.0);
}

#[test]
fn test_provider_failure_aborts_scenario_with_phase() {
    let config = BenchmarkConfig::new(10, 10, 4).unwrap();
    let workload = Workload::from_size(config.list_size);
    let provider = FailingProvider {
        fail_at: 3,
        calls: Cell::new(0),
    };
    let runner = ScenarioRunner::new(config, &workload, MonotonicClock::new(), &provider).unwrap();

    let err = runner.run_decomposition().unwrap_err();
    match err {
        BenchError::NativeCallFailure {
            phase,
            call_index,
            source,
        } => {
            assert_eq!(phase, Phase::DecompositionScenario);
            assert_eq!(call_index, 3);
            assert_eq!(source, NativeCallError::Status { code: 1 });
        }
        other => panic!("unexpected error: {other}"),
    }
    // No retry: the loop stopped at the failing call.
    assert_eq!(provider.calls.get(), 4);
}

#[test]
fn test_failure_in_run_all_stops_later_scenarios() {
    let config = BenchmarkConfig::new(2, 2, 4).unwrap();
    let workload = Workload::from_size(config.list_size);
    let provider = FailingProvider {
        fail_at: 0,
        calls: Cell::new(0),
    };
    let runner = ScenarioRunner::new(config, &workload, MonotonicClock::new(), &provider).unwrap();

    let err = runner.run_all().unwrap_err();
    assert_eq!(err.phase(), Phase::ScalarScenario);
    assert_eq!(provider.calls.get(), 1);
}

#[test]
fn test_missing_clock_is_fatal() {
    let config = BenchmarkConfig::new(1, 1, 1).unwrap();
    let workload = Workload::from_size(config.list_size);
    let provider = ConstantProvider::new(0);
    let runner = ScenarioRunner::new(config, &workload, MissingClock, &provider).unwrap();

    let err = runner.run_bulk().unwrap_err();
    assert!(matches!(
        err,
        BenchError::ClockUnavailable {
            phase: Phase::BulkScenario,
            ..
        }
    ));
    assert_eq!(provider.calls.get(), 0);
}

#[test]
fn test_non_finite_sum_is_malformed() {
    struct NanProvider;

    impl NativeComputeProvider for NanProvider {
        fn name(&self) -> &str {
            "nan"
        }

        fn scalar_add(&self, a: i64, b: i64) -> Result<i64, NativeCallError> {
            Ok(a + b)
        }

        fn bulk_sum(&self, _data: &[f64]) -> Result<f64, NativeCallError> {
            Ok(f64::NAN)
        }

        fn bulk_sum_timed(&self, _data: &[f64]) -> Result<TimedResult, NativeCallError> {
            Ok(TimedResult {
                value: f64::NAN,
                native_duration_nanos: 1,
            })
        }
    }

    let config = BenchmarkConfig::new(1, 3, 2).unwrap();
    let workload = Workload::from_size(config.list_size);
    let runner = ScenarioRunner::new(config, &workload, MonotonicClock::new(), NanProvider).unwrap();

    let err = runner.run_bulk().unwrap_err();
    assert!(matches!(
        err,
        BenchError::NativeCallFailure {
            phase: Phase::BulkScenario,
            call_index: 0,
            source: NativeCallError::MalformedResult { .. },
        }
    ));

    let err = runner.run_decomposition().unwrap_err();
    assert!(matches!(
        err,
        BenchError::NativeCallFailure {
            phase: Phase::DecompositionScenario,
            call_index: 0,
            source: NativeCallError::MalformedResult { .. },
        }
    ));

    let err = runner.run_all().unwrap_err();
    assert_eq!(err.phase(), Phase::BulkScenario);
}
