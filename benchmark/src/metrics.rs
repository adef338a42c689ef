// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Serializable report types for a benchmark run.
//!
//! These flatten the core measurements into plain numbers, including the
//! derived ratios and the decomposition, so a saved report can be read
//! without the library.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sysinfo::System;
use uuid::Uuid;

use ffi_overhead_core::{
    BenchResult, BenchmarkConfig, ComparisonMeasurement, Decomposition, ScenarioId,
    ScenarioMeasurement, SuiteMeasurement,
};

/// Caveat attached to every report that contains a decomposition.
pub const CLOCK_SKEW_NOTE: &str = "Native durations come from a clock local to the provider; \
     host and provider clocks are assumed to agree over the measurement window (no skew calibration).";

/// Caveat attached to every report.
pub const SINGLE_PASS_NOTE: &str =
    "Single-pass measurement: no warmup isolation, outlier rejection or confidence intervals.";

/// Host baseline vs provider for scenario A or B.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub scenario: ScenarioId,
    pub call_count: u64,
    pub host_baseline_ms: f64,
    pub provider_ms: f64,
    /// `provider / baseline`; absent when the baseline measured zero.
    pub ffi_factor: Option<f64>,
    /// `baseline / provider`; absent when the provider measured zero.
    pub speedup: Option<f64>,
    /// `provider / baseline`, read as "times slower".
    pub slowdown: Option<f64>,
    pub provider_is_faster: bool,
}

impl From<&ComparisonMeasurement> for ComparisonResult {
    fn from(m: &ComparisonMeasurement) -> Self {
        Self {
            scenario: m.scenario,
            call_count: m.provider.call_count,
            host_baseline_ms: m.host_baseline.total_host_duration_ms,
            provider_ms: m.provider.total_host_duration_ms,
            ffi_factor: m.ffi_factor(),
            speedup: m.speedup(),
            slowdown: m.slowdown(),
            provider_is_faster: m.provider_is_faster(),
        }
    }
}

/// Host total vs native total for scenario C.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    pub call_count: u64,
    pub total_host_ms: f64,
    pub total_native_ms: f64,
    pub total_overhead_ms: f64,
    pub per_call: Decomposition,
}

impl DecompositionResult {
    pub fn from_measurement(m: &ScenarioMeasurement) -> BenchResult<Self> {
        Ok(Self {
            call_count: m.call_count,
            total_host_ms: m.total_host_duration_ms,
            total_native_ms: m.total_native_duration_ms,
            total_overhead_ms: m.overhead_ms(),
            per_call: m.decompose()?,
        })
    }
}

/// System information captured at benchmark time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub os_version: String,
    pub kernel_version: Option<String>,
    pub cpu_model: String,
    pub cpu_cores: usize,
    pub memory_bytes: u64,
    pub hostname: String,
}

impl SystemInfo {
    /// Collect current system information.
    pub fn collect() -> Self {
        let mut sys = System::new_all();
        sys.refresh_all();

        Self {
            os: System::name().unwrap_or_else(|| "Unknown".to_string()),
            os_version: System::os_version().unwrap_or_else(|| "Unknown".to_string()),
            kernel_version: System::kernel_version(),
            cpu_model: sys
                .cpus()
                .first()
                .map(|cpu| cpu.brand().to_string())
                .unwrap_or_else(|| "Unknown".to_string()),
            cpu_cores: sys.cpus().len(),
            memory_bytes: sys.total_memory(),
            hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        }
    }
}

/// Complete report for one run of the harness.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub benchmark_suite: String,
    pub version: String,
    pub run_id: Uuid,
    pub timestamp: DateTime<Utc>,
    /// Provider the scenarios ran against.
    pub provider: String,
    pub config: BenchmarkConfig,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_info: Option<SystemInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scalar: Option<ComparisonResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bulk: Option<ComparisonResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decomposition: Option<DecompositionResult>,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl BenchmarkReport {
    /// Build a report from a finished run.
    pub fn from_suite(
        config: BenchmarkConfig,
        provider: impl Into<String>,
        suite: &SuiteMeasurement,
    ) -> BenchResult<Self> {
        let decomposition = suite
            .decomposition
            .as_ref()
            .map(DecompositionResult::from_measurement)
            .transpose()?;

        let mut notes = vec![SINGLE_PASS_NOTE.to_string()];
        if decomposition.is_some() {
            notes.push(CLOCK_SKEW_NOTE.to_string());
        }

        Ok(Self {
            benchmark_suite: "ffi-overhead".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            run_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            provider: provider.into(),
            config,
            system_info: None,
            scalar: suite.scalar.as_ref().map(ComparisonResult::from),
            bulk: suite.bulk.as_ref().map(ComparisonResult::from),
            decomposition,
            notes,
        })
    }

    /// Attach host system information.
    pub fn with_system_info(mut self, info: SystemInfo) -> Self {
        self.system_info = Some(info);
        self
    }
}
