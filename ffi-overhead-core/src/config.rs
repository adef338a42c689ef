// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Benchmark configuration with strict validation.
//!
//! Configuration is validated once, before any timing begins. Any invalid
//! field is an `InvalidArgument` that prevents the run from starting.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};
use crate::types::{CallCount, ListSize};

const DEFAULT_SIMPLE_CALL_COUNT: u64 = 1_000_000;
const DEFAULT_COMPLEX_CALL_COUNT: u64 = 1_000;
const DEFAULT_LIST_SIZE: usize = 100_000;

/// Raw configuration as parsed from YAML (before validation).
#[derive(Debug, Deserialize)]
struct RawBenchmarkConfig {
    #[serde(default = "default_simple_call_count")]
    simple_call_count: u64,
    #[serde(default = "default_complex_call_count")]
    complex_call_count: u64,
    #[serde(default = "default_list_size")]
    list_size: usize,
}

fn default_simple_call_count() -> u64 {
    DEFAULT_SIMPLE_CALL_COUNT
}

fn default_complex_call_count() -> u64 {
    DEFAULT_COMPLEX_CALL_COUNT
}

fn default_list_size() -> usize {
    DEFAULT_LIST_SIZE
}

/// Validated, immutable benchmark configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Calls performed by the scalar scenario.
    pub simple_call_count: CallCount,
    /// Calls performed by each bulk scenario.
    pub complex_call_count: CallCount,
    /// Elements in the generated workload.
    pub list_size: ListSize,
}

impl BenchmarkConfig {
    /// Build a configuration from raw counts, rejecting zeros.
    pub fn new(
        simple_call_count: u64,
        complex_call_count: u64,
        list_size: usize,
    ) -> BenchResult<Self> {
        Ok(Self {
            simple_call_count: CallCount::new(simple_call_count)
                .map_err(|e| rename(e, "simple_call_count"))?,
            complex_call_count: CallCount::new(complex_call_count)
                .map_err(|e| rename(e, "complex_call_count"))?,
            list_size: ListSize::new(list_size)?,
        })
    }

    /// Small smoke-test profile.
    pub fn quick() -> Self {
        Self {
            simple_call_count: CallCount(1_000),
            complex_call_count: CallCount(10),
            list_size: ListSize(10_000),
        }
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            simple_call_count: CallCount(DEFAULT_SIMPLE_CALL_COUNT),
            complex_call_count: CallCount(DEFAULT_COMPLEX_CALL_COUNT),
            list_size: ListSize(DEFAULT_LIST_SIZE),
        }
    }
}

/// Point a newtype validation error at the config field that produced it.
fn rename(err: BenchError, name: &'static str) -> BenchError {
    match err {
        BenchError::InvalidArgument { value, reason, .. } => BenchError::InvalidArgument {
            field: name,
            value,
            reason,
        },
        other => other,
    }
}

/// Configuration loader with strict validation.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load and validate configuration from a YAML file.
    pub fn load_file(path: impl AsRef<Path>) -> BenchResult<BenchmarkConfig> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(BenchError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| BenchError::Io {
            context: "reading config file",
            source: e,
        })?;

        Self::load_string(&content)
    }

    /// Load and validate configuration from a YAML string.
    pub fn load_string(content: &str) -> BenchResult<BenchmarkConfig> {
        let raw: RawBenchmarkConfig =
            serde_yaml::from_str(content).map_err(|e| BenchError::ConfigParse {
                message: format!("YAML parse error: {}", e),
            })?;

        BenchmarkConfig::new(raw.simple_call_count, raw.complex_call_count, raw.list_size)
    }
}
