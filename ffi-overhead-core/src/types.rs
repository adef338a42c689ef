// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Newtype wrappers for validated inputs.
//!
//! All types validate their invariants at creation time, so a
//! `BenchmarkConfig` built from them cannot hold a zero count.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Number of sequential calls a scenario performs. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct CallCount(pub(crate) u64);

impl CallCount {
    /// Create a new CallCount with validation.
    pub fn new(count: u64) -> Result<Self, BenchError> {
        if count == 0 {
            return Err(BenchError::InvalidArgument {
                field: "call_count",
                value: count.to_string(),
                reason: "Call count must be greater than 0".to_string(),
            });
        }
        Ok(Self(count))
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CallCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for CallCount {
    type Error = BenchError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CallCount> for u64 {
    fn from(count: CallCount) -> Self {
        count.0
    }
}

/// Number of elements in the generated workload. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ListSize(pub(crate) usize);

impl ListSize {
    /// Create a new ListSize with validation.
    pub fn new(size: usize) -> Result<Self, BenchError> {
        if size == 0 {
            return Err(BenchError::InvalidArgument {
                field: "list_size",
                value: size.to_string(),
                reason: "List size must be greater than 0".to_string(),
            });
        }
        Ok(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ListSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<usize> for ListSize {
    type Error = BenchError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ListSize> for usize {
    fn from(size: ListSize) -> Self {
        size.0
    }
}

/// The three benchmark scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioId {
    /// Scenario A: scalar add, host baseline vs provider.
    Scalar,
    /// Scenario B: bulk sum over the workload, host baseline vs provider.
    Bulk,
    /// Scenario C: self-timed bulk sum, host total vs native total.
    Decomposition,
}

impl ScenarioId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScenarioId::Scalar => "scalar",
            ScenarioId::Bulk => "bulk",
            ScenarioId::Decomposition => "decomposition",
        }
    }
}

impl fmt::Display for ScenarioId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
