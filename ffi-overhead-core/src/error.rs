// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Custom error types for the FFI overhead benchmark.
//!
//! All errors are explicit enum variants. Nothing is retried: a failure
//! anywhere aborts the phase it happened in and is handed to the caller
//! tagged with that phase.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Phase of a benchmark run an error originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Configuration and workload generation, before any timing.
    Setup,
    /// Scenario A: scalar-add calls.
    ScalarScenario,
    /// Scenario B: bulk-sum calls.
    BulkScenario,
    /// Scenario C: self-timed bulk-sum calls.
    DecompositionScenario,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::ScalarScenario => "scalar scenario",
            Phase::BulkScenario => "bulk scenario",
            Phase::DecompositionScenario => "decomposition scenario",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type for a benchmark run.
#[derive(Debug, Error)]
pub enum BenchError {
    // =========================================================================
    // Configuration Errors - Fail-Fast Before Timing Starts
    // =========================================================================
    #[error("Invalid argument: {field} = {value} - {reason}")]
    InvalidArgument {
        field: &'static str,
        value: String,
        reason: String,
    },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Configuration parse error: {message}")]
    ConfigParse { message: String },

    // =========================================================================
    // Measurement Errors - Abort the Scenario, No Partial Result
    // =========================================================================
    #[error("Native call {call_index} failed during {phase}: {source}")]
    NativeCallFailure {
        phase: Phase,
        call_index: u64,
        #[source]
        source: NativeCallError,
    },

    #[error("Clock unavailable during {phase}: {reason}")]
    ClockUnavailable { phase: Phase, reason: String },

    // =========================================================================
    // System Errors
    // =========================================================================
    #[error("IO error: {context} - {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
}

impl BenchError {
    /// Phase the error belongs to. Configuration errors are always setup.
    pub fn phase(&self) -> Phase {
        match self {
            BenchError::NativeCallFailure { phase, .. } => *phase,
            BenchError::ClockUnavailable { phase, .. } => *phase,
            _ => Phase::Setup,
        }
    }
}

/// Failure reported by a native compute provider for a single call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NativeCallError {
    #[error("native routine returned status {code}")]
    Status { code: i32 },

    #[error("native routine received a null {argument} pointer")]
    NullPointer { argument: &'static str },

    #[error("malformed result: {reason}")]
    MalformedResult { reason: String },

    #[error("provider unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Failure reported by a clock implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct ClockError {
    pub reason: String,
}

impl ClockError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Result type alias using BenchError.
pub type BenchResult<T> = Result<T, BenchError>;
