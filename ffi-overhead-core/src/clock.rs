// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Host clock used to time scenario loops.
//!
//! A reading is a plain `u64` of nanoseconds since the clock's origin, so
//! querying the clock never allocates and can sit right next to a timed loop.

use std::time::Instant;

use crate::error::{BenchError, BenchResult, ClockError, Phase};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Monotonic time source for host-side measurements.
pub trait Clock {
    /// Nanoseconds elapsed since an arbitrary, fixed origin.
    fn now_nanos(&self) -> Result<u64, ClockError>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_nanos(&self) -> Result<u64, ClockError> {
        (**self).now_nanos()
    }
}

/// `Instant`-backed clock. The origin is the moment of construction.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_nanos(&self) -> Result<u64, ClockError> {
        let nanos = self.origin.elapsed().as_nanos();
        u64::try_from(nanos)
            .map_err(|_| ClockError::new(format!("reading {nanos}ns does not fit in 64 bits")))
    }
}

/// Read the clock, tagging a failure with the phase being measured.
pub fn read(clock: &impl Clock, phase: Phase) -> BenchResult<u64> {
    clock
        .now_nanos()
        .map_err(|e| BenchError::ClockUnavailable {
            phase,
            reason: e.reason,
        })
}

/// Milliseconds between two readings of the same clock.
pub fn span_ms(start: u64, end: u64, phase: Phase) -> BenchResult<f64> {
    let nanos = end
        .checked_sub(start)
        .ok_or_else(|| BenchError::ClockUnavailable {
            phase,
            reason: format!("clock went backwards: {start}ns -> {end}ns"),
        })?;
    Ok(nanos_to_ms(nanos as u128))
}

/// Convert a nanosecond total to fractional milliseconds.
pub fn nanos_to_ms(nanos: u128) -> f64 {
    nanos as f64 / NANOS_PER_MILLI
}
