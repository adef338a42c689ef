// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Call contracts for the two sides of the comparison.
//!
//! [`NativeComputeProvider`] is the routine on the far side of the foreign
//! boundary. [`HostCompute`] is the same arithmetic done without crossing
//! it, used as the baseline in the scalar and bulk scenarios.

use serde::{Deserialize, Serialize};

use crate::error::NativeCallError;

/// Result of a self-timed native call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimedResult {
    pub value: f64,
    /// The provider's own measurement of its compute, excluding call entry
    /// and argument marshaling.
    pub native_duration_nanos: u64,
}

/// Operations exposed by a native compute provider.
///
/// Every operation must be pure and deterministic. `bulk_sum_timed` must
/// time only its internal work, using a clock local to the provider.
pub trait NativeComputeProvider {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    fn scalar_add(&self, a: i64, b: i64) -> Result<i64, NativeCallError>;

    fn bulk_sum(&self, data: &[f64]) -> Result<f64, NativeCallError>;

    fn bulk_sum_timed(&self, data: &[f64]) -> Result<TimedResult, NativeCallError>;
}

impl<P: NativeComputeProvider + ?Sized> NativeComputeProvider for &P {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn scalar_add(&self, a: i64, b: i64) -> Result<i64, NativeCallError> {
        (**self).scalar_add(a, b)
    }

    fn bulk_sum(&self, data: &[f64]) -> Result<f64, NativeCallError> {
        (**self).bulk_sum(data)
    }

    fn bulk_sum_timed(&self, data: &[f64]) -> Result<TimedResult, NativeCallError> {
        (**self).bulk_sum_timed(data)
    }
}

/// Host-side baseline operations. These cannot fail.
pub trait HostCompute {
    fn scalar_add(&self, a: i64, b: i64) -> i64;

    fn bulk_sum(&self, data: &[f64]) -> f64;
}

/// Plain Rust arithmetic, compiled into the harness itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct PureHost;

impl HostCompute for PureHost {
    #[inline(never)]
    fn scalar_add(&self, a: i64, b: i64) -> i64 {
        a.wrapping_add(b)
    }

    #[inline(never)]
    fn bulk_sum(&self, data: &[f64]) -> f64 {
        let mut sum = 0.0;
        for value in data {
            sum += value;
        }
        sum
    }
}
