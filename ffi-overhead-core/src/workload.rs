// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Deterministic input data for the bulk scenarios.

use std::ops::Deref;

use crate::error::BenchResult;
use crate::types::ListSize;

/// Read-only sequence where element `i` is `i as f64`.
///
/// Generated once per run and shared by reference with every bulk call.
#[derive(Debug, Clone, PartialEq)]
pub struct Workload {
    values: Vec<f64>,
}

impl Workload {
    /// Generate a workload of `list_size` elements.
    ///
    /// Fails with `InvalidArgument` when `list_size` is zero.
    pub fn generate(list_size: usize) -> BenchResult<Self> {
        Ok(Self::from_size(ListSize::new(list_size)?))
    }

    /// Generate a workload from an already validated size.
    pub fn from_size(list_size: ListSize) -> Self {
        let values = (0..list_size.get()).map(|i| i as f64).collect();
        Self { values }
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

impl Deref for Workload {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.values
    }
}
