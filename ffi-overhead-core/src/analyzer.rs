// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Split a host-measured total into native compute and boundary overhead.
//!
//! Nothing here is clamped. When the provider reports more time than the
//! host measured, the overhead comes out negative, which is the noise floor
//! of the method showing through.

use serde::{Deserialize, Serialize};

use crate::error::{BenchError, BenchResult};

/// Percentages of the host total. Only defined for a positive host total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shares {
    pub native_share_pct: f64,
    pub overhead_share_pct: f64,
}

/// Per-call averages and shares for a decomposed scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Decomposition {
    pub per_call_host_ms: f64,
    pub per_call_native_ms: f64,
    pub per_call_overhead_ms: f64,
    /// `None` when the host total is zero.
    pub shares: Option<Shares>,
}

/// Decompose totals measured over `call_count` calls.
pub fn decompose(
    host_total_ms: f64,
    native_total_ms: f64,
    call_count: u64,
) -> BenchResult<Decomposition> {
    if call_count == 0 {
        return Err(BenchError::InvalidArgument {
            field: "call_count",
            value: "0".to_string(),
            reason: "Cannot average over zero calls".to_string(),
        });
    }

    let overhead_total_ms = host_total_ms - native_total_ms;
    let calls = call_count as f64;

    let shares = (host_total_ms > 0.0).then(|| Shares {
        native_share_pct: 100.0 * native_total_ms / host_total_ms,
        overhead_share_pct: 100.0 * overhead_total_ms / host_total_ms,
    });

    Ok(Decomposition {
        per_call_host_ms: host_total_ms / calls,
        per_call_native_ms: native_total_ms / calls,
        per_call_overhead_ms: overhead_total_ms / calls,
        shares,
    })
}
