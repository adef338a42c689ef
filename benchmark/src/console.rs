// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! Human-readable rendering of a benchmark report.
//!
//! Whether a comparison reads as a speedup or a slowdown is decided here,
//! from the measured numbers, not by the measurement code.

use std::fmt::{self, Write};

use crate::metrics::{BenchmarkReport, ComparisonResult, DecompositionResult};

/// Render the whole report as plain text.
pub fn render(report: &BenchmarkReport) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "--- FFI overhead ({} provider) ---", report.provider)?;
    writeln!(out, "Simple calls:  {}", report.config.simple_call_count)?;
    writeln!(out, "Complex calls: {}", report.config.complex_call_count)?;
    writeln!(out, "List size:     {}", report.config.list_size)?;
    writeln!(out)?;

    if let Some(scalar) = &report.scalar {
        writeln!(out, "--- Scenario A: scalar add (a + b) ---")?;
        render_comparison(&mut out, scalar)?;
    }

    if let Some(bulk) = &report.bulk {
        writeln!(out, "--- Scenario B: sum of {} floats ---", report.config.list_size)?;
        render_comparison(&mut out, bulk)?;
    }

    if let Some(decomposition) = &report.decomposition {
        writeln!(
            out,
            "--- Scenario C: time split over {} calls ---",
            decomposition.call_count
        )?;
        render_decomposition(&mut out, decomposition)?;
    }

    for note in &report.notes {
        writeln!(out, "note: {}", note)?;
    }

    Ok(out)
}

fn render_comparison(out: &mut impl Write, result: &ComparisonResult) -> fmt::Result {
    writeln!(out, "Host baseline:  {:.3} ms", result.host_baseline_ms)?;
    writeln!(out, "Provider:       {:.3} ms", result.provider_ms)?;
    writeln!(out, "Comparison:     {}", framing(result))?;
    writeln!(out)
}

/// Describe a comparison in whichever direction the numbers point.
pub fn framing(result: &ComparisonResult) -> String {
    if result.provider_is_faster {
        match result.speedup {
            Some(speedup) => format!("provider is {:.2}x faster than host", speedup),
            None => "provider measured zero time".to_string(),
        }
    } else {
        match result.slowdown {
            Some(slowdown) => format!("provider is {:.2}x slower than host", slowdown),
            None => "host baseline measured zero time; ratio undefined".to_string(),
        }
    }
}

fn render_decomposition(out: &mut impl Write, result: &DecompositionResult) -> fmt::Result {
    let per_call = &result.per_call;

    writeln!(out, "Host total   (T_total): {:.3} ms", result.total_host_ms)?;
    writeln!(out, "Native total (T_native): {:.3} ms", result.total_native_ms)?;
    writeln!(out, "Overhead     (T_ffi):   {:.3} ms", result.total_overhead_ms)?;
    writeln!(out)?;
    writeln!(out, "Per call host:     {:.6} ms", per_call.per_call_host_ms)?;
    writeln!(out, "Per call native:   {:.6} ms", per_call.per_call_native_ms)?;
    writeln!(out, "Per call overhead: {:.6} ms", per_call.per_call_overhead_ms)?;

    match &per_call.shares {
        Some(shares) => writeln!(
            out,
            "Native compute {:.2}%, boundary overhead {:.2}% of host total",
            shares.native_share_pct, shares.overhead_share_pct
        )?,
        None => writeln!(out, "Shares undefined: host total was zero")?,
    }
    writeln!(out)
}
