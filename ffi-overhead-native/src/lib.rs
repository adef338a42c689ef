// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Ankit Kumar Pandey

//! FFI Overhead Native Routines
//!
//! Compute routines exported with the C ABI, plus [`CAbiProvider`], which
//! calls them through `extern "C"` function pointers so every call in a
//! benchmark loop is a real indirect C-ABI call rather than inlined Rust.
//!
//! The library is also built as a `cdylib`, so the same symbols can be
//! loaded from C or any other host that speaks the C ABI.

use std::hint::black_box;
use std::time::Instant;

use libc::{c_int, size_t};

use ffi_overhead_core::{NativeCallError, NativeComputeProvider, TimedResult};

/// Call completed; the out parameter is written.
pub const FFI_OK: c_int = 0;
/// `data` was null while `len` was non-zero.
pub const FFI_ERR_NULL_DATA: c_int = 1;
/// The out pointer was null.
pub const FFI_ERR_NULL_OUT: c_int = 2;

/// Result of `ffi_sum_list_of_floats_with_timing`.
/// Layout is part of the exported ABI.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FfiTimingResult {
    pub result: f64,
    /// Nanoseconds spent summing, measured inside the routine.
    pub nanos: u64,
}

/// Add two integers.
#[no_mangle]
pub extern "C" fn ffi_sum_as_i64(a: i64, b: i64) -> i64 {
    a.wrapping_add(b)
}

/// Sum `len` doubles starting at `data` into `*out`.
///
/// # Safety
/// `data` must point to `len` readable doubles (it may be null when `len`
/// is 0) and `out` must be valid for a write.
#[no_mangle]
pub unsafe extern "C" fn ffi_sum_list_of_floats(
    data: *const f64,
    len: size_t,
    out: *mut f64,
) -> c_int {
    if out.is_null() {
        return FFI_ERR_NULL_OUT;
    }
    let values = match slice_from_raw(data, len) {
        Some(values) => values,
        None => return FFI_ERR_NULL_DATA,
    };

    *out = sum(values);
    FFI_OK
}

/// Sum `len` doubles and report how long the summation took.
///
/// Only the summation is timed; argument checks and the write to `*out`
/// fall outside the measured window.
///
/// # Safety
/// Same contract as [`ffi_sum_list_of_floats`].
#[no_mangle]
pub unsafe extern "C" fn ffi_sum_list_of_floats_with_timing(
    data: *const f64,
    len: size_t,
    out: *mut FfiTimingResult,
) -> c_int {
    if out.is_null() {
        return FFI_ERR_NULL_OUT;
    }
    let values = match slice_from_raw(data, len) {
        Some(values) => values,
        None => return FFI_ERR_NULL_DATA,
    };

    let start = Instant::now();
    let result = sum(values);
    let elapsed = start.elapsed();

    *out = FfiTimingResult {
        result,
        nanos: u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX),
    };
    FFI_OK
}

unsafe fn slice_from_raw<'a>(data: *const f64, len: size_t) -> Option<&'a [f64]> {
    if len == 0 {
        return Some(&[]);
    }
    if data.is_null() {
        return None;
    }
    Some(std::slice::from_raw_parts(data, len))
}

#[inline(always)]
fn sum(values: &[f64]) -> f64 {
    let mut total = 0.0;
    for value in values {
        total += value;
    }
    total
}

type SumAsI64Fn = extern "C" fn(i64, i64) -> i64;
type SumListFn = unsafe extern "C" fn(*const f64, size_t, *mut f64) -> c_int;
type SumListTimedFn = unsafe extern "C" fn(*const f64, size_t, *mut FfiTimingResult) -> c_int;

/// Provider that reaches the exported routines through C-ABI function
/// pointers.
///
/// The pointers pass through `black_box` once at construction, so the
/// optimizer cannot resolve the target and inline it into a timed loop.
#[derive(Debug, Clone, Copy)]
pub struct CAbiProvider {
    sum_as_i64: SumAsI64Fn,
    sum_list: SumListFn,
    sum_list_timed: SumListTimedFn,
}

impl CAbiProvider {
    pub fn new() -> Self {
        let provider = Self {
            sum_as_i64: black_box(ffi_sum_as_i64 as SumAsI64Fn),
            sum_list: black_box(ffi_sum_list_of_floats as SumListFn),
            sum_list_timed: black_box(ffi_sum_list_of_floats_with_timing as SumListTimedFn),
        };
        tracing::debug!(provider = provider.name(), "Resolved C ABI entry points");
        provider
    }
}

impl Default for CAbiProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl NativeComputeProvider for CAbiProvider {
    fn name(&self) -> &str {
        "c-abi"
    }

    fn scalar_add(&self, a: i64, b: i64) -> Result<i64, NativeCallError> {
        Ok((self.sum_as_i64)(a, b))
    }

    fn bulk_sum(&self, data: &[f64]) -> Result<f64, NativeCallError> {
        let mut out = 0.0;
        // SAFETY: the slice provides `len` readable doubles and `out` is a
        // live local.
        let status = unsafe { (self.sum_list)(data.as_ptr(), data.len(), &mut out) };
        check_status(status)?;
        Ok(out)
    }

    fn bulk_sum_timed(&self, data: &[f64]) -> Result<TimedResult, NativeCallError> {
        let mut out = FfiTimingResult::default();
        // SAFETY: as in `bulk_sum`.
        let status = unsafe { (self.sum_list_timed)(data.as_ptr(), data.len(), &mut out) };
        check_status(status)?;
        Ok(TimedResult {
            value: out.result,
            native_duration_nanos: out.nanos,
        })
    }
}

/// Map a routine's status code to a call error.
pub fn check_status(status: c_int) -> Result<(), NativeCallError> {
    match status {
        FFI_OK => Ok(()),
        FFI_ERR_NULL_DATA => Err(NativeCallError::NullPointer { argument: "data" }),
        FFI_ERR_NULL_OUT => Err(NativeCallError::NullPointer { argument: "out" }),
        code => Err(NativeCallError::Status { code }),
    }
}
