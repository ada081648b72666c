// Copyright 2025 the Vello Authors and the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer and rounding helpers shared by baking and compositing.

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "Float methods come from `std` when it is enabled.")]
use core_maths::CoreFloat as _;

/// Division rounding toward negative infinity.
///
/// Subpixel windows start left of the region, so `-2 / 3` must give `-1`
/// and not `0` as truncating division would.
#[inline]
pub(crate) fn floor_div(a: i32, b: i32) -> i32 {
    debug_assert!(b > 0, "divisor must be positive");
    a.div_euclid(b)
}

/// Smallest multiple of `p` that is greater than or equal to `n`, for `n >= 0`.
#[inline]
pub(crate) fn ceil_to_multiple(n: i32, p: i32) -> i32 {
    debug_assert!(p > 0, "multiple must be positive");
    p * ((n + p - 1) / p)
}

/// Rounds to the nearest integer, halfway cases away from zero.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Metrics and cursor positions are far inside the `i32` range."
)]
pub(crate) fn round_to_i32(v: f64) -> i32 {
    v.round() as i32
}

/// Rounds `v` to the nearest integer and clamps it to `0..=max`.
#[inline]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "The value is clamped to `0..=max` before the cast."
)]
pub(crate) fn round_clamped(v: f64, max: u32) -> u32 {
    v.round().clamp(0.0, f64::from(max)) as u32
}
