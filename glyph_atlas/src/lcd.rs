// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subpixel light distribution kernel.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Weighted coverage is floored into `0..=255` before casting."
)]

use core::fmt::{Debug, Formatter};

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "Float methods come from `std` when it is enabled.")]
use core_maths::CoreFloat as _;

/// Symmetric coverage filter for horizontal subpixel rendering.
///
/// A sample contributes to its own subpixel with the primary weight, to the
/// two adjacent subpixels with the secondary weight and to the two subpixels
/// beyond those with the tertiary weight. Weights are normalized so that a
/// fully covered neighbourhood convolves to at most 255.
#[derive(Clone)]
pub struct LcdDistributionLut {
    /// Per coverage value, indexed by tap distance (0, 1, 2).
    taps: [[u8; 3]; 256],
}

impl LcdDistributionLut {
    /// Primary, secondary and tertiary weights used by every renderer.
    ///
    /// The textbook values are `(1/3, 2/9, 1/9)`; these are tuned for sharper
    /// stems.
    pub const DEFAULT_WEIGHTS: (f64, f64, f64) = (0.448, 0.184, 0.092);

    /// Builds the kernel from unnormalized weights.
    pub fn new(primary: f64, secondary: f64, tertiary: f64) -> Self {
        let norm = 1.0 / (primary + secondary * 2.0 + tertiary * 2.0);
        let weights = [primary * norm, secondary * norm, tertiary * norm];
        let mut taps = [[0_u8; 3]; 256];
        for (cover, entry) in (0_u8..=255).zip(taps.iter_mut()) {
            for (tap, weight) in entry.iter_mut().zip(weights) {
                *tap = (weight * f64::from(cover)).floor().clamp(0.0, 255.0) as u8;
            }
        }
        Self { taps }
    }

    /// Weighted coverage for the subpixel at `center`.
    ///
    /// Only samples inside `lo..=hi` contribute; anything outside that window
    /// or outside `covers` counts as zero. `center` itself may lie up to two
    /// samples outside the window and still pick up its neighbours.
    pub fn convolve(&self, covers: &[u8], center: i32, lo: i32, hi: i32) -> u32 {
        let Ok(last) = i32::try_from(covers.len()) else {
            return 0;
        };
        let lo = lo.max(0);
        let hi = hi.min(last - 1);
        let k_min = if center >= lo + 2 { -2 } else { lo - center };
        let k_max = if center <= hi - 2 { 2 } else { hi - center };

        let mut sum = 0_u32;
        for k in k_min..=k_max {
            let cover = covers[(center + k) as usize];
            sum += u32::from(self.taps[usize::from(cover)][k.unsigned_abs() as usize]);
        }
        sum
    }

    /// The contribution of a single sample at tap distance `distance`.
    pub fn tap(&self, cover: u8, distance: usize) -> u8 {
        self.taps[usize::from(cover)][distance]
    }
}

impl Default for LcdDistributionLut {
    fn default() -> Self {
        let (primary, secondary, tertiary) = Self::DEFAULT_WEIGHTS;
        Self::new(primary, secondary, tertiary)
    }
}

impl Debug for LcdDistributionLut {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LcdDistributionLut")
            .field("full_coverage_taps", &self.taps[255])
            .finish()
    }
}
