// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gamma lookup tables.

#![allow(
    clippy::cast_possible_truncation,
    reason = "Table values are clamped to the range of their target type before casting."
)]

use core::fmt::{Debug, Formatter};

use crate::math::round_clamped;

#[cfg(feature = "libm")]
#[allow(unused_imports, reason = "Float methods come from `std` when it is enabled.")]
use core_maths::CoreFloat as _;

/// Number of bits in a linearized value.
pub const LINEAR_SHIFT: u32 = 30;

/// Largest linearized value.
pub const LINEAR_MASK: u32 = (1 << LINEAR_SHIFT) - 1;

/// Forward and inverse gamma mapping over the 8-bit range.
///
/// `dir` maps an encoded byte into a 30-bit linearized value and `inv` maps
/// it back. The forward table is strictly increasing, and `inv` returns the
/// byte whose rounding interval contains its argument, so `inv(dir(v)) == v`
/// for every byte and every exponent.
#[derive(Clone)]
pub struct GammaLut {
    gamma: f64,
    dir: [u32; 256],
    /// `thresholds[k]` is the smallest linear value that maps to `k + 1`.
    thresholds: [u32; 255],
}

impl GammaLut {
    /// Builds the tables for the exponent `gamma`.
    ///
    /// A non-positive or non-finite exponent falls back to `1.0`, the identity.
    pub fn new(gamma: f64) -> Self {
        let gamma = if gamma.is_finite() && gamma > 0.0 {
            gamma
        } else {
            log::warn!("invalid gamma exponent {gamma}, using 1.0");
            1.0
        };
        let linear = |encoded: f64| {
            round_clamped(
                (encoded / 255.0).powf(gamma) * f64::from(LINEAR_MASK),
                LINEAR_MASK,
            )
        };

        let mut dir = [0_u32; 256];
        for (i, entry) in (0_u32..).zip(dir.iter_mut()) {
            *entry = linear(f64::from(i));
        }
        // Steep curves flatten the ends of the table; spread equal entries
        // apart so every byte keeps its own linear value.
        let mut floor = 0;
        for entry in &mut dir {
            *entry = (*entry).max(floor);
            floor = *entry + 1;
        }
        let mut ceiling = LINEAR_MASK;
        for entry in dir.iter_mut().rev() {
            *entry = (*entry).min(ceiling);
            ceiling = entry.saturating_sub(1);
        }

        let mut thresholds = [0_u32; 255];
        for (k, threshold) in (0_u32..).zip(thresholds.iter_mut()) {
            let (lo, hi) = (dir[k as usize] + 1, dir[k as usize + 1]);
            *threshold = linear(f64::from(k) + 0.5).clamp(lo, hi);
        }

        Self {
            gamma,
            dir,
            thresholds,
        }
    }

    /// The exponent the tables were built for.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Maps an encoded value into linear space.
    #[inline(always)]
    pub fn dir(&self, v: u8) -> u32 {
        self.dir[usize::from(v)]
    }

    /// Maps a linear value back into encoded space, rounding to the nearest
    /// byte. Values above [`LINEAR_MASK`] map to 255.
    #[inline]
    pub fn inv(&self, v: u32) -> u8 {
        self.thresholds.partition_point(|&t| t <= v) as u8
    }
}

impl Debug for GammaLut {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GammaLut")
            .field("gamma", &self.gamma)
            .finish_non_exhaustive()
    }
}
