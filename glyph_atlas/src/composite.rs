// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gamma-correct compositing of coverage onto color buffers.
//!
//! Both blend paths interpolate in the linear space of a [`GammaLut`]: the ink
//! and destination channels are mapped through `dir`, mixed by the coverage
//! derived weight, and mapped back through `inv`. Blending in encoded space
//! instead makes thin strokes look too dark on light backgrounds and too light
//! on dark ones.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Interpolated values lie between their two inputs, which are in range."
)]

use crate::math::floor_div;
use crate::{GammaLut, LcdDistributionLut, PixelFormat, RendererColor};

/// Largest channel and coverage value.
const BASE_MASK: u32 = 0xff;

/// Number of coverage samples per pixel in subpixel blending.
const SUBPIXEL_SCALE: i32 = 3;

/// Blends solid ink into color buffers through coverage masks.
///
/// Holds the gamma table, the subpixel kernel and the destination layout.
/// Destinations and coverage masks are caller-owned and only touched within
/// the region passed to each call.
#[derive(Clone, Debug)]
pub struct Compositor {
    gamma: GammaLut,
    lcd: LcdDistributionLut,
    format: PixelFormat,
}

impl Compositor {
    /// Creates a compositor writing pixels laid out as `format`.
    pub fn new(gamma: GammaLut, lcd: LcdDistributionLut, format: PixelFormat) -> Self {
        Self { gamma, lcd, format }
    }

    /// The gamma table blends are computed with.
    pub fn gamma(&self) -> &GammaLut {
        &self.gamma
    }

    /// The subpixel distribution kernel.
    pub fn lcd_distribution(&self) -> &LcdDistributionLut {
        &self.lcd
    }

    /// The destination pixel layout.
    pub fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    /// Blends `color` into a `width` by `height` region of `dest`, one
    /// coverage sample per pixel.
    ///
    /// `dest_stride` and `coverage_stride` are row pitches in bytes. Fully
    /// covered pixels receive the ink channels unchanged; uncovered pixels are
    /// not touched.
    pub fn blend_gamma(
        &self,
        dest: &mut [u8],
        dest_stride: usize,
        coverage: &[u8],
        coverage_stride: usize,
        width: usize,
        height: usize,
        color: RendererColor,
    ) {
        self.blend_rows(
            dest,
            dest_stride,
            coverage,
            coverage_stride,
            width,
            height,
            width,
            |row, covers| self.blend_solid_hspan(row, covers, color, 0xff),
        );
    }

    /// Blends `color` into a `width` by `height` region of `dest`, three
    /// horizontal coverage samples per pixel.
    ///
    /// Each color channel is weighted by the light distribution kernel applied
    /// around its own subpixel sample. Any channel outside the pixel format's
    /// color channels is left untouched, as are channels whose filtered
    /// coverage is zero.
    pub fn blend_gamma_subpixel(
        &self,
        dest: &mut [u8],
        dest_stride: usize,
        coverage: &[u8],
        coverage_stride: usize,
        width: usize,
        height: usize,
        color: RendererColor,
    ) {
        self.blend_gamma_subpixel_shifted(
            dest,
            dest_stride,
            coverage,
            coverage_stride,
            width,
            height,
            color,
            0,
        );
    }

    /// Like [`blend_gamma_subpixel`](Self::blend_gamma_subpixel), with the
    /// coverage mask shifted right by `shift` subpixels.
    ///
    /// This positions glyphs at a third of a pixel. Samples shifted past the
    /// right edge of the region are dropped.
    pub fn blend_gamma_subpixel_shifted(
        &self,
        dest: &mut [u8],
        dest_stride: usize,
        coverage: &[u8],
        coverage_stride: usize,
        width: usize,
        height: usize,
        color: RendererColor,
        shift: u8,
    ) {
        let samples = width * SUBPIXEL_SCALE as usize;
        self.blend_rows(
            dest,
            dest_stride,
            coverage,
            coverage_stride,
            width,
            height,
            samples,
            |row, covers| {
                self.blend_solid_hspan_subpixel(row, i32::from(shift), covers, color, 0xff);
            },
        );
    }

    /// Pairs up destination and coverage rows of a region.
    fn blend_rows(
        &self,
        dest: &mut [u8],
        dest_stride: usize,
        coverage: &[u8],
        coverage_stride: usize,
        width: usize,
        height: usize,
        samples: usize,
        mut blend_row: impl FnMut(&mut [u8], &[u8]),
    ) {
        let row_bytes = self.format.row_bytes(width);
        for y in 0..height {
            let dest_start = y * dest_stride;
            let cover_start = y * coverage_stride;
            let row = dest.get_mut(dest_start..dest_start + row_bytes);
            let covers = coverage.get(cover_start..cover_start + samples);
            debug_assert!(
                row.is_some() && covers.is_some(),
                "region row {y} lies outside the destination or coverage buffer"
            );
            let (Some(row), Some(covers)) = (row, covers) else {
                return;
            };
            blend_row(row, covers);
        }
    }

    fn blend_solid_hspan(&self, row: &mut [u8], covers: &[u8], color: RendererColor, ink_alpha: u8) {
        if ink_alpha == 0 {
            return;
        }
        let rgb = color.to_array();
        let ink_alpha = u32::from(ink_alpha);
        for (pixel, &cover) in row
            .chunks_exact_mut(self.format.bytes_per_pixel())
            .zip(covers)
        {
            let alpha = (ink_alpha * (u32::from(cover) + 1)) >> 8;
            if alpha == BASE_MASK {
                for (channel, value) in self.format.channels().into_iter().zip(rgb) {
                    pixel[channel] = value;
                }
            } else if alpha > 0 {
                for (channel, value) in self.format.channels().into_iter().zip(rgb) {
                    pixel[channel] = self.blend_channel(pixel[channel], value, alpha);
                }
            }
        }
    }

    /// Mixes `ink` into `dst` by `alpha / 256` in linear space.
    #[inline]
    fn blend_channel(&self, dst: u8, ink: u8, alpha: u32) -> u8 {
        let d = i64::from(self.gamma.dir(dst));
        let c = i64::from(self.gamma.dir(ink));
        let mixed = (((c - d) * i64::from(alpha)) >> 8) + d;
        self.gamma.inv(mixed as u32)
    }

    /// Blends one row of subpixel coverage.
    ///
    /// `x_lcd` is the subpixel position of `covers[0]` relative to the start
    /// of `row`. Pixels whose kernel window touches any sample are visited,
    /// clipped to the row.
    fn blend_solid_hspan_subpixel(
        &self,
        row: &mut [u8],
        x_lcd: i32,
        covers: &[u8],
        color: RendererColor,
        ink_alpha: u8,
    ) {
        let bpp = self.format.bytes_per_pixel();
        let Ok(len) = i32::try_from(covers.len()) else {
            return;
        };
        let Ok(pixels) = i32::try_from(row.len() / bpp) else {
            return;
        };
        if len == 0 || pixels == 0 {
            return;
        }
        let x_min = floor_div(x_lcd - 2, SUBPIXEL_SCALE).max(0);
        let x_max = floor_div(x_lcd + len + 1, SUBPIXEL_SCALE).min(pixels - 1);

        let rgb = color.to_array();
        let ink_alpha = i64::from(ink_alpha);
        for x in x_min..=x_max {
            let start = x as usize * bpp;
            let pixel = &mut row[start..start + bpp];
            for (i, (channel, value)) in self.format.channels().into_iter().zip(rgb).enumerate() {
                let center = x * SUBPIXEL_SCALE - x_lcd + i as i32;
                let cover = self.lcd.convolve(covers, center, 0, len - 1);
                if cover == 0 {
                    continue;
                }
                let alpha = (i64::from(cover) + 1) * (ink_alpha + 1);
                let ink = i64::from(self.gamma.dir(value));
                let back = i64::from(self.gamma.dir(pixel[channel]));
                let mixed = ((ink - back) * alpha + (back << 16)) >> 16;
                pixel[channel] = self.gamma.inv(mixed as u32);
            }
        }
    }
}
