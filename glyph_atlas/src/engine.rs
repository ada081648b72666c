// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interface to a font rasterization engine.

use alloc::vec::Vec;

use crate::{CoverageCanvas, Error};

/// Ascender and descender of a face, as fractions of an em.
///
/// The descender is negative for faces that extend below the baseline.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct VerticalMetrics {
    /// Distance from the baseline to the top of the face.
    pub ascender: f64,
    /// Signed distance from the baseline to the bottom of the face.
    pub descender: f64,
}

/// Font loading, metrics and single-glyph rasterization.
///
/// The baker only ever talks to a font through this trait, so a synthetic
/// engine can stand in for a real one.
///
/// Metric and render methods are only called after a successful
/// [`load_font`](Self::load_font).
pub trait RasterEngine {
    /// Replaces the current face with the font in `data`.
    ///
    /// On failure the engine must be left without a face.
    fn load_font(&mut self, data: Vec<u8>) -> Result<(), Error>;

    /// Drops the current face, if any.
    fn unload_font(&mut self);

    /// Whether a face is loaded.
    fn has_font(&self) -> bool;

    /// Applies the hinting and kerning options of the renderer.
    fn set_options(&mut self, hinting: bool, kerning: bool) {
        let _ = (hinting, kerning);
    }

    /// Ascender and descender in ems.
    fn vertical_metrics(&self) -> VerticalMetrics;

    /// Design units per em of the face.
    fn units_per_em(&self) -> u16;

    /// Factor converting design units into pixels at `size` pixels per em.
    fn scale_for_pixel_size(&self, size: f32) -> f32;

    /// Rasterizes `codepoint` into `canvas` and returns the advanced cursor.
    ///
    /// `x` is in subpixel units and `baseline` is a row counted upward from
    /// the bottom of the canvas. Outlines are scaled to `height` pixels per em
    /// and stretched horizontally by `subpixel_scale`. Coverage is scaled by
    /// `ink / 255`. The return value is the cursor after the glyph's advance,
    /// in the same subpixel units as `x`.
    ///
    /// Samples falling outside the canvas must be dropped.
    fn render_codepoint(
        &mut self,
        canvas: &mut CoverageCanvas<'_>,
        height: i32,
        ink: u8,
        x: f64,
        baseline: f64,
        codepoint: u32,
        subpixel_scale: u32,
    ) -> f64;
}
