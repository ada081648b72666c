// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`RasterEngine`] backed by the `swash` scaler.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    reason = "Glyph images and canvas coordinates are far smaller than `i32::MAX`."
)]

use alloc::vec::Vec;
use core::fmt;

use swash::scale::{Render, ScaleContext, Source};
use swash::zeno::{Format, Transform, Vector};
use swash::FontRef;

use crate::{CoverageCanvas, Error, ErrorKind, RasterEngine, VerticalMetrics};

/// Rasterizes outlines from the first face of a font file with `swash`.
///
/// Color glyphs and bitmap strikes are ignored; only outlines are drawn.
pub struct SwashEngine {
    data: Option<Vec<u8>>,
    context: ScaleContext,
    hinting: bool,
    kerning: bool,
}

impl SwashEngine {
    /// Creates an engine with no face loaded and hinting disabled.
    pub fn new() -> Self {
        Self {
            data: None,
            context: ScaleContext::new(),
            hinting: false,
            kerning: false,
        }
    }

    /// Whether outlines are hinted.
    pub fn hinting(&self) -> bool {
        self.hinting
    }

    /// Whether kerning was requested.
    pub fn kerning(&self) -> bool {
        self.kerning
    }

    fn font(&self) -> Option<FontRef<'_>> {
        FontRef::from_index(self.data.as_deref()?, 0)
    }
}

impl Default for SwashEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SwashEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwashEngine")
            .field("font_bytes", &self.data.as_ref().map(Vec::len))
            .field("hinting", &self.hinting)
            .field("kerning", &self.kerning)
            .finish_non_exhaustive()
    }
}

impl RasterEngine for SwashEngine {
    fn load_font(&mut self, data: Vec<u8>) -> Result<(), Error> {
        self.data = None;
        if FontRef::from_index(&data, 0).is_none() {
            return Err(Error::new(ErrorKind::InvalidFont));
        }
        self.data = Some(data);
        Ok(())
    }

    fn unload_font(&mut self) {
        self.data = None;
    }

    fn has_font(&self) -> bool {
        self.data.is_some()
    }

    fn set_options(&mut self, hinting: bool, kerning: bool) {
        self.hinting = hinting;
        self.kerning = kerning;
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        let Some(font) = self.font() else {
            return VerticalMetrics::default();
        };
        let metrics = font.metrics(&[]);
        let units_per_em = f64::from(metrics.units_per_em.max(1));
        VerticalMetrics {
            ascender: f64::from(metrics.ascent) / units_per_em,
            descender: -f64::from(metrics.descent.abs()) / units_per_em,
        }
    }

    fn units_per_em(&self) -> u16 {
        self.font().map_or(0, |font| font.metrics(&[]).units_per_em)
    }

    fn scale_for_pixel_size(&self, size: f32) -> f32 {
        match self.units_per_em() {
            0 => 0.0,
            units_per_em => size / f32::from(units_per_em),
        }
    }

    fn render_codepoint(
        &mut self,
        canvas: &mut CoverageCanvas<'_>,
        height: i32,
        ink: u8,
        x: f64,
        baseline: f64,
        codepoint: u32,
        subpixel_scale: u32,
    ) -> f64 {
        let Some(data) = self.data.as_deref() else {
            return x;
        };
        let Some(font) = FontRef::from_index(data, 0) else {
            return x;
        };
        let size = height as f32;
        let stretch = subpixel_scale.max(1) as f32;
        let glyph_id = font.charmap().map(codepoint);
        let advance = font.glyph_metrics(&[]).scale(size).advance_width(glyph_id) * stretch;

        let mut scaler = self
            .context
            .builder(font)
            .size(size)
            .hint(self.hinting)
            .build();
        let image = Render::new(&[Source::Outline])
            .format(Format::Alpha)
            .transform(Some(Transform::scale(stretch, 1.0)))
            .offset(Vector::new(x.fract() as f32, 0.0))
            .render(&mut scaler, glyph_id);

        let Some(image) = image else {
            log::debug!("U+{codepoint:04X} has no outline");
            return x + f64::from(advance);
        };

        let placement = image.placement;
        let origin_x = x.floor() as i32 + placement.left;
        let top = baseline.floor() as i32 + placement.top - 1;
        let width = placement.width as usize;
        if width > 0 {
            for (j, row) in image.data.chunks_exact(width).enumerate() {
                let y = top - j as i32;
                for (i, &cover) in row.iter().enumerate() {
                    if cover != 0 {
                        let scaled = (u32::from(cover) * u32::from(ink) + 127) / 255;
                        canvas.accumulate_up(origin_x + i as i32, y, scaled as u8);
                    }
                }
            }
        }

        x + f64::from(advance)
    }
}
