// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A synthetic rasterization engine drawing every glyph as a solid box.

use glyph_atlas::{CoverageCanvas, Error, ErrorKind, RasterEngine, VerticalMetrics};

const MAGIC: &[u8] = b"BOXF";

/// Draws each codepoint as a rectangle of full coverage.
///
/// The box starts one pixel right of the pen, is [`ink_width`] pixels wide and
/// [`ink_rows`] rows tall, and rests on the baseline unless the codepoint
/// [`descends`]. Every advance is the ink width plus two pixels. Font data is
/// accepted when it starts with `BOXF`.
#[derive(Debug, Default)]
pub(crate) struct BoxEngine {
    loaded: bool,
    pub(crate) hinting: bool,
    pub(crate) kerning: bool,
    /// Rasterization height of every rendered codepoint, in order.
    pub(crate) heights: Vec<i32>,
}

impl BoxEngine {
    /// An engine with a face already loaded.
    pub(crate) fn loaded() -> Self {
        Self {
            loaded: true,
            ..Self::default()
        }
    }

    /// Bytes the engine accepts as a font.
    pub(crate) fn font_data() -> Vec<u8> {
        MAGIC.to_vec()
    }
}

/// Whether `codepoint` renders without ink.
pub(crate) fn is_blank(codepoint: u32) -> bool {
    char::from_u32(codepoint).is_none_or(char::is_whitespace)
}

/// Whether `codepoint` extends below the baseline.
pub(crate) fn descends(codepoint: u32) -> bool {
    matches!(char::from_u32(codepoint), Some('g' | 'j' | 'p' | 'q' | 'y'))
}

/// Ink width in pixels at `height`.
pub(crate) fn ink_width(codepoint: u32, height: i32) -> i32 {
    height / 4 + (codepoint % 3) as i32
}

/// Inked rows at `height`, as `(below, above)` the baseline.
pub(crate) fn ink_rows(codepoint: u32, height: i32) -> (i32, i32) {
    let below = if descends(codepoint) { height / 5 } else { 0 };
    (below, height * 3 / 5)
}

impl RasterEngine for BoxEngine {
    fn load_font(&mut self, data: Vec<u8>) -> Result<(), Error> {
        self.loaded = data.starts_with(MAGIC);
        if self.loaded {
            Ok(())
        } else {
            Err(ErrorKind::InvalidFont.into())
        }
    }

    fn unload_font(&mut self) {
        self.loaded = false;
    }

    fn has_font(&self) -> bool {
        self.loaded
    }

    fn set_options(&mut self, hinting: bool, kerning: bool) {
        self.hinting = hinting;
        self.kerning = kerning;
    }

    fn vertical_metrics(&self) -> VerticalMetrics {
        VerticalMetrics {
            ascender: 0.75,
            descender: -0.25,
        }
    }

    fn units_per_em(&self) -> u16 {
        1000
    }

    fn scale_for_pixel_size(&self, size: f32) -> f32 {
        size / 1000.0
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
        self.heights.push(height);
        let s = subpixel_scale as i32;
        let width = ink_width(codepoint, height);
        if !is_blank(codepoint) {
            let (below, above) = ink_rows(codepoint, height);
            let (x, baseline) = (x as i32, baseline as i32);
            for row in baseline - below..baseline + above {
                for col in x + s..x + s + width * s {
                    canvas.accumulate_up(col, row, ink);
                }
            }
        }
        x + f64::from((width + 2) * s)
    }
}
