// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row packing of a codepoint range into an atlas.

#![allow(
    clippy::cast_possible_truncation,
    reason = "Cursor positions are bounded by the atlas size, which fits in `u16`."
)]

use super::trim::trim_glyph_box;
use super::{BakeStatus, GlyphBitmapInfo};
use crate::math::{ceil_to_multiple, round_to_i32};
use crate::{CoverageCanvas, Error, ErrorKind, RasterEngine, RenderHeight};

/// Coverage value the engine is asked to render with.
const INK: u8 = 0xff;

/// Rasterizes `glyphs.len()` codepoints starting at `first_char` into `pixels`.
///
/// `pixels` is a single-channel buffer of `width * subpixel_scale` columns by
/// `height` rows; it is cleared first. Record `i` of `glyphs` receives the
/// glyph for `first_char + i`.
///
/// Rows are `font_height` plus a tenth of it above and below. A row is
/// considered full once less than `font_height` pixels remain, whatever the
/// actual advance of the next glyph. When the buffer runs out of rows the
/// records baked so far stay valid and the rest are left untouched.
pub fn bake_font_bitmap<E: RasterEngine + ?Sized>(
    engine: &mut E,
    render_height: RenderHeight,
    font_height: i32,
    pixels: &mut [u8],
    width: u16,
    height: u16,
    first_char: u32,
    glyphs: &mut [GlyphBitmapInfo],
    subpixel_scale: u8,
) -> Result<BakeStatus, Error> {
    if subpixel_scale == 0 {
        return Err(Error::invalid_subpixel_scale(subpixel_scale.into()));
    }
    if font_height <= 0 {
        return Err(Error::new(ErrorKind::InvalidFontHeight));
    }
    if !engine.has_font() {
        return Err(Error::new(ErrorKind::NoFont));
    }

    let stride = usize::from(width) * usize::from(subpixel_scale);
    let required = stride * usize::from(height);
    let available = pixels.len();
    let mut canvas = CoverageCanvas::new(pixels, stride, usize::from(height))
        .ok_or_else(|| Error::buffer_too_small(required, available))?;
    canvas.clear();

    let metrics = engine.vertical_metrics();
    let ascender_px = round_to_i32(metrics.ascender * f64::from(font_height));
    let descender_px = round_to_i32(metrics.descender * f64::from(font_height));

    let s = i32::from(subpixel_scale);
    let width = i32::from(width);
    let height = i32::from(height);

    let pad = font_height / 10;
    // Bounds every later product by the atlas size.
    let Some(row_step) = font_height
        .checked_add(2 * pad)
        .filter(|&step| step <= height)
    else {
        log::warn!("atlas of {width}x{height} has no room for a row at height {font_height}");
        return Ok(if glyphs.is_empty() {
            BakeStatus::Complete
        } else {
            BakeStatus::OutOfSpace { baked: 0 }
        });
    };
    let render_height = render_height.apply(font_height);

    let x_start = s;
    let mut x = x_start;
    let mut y = height;

    for (index, (codepoint, glyph)) in (first_char..).zip(glyphs.iter_mut()).enumerate() {
        if x.saturating_add(font_height * s) > width * s {
            x = x_start;
            y -= row_step;
        }
        if y - row_step < 0 {
            log::warn!(
                "atlas of {width}x{height} is full after {index} glyphs at height {font_height}"
            );
            return Ok(BakeStatus::OutOfSpace { baked: index });
        }
        let baseline = y - pad - font_height;

        let advance = engine.render_codepoint(
            &mut canvas,
            render_height,
            INK,
            f64::from(x),
            f64::from(baseline),
            codepoint,
            u32::from(subpixel_scale),
        );
        let next_x = if s == 1 {
            (advance + 1.0) as i32
        } else {
            ceil_to_multiple(round_to_i32(advance), s)
        };

        *glyph = GlyphBitmapInfo {
            x0: x / s,
            y0: height - (baseline + ascender_px + pad),
            x1: next_x / s,
            y1: height - (baseline + descender_px - pad),
            xoff: 0.0,
            yoff: -pad as f32,
            xadvance: ((advance - f64::from(x)) / f64::from(s)) as f32,
        };
        trim_glyph_box(&canvas, glyph, subpixel_scale);

        log::debug!(
            "glyph U+{codepoint:04X}: box ({}, {}) ({}, {}), offset ({}, {}), advance {}",
            glyph.x0,
            glyph.y0,
            glyph.x1,
            glyph.y1,
            glyph.xoff,
            glyph.yoff,
            glyph.xadvance
        );

        x = next_x;
    }

    Ok(BakeStatus::Complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::VerticalMetrics;
    use alloc::vec;
    use alloc::vec::Vec;

    /// Draws every glyph as a solid block half an em wide, from the baseline
    /// up to 0.7 em. Codepoint 0x20 advances without ink.
    struct BlockEngine {
        loaded: bool,
    }

    impl RasterEngine for BlockEngine {
        fn load_font(&mut self, _data: Vec<u8>) -> Result<(), Error> {
            self.loaded = true;
            Ok(())
        }

        fn unload_font(&mut self) {
            self.loaded = false;
        }

        fn has_font(&self) -> bool {
            self.loaded
        }

        fn vertical_metrics(&self) -> VerticalMetrics {
            VerticalMetrics {
                ascender: 0.8,
                descender: -0.2,
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
            let s = subpixel_scale as i32;
            let advance = height / 2;
            if codepoint != 0x20 {
                let (x, baseline) = (x as i32, baseline as i32);
                for row in baseline..baseline + height * 7 / 10 {
                    for col in x + s..x + (advance - 1) * s {
                        canvas.accumulate_up(col, row, ink);
                    }
                }
            }
            x + f64::from(advance * s)
        }
    }

    fn engine() -> BlockEngine {
        BlockEngine { loaded: true }
    }

    #[test]
    fn first_glyph_geometry() {
        let mut pixels = vec![0_u8; 64 * 64];
        let mut glyphs = [GlyphBitmapInfo::default(); 1];
        let status = bake_font_bitmap(
            &mut engine(),
            RenderHeight::Full,
            20,
            &mut pixels,
            64,
            64,
            u32::from('A'),
            &mut glyphs,
            1,
        )
        .unwrap();
        assert_eq!(status, BakeStatus::Complete);

        // Baseline sits at 64 - 2 - 20 = 42 rows from the bottom, so ink
        // covers memory rows 8..22 and columns 2..10.
        let glyph = glyphs[0];
        assert_eq!((glyph.x0, glyph.y0, glyph.x1, glyph.y1), (2, 8, 10, 22));
        assert_eq!(glyph.xadvance, 10.0);
        assert_eq!(glyph.xoff, 1.0);
        // Untrimmed top was 64 - (42 + 16 + 2) = 4 with yoff -2.
        assert_eq!(glyph.yoff, 2.0);
        assert_eq!(pixels[8 * 64 + 2], 0xff);
        assert_eq!(pixels[7 * 64 + 2], 0);
    }

    #[test]
    fn buffer_is_cleared() {
        let mut pixels = vec![0x55_u8; 32 * 32];
        let mut glyphs = [GlyphBitmapInfo::default(); 1];
        let status = bake_font_bitmap(
            &mut engine(),
            RenderHeight::Full,
            10,
            &mut pixels,
            32,
            32,
            0x20,
            &mut glyphs,
            1,
        )
        .unwrap();
        assert!(status.is_complete());
        assert!(pixels.iter().all(|&p| p == 0));
    }

    #[test]
    fn out_of_space_keeps_baked_glyphs() {
        // Rows are 24 pixels; a 40x30 atlas holds one row of two glyphs.
        let mut pixels = vec![0_u8; 40 * 30];
        let mut glyphs = [GlyphBitmapInfo::default(); 5];
        let status = bake_font_bitmap(
            &mut engine(),
            RenderHeight::Full,
            20,
            &mut pixels,
            40,
            30,
            u32::from('a'),
            &mut glyphs,
            1,
        )
        .unwrap();
        assert_eq!(status, BakeStatus::OutOfSpace { baked: 2 });
        assert!(!glyphs[0].is_empty());
        assert!(!glyphs[1].is_empty());
        assert!(!glyphs[0].overlaps(&glyphs[1]));
        assert_eq!(glyphs[2], GlyphBitmapInfo::default());
    }

    #[test]
    fn subpixel_cursor_stays_cell_aligned() {
        let mut pixels = vec![0_u8; 64 * 3 * 32];
        let mut glyphs = [GlyphBitmapInfo::default(); 3];
        let status = bake_font_bitmap(
            &mut engine(),
            RenderHeight::Full,
            10,
            &mut pixels,
            64,
            32,
            u32::from('a'),
            &mut glyphs,
            3,
        )
        .unwrap();
        assert!(status.is_complete());
        // Each glyph advances exactly 15 subpixels, a multiple of the scale,
        // so consecutive glyphs start 5 pixels apart.
        for pair in glyphs.windows(2) {
            assert_eq!(pair[1].x0 - pair[0].x0, 5);
            assert!(!pair[0].overlaps(&pair[1]));
        }
        assert_eq!(glyphs[0].xadvance, 5.0);
    }

    #[test]
    fn oversized_font_height_is_out_of_space() {
        let mut pixels = vec![0x55_u8; 8 * 3 * 8];
        let mut glyphs = [GlyphBitmapInfo::default(); 2];
        for font_height in [9, 1_000_000_000, i32::MAX] {
            let status = bake_font_bitmap(
                &mut engine(),
                RenderHeight::Reduced,
                font_height,
                &mut pixels,
                8,
                8,
                0x41,
                &mut glyphs,
                3,
            )
            .unwrap();
            assert_eq!(status, BakeStatus::OutOfSpace { baked: 0 });
        }
        assert!(pixels.iter().all(|&p| p == 0));
        assert_eq!(glyphs, [GlyphBitmapInfo::default(); 2]);
    }

    #[test]
    fn rejects_bad_arguments() {
        let mut pixels = vec![0_u8; 10];
        let mut glyphs = [GlyphBitmapInfo::default(); 1];
        let err = bake_font_bitmap(
            &mut engine(),
            RenderHeight::Full,
            10,
            &mut pixels,
            8,
            8,
            0x41,
            &mut glyphs,
            1,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BufferTooSmall);

        let err = bake_font_bitmap(
            &mut BlockEngine { loaded: false },
            RenderHeight::Full,
            10,
            &mut pixels,
            2,
            2,
            0x41,
            &mut glyphs,
            1,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoFont);

        let err = bake_font_bitmap(
            &mut engine(),
            RenderHeight::Full,
            10,
            &mut pixels,
            2,
            2,
            0x41,
            &mut glyphs,
            0,
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSubpixelScale);
    }
}
