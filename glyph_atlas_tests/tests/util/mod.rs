// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions and types shared across tests.

mod engine;

pub(crate) use engine::{BoxEngine, ink_rows, ink_width, is_blank};

use glyph_atlas::GlyphBitmapInfo;

/// Asserts that `glyph` lies within a `width` by `height` atlas.
pub(crate) fn assert_in_bounds(glyph: &GlyphBitmapInfo, width: i32, height: i32) {
    assert!(
        0 <= glyph.x0 && glyph.x0 <= glyph.x1 && glyph.x1 <= width,
        "glyph columns {}..{} outside 0..{width}",
        glyph.x0,
        glyph.x1
    );
    assert!(
        0 <= glyph.y0 && glyph.y0 <= glyph.y1 && glyph.y1 <= height,
        "glyph rows {}..{} outside 0..{height}",
        glyph.y0,
        glyph.y1
    );
}

/// Asserts that no two non-empty glyph boxes share a pixel.
pub(crate) fn assert_disjoint(glyphs: &[GlyphBitmapInfo]) {
    for (i, a) in glyphs.iter().enumerate() {
        for (j, b) in glyphs.iter().enumerate().skip(i + 1) {
            assert!(!a.overlaps(b), "glyph {i} {a:?} overlaps glyph {j} {b:?}");
        }
    }
}

/// Asserts that every inked sample of an atlas lies inside some glyph box.
///
/// `stride` is the physical row length in samples and `subpixel_scale` the
/// number of samples per box column.
pub(crate) fn assert_ink_is_boxed(
    pixels: &[u8],
    stride: usize,
    subpixel_scale: usize,
    glyphs: &[GlyphBitmapInfo],
) {
    for (y, row) in pixels.chunks_exact(stride).enumerate() {
        for (x, _) in row.iter().enumerate().filter(|&(_, &cover)| cover != 0) {
            let (px, py) = ((x / subpixel_scale) as i32, y as i32);
            assert!(
                glyphs
                    .iter()
                    .any(|g| g.x0 <= px && px < g.x1 && g.y0 <= py && py < g.y1),
                "inked sample ({x}, {y}) is outside every glyph box"
            );
        }
    }
}

/// A `width` by `height` BGRA8 buffer filled with opaque `value`.
pub(crate) fn bgra(width: usize, height: usize, value: u8) -> Vec<u8> {
    vec![value; width * height * 4]
}

/// The BGRA8 pixel at (`x`, `y`) of a buffer `width` pixels wide.
pub(crate) fn pixel(buffer: &[u8], width: usize, x: usize, y: usize) -> [u8; 4] {
    let start = (y * width + x) * 4;
    [
        buffer[start],
        buffer[start + 1],
        buffer[start + 2],
        buffer[start + 3],
    ]
}
