// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Baked glyph records.

/// Location and placement of a baked glyph within an atlas.
///
/// Box coordinates are atlas pixels. Rows count down from the first (top)
/// row of the atlas buffer and columns are logical pixels, not subpixels.
/// `x1` and `y1` are exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[repr(C)]
pub struct GlyphBitmapInfo {
    /// Left edge of the glyph box.
    pub x0: i32,
    /// Top edge of the glyph box.
    pub y0: i32,
    /// Right edge of the glyph box (exclusive).
    pub x1: i32,
    /// Bottom edge of the glyph box (exclusive).
    pub y1: i32,
    /// Horizontal offset from the pen position to the left edge of the box.
    pub xoff: f32,
    /// Vertical offset from the ascender line to the top edge of the box,
    /// positive downward.
    pub yoff: f32,
    /// Horizontal advance in pixels.
    pub xadvance: f32,
}

impl GlyphBitmapInfo {
    /// Width of the box in pixels, zero for an empty box.
    pub fn width(&self) -> i32 {
        (self.x1 - self.x0).max(0)
    }

    /// Height of the box in pixels, zero for an empty box.
    pub fn height(&self) -> i32 {
        (self.y1 - self.y0).max(0)
    }

    /// Whether the box contains no pixels, as for a space.
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Whether the boxes of `self` and `other` share any pixel.
    pub fn overlaps(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x0 < other.x1
            && other.x0 < self.x1
            && self.y0 < other.y1
            && other.y0 < self.y1
    }
}

/// Outcome of baking a codepoint range.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[must_use = "A partially baked atlas is missing glyphs."]
pub enum BakeStatus {
    /// Every requested codepoint was baked.
    Complete,
    /// The atlas filled up before the range was exhausted.
    ///
    /// The first `baked` records are valid; the rest were not written.
    OutOfSpace {
        /// Number of glyphs baked before space ran out.
        baked: usize,
    },
}

impl BakeStatus {
    /// Whether every requested codepoint was baked.
    pub fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }

    /// Number of valid records out of `requested`.
    pub fn baked(self, requested: usize) -> usize {
        match self {
            Self::Complete => requested,
            Self::OutOfSpace { baked } => baked,
        }
    }
}
