// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shrinking glyph boxes to their inked area.

use crate::{CoverageCanvas, GlyphBitmapInfo};

/// Shrinks `glyph` to the smallest box containing nonzero coverage.
///
/// The box is scanned in the atlas `canvas`, whose columns are subpixels:
/// `subpixel_scale` samples per logical pixel. Horizontal edges snap to
/// whole subpixel cells. Parts of the box outside the canvas count as blank.
///
/// `xoff` and `yoff` move by the amount the left and top edges moved, so the
/// trimmed box still lines up with the untrimmed glyph origin.
///
/// A glyph without any coverage collapses to an empty box at its top-left
/// corner, clamped into the canvas.
pub fn trim_glyph_box(
    canvas: &CoverageCanvas<'_>,
    glyph: &mut GlyphBitmapInfo,
    subpixel_scale: u8,
) {
    let s = i32::from(subpixel_scale.max(1));
    let (x0, x1) = (glyph.x0 * s, glyph.x1 * s);

    let mut top = glyph.y0;
    let mut bottom = glyph.y1;
    while top < bottom && !row_has_ink(canvas, top, x0, x1) {
        top += 1;
    }
    while bottom > top && !row_has_ink(canvas, bottom - 1, x0, x1) {
        bottom -= 1;
    }

    if top >= bottom {
        let height = i32::try_from(canvas.height()).unwrap_or(i32::MAX);
        let width = i32::try_from(canvas.width()).unwrap_or(i32::MAX) / s;
        glyph.x0 = glyph.x0.clamp(0, width);
        glyph.x1 = glyph.x0;
        glyph.y0 = glyph.y0.clamp(0, height);
        glyph.y1 = glyph.y0;
        return;
    }

    let mut left = x1;
    let mut right = x0;
    for y in top..bottom {
        let row = row_at(canvas, y);
        let mut groups = (x0..x1).step_by(s as usize);
        if let Some(start) = groups.find(|&gx| group_has_ink(row, gx, s)) {
            left = left.min(start);
        }
        let mut groups = (x0..x1).step_by(s as usize).rev();
        if let Some(start) = groups.find(|&gx| group_has_ink(row, gx, s)) {
            right = right.max(start + s);
        }
    }

    glyph.xoff += (left - x0) as f32 / s as f32;
    glyph.yoff += (top - glyph.y0) as f32;
    glyph.x0 = left / s;
    glyph.x1 = right / s;
    glyph.y0 = top;
    glyph.y1 = bottom;
}

fn row_at<'c>(canvas: &'c CoverageCanvas<'_>, y: i32) -> Option<&'c [u8]> {
    usize::try_from(y).ok().and_then(|y| canvas.row(y))
}

/// Samples `x0..x1` of `row`, clipped to the row.
fn clipped<'r>(row: &'r [u8], x0: i32, x1: i32) -> &'r [u8] {
    let start = usize::try_from(x0).unwrap_or(0).min(row.len());
    let end = usize::try_from(x1).unwrap_or(0).clamp(start, row.len());
    &row[start..end]
}

fn row_has_ink(canvas: &CoverageCanvas<'_>, y: i32, x0: i32, x1: i32) -> bool {
    row_at(canvas, y).is_some_and(|row| clipped(row, x0, x1).iter().any(|&c| c != 0))
}

fn group_has_ink(row: Option<&[u8]>, start: i32, s: i32) -> bool {
    row.is_some_and(|row| clipped(row, start, start + s).iter().any(|&c| c != 0))
}
