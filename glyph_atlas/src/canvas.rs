// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-channel coverage buffers.

/// A mutable view of a caller-owned, single-channel coverage buffer.
///
/// Rows are stored top to bottom in memory. Two addressing schemes are
/// offered: [`row`](Self::row) counts memory rows from the top, while
/// [`row_up_mut`](Self::row_up_mut) counts from the bottom, which is how the
/// baker and rasterization engines place baselines.
///
/// The width is the physical width in samples; for a subpixel atlas that is
/// the logical width times the subpixel scale.
#[derive(Debug)]
pub struct CoverageCanvas<'a> {
    data: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> CoverageCanvas<'a> {
    /// Wraps `data` as a `width` by `height` buffer.
    ///
    /// Returns `None` if `data` is shorter than `width * height`.
    pub fn new(data: &'a mut [u8], width: usize, height: usize) -> Option<Self> {
        let len = width.checked_mul(height)?;
        let data = data.get_mut(..len)?;
        Some(Self {
            data,
            width,
            height,
        })
    }

    /// Physical width in samples.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Sets every sample to zero.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// The memory row `y`, counted from the top.
    pub fn row(&self, y: usize) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get(start..start + self.width)
    }

    /// The memory row `y`, counted from the top.
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.data.get_mut(start..start + self.width)
    }

    /// The row `y` counted upward from the bottom edge.
    ///
    /// Negative rows and rows at or above the top edge are `None`.
    pub fn row_up_mut(&mut self, y: i32) -> Option<&mut [u8]> {
        let y = usize::try_from(y).ok()?;
        let y = self.height.checked_sub(y + 1)?;
        self.row_mut(y)
    }

    /// Combines `cover` into the sample at (`x`, `y`), with `y` counted
    /// upward from the bottom edge. Keeps the larger of the two values.
    ///
    /// Positions outside the buffer are ignored.
    pub fn accumulate_up(&mut self, x: i32, y: i32, cover: u8) {
        let Ok(x) = usize::try_from(x) else {
            return;
        };
        if let Some(sample) = self.row_up_mut(y).and_then(|row| row.get_mut(x)) {
            *sample = (*sample).max(cover);
        }
    }

    /// The underlying samples.
    pub fn data(&self) -> &[u8] {
        self.data
    }
}
