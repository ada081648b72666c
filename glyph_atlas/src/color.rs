// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ink colors and destination pixel layouts.

/// A solid, fully opaque ink color.
///
/// Partial transparency comes from the coverage buffer, never from the color.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct RendererColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl RendererColor {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);

    /// Creates a color from its 8-bit channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// The channels in red, green, blue order.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Describes where the color channels of a destination pixel live.
///
/// The compositor writes the three color channels at these byte offsets and
/// leaves every other byte of the pixel (such as an alpha channel) untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelFormat {
    bytes_per_pixel: usize,
    channels: [usize; 3],
}

impl PixelFormat {
    /// 32-bit pixels stored as blue, green, red, alpha.
    pub const BGRA8: Self = Self::new(4, [2, 1, 0]);
    /// 32-bit pixels stored as red, green, blue, alpha.
    pub const RGBA8: Self = Self::new(4, [0, 1, 2]);
    /// 24-bit pixels stored as red, green, blue.
    pub const RGB8: Self = Self::new(3, [0, 1, 2]);
    /// 24-bit pixels stored as blue, green, red.
    pub const BGR8: Self = Self::new(3, [2, 1, 0]);

    /// Creates a pixel format from its size and channel offsets.
    ///
    /// # Panics
    ///
    /// If any offset is not smaller than `bytes_per_pixel`.
    pub const fn new(bytes_per_pixel: usize, channels: [usize; 3]) -> Self {
        assert!(
            channels[0] < bytes_per_pixel
                && channels[1] < bytes_per_pixel
                && channels[2] < bytes_per_pixel,
            "channel offsets must lie within the pixel"
        );
        Self {
            bytes_per_pixel,
            channels,
        }
    }

    /// Size of one pixel in bytes.
    pub const fn bytes_per_pixel(&self) -> usize {
        self.bytes_per_pixel
    }

    /// Byte offsets of the red, green and blue channels within a pixel.
    pub const fn channels(&self) -> [usize; 3] {
        self.channels
    }

    /// Number of bytes covered by `width` consecutive pixels.
    pub const fn row_bytes(&self, width: usize) -> usize {
        width * self.bytes_per_pixel
    }
}

impl Default for PixelFormat {
    fn default() -> Self {
        Self::BGRA8
    }
}
