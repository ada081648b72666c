// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renderer configuration.

use crate::PixelFormat;

/// Flag word accepted by [`RendererConfig::from_flags`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RenderFlags(pub u32);

impl RenderFlags {
    /// No options set.
    pub const NONE: Self = Self(0);
    /// Enable font hinting.
    pub const HINTING: Self = Self(1 << 0);
    /// Enable kerning.
    pub const KERNING: Self = Self(1 << 1);

    /// Whether every bit of `other` is set in `self`.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl core::ops::BitOr for RenderFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Height at which glyphs are rasterized relative to the baked font height.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum RenderHeight {
    /// Rasterize at the full font height.
    #[default]
    Full,
    /// Rasterize at 86% of the font height.
    ///
    /// Useful for faces whose ascender and descender extend past one em and
    /// would otherwise bleed into the neighbouring atlas row.
    Reduced,
}

impl RenderHeight {
    /// The rasterization height in pixels for a baked `font_height`.
    pub const fn apply(self, font_height: i32) -> i32 {
        match self {
            Self::Full => font_height,
            Self::Reduced => font_height / 100 * 86 + font_height % 100 * 86 / 100,
        }
    }
}

/// Options a [`RendererContext`](crate::RendererContext) is built from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RendererConfig {
    /// Whether the rasterization engine hints outlines.
    pub hinting: bool,
    /// Whether kerning is requested from the engine.
    pub kerning: bool,
    /// Gamma exponent of the compositing lookup table.
    pub gamma: f32,
    /// Layout of destination pixels for compositing.
    pub pixel_format: PixelFormat,
    /// Rasterization height used while baking.
    pub render_height: RenderHeight,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            hinting: true,
            kerning: true,
            gamma: 1.8,
            pixel_format: PixelFormat::BGRA8,
            render_height: RenderHeight::Full,
        }
    }
}

impl RendererConfig {
    /// Creates a configuration from a flag word and a gamma exponent.
    pub fn from_flags(flags: RenderFlags, gamma: f32) -> Self {
        Self {
            hinting: flags.contains(RenderFlags::HINTING),
            kerning: flags.contains(RenderFlags::KERNING),
            gamma,
            ..Self::default()
        }
    }

    /// Sets whether outlines are hinted.
    pub fn with_hinting(mut self, hinting: bool) -> Self {
        self.hinting = hinting;
        self
    }

    /// Sets whether kerning is requested.
    pub fn with_kerning(mut self, kerning: bool) -> Self {
        self.kerning = kerning;
        self
    }

    /// Sets the gamma exponent.
    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    /// Sets the destination pixel layout.
    pub fn with_pixel_format(mut self, pixel_format: PixelFormat) -> Self {
        self.pixel_format = pixel_format;
        self
    }

    /// Sets the rasterization height used while baking.
    pub fn with_render_height(mut self, render_height: RenderHeight) -> Self {
        self.render_height = render_height;
        self
    }

    /// The flag word equivalent of `hinting` and `kerning`.
    pub fn flags(&self) -> RenderFlags {
        let mut flags = RenderFlags::NONE;
        if self.hinting {
            flags = flags | RenderFlags::HINTING;
        }
        if self.kerning {
            flags = flags | RenderFlags::KERNING;
        }
        flags
    }
}
