// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The renderer context tying a font engine to its blend state.

use alloc::vec::Vec;

use crate::math::round_to_i32;
use crate::{
    BakeStatus, Compositor, Error, ErrorKind, GammaLut, GlyphBitmapInfo, LcdDistributionLut,
    RasterEngine, RendererColor, RendererConfig,
};

/// A font rasterization engine together with the lookup tables used to bake
/// and composite its glyphs.
///
/// The tables are built once from a [`RendererConfig`] and never change
/// afterwards. A context is not synchronized; use one per thread.
#[derive(Debug)]
pub struct RendererContext<E> {
    engine: E,
    config: RendererConfig,
    compositor: Compositor,
}

impl<E: RasterEngine> RendererContext<E> {
    /// Creates a context around `engine`.
    ///
    /// The engine receives the hinting and kerning options right away; a font
    /// still has to be loaded before baking.
    pub fn new(config: RendererConfig, mut engine: E) -> Self {
        engine.set_options(config.hinting, config.kerning);
        let compositor = Compositor::new(
            GammaLut::new(f64::from(config.gamma)),
            LcdDistributionLut::default(),
            config.pixel_format,
        );
        Self {
            engine,
            config,
            compositor,
        }
    }

    /// The configuration the context was built from.
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }

    /// The rasterization engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// The rasterization engine, mutably.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// The blend state used for compositing.
    pub fn compositor(&self) -> &Compositor {
        &self.compositor
    }

    /// Reads and loads the font file at `path`.
    ///
    /// On failure the previously loaded face, if any, is dropped.
    #[cfg(feature = "std")]
    pub fn load_font(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let data = match std::fs::read(path) {
            Ok(data) => data,
            Err(err) => {
                self.engine.unload_font();
                log::warn!("failed to read font {}: {err}", path.display());
                return Err(err.into());
            }
        };
        self.load_font_data(data)?;
        log::info!("loaded font {}", path.display());
        Ok(())
    }

    /// Loads a font from its raw bytes.
    ///
    /// On failure the previously loaded face, if any, is dropped.
    pub fn load_font_data(&mut self, data: Vec<u8>) -> Result<(), Error> {
        let result = self.engine.load_font(data);
        if let Err(err) = &result {
            self.engine.unload_font();
            log::warn!("font load failed: {err}");
        }
        result
    }

    /// Whether a font is loaded.
    pub fn has_font(&self) -> bool {
        self.engine.has_font()
    }

    /// Pixel height of the loaded face at `size` pixels per em, from the
    /// bottom of its descender to the top of its ascender.
    pub fn font_height(&self, size: f32) -> Result<i32, Error> {
        if !self.engine.has_font() {
            return Err(Error::new(ErrorKind::NoFont));
        }
        let metrics = self.engine.vertical_metrics();
        let units_per_em = f64::from(self.engine.units_per_em());
        let scale = f64::from(self.engine.scale_for_pixel_size(size));
        Ok(round_to_i32(
            (metrics.ascender - metrics.descender) * units_per_em * scale,
        ))
    }

    /// Bakes `glyphs.len()` codepoints starting at `first_char` into `pixels`.
    ///
    /// See [`bake_font_bitmap`](crate::bake_font_bitmap) for the layout.
    pub fn bake_font_bitmap(
        &mut self,
        font_height: i32,
        pixels: &mut [u8],
        width: u16,
        height: u16,
        first_char: u32,
        glyphs: &mut [GlyphBitmapInfo],
        subpixel_scale: u8,
    ) -> Result<BakeStatus, Error> {
        crate::bake_font_bitmap(
            &mut self.engine,
            self.config.render_height,
            font_height,
            pixels,
            width,
            height,
            first_char,
            glyphs,
            subpixel_scale,
        )
    }

    /// Blends `color` through one coverage sample per pixel.
    ///
    /// See [`Compositor::blend_gamma`].
    pub fn blend_gamma(
        &self,
        dest: &mut [u8],
        dest_stride: usize,
        coverage: &[u8],
        coverage_stride: usize,
        width: usize,
        height: usize,
        color: RendererColor,
    ) {
        self.compositor.blend_gamma(
            dest,
            dest_stride,
            coverage,
            coverage_stride,
            width,
            height,
            color,
        );
    }

    /// Blends `color` through three coverage samples per pixel.
    ///
    /// See [`Compositor::blend_gamma_subpixel`].
    pub fn blend_gamma_subpixel(
        &self,
        dest: &mut [u8],
        dest_stride: usize,
        coverage: &[u8],
        coverage_stride: usize,
        width: usize,
        height: usize,
        color: RendererColor,
    ) {
        self.compositor.blend_gamma_subpixel(
            dest,
            dest_stride,
            coverage,
            coverage_stride,
            width,
            height,
            color,
        );
    }
}
