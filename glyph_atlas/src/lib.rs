// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph Atlas bakes the glyphs of a font into a packed, single-channel coverage
//! atlas and composites coverage onto color buffers with gamma-correct blending.
//!
//! Baking places a contiguous range of codepoints row by row into a caller-owned
//! buffer, optionally at three times the horizontal resolution for subpixel
//! rendering, and records where each glyph ended up in a [`GlyphBitmapInfo`].
//! Compositing then blends a solid [`RendererColor`] through that coverage,
//! either one sample per pixel ([`Compositor::blend_gamma`]) or one sample per
//! LCD subpixel ([`Compositor::blend_gamma_subpixel`]).
//!
//! A [`RendererContext`] bundles a [`RasterEngine`] with the gamma and LCD
//! lookup tables, which are built once from a [`RendererConfig`].
//!
//! ## Features
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc). Also enables loading fonts from a path.
//! - `libm`: Use floating point implementations from [libm].
//! - `swash` (enabled by default): Provides [`SwashEngine`], a [`RasterEngine`] backed by `swash`.
//! - `bytemuck`: Implements `bytemuck` traits for [`GlyphBitmapInfo`] and [`RendererColor`].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! ## Example
//!
//! ```
//! use glyph_atlas::{
//!     Compositor, GammaLut, LcdDistributionLut, PixelFormat, RendererColor,
//! };
//!
//! let compositor = Compositor::new(
//!     GammaLut::new(1.8),
//!     LcdDistributionLut::default(),
//!     PixelFormat::BGRA8,
//! );
//! // A white 2x1 BGRA destination and a coverage row with one inked pixel.
//! let mut dest = [0xff_u8; 8];
//! let coverage = [0xff_u8, 0];
//! compositor.blend_gamma(&mut dest, 8, &coverage, 2, 2, 1, RendererColor::BLACK);
//! assert_eq!(dest, [0, 0, 0, 0xff, 0xff, 0xff, 0xff, 0xff]);
//! ```
//!
//! [libm]: https://crates.io/crates/libm

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("glyph_atlas requires either the `std` or `libm` feature to be enabled");

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod atlas;
mod canvas;
mod color;
mod composite;
mod config;
mod context;
mod engine;
mod error;
mod gamma;
mod lcd;
mod math;

#[cfg(feature = "bytemuck")]
mod impl_bytemuck;

pub mod renderers;

pub use atlas::{BakeStatus, GlyphBitmapInfo, bake_font_bitmap, trim_glyph_box};
pub use canvas::CoverageCanvas;
pub use color::{PixelFormat, RendererColor};
pub use composite::Compositor;
pub use config::{RenderFlags, RenderHeight, RendererConfig};
pub use context::RendererContext;
pub use engine::{RasterEngine, VerticalMetrics};
pub use error::{Error, ErrorKind};
pub use gamma::{GammaLut, LINEAR_MASK, LINEAR_SHIFT};
pub use lcd::LcdDistributionLut;

#[cfg(feature = "swash")]
pub use renderers::swash::SwashEngine;
