// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Glyph atlas baking.
//!
//! A contiguous range of codepoints is rasterized row by row into a
//! caller-owned coverage buffer:
//! - Rows are packed from the top of the buffer downward, each one font
//!   height plus vertical padding tall
//! - Glyphs are placed left to right on a row, every glyph starting on a
//!   subpixel-cell boundary
//! - Each glyph's box is trimmed to the coverage it actually contains
//!
//! The result is one [`GlyphBitmapInfo`] per codepoint, describing where the
//! glyph lives in the atlas and how to place it when drawing.

mod bake;
mod glyph_info;
mod trim;

pub use bake::bake_font_bitmap;
pub use glyph_info::{BakeStatus, GlyphBitmapInfo};
pub use trim::trim_glyph_box;
