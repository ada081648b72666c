// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional `bytemuck` trait impls.

#![allow(
    unsafe_code,
    reason = "The `bytemuck` marker traits are `unsafe` and require `unsafe impl`."
)]

use crate::{GlyphBitmapInfo, RendererColor};
use bytemuck::{Pod, Zeroable};

// Safety: The struct is `repr(C)` with four `i32` followed by three `f32`
// fields, so it has no padding and every bit pattern is valid.
unsafe impl Zeroable for GlyphBitmapInfo {}

// Safety: See the `Zeroable` impl above.
unsafe impl Pod for GlyphBitmapInfo {}

// Safety: The struct is `repr(C)` with three `u8` fields.
unsafe impl Zeroable for RendererColor {}

// Safety: See the `Zeroable` impl above.
unsafe impl Pod for RendererColor {}
