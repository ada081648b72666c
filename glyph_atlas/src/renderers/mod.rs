// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rasterization engine backends.

#[cfg(feature = "swash")]
pub mod swash;
