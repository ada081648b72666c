// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `glyph_atlas`.
//!
//! - The `util` module contains the synthetic rasterization engine and helpers shared by
//!   the different test modules. No font files are needed to run the suite.
//! - We do not use the default Rust test harness, but instead use this `mod.rs` file as the
//!   entry point to run all other tests, which makes the shared helpers easy to reach.
//! - For test naming, put the "topic" of the test at the start of the name, for example
//!   `bake_ascii_range` rather than `ascii_range_bake`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod util;
