// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared data structures for the Emblem icon rasterizer.
//!
//! This crate holds the pieces that do not draw anything by themselves:
//! color blending utilities, fill descriptions, contour generation for the
//! supported shape kinds, the [`Pixmap`][crate::pixmap::Pixmap] pixel
//! buffer and the scene data model. The rasterizer itself lives in
//! `emblem_render`, which should usually be your entry point.
//!
//! # Features
//!
//! - `png` (enabled by default): Allow encoding a
//!   [`Pixmap`][crate::pixmap::Pixmap] into a PNG image.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![forbid(unsafe_code)]

pub mod blend;
pub mod contour;
pub mod paint;
pub mod pixmap;
pub mod scene;

pub use peniko;
pub use peniko::color;
pub use peniko::kurbo;
