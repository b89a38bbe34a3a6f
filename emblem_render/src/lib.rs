// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A CPU rasterizer for declarative icon scenes.
//!
//! Emblem renders a scale-independent [`Scene`] (shapes authored on a
//! 1024-unit design grid) into straight-alpha RGBA pixmaps at arbitrary
//! output sizes. One scene description serves a whole icon set: the
//! [`pipeline`] composes each requested size either natively or by
//! downsampling a single high-resolution master render, so 16 px and
//! 1024 px outputs come from the same artwork.
//!
//! The crate is deterministic and batch-oriented. There is no display
//! surface, no file I/O and no text layout; callers receive pixel buffers
//! and decide what to do with them.
//!
//! # Features
//!
//! - `png` (enabled by default): Allow encoding rendered pixmaps into PNG
//!   images via [`Pixmap::into_png`].
//! - `multithreading`: Render the batch of target sizes on a rayon worker
//!   pool. Renders share nothing but the immutable master, so no locking
//!   is involved.

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

pub mod canvas;
pub mod compose;
pub mod icon;
pub mod pipeline;
pub mod resample;

use thiserror::Error;

pub use canvas::{Canvas, Primitive};
pub use compose::compose;
pub use emblem_common::color;
pub use emblem_common::kurbo;
pub use emblem_common::peniko;
pub use emblem_common::pixmap::Pixmap;
pub use emblem_common::scene::{Geometry, Scene, Shape};
pub use pipeline::{render_scene_set, RenderOptions, RenderOutcome, Strategy};

/// Largest canvas edge the rasterizer will allocate.
///
/// Icon sets top out at 1024 px; anything far past that is treated as a
/// request error rather than an allocation request.
pub const MAX_DIMENSION: i32 = 16_384;

/// Errors that can occur while rendering.
#[derive(Clone, Debug, Error)]
pub enum RenderError {
    /// The requested canvas size cannot be allocated. Fatal for the
    /// affected render: no buffer is created.
    #[error("invalid canvas dimension {width}x{height}")]
    InvalidDimension {
        /// Requested width in pixels.
        width: i32,
        /// Requested height in pixels.
        height: i32,
    },
    /// A shape's geometry cannot be rasterized (non-finite coordinates,
    /// too few polygon points, a negative width). The composer skips the
    /// shape and keeps going.
    #[error("malformed shape: {0}")]
    MalformedShape(&'static str),
    /// A shape's fill cannot be resolved (for example a gradient with
    /// fewer than two stops). The composer skips the shape and keeps
    /// going.
    #[error("unsupported fill: {0}")]
    UnsupportedFill(&'static str),
    /// The derived strategy needs a master render at least as large as
    /// the target, and none is available.
    #[error("no usable master render for size {size}")]
    MasterUnavailable {
        /// The requested output size.
        size: i32,
    },
    /// Every strategy failed for a requested size.
    #[error("all {} render strategies failed for size {size}", .failures.len())]
    StrategiesExhausted {
        /// The requested output size.
        size: i32,
        /// The failure of each strategy, in the order they were tried.
        failures: Vec<RenderError>,
    },
}
