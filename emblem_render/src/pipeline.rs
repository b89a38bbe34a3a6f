// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Orchestration of one scene across a set of output sizes.
//!
//! Each requested size is attempted with an ordered list of strategies:
//! native composition re-rasterizes the scene at the target size, derived
//! composition downsamples one master render. First success wins, and a
//! size that exhausts its strategies reports every failure together
//! without blocking the other sizes.

use emblem_common::pixmap::Pixmap;
use emblem_common::scene::Scene;
#[cfg(feature = "multithreading")]
use rayon::prelude::*;

use crate::compose::compose;
use crate::resample::downsample;
use crate::{RenderError, MAX_DIMENSION};

/// Default size at and above which native composition is preferred.
///
/// Below the threshold, deriving from the master keeps every small icon a
/// scaled copy of one artwork instead of independently re-sampled art
/// whose subpixel details drift between sizes.
pub const DEFAULT_NATIVE_THRESHOLD: i32 = 512;

/// How a single output size gets produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Compose the scene directly at the target size.
    Native,
    /// Downsample the master render to the target size.
    Derived,
}

/// Caller-tunable pipeline policy.
///
/// Native composition gives sharper per-size detail, derivation gives
/// perfect cross-size consistency; which sizes get which is a product
/// decision, so the knobs live here rather than in the engine.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Sizes at or above this prefer the native strategy; smaller sizes
    /// prefer derivation from the master.
    pub native_threshold: i32,
    /// Size of the master render used by the derived strategy. Defaults
    /// to the largest positive requested size.
    pub master_size: Option<i32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            native_threshold: DEFAULT_NATIVE_THRESHOLD,
            master_size: None,
        }
    }
}

/// Result of rendering one requested size.
#[derive(Debug)]
pub struct RenderOutcome {
    /// The requested output size.
    pub size: i32,
    /// The strategy that produced the image, when one succeeded.
    pub strategy: Option<Strategy>,
    /// The rendered pixmap, or why every attempt failed.
    pub result: Result<Pixmap, RenderError>,
}

/// Render `scene` at every size in `sizes`.
///
/// The master render is produced once up front and shared read-only. One
/// size failing never blocks the rest; each entry of the returned vector
/// reports its own success or failure, in the order the sizes were
/// requested. With the `multithreading` feature enabled the sizes render
/// on a rayon worker pool; every render owns its canvas, so the fan-out
/// needs no locking.
pub fn render_scene_set(
    scene: &Scene,
    sizes: &[i32],
    options: &RenderOptions,
) -> Vec<RenderOutcome> {
    let master = build_master(scene, sizes, options);
    let render = |&size: &i32| render_one(scene, size, master.as_ref(), options);

    #[cfg(feature = "multithreading")]
    {
        sizes.par_iter().map(render).collect()
    }
    #[cfg(not(feature = "multithreading"))]
    {
        sizes.iter().map(render).collect()
    }
}

struct Master {
    size: i32,
    render: Result<Pixmap, RenderError>,
}

fn build_master(scene: &Scene, sizes: &[i32], options: &RenderOptions) -> Option<Master> {
    let size = options
        .master_size
        .or_else(|| sizes.iter().copied().filter(|&s| s > 0).max())?;
    Some(Master {
        size,
        render: compose(scene, size),
    })
}

fn render_one(
    scene: &Scene,
    size: i32,
    master: Option<&Master>,
    options: &RenderOptions,
) -> RenderOutcome {
    if size <= 0 || size > MAX_DIMENSION {
        return RenderOutcome {
            size,
            strategy: None,
            result: Err(RenderError::InvalidDimension {
                width: size,
                height: size,
            }),
        };
    }

    let order = if size >= options.native_threshold {
        [Strategy::Native, Strategy::Derived]
    } else {
        [Strategy::Derived, Strategy::Native]
    };

    let mut failures = Vec::new();
    for strategy in order {
        match attempt(scene, size, strategy, master) {
            Ok(pixmap) => {
                return RenderOutcome {
                    size,
                    strategy: Some(strategy),
                    result: Ok(pixmap),
                }
            }
            Err(err) => failures.push(err),
        }
    }
    RenderOutcome {
        size,
        strategy: None,
        result: Err(RenderError::StrategiesExhausted { size, failures }),
    }
}

fn attempt(
    scene: &Scene,
    size: i32,
    strategy: Strategy,
    master: Option<&Master>,
) -> Result<Pixmap, RenderError> {
    match strategy {
        Strategy::Native => compose(scene, size),
        Strategy::Derived => {
            let master = master.ok_or(RenderError::MasterUnavailable { size })?;
            if master.size < size {
                return Err(RenderError::MasterUnavailable { size });
            }
            let pixmap = master.render.as_ref().map_err(Clone::clone)?;
            Ok(downsample(pixmap, size as u16, size as u16))
        }
    }
}
