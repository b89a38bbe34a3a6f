// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Utility functions shared across different tests.

use emblem_render::color::{AlphaColor, Rgba8, Srgb};
use emblem_render::Pixmap;

pub(crate) fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba8 {
    Rgba8 { r, g, b, a }
}

pub(crate) fn color(r: u8, g: u8, b: u8, a: u8) -> AlphaColor<Srgb> {
    AlphaColor::from_rgba8(r, g, b, a)
}

/// Largest absolute per-channel difference between two equally sized
/// pixmaps.
pub(crate) fn max_channel_diff(a: &Pixmap, b: &Pixmap) -> u8 {
    assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    a.data_as_u8_slice()
        .iter()
        .zip(b.data_as_u8_slice())
        .map(|(&x, &y)| x.abs_diff(y))
        .max()
        .unwrap_or(0)
}

/// Mean absolute per-channel difference between two equally sized pixmaps.
pub(crate) fn mean_channel_diff(a: &Pixmap, b: &Pixmap) -> f64 {
    assert_eq!((a.width(), a.height()), (b.width(), b.height()));
    let total: u64 = a
        .data_as_u8_slice()
        .iter()
        .zip(b.data_as_u8_slice())
        .map(|(&x, &y)| u64::from(x.abs_diff(y)))
        .sum();
    total as f64 / a.data_as_u8_slice().len() as f64
}
