// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deriving smaller renders from a master render.

use emblem_common::color::Rgba8;
use emblem_common::pixmap::Pixmap;

/// Downsample `src` to `width` x `height` with an area-averaging box
/// filter.
///
/// Each destination pixel averages the source rectangle it covers, with
/// fractional coverage at the edges. Color channels are accumulated
/// premultiplied, so transparent source pixels contribute no color and
/// shape edges do not bleed darkness into the average.
///
/// # Panics
///
/// Panics when the target exceeds the source in either dimension; this is
/// strictly a downsampler.
#[must_use]
pub fn downsample(src: &Pixmap, width: u16, height: u16) -> Pixmap {
    assert!(
        width > 0 && height > 0 && width <= src.width() && height <= src.height(),
        "downsample target {width}x{height} must fit inside the {}x{} source",
        src.width(),
        src.height()
    );
    if width == src.width() && height == src.height() {
        return src.clone();
    }

    let x_ratio = f64::from(src.width()) / f64::from(width);
    let y_ratio = f64::from(src.height()) / f64::from(height);
    let mut out = Pixmap::new(width, height);

    for dy in 0..height {
        let y0 = f64::from(dy) * y_ratio;
        let y1 = f64::from(dy + 1) * y_ratio;
        for dx in 0..width {
            let x0 = f64::from(dx) * x_ratio;
            let x1 = f64::from(dx + 1) * x_ratio;
            out.set_pixel(dx, dy, average(src, x0, x1, y0, y1));
        }
    }
    out
}

/// Coverage-weighted average of the source rectangle `[x0, x1) x [y0, y1)`.
fn average(src: &Pixmap, x0: f64, x1: f64, y0: f64, y1: f64) -> Rgba8 {
    let mut acc = [0.0_f64; 4];
    let mut area = 0.0_f64;

    let sy_end = (y1.ceil() as u32).min(u32::from(src.height()));
    let sx_end = (x1.ceil() as u32).min(u32::from(src.width()));
    let mut sy = y0.floor() as u32;
    while sy < sy_end {
        let wy = overlap(f64::from(sy), f64::from(sy) + 1.0, y0, y1);
        let mut sx = x0.floor() as u32;
        while sx < sx_end {
            let wx = overlap(f64::from(sx), f64::from(sx) + 1.0, x0, x1);
            let w = wx * wy;
            let px = src.pixel(sx as u16, sy as u16);
            let alpha = f64::from(px.a) / 255.0;
            acc[0] += f64::from(px.r) * alpha * w;
            acc[1] += f64::from(px.g) * alpha * w;
            acc[2] += f64::from(px.b) * alpha * w;
            acc[3] += alpha * w;
            area += w;
            sx += 1;
        }
        sy += 1;
    }

    if area <= 0.0 || acc[3] <= 0.0 {
        return Rgba8::from_u32(0);
    }
    // Unpremultiply against the accumulated alpha.
    let to_channel = |v: f64| (v / acc[3]).round().clamp(0.0, 255.0) as u8;
    Rgba8 {
        r: to_channel(acc[0]),
        g: to_channel(acc[1]),
        b: to_channel(acc[2]),
        a: ((acc[3] / area) * 255.0).round().clamp(0.0, 255.0) as u8,
    }
}

/// Length of the intersection of `[a0, a1)` and `[b0, b1)`.
fn overlap(a0: f64, a1: f64, b0: f64, b1: f64) -> f64 {
    (a1.min(b1) - a0.max(b0)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgba(r: u8, g: u8, b: u8, a: u8) -> Rgba8 {
        Rgba8 { r, g, b, a }
    }

    #[test]
    fn integer_ratio_averages_blocks() {
        let mut src = Pixmap::new(2, 2);
        src.set_pixel(0, 0, rgba(255, 0, 0, 255));
        src.set_pixel(1, 0, rgba(0, 0, 255, 255));
        src.set_pixel(0, 1, rgba(255, 0, 0, 255));
        src.set_pixel(1, 1, rgba(0, 0, 255, 255));
        let out = downsample(&src, 1, 1);
        let px = out.pixel(0, 0);
        assert_eq!(px.a, 255);
        assert_eq!(px.r, 128);
        assert_eq!(px.b, 128);
        assert_eq!(px.g, 0);
    }

    #[test]
    fn transparent_pixels_do_not_dim_the_color() {
        let mut src = Pixmap::new(2, 1);
        src.set_pixel(0, 0, rgba(255, 0, 0, 255));
        // Transparent black must not darken the red.
        let out = downsample(&src, 1, 1);
        let px = out.pixel(0, 0);
        assert_eq!(px.r, 255);
        assert_eq!(px.a, 128);
    }

    #[test]
    fn identity_size_is_a_copy() {
        let mut src = Pixmap::new(3, 2);
        src.set_pixel(2, 1, rgba(7, 8, 9, 10));
        let out = downsample(&src, 3, 2);
        assert_eq!(out.pixel(2, 1), rgba(7, 8, 9, 10));
    }

    #[test]
    fn fractional_ratio_weights_coverage() {
        // 3 columns into 2: the left output covers 1.5 source columns.
        let mut src = Pixmap::new(3, 1);
        src.set_pixel(0, 0, rgba(255, 255, 255, 255));
        src.set_pixel(1, 0, rgba(255, 255, 255, 255));
        src.set_pixel(2, 0, rgba(0, 0, 0, 255));
        let out = downsample(&src, 2, 1);
        assert_eq!(out.pixel(0, 0), rgba(255, 255, 255, 255));
        // Right pixel: half a white column, one black column.
        let right = out.pixel(1, 0);
        assert_eq!(right.a, 255);
        assert_eq!(right.r, 85);
    }
}
