// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Color blending utilities.
//!
//! All compositing in Emblem goes through [`blend_over`]. Colors are held
//! in straight (non-premultiplied) alpha so a finished pixmap can be
//! exported without a conversion pass.

use peniko::color::Rgba8;

/// Linearly interpolate between two colors, per channel.
///
/// `t` is clamped to `[0.0, 1.0]`; `t = 0.0` yields `a` and `t = 1.0`
/// yields `b`.
#[must_use]
pub fn lerp(a: Rgba8, b: Rgba8, t: f32) -> Rgba8 {
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f32::from(x) + (f32::from(y) - f32::from(x)) * t).round() as u8;
    Rgba8 {
        r: mix(a.r, b.r),
        g: mix(a.g, b.g),
        b: mix(a.b, b.b),
        a: mix(a.a, b.a),
    }
}

/// Source-over compositing of `src` onto `dst`, in straight alpha.
///
/// The output alpha is `srcA + dstA * (1 - srcA)`, and the color channels
/// are the alpha-weighted average of source over destination; a zero
/// output alpha is transparent black.
///
/// Blending a fully transparent source returns `dst` unchanged, and
/// blending onto a fully transparent destination returns `src`, so
/// compositing a scene shape by shape matches compositing the same layers
/// pairwise left to right.
#[must_use]
pub fn blend_over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    if src.a == 255 || dst.a == 0 {
        return src;
    }
    if src.a == 0 {
        return dst;
    }
    let sa = f32::from(src.a) / 255.0;
    let da = f32::from(dst.a) / 255.0;
    let out_a = sa + da * (1.0 - sa);
    let ch = |s: u8, d: u8| {
        ((f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / out_a).round() as u8
    };
    Rgba8 {
        r: ch(src.r, dst.r),
        g: ch(src.g, dst.g),
        b: ch(src.b, dst.b),
        a: (out_a * 255.0).round() as u8,
    }
}

/// Scale a color's alpha channel by `alpha / 255`, leaving the color
/// channels untouched.
#[must_use]
pub fn multiply_alpha(c: Rgba8, alpha: u8) -> Rgba8 {
    Rgba8 {
        a: ((u16::from(alpha) * u16::from(c.a)) / 255) as u8,
        ..c
    }
}
