// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill descriptions for shapes.

use peniko::color::{AlphaColor, Rgba8, Srgb};

use crate::blend::lerp;

/// Axis along which a linear gradient runs, relative to the bounding box
/// of the filled shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientAxis {
    /// Top to bottom.
    Vertical,
    /// Left to right.
    Horizontal,
}

/// A single gradient stop.
#[derive(Clone, Copy, Debug)]
pub struct GradientStop {
    /// Offset of the stop along the gradient axis, in `[0, 1]`.
    pub offset: f32,
    /// Color at the stop.
    pub color: AlphaColor<Srgb>,
}

/// A linear gradient across the filled shape's bounding box.
#[derive(Clone, Debug)]
pub struct Gradient {
    /// Axis the stops are laid out on.
    pub axis: GradientAxis,
    /// Stops, sorted by ascending offset.
    pub stops: Vec<GradientStop>,
}

impl Gradient {
    /// The common case: a two-stop gradient from `start` to `end`.
    #[must_use]
    pub fn linear(axis: GradientAxis, start: AlphaColor<Srgb>, end: AlphaColor<Srgb>) -> Self {
        Self {
            axis,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: start,
                },
                GradientStop {
                    offset: 1.0,
                    color: end,
                },
            ],
        }
    }

    /// Check the stop list the rasterizer relies on.
    ///
    /// Gradients need at least two stops, and offsets must lie in `[0, 1]`
    /// sorted ascending.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.stops.len() < 2 {
            return Err("gradient needs at least two stops");
        }
        for stop in &self.stops {
            if !(0.0..=1.0).contains(&stop.offset) {
                return Err("gradient stop offsets must lie in [0, 1]");
            }
        }
        for pair in self.stops.windows(2) {
            if pair[0].offset > pair[1].offset {
                return Err("gradient stops must be sorted by ascending offset");
            }
        }
        Ok(())
    }

    /// Color at position `t` along the axis, interpolating the surrounding
    /// pair of stops. `t` is clamped to the stop range.
    ///
    /// Assumes [`validate`](Self::validate) has passed.
    #[must_use]
    pub fn color_at(&self, t: f32) -> Rgba8 {
        let first = &self.stops[0];
        let last = &self.stops[self.stops.len() - 1];
        if t <= first.offset {
            return first.color.to_rgba8();
        }
        if t >= last.offset {
            return last.color.to_rgba8();
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (&pair[0], &pair[1]);
            if t <= hi.offset {
                let span = hi.offset - lo.offset;
                if span <= 0.0 {
                    return hi.color.to_rgba8();
                }
                let local = (t - lo.offset) / span;
                return lerp(lo.color.to_rgba8(), hi.color.to_rgba8(), local);
            }
        }
        last.color.to_rgba8()
    }
}

/// How a shape's interior is painted.
#[derive(Clone, Debug)]
pub enum Fill {
    /// A single color.
    Solid(AlphaColor<Srgb>),
    /// A linear gradient.
    Gradient(Gradient),
}

impl From<AlphaColor<Srgb>> for Fill {
    fn from(value: AlphaColor<Srgb>) -> Self {
        Self::Solid(value)
    }
}

impl From<Gradient> for Fill {
    fn from(value: Gradient) -> Self {
        Self::Gradient(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::color::palette::css::{BLACK, WHITE};

    #[test]
    fn two_stop_gradient_validates() {
        let gradient = Gradient::linear(GradientAxis::Vertical, BLACK, WHITE);
        assert!(gradient.validate().is_ok());
    }

    #[test]
    fn single_stop_gradient_is_rejected() {
        let mut gradient = Gradient::linear(GradientAxis::Vertical, BLACK, WHITE);
        gradient.stops.truncate(1);
        assert!(gradient.validate().is_err());
    }

    #[test]
    fn unsorted_stops_are_rejected() {
        let mut gradient = Gradient::linear(GradientAxis::Horizontal, BLACK, WHITE);
        gradient.stops.reverse();
        gradient.stops[0].offset = 1.0;
        gradient.stops[1].offset = 0.0;
        assert!(gradient.validate().is_err());
    }

    #[test]
    fn out_of_range_offset_is_rejected() {
        let mut gradient = Gradient::linear(GradientAxis::Vertical, BLACK, WHITE);
        gradient.stops[1].offset = 1.5;
        assert!(gradient.validate().is_err());
    }

    #[test]
    fn color_at_interpolates_between_stops() {
        let gradient = Gradient::linear(GradientAxis::Vertical, BLACK, WHITE);
        assert_eq!(gradient.color_at(0.0), BLACK.to_rgba8());
        assert_eq!(gradient.color_at(1.0), WHITE.to_rgba8());
        let mid = gradient.color_at(0.5);
        assert_eq!(mid.r, 128);
        assert_eq!(mid.a, 255);
        // Outside the stop range clamps to the end stops.
        assert_eq!(gradient.color_at(-1.0), BLACK.to_rgba8());
        assert_eq!(gradient.color_at(2.0), WHITE.to_rgba8());
    }
}
