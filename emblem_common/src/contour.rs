// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Contour generation for the supported shape kinds.
//!
//! Curved geometry never reaches the rasterizer directly. Rounded corners
//! are approximated by sampling each quarter arc at a fixed angular step,
//! and thick lines become flat-capped quads, so the canvas only ever fills
//! polygons and analytic ellipse spans.

use peniko::kurbo::{Point, Rect, Vec2};

/// Angular step, in degrees, used when sampling arcs.
///
/// 10 degrees puts ten segments on each quarter arc, which keeps corners
/// smooth at 1024 px while staying cheap at 16 px.
pub const ARC_STEP_DEG: f64 = 10.0;

/// Whether every coordinate in `points` is finite.
#[must_use]
pub fn points_finite(points: &[Point]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}

/// Closed polygon approximating a rounded rectangle.
///
/// The corner radius is clamped to half the shorter side, so an oversized
/// radius degenerates toward an ellipse and still yields a valid convex
/// contour. A non-positive radius yields the plain four-corner rectangle.
/// Points run clockwise starting on the top-left corner arc.
#[must_use]
pub fn rounded_rect(rect: Rect, radius: f64) -> Vec<Point> {
    let rect = rect.abs();
    let radius = radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
    if radius <= 0.0 {
        return vec![
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        ];
    }

    // Corner centers sit `radius` inside each corner. With y growing
    // downward, sweeping each quarter arc through increasing angles walks
    // the contour clockwise, and consecutive arcs share their straight-edge
    // endpoints, so emitting them in order already closes the shape.
    let corners = [
        (Point::new(rect.x0 + radius, rect.y0 + radius), 180.0),
        (Point::new(rect.x1 - radius, rect.y0 + radius), 270.0),
        (Point::new(rect.x1 - radius, rect.y1 - radius), 0.0),
        (Point::new(rect.x0 + radius, rect.y1 - radius), 90.0),
    ];
    let steps = (90.0 / ARC_STEP_DEG).ceil() as usize;
    let mut points = Vec::with_capacity(4 * (steps + 1));
    for (center, start_deg) in corners {
        for i in 0..=steps {
            let angle = (start_deg + i as f64 * ARC_STEP_DEG).to_radians();
            points.push(center + radius * Vec2::from_angle(angle));
        }
    }
    points
}

/// Contour of an ellipse inscribed in `rect`, sampled every
/// [`ARC_STEP_DEG`] degrees.
///
/// Filling uses analytic spans instead; this exists for stroking.
#[must_use]
pub fn ellipse(rect: Rect) -> Vec<Point> {
    let rect = rect.abs();
    let center = rect.center();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;
    let steps = (360.0 / ARC_STEP_DEG).ceil() as usize;
    (0..steps)
        .map(|i| {
            let angle = (i as f64 * ARC_STEP_DEG).to_radians();
            Point::new(center.x + rx * angle.cos(), center.y + ry * angle.sin())
        })
        .collect()
}

/// Flat-capped contour for a thick line segment.
///
/// The quad is formed by offsetting the segment perpendicular to its
/// direction by half the width on each side. Returns `None` for a
/// zero-length segment, which draws nothing.
#[must_use]
pub fn line(from: Point, to: Point, width: f64) -> Option<Vec<Point>> {
    let dir = to - from;
    let len = dir.hypot();
    if len == 0.0 {
        return None;
    }
    let normal = Vec2::new(-dir.y, dir.x) * (width / (2.0 * len));
    Some(vec![from + normal, to + normal, to - normal, from - normal])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_radius_is_the_plain_rectangle() {
        let contour = rounded_rect(Rect::new(1.0, 2.0, 11.0, 22.0), 0.0);
        assert_eq!(
            contour,
            vec![
                Point::new(1.0, 2.0),
                Point::new(11.0, 2.0),
                Point::new(11.0, 22.0),
                Point::new(1.0, 22.0),
            ]
        );
    }

    #[test]
    fn negative_radius_clamps_to_zero() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(rounded_rect(rect, -5.0), rounded_rect(rect, 0.0));
    }

    #[test]
    fn oversized_radius_stays_inside_the_rect() {
        let rect = Rect::new(0.0, 0.0, 20.0, 10.0);
        let contour = rounded_rect(rect, 100.0);
        assert!(contour.len() >= 4 * 10);
        for p in &contour {
            assert!(p.x >= rect.x0 - 1e-9 && p.x <= rect.x1 + 1e-9);
            assert!(p.y >= rect.y0 - 1e-9 && p.y <= rect.y1 + 1e-9);
        }
    }

    #[test]
    fn rounded_corner_cuts_the_corner_point() {
        let contour = rounded_rect(Rect::new(0.0, 0.0, 100.0, 100.0), 20.0);
        // No contour point may come closer to the corner than the arc does.
        let corner = Point::new(0.0, 0.0);
        let arc_center = Point::new(20.0, 20.0);
        for p in &contour {
            assert!(p.distance(corner) + 1e-9 >= arc_center.distance(corner) - 20.0);
        }
        // The top edge midpoint is on the contour.
        assert!(contour.iter().any(|p| (p.y - 0.0).abs() < 1e-9));
    }

    #[test]
    fn line_quad_spans_the_width() {
        let quad = line(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 4.0).unwrap();
        assert_eq!(quad.len(), 4);
        for p in &quad {
            assert!((p.y.abs() - 2.0).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_length_line_has_no_contour() {
        assert!(line(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 3.0).is_none());
    }

    #[test]
    fn finiteness_check() {
        assert!(points_finite(&[Point::new(0.0, 1.0)]));
        assert!(!points_finite(&[Point::new(f64::NAN, 1.0)]));
        assert!(!points_finite(&[Point::new(0.0, f64::INFINITY)]));
    }
}
