// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scaling a scene onto a canvas.

use emblem_common::contour;
use emblem_common::kurbo::{Point, Rect};
use emblem_common::pixmap::Pixmap;
use emblem_common::scene::{Geometry, Scene, Shape, Stroke, DESIGN_GRID};

use crate::canvas::{Canvas, Primitive};
use crate::RenderError;

/// Render `scene` at `size` x `size` pixels.
///
/// Every design-grid coordinate is multiplied by `size / 1024` and stays
/// in floating point until the individual draw call, so nested shapes do
/// not accumulate rounding error. Shapes that fail to draw are skipped
/// with a warning; an unusable `size` is fatal and returns
/// [`RenderError::InvalidDimension`] before anything is allocated.
pub fn compose(scene: &Scene, size: i32) -> Result<Pixmap, RenderError> {
    let mut canvas = Canvas::new(size, size)?;
    let scale = f64::from(size) / DESIGN_GRID;
    for (index, shape) in scene.shapes().iter().enumerate() {
        if let Err(err) = draw_shape(&mut canvas, shape, scale) {
            log::warn!("skipping shape {index}: {err}");
        }
    }
    Ok(canvas.into_pixmap())
}

/// Draw one shape: shadow pre-pass, then fill, then stroke.
fn draw_shape(canvas: &mut Canvas, shape: &Shape, scale: f64) -> Result<(), RenderError> {
    let primitive = resolve(&shape.geometry, scale)?;
    if let Some(shadow) = &shape.shadow {
        canvas.fill_shadow(&primitive, shadow.offset * scale, shadow.color)?;
    }
    canvas.fill_primitive(&primitive, &shape.fill)?;
    if let Some(stroke) = &shape.stroke {
        stroke_primitive(canvas, &primitive, stroke, scale)?;
    }
    Ok(())
}

/// Scale design-grid geometry to device space.
///
/// Rounded rectangles are validated here because contour generation needs
/// finite inputs; the remaining kinds are rejected by the canvas when the
/// primitive is drawn, before any pixel is touched.
fn resolve(geometry: &Geometry, scale: f64) -> Result<Primitive, RenderError> {
    Ok(match geometry {
        Geometry::RoundedRect { rect, radius } => {
            if !rect_finite(*rect) || !radius.is_finite() {
                return Err(RenderError::MalformedShape("non-finite coordinates"));
            }
            Primitive::Polygon(contour::rounded_rect(scale_rect(*rect, scale), radius * scale))
        }
        Geometry::Ellipse { rect } => Primitive::Ellipse(scale_rect(*rect, scale)),
        Geometry::Polygon { points } => {
            Primitive::Polygon(points.iter().map(|p| scale_point(*p, scale)).collect())
        }
        Geometry::Line { from, to, width } => Primitive::Line {
            from: scale_point(*from, scale),
            to: scale_point(*to, scale),
            width: width * scale,
        },
    })
}

/// Stroke a primitive's contour as a run of thick edge segments.
fn stroke_primitive(
    canvas: &mut Canvas,
    primitive: &Primitive,
    stroke: &Stroke,
    scale: f64,
) -> Result<(), RenderError> {
    if !stroke.width.is_finite() || stroke.width < 0.0 {
        return Err(RenderError::MalformedShape("negative stroke width"));
    }
    let width = stroke.width * scale;
    let outline: Vec<Point> = match primitive {
        Primitive::Polygon(points) => points.clone(),
        Primitive::Ellipse(rect) => contour::ellipse(*rect),
        // A line already is its own stroke.
        Primitive::Line { .. } => return Ok(()),
    };
    for (i, p) in outline.iter().enumerate() {
        let q = outline[(i + 1) % outline.len()];
        canvas.draw_line(*p, q, width, stroke.color)?;
    }
    Ok(())
}

fn scale_point(p: Point, scale: f64) -> Point {
    Point::new(p.x * scale, p.y * scale)
}

fn scale_rect(rect: Rect, scale: f64) -> Rect {
    Rect::new(
        rect.x0 * scale,
        rect.y0 * scale,
        rect.x1 * scale,
        rect.y1 * scale,
    )
}

fn rect_finite(rect: Rect) -> bool {
    rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite()
}
