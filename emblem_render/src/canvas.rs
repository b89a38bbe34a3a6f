// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel-level draw operations.
//!
//! All shapes are filled with an even-odd scanline rule: a pixel belongs
//! to a polygon when its center, sampled at +0.5, lies between an odd pair
//! of edge crossings. The same rule applies to every shape kind and no
//! antialiasing is performed, so a rounded rectangle with radius zero
//! fills exactly the pixels of the plain rectangle with the same bounds.
//! Layering is append-only; there is no erase.

use emblem_common::blend::blend_over;
use emblem_common::color::{AlphaColor, Rgba8, Srgb};
use emblem_common::contour;
use emblem_common::kurbo::{Point, Rect, Vec2};
use emblem_common::paint::{Fill, GradientAxis};
use emblem_common::pixmap::Pixmap;
use smallvec::SmallVec;

use crate::{RenderError, MAX_DIMENSION};

/// A shape resolved to device-space coordinates, ready to draw.
#[derive(Clone, Debug)]
pub enum Primitive {
    /// Closed polygon contour.
    Polygon(Vec<Point>),
    /// Ellipse inscribed in its bounding box.
    Ellipse(Rect),
    /// Thick line segment with flat caps.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Total width.
        width: f64,
    },
}

impl Primitive {
    /// The primitive shifted by `offset`.
    #[must_use]
    pub fn translated(&self, offset: Vec2) -> Self {
        match self {
            Self::Polygon(points) => Self::Polygon(points.iter().map(|p| *p + offset).collect()),
            Self::Ellipse(rect) => Self::Ellipse(*rect + offset),
            Self::Line { from, to, width } => Self::Line {
                from: *from + offset,
                to: *to + offset,
                width: *width,
            },
        }
    }
}

/// An addressable pixel buffer the draw operations composite into.
#[derive(Debug)]
pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Create a canvas with all pixels transparent.
    ///
    /// Fails with [`RenderError::InvalidDimension`] when either dimension
    /// is non-positive or exceeds [`MAX_DIMENSION`]; no buffer is
    /// allocated in that case.
    pub fn new(width: i32, height: i32) -> Result<Self, RenderError> {
        if width <= 0 || height <= 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(RenderError::InvalidDimension { width, height });
        }
        Ok(Self {
            pixmap: Pixmap::new(width as u16, height as u16),
        })
    }

    /// Return the width of the canvas.
    pub fn width(&self) -> u16 {
        self.pixmap.width()
    }

    /// Return the height of the canvas.
    pub fn height(&self) -> u16 {
        self.pixmap.height()
    }

    /// The pixels drawn so far.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Consume the canvas, returning the finished pixmap.
    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Fill a closed polygon.
    ///
    /// Self-intersecting contours are permitted; overlapping regions
    /// follow the even-odd rule. Rejects contours with fewer than three
    /// points or non-finite coordinates before any pixel is touched.
    pub fn fill_polygon(&mut self, points: &[Point], fill: &Fill) -> Result<(), RenderError> {
        if points.len() < 3 {
            return Err(RenderError::MalformedShape(
                "polygon needs at least three points",
            ));
        }
        if !contour::points_finite(points) {
            return Err(RenderError::MalformedShape("non-finite coordinates"));
        }
        check_fill(fill)?;

        let mut bounds = Rect::new(points[0].x, points[0].y, points[0].x, points[0].y);
        for p in &points[1..] {
            bounds = bounds.union_pt(*p);
        }

        for y in self.row_range(bounds) {
            let yc = f64::from(y) + 0.5;
            // Edge crossings with the scanline through the pixel centers.
            // The half-open comparison counts a vertex exactly once.
            let mut crossings: SmallVec<[f64; 8]> = SmallVec::new();
            for (i, p) in points.iter().enumerate() {
                let q = points[(i + 1) % points.len()];
                if (p.y <= yc) != (q.y <= yc) {
                    let t = (yc - p.y) / (q.y - p.y);
                    crossings.push(p.x + t * (q.x - p.x));
                }
            }
            crossings.sort_unstable_by(f64::total_cmp);
            for pair in crossings.chunks_exact(2) {
                self.fill_span(y, pair[0], pair[1], fill, bounds);
            }
        }
        Ok(())
    }

    /// Fill the ellipse inscribed in `rect`.
    ///
    /// Each covered row gets its horizontal span computed analytically, so
    /// no contour approximation is involved. An empty `rect` draws
    /// nothing.
    pub fn fill_ellipse(&mut self, rect: Rect, fill: &Fill) -> Result<(), RenderError> {
        if !rect_finite(rect) {
            return Err(RenderError::MalformedShape("non-finite coordinates"));
        }
        check_fill(fill)?;

        let rect = rect.abs();
        let center = rect.center();
        let rx = rect.width() / 2.0;
        let ry = rect.height() / 2.0;
        if rx <= 0.0 || ry <= 0.0 {
            return Ok(());
        }

        for y in self.row_range(rect) {
            let yc = f64::from(y) + 0.5;
            let ny = (yc - center.y) / ry;
            let d = 1.0 - ny * ny;
            if d <= 0.0 {
                continue;
            }
            let half = rx * d.sqrt();
            self.fill_span(y, center.x - half, center.x + half, fill, rect);
        }
        Ok(())
    }

    /// Draw a straight line segment of the given total width, flat caps.
    ///
    /// A zero-length segment draws nothing.
    pub fn draw_line(
        &mut self,
        from: Point,
        to: Point,
        width: f64,
        color: AlphaColor<Srgb>,
    ) -> Result<(), RenderError> {
        if !contour::points_finite(&[from, to]) || !width.is_finite() {
            return Err(RenderError::MalformedShape("non-finite coordinates"));
        }
        if width < 0.0 {
            return Err(RenderError::MalformedShape("negative line width"));
        }
        if width == 0.0 {
            return Ok(());
        }
        match contour::line(from, to, width) {
            Some(quad) => self.fill_polygon(&quad, &Fill::Solid(color)),
            None => Ok(()),
        }
    }

    /// Fill a resolved primitive.
    pub fn fill_primitive(&mut self, primitive: &Primitive, fill: &Fill) -> Result<(), RenderError> {
        match primitive {
            Primitive::Polygon(points) => self.fill_polygon(points, fill),
            Primitive::Ellipse(rect) => self.fill_ellipse(*rect, fill),
            Primitive::Line { from, to, width } => match fill {
                Fill::Solid(color) => self.draw_line(*from, *to, *width, *color),
                Fill::Gradient(_) => Err(RenderError::UnsupportedFill(
                    "lines take a solid color, not a gradient",
                )),
            },
        }
    }

    /// Composite a drop shadow: the primitive translated by `offset` and
    /// filled with the uniform shadow color.
    ///
    /// Callers draw the shadow before the primitive itself, which is what
    /// makes it sit underneath.
    pub fn fill_shadow(
        &mut self,
        primitive: &Primitive,
        offset: Vec2,
        color: AlphaColor<Srgb>,
    ) -> Result<(), RenderError> {
        if !offset.x.is_finite() || !offset.y.is_finite() {
            return Err(RenderError::MalformedShape("non-finite shadow offset"));
        }
        self.fill_primitive(&primitive.translated(offset), &Fill::Solid(color))
    }

    /// Rows whose centers can intersect `bounds`, clipped to the canvas.
    fn row_range(&self, bounds: Rect) -> std::ops::Range<i32> {
        let start = bounds.y0.floor().max(0.0) as i32;
        let end = bounds.y1.ceil().min(f64::from(self.height())) as i32;
        start..end.max(start)
    }

    /// Composite one horizontal span, pixel centers in `[x0, x1)`.
    ///
    /// Gradient positions are measured against `bounds`, the bounding box
    /// of the filled primitive.
    fn fill_span(&mut self, y: i32, x0: f64, x1: f64, fill: &Fill, bounds: Rect) {
        let start = (x0 - 0.5).ceil().max(0.0) as i32;
        let end = (x1 - 0.5).ceil().min(f64::from(self.width())) as i32;
        if end <= start {
            return;
        }
        match fill {
            Fill::Solid(color) => {
                let src = color.to_rgba8();
                for x in start..end {
                    self.blend_pixel(x, y, src);
                }
            }
            Fill::Gradient(gradient) => match gradient.axis {
                GradientAxis::Vertical => {
                    let t = axis_position(f64::from(y) + 0.5, bounds.y0, bounds.y1);
                    let src = gradient.color_at(t);
                    for x in start..end {
                        self.blend_pixel(x, y, src);
                    }
                }
                GradientAxis::Horizontal => {
                    for x in start..end {
                        let t = axis_position(f64::from(x) + 0.5, bounds.x0, bounds.x1);
                        self.blend_pixel(x, y, gradient.color_at(t));
                    }
                }
            },
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, src: Rgba8) {
        if src.a == 0 {
            return;
        }
        let (x, y) = (x as u16, y as u16);
        let dst = self.pixmap.pixel(x, y);
        self.pixmap.set_pixel(x, y, blend_over(dst, src));
    }
}

/// Position of `v` within `[lo, hi]`, as a gradient offset.
fn axis_position(v: f64, lo: f64, hi: f64) -> f32 {
    if hi <= lo {
        return 0.0;
    }
    ((v - lo) / (hi - lo)) as f32
}

fn rect_finite(rect: Rect) -> bool {
    rect.x0.is_finite() && rect.y0.is_finite() && rect.x1.is_finite() && rect.y1.is_finite()
}

fn check_fill(fill: &Fill) -> Result<(), RenderError> {
    match fill {
        Fill::Solid(_) => Ok(()),
        Fill::Gradient(gradient) => gradient.validate().map_err(RenderError::UnsupportedFill),
    }
}
