// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene data model.
//!
//! Scenes are authored once against a fixed 1024-unit design grid and carry
//! no pixel coordinates; rendering at a target size multiplies every
//! coordinate, radius, width and offset by `size / DESIGN_GRID`. That
//! uniform multiplication is the whole of resolution independence.

use peniko::color::{AlphaColor, Srgb};
use peniko::kurbo::{Point, Rect, Vec2};

use crate::paint::Fill;

/// Edge length of the canonical design grid scenes are authored on.
pub const DESIGN_GRID: f64 = 1024.0;

/// Geometry of a single shape, in design-grid units.
#[derive(Clone, Debug)]
pub enum Geometry {
    /// Axis-aligned rectangle with rounded corners.
    RoundedRect {
        /// Bounding box.
        rect: Rect,
        /// Corner radius; clamped to half the shorter side when drawn.
        radius: f64,
    },
    /// Ellipse inscribed in its bounding box.
    Ellipse {
        /// Bounding box.
        rect: Rect,
    },
    /// Closed polygon; the last point connects back to the first.
    Polygon {
        /// At least three vertices.
        points: Vec<Point>,
    },
    /// Straight segment of the given width, flat caps.
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Total width of the drawn segment.
        width: f64,
    },
}

/// Drop shadow drawn beneath a shape, before the shape itself.
#[derive(Clone, Copy, Debug)]
pub struct Shadow {
    /// Offset of the shadow, in design-grid units.
    pub offset: Vec2,
    /// Shadow color; the opacity is the color's alpha.
    pub color: AlphaColor<Srgb>,
}

/// Outline stroked over a shape's contour after its fill.
///
/// Strokes apply to the closed shape kinds; a `Line` already is its own
/// stroke and ignores this.
#[derive(Clone, Copy, Debug)]
pub struct Stroke {
    /// Stroke color.
    pub color: AlphaColor<Srgb>,
    /// Stroke width in design-grid units.
    pub width: f64,
}

/// One entry of a scene: geometry plus how it is painted.
#[derive(Clone, Debug)]
pub struct Shape {
    /// What to draw.
    pub geometry: Geometry,
    /// Interior paint.
    pub fill: Fill,
    /// Optional outline, drawn after the fill.
    pub stroke: Option<Stroke>,
    /// Optional drop shadow, drawn before the fill.
    pub shadow: Option<Shadow>,
}

impl Shape {
    /// A shape with only a fill.
    pub fn filled(geometry: Geometry, fill: impl Into<Fill>) -> Self {
        Self {
            geometry,
            fill: fill.into(),
            stroke: None,
            shadow: None,
        }
    }

    /// Attach a drop shadow.
    #[must_use]
    pub fn with_shadow(mut self, offset: Vec2, color: AlphaColor<Srgb>) -> Self {
        self.shadow = Some(Shadow { offset, color });
        self
    }

    /// Attach an outline.
    #[must_use]
    pub fn with_stroke(mut self, color: AlphaColor<Srgb>, width: f64) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }
}

/// An ordered list of shapes.
///
/// Order is paint order: later entries composite on top of earlier ones,
/// which is how shadow, base and highlight layering is expressed.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    shapes: Vec<Shape>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of the existing ones.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// The shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Whether the scene contains no shapes.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}
