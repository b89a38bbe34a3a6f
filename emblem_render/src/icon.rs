// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in cloud-download icon scene.
//!
//! All layout values are named constants on the 1024-unit design grid.
//! The composer scales them uniformly, so one scene serves every output
//! size in an icon set.

use emblem_common::color::{AlphaColor, Srgb};
use emblem_common::kurbo::{Point, Rect, Vec2};
use emblem_common::paint::{Fill, Gradient, GradientAxis};
use emblem_common::scene::{Geometry, Scene, Shape, DESIGN_GRID};

/// macOS icon corner-radius ratio.
const BACKDROP_CORNER_RATIO: f64 = 0.2237;
/// Backdrop gradient, top stop.
const BACKDROP_TOP: AlphaColor<Srgb> = AlphaColor::from_rgba8(0x00, 0x7A, 0xFF, 0xFF);
/// Backdrop gradient, bottom stop.
const BACKDROP_BOTTOM: AlphaColor<Srgb> = AlphaColor::from_rgba8(0x00, 0x51, 0xD5, 0xFF);
/// Cloud body; slightly translucent so the backdrop grades through.
const CLOUD_WHITE: AlphaColor<Srgb> = AlphaColor::from_rgba8(0xFF, 0xFF, 0xFF, 0xF0);
/// Arrow and progress-dot blue.
const ARROW_BLUE: AlphaColor<Srgb> = AlphaColor::from_rgba8(0x19, 0x67, 0xD2, 0xFF);
/// Soft shadow under the cloud.
const CLOUD_SHADOW: AlphaColor<Srgb> = AlphaColor::from_rgba8(0x00, 0x00, 0x00, 30);
/// Sharper shadow under the arrow.
const ARROW_SHADOW: AlphaColor<Srgb> = AlphaColor::from_rgba8(0x00, 0x00, 0x00, 60);
/// Gloss wash over the upper part of the icon.
const GLOSS_WHITE: AlphaColor<Srgb> = AlphaColor::from_rgba8(0xFF, 0xFF, 0xFF, 40);

/// Center of the cloud group.
const CLOUD_CENTER: Point = Point::new(512.0, 300.0);
/// Cloud body and its three bumps, as bounding boxes.
const CLOUD_ELLIPSES: [Rect; 4] = [
    Rect::new(312.0, 240.0, 712.0, 360.0),
    Rect::new(332.0, 220.0, 432.0, 320.0),
    Rect::new(412.0, 200.0, 612.0, 280.0),
    Rect::new(592.0, 240.0, 692.0, 340.0),
];
/// Cloud shadow offset.
const CLOUD_SHADOW_OFFSET: Vec2 = Vec2::new(4.0, 4.0);

/// Arrow shaft width.
const ARROW_WIDTH: f64 = 30.0;
/// Arrow shaft length, shoulder to shoulder.
const ARROW_LENGTH: f64 = 200.0;
/// Vertical gap between the cloud center and the shaft top.
const ARROW_TOP_GAP: f64 = 80.0;
/// Half-width of the arrow head at its shoulders.
const ARROW_HEAD_HALF: f64 = 70.0;
/// How far the tip extends past the shaft end.
const ARROW_TIP_DROP: f64 = 30.0;
/// How far the head shoulders sit above the shaft end.
const ARROW_SHOULDER_RISE: f64 = 20.0;
/// Arrow shadow offset.
const ARROW_SHADOW_OFFSET: Vec2 = Vec2::new(2.0, 2.0);

/// Progress dot radius.
const DOT_RADIUS: f64 = 15.0;
/// Horizontal spacing between neighboring dots.
const DOT_SPACING: f64 = 40.0;
/// Vertical gap between the arrow tip and the dot row.
const DOT_ROW_GAP: f64 = 60.0;
/// Alpha of the outer, dimmed dots; the middle dot is opaque.
const DOT_DIM_ALPHA: u8 = 180;

/// Gloss highlight bounding box.
const GLOSS_RECT: Rect = Rect::new(200.0, 200.0, 824.0, 350.0);

/// Build the cloud-download icon.
///
/// Paint order: gradient backdrop, cloud (each ellipse with its soft
/// shadow), download arrow, progress dots, gloss highlight on top.
pub fn cloud_download() -> Scene {
    let mut scene = Scene::new();

    scene.push(Shape::filled(
        Geometry::RoundedRect {
            rect: Rect::new(0.0, 0.0, DESIGN_GRID, DESIGN_GRID),
            radius: BACKDROP_CORNER_RATIO * DESIGN_GRID,
        },
        Fill::Gradient(Gradient::linear(
            GradientAxis::Vertical,
            BACKDROP_TOP,
            BACKDROP_BOTTOM,
        )),
    ));

    for rect in CLOUD_ELLIPSES {
        scene.push(
            Shape::filled(Geometry::Ellipse { rect }, CLOUD_WHITE)
                .with_shadow(CLOUD_SHADOW_OFFSET, CLOUD_SHADOW),
        );
    }

    let shaft_top = CLOUD_CENTER.y + ARROW_TOP_GAP;
    let shaft_bottom = shaft_top + ARROW_LENGTH;
    scene.push(
        Shape::filled(
            Geometry::RoundedRect {
                rect: Rect::new(
                    CLOUD_CENTER.x - ARROW_WIDTH / 2.0,
                    shaft_top,
                    CLOUD_CENTER.x + ARROW_WIDTH / 2.0,
                    shaft_bottom,
                ),
                radius: ARROW_WIDTH / 2.0,
            },
            ARROW_BLUE,
        )
        .with_shadow(ARROW_SHADOW_OFFSET, ARROW_SHADOW),
    );

    let tip = Point::new(CLOUD_CENTER.x, shaft_bottom + ARROW_TIP_DROP);
    let shoulder_y = shaft_bottom - ARROW_SHOULDER_RISE;
    scene.push(
        Shape::filled(
            Geometry::Polygon {
                points: vec![
                    tip,
                    Point::new(CLOUD_CENTER.x - ARROW_HEAD_HALF, shoulder_y),
                    Point::new(CLOUD_CENTER.x + ARROW_HEAD_HALF, shoulder_y),
                ],
            },
            ARROW_BLUE,
        )
        .with_shadow(ARROW_SHADOW_OFFSET, ARROW_SHADOW),
    );

    let dot_row = tip.y + DOT_ROW_GAP;
    for (i, offset) in [-DOT_SPACING, 0.0, DOT_SPACING].into_iter().enumerate() {
        let center = Point::new(CLOUD_CENTER.x + offset, dot_row);
        let color = if i == 1 {
            ARROW_BLUE
        } else {
            ARROW_BLUE.with_alpha(f32::from(DOT_DIM_ALPHA) / 255.0)
        };
        scene.push(Shape::filled(
            Geometry::Ellipse {
                rect: Rect::new(
                    center.x - DOT_RADIUS,
                    center.y - DOT_RADIUS,
                    center.x + DOT_RADIUS,
                    center.y + DOT_RADIUS,
                ),
            },
            color,
        ));
    }

    scene.push(Shape::filled(
        Geometry::Ellipse { rect: GLOSS_RECT },
        GLOSS_WHITE,
    ));

    scene
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scene_layers_in_expected_order() {
        let scene = cloud_download();
        // Backdrop, 4 cloud ellipses, shaft, head, 3 dots, gloss.
        assert_eq!(scene.shapes().len(), 10);
        assert!(matches!(
            scene.shapes()[0].geometry,
            Geometry::RoundedRect { .. }
        ));
        assert!(matches!(
            scene.shapes().last().unwrap().geometry,
            Geometry::Ellipse { .. }
        ));
    }

    #[test]
    fn cloud_shapes_carry_shadows() {
        let scene = cloud_download();
        for shape in &scene.shapes()[1..5] {
            assert!(shape.shadow.is_some());
        }
        // The gloss is a pure highlight.
        assert!(scene.shapes().last().unwrap().shadow.is_none());
    }
}
