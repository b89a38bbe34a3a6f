// Copyright 2025 the Emblem Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the pixel-level draw operations.

use emblem_common::paint::{Fill, Gradient, GradientAxis, GradientStop};
use emblem_render::color::palette::css::{BLUE, LIME, WHITE};
use emblem_render::color::AlphaColor;
use emblem_render::kurbo::{Point, Rect};
use emblem_render::{Canvas, RenderError};

use crate::util::rgba;

#[test]
fn zero_and_negative_dimensions_are_rejected() {
    assert!(matches!(
        Canvas::new(0, 10),
        Err(RenderError::InvalidDimension { .. })
    ));
    assert!(matches!(
        Canvas::new(10, 0),
        Err(RenderError::InvalidDimension { .. })
    ));
    assert!(matches!(
        Canvas::new(-3, 5),
        Err(RenderError::InvalidDimension { .. })
    ));
    assert!(matches!(
        Canvas::new(64, emblem_render::MAX_DIMENSION + 1),
        Err(RenderError::InvalidDimension { .. })
    ));
}

#[test]
fn crossed_star_keeps_an_even_odd_hole() {
    let mut canvas = Canvas::new(100, 100).unwrap();
    let star = [
        Point::new(50.0, 10.0),
        Point::new(75.0, 90.0),
        Point::new(10.0, 40.0),
        Point::new(90.0, 40.0),
        Point::new(25.0, 90.0),
    ];
    canvas.fill_polygon(&star, &Fill::Solid(LIME)).unwrap();

    // The limbs are filled, the pentagonal core is a hole.
    assert_ne!(canvas.pixmap().pixel(30, 50).a, 0);
    assert_eq!(canvas.pixmap().pixel(50, 50).a, 0);
}

#[test]
fn non_finite_polygon_is_rejected_without_drawing() {
    let mut canvas = Canvas::new(16, 16).unwrap();
    let result = canvas.fill_polygon(
        &[
            Point::new(0.0, 0.0),
            Point::new(f64::NAN, 4.0),
            Point::new(8.0, 8.0),
        ],
        &Fill::Solid(BLUE),
    );
    assert!(matches!(result, Err(RenderError::MalformedShape(_))));
    assert!(canvas.pixmap().data().iter().all(|p| p.a == 0));
}

#[test]
fn two_point_polygon_is_malformed() {
    let mut canvas = Canvas::new(16, 16).unwrap();
    let result = canvas.fill_polygon(
        &[Point::new(0.0, 0.0), Point::new(8.0, 8.0)],
        &Fill::Solid(BLUE),
    );
    assert!(matches!(result, Err(RenderError::MalformedShape(_))));
}

#[test]
fn single_stop_gradient_is_unsupported() {
    let mut canvas = Canvas::new(16, 16).unwrap();
    let fill = Fill::Gradient(Gradient {
        axis: GradientAxis::Vertical,
        stops: vec![GradientStop {
            offset: 0.0,
            color: WHITE,
        }],
    });
    let result = canvas.fill_ellipse(Rect::new(0.0, 0.0, 16.0, 16.0), &fill);
    assert!(matches!(result, Err(RenderError::UnsupportedFill(_))));
    assert!(canvas.pixmap().data().iter().all(|p| p.a == 0));
}

#[test]
fn thick_line_covers_its_width() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    canvas
        .draw_line(Point::new(10.0, 20.0), Point::new(30.0, 20.0), 4.0, LIME)
        .unwrap();

    assert_ne!(canvas.pixmap().pixel(20, 20).a, 0);
    assert_ne!(canvas.pixmap().pixel(29, 18).a, 0);
    // Above, below and past the flat caps stays empty.
    assert_eq!(canvas.pixmap().pixel(20, 16).a, 0);
    assert_eq!(canvas.pixmap().pixel(20, 25).a, 0);
    assert_eq!(canvas.pixmap().pixel(5, 20).a, 0);
    assert_eq!(canvas.pixmap().pixel(30, 20).a, 0);
}

#[test]
fn degenerate_lines() {
    let mut canvas = Canvas::new(16, 16).unwrap();
    // Zero length draws nothing.
    canvas
        .draw_line(Point::new(8.0, 8.0), Point::new(8.0, 8.0), 5.0, LIME)
        .unwrap();
    assert!(canvas.pixmap().data().iter().all(|p| p.a == 0));
    // Negative width is malformed.
    let result = canvas.draw_line(Point::new(0.0, 0.0), Point::new(8.0, 8.0), -1.0, LIME);
    assert!(matches!(result, Err(RenderError::MalformedShape(_))));
}

#[test]
fn ellipse_spans_are_analytic() {
    let mut canvas = Canvas::new(40, 40).unwrap();
    canvas
        .fill_ellipse(Rect::new(10.0, 10.0, 30.0, 30.0), &Fill::Solid(BLUE))
        .unwrap();

    assert_ne!(canvas.pixmap().pixel(20, 20).a, 0);
    assert_ne!(canvas.pixmap().pixel(20, 11).a, 0);
    // The bounding-box corner lies outside the ellipse.
    assert_eq!(canvas.pixmap().pixel(10, 10).a, 0);
    assert_eq!(canvas.pixmap().pixel(31, 20).a, 0);
}

#[test]
fn vertical_gradient_interpolates_per_row() {
    let mut canvas = Canvas::new(10, 10).unwrap();
    let fill = Fill::Gradient(Gradient::linear(
        GradientAxis::Vertical,
        AlphaColor::from_rgba8(0, 0, 0, 255),
        AlphaColor::from_rgba8(255, 255, 255, 255),
    ));
    let rect = [
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        Point::new(10.0, 10.0),
        Point::new(0.0, 10.0),
    ];
    canvas.fill_polygon(&rect, &fill).unwrap();

    // Rows sample the gradient at their centers: t = 0.05 and t = 0.95.
    assert_eq!(canvas.pixmap().pixel(5, 0), rgba(13, 13, 13, 255));
    assert_eq!(canvas.pixmap().pixel(5, 9), rgba(242, 242, 242, 255));
    let top = canvas.pixmap().pixel(5, 0).r;
    let bottom = canvas.pixmap().pixel(5, 9).r;
    assert!(top < bottom);
}

#[test]
fn layers_composite_in_draw_order() {
    let mut canvas = Canvas::new(8, 8).unwrap();
    let rect = [
        Point::new(0.0, 0.0),
        Point::new(8.0, 0.0),
        Point::new(8.0, 8.0),
        Point::new(0.0, 8.0),
    ];
    canvas.fill_polygon(&rect, &Fill::Solid(BLUE)).unwrap();
    canvas
        .fill_polygon(
            &rect,
            &Fill::Solid(AlphaColor::from_rgba8(255, 255, 255, 128)),
        )
        .unwrap();

    assert_eq!(canvas.pixmap().pixel(4, 4), rgba(128, 128, 255, 255));
}
