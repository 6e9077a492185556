use cgmath::Point2;
use flow_jigsaw::{
    data_structures::contour::{CURVE_DIVISIONS, ContourSegment},
    generators::outline::{build_outline, build_rounded_triangle},
    piece::{EdgeCode, Edges},
};

use crate::common::test_utils::{all_blanks, all_tabs, assert_close};
mod common;

#[test]
fn flat_piece_is_the_scaled_square() {
    let contour = build_outline(2.0, &Edges::flat());

    assert_eq!(contour.len(), 4);
    assert!(contour.is_line_only());
    assert!(contour.is_closed());
    let corners: Vec<Point2<f32>> = contour.segments().iter().map(ContourSegment::start).collect();
    assert_eq!(
        corners,
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
        ]
    );
    assert_eq!(contour.outline_points(CURVE_DIVISIONS).len(), 4);
}

#[test]
fn every_edge_combination_closes() {
    let mut count = 0;
    for edges in Edges::all_combinations() {
        let contour = build_outline(1.0, &edges);
        assert!(contour.is_closed(), "{:?} leaves a gap of {}", edges, contour.closing_gap());
        let points = contour.points(CURVE_DIVISIONS);
        assert_eq!(points.first(), points.last(), "{:?}", edges);
        count += 1;
    }
    assert_eq!(count, 81);
}

#[test]
fn bulged_edges_use_three_segments() {
    let edges = Edges::new(EdgeCode::Tab, EdgeCode::Flat, EdgeCode::Blank, EdgeCode::Flat);
    let contour = build_outline(1.0, &edges);

    // bottom: 3, right: 1, top: 3, left: 1
    assert_eq!(contour.len(), 8);
    let curves: Vec<&ContourSegment> = contour
        .segments()
        .iter()
        .filter(|s| matches!(s, ContourSegment::CubicBezier { .. }))
        .collect();
    assert_eq!(curves.len(), 2);
    // bottom bulge spans 30% to 70% of the edge
    assert_eq!(curves[0].start(), Point2::new(0.3, 0.0));
    assert_eq!(curves[0].end(), Point2::new(0.7, 0.0));
}

#[test]
fn bulge_control_points_sit_a_third_of_the_size_off_the_edge() {
    let size = 2.0;
    let edges = Edges::new(EdgeCode::Flat, EdgeCode::Flat, EdgeCode::Flat, EdgeCode::Tab);
    let contour = build_outline(size, &edges);

    let Some(ContourSegment::CubicBezier {
        control1, control2, ..
    }) = contour
        .segments()
        .iter()
        .find(|s| matches!(s, ContourSegment::CubicBezier { .. }))
    else {
        panic!("the right edge should carry a bulge");
    };
    assert_close(control1.x, size + 0.3 * size);
    assert_close(control2.x, size + 0.3 * size);
    assert_close(control1.y, 0.3 * size);
    assert_close(control2.y, 0.7 * size);
}

#[test]
fn tabs_protrude_beyond_the_cell() {
    let (min, max) = build_outline(1.0, &all_tabs())
        .bounds(CURVE_DIVISIONS)
        .expect("non-empty outline");

    // the bulge peaks at 3/4 of the control point offset
    assert_close(min.x, -0.225);
    assert_close(min.y, -0.225);
    assert_close(max.x, 1.225);
    assert_close(max.y, 1.225);
}

#[test]
fn blanks_stay_inside_the_cell() {
    let contour = build_outline(1.0, &all_blanks());
    let (min, max) = contour.bounds(CURVE_DIVISIONS).expect("non-empty outline");
    assert_close(min.x, 0.0);
    assert_close(min.y, 0.0);
    assert_close(max.x, 1.0);
    assert_close(max.y, 1.0);

    // the bottom blank dents upward
    let deepest = contour
        .points(CURVE_DIVISIONS)
        .into_iter()
        .filter(|p| (p.x - 0.5).abs() < 1e-4 && p.y < 0.5)
        .map(|p| p.y)
        .fold(f32::MIN, f32::max);
    assert_close(deepest, 0.225);
}

#[test]
fn curves_are_flattened_with_a_fixed_resolution() {
    let edges = Edges::new(EdgeCode::Flat, EdgeCode::Flat, EdgeCode::Tab, EdgeCode::Flat);
    let points = build_outline(1.0, &edges).outline_points(CURVE_DIVISIONS);

    // 4 corners, 2 bulge ends, 11 interior curve samples
    assert_eq!(points.len(), 4 + 2 + CURVE_DIVISIONS - 1);
}

#[test]
fn rounded_triangle_has_a_quadratic_corner() {
    let contour = build_rounded_triangle();

    assert!(contour.is_closed());
    assert_eq!(contour.len(), 4);
    assert!(matches!(
        contour.segments()[1],
        ContourSegment::QuadraticBezier { .. }
    ));
    assert_eq!(contour.start(), Some(Point2::new(0.0, 0.0)));
    assert_eq!(contour.segments()[2].end(), Point2::new(1.0, 1.0));
}

#[test]
fn tiny_pieces_keep_every_point() {
    let edges = Edges::new(EdgeCode::Tab, EdgeCode::Blank, EdgeCode::Tab, EdgeCode::Blank);
    let unit = build_outline(1.0, &edges);
    let unit_points = unit.outline_points(CURVE_DIVISIONS).len();

    for size in [1e-4, 1e-6] {
        let tiny = build_outline(size, &edges);
        assert!(tiny.is_closed(), "size {size} leaves a gap of {}", tiny.closing_gap());
        assert_eq!(tiny.len(), unit.len(), "size {size}");
        assert_eq!(
            tiny.outline_points(CURVE_DIVISIONS).len(),
            unit_points,
            "size {size}"
        );
    }
}
