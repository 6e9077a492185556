//! Outline builder: edge codes to a closed piece contour.
//!
//! The outline starts in the bottom-left corner and walks counter-clockwise
//! along the bottom, right, top and left edges of the `S x S` cell. Tabs and
//! blanks replace the middle 40% of an edge with a cubic bulge.

use cgmath::{Point2, Vector2};

use crate::{
    data_structures::contour::{CLOSE_TOLERANCE, Contour, ContourBuilder},
    piece::{EdgeCode, Edges},
};

/// Where along an edge the bulge starts.
pub const BULGE_START: f32 = 0.3;
/// Where along an edge the bulge ends.
pub const BULGE_END: f32 = 0.7;
/// Distance of both control points from the edge line, relative to the piece size.
pub const BULGE_OFFSET: f32 = 0.3;

/// Build the closed outline of a piece with base size `size`.
pub fn build_outline(size: f32, edges: &Edges) -> Contour {
    let s = size;
    let corners = [
        Point2::new(0.0, 0.0),
        Point2::new(s, 0.0),
        Point2::new(s, s),
        Point2::new(0.0, s),
    ];
    // bottom, right, top, left with their outward normals
    let sides = [
        (edges.bottom, Vector2::new(0.0, -1.0)),
        (edges.right, Vector2::new(1.0, 0.0)),
        (edges.top, Vector2::new(0.0, 1.0)),
        (edges.left, Vector2::new(-1.0, 0.0)),
    ];

    let mut builder = ContourBuilder::new(corners[0]).with_tolerance(CLOSE_TOLERANCE * s);
    for (i, (code, outward)) in sides.into_iter().enumerate() {
        let from = corners[i];
        let to = corners[(i + 1) % corners.len()];
        builder = append_edge(builder, from, to, outward, code, s);
    }
    builder.close()
}

fn append_edge(
    builder: ContourBuilder,
    from: Point2<f32>,
    to: Point2<f32>,
    outward: Vector2<f32>,
    code: EdgeCode,
    size: f32,
) -> ContourBuilder {
    let direction = match code {
        EdgeCode::Flat => return builder.line_to(to),
        EdgeCode::Tab => 1.0,
        EdgeCode::Blank => -1.0,
    };
    let along = to - from;
    let bulge_start = from + along * BULGE_START;
    let bulge_end = from + along * BULGE_END;
    let offset = outward * (BULGE_OFFSET * size * direction);

    builder
        .line_to(bulge_start)
        .bezier_curve_to(bulge_start + offset, bulge_end + offset, bulge_end)
        .line_to(to)
}

/**
 * The rounded right triangle used as a plain decorative shape: up the left side,
 * a quadratic corner into the top edge and straight back to the origin.
 */
pub fn build_rounded_triangle() -> Contour {
    ContourBuilder::new(Point2::new(0.0, 0.0))
        .line_to(Point2::new(0.0, 0.8))
        .quadratic_curve_to(Point2::new(0.0, 1.0), Point2::new(0.2, 1.0))
        .line_to(Point2::new(1.0, 1.0))
        .close()
}
