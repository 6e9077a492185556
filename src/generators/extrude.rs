//! Solid extruder: a closed contour to a prism with front, side and back groups.
//!
//! The back cap sits on `z = 0` facing -Z, the front cap on `z = depth` facing
//! +Z. Side walls are one quad per outline edge with a flat outward normal.
//! Vertices are emitted as a plain triangle list in group order: front cap,
//! side walls, back cap.

use anyhow::ensure;
use cgmath::{InnerSpace, Point2, Vector2};

use crate::data_structures::{
    contour::{CURVE_DIVISIONS, Contour},
    mesh::{GeometryGroup, PieceMesh, partition_groups},
};

/// Extrude `contour` along +Z by `depth` in a single step without bevel.
pub fn extrude(contour: &Contour, depth: f32) -> anyhow::Result<PieceMesh> {
    ensure!(
        depth.is_finite() && depth > 0.0,
        "extrusion depth must be positive, got {depth}"
    );
    ensure!(
        contour.is_closed(),
        "contour is not closed: gap of {:.6}",
        contour.closing_gap()
    );

    let outline = counter_clockwise(contour.outline_points(CURVE_DIVISIONS));
    ensure!(
        outline.len() >= 3,
        "contour flattens to {} points, a solid needs at least 3",
        outline.len()
    );
    let triangles = triangulate(&outline);

    let cap_vertices = triangles.len() * 3;
    let side_vertices = outline.len() * 6;
    let total = 2 * cap_vertices + side_vertices;
    let mut positions: Vec<[f32; 3]> = Vec::with_capacity(total);
    let mut normals: Vec<[f32; 3]> = Vec::with_capacity(total);

    // front cap
    for [a, b, c] in &triangles {
        for &i in [a, b, c] {
            positions.push([outline[i].x, outline[i].y, depth]);
            normals.push([0.0, 0.0, 1.0]);
        }
    }

    // side walls
    for (i, p0) in outline.iter().enumerate() {
        let p1 = outline[(i + 1) % outline.len()];
        let along = p1 - *p0;
        let outward = Vector2::new(along.y, -along.x).normalize();
        let normal = [outward.x, outward.y, 0.0];
        let quad = [
            [p0.x, p0.y, 0.0],
            [p1.x, p1.y, 0.0],
            [p1.x, p1.y, depth],
            [p0.x, p0.y, 0.0],
            [p1.x, p1.y, depth],
            [p0.x, p0.y, depth],
        ];
        for position in quad {
            positions.push(position);
            normals.push(normal);
        }
    }

    // back cap, wound the other way round
    for [a, c, b] in &triangles {
        for &i in [a, b, c] {
            positions.push([outline[i].x, outline[i].y, 0.0]);
            normals.push([0.0, 0.0, -1.0]);
        }
    }

    let groups = partition_groups(cap_vertices as u32, total as u32)?;
    log::debug!(
        "Extruded {} outline points into {} vertices (caps {}, sides {})",
        outline.len(),
        total,
        cap_vertices,
        side_vertices
    );
    PieceMesh::new(positions, normals, groups.to_vec())
}

/**
 * Recovers the front/sides/back partition of an extrusion of `contour` that has
 * `total_vertices` vertices but no groups.
 *
 * The contour is triangulated on its own to count the front cap; the back cap has
 * the same size and the side walls get the rest.
 */
pub fn derive_groups(contour: &Contour, total_vertices: u32) -> anyhow::Result<[GeometryGroup; 3]> {
    let outline = counter_clockwise(contour.outline_points(CURVE_DIVISIONS));
    let front_count = triangulate(&outline).len() as u32 * 3;
    partition_groups(front_count, total_vertices)
}

/// Ear-clipping triangulation of a simple polygon. Triangles come back counter-clockwise.
///
/// Self-intersecting outlines give whatever the ear clipper produces; a hard
/// failure yields no triangles at all.
pub fn triangulate(outline: &[Point2<f32>]) -> Vec<[usize; 3]> {
    if outline.len() < 3 {
        return Vec::new();
    }
    let flat: Vec<f64> = outline
        .iter()
        .flat_map(|p| [p.x as f64, p.y as f64])
        .collect();
    let indices = match earcutr::earcut(&flat, &[], 2) {
        Ok(indices) => indices,
        Err(e) => {
            log::warn!("Triangulating a {}-point outline failed: {:?}", outline.len(), e);
            return Vec::new();
        }
    };
    indices
        .chunks_exact(3)
        .map(|t| {
            if signed_area(&[outline[t[0]], outline[t[1]], outline[t[2]]]) < 0.0 {
                [t[0], t[2], t[1]]
            } else {
                [t[0], t[1], t[2]]
            }
        })
        .collect()
}

/// Shoelace area, positive for counter-clockwise loops.
pub fn signed_area(points: &[Point2<f32>]) -> f32 {
    let n = points.len();
    (0..n)
        .map(|i| {
            let p = points[i];
            let q = points[(i + 1) % n];
            p.x * q.y - q.x * p.y
        })
        .sum::<f32>()
        * 0.5
}

fn counter_clockwise(mut points: Vec<Point2<f32>>) -> Vec<Point2<f32>> {
    if signed_area(&points) < 0.0 {
        points.reverse();
    }
    points
}
