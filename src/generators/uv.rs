//! UV mapper: per-vertex texture coordinates into the shared puzzle image.
//!
//! Pieces are placed in puzzle space by their cell: `global = cell * S + local`,
//! then divided by the puzzle extent `N * S`. Tabs reaching into a neighbouring
//! cell therefore sample the neighbour's part of the image instead of stretching
//! the piece's own patch.

use crate::{
    data_structures::{contour::bounds_of, mesh::PieceMesh},
    piece::PieceDescriptor,
};
use cgmath::Point2;

/// Which grid row sits at `v = 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UvOrientation {
    /// Row 0 is the base row, v grows with the row index.
    #[default]
    RowZeroAtBase,
    /// Row 0 is the top row of the image.
    RowZeroAtTop,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UvStrategy {
    /// Global puzzle coordinates.
    #[default]
    GlobalGrid,
    /// The piece's own bounding box squeezed into its cell. Protrusions get stretched.
    LocalBounds,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UvOptions {
    pub orientation: UvOrientation,
    pub strategy: UvStrategy,
    /// Mirror the result vertically (`v' = 1 - v`).
    pub flip_v: bool,
}

/// Map one local position to UV with the default global-grid rule.
pub fn puzzle_uv(piece: &PieceDescriptor, local: [f32; 2], orientation: UvOrientation) -> [f32; 2] {
    let s = piece.size;
    let extent = piece.puzzle_extent();
    let row = grid_row(piece, orientation);
    let global_x = piece.col as f32 * s + local[0];
    let global_y = row * s + local[1];
    [global_x / extent, global_y / extent]
}

/// Compute the UV array for every vertex of `mesh`.
pub fn compute_uvs(mesh: &PieceMesh, piece: &PieceDescriptor, options: &UvOptions) -> Vec<[f32; 2]> {
    let uvs: Vec<[f32; 2]> = match options.strategy {
        UvStrategy::GlobalGrid => mesh
            .positions()
            .iter()
            .map(|p| puzzle_uv(piece, [p[0], p[1]], options.orientation))
            .collect(),
        UvStrategy::LocalBounds => local_bounds_uvs(mesh, piece, options.orientation),
    };
    if options.flip_v {
        uvs.into_iter().map(|[u, v]| [u, 1.0 - v]).collect()
    } else {
        uvs
    }
}

/// Returns `mesh` with its UVs replaced by the mapped coordinates.
pub fn apply_uvs(
    mesh: PieceMesh,
    piece: &PieceDescriptor,
    options: &UvOptions,
) -> anyhow::Result<PieceMesh> {
    let uvs = compute_uvs(&mesh, piece, options);
    mesh.with_tex_coords(uvs)
}

fn local_bounds_uvs(
    mesh: &PieceMesh,
    piece: &PieceDescriptor,
    orientation: UvOrientation,
) -> Vec<[f32; 2]> {
    let points: Vec<Point2<f32>> = mesh
        .positions()
        .iter()
        .map(|p| Point2::new(p[0], p[1]))
        .collect();
    let Some((min, max)) = bounds_of(&points) else {
        return Vec::new();
    };
    let width = (max.x - min.x).max(f32::EPSILON);
    let height = (max.y - min.y).max(f32::EPSILON);
    let scale = 1.0 / piece.grid as f32;
    let row = grid_row(piece, orientation);
    let offset_u = piece.col as f32 * scale;
    let offset_v = row * scale;
    points
        .iter()
        .map(|p| {
            [
                (p.x - min.x) / width * scale + offset_u,
                (p.y - min.y) / height * scale + offset_v,
            ]
        })
        .collect()
}

fn grid_row(piece: &PieceDescriptor, orientation: UvOrientation) -> f32 {
    match orientation {
        UvOrientation::RowZeroAtBase => piece.row as f32,
        UvOrientation::RowZeroAtTop => piece.grid as f32 - 1.0 - piece.row as f32,
    }
}
