//! CPU geometry generators: outline, extrusion and UV mapping.
//!
//! The three steps are independent functions chained by [`build_piece_mesh`]:
//! outline -> extrude -> UVs. None of them touch the GPU.

pub mod extrude;
pub mod outline;
pub mod uv;

use crate::{data_structures::mesh::PieceMesh, piece::PieceDescriptor};

/// Build the complete CPU mesh of one piece.
pub fn build_piece_mesh(piece: &PieceDescriptor, uv_options: &uv::UvOptions) -> anyhow::Result<PieceMesh> {
    piece.validate()?;
    let contour = outline::build_outline(piece.size, &piece.edges);
    let mesh = extrude::extrude(&contour, piece.depth)?;
    let mesh = uv::apply_uvs(mesh, piece, uv_options)?;
    log::debug!(
        "Built piece ({}, {}) of a {}x{} puzzle: {} triangles",
        piece.row,
        piece.col,
        piece.grid,
        piece.grid,
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// The rounded triangle shape extruded by `depth`. It carries no texture, so UVs stay zero.
pub fn build_rounded_triangle_mesh(depth: f32) -> anyhow::Result<PieceMesh> {
    extrude::extrude(&outline::build_rounded_triangle(), depth)
}
