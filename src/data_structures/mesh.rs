//! CPU-side piece meshes.
//!
//! A [`PieceMesh`] is a non-indexed triangle list: every three consecutive
//! vertices form one triangle. Its triangles are partitioned into contiguous
//! [`GeometryGroup`]s (front cap, side walls, back cap) that each map to one
//! material slot.

use std::ops::Range;

use anyhow::ensure;

pub trait Vertex {
    fn desc() -> wgpu::VertexBufferLayout<'static>;
}

/// Interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PieceVertex {
    pub position: [f32; 3],
    pub tex_coords: [f32; 2],
    pub normal: [f32; 3],
}

impl Vertex for PieceVertex {
    fn desc() -> wgpu::VertexBufferLayout<'static> {
        use std::mem;
        wgpu::VertexBufferLayout {
            array_stride: mem::size_of::<PieceVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x3,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: mem::size_of::<[f32; 5]>() as wgpu::BufferAddress,
                    shader_location: 2,
                    format: wgpu::VertexFormat::Float32x3,
                },
            ],
        }
    }
}

/// Which part of the solid a group covers. The order is the emission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GroupKind {
    Front,
    Sides,
    Back,
}

impl GroupKind {
    pub const ORDER: [GroupKind; 3] = [GroupKind::Front, GroupKind::Sides, GroupKind::Back];

    /// Index into the material list bound to the mesh.
    pub fn material_index(self) -> usize {
        match self {
            GroupKind::Front => 0,
            GroupKind::Sides => 1,
            GroupKind::Back => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            GroupKind::Front => "front",
            GroupKind::Sides => "sides",
            GroupKind::Back => "back",
        }
    }
}

/// A contiguous vertex range sharing one material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryGroup {
    pub kind: GroupKind,
    pub start: u32,
    pub count: u32,
}

impl GeometryGroup {
    pub fn range(&self) -> Range<u32> {
        self.start..self.start + self.count
    }

    pub fn material_index(&self) -> usize {
        self.kind.material_index()
    }
}

/**
 * Splits `total` vertices into front, sides and back given the size of the front cap.
 *
 * The back cap always mirrors the front cap, the side walls take what's left:
 * `sides = total - 2 * front`.
 */
pub fn partition_groups(front_count: u32, total: u32) -> anyhow::Result<[GeometryGroup; 3]> {
    ensure!(
        front_count.checked_mul(2).is_some_and(|caps| caps <= total),
        "two caps of {front_count} vertices don't fit into {total} vertices"
    );
    let side_count = total - 2 * front_count;
    Ok([
        GeometryGroup {
            kind: GroupKind::Front,
            start: 0,
            count: front_count,
        },
        GeometryGroup {
            kind: GroupKind::Sides,
            start: front_count,
            count: side_count,
        },
        GeometryGroup {
            kind: GroupKind::Back,
            start: front_count + side_count,
            count: front_count,
        },
    ])
}

/// Immutable result of the piece builders.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PieceMesh {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    groups: Vec<GeometryGroup>,
}

impl PieceMesh {
    /// Assemble a mesh; UVs start out zeroed until a mapper provides them.
    pub fn new(
        positions: Vec<[f32; 3]>,
        normals: Vec<[f32; 3]>,
        groups: Vec<GeometryGroup>,
    ) -> anyhow::Result<Self> {
        ensure!(
            positions.len() == normals.len(),
            "{} positions but {} normals",
            positions.len(),
            normals.len()
        );
        ensure!(
            positions.len() % 3 == 0,
            "a triangle list needs a multiple of three vertices, got {}",
            positions.len()
        );
        let covered: u32 = groups.iter().map(|g| g.count).sum();
        ensure!(
            covered as usize == positions.len(),
            "groups cover {covered} of {} vertices",
            positions.len()
        );
        let tex_coords = vec![[0.0; 2]; positions.len()];
        Ok(Self {
            positions,
            normals,
            tex_coords,
            groups,
        })
    }

    /// Replace the UV array, returning a new mesh.
    pub fn with_tex_coords(self, tex_coords: Vec<[f32; 2]>) -> anyhow::Result<Self> {
        ensure!(
            tex_coords.len() == self.positions.len(),
            "{} UVs for {} vertices",
            tex_coords.len(),
            self.positions.len()
        );
        Ok(Self { tex_coords, ..self })
    }

    /// Replace the groups, returning a new mesh.
    pub fn with_groups(self, groups: Vec<GeometryGroup>) -> anyhow::Result<Self> {
        let covered: u32 = groups.iter().map(|g| g.count).sum();
        ensure!(
            covered as usize == self.positions.len(),
            "groups cover {covered} of {} vertices",
            self.positions.len()
        );
        Ok(Self { groups, ..self })
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    pub fn groups(&self) -> &[GeometryGroup] {
        &self.groups
    }

    pub fn group(&self, kind: GroupKind) -> Option<&GeometryGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Positions of one group's vertices.
    pub fn group_positions(&self, kind: GroupKind) -> &[[f32; 3]] {
        match self.group(kind) {
            Some(group) => &self.positions[group.start as usize..(group.start + group.count) as usize],
            None => &[],
        }
    }

    /// Interleave the attribute arrays for upload.
    pub fn vertices(&self) -> Vec<PieceVertex> {
        self.positions
            .iter()
            .zip(self.tex_coords.iter())
            .zip(self.normals.iter())
            .map(|((position, tex_coords), normal)| PieceVertex {
                position: *position,
                tex_coords: *tex_coords,
                normal: *normal,
            })
            .collect()
    }
}
