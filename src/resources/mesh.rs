use anyhow::ensure;
use wgpu::util::DeviceExt;

use crate::data_structures::{
    instance::Instance,
    material::Material,
    mesh::PieceMesh,
    model::PieceModel,
};

/**
 * Uploads a built mesh and pairs it with its materials.
 *
 * The mesh stays non-indexed: groups are drawn as plain vertex ranges, so no
 * index buffer is created.
 */
pub fn upload_piece(
    device: &wgpu::Device,
    name: &str,
    mesh: &PieceMesh,
    materials: Vec<Material>,
) -> anyhow::Result<PieceModel> {
    ensure!(mesh.vertex_count() > 0, "{name} has no vertices to upload");
    if let Some(group) = mesh
        .groups()
        .iter()
        .find(|g| g.material_index() >= materials.len())
    {
        anyhow::bail!(
            "{name}: the {} group needs material {} but only {} were bound",
            group.kind.name(),
            group.material_index(),
            materials.len()
        );
    }

    let vertices = mesh.vertices();
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Vertex Buffer", name)),
        contents: bytemuck::cast_slice(&vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });

    let instance_data = [Instance::new().to_raw()];
    let instance_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some(&format!("{:?} Instance Buffer", name)),
        contents: bytemuck::cast_slice(&instance_data),
        usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
    });

    Ok(PieceModel {
        name: name.to_string(),
        vertex_buffer,
        instance_buffer,
        num_vertices: vertices.len() as u32,
        groups: mesh.groups().to_vec(),
        materials,
        cast_shadow: true,
        receive_shadow: true,
    })
}
