//! GPU-side piece: vertex buffer, groups and one material per group.

use crate::data_structures::{
    instance::Instance,
    material::Material,
    mesh::GeometryGroup,
};

/// Everything needed to draw one piece.
#[derive(Debug)]
pub struct PieceModel {
    pub name: String,
    pub vertex_buffer: wgpu::Buffer,
    pub instance_buffer: wgpu::Buffer,
    pub num_vertices: u32,
    pub groups: Vec<GeometryGroup>,
    /// Indexed by [`GeometryGroup::material_index`].
    pub materials: Vec<Material>,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl PieceModel {
    /// Upload a new node transform.
    pub fn write_transform(&self, queue: &wgpu::Queue, instance: &Instance) {
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&[instance.to_raw()]),
        );
    }

    pub fn material_for(&self, group: &GeometryGroup) -> Option<&Material> {
        self.materials.get(group.material_index())
    }

    /// Draw every group with its material. Expects the piece pipeline to be set.
    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, camera_bind_group: &wgpu::BindGroup) {
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.set_bind_group(1, camera_bind_group, &[]);
        for group in self.groups.iter().filter(|g| g.count > 0) {
            let Some(material) = self.material_for(group) else {
                log::warn!(
                    "{} has no material for its {} group, skipping it.",
                    self.name,
                    group.kind.name()
                );
                continue;
            };
            // re-read every frame, the texture may have finished loading meanwhile
            let bind_group = material.bind_group();
            render_pass.set_bind_group(0, &bind_group, &[]);
            render_pass.draw(group.range(), 0..1);
        }
    }
}
