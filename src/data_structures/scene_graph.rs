//! Host scene nodes.
//!
//! The host framework owns its nodes; components only need to hang renderables
//! off them under a slot name and read the node's transform. [`SceneNode`] is
//! that seam, [`EntityNode`] a plain implementation for hosts without their own.

use std::collections::HashMap;

use crate::data_structures::{instance::Instance, model::PieceModel};

/// Slot every piece component attaches its mesh to.
pub const MESH_SLOT: &str = "mesh";

pub trait SceneNode {
    /// Attach `object` under `slot`, replacing whatever was there.
    fn set_object(&mut self, slot: &str, object: PieceModel);

    fn object(&self, slot: &str) -> Option<&PieceModel>;

    fn remove_object(&mut self, slot: &str) -> Option<PieceModel>;

    fn local_transform(&self) -> Instance;

    fn set_local_transform(&mut self, instance: Instance);
}

#[derive(Debug, Default)]
pub struct EntityNode {
    pub name: String,
    objects: HashMap<String, PieceModel>,
    transform: Instance,
}

impl EntityNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }

    pub fn slots(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Push the node transform into the instance buffers of all attached objects.
    pub fn write_to_buffers(&self, queue: &wgpu::Queue) {
        for object in self.objects.values() {
            object.write_transform(queue, &self.transform);
        }
    }

    pub fn draw(&self, render_pass: &mut wgpu::RenderPass<'_>, camera_bind_group: &wgpu::BindGroup) {
        for object in self.objects.values() {
            object.draw(render_pass, camera_bind_group);
        }
    }
}

impl SceneNode for EntityNode {
    fn set_object(&mut self, slot: &str, object: PieceModel) {
        if self.objects.insert(slot.to_string(), object).is_some() {
            log::debug!("Replaced the {} object of {}", slot, self.name);
        }
    }

    fn object(&self, slot: &str) -> Option<&PieceModel> {
        self.objects.get(slot)
    }

    fn remove_object(&mut self, slot: &str) -> Option<PieceModel> {
        self.objects.remove(slot)
    }

    fn local_transform(&self) -> Instance {
        self.transform
    }

    fn set_local_transform(&mut self, instance: Instance) {
        self.transform = instance;
    }
}
