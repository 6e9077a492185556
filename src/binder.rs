//! Material/texture binder.
//!
//! Produces one [`Material`] per geometry group, in group order: the front cap
//! samples the shared puzzle image, side walls and back cap are flat colours.
//! The image loads in the background; until then (or if it never arrives) the
//! front shows a placeholder colour.

use crate::{
    context::Context,
    data_structures::{
        material::{BACK_COLOUR, Material, SIDE_COLOUR},
        mesh::GroupKind,
    },
    resources::texture::{placeholder_slot, request_texture},
};

#[derive(Clone, Debug)]
pub struct MaterialBinder {
    layout: wgpu::BindGroupLayout,
}

impl MaterialBinder {
    pub fn new(ctx: &Context) -> Self {
        Self {
            layout: ctx.material_layout.clone(),
        }
    }

    /// The layout every produced material's bind group follows.
    pub fn layout(&self) -> &wgpu::BindGroupLayout {
        &self.layout
    }

    /// Materials for a puzzle piece. The texture request is fired off before returning.
    pub fn bind_piece(&self, ctx: &Context, texture_src: &str) -> Vec<Material> {
        GroupKind::ORDER
            .iter()
            .map(|kind| match kind {
                GroupKind::Front => {
                    let slot = placeholder_slot(&ctx.device, &ctx.queue, &self.layout, texture_src);
                    request_texture(ctx, &self.layout, texture_src, &slot);
                    Material::textured(kind.name(), texture_src, slot)
                }
                GroupKind::Sides => {
                    Material::flat(&ctx.device, &ctx.queue, &self.layout, kind.name(), SIDE_COLOUR)
                }
                GroupKind::Back => {
                    Material::flat(&ctx.device, &ctx.queue, &self.layout, kind.name(), BACK_COLOUR)
                }
            })
            .collect()
    }

    /// The same flat colour on every group.
    pub fn bind_flat(&self, ctx: &Context, colour: u32) -> Vec<Material> {
        let material = Material::flat(&ctx.device, &ctx.queue, &self.layout, "flat", colour);
        GroupKind::ORDER.iter().map(|_| material.clone()).collect()
    }
}
