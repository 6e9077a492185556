//! Materials of a piece: one textured front, flat-coloured sides and back.
//!
//! Every material owns a [`TextureSlot`], a shared handle to the texture and bind
//! group currently in use. Flat materials fill it once with a 1x1 texture of their
//! colour. The textured front starts with a placeholder that the loader swaps out
//! later; the renderer reads the slot every frame, so the swap needs no
//! coordination with drawing.

use std::sync::{Arc, PoisonError, RwLock};

use crate::data_structures::texture::{Texture, hex_to_rgba};

/// Side wall colour.
pub const SIDE_COLOUR: u32 = 0x156289;
/// Back cap colour.
pub const BACK_COLOUR: u32 = 0x333333;
/// Front colour shown until (or instead of) the puzzle image.
pub const PLACEHOLDER_COLOUR: u32 = 0xffffff;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextureState {
    Placeholder,
    Loaded,
    /// Fetching or decoding failed; the placeholder stays.
    Failed,
}

/// A texture together with the bind group that exposes it to the shader.
#[derive(Clone, Debug)]
pub struct BoundTexture {
    pub texture: Texture,
    pub bind_group: wgpu::BindGroup,
    pub state: TextureState,
}

impl BoundTexture {
    pub fn new(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        texture: Texture,
        state: TextureState,
        label: &str,
    ) -> Self {
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&texture.sampler),
                },
            ],
            label: Some(label),
        });
        Self {
            texture,
            bind_group,
            state,
        }
    }
}

/// Shared, swappable texture handle.
#[derive(Clone, Debug)]
pub struct TextureSlot(Arc<RwLock<BoundTexture>>);

impl TextureSlot {
    pub fn new(bound: BoundTexture) -> Self {
        Self(Arc::new(RwLock::new(bound)))
    }

    /// The bind group to draw with right now.
    pub fn bind_group(&self) -> wgpu::BindGroup {
        self.0
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .bind_group
            .clone()
    }

    pub fn state(&self) -> TextureState {
        self.0.read().unwrap_or_else(PoisonError::into_inner).state
    }

    pub fn replace(&self, bound: BoundTexture) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = bound;
    }

    /// Keep the current texture but record a new state.
    pub fn mark(&self, state: TextureState) {
        self.0.write().unwrap_or_else(PoisonError::into_inner).state = state;
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MaterialKind {
    /// Samples the shared puzzle image.
    Textured { src: String },
    /// Single colour with flat shading.
    Flat { colour: u32 },
}

#[derive(Clone, Debug)]
pub struct Material {
    pub name: String,
    pub kind: MaterialKind,
    slot: TextureSlot,
}

impl Material {
    pub fn textured(name: &str, src: &str, slot: TextureSlot) -> Self {
        Self {
            name: name.to_string(),
            kind: MaterialKind::Textured {
                src: src.to_string(),
            },
            slot,
        }
    }

    pub fn flat(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        name: &str,
        colour: u32,
    ) -> Self {
        let texture = Texture::solid_colour(hex_to_rgba(colour), 1, 1, device, queue, name);
        let bound = BoundTexture::new(device, layout, texture, TextureState::Loaded, name);
        Self {
            name: name.to_string(),
            kind: MaterialKind::Flat { colour },
            slot: TextureSlot::new(bound),
        }
    }

    pub fn flat_shading(&self) -> bool {
        matches!(self.kind, MaterialKind::Flat { .. })
    }

    pub fn slot(&self) -> &TextureSlot {
        &self.slot
    }

    pub fn bind_group(&self) -> wgpu::BindGroup {
        self.slot.bind_group()
    }
}
