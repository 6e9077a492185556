use std::path::Path;

use crate::{
    context::Context,
    data_structures::{
        material::{BoundTexture, PLACEHOLDER_COLOUR, TextureSlot, TextureState},
        texture::{Texture, hex_to_rgba},
    },
    resources::load_binary,
};

pub async fn load_texture(
    file_name: &str,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> anyhow::Result<Texture> {
    let data = load_binary(file_name).await?;
    // let the image crate sniff the format if the extension is missing or unknown
    let extension = Path::new(file_name).extension().and_then(|e| e.to_str());
    Texture::from_bytes(device, queue, &data, file_name, extension)
}

/// A slot holding a plain placeholder colour until something better arrives.
pub fn placeholder_slot(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    layout: &wgpu::BindGroupLayout,
    label: &str,
) -> TextureSlot {
    let texture = Texture::solid_colour(hex_to_rgba(PLACEHOLDER_COLOUR), 1, 1, device, queue, label);
    TextureSlot::new(BoundTexture::new(
        device,
        layout,
        texture,
        TextureState::Placeholder,
        label,
    ))
}

/**
 * Starts loading `src` into `slot` and returns right away.
 *
 * The slot keeps its placeholder until the image is decoded and uploaded. If
 * the image can't be fetched or decoded the placeholder stays for good and
 * the slot is marked [`TextureState::Failed`].
 */
pub fn request_texture(
    ctx: &Context,
    layout: &wgpu::BindGroupLayout,
    src: &str,
    slot: &TextureSlot,
) {
    ctx.spawn(populate_slot(
        ctx.device.clone(),
        ctx.queue.clone(),
        layout.clone(),
        src.to_string(),
        slot.clone(),
    ));
}

/// Load `src` and swap it into `slot`. Never fails, failures are logged.
pub async fn populate_slot(
    device: wgpu::Device,
    queue: wgpu::Queue,
    layout: wgpu::BindGroupLayout,
    src: String,
    slot: TextureSlot,
) {
    match load_texture(&src, &device, &queue).await {
        Ok(texture) => {
            slot.replace(BoundTexture::new(
                &device,
                &layout,
                texture,
                TextureState::Loaded,
                &src,
            ));
            log::info!("Loaded puzzle texture {}", src);
        }
        Err(e) => {
            log::warn!("Texture {} could not be loaded, keeping the placeholder: {:#}", src, e);
            slot.mark(TextureState::Failed);
        }
    }
}
