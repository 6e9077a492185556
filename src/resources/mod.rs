//! Loading of external resources and creation of GPU resources from CPU data.
//!
//! - `texture` fetches the shared puzzle image and fills texture slots
//! - `mesh` uploads built piece meshes into vertex buffers

pub mod mesh;
pub mod texture;

#[cfg(target_arch = "wasm32")]
fn format_url(file_name: &str) -> anyhow::Result<reqwest::Url> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window available"))?;
    let location = window.location();
    let origin = location
        .origin()
        .map_err(|e| anyhow::anyhow!("unable to read the page origin: {:?}", e))?;
    let base = reqwest::Url::parse(&format!("{}/assets/", origin))?;
    Ok(base.join(file_name)?)
}

/// Read an asset: from `./assets/` on native targets, via HTTP relative to `<origin>/assets/` on the web.
pub async fn load_binary(file_name: &str) -> anyhow::Result<Vec<u8>> {
    #[cfg(target_arch = "wasm32")]
    let data = {
        let url = format_url(file_name)?;
        let response = reqwest::get(url).await?.error_for_status()?;
        response.bytes().await?.to_vec()
    };
    #[cfg(not(target_arch = "wasm32"))]
    let data = {
        let path = std::path::Path::new("./").join("assets").join(file_name);
        std::fs::read(&path).map_err(|e| anyhow::anyhow!("unable to read {}: {}", path.display(), e))?
    };

    Ok(data)
}
